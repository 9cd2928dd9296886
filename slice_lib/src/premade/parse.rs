//! Transfer functions written as text.
//!
//! One control point per line, numbers separated by whitespace.
//! `#` starts a comment, empty lines are skipped.
//!
//! ```text
//! # x     r    g    b
//! 0.0     0.0  1.0  0.0
//! 255.0   0.0  1.0  1.0
//! ```
//!
//! Opacity functions use two numbers per line, `x opacity`.

use nom::{
    character::complete::{space0, space1},
    combinator::all_consuming,
    multi::separated_list1,
    number::complete::float,
    sequence::delimited,
    IResult,
};

use crate::{
    error::{Error, Result},
    transfer_functions::{ColorTransferFunction, PiecewiseFunction},
};

fn number_list(s: &str) -> IResult<&str, Vec<f32>> {
    delimited(space0, separated_list1(space1, float), space0)(s)
}

/// Numbers of every non-empty line, with 1-based line numbers
fn parse_lines(text: &str, columns: usize) -> Result<Vec<(usize, Vec<f32>)>> {
    let mut rows = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split('#').next().unwrap_or("");
        if content.trim().is_empty() {
            continue;
        }

        let (_, values) = all_consuming(number_list)(content).map_err(|_| Error::Parse {
            line,
            message: format!("cannot read numbers from '{}'", content.trim()),
        })?;

        if values.len() != columns {
            return Err(Error::Parse {
                line,
                message: format!("expected {columns} numbers, got {}", values.len()),
            });
        }

        rows.push((line, values));
    }

    Ok(rows)
}

/// Parse lines of `x r g b`
pub fn color_function(text: &str) -> Result<ColorTransferFunction> {
    let mut ctf = ColorTransferFunction::new();
    for (line, v) in parse_lines(text, 4)? {
        ctf.add_rgb_point(v[0], v[1], v[2], v[3])
            .map_err(|e| Error::Parse {
                line,
                message: e.to_string(),
            })?;
    }
    Ok(ctf)
}

/// Parse lines of `x opacity`
pub fn opacity_function(text: &str) -> Result<PiecewiseFunction> {
    let mut pwf = PiecewiseFunction::new();
    for (line, v) in parse_lines(text, 2)? {
        pwf.add_point(v[0], v[1]).map_err(|e| Error::Parse {
            line,
            message: e.to_string(),
        })?;
    }
    Ok(pwf)
}
