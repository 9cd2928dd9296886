//! Argument parsing and validation
//! Uses library `clap`

use clap::{Arg, Command};

// up to 32bit value
pub fn is_positive_number(num: &str) -> Result<(), String> {
    let n = num.parse::<u32>();
    match n {
        Ok(n) => {
            if n > 0 {
                Ok(())
            } else {
                Err("Number must be greater than 0".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_table_size(num: &str) -> Result<(), String> {
    match num.parse::<usize>() {
        Ok(n) if n >= 2 => Ok(()),
        Ok(_) => Err("Table needs at least 2 colors".into()),
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_float_number(num: &str) -> Result<(), String> {
    let n = num.parse::<f32>();
    match n {
        Ok(n) => {
            if n.is_finite() {
                Ok(())
            } else {
                Err("Finite number required".into())
            }
        }
        Err(_) => Err("Number required".into()),
    }
}

pub fn is_positive_float(num: &str) -> Result<(), String> {
    is_float_number(num)?;
    match num.parse::<f32>() {
        Ok(n) if n > 0.0 => Ok(()),
        _ => Err("Number must be greater than 0.0".into()),
    }
}

pub const GENERATOR_NAMES: &[&str] = &["shapes", "noise", "solid"];

pub fn get_command<'a>() -> Command<'a> {
    Command::new("Slice-demo")
        .version("0.1.0")
        .about("Masks a generated volume with a cylinder, slices it and colors the slice")
        .arg(
            Arg::new("dims")
                .help("Dimensions of volume")
                .long("dims")
                .short('d')
                .number_of_values(3)
                .value_names(&["X", "Y", "Z"])
                .use_value_delimiter(true)
                .require_value_delimiter(true)
                .require_equals(true)
                .default_values(&["64", "64", "64"])
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("generator")
                .help("Type of generator")
                .long("generator")
                .short('g')
                .takes_value(true)
                .value_name("NAME")
                .default_value("shapes")
                .possible_values(GENERATOR_NAMES),
        )
        .arg(
            Arg::new("seed")
                .help("Seed for RNG, leave out for random seed")
                .long("seed")
                .takes_value(true)
                .value_name("SEED")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("sample")
                .help("Value of generated objects")
                .long("sample")
                .takes_value(true)
                .value_name("VALUE")
                .default_value("4200")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("n-of-shapes")
                .help("Number of shapes generated in volume")
                .long("n-of-shapes")
                .takes_value(true)
                .value_name("N")
                .default_value("8")
                .validator(is_positive_number),
        )
        .arg(
            Arg::new("radius")
                .help("Radius of the cylindrical mask, defaults to half of volume width minus 5")
                .long("radius")
                .short('r')
                .takes_value(true)
                .value_name("R")
                .validator(is_positive_float),
        )
        .arg(
            Arg::new("slice-z")
                .help("Z coordinate of the slice, defaults to volume center")
                .long("slice-z")
                .short('z')
                .takes_value(true)
                .value_name("Z")
                .validator(is_float_number),
        )
        .arg(
            Arg::new("colors")
                .help("Number of colors in the lookup table")
                .long("colors")
                .short('c')
                .takes_value(true)
                .value_name("N")
                .default_value("256")
                .validator(is_table_size),
        )
}
