//! # Lookup tables
//!
//! [`LookupTableBuilder`] samples a color function and an optional opacity
//! function into a [`LookupTable`] of RGBA entries.
//! Every setter rebuilds the table before it returns.

use std::sync::Arc;

use log::{debug, trace, warn};

use crate::{
    color::{self, RGBA},
    common::ValueRange,
    error::{Error, Result},
    transfer_functions::{ColorFunction, OpacityFunction},
};

/// Number of entries of a new table
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Range of a table that was never built
pub const DEFAULT_RANGE: ValueRange = ValueRange {
    low: 0.0,
    high: 1.0,
};

/// Uniformly sampled RGBA table.
/// Entry `i` belongs to value `low + i * (high - low) / (len - 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    entries: Vec<RGBA>,
    range: ValueRange,
}

impl LookupTable {
    /// Table of `size` transparent black entries
    fn blank(size: usize) -> LookupTable {
        LookupTable {
            entries: vec![color::zero(); size],
            range: DEFAULT_RANGE,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn entries(&self) -> &[RGBA] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<RGBA> {
        self.entries.get(index).copied()
    }

    /// Sample value the entry at `index` was taken at
    pub fn value_at_index(&self, index: usize) -> f32 {
        sample_value(self.range, index, self.len())
    }

    /// Index of the entry closest to `value`, clamped to the table.
    /// Degenerate range maps everything to the first entry.
    pub fn index_of(&self, value: f32) -> usize {
        let last = self.len().saturating_sub(1);
        let width = self.range.width();
        if last == 0 || width <= 0.0 || value.is_nan() {
            return 0;
        }

        let value = self.range.clamp(value);
        let pos = ((value - self.range.low) * last as f32 / width).round();
        (pos as usize).min(last)
    }

    /// Color of `value`, transparent black for NaN or empty table
    pub fn map_value(&self, value: f32) -> RGBA {
        if value.is_nan() {
            return color::zero();
        }
        self.get(self.index_of(value)).unwrap_or_else(color::zero)
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        LookupTable::blank(DEFAULT_TABLE_SIZE)
    }
}

/// Last entry is pinned to `range.high`, interpolation may round below it
fn sample_value(range: ValueRange, index: usize, size: usize) -> f32 {
    if size < 2 || index == 0 {
        return range.low;
    }
    if index >= size - 1 {
        return range.high;
    }
    range.lerp(index as f32 / (size - 1) as f32)
}

/// Builds a [`LookupTable`] from a color function and an opacity function.
///
/// The functions are shared, not owned. To change a function, set a new one:
/// the table is rebuilt immediately.
///
/// ```
/// # use std::sync::Arc;
/// # use slice_lib::{lut::LookupTableBuilder, transfer_functions::ColorTransferFunction};
/// let mut ctf = ColorTransferFunction::new();
/// ctf.add_rgb_point(0.0, 0.0, 0.0, 0.0).unwrap();
/// ctf.add_rgb_point(1.0, 1.0, 1.0, 1.0).unwrap();
///
/// let mut builder = LookupTableBuilder::new();
/// builder.set_color_function(Some(Arc::new(ctf)));
///
/// let table = builder.table();
/// assert_eq!(table.len(), 256);
/// assert_eq!(table.get(255).unwrap().x, 1.0);
/// ```
pub struct LookupTableBuilder {
    color_function: Option<Arc<dyn ColorFunction>>,
    opacity_function: Option<Arc<dyn OpacityFunction>>,
    table_size: usize,
    table: LookupTable,
}

impl LookupTableBuilder {
    pub fn new() -> LookupTableBuilder {
        LookupTableBuilder {
            color_function: None,
            opacity_function: None,
            table_size: DEFAULT_TABLE_SIZE,
            table: LookupTable::blank(DEFAULT_TABLE_SIZE),
        }
    }

    /// Fails if `size < 2`
    pub fn with_table_size(size: usize) -> Result<LookupTableBuilder> {
        let mut builder = LookupTableBuilder::new();
        builder.set_table_size(size)?;
        Ok(builder)
    }

    pub fn color_function(&self) -> Option<&Arc<dyn ColorFunction>> {
        self.color_function.as_ref()
    }

    pub fn opacity_function(&self) -> Option<&Arc<dyn OpacityFunction>> {
        self.opacity_function.as_ref()
    }

    pub fn table_size(&self) -> usize {
        self.table_size
    }

    /// Current table, entries are zero until a color function is set
    pub fn table(&self) -> &LookupTable {
        &self.table
    }

    /// Replace color function and rebuild.
    /// With `None`, the previous table is kept.
    pub fn set_color_function(&mut self, function: Option<Arc<dyn ColorFunction>>) {
        if same_function(&self.color_function, &function) {
            trace!("Color function unchanged, table kept");
            return;
        }
        self.color_function = function;
        self.build();
    }

    /// Replace opacity function and rebuild.
    /// `None` means opacity 1.0 everywhere.
    pub fn set_opacity_function(&mut self, function: Option<Arc<dyn OpacityFunction>>) {
        if same_function(&self.opacity_function, &function) {
            trace!("Opacity function unchanged, table kept");
            return;
        }
        self.opacity_function = function;
        self.build();
    }

    /// Change number of entries and rebuild.
    /// Sizes below 2 are rejected and nothing changes.
    pub fn set_table_size(&mut self, size: usize) -> Result<()> {
        if size < 2 {
            warn!("Rejected lookup table size {size}");
            return Err(Error::InvalidTableSize(size));
        }
        self.table_size = size;
        self.build();
        Ok(())
    }

    /// Sample functions into the table.
    /// Without a color function, the table is only resized if needed.
    pub fn build(&mut self) {
        let color_function = match &self.color_function {
            Some(f) => f,
            None => {
                if self.table.len() != self.table_size {
                    self.table = LookupTable::blank(self.table_size);
                }
                debug!("No color function, table not sampled");
                return;
            }
        };

        let range = color_function.range();
        let size = self.table_size;

        let entries = (0..size)
            .map(|i| {
                let value = sample_value(range, i, size);
                let rgb = color_function.color_at(value);
                let opacity = self
                    .opacity_function
                    .as_ref()
                    .map_or(1.0, |f| f.opacity_at(value));
                color::with_opacity(rgb, opacity)
            })
            .collect();

        self.table = LookupTable { entries, range };

        debug!(
            "Lookup table rebuilt, {size} entries over <{};{}>",
            range.low, range.high
        );
    }
}

impl Default for LookupTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LookupTableBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTableBuilder")
            .field("color function", &self.color_function.is_some())
            .field("opacity function", &self.opacity_function.is_some())
            .field("table size", &self.table_size)
            .field("range", &self.table.range)
            .finish()
    }
}

fn same_function<T: ?Sized>(current: &Option<Arc<T>>, new: &Option<Arc<T>>) -> bool {
    match (current, new) {
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}
