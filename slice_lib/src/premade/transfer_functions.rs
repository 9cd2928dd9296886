use crate::{
    common::ValueRange,
    transfer_functions::{ColorTransferFunction, PiecewiseFunction},
};

// x R G B -- channels <0;1>
// CT samples, values <0;4458>
pub fn ct_color() -> ColorTransferFunction {
    ColorTransferFunction::from_points(&[
        (0.0, 0.0, 1.0, 0.0),
        (255.0, 0.0, 1.0, 1.0),
        (1096.0, 0.7, 0.015, 0.15),
        (2777.0, 0.86, 0.86, 0.86),
        (4458.0, 0.23, 0.3, 0.75),
    ])
}

// Opacity for volume rendering
pub fn ct_opacity() -> PiecewiseFunction {
    PiecewiseFunction::from_points(&[(0.0, 0.0), (255.0, 1.0), (1096.0, 0.0), (4458.0, 1.0)])
}

// Opacity for slices, hides everything below 3900
pub fn slice_opacity() -> PiecewiseFunction {
    PiecewiseFunction::from_points(&[
        (1096.0, 0.0),
        (3900.0, 0.0),
        (3900.0, 1.0),
        (4458.0, 1.0),
    ])
}

// Black to white over `range`
pub fn gray_ramp(range: ValueRange) -> ColorTransferFunction {
    ColorTransferFunction::from_points(&[
        (range.low, 0.0, 0.0, 0.0),
        (range.high, 1.0, 1.0, 1.0),
    ])
}
