// Some prebuilt transfer functions for CT data used in development,
// and a parser for transfer functions written as text.
// Datasets differ a lot, a user should
// write their own to satisfy their needs.

pub mod parse;
pub mod transfer_functions;
