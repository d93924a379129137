/// Converts instruction documentation text into a JSON object.
///
/// The input alternates a mnemonic line with a description line:
///
/// ```text
/// LDA
/// Load Accumulator
/// STA
/// Store Accumulator
/// ```
///
/// which is converted into `{"LDA": "Load Accumulator", "STA": "Store Accumulator"}`.
pub mod converter;

/// Chrome tracing setup
pub mod instrumentation;

pub use converter::{
    convert_file, convert_str, mapping::DocMapping, output::OutputStyle, ConvertError,
};
