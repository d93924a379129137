use std::path::{Path, PathBuf};

use self::lines::{pair_lines, split_lines};
use self::mapping::DocMapping;

/// Splits text into lines and groups them into mnemonic/description pairs.
pub mod lines;

/// Ordered mnemonic to description mapping.
pub mod mapping;

/// JSON rendering of a mapping.
pub mod output;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Unable to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Unable to serialize documentation: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Invalid documentation JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Documentation JSON is not an object")]
    NotAnObject,
    #[error("Documentation for '{key}' is not a string")]
    NonStringValue { key: String },
}

/// Builds the documentation mapping from text with alternating mnemonic and description lines.
///
/// The steps are:
/// 1. **Splitting** - the text is split on line boundaries
/// 2. **Pairing** - lines are grouped two at a time, a trailing unpaired line is dropped
/// 3. **Mapping** - pairs are inserted in order, later duplicates overwrite earlier ones
#[tracing::instrument(skip(input))]
pub fn convert_str(input: &str) -> DocMapping {
    let lines = split_lines(input);
    tracing::debug!(lines = lines.len(), "split input");

    DocMapping::from_pairs(pair_lines(&lines))
}

/// Reads the file at `path` and converts its contents.
///
/// The file is read to completion and closed before the conversion starts.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn convert_file(path: impl AsRef<Path>) -> Result<DocMapping, ConvertError> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(convert_str(&input))
}
