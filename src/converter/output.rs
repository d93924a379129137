use std::io;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};

use super::{mapping::DocMapping, ConvertError};

/// Layout of the generated JSON text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputStyle {
    /// Single line, `", "` between entries and `": "` after keys, non-ASCII text as `\u` escapes
    #[default]
    Spaced,
    /// Single line without any whitespace, UTF-8 text written as is
    Compact,
    /// Indented, one entry per line, UTF-8 text written as is
    Pretty,
}

/// Single line formatter that separates entries with `", "` and keys from values with `": "`.
///
/// Characters outside ASCII are written as `\uXXXX` escapes, using surrogate pairs above the
/// Basic Multilingual Plane, so the output is plain ASCII.
#[derive(Debug, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (ix, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..ix].as_bytes())?;
            let mut units = [0; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = ix + ch.len_utf8();
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}

fn write_with<F: Formatter>(mapping: &DocMapping, formatter: F) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    mapping
        .entries()
        .serialize(&mut serializer)
        .map_err(ConvertError::Serialize)?;

    Ok(buf)
}

impl DocMapping {
    /// Render the mapping as a JSON object, keys in insertion order.
    #[tracing::instrument(skip(self), fields(entries = self.len()))]
    pub fn to_json(&self, style: OutputStyle) -> Result<String, ConvertError> {
        let buf = match style {
            OutputStyle::Spaced => write_with(self, SpacedFormatter)?,
            OutputStyle::Compact => write_with(self, CompactFormatter)?,
            OutputStyle::Pretty => write_with(self, PrettyFormatter::new())?,
        };

        // serde_json only ever writes valid UTF-8
        String::from_utf8(buf).map_err(|err| {
            ConvertError::Serialize(serde::ser::Error::custom(err.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::convert_str;

    use pretty_assertions::assert_eq;

    const INPUT: &str = "LDA\nLoad Accumulator\nSTA\nStore Accumulator\n";

    #[test]
    fn test_to_json_styles() {
        let docs = convert_str(INPUT);
        let tests = vec![
            (
                OutputStyle::Spaced,
                r#"{"LDA": "Load Accumulator", "STA": "Store Accumulator"}"#,
            ),
            (
                OutputStyle::Compact,
                r#"{"LDA":"Load Accumulator","STA":"Store Accumulator"}"#,
            ),
            (
                OutputStyle::Pretty,
                "{\n  \"LDA\": \"Load Accumulator\",\n  \"STA\": \"Store Accumulator\"\n}",
            ),
        ];

        for (style, expected) in tests {
            assert_eq!(docs.to_json(style).unwrap(), expected);
        }
    }

    #[test]
    fn test_to_json_escapes_strings() {
        let docs = convert_str("BIT\nTest \"Bits\" in A\\Memory\nROR\nRotate → right\n");
        assert_eq!(
            docs.to_json(OutputStyle::Spaced).unwrap(),
            r#"{"BIT": "Test \"Bits\" in A\\Memory", "ROR": "Rotate \u2192 right"}"#
        );
        assert_eq!(
            docs.to_json(OutputStyle::Compact).unwrap(),
            r#"{"BIT":"Test \"Bits\" in A\\Memory","ROR":"Rotate → right"}"#
        );
    }

    #[test]
    fn test_spaced_output_is_ascii() {
        let docs = convert_str("Café\nÉtat 😀\u{7f}\tend\n");
        let json = docs.to_json(OutputStyle::Spaced).unwrap();

        assert_eq!(
            json,
            "{\"Caf\\u00e9\": \"\\u00c9tat \\ud83d\\ude00\u{7f}\\tend\"}"
        );
        assert!(json.is_ascii());
        assert_eq!(DocMapping::from_json(&json).unwrap(), docs);
    }

    #[test]
    fn test_to_json_parses_back() {
        let docs = convert_str(INPUT);
        for style in [OutputStyle::Spaced, OutputStyle::Compact, OutputStyle::Pretty] {
            let json = docs.to_json(style).unwrap();
            assert_eq!(DocMapping::from_json(&json).unwrap(), docs);
        }
    }

    #[test]
    fn test_empty_mapping() {
        let docs = DocMapping::new();
        assert_eq!(docs.to_json(OutputStyle::Spaced).unwrap(), "{}");
        assert_eq!(docs.to_json(OutputStyle::Compact).unwrap(), "{}");
        assert_eq!(docs.to_json(OutputStyle::Pretty).unwrap(), "{}");
    }
}
