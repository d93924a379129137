/// A mnemonic and the description on the line following it.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Pair<'a> {
    pub mnemonic: &'a str,
    pub description: &'a str,
}

impl<'a> Pair<'a> {
    pub fn new(mnemonic: &'a str, description: &'a str) -> Self {
        Self {
            mnemonic,
            description,
        }
    }
}

const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split text on line boundaries.
///
/// `\r\n` is a single boundary, as are a lone `\r` or `\n`, the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph separators. A terminator at
/// the end of the text does not produce a trailing empty line, so `"LDA\n"` yields `["LDA"]` while
/// `"LDA\n\n"` yields `["LDA", ""]`.
pub fn split_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = input;

    while let Some(ix) = rest.find(LINE_BREAKS) {
        lines.push(&rest[..ix]);
        let terminator = &rest[ix..];
        let terminator_len = if terminator.starts_with("\r\n") {
            2
        } else {
            terminator.chars().next().map_or(1, char::len_utf8)
        };
        rest = &rest[ix + terminator_len..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }

    lines
}

/// Group lines at index (0, 1), (2, 3), ... into pairs.
///
/// A final line without a partner is dropped.
#[tracing::instrument(skip_all, fields(lines = lines.len()))]
pub fn pair_lines<'a>(lines: &'a [&'a str]) -> impl Iterator<Item = Pair<'a>> + 'a {
    let chunks = lines.chunks_exact(2);
    if let [unpaired] = chunks.remainder() {
        tracing::debug!(line = *unpaired, "dropping unpaired trailing line");
    }

    chunks.map(|pair| Pair::new(pair[0], pair[1]))
}
