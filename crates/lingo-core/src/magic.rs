//! Magic-number rules: recognising a file type from a leading byte window.
//!
//! A [`MagicRule`] is an offset plus one of three pattern kinds: a literal
//! byte string, a byte-oriented regex (shebang lines and other textual
//! magic), or a fixed-width unsigned integer with a declared endianness.
//! Probing mimics a small subset of GNU `file`: the window is never read
//! past its end, and a window too short for a rule is simply a non-match.

use std::fmt;

use regex::bytes::Regex as BytesRegex;

/// Endianness and width of a numeric magic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberLayout {
    /// Big-endian `u16` (`">H"` in pack files).
    U16Be,
    /// Little-endian `u16` (`"<H"`).
    U16Le,
    /// Big-endian `u32` (`">L"`).
    U32Be,
    /// Little-endian `u32` (`"<L"`).
    U32Le,
}

impl NumberLayout {
    /// Number of bytes this layout occupies in the window.
    pub fn width(self) -> usize {
        match self {
            NumberLayout::U16Be | NumberLayout::U16Le => 2,
            NumberLayout::U32Be | NumberLayout::U32Le => 4,
        }
    }

    /// Parse a pack-file format string (`">H"`, `"<H"`, `">L"`, `"<L"`).
    ///
    /// Returns `None` for anything else; callers treat that as a malformed
    /// rule to be dropped with a warning.
    pub fn parse(format: &str) -> Option<NumberLayout> {
        match format {
            ">H" => Some(NumberLayout::U16Be),
            "<H" => Some(NumberLayout::U16Le),
            ">L" => Some(NumberLayout::U32Be),
            "<L" => Some(NumberLayout::U32Le),
            _ => None,
        }
    }

    /// Decode `bytes` (which must be exactly [`width`](Self::width) long)
    /// into a widened value.
    fn decode(self, bytes: &[u8]) -> u64 {
        match self {
            NumberLayout::U16Be => u16::from_be_bytes([bytes[0], bytes[1]]) as u64,
            NumberLayout::U16Le => u16::from_le_bytes([bytes[0], bytes[1]]) as u64,
            NumberLayout::U32Be => {
                u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64
            }
            NumberLayout::U32Le => {
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as u64
            }
        }
    }
}

impl fmt::Display for NumberLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NumberLayout::U16Be => ">H",
            NumberLayout::U16Le => "<H",
            NumberLayout::U32Be => ">L",
            NumberLayout::U32Le => "<L",
        })
    }
}

/// One magic-number rule on a [`Descriptor`](crate::Descriptor).
#[derive(Debug, Clone)]
pub enum MagicRule {
    /// Literal bytes at `offset`.
    Bytes { offset: usize, pattern: Vec<u8> },
    /// A byte regex searched in the window from `offset` onward.
    ///
    /// This is the kind used for shebang lines; `\A` in the pattern
    /// anchors at `offset`.
    Regex { offset: usize, pattern: BytesRegex },
    /// A fixed-width unsigned integer decoded at `offset` and compared
    /// against `value`.
    Number {
        offset: usize,
        layout: NumberLayout,
        value: u64,
    },
}

impl MagicRule {
    /// Literal-bytes rule.
    pub fn bytes(offset: usize, pattern: impl Into<Vec<u8>>) -> Self {
        MagicRule::Bytes {
            offset,
            pattern: pattern.into(),
        }
    }

    /// Byte-regex rule. Fails only if the pattern does not compile.
    pub fn regex(offset: usize, pattern: &str) -> Result<Self, regex::Error> {
        Ok(MagicRule::Regex {
            offset,
            pattern: BytesRegex::new(pattern)?,
        })
    }

    /// Numeric rule with the given layout and expected value.
    pub fn number(offset: usize, layout: NumberLayout, value: u64) -> Self {
        MagicRule::Number {
            offset,
            layout,
            value,
        }
    }

    /// Whether this is the regex kind (the only kind consulted by
    /// shebang-only probing).
    pub fn is_regex(&self) -> bool {
        matches!(self, MagicRule::Regex { .. })
    }

    /// Structural match of this rule against a leading byte window.
    ///
    /// A window shorter than the rule's span is a non-match, not an error.
    pub fn matches(&self, head: &[u8]) -> bool {
        match self {
            MagicRule::Bytes { offset, pattern } => {
                match span(head, *offset, pattern.len()) {
                    Some(window) => window == pattern.as_slice(),
                    None => false,
                }
            }
            MagicRule::Regex { offset, pattern } => match head.get(*offset..) {
                Some(window) => pattern.is_match(window),
                None => false,
            },
            MagicRule::Number {
                offset,
                layout,
                value,
            } => match span(head, *offset, layout.width()) {
                Some(window) => layout.decode(window) == *value,
                None => false,
            },
        }
    }
}

/// `head[offset .. offset + len]`, or `None` when the window is too short
/// (or the span overflows `usize`).
fn span(head: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    head.get(offset..end)
}
