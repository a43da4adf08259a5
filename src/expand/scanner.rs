//! Marker scanner.
//!
//! Markers look like `(@name@)`. The scanner walks the text once, left to
//! right, and recognizes exactly two token shapes: the opening token `(@` and
//! the closing token `@)`. Tokens never overlap, so `(@)` is an opening token
//! followed by a lone `)`.

/// Opening token of a marker.
pub const OPEN_TOKEN: &str = "(@";

/// Closing token of a marker.
pub const CLOSE_TOKEN: &str = "@)";

/// Result of scanning for the next marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerScan {
    /// A complete marker. Offsets are byte offsets of the two tokens.
    Span { open: usize, close: usize },
    /// An opening token with no closing token anywhere after it.
    Unterminated { open: usize },
    /// A closing token that appears before the first opening token.
    StrayClose { close: usize, open: usize },
}

impl MarkerScan {
    /// Byte offset of the opening token.
    pub fn open(&self) -> usize {
        match *self {
            MarkerScan::Span { open, .. }
            | MarkerScan::Unterminated { open }
            | MarkerScan::StrayClose { open, .. } => open,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Open(usize),
    Close(usize),
}

/// Find the next token at or after `from`.
fn next_token(text: &str, from: usize) -> Option<Token> {
    let bytes = text.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'(', b'@') => return Some(Token::Open(i)),
            (b'@', b')') => return Some(Token::Close(i)),
            _ => i += 1,
        }
    }
    None
}

/// Find the next closing token at or after `from`, ignoring opening tokens.
fn next_close(text: &str, from: usize) -> Option<usize> {
    text.get(from..)?.find(CLOSE_TOKEN).map(|pos| from + pos)
}

/// Locate the next marker in `text`.
///
/// Returns `None` only when `text` has no opening token. A closing token
/// that shows up before the first opening token is reported as
/// [`MarkerScan::StrayClose`]; an opening token with nothing to close it is
/// reported as [`MarkerScan::Unterminated`]. Opening tokens between the two
/// ends of a span become part of the directive name.
pub fn find_next_marker(text: &str) -> Option<MarkerScan> {
    let mut from = 0;
    let mut stray = None;

    loop {
        match next_token(text, from)? {
            Token::Open(open) => {
                if let Some(close) = stray {
                    return Some(MarkerScan::StrayClose { close, open });
                }
                let scan = match next_close(text, open + OPEN_TOKEN.len()) {
                    Some(close) => MarkerScan::Span { open, close },
                    None => MarkerScan::Unterminated { open },
                };
                return Some(scan);
            }
            Token::Close(close) => {
                // Only a problem if an opening token follows.
                stray.get_or_insert(close);
                from = close + CLOSE_TOKEN.len();
            }
        }
    }
}
