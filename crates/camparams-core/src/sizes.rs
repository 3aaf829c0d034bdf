//! Decoding of `"WxH"` sizes, `"a,b"` ranges and comma separated size lists.

use std::fmt;

use thiserror::Error;
use tracing::error;

use crate::strconv;

/// Image or frame dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Returned by size getters when the key is absent or malformed.
    pub const UNSET: Size = Size {
        width: -1,
        height: -1,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size {
    fn from((width, height): (i32, i32)) -> Self {
        Size::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Failure to decode a delimited integer pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("missing '{delim}' after first integer in {text:?}")]
    MissingDelimiter { delim: char, text: String },
}

/// Parse two base-10 integers separated by exactly `delim`, as in
/// `"640x480"` or `"15000,30000"`.
///
/// The delimiter must immediately follow the first integer. On success the
/// third element is the byte offset just past the second integer, so callers
/// can keep scanning.
pub fn parse_pair(text: &str, delim: char) -> Result<(i32, i32, usize), PairError> {
    let (first, used) = strconv::parse_int(text, 10);
    if !text[used..].starts_with(delim) {
        error!(%delim, text, "cannot find delimiter");
        return Err(PairError::MissingDelimiter {
            delim,
            text: text.to_string(),
        });
    }
    let second_start = used + delim.len_utf8();
    let (second, used) = strconv::parse_int(&text[second_start..], 10);
    Ok((first, second, second_start + used))
}

/// Decode a `"WxH,WxH,..."` list.
///
/// Parsing stops at the first malformed entry; sizes decoded before it are
/// kept.
pub fn parse_sizes_list(text: &str) -> Vec<Size> {
    let mut sizes = Vec::new();
    let mut pos = 0;
    loop {
        let Ok((width, height, used)) = parse_pair(&text[pos..], 'x') else {
            error!(sizes = text, "size list contains invalid character");
            return sizes;
        };
        pos += used;
        match text.as_bytes().get(pos) {
            None => {
                sizes.push(Size::new(width, height));
                return sizes;
            }
            Some(b',') => {
                sizes.push(Size::new(width, height));
                pos += 1;
            }
            Some(_) => {
                error!(sizes = text, "size list contains invalid character");
                return sizes;
            }
        }
    }
}
