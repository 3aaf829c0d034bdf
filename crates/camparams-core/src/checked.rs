//! Strict, `Result`-returning accessors layered over [`CameraParameters`].
//!
//! The plain accessors never fail: they drop bad writes and read malformed
//! values leniently. The methods here report those cases instead.

use thiserror::Error;

use crate::{has_separator, strconv, CameraParameters, Size};

/// Error type produced by the strict parameter accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The key contains `=` or `;`.
    #[error("invalid parameter key: {0:?}")]
    InvalidKey(String),
    /// The value contains `=` or `;`.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    /// The key is absent or its value is empty.
    #[error("parameter not set: {0}")]
    Missing(String),
    /// The stored text does not decode as the requested type.
    #[error("malformed value for {key}: {value:?}")]
    Malformed { key: String, value: String },
}

impl CameraParameters {
    /// Like [`set`](Self::set) but reports rejected keys and values.
    pub fn try_set(&mut self, key: &str, value: &str) -> Result<(), ParamError> {
        if has_separator(key) {
            return Err(ParamError::InvalidKey(key.to_string()));
        }
        if has_separator(value) {
            return Err(ParamError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        self.set(key, value);
        Ok(())
    }

    fn require(&self, key: &str) -> Result<&str, ParamError> {
        self.get(key)
            .ok_or_else(|| ParamError::Missing(key.to_string()))
    }

    /// Integer value that must consist of a single in-range integer with
    /// `0x` / leading-zero base detection and nothing after it.
    pub fn try_get_int(&self, key: &str) -> Result<i32, ParamError> {
        let text = self.require(key)?;
        let (value, used) = strconv::parse_long(text, 0);
        if used == 0 || used != text.len() {
            return Err(malformed(key, text));
        }
        i32::try_from(value).map_err(|_| malformed(key, text))
    }

    /// Float value that must be fully consumed by the float scanner.
    pub fn try_get_float(&self, key: &str) -> Result<f32, ParamError> {
        let text = self.require(key)?;
        match strconv::parse_float(text) {
            (value, used) if used > 0 && used == text.len() => Ok(value),
            _ => Err(malformed(key, text)),
        }
    }

    /// `WxH` size with both dimensions present and no trailing text.
    pub fn try_size(&self, key: &str) -> Result<Size, ParamError> {
        let text = self.require(key)?;
        let dimension = |part: &str| -> Option<i32> {
            let (value, used) = strconv::parse_long(part, 10);
            if used == 0 || used != part.len() {
                return None;
            }
            i32::try_from(value).ok()
        };
        text.split_once('x')
            .and_then(|(width, height)| Some(Size::new(dimension(width)?, dimension(height)?)))
            .ok_or_else(|| malformed(key, text))
    }
}

fn malformed(key: &str, text: &str) -> ParamError {
    ParamError::Malformed {
        key: key.to_string(),
        value: text.to_string(),
    }
}
