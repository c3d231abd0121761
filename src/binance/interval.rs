use std::fmt;

use crate::error::AppError;

/// Kline intervals accepted by the klines endpoint.
pub const VALID_INTERVALS: [&str; 15] = [
    "1m", "3m", "5m", "15m", "30m", "1h", "2h", "4h", "6h", "8h", "12h", "1d", "3d", "1w", "1M",
];

/// A validated kline interval code.
///
/// `1m` (minute) and `1M` (month) are the only case-significant pair and are
/// matched exactly; every other code is accepted in any casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KlineInterval(&'static str);

impl KlineInterval {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let trimmed = s.trim();
        if let Some(code) = VALID_INTERVALS.iter().copied().find(|code| *code == trimmed) {
            return Ok(Self(code));
        }
        let lower = trimmed.to_ascii_lowercase();
        if let Some(code) = VALID_INTERVALS.iter().copied().find(|code| *code == lower) {
            return Ok(Self(code));
        }
        Err(AppError::InvalidInterval {
            value: s.to_string(),
        })
    }

    /// The canonical code sent as the `interval` query parameter.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for KlineInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
