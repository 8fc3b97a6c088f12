//! Numeric timestamps as they appear in a recording.
//!
//! Timestamps carry no unit. Integer timestamps stay integers through
//! subtraction, at any width up to `i128`, so that the emitted deltas keep
//! the input's precision.

use serde_json::{Number, Value};

/// A `timeSinceStart` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Timestamp {
    /// An integer literal that fits in `i128`
    Int(i128),
    /// A finite floating point value
    Float(f64),
}

impl Timestamp {
    /// The implicit timestamp preceding the first event.
    pub const ZERO: Timestamp = Timestamp::Int(0);

    /// Read a timestamp from a JSON value. Non-numbers yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        if let Some(i) = number.as_i64() {
            Some(Timestamp::Int(i as i128))
        } else if let Some(u) = number.as_u64() {
            Some(Timestamp::Int(u as i128))
        } else if let Ok(i) = number.to_string().parse::<i128>() {
            Some(Timestamp::Int(i))
        } else {
            number.as_f64().map(Timestamp::Float)
        }
    }

    /// Compute `self - earlier`.
    pub fn delta_since(self, earlier: Timestamp) -> Timestamp {
        match (self, earlier) {
            (Timestamp::Int(a), Timestamp::Int(b)) => match a.checked_sub(b) {
                Some(delta) => Timestamp::Int(delta),
                None => Timestamp::Float(a as f64 - b as f64),
            },
            (a, b) => Timestamp::Float(a.as_f64() - b.as_f64()),
        }
    }

    /// The value as a float, rounding integers that `f64` cannot hold exactly.
    pub fn as_f64(self) -> f64 {
        match self {
            Timestamp::Int(i) => i as f64,
            Timestamp::Float(f) => f,
        }
    }

    /// Whether the value is below zero.
    pub fn is_negative(self) -> bool {
        match self {
            Timestamp::Int(i) => i < 0,
            Timestamp::Float(f) => f < 0.0,
        }
    }

    /// Convert back to a JSON number.
    ///
    /// Integers outside the `i64`/`u64` range are written out from their
    /// decimal text and stay exact. Returns `None` for non-finite floats,
    /// which JSON cannot represent.
    pub fn to_number(self) -> Option<Number> {
        match self {
            Timestamp::Int(i) => {
                if let Ok(v) = i64::try_from(i) {
                    Some(Number::from(v))
                } else if let Ok(v) = u64::try_from(i) {
                    Some(Number::from(v))
                } else {
                    serde_json::from_str(&i.to_string()).ok()
                }
            }
            Timestamp::Float(f) => Number::from_f64(f),
        }
    }
}
