//! Default player parameters
//!
//! Default tables are static slices of `(key, ParamDefault)`. A table entry
//! of [`ParamDefault::Omit`] documents a parameter the player understands
//! but which stays unset unless the user supplies it.

use crate::query::{number_from_f64, ParamValue, QueryParams};

/// Default value for a single parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDefault {
    /// No default; the key stays unset
    Omit,
    /// String default
    Str(&'static str),
    /// Boolean default
    Flag(bool),
    /// Number default
    Number(f64),
    /// Number-list default
    Numbers(&'static [f64]),
}

impl ParamDefault {
    /// Convert to a parameter value, `None` for [`ParamDefault::Omit`]
    pub fn to_value(self) -> Option<ParamValue> {
        match self {
            Self::Omit => None,
            Self::Str(s) => Some(ParamValue::Str(s.to_string())),
            Self::Flag(b) => Some(ParamValue::Bool(b)),
            Self::Number(n) => Some(ParamValue::from_f64(n)),
            Self::Numbers(numbers) => Some(ParamValue::Numbers(
                numbers.iter().copied().map(number_from_f64).collect(),
            )),
        }
    }
}

/// A static table of parameter defaults
pub type DefaultTable = [(&'static str, ParamDefault)];

/// Merge `defaults` into a copy of `params`
///
/// Keys already present in `params` are never overwritten. Missing keys get
/// their default appended in table order, except [`ParamDefault::Omit`]
/// entries which are skipped.
pub fn apply_defaults(params: &QueryParams, defaults: &DefaultTable) -> QueryParams {
    let mut merged = params.clone();

    for (key, default) in defaults {
        if merged.contains_key(*key) {
            continue;
        }
        if let Some(value) = default.to_value() {
            merged.insert((*key).to_string(), value);
        }
    }

    merged
}
