//! Field-level validation for form input.
//!
//! A [`Validatable`] pairs a value with an optional set of constraints. String
//! length constraints only apply to text values and numeric bounds only apply
//! to numbers; a constraint that does not match the value's type is skipped.

use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Coerces raw input the way a unary plus would: blank input is zero,
    /// anything that is not a decimal number is NaN.
    pub fn numeric(raw: &str) -> FieldValue {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Number(0.0);
        }
        FieldValue::Number(trimmed.parse::<f64>().unwrap_or(f64::NAN))
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(num) => Some(*num),
            FieldValue::Text(_) => None,
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Number(num) => write!(f, "{}", num),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: Option<bool>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub integral: Option<bool>,
}

impl Validatable {
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: None,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            integral: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    pub fn length(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = Some(min_length);
        self.max_length = Some(max_length);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn integral(mut self) -> Self {
        self.integral = Some(true);
        self
    }
}

/// Returns true when the value satisfies every constraint present.
pub fn validate(input: &Validatable) -> bool {
    let mut valid = true;
    if input.required == Some(true) {
        valid = valid && !input.value.to_string().trim().is_empty();
    }
    match &input.value {
        FieldValue::Text(text) => {
            // lengths count characters, not bytes
            let len = text.chars().count();
            if let Some(min_length) = input.min_length {
                valid = valid && len >= min_length;
            }
            if let Some(max_length) = input.max_length {
                valid = valid && len <= max_length;
            }
        }
        FieldValue::Number(num) => {
            if let Some(min) = input.min {
                valid = valid && *num >= min;
            }
            if let Some(max) = input.max {
                valid = valid && *num <= max;
            }
            if input.integral == Some(true) {
                valid = valid && num.is_finite() && num.fract() == 0.0;
            }
        }
    }
    valid
}
