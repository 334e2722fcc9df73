//! Runtime values for the expression evaluator.
//!
//! Declares the `Value` enum and the arithmetic and comparison methods on
//! it. Rendering matches the language the scripts were written against:
//! booleans as `True`/`False` and whole floats with a trailing `.0`.

use crate::error::EvalError;
use std::cmp::Ordering;
use std::fmt;

/// A runtime value produced by evaluating a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// String (no escape processing anywhere in the language).
    Str(String),
    /// Boolean.
    Bool(bool),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => {
                // Whole floats keep a trailing .0 so `4/2` reads as `2.0`.
                if v.is_finite() && v.fract() == 0.0 {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Self::Str(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{}", if *v { "True" } else { "False" }),
        }
    }
}

impl Value {
    /// Short type name used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bool(_) => "bool",
        }
    }

    fn mismatch(op: &str, lhs: &Self, rhs: &Self) -> EvalError {
        EvalError::TypeMismatch {
            op: op.to_string(),
            lhs: lhs.type_name().to_string(),
            rhs: rhs.type_name().to_string(),
        }
    }

    /// Addition; concatenation when both operands are strings.
    pub fn add(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_add(b).map(Self::Int).ok_or(EvalError::Overflow)
            }
            (Self::Str(a), Self::Str(b)) => Ok(Self::Str(a + &b)),
            (a, b) => match Self::promote(&a, &b) {
                Some((x, y)) => Ok(Self::Float(x + y)),
                None => Err(Self::mismatch("+", &a, &b)),
            },
        }
    }

    /// Subtraction.
    pub fn sub(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_sub(b).map(Self::Int).ok_or(EvalError::Overflow)
            }
            (a, b) => match Self::promote(&a, &b) {
                Some((x, y)) => Ok(Self::Float(x - y)),
                None => Err(Self::mismatch("-", &a, &b)),
            },
        }
    }

    /// Multiplication.
    pub fn mul(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => {
                a.checked_mul(b).map(Self::Int).ok_or(EvalError::Overflow)
            }
            (a, b) => match Self::promote(&a, &b) {
                Some((x, y)) => Ok(Self::Float(x * y)),
                None => Err(Self::mismatch("*", &a, &b)),
            },
        }
    }

    /// True division: always yields a float, even for two integers.
    pub fn div(self, rhs: Self) -> Result<Self, EvalError> {
        match Self::promote(&self, &rhs) {
            Some((_, y)) if y == 0.0 => Err(EvalError::DivisionByZero),
            Some((x, y)) => Ok(Self::Float(x / y)),
            None => Err(Self::mismatch("/", &self, &rhs)),
        }
    }

    /// Modulo; the result takes the sign of the divisor.
    pub fn rem(self, rhs: Self) -> Result<Self, EvalError> {
        match (self, rhs) {
            (Self::Int(_), Self::Int(0)) => Err(EvalError::DivisionByZero),
            (Self::Int(a), Self::Int(b)) => {
                // i64::MIN % -1 is the one overflowing case.
                let r = a.checked_rem(b).ok_or(EvalError::Overflow)?;
                Ok(Self::Int(if r != 0 && (r < 0) != (b < 0) {
                    r + b
                } else {
                    r
                }))
            }
            (a, b) => match Self::promote(&a, &b) {
                Some((_, y)) if y == 0.0 => Err(EvalError::DivisionByZero),
                Some((x, y)) => Ok(Self::Float(((x % y) + y) % y)),
                None => Err(Self::mismatch("%", &a, &b)),
            },
        }
    }

    /// Unary negation.
    pub fn neg(self) -> Result<Self, EvalError> {
        match self {
            Self::Int(v) => v.checked_neg().map(Self::Int).ok_or(EvalError::Overflow),
            Self::Float(v) => Ok(Self::Float(-v)),
            other => Err(EvalError::InvalidOperand {
                op: "-".to_string(),
                operand: other.type_name().to_string(),
            }),
        }
    }

    /// Equality: same-type values compare directly, mixed numeric types
    /// compare numerically, anything else is simply not equal.
    #[must_use]
    pub fn eq_value(&self, rhs: &Self) -> bool {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => match Self::promote(self, rhs) {
                Some((x, y)) => x == y,
                None => false,
            },
        }
    }

    /// Ordering for the relational operators: numbers numerically,
    /// strings lexicographically. Anything else is a type mismatch.
    pub fn compare(&self, op: &str, rhs: &Self) -> Result<Ordering, EvalError> {
        if let (Self::Str(a), Self::Str(b)) = (self, rhs) {
            return Ok(a.cmp(b));
        }
        match Self::promote(self, rhs) {
            Some((x, y)) => x
                .partial_cmp(&y)
                .ok_or_else(|| Self::mismatch(op, self, rhs)),
            None => Err(Self::mismatch(op, self, rhs)),
        }
    }

    /// Numeric promotion: both operands as floats, if both are numbers.
    #[allow(clippy::cast_precision_loss)]
    fn promote(lhs: &Self, rhs: &Self) -> Option<(f64, f64)> {
        let as_float = |v: &Self| match v {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        };
        Some((as_float(lhs)?, as_float(rhs)?))
    }
}
