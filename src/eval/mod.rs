//! Expression evaluation for statement payloads.
//!
//! A narrow, closed grammar: arithmetic, literals, and simple comparisons,
//! scanned by a hand lexer and parsed by recursive descent. Every failure
//! mode is a variant of [`EvalError`](crate::error::EvalError); nothing
//! here can run code.

mod lexer;
mod parser;
mod value;

pub use value::Value;

use crate::error::EvalError;
use parser::{BinaryOp, Expr};
use unicode_segmentation::UnicodeSegmentation;

/// Evaluates a payload to a value.
///
/// The evaluation environment is empty every time: no state carries over
/// between payloads, and an identifier always fails with a name-not-found
/// error.
///
/// # Examples
///
/// ```
/// use vipl_rs::eval::evaluate;
///
/// assert_eq!(evaluate("2+2").unwrap().to_string(), "4");
/// assert_eq!(evaluate("10 > 3").unwrap().to_string(), "True");
/// ```
///
/// # Errors
///
/// Returns a variant of the closed evaluator error set.
pub fn evaluate(payload: &str) -> Result<Value, EvalError> {
    let tokens = lexer::tokenize(payload)?;
    if tokens.is_empty() {
        return Err(EvalError::UnexpectedEnd);
    }
    let expr = parser::parse(&tokens, payload)?;
    eval_expr(&expr)
}

fn eval_expr(expr: &Expr) -> Result<Value, EvalError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Name(name) => Err(EvalError::UnknownName { name: name.clone() }),
        Expr::Neg(operand) => eval_expr(operand)?.neg(),
        Expr::Binary { op, lhs, rhs } => {
            let lhs = eval_expr(lhs)?;
            let rhs = eval_expr(rhs)?;
            apply(*op, lhs, rhs)
        }
    }
}

fn apply(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
    use std::cmp::Ordering;
    match op {
        BinaryOp::Add => lhs.add(rhs),
        BinaryOp::Sub => lhs.sub(rhs),
        BinaryOp::Mul => lhs.mul(rhs),
        BinaryOp::Div => lhs.div(rhs),
        BinaryOp::Rem => lhs.rem(rhs),
        BinaryOp::Eq => Ok(Value::Bool(lhs.eq_value(&rhs))),
        BinaryOp::Ne => Ok(Value::Bool(!lhs.eq_value(&rhs))),
        BinaryOp::Lt => Ok(Value::Bool(lhs.compare("<", &rhs)? == Ordering::Less)),
        BinaryOp::Le => Ok(Value::Bool(lhs.compare("<=", &rhs)? != Ordering::Greater)),
        BinaryOp::Gt => Ok(Value::Bool(lhs.compare(">", &rhs)? == Ordering::Greater)),
        BinaryOp::Ge => Ok(Value::Bool(lhs.compare(">=", &rhs)? != Ordering::Less)),
    }
}

/// 1-based grapheme-cluster column of a byte offset in the payload.
///
/// The language's own keyword is non-ASCII, so byte offsets would point
/// users at the wrong spot in any line that contains Vietnamese text.
pub(crate) fn column_at(src: &str, byte_offset: usize) -> usize {
    src[..byte_offset].graphemes(true).count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2+2", "4"; "integer addition")]
    #[test_case("2*3+1", "7"; "precedence")]
    #[test_case("(1+2)*3", "9"; "parens")]
    #[test_case("-5+2", "-3"; "unary minus")]
    #[test_case("10/4", "2.5"; "true division")]
    #[test_case("4/2", "2.0"; "whole division still floats")]
    #[test_case("7%3", "1"; "modulo")]
    #[test_case("-7%3", "2"; "modulo divisor sign")]
    #[test_case("1.5+1.5", "3.0"; "float addition")]
    #[test_case("10>3", "True"; "greater than")]
    #[test_case("1==2", "False"; "equality")]
    #[test_case("1!=2", "True"; "inequality")]
    #[test_case("2<=2", "True"; "less or equal")]
    #[test_case("\"a\"+\"b\"", "ab"; "string concat")]
    #[test_case("\"a\"<\"b\"", "True"; "string ordering")]
    #[test_case("True==True", "True"; "boolean equality")]
    #[test_case("1==1.0", "True"; "mixed numeric equality")]
    fn test_evaluate(payload: &str, expected: &str) {
        assert_eq!(evaluate(payload).unwrap().to_string(), expected);
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            evaluate("x"),
            Err(EvalError::UnknownName {
                name: "x".to_string()
            })
        );
    }

    #[test]
    fn test_names_never_persist_between_payloads() {
        // The environment is fresh each time; nothing a payload does can
        // make a later name resolve.
        let _ = evaluate("1+1");
        assert!(matches!(
            evaluate("x"),
            Err(EvalError::UnknownName { .. })
        ));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("1/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5%0"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_malformed_literal_is_conversion_class() {
        let err = evaluate("1.2.3").unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(evaluate(""), Err(EvalError::UnexpectedEnd));
        assert_eq!(evaluate("   "), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_column_at() {
        assert_eq!(column_at("abc", 0), 1);
        assert_eq!(column_at("abc", 2), 3);
        // "màn" is three graphemes however many bytes it takes.
        let src = "màn+1";
        let plus = src.find('+').unwrap();
        assert_eq!(column_at(src, plus), 4);
    }
}
