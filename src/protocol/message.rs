//! Structural validation of decoded WAMP messages.
//!
//! Every received message is checked here before a type-specific handler
//! reads any field. A wrong type code means the dispatcher routed the message
//! to the wrong handler (a local bug); a wrong arity means the peer sent a
//! malformed message (a protocol violation that aborts the session).

use crate::core::value::Value;
use crate::error::{constants, Error, ProtocolError, Result};
use tracing::{error, warn};

/// Check that `message` is of type `expected_type` and has between `min_len`
/// and `max_len` elements (inclusive).
///
/// # Errors
/// - [`Error::Invariant`] for an empty message, a non-integer type code or a
///   type code other than `expected_type`
/// - [`ProtocolError::InvalidMessageLength`] when the length is out of bounds
pub fn validate_range(
    message: &[Value],
    expected_type: i64,
    name: &str,
    min_len: usize,
    max_len: usize,
) -> Result<()> {
    let first = match message.first() {
        Some(first) => first,
        None => {
            error!(name, "{}", constants::ERR_EMPTY_MESSAGE);
            return Err(Error::Invariant(constants::ERR_EMPTY_MESSAGE.to_string()));
        }
    };

    let code = match first {
        Value::Int(code) => *code,
        other => {
            error!(name, found = other.type_name(), "{}", constants::ERR_TYPE_NOT_INTEGER);
            return Err(Error::Invariant(format!(
                "{} (found {} for {name})",
                constants::ERR_TYPE_NOT_INTEGER,
                other.type_name()
            )));
        }
    };

    if code != expected_type {
        error!(name, code, expected_type, "message routed to wrong handler");
        return Err(Error::Invariant(format!(
            "Message type {code} does not match expected type {expected_type} for {name}"
        )));
    }

    let length = message.len();
    if length < min_len || length > max_len {
        warn!(name, length, min_len, max_len, "invalid message length");
        return Err(ProtocolError::InvalidMessageLength {
            length,
            name: name.to_string(),
        }
        .into());
    }

    Ok(())
}

/// [`validate_range`] with an exact expected length.
pub fn validate_exact(message: &[Value], expected_type: i64, name: &str, length: usize) -> Result<()> {
    validate_range(message, expected_type, name, length, length)
}

/// Lenient integer coercion for optional numeric fields.
///
/// Integers come back unchanged; `Null` and every other kind of value yield 0
/// so that a lax peer omitting or mistyping a non-critical field does not
/// abort the session.
pub fn parse_number(value: &Value) -> i64 {
    match value {
        Value::Int(n) => *n,
        _ => 0,
    }
}

/// [`parse_number`] over an optional trailing element, e.g. `message.get(4)`.
pub fn parse_number_at(message: &[Value], index: usize) -> i64 {
    message.get(index).map_or(0, parse_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(items: Vec<Value>) -> Vec<Value> {
        items
    }

    #[test]
    fn test_range_ok_at_bounds() {
        assert!(validate_range(&msg(vec![1.into(), "payload".into()]), 1, "TestMsg", 2, 3).is_ok());
        assert!(validate_range(
            &msg(vec![7.into(), "a".into(), "b".into(), "c".into()]),
            7,
            "TestMsg",
            2,
            4
        )
        .is_ok());
    }

    #[test]
    fn test_empty_is_invariant() {
        let err = validate_range(&[], 1, "TestMsg", 2, 3).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)));
        assert!(!err.is_protocol_violation());
    }

    #[test]
    fn test_non_integer_type_is_invariant() {
        let err = validate_range(&msg(vec!["NOT_INT".into(), 123.into()]), 1, "TestMsg", 1, 3)
            .unwrap_err();
        assert!(matches!(err, Error::Invariant(_)));
    }

    #[test]
    fn test_float_type_code_is_invariant() {
        let err = validate_range(&msg(vec![Value::Float(1.0)]), 1, "TestMsg", 1, 3).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)));
    }

    #[test]
    fn test_wrong_type_is_invariant() {
        let err =
            validate_range(&msg(vec![99.into(), "body".into()]), 1, "TestMsg", 1, 3).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)));
    }

    #[test]
    fn test_wrong_type_checked_before_length() {
        let err = validate_range(&msg(vec![99.into()]), 1, "TestMsg", 3, 3).unwrap_err();
        assert!(matches!(err, Error::Invariant(_)));
    }

    #[test]
    fn test_too_short_is_protocol_error() {
        let err = validate_range(&msg(vec![2.into()]), 2, "TooShortMsg", 2, 4).unwrap_err();
        assert!(err.is_protocol_violation());
        let text = err.to_string();
        assert!(text.contains("Invalid message length 1"));
        assert!(text.contains("TooShortMsg"));
    }

    #[test]
    fn test_too_long_is_protocol_error() {
        let message = msg(vec![5.into(), "a".into(), "b".into(), "c".into(), "d".into()]);
        let err = validate_range(&message, 5, "TooLongMsg", 2, 4).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Invalid message length 5"));
        assert!(text.contains("TooLongMsg"));
    }

    #[test]
    fn test_exact() {
        assert!(validate_exact(&msg(vec![10.into(), 42.into(), "ok".into()]), 10, "ExactMsg", 3).is_ok());

        let short = validate_exact(&msg(vec![3.into()]), 3, "ExactShort", 2).unwrap_err();
        assert!(short.to_string().contains("Invalid message length 1"));
        assert!(short.to_string().contains("ExactShort"));

        let long = validate_exact(&msg(vec![4.into(), "a".into(), "b".into(), "c".into()]), 4, "ExactLong", 3)
            .unwrap_err();
        assert!(long.to_string().contains("Invalid message length 4"));
        assert!(long.to_string().contains("ExactLong"));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(&Value::from(123)), 123);
        assert_eq!(parse_number(&Value::from(-7)), -7);
        assert_eq!(parse_number(&Value::from(1_234_567_890_123i64)), 1_234_567_890_123);
        assert_eq!(parse_number(&Value::Null), 0);
        assert_eq!(parse_number(&Value::from("123")), 0);
        assert_eq!(parse_number(&Value::from(2.5)), 0);
        assert_eq!(parse_number(&Value::from(true)), 0);
        assert_eq!(
            parse_number(&Value::Array(vec![1.into(), 2.into(), 3.into()])),
            0
        );
    }

    #[test]
    fn test_parse_number_at_missing_index() {
        let message = msg(vec![8.into(), 1.into(), 42.into()]);
        assert_eq!(parse_number_at(&message, 2), 42);
        assert_eq!(parse_number_at(&message, 9), 0);
    }
}
