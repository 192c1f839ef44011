use serde_json::Value;

use crate::domain::{BinaryKind, ServiceResponse};

const PDF_MAGIC: &[u8] = b"%PDF";
const PNG_MAGIC: &[u8] = b"PNG";

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object response")]
    NotAnObject,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    Response(ServiceResponse),
    /// The service flagged the request as failed (`error` is truthy).
    ServiceError { code: i64, message: String },
}

/// Detect PDF (`%PDF` at offset 0) and PNG (`PNG` at offset 1) payloads.
pub fn sniff_binary(body: &[u8]) -> Option<BinaryKind> {
    if body.get(..4) == Some(PDF_MAGIC) {
        return Some(BinaryKind::Pdf);
    }
    if body.get(1..4) == Some(PNG_MAGIC) {
        return Some(BinaryKind::Png);
    }
    None
}

pub fn decode_response(body: Vec<u8>) -> Result<Decoded, DecodeError> {
    if let Some(kind) = sniff_binary(&body) {
        return Ok(Decoded::Response(ServiceResponse::Binary { kind, bytes: body }));
    }

    let Value::Object(object) = serde_json::from_slice::<Value>(&body)? else {
        return Err(DecodeError::NotAnObject);
    };

    if object.get("error").is_some_and(is_truthy) {
        return Ok(Decoded::ServiceError {
            code: error_code(object.get("errorcode")),
            message: error_message(object.get("errormessage")),
        });
    }

    Ok(Decoded::Response(ServiceResponse::Json(object)))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty() && text != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn error_code(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|n| n as i64))
            .unwrap_or_default(),
        Some(Value::String(text)) => text.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

fn error_message(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pdf_body_is_returned_verbatim() {
        let body = b"%PDF-1.4\n{not json at all".to_vec();
        let decoded = decode_response(body.clone()).unwrap();
        assert_eq!(
            decoded,
            Decoded::Response(ServiceResponse::Binary {
                kind: BinaryKind::Pdf,
                bytes: body,
            })
        );
    }

    #[test]
    fn png_magic_is_detected_at_offset_one() {
        let body = b"\x89PNG\r\n\x1a\n\0\0".to_vec();
        assert_eq!(sniff_binary(&body), Some(BinaryKind::Png));
        assert_eq!(sniff_binary(b"PNG!"), None);
        assert_eq!(sniff_binary(b"%PD"), None);
        assert_eq!(sniff_binary(b""), None);
    }

    #[test]
    fn error_flag_maps_to_service_error() {
        let body = br#"{"error": true, "errorcode": 42, "errormessage": "bad token"}"#;
        assert_eq!(
            decode_response(body.to_vec()).unwrap(),
            Decoded::ServiceError {
                code: 42,
                message: "bad token".to_owned(),
            }
        );
    }

    #[test]
    fn loose_error_values_are_interpreted() {
        let body = br#"{"error": 1, "errorcode": "7"}"#;
        assert_eq!(
            decode_response(body.to_vec()).unwrap(),
            Decoded::ServiceError {
                code: 7,
                message: String::new(),
            }
        );
    }

    #[test]
    fn falsy_error_flag_is_success() {
        for flag in [json!(false), json!(0), json!(""), json!("0"), json!(null)] {
            let body = json!({"error": flag, "id": 1}).to_string().into_bytes();
            let decoded = decode_response(body).unwrap();
            assert!(matches!(decoded, Decoded::Response(ServiceResponse::Json(_))));
        }
    }

    #[test]
    fn success_object_is_returned_unchanged() {
        let body = br#"{"id": 7, "status": "queued"}"#;
        let Decoded::Response(ServiceResponse::Json(object)) =
            decode_response(body.to_vec()).unwrap()
        else {
            panic!("expected JSON response");
        };
        assert_eq!(Value::Object(object), json!({"id": 7, "status": "queued"}));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        assert!(matches!(
            decode_response(b"<html>oops</html>".to_vec()),
            Err(DecodeError::Json(_))
        ));
        assert!(matches!(
            decode_response(b"[1, 2]".to_vec()),
            Err(DecodeError::NotAnObject)
        ));
    }
}
