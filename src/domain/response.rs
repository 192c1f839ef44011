use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    Pdf,
    Png,
}

impl BinaryKind {
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Png => "image/png",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Successful Pingen response: a JSON object or a raw PDF/PNG payload.
pub enum ServiceResponse {
    Json(Map<String, Value>),
    Binary { kind: BinaryKind, bytes: Vec<u8> },
}

impl ServiceResponse {
    /// Borrow the JSON object, if this is a JSON response.
    pub fn as_json(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Json(object) => Some(object),
            Self::Binary { .. } => None,
        }
    }

    /// Look up a top-level field of a JSON response.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_json().and_then(|object| object.get(field))
    }

    pub fn into_json(self) -> Option<Map<String, Value>> {
        match self {
            Self::Json(object) => Some(object),
            Self::Binary { .. } => None,
        }
    }

    pub fn binary_kind(&self) -> Option<BinaryKind> {
        match self {
            Self::Json(_) => None,
            Self::Binary { kind, .. } => Some(*kind),
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Json(_) => None,
            Self::Binary { bytes, .. } => Some(bytes),
        }
    }
}
