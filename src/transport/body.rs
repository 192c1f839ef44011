use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::{Color, PostEncoding, SendOptions, Speed, UploadOptions};

/// Multipart/form field carrying the JSON-encoded parameters.
pub const DATA_FIELD: &str = "data";
/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

pub type Parameters = Map<String, Value>;

#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("body parameters could not be serialized: {0}")]
    Json(#[from] serde_json::Error),

    #[error("body parameters must serialize to a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Empty,
    Json(String),
    Form(Vec<(String, String)>),
    Multipart {
        file_name: String,
        content: Vec<u8>,
        data: String,
    },
}

/// Serialize caller-supplied body parameters; `null` counts as no parameters.
pub fn encode_parameters<T: Serialize + ?Sized>(value: &T) -> Result<Parameters, EncodeError> {
    match serde_json::to_value(value)? {
        Value::Object(object) => Ok(object),
        Value::Null => Ok(Parameters::new()),
        other => Err(EncodeError::NotAnObject {
            kind: json_kind(&other),
        }),
    }
}

pub fn send_parameters(options: &SendOptions) -> Parameters {
    let mut params = Parameters::new();
    params.insert(Speed::FIELD.to_owned(), options.speed.code().into());
    params.insert(Color::FIELD.to_owned(), options.color.code().into());
    params
}

pub fn upload_parameters(options: &UploadOptions) -> Parameters {
    let mut params = Parameters::new();
    params.insert("send".to_owned(), u8::from(options.send).into());
    params.insert(Speed::FIELD.to_owned(), options.speed.code().into());
    params.insert(Color::FIELD.to_owned(), options.color.code().into());
    params
}

/// Body of a non-upload POST. Empty parameters produce no body at all.
pub fn encode_post_body(params: &Parameters, encoding: PostEncoding) -> RequestBody {
    if params.is_empty() {
        return RequestBody::Empty;
    }
    let json = Value::Object(params.clone()).to_string();
    match encoding {
        PostEncoding::Json => RequestBody::Json(json),
        PostEncoding::FormField => RequestBody::Form(vec![(DATA_FIELD.to_owned(), json)]),
    }
}

/// Multipart upload body; `data` is always present (`{}` when there are no parameters).
pub fn encode_upload_body(file_name: String, content: Vec<u8>, params: &Parameters) -> RequestBody {
    RequestBody::Multipart {
        file_name,
        content,
        data: Value::Object(params.clone()).to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
