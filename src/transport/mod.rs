//! Transport layer: URL templating and wire-format details (serialization/deserialization).

mod auth;
mod body;
mod decode;
mod path;

pub use auth::authenticated_url;
pub use body::{
    DATA_FIELD, FILE_FIELD, Parameters, RequestBody, encode_parameters, encode_post_body,
    encode_upload_body, send_parameters, upload_parameters,
};
pub use decode::{Decoded, decode_response};
pub use path::{
    Resource, account_path, action_path, fax_calculator_path, id_path, list_path,
    post_calculator_path, preview_path, speed_path,
};
