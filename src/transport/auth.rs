use crate::domain::Token;

/// Full request URL: `{base_url}/{keyword_path}/token/{token}`.
///
/// The result embeds the access token and must be treated as a credential.
pub fn authenticated_url(base_url: &str, keyword_path: &str, token: &Token) -> String {
    [
        base_url.trim_end_matches('/'),
        keyword_path.trim_matches('/'),
        Token::FIELD,
        token.as_str(),
    ]
    .join("/")
}
