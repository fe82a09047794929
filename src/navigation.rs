//! Address normalization shared by direct and texture navigation

/// Prefix `https://` unless the address already names an http(s) scheme.
///
/// No other validation happens here; a bad address ends up on the engine's
/// own error page.
pub fn normalize_url(input: &str) -> String {
    if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{}", input)
    }
}
