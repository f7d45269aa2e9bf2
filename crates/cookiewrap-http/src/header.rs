use indexmap::IndexMap;

/// Parse a `Cookie` header value (`a=1; b=hello`) into an ordered map.
///
/// Parsing is permissive: segments without `=` or with an empty key are
/// dropped, never reported. A repeated key keeps its first position and
/// takes the last value.
pub fn parse_cookie_header(header_value: &str) -> IndexMap<String, String> {
    let mut cookies = IndexMap::new();

    for (position, segment) in header_value.split(';').enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        // Segment contents are never logged: they may carry cookie values.
        let Some((key, value)) = segment.split_once('=') else {
            tracing::debug!(
                target: "cookiewrap_http",
                position,
                segment_len = segment.len(),
                "discarding cookie segment without '='"
            );
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            tracing::debug!(
                target: "cookiewrap_http",
                position,
                segment_len = segment.len(),
                "discarding cookie segment with empty key"
            );
            continue;
        }

        cookies.insert(key.to_string(), value.trim().to_string());
    }

    cookies
}
