mod html;

pub use super::*;

/// Renders `source` against the `cirrus` tagset, for tests that only
/// care about the final HTML string.
pub fn render_source(source: &str) -> Result<String, String> {
    let document = snow::loads(&cirrus_tagset(), source).map_err(|e| e.to_string())?;
    render(&document).map_err(|e| e.to_string())
}
