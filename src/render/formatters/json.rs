use crate::render::view_models::PreviewDocument;

/// JSON formatter for the preview view model
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format preview as pretty-printed JSON
    pub fn format(preview: &PreviewDocument) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(preview)
    }
}
