use crate::render::view_models::{BlockStyle, PreviewDocument};

/// HTML formatter for the live preview
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Format preview as standalone HTML with embedded CSS
    pub fn format(preview: &PreviewDocument) -> String {
        let mut html = String::with_capacity(16384);

        // HTML header with CSS
        html.push_str("<!DOCTYPE html>\n<html lang=\"nl\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str(&format!("<title>{}</title>\n", escape_html(&preview.title)));
        html.push_str("<style>\n");
        html.push_str("body { font-family: Georgia, 'Times New Roman', serif; max-width: 800px; margin: 40px auto; padding: 20px; line-height: 1.6; color: #222; }\n");
        html.push_str(".convenant-title { font-size: 1.6em; font-weight: bold; text-align: center; margin: 0; }\n");
        html.push_str(".convenant-subtitle { font-size: 1.2em; text-align: center; margin: 0 0 30px 0; }\n");
        html.push_str(".convenant-heading { font-size: 1.05em; font-weight: bold; margin-top: 30px; border-bottom: 1px solid #ccc; padding-bottom: 4px; }\n");
        html.push_str(".convenant-clause .label { font-weight: bold; display: block; }\n");
        html.push_str(".convenant-clause, .convenant-body { margin: 12px 0; }\n");
        html.push_str(".convenant-signature { margin-top: 40px; }\n");
        html.push_str(".convenant-signature .rule { border-top: 1px solid #222; width: 280px; margin-bottom: 6px; }\n");
        html.push_str(".convenant-signature .label { font-weight: bold; display: block; }\n");
        html.push_str("</style>\n</head>\n<body>\n");

        for block in &preview.blocks {
            let class = block.style.css_class();
            let lines = block
                .lines
                .iter()
                .map(|line| escape_html(line))
                .collect::<Vec<_>>()
                .join("<br>\n");

            match block.style {
                BlockStyle::Title => {
                    html.push_str(&format!("<h1 class=\"{}\">{}</h1>\n", class, lines));
                }
                BlockStyle::Subtitle => {
                    html.push_str(&format!("<h2 class=\"{}\">{}</h2>\n", class, lines));
                }
                BlockStyle::Heading => {
                    html.push_str(&format!("<h3 class=\"{}\">{}</h3>\n", class, lines));
                }
                BlockStyle::Numbered | BlockStyle::Body | BlockStyle::Signature => {
                    html.push_str(&format!(
                        "<div class=\"{}\" data-rule=\"{}\">\n",
                        class,
                        escape_html(&block.rule)
                    ));
                    if block.style == BlockStyle::Signature {
                        html.push_str("<div class=\"rule\"></div>\n");
                    }
                    if let Some(label) = &block.label {
                        html.push_str(&format!("<span class=\"label\">{}</span>\n", escape_html(label)));
                    }
                    if !lines.is_empty() {
                        html.push_str(&format!("<p>{}</p>\n", lines));
                    }
                    html.push_str("</div>\n");
                }
            }
        }

        html.push_str("</body>\n</html>\n");
        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
