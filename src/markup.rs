use crate::info::AppInfo;

/// Renders the card as an HTML fragment: a heading with the title, then one
/// paragraph per field.
pub fn render_html(info: &AppInfo) -> String {
    let mut out = String::from("<div class=\"app\">\n");
    out.push_str(&format!("  <h1>{}</h1>\n", escape(info.title())));
    for (label, value) in info.fields() {
        out.push_str(&format!("  <p>{}: {}</p>\n", label, escape(value)));
    }
    out.push_str("</div>\n");
    out
}

pub fn render_text(info: &AppInfo) -> String {
    let mut out = String::new();
    out.push_str(info.title());
    out.push('\n');
    out.push_str(&"=".repeat(info.title().chars().count()));
    out.push('\n');
    for (label, value) in info.fields() {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
