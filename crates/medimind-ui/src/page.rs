//! The single-page HTML surface.
//!
//! The template is embedded at compile time via `include_str!`, so the
//! binary has no external file dependency besides the optional stylesheet.
//! Placeholders of the form `{{NAME}}` are filled by [`render_page`].

use medimind_core::SYMPTOM_SENTINEL;

use crate::stylesheet::Stylesheet;

pub const PAGE_TITLE: &str = "MediMind AI Pro";
pub const PAGE_ICON: &str = "🩺";
pub const PAGE_SUBTITLE: &str = "Advanced Diagnostic Intelligence";

const PAGE_TEMPLATE: &str = include_str!("../assets/page.html");

/// Render the page with the selector populated from `symptoms`.
///
/// The sentinel option always comes first. A missing stylesheet adds a
/// warning banner at the top of the page.
pub fn render_page(symptoms: &[String], stylesheet: &Stylesheet) -> String {
    let options = std::iter::once(SYMPTOM_SENTINEL)
        .chain(symptoms.iter().map(String::as_str))
        .map(|s| {
            let escaped = escape_html(s);
            format!("    <option value=\"{}\">{}</option>", escaped, escaped)
        })
        .collect::<Vec<_>>()
        .join("\n");

    let warning = stylesheet
        .warning()
        .map(|w| format!("<div class=\"banner warning\">{}</div>", escape_html(w)))
        .unwrap_or_default();

    // `</` cannot appear inside a <style> element.
    let style = stylesheet.css().unwrap_or_default().replace("</", "<\\/");

    PAGE_TEMPLATE
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{ICON}}", PAGE_ICON)
        .replace("{{SUBTITLE}}", PAGE_SUBTITLE)
        .replace("{{WARNING}}", &warning)
        .replace("{{STYLE}}", &style)
        .replace("{{OPTIONS}}", &options)
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
