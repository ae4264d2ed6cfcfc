use std::fmt::Write;

use crate::model::config::WebConfig;
use crate::model::todo::display_text;

pub const INPUT_PLACEHOLDER: &str = "Enter a new to-do item...";

/// Render the page: headings, one checkbox per task, an empty text input.
pub fn render_page(page: &WebConfig, lines: &[String]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&page.title));
    html.push_str("</head>\n<body>\n<main>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(&page.title));
    let _ = writeln!(html, "<h3>{}</h3>", escape_html(&page.subheader));
    let _ = writeln!(html, "<p>{}</p>", escape_html(&page.tagline));

    html.push_str("<form class=\"todos\" onsubmit=\"return false;\">\n");
    for (i, line) in lines.iter().enumerate() {
        let _ = writeln!(
            html,
            "<div><label><input type=\"checkbox\" id=\"todo-{i}\"> {}</label></div>",
            escape_html(display_text(line).trim())
        );
    }
    let _ = writeln!(
        html,
        "<input type=\"text\" aria-label=\"New to-do\" placeholder=\"{}\" value=\"\">",
        escape_html(INPUT_PLACEHOLDER)
    );
    html.push_str("</form>\n</main>\n</body>\n</html>\n");
    html
}

/// Escape text for use in HTML content and quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
