//! Renders the document panel of a [`ViewTree`] into a self-contained HTML page.
//!
//! This page is the "surface" handed to the external document renderer for PDF
//! conversion. Editing widgets are emitted as form controls so an export taken in
//! edit mode looks like the screen did.

use std::fmt::Write;

use crate::render::view::{ViewNode, ViewTree};

const BASE_CSS: &str = "body{margin:0;padding:24px;background:#fff;color:#111;font-size:14px}\
h1{font-size:30px;margin:0 0 4px}h2{font-size:20px;margin:24px 0 8px}h3{font-size:18px}\
p{margin:2px 0}.entry{margin-bottom:12px}ul{margin:4px 0 0 24px}\
input,textarea{width:100%;border:1px solid #ccc;border-radius:4px;padding:4px;font:inherit}\
.bar{background:#d1d5db;height:8px;border-radius:4px}.bar>div{background:#3b82f6;height:8px;border-radius:4px}\
.chip{display:inline-block;padding:4px 8px;border-radius:4px;background:#d1d5db}.chip.on{background:#22c55e;color:#fff}";

/// Builds the export page for the document panel of `view`.
pub fn document_html(view: &ViewTree, title: &str) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>");
    html.push_str(&html_escape(title));
    html.push_str("</title><style>");
    html.push_str(BASE_CSS);
    html.push_str("</style></head><body style=\"font-family:");
    html.push_str(&html_escape(&css_font_family(view.font.css_name())));
    html.push_str("\">");
    for node in &view.document {
        write_node(&mut html, node);
    }
    html.push_str("</body></html>");
    html
}

/// Quotes multi-word family names for a CSS `font-family` value.
fn css_font_family(name: &str) -> String {
    if name.contains(' ') {
        format!("'{name}'")
    } else {
        name.to_string()
    }
}

fn write_node(html: &mut String, node: &ViewNode) {
    match node {
        ViewNode::Heading { level, text } => {
            let level = (*level).clamp(1, 6);
            let _ = write!(html, "<h{level}>{}</h{level}>", html_escape(text));
        }
        ViewNode::Text { text, bold } => {
            if *bold {
                let _ = write!(html, "<p><strong>{}</strong></p>", html_escape(text));
            } else {
                let _ = write!(html, "<p>{}</p>", html_escape(text));
            }
        }
        ViewNode::TextInput { value, bold, .. } => {
            let weight = if *bold { " style=\"font-weight:bold\"" } else { "" };
            let _ = write!(html, "<input value=\"{}\"{weight}>", html_escape(value));
        }
        ViewNode::TextArea { value, rows, .. } => {
            let _ = write!(html, "<textarea rows=\"{rows}\">{}</textarea>", html_escape(value));
        }
        ViewNode::BulletList { items } => {
            html.push_str("<ul>");
            for item in items {
                let _ = write!(html, "<li>{}</li>", html_escape(item));
            }
            html.push_str("</ul>");
        }
        ViewNode::LevelBar { name, percent, .. } => {
            let _ = write!(
                html,
                "<p>{}</p><div class=\"bar\"><div style=\"width:{percent}%\"></div></div>",
                html_escape(name)
            );
        }
        ViewNode::LevelLabel { label, .. } => {
            let _ = write!(html, "<p>{}</p>", html_escape(label));
        }
        ViewNode::Chip { name, selected, .. } => {
            let class = if *selected { "chip on" } else { "chip" };
            let _ = write!(html, "<span class=\"{class}\">{}</span> ", html_escape(name));
        }
        ViewNode::Image { src, alt } => {
            let _ = write!(
                html,
                "<img src=\"{}\" alt=\"{}\">",
                html_escape(src),
                html_escape(alt)
            );
        }
        // Buttons are screen-only controls.
        ViewNode::Button { .. } => {}
        ViewNode::Block { children } => {
            html.push_str("<div class=\"entry\">");
            for child in children {
                write_node(html, child);
            }
            html.push_str("</div>");
        }
    }
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
