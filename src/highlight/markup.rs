use super::fstring::split_fstring;
use super::types::{Category, Span, SpanKind};

/// Escape the three HTML metacharacters that can break element structure.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    escape_html(s).replace('"', "&quot;")
}

/// Append `text` to `out` wrapped in the category's span.
pub fn push_token(out: &mut String, category: Category, text: &str) {
    if text.is_empty() {
        return;
    }
    match category.css_class() {
        Some(class) => {
            out.push_str("<span class=\"");
            out.push_str(class);
            out.push_str("\">");
            out.push_str(&escape_html(text));
            out.push_str("</span>");
        }
        None => out.push_str(&escape_html(text)),
    }
}

/// Emit `text` using the classified spans; gaps between spans are plain.
pub fn render_spans(out: &mut String, text: &str, spans: &[Span]) {
    let mut pos = 0usize;

    for span in spans {
        if span.start < pos {
            continue;
        }
        if span.start > pos {
            push_token(out, Category::PlainText, &text[pos..span.start]);
        }
        let slice = &text[span.start..span.end];
        match span.kind {
            SpanKind::Token(category) => push_token(out, category, slice),
            SpanKind::FString => {
                for part in split_fstring(slice) {
                    push_token(out, part.category, part.text);
                }
            }
        }
        pos = span.end;
    }

    if pos < text.len() {
        push_token(out, Category::PlainText, &text[pos..]);
    }
}
