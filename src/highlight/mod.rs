mod fstring;
mod markup;
mod scanner;
mod types;

pub use fstring::{split_fstring, FStringPart};
pub use markup::{escape_attr, escape_html};
pub use scanner::{scan_line, unpaired_triple_quote};
pub use types::{Category, Delimiter, ParserState, Span, SpanKind};

use markup::{push_token, render_spans};

/// Highlight one logical line of Python source into HTML markup.
///
/// `state` must be the state left by the previous line of the same code
/// block (or a fresh `ParserState` for the first line). It is updated in
/// place so the next call knows whether a triple-quoted string is still open.
///
/// The line is handled as at most three consecutive segments:
/// 1. the tail of a string carried over from earlier lines, up to and
///    including its closing delimiter;
/// 2. ordinary code, tokenized by [`scan_line`];
/// 3. a newly opened triple-quoted string running to end of line, when the
///    remaining text holds an odd number of triple-quote markers.
pub fn highlight_line(line: &str, state: &mut ParserState) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    let mut rest = line;

    if let Some(delimiter) = state.delimiter() {
        match rest.find(delimiter.as_str()) {
            None => {
                push_token(&mut out, Category::String, rest);
                return out;
            }
            Some(idx) => {
                let end = idx + delimiter.as_str().len();
                push_token(&mut out, Category::String, &rest[..end]);
                state.close();
                tracing::trace!(delimiter = delimiter.as_str(), "multi-line string closed");
                rest = &rest[end..];
            }
        }
    }

    match unpaired_triple_quote(rest) {
        Some((idx, delimiter)) => {
            let code = &rest[..idx];
            render_spans(&mut out, code, &scan_line(code));
            push_token(&mut out, Category::String, &rest[idx..]);
            state.open(delimiter);
            tracing::trace!(delimiter = delimiter.as_str(), "multi-line string opened");
        }
        None => render_spans(&mut out, rest, &scan_line(rest)),
    }

    out
}

/// Highlight a whole block, threading state from line to line.
pub fn highlight_lines<'a, I>(lines: I, state: &mut ParserState) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| highlight_line(line, state))
        .collect()
}
