use super::types::{Category, Delimiter, Span, SpanKind};
use regex::Regex;
use std::sync::LazyLock;

static TRIPLE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""""|'''"#).unwrap());

static FSTRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bf(?:"[^"]*"|'[^']*')"#).unwrap());

static TRIPLE_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""""(?s:.*?)"""|'''(?s:.*?)'''"#).unwrap());

static PLAIN_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap());

static KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:def|class|lambda|None|True|False|self)\b").unwrap());

static DECORATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

static CONTROL_FLOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:return|if|elif|else|while|for|in|try|except|finally|continue|break|and|or|not|is|from|import|as|with|pass|raise|assert|yield|global|nonlocal)\b",
    )
    .unwrap()
});

static CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b([A-Za-z_]\w*)\(").unwrap());

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z][A-Za-z0-9_]*\b").unwrap());

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]+(?:\.[0-9]+)?\b").unwrap());

static BRACKET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[(){}\[\]]").unwrap());

/// Position and kind of the last triple-quote marker when the line holds an
/// odd number of them. That marker opens a string running past end of line.
pub fn unpaired_triple_quote(text: &str) -> Option<(usize, Delimiter)> {
    let mut count = 0usize;
    let mut last = None;
    for m in TRIPLE_MARKER.find_iter(text) {
        count += 1;
        last = Some(m);
    }

    if count % 2 == 0 {
        return None;
    }
    let m = last?;
    Delimiter::from_marker(m.as_str()).map(|d| (m.start(), d))
}

/// First `#` that does not sit inside a closed plain string literal.
///
/// Quotes pair up the same way the plain-string pass pairs them, so a `#`
/// inside `"a # b"` is skipped while quotes after a `#` stay in the comment.
fn comment_start(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        match bytes[i] {
            b'#' => return Some(i),
            quote @ (b'"' | b'\'') => {
                if let Some(close) = text[i + 1..].find(quote as char) {
                    i += close + 2;
                    continue;
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Claimed spans over one line, plus a working copy of the line where every
/// claimed byte has been blanked so later passes cannot see it.
struct Claims {
    mask: String,
    spans: Vec<Span>,
}

impl Claims {
    fn new(text: &str) -> Self {
        Self {
            mask: text.to_string(),
            spans: Vec::new(),
        }
    }

    fn claim(&mut self, start: usize, end: usize, kind: SpanKind) {
        // String patterns can run across blanked text; whatever they cover
        // becomes part of the new span.
        self.spans.retain(|s| s.end <= start || s.start >= end);
        // Regex matches sit on char boundaries and ASCII blanks keep the
        // mask valid UTF-8 with unchanged byte offsets.
        self.mask.replace_range(start..end, &" ".repeat(end - start));
        self.spans.push(Span::new(start, end, kind));
    }

    fn claim_matches(&mut self, re: &Regex, kind: SpanKind) {
        let found: Vec<(usize, usize)> = re
            .find_iter(&self.mask)
            .map(|m| (m.start(), m.end()))
            .collect();
        for (start, end) in found {
            self.claim(start, end, kind);
        }
    }

    fn claim_group(&mut self, re: &Regex, group: usize, kind: SpanKind) {
        let found: Vec<(usize, usize)> = re
            .captures_iter(&self.mask)
            .filter_map(|cap| cap.get(group))
            .map(|m| (m.start(), m.end()))
            .collect();
        for (start, end) in found {
            self.claim(start, end, kind);
        }
    }

    /// `#` to end of line. Anything claimed past the `#` belonged to the
    /// comment all along and is dropped.
    fn claim_comment(&mut self) {
        let Some(start) = comment_start(&self.mask) else {
            return;
        };
        let end = self.mask.len();
        self.claim(start, end, SpanKind::Token(Category::Comment));
    }

    fn into_spans(mut self) -> Vec<Span> {
        self.spans.sort_by_key(|s| s.start);
        self.spans
    }
}

/// Classify a single line that carries no open string.
///
/// Passes run in a fixed order and each one only sees text that no earlier
/// pass claimed: f-strings, same-line triple strings, comments, plain
/// strings, then the word and punctuation rules. The result is sorted and
/// non-overlapping; bytes not covered by any span are plain text.
pub fn scan_line(text: &str) -> Vec<Span> {
    let mut claims = Claims::new(text);

    claims.claim_matches(&FSTRING, SpanKind::FString);
    claims.claim_matches(&TRIPLE_STRING, SpanKind::Token(Category::String));
    claims.claim_comment();
    claims.claim_matches(&PLAIN_STRING, SpanKind::Token(Category::String));

    claims.claim_matches(&KEYWORD, SpanKind::Token(Category::Keyword));
    claims.claim_matches(&DECORATOR, SpanKind::Token(Category::FunctionCall));
    claims.claim_matches(&CONTROL_FLOW, SpanKind::Token(Category::ControlFlow));
    claims.claim_group(&CALL, 1, SpanKind::Token(Category::FunctionCall));
    claims.claim_matches(&CLASS_NAME, SpanKind::Token(Category::ClassOrType));
    claims.claim_matches(&NUMBER, SpanKind::Token(Category::Number));
    claims.claim_matches(&BRACKET, SpanKind::Token(Category::Bracket));

    claims.into_spans()
}
