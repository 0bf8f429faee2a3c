use super::types::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FStringPart<'a> {
    pub category: Category,
    pub text: &'a str,
}

impl<'a> FStringPart<'a> {
    fn new(category: Category, text: &'a str) -> Self {
        Self { category, text }
    }
}

/// Split an f-string token such as `f"hello {name}!"` into styled parts.
///
/// The prefix is keyword-styled, the quotes string-styled. Inside the quotes
/// every `{...}` pair becomes brace / expression / brace and the rest stays
/// literal. A `{` without a later `}` is literal text.
pub fn split_fstring(token: &str) -> Vec<FStringPart<'_>> {
    let mut parts = Vec::new();

    let bytes = token.as_bytes();
    let well_formed = bytes.len() >= 3
        && bytes[0] == b'f'
        && matches!(bytes[1], b'"' | b'\'')
        && bytes[bytes.len() - 1] == bytes[1];
    if !well_formed {
        parts.push(FStringPart::new(Category::String, token));
        return parts;
    }

    let (prefix, rest) = token.split_at(1);
    let (open, rest) = rest.split_at(1);
    let (body, close) = rest.split_at(rest.len() - 1);

    parts.push(FStringPart::new(Category::Keyword, prefix));
    parts.push(FStringPart::new(Category::String, open));

    let mut pos = 0usize;
    while let Some(lb) = body[pos..].find('{').map(|i| pos + i) {
        let Some(rb) = body[lb + 1..].find('}').map(|i| lb + 1 + i) else {
            break;
        };

        if lb > pos {
            parts.push(FStringPart::new(Category::FStringLiteral, &body[pos..lb]));
        }
        parts.push(FStringPart::new(Category::FStringBrace, &body[lb..lb + 1]));
        if rb > lb + 1 {
            parts.push(FStringPart::new(Category::FStringExpr, &body[lb + 1..rb]));
        }
        parts.push(FStringPart::new(Category::FStringBrace, &body[rb..rb + 1]));

        pos = rb + 1;
    }

    if pos < body.len() {
        parts.push(FStringPart::new(Category::FStringLiteral, &body[pos..]));
    }
    parts.push(FStringPart::new(Category::String, close));

    parts
}
