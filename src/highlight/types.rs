/// Closing marker of a triple-quoted string that spans lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    TripleDouble,
    TripleSingle,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::TripleDouble => "\"\"\"",
            Delimiter::TripleSingle => "'''",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "\"\"\"" => Some(Delimiter::TripleDouble),
            "'''" => Some(Delimiter::TripleSingle),
            _ => None,
        }
    }
}

/// Parser memory carried from one line of a scene to the next.
///
/// The only thing that survives a line boundary is an unterminated
/// triple-quoted string, so the state is just its delimiter: `Some` while
/// inside the string, `None` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    open: Option<Delimiter>,
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_unterminated_string(&self) -> bool {
        self.open.is_some()
    }

    pub fn delimiter(&self) -> Option<Delimiter> {
        self.open
    }

    pub(crate) fn open(&mut self, delimiter: Delimiter) {
        self.open = Some(delimiter);
    }

    pub(crate) fn close(&mut self) {
        self.open = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    String,
    Comment,
    FStringLiteral,
    FStringBrace,
    FStringExpr,
    Keyword,
    ControlFlow,
    FunctionCall,
    ClassOrType,
    Number,
    Bracket,
    PlainText,
}

impl Category {
    /// CSS class emitted for the category; `None` means unstyled text.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Category::String | Category::FStringLiteral => Some("vs-string"),
            Category::Comment => Some("vs-comment"),
            Category::FStringBrace => Some("vs-control vs-interp-brace"),
            Category::FStringExpr => Some("vs-var"),
            Category::Keyword => Some("vs-keyword"),
            Category::ControlFlow => Some("vs-control"),
            Category::FunctionCall => Some("vs-func"),
            Category::ClassOrType => Some("vs-class"),
            Category::Number => Some("vs-num"),
            Category::Bracket => Some("vs-bracket"),
            Category::PlainText => None,
        }
    }
}

/// A classified byte range of one line.
///
/// F-strings are a single span whose interior is split again at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub kind: SpanKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Token(Category),
    FString,
}

impl Span {
    pub fn new(start: usize, end: usize, kind: SpanKind) -> Self {
        Self { start, end, kind }
    }

    pub fn token(start: usize, end: usize, category: Category) -> Self {
        Self::new(start, end, SpanKind::Token(category))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
