/// Strip carriage returns and split code into its ordered source lines.
///
/// A trailing newline yields a final empty line, which renders as a blank row.
pub fn split_lines(code: &str) -> Vec<String> {
    code.replace('\r', "")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Text actually highlighted for a line: empty lines become one space so the
/// rendered row keeps its height.
pub fn display_text(line: &str) -> &str {
    if line.is_empty() {
        " "
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_is_normalized() {
        assert_eq!(split_lines("a\r\nb\r\nc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_blank_lines_survive() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_empty_line_displays_as_space() {
        assert_eq!(display_text(""), " ");
        assert_eq!(display_text("x"), "x");
    }
}
