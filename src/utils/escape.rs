// ============================================================================
// ESCAPE - Texto del host como texto literal, nunca como markup
// ============================================================================

/// Escapar texto para insertarlo dentro de HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_markup() {
        assert_eq!(
            escape_html("<img src=x onerror=\"alert('x')\">"),
            "&lt;img src=x onerror=&quot;alert(&#039;x&#039;)&quot;&gt;"
        );
    }

    #[test]
    fn test_escape_html_ampersand_first() {
        // "&lt;" del host debe verse literal, no como "<"
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_escape_html_plain_text_untouched() {
        assert_eq!(escape_html("Sultan RS • ABC123"), "Sultan RS • ABC123");
    }
}
