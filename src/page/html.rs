//! Small HTML helpers shared by the section renderers.

/// Escape text for safe inclusion in HTML element content or attribute
/// values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r##"<a href="#">Tom & Jerry's</a>"##),
            "&lt;a href=&quot;#&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_plain_text_unchanged() {
        assert_eq!(escape_html("Who We Are"), "Who We Are");
    }

    #[test]
    fn test_escape_html_preserves_arabic() {
        assert_eq!(escape_html("الرئيسية"), "الرئيسية");
    }

    #[test]
    fn test_escape_html_ampersand_in_copy() {
        assert_eq!(escape_html("Editing & Montage"), "Editing &amp; Montage");
    }
}
