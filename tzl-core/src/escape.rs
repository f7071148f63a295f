/// Replace the five HTML-reserved characters with character references.
///
/// `&` `<` `>` `"` `'` map to `&amp;` `&lt;` `&gt;` `&quot;` `&#039;`; everything else is copied as-is.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
