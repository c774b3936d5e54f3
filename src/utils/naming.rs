// Tue Oct 13 2026 - Alex

/// `CreateBrowserSync` -> `create_browser_sync`, `GetURL` -> `get_url`.
///
/// An underscore goes before an upper-case letter that follows a lower-case
/// one; digits never start a new word.
pub fn to_abi_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut last: Option<char> = None;

    for (i, ch) in name.chars().enumerate() {
        let ch = if i == 0 { ch.to_ascii_uppercase() } else { ch };
        if let Some(prev) = last {
            if !ch.is_ascii_digit() && ch.is_ascii_uppercase() && is_lower(prev) {
                result.push('_');
            }
        }
        result.push(ch.to_ascii_lowercase());
        last = Some(ch);
    }

    result
}

fn is_lower(ch: char) -> bool {
    ch.to_ascii_uppercase() != ch
}

/// `cef_widget_t` -> `cef_widget`
pub fn strip_abi_suffix(abi_name: &str) -> &str {
    abi_name.strip_suffix("_t").unwrap_or(abi_name)
}

pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
