//! Display-name text helpers

/// Capitalize every whitespace-separated word in `text`.
///
/// Only the first letter of each word is changed; everything else, including
/// the rest of the word, passes through untouched. Leading non-letters keep the
/// word pending, so `"4g lte"` becomes `"4G Lte"`.
///
/// ```rust
/// use devicename_types::capitalize;
///
/// assert_eq!(capitalize("sm-g920f"), "Sm-g920f");
/// assert_eq!(capitalize("a b"), "A B");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(text: &str) -> String {
    let mut phrase = String::with_capacity(text.len());
    let mut capitalize_next = true;
    for c in text.chars() {
        if capitalize_next && c.is_alphabetic() {
            phrase.extend(c.to_uppercase());
            capitalize_next = false;
            continue;
        } else if c.is_whitespace() {
            capitalize_next = true;
        }
        phrase.push(c);
    }
    phrase
}
