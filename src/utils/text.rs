//! Text helpers for labels and headings.

/// Turn an identifier like `query_runner_type` into `Query Runner Type`.
///
/// Underscores become spaces and the first character of every word is
/// uppercased. The rest of each word is left as is.
#[must_use]
pub fn to_human(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for ch in text.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Uppercase the first character and lowercase the rest.
///
/// Absent or empty text gives `None`.
#[must_use]
pub fn capitalize(text: Option<&str>) -> Option<String> {
    let text = text.filter(|t| !t.is_empty())?;
    let mut chars = text.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect())
}
