// Output formatting — terminal display for digests and rankings.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "…" if
/// anything was cut. Counts characters, not bytes, so multi-byte text
/// (emoji, accents, CJK) never panics or splits mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}
