//! Text helpers

/// Description length shown on post cards
pub const CARD_DESCRIPTION_LENGTH: usize = 60;

/// Truncate to `length` characters, appending `omission` (default `...`)
/// when anything was cut
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(length).collect();
        format!("{}{}", truncated, omission)
    }
}

/// Card text for a post description
pub fn card_description(description: &str) -> String {
    truncate(description, CARD_DESCRIPTION_LENGTH, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
        assert_eq!(truncate("Olá mundo", 3, Some("…")), "Olá…");
    }

    #[test]
    fn test_card_description() {
        let long = "a".repeat(61);
        assert_eq!(card_description(&long), format!("{}...", "a".repeat(60)));
        let exact = "b".repeat(60);
        assert_eq!(card_description(&exact), exact);
    }
}
