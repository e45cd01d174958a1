// src/scrape/normalize.rs
// Whitespace cleanup for text pulled out of listing cards.

// Collapses every run of whitespace (spaces, tabs, newlines) into one space
// and drops leading/trailing whitespace.
//
// Example:
//   "  Senior\n\t Python   Developer " -> "Senior Python Developer"
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(
            clean_text("  Senior\n\t Python   Developer \r\n"),
            "Senior Python Developer"
        );
    }

    #[test]
    fn test_blank_input_becomes_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn test_is_idempotent() {
        let inputs = ["a  b", "\u{a0}서울\u{3000} 강남구 ", "already clean", "\n\nx\n"];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once);
            assert!(!once.starts_with(' ') && !once.ends_with(' '));
            assert!(!once.contains("  "));
        }
    }
}
