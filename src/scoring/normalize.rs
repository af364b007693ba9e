/// Canonicalizes text for token comparison: lowercase, strip everything but
/// alphanumerics and apostrophes, collapse whitespace runs, trim.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !normalized.is_empty() {
                pending_space = true;
            }
            continue;
        }
        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() || lower == '\'' {
                if pending_space {
                    normalized.push(' ');
                    pending_space = false;
                }
                normalized.push(lower);
            }
        }
    }
    normalized
}

/// Splits text into normalized word tokens. Empty or all-whitespace input
/// yields an empty sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize, tokenize};

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Hello, World!"), "hello world");
    }

    #[test]
    fn keeps_apostrophes_and_digits() {
        assert_eq!(normalize("It's 42nd St."), "it's 42nd st");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["Hello, World!", "  mixed \t CASE?? ", "don't stop", ""] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn tokenize_empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t ").is_empty());
        assert!(tokenize("...!?").is_empty());
    }

    #[test]
    fn tokenize_splits_on_words() {
        assert_eq!(tokenize("Won't you stay?"), vec!["won't", "you", "stay"]);
    }
}
