//! Word tokenizer feeding the TF-IDF model.
//!
//! Lower-cases the text, splits on anything that is not a word character
//! (alphanumeric or `_`), drops single-character tokens and English stop words.

use crate::matching::stop_words::is_stop_word;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Returns the indexable terms of `text` in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    let buffer = text.to_lowercase();
    buffer
        .split(|c: char| !is_word_char(c))
        .filter(|token| token.chars().count() > 1 && !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_stop_words_and_short_tokens() {
        let tokens = tokenize("Looking for a Python developer with AWS and Docker experience.");
        assert_eq!(
            tokens,
            vec!["looking", "python", "developer", "aws", "docker", "experience"]
        );
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("node.js, C++ & CI/CD");
        assert_eq!(tokens, vec!["node", "js", "ci", "cd"]);
    }

    #[test]
    fn test_tokenize_keeps_underscores_and_digits() {
        let tokens = tokenize("snake_case 3d x");
        assert_eq!(tokens, vec!["snake_case", "3d"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  the a of  ").is_empty());
    }
}
