//! Tweet text normalizer
//!
//! Strips retweet markers, mentions, hashtags and everything that is not an
//! English letter or whitespace, then lowercases and trims.

use regex::Regex;
use std::sync::LazyLock;

static RETWEET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"RT @\w+: ").unwrap());
static MENTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").unwrap());
static NON_ALPHA_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").unwrap());

/// Text normalizer
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one text. Total over any input; the result contains only
    /// `a-z` and whitespace.
    pub fn normalize(&self, raw: &str) -> String {
        // Retweet markers go first: the mention pass would otherwise eat the
        // `@user` and leave a dangling "RT : ".
        let text = RETWEET_REGEX.replace_all(raw, "");
        let text = MENTION_REGEX.replace_all(&text, "");
        let text = HASHTAG_REGEX.replace_all(&text, "");
        let text = NON_ALPHA_REGEX.replace_all(&text, "");

        text.to_lowercase().trim().to_string()
    }
}

/// Normalize with the default normalizer
pub fn normalize(raw: &str) -> String {
    TextNormalizer::new().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_retweet_marker() {
        assert_eq!(normalize("RT @bob: hello world"), "hello world");
    }

    #[test]
    fn test_removes_mentions_and_hashtags_entirely() {
        assert_eq!(normalize("thanks @alice for #rustlang tips"), "thanks  for  tips");
    }

    #[test]
    fn test_removes_digits_punctuation_and_emoji() {
        assert_eq!(normalize("AI is 100% great!!! 🚀"), "ai is  great");
    }

    #[test]
    fn test_reference_example() {
        assert_eq!(normalize("RT @bob: I do not love this #great"), "i do not love this");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  123 !!! "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "RT @bob: I do not love this #great",
            "Check https://t.co/xyz @user #AI rocks!",
            "  MiXeD   CaSe\twith\ttabs  ",
            "naïve café — déjà vu",
            "@a@b#c#d RT @x: RT @y: done",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_output_alphabet() {
        let samples = [
            "Straße 42 — Ünïcödé! @you #me",
            "RT @someone: WOW, $BTC to the moon 🚀🚀",
        ];

        for sample in samples {
            let out = normalize(sample);
            assert!(
                out.chars().all(|c| c.is_ascii_lowercase() || c.is_whitespace()),
                "unexpected character in {out:?}"
            );
        }
    }
}
