//! Negation tagging
//!
//! Marks the single token that follows a negation cue, so that
//! `"not love"` becomes `"not NOT_love"` and no longer matches `love` in the
//! lexicon.

/// Closed set of negation cues
pub const NEGATION_CUES: &[&str] = &[
    "not", "never", "no", "n't", "none", "nobody", "nothing", "nowhere", "neither", "hardly",
    "scarcely", "barely",
];

/// Default polarity marker
pub const DEFAULT_MARKER: &str = "NOT_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Negated,
}

/// Single-token lookahead negation tagger
#[derive(Debug, Clone)]
pub struct NegationTagger {
    marker: String,
}

impl NegationTagger {
    pub fn new() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
        }
    }

    /// Use a custom polarity marker
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn is_cue(word: &str) -> bool {
        NEGATION_CUES.contains(&word)
    }

    /// Tag a whitespace-tokenized text. Tokens are re-joined with single spaces.
    ///
    /// In the negated state the next token is marked unconditionally, even
    /// when it is itself a cue; it does not re-arm the state.
    pub fn tag(&self, text: &str) -> String {
        let mut state = State::Normal;
        let mut tagged = Vec::new();

        for token in text.split_whitespace() {
            match state {
                State::Normal => {
                    if Self::is_cue(token) {
                        state = State::Negated;
                    }
                    tagged.push(token.to_string());
                }
                State::Negated => {
                    tagged.push(format!("{}{}", self.marker, token));
                    state = State::Normal;
                }
            }
        }

        tagged.join(" ")
    }
}

impl Default for NegationTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Tag with the default `NOT_` marker
pub fn tag_negation(text: &str) -> String {
    NegationTagger::new().tag(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_token_after_cue() {
        assert_eq!(tag_negation("i do not love this"), "i do not NOT_love this");
    }

    #[test]
    fn test_only_one_token_is_marked() {
        assert_eq!(tag_negation("never good times"), "never NOT_good times");
    }

    #[test]
    fn test_cue_after_cue_is_marked_not_rearmed() {
        assert_eq!(tag_negation("not never happy"), "not NOT_never happy");
    }

    #[test]
    fn test_trailing_cue() {
        assert_eq!(tag_negation("absolutely not"), "absolutely not");
    }

    #[test]
    fn test_state_resets_per_text() {
        let tagger = NegationTagger::new();
        assert_eq!(tagger.tag("no"), "no");
        assert_eq!(tagger.tag("happy"), "happy");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(tag_negation("  a   b\tc "), "a b c");
        assert_eq!(tag_negation(""), "");
    }

    #[test]
    fn test_custom_marker() {
        let tagger = NegationTagger::new().with_marker("NEG_");
        assert_eq!(tagger.tag("hardly fun"), "hardly NEG_fun");
    }

    #[test]
    fn test_no_consecutive_marks_from_non_cues() {
        let text = "not a b no c d hardly barely e f nothing";
        let tagged = tag_negation(text);
        let source: Vec<&str> = text.split_whitespace().collect();
        let out: Vec<&str> = tagged.split_whitespace().collect();

        for i in 1..out.len() {
            let both_marked = out[i - 1].starts_with(DEFAULT_MARKER) && out[i].starts_with(DEFAULT_MARKER);
            let both_plain = !NegationTagger::is_cue(source[i - 1]) && !NegationTagger::is_cue(source[i]);
            assert!(!(both_marked && both_plain), "consecutive marks at {i}: {tagged}");
        }
    }
}
