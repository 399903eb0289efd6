//! Positive/negative word lexicon
//!
//! Loaded once from two flat word lists (one word per line, ISO-8859-1) and
//! never mutated afterwards. A failed load degrades to an empty lexicon
//! instead of aborting the run.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

/// How the lexicon came to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconStatus {
    /// Both word lists were read
    Loaded,
    /// A word list could not be read; both sets are empty and every record
    /// will be labeled neutral
    Degraded { reason: String },
}

impl LexiconStatus {
    pub fn is_degraded(&self) -> bool {
        matches!(self, LexiconStatus::Degraded { .. })
    }
}

impl fmt::Display for LexiconStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconStatus::Loaded => f.write_str("loaded"),
            LexiconStatus::Degraded { reason } => write!(f, "degraded ({reason})"),
        }
    }
}

/// Sentiment lexicon
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
    status: LexiconStatus,
}

impl Lexicon {
    /// Build a lexicon from in-memory word lists. Entries are stored as given.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
            status: LexiconStatus::Loaded,
        }
    }

    /// Empty lexicon in degraded mode
    pub fn empty(reason: impl Into<String>) -> Self {
        Self {
            positive: HashSet::new(),
            negative: HashSet::new(),
            status: LexiconStatus::Degraded {
                reason: reason.into(),
            },
        }
    }

    /// Load both word lists. Never fails: if either file cannot be read the
    /// result is an empty, degraded lexicon.
    ///
    /// Entries keep their case unless `lowercase` is set. Input text is
    /// always lowercased, so entries with uppercase letters can never match
    /// otherwise; their number is logged.
    pub fn from_files<P: AsRef<Path>, N: AsRef<Path>>(
        positive_path: P,
        negative_path: N,
        lowercase: bool,
    ) -> Self {
        info!("Loading lexicons with ISO-8859-1 encoding...");

        let loaded = read_word_list(positive_path.as_ref())
            .and_then(|pos| read_word_list(negative_path.as_ref()).map(|neg| (pos, neg)));

        let (positive, negative) = match loaded {
            Ok(lists) => lists,
            Err(e) => {
                warn!("Error loading lexicons: {e}; continuing with empty lexicons");
                return Self::empty(e.to_string());
            }
        };

        let fold = |words: Vec<String>| -> HashSet<String> {
            if lowercase {
                words.into_iter().map(|w| w.to_lowercase()).collect()
            } else {
                words.into_iter().collect()
            }
        };

        let lexicon = Self {
            positive: fold(positive),
            negative: fold(negative),
            status: LexiconStatus::Loaded,
        };

        let stats = lexicon.stats();
        info!(
            positive = stats.positive_count,
            negative = stats.negative_count,
            "Lexicons loaded successfully"
        );
        if stats.unreachable_count > 0 {
            warn!(
                "{} lexicon entries contain uppercase letters and can never match lowercased text",
                stats.unreachable_count
            );
        }

        lexicon
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }

    pub fn positive_words(&self) -> &HashSet<String> {
        &self.positive
    }

    pub fn negative_words(&self) -> &HashSet<String> {
        &self.negative
    }

    pub fn status(&self) -> &LexiconStatus {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    pub fn stats(&self) -> LexiconStats {
        let unreachable_count = self
            .positive
            .iter()
            .chain(self.negative.iter())
            .filter(|w| w.chars().any(char::is_uppercase))
            .count();

        LexiconStats {
            positive_count: self.positive.len(),
            negative_count: self.negative.len(),
            unreachable_count,
        }
    }
}

/// Lexicon statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconStats {
    pub positive_count: usize,
    pub negative_count: usize,
    /// Entries containing uppercase letters
    pub unreachable_count: usize,
}

/// Read a word list: Latin-1 decoded, trimmed, blank and `;` comment lines
/// skipped.
fn read_word_list(path: &Path) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", path.display())))?;

    Ok(decode_latin1(&bytes)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(';'))
        .map(String::from)
        .collect())
}

/// ISO-8859-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &Path, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path
    }

    #[test]
    fn test_in_memory_lexicon() {
        let lexicon = Lexicon::new(["love", "great"], ["hate"]);

        assert!(lexicon.is_positive("love"));
        assert!(lexicon.is_negative("hate"));
        assert!(!lexicon.is_positive("hate"));
        assert_eq!(lexicon.status(), &LexiconStatus::Loaded);
    }

    #[test]
    fn test_load_skips_comments_and_blank_lines() {
        let dir = tempdir().unwrap();
        let pos = write_file(dir.path(), "pos.txt", b";;; opinion lexicon\n;\n\nlove\r\ngood\n");
        let neg = write_file(dir.path(), "neg.txt", b"bad\n  awful  \n");

        let lexicon = Lexicon::from_files(&pos, &neg, false);

        assert_eq!(lexicon.status(), &LexiconStatus::Loaded);
        assert_eq!(lexicon.positive_words().len(), 2);
        assert!(lexicon.is_positive("good"));
        assert!(lexicon.is_negative("awful"));
    }

    #[test]
    fn test_load_decodes_latin1() {
        let dir = tempdir().unwrap();
        // "naïve" in ISO-8859-1, invalid as UTF-8
        let pos = write_file(dir.path(), "pos.txt", b"na\xefve\n");
        let neg = write_file(dir.path(), "neg.txt", b"");

        let lexicon = Lexicon::from_files(&pos, &neg, false);

        assert!(lexicon.is_positive("naïve"));
    }

    #[test]
    fn test_missing_file_degrades_both_sets() {
        let dir = tempdir().unwrap();
        let pos = write_file(dir.path(), "pos.txt", b"love\n");
        let neg = dir.path().join("missing.txt");

        let lexicon = Lexicon::from_files(&pos, &neg, false);

        assert!(lexicon.status().is_degraded());
        assert!(lexicon.is_empty());
        assert!(!lexicon.is_positive("love"));
    }

    #[test]
    fn test_case_preserved_by_default() {
        let dir = tempdir().unwrap();
        let pos = write_file(dir.path(), "pos.txt", b"Love\nwow\n");
        let neg = write_file(dir.path(), "neg.txt", b"BAD\n");

        let lexicon = Lexicon::from_files(&pos, &neg, false);
        assert!(!lexicon.is_positive("love"));
        assert_eq!(lexicon.stats().unreachable_count, 2);

        let folded = Lexicon::from_files(&pos, &neg, true);
        assert!(folded.is_positive("love"));
        assert!(folded.is_negative("bad"));
        assert_eq!(folded.stats().unreachable_count, 0);
    }
}
