use crate::dicts::ExtensionSet;
use anyhow::Result;
use regex::Regex;
use std::collections::HashSet;

/// Maximal run of word characters with internal hyphens.
const WORD_PATTERN: &str = r"\w+(?:-\w+)*";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Default: word optionally followed by one recognized extension.
    /// Bare words without an extension are kept.
    Suffix,
    /// --all: every bare word plus every word.ext pair whose suffix is in
    /// the extension set.
    All,
}

/// Regex-based token extractor. Compiled once per run; extraction is a pure
/// function of (text, extension set, mode).
pub struct Extractor {
    word_re: Regex,
    pair_re: Option<Regex>,
}

/// Build the suffix alternation. Stable longest-first order so a suffix that
/// prefixes another (.htm/.html, .tar/.tar.gz) never shadows the longer one.
fn suffix_alternation(exts: &ExtensionSet) -> String {
    let mut alts: Vec<&str> = exts.entries().iter().map(|e| e.as_str()).collect();
    alts.sort_by_key(|e| std::cmp::Reverse(e.len()));
    alts.iter()
        .map(|e| regex::escape(e))
        .collect::<Vec<_>>()
        .join("|")
}

impl Extractor {
    pub fn new(exts: &ExtensionSet, mode: ExtractMode) -> Result<Self> {
        let alt = suffix_alternation(exts);
        let (word_re, pair_re) = match mode {
            ExtractMode::Suffix => {
                let pattern = if alt.is_empty() {
                    WORD_PATTERN.to_string()
                } else {
                    format!(r"{}(?:{})?", WORD_PATTERN, alt)
                };
                (Regex::new(&pattern)?, None)
            }
            ExtractMode::All => {
                let pair = if alt.is_empty() {
                    None
                } else {
                    Some(Regex::new(&format!(r"{}(?:{})", WORD_PATTERN, alt))?)
                };
                (Regex::new(WORD_PATTERN)?, pair)
            }
        };
        Ok(Extractor { word_re, pair_re })
    }

    pub fn extract(&self, text: &str) -> HashSet<String> {
        let mut words: HashSet<String> = self
            .word_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        if let Some(re) = &self.pair_re {
            words.extend(re.find_iter(text).map(|m| m.as_str().to_string()));
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix_extractor() -> Extractor {
        Extractor::new(&ExtensionSet::default(), ExtractMode::Suffix).unwrap()
    }

    fn all_extractor() -> Extractor {
        Extractor::new(&ExtensionSet::default(), ExtractMode::All).unwrap()
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suffix_scenario() {
        let ex = suffix_extractor();
        let words = ex.extract("report.pdf and notes.txt, see index.html!");
        assert_eq!(
            words,
            set(&["report.pdf", "and", "notes.txt", "see", "index.html"])
        );
    }

    #[test]
    fn test_extract_is_deterministic() {
        let ex = suffix_extractor();
        let text = "main.js vendor.min.js styles.css";
        assert_eq!(ex.extract(text), ex.extract(text));
    }

    #[test]
    fn test_longer_suffix_preferred() {
        let ex = suffix_extractor();
        // .htm must not shadow .html, .tar must not shadow .tar.gz
        let words = ex.extract("backup.tar.gz page.htm other.html");
        assert!(words.contains("backup.tar.gz"));
        assert!(words.contains("page.htm"));
        assert!(words.contains("other.html"));
    }

    #[test]
    fn test_unknown_suffix_splits() {
        let ex = suffix_extractor();
        let words = ex.extract("file.xyz");
        assert_eq!(words, set(&["file", "xyz"]));
    }

    #[test]
    fn test_no_double_suffix() {
        let ex = suffix_extractor();
        let exts = ExtensionSet::default();
        for word in ex.extract("a.pdf.pdf data.js.map index.html.bak") {
            let suffixed = exts.entries().iter().filter(|e| word.ends_with(*e)).count();
            // a token carries at most one trailing extension from the set
            if suffixed > 0 {
                let stripped = exts
                    .entries()
                    .iter()
                    .find(|e| word.ends_with(*e))
                    .map(|e| &word[..word.len() - e.len()])
                    .unwrap();
                assert!(!exts.entries().iter().any(|e| stripped.ends_with(e.as_str())));
            }
        }
    }

    #[test]
    fn test_hyphenated_words() {
        let ex = suffix_extractor();
        let words = ex.extract("my-app.js some-long-name");
        assert!(words.contains("my-app.js"));
        assert!(words.contains("some-long-name"));
    }

    #[test]
    fn test_empty_text() {
        let ex = suffix_extractor();
        assert!(ex.extract("").is_empty());
        assert!(ex.extract("!!! ---").is_empty());
    }

    #[test]
    fn test_all_mode_pairs_and_bare_words() {
        let ex = all_extractor();
        let words = ex.extract("login.php and admin");
        assert!(words.contains("login"));
        assert!(words.contains("php"));
        assert!(words.contains("and"));
        assert!(words.contains("admin"));
        assert!(words.contains("login.php"));
    }

    #[test]
    fn test_all_mode_filters_pairs_by_extension_set() {
        let exts = ExtensionSet::from_flags(&[".js".into()], &[]);
        let ex = Extractor::new(&exts, ExtractMode::All).unwrap();
        let words = ex.extract("app.min.js data.php");
        assert!(words.contains("min.js"));
        assert!(!words.contains("data.php"));
        // bare words still present regardless of suffix
        assert!(words.contains("data"));
        assert!(words.contains("php"));
    }

    #[test]
    fn test_all_mode_bare_words_superset_of_pair_stems() {
        let ex = all_extractor();
        let exts = ExtensionSet::default();
        let words = ex.extract("assets/app.js img/logo.png readme");
        for w in words.iter() {
            if let Some(ext) = exts.entries().iter().find(|e| w.ends_with(*e)) {
                if w.len() > ext.len() {
                    let stem = &w[..w.len() - ext.len()];
                    assert!(words.contains(stem), "missing bare stem {}", stem);
                }
            }
        }
    }

    #[test]
    fn test_union_idempotent() {
        let ex = suffix_extractor();
        let text = "dump.sql backup.zip dump.sql";
        let once = ex.extract(text);
        let mut twice = ex.extract(text);
        twice.extend(ex.extract(text));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_extension_set_still_extracts_words() {
        let exts = ExtensionSet::from_flags(&["nope".into()], &[]);
        let ex = Extractor::new(&exts, ExtractMode::Suffix).unwrap();
        let words = ex.extract("report.pdf");
        assert_eq!(words, set(&["report", "pdf"]));
    }
}
