//! Embedded default extension dictionary.
//! Using include_str! to embed wordlists/extensions.txt at compile time.

/// Embedded filename-extension list from wordlists/extensions.txt
const EMBEDDED_EXTENSIONS_TXT: &str = include_str!("../wordlists/extensions.txt");

/// Return the embedded extension list as owned Strings (one per line).
pub fn default_extensions() -> Vec<String> {
    EMBEDDED_EXTENSIONS_TXT
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// Ordered list of recognized filename suffixes. Built once from the embedded
/// dictionary plus the --filter-extensions / --exclude-extensions flags and
/// passed explicitly to the extractor; never ambient state.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    entries: Vec<String>,
}

/// Accept both `pdf` and `.pdf` on the command line.
fn normalize(ext: &str) -> String {
    let e = ext.trim();
    if e.starts_with('.') {
        e.to_string()
    } else {
        format!(".{}", e)
    }
}

impl ExtensionSet {
    /// Narrow the embedded dictionary: include filter first, then exclude.
    /// An excluded entry never survives even if it was also included.
    pub fn from_flags(filter: &[String], exclude: &[String]) -> Self {
        let include: Vec<String> = filter.iter().map(|e| normalize(e)).collect();
        let excluded: Vec<String> = exclude.iter().map(|e| normalize(e)).collect();
        let entries = default_extensions()
            .into_iter()
            .filter(|e| include.is_empty() || include.contains(e))
            .filter(|e| !excluded.contains(e))
            .collect();
        ExtensionSet { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.entries.iter().any(|e| e == ext)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        ExtensionSet { entries: default_extensions() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_extensions() {
        let exts = default_extensions();
        assert!(exts.len() > 100);
        assert!(exts.iter().all(|e| e.starts_with('.')));
        assert!(exts.contains(&".js".to_string()));
        assert!(exts.contains(&".pdf".to_string()));
        assert!(exts.contains(&".tar.gz".to_string()));
    }

    #[test]
    fn test_filter_keeps_dictionary_order() {
        let set = ExtensionSet::from_flags(&["pdf".into(), ".js".into()], &[]);
        assert_eq!(set.entries(), &[".js".to_string(), ".pdf".to_string()]);
    }

    #[test]
    fn test_exclude() {
        let set = ExtensionSet::from_flags(&[], &[".pdf".into()]);
        assert!(!set.contains(".pdf"));
        assert!(set.contains(".js"));
        assert_eq!(set.len(), default_extensions().len() - 1);
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let set = ExtensionSet::from_flags(&["pdf".into(), "js".into()], &["pdf".into()]);
        assert_eq!(set.entries(), &[".js".to_string()]);
    }

    #[test]
    fn test_unknown_filter_yields_empty() {
        let set = ExtensionSet::from_flags(&["nope".into()], &[]);
        assert!(set.is_empty());
    }
}
