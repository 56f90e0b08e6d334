use crate::dicts::ExtensionSet;
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub enum InputMode {
    Url(String),
    List(PathBuf),
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Options {
    pub mode: InputMode,
    pub threads: usize,
    pub delay: f64,
    pub timeout: u64,
    pub headers: Vec<(String, String)>,
    pub extensions: ExtensionSet,
    pub all: bool,
    pub output: Option<PathBuf>,
    pub output_type: String,
    pub gzip: bool,
    pub append: bool,
    pub not_print: bool,
    pub silent: bool,
    pub progress: bool,
    pub progress_interval: u64,
    pub log_level: String,
}

impl Options {
    /// Configuration-time validation. Any error here is fatal and happens
    /// before the first fetch.
    pub fn check(&self) -> Result<()> {
        if self.threads < 1 {
            anyhow::bail!("threads must be >= 1");
        }
        if !self.delay.is_finite() || self.delay < 0.0 {
            anyhow::bail!("delay must be a non-negative number of seconds");
        }
        match self.output_type.as_str() {
            "txt" | "json" | "jsonl" => {}
            other => anyhow::bail!("unsupported output type: {}", other),
        }
        Ok(())
    }
}

/// Parse repeated -H 'Name: value' flags. An entry must contain exactly one
/// ':' separator; malformed entries are reported and skipped, not fatal.
pub fn parse_headers(raw: &[String]) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for h in raw {
        let parts: Vec<&str> = h.split(':').collect();
        if parts.len() == 2 {
            out.push((parts[0].trim().to_string(), parts[1].trim().to_string()));
        } else {
            warn!(header = %h, "invalid header format, use 'Name: value'");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_options() -> Options {
        Options {
            mode: InputMode::Url("http://example.com".into()),
            threads: 10,
            delay: 0.0,
            timeout: 30,
            headers: vec![],
            extensions: ExtensionSet::default(),
            all: false,
            output: None,
            output_type: "txt".into(),
            gzip: false,
            append: false,
            not_print: false,
            silent: false,
            progress: true,
            progress_interval: 1,
            log_level: "info".into(),
        }
    }

    #[test]
    fn test_parse_headers() {
        let parsed = parse_headers(&[
            "User-Agent: scanner".to_string(),
            "broken".to_string(),
            "a:b:c".to_string(),
            " X-Key :  token ".to_string(),
        ]);
        assert_eq!(
            parsed,
            vec![
                ("User-Agent".to_string(), "scanner".to_string()),
                ("X-Key".to_string(), "token".to_string()),
            ]
        );
    }

    #[test]
    fn test_check_rejects_zero_threads() {
        let mut opt = base_options();
        opt.threads = 0;
        assert!(opt.check().is_err());
    }

    #[test]
    fn test_check_rejects_negative_delay() {
        let mut opt = base_options();
        opt.delay = -1.5;
        assert!(opt.check().is_err());
    }

    #[test]
    fn test_check_rejects_unknown_output_type() {
        let mut opt = base_options();
        opt.output_type = "csv".into();
        assert!(opt.check().is_err());
    }

    #[test]
    fn test_check_accepts_defaults() {
        assert!(base_options().check().is_ok());
    }
}
