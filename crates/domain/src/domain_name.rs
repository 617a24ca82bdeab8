use std::fmt;

/// An ordered sequence of DNS labels, e.g. `["www", "example", "com"]`.
///
/// The implicit root terminator is never stored. Empty labels are kept
/// as-is so that degenerate input like `"a..b"` encodes literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<String>,
}

impl DomainName {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Splits a dotted host name into labels, trimming whitespace around each.
    pub fn from_host_name(host_name: &str) -> Self {
        let labels = host_name
            .split('.')
            .map(|label| label.trim().to_string())
            .collect();
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// True when at least one label carries bytes.
    pub fn has_content(&self) -> bool {
        self.labels.iter().any(|label| !label.is_empty())
    }

    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }
}

impl From<Vec<String>> for DomainName {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("."))
    }
}
