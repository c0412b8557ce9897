//! Recognized Azure DevOps hosts
//!
//! The registry is built once from configuration and only answers
//! membership questions. `dev.azure.com` is always a member; configured
//! hosts are added on top of it.

/// Host of the Azure DevOps cloud service
pub const DEFAULT_HOST: &str = "dev.azure.com";

/// A recognized Azure DevOps instance host name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostEntry {
    /// Host name, optionally with `:port` (e.g. `dev.azure.com`, `tfs.corp:8080`)
    pub host: String,
}

impl HostEntry {
    /// Create a host entry
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

/// Set of recognized Azure DevOps hosts
///
/// Lookups are exact, case-sensitive string comparisons. No wildcard or
/// sub-host matching is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRegistry {
    entries: Vec<HostEntry>,
}

impl HostRegistry {
    /// Registry recognizing only the default cloud host
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![HostEntry::new(DEFAULT_HOST)],
        }
    }

    /// Registry recognizing the default host plus every given host
    ///
    /// Blank entries are skipped and duplicates collapse.
    #[must_use]
    pub fn from_hosts<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = Self::new();
        for host in hosts {
            registry.insert(host.as_ref());
        }
        registry
    }

    /// Add a host to the registry, returning `true` if it was not present
    pub fn insert(&mut self, host: &str) -> bool {
        let host = host.trim();
        if host.is_empty() {
            log::debug!("ignoring blank Azure DevOps host entry");
            return false;
        }
        if self.is_recognized(host) {
            return false;
        }
        self.entries.push(HostEntry::new(host));
        true
    }

    /// Check whether a candidate host is a recognized Azure DevOps host
    #[must_use]
    pub fn is_recognized(&self, candidate: &str) -> bool {
        self.entries.iter().any(|entry| entry.host == candidate)
    }

    /// Iterate over the recognized hosts in insertion order
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.host.as_str())
    }

    /// Number of recognized hosts (never zero)
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no hosts; never true for a constructed registry
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HostRegistry {
    fn default() -> Self {
        Self::new()
    }
}
