//! Identity recovered from an Azure DevOps repository URL

/// Host, organization, project and repository of an Azure DevOps repository
///
/// `collection` holds the on-premises subpath segments between the host and
/// the organization (e.g. `tfs`); it is empty for cloud URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocation {
    host: String,
    collection: Vec<String>,
    organization: String,
    project: String,
    repository: String,
}

impl ParsedLocation {
    /// Assemble a parsed location from its components
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        collection: Vec<String>,
        organization: impl Into<String>,
        project: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            collection,
            organization: organization.into(),
            project: project.into(),
            repository: repository.into(),
        }
    }

    /// `<host>[/<collection>...]/<organization>`
    #[must_use]
    pub fn host_org(&self) -> String {
        let mut parts = Vec::with_capacity(self.collection.len() + 2);
        parts.push(self.host.as_str());
        parts.extend(self.collection.iter().map(String::as_str));
        parts.push(&self.organization);
        parts.join("/")
    }

    /// `<project>/<repository>`
    #[must_use]
    pub fn project_repo(&self) -> String {
        format!("{}/{}", self.project, self.repository)
    }

    /// Recognized host the URL matched
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// On-premises collection subpath segments
    #[must_use]
    pub fn collection(&self) -> &[String] {
        &self.collection
    }

    /// Organization (or on-premises collection name)
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Project
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Repository
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl std::fmt::Display for ParsedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.host_org(), self.project_repo())
    }
}
