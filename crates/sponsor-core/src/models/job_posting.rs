use serde::{Deserialize, Serialize};

/// Text extracted from a job page by the host.
///
/// Only `description` is ever classified. `title` and `company` ride along
/// for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// `None` when extraction found nothing.
    pub description: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
}

impl JobPosting {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// The description, or the empty string when extraction failed.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}
