use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single job posting as stored in the catalog file.
///
/// Every field is optional in the source; missing text fields read as empty
/// strings and missing skills as an empty list. Fields outside the known set
/// are kept in `extra` and serialized back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobPosting {
    /// All searchable text fields, in indexing order.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [
            self.job_title.as_str(),
            self.job_description.as_str(),
            self.experience_level.as_str(),
            self.location.as_str(),
            self.company_name.as_str(),
        ]
        .into_iter()
        .chain(self.skills.iter().map(String::as_str))
    }
}
