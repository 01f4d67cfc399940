use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Envelope the upstream provider wraps list payloads in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse<T> {
    pub response: T,
}

impl<T> ProviderResponse<T> {
    pub fn new(response: T) -> Self {
        Self { response }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SubjectCode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One course as listed by the upstream catalog.
///
/// `catalog_course_id` is subject and code glued together (`"CSC110"`,
/// `"MATH100"`); `subject_code.name` is the only hint of where to split it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalogEntry {
    #[serde(rename = "__catalogCourseId")]
    pub catalog_course_id: String,
    pub subject_code: SubjectCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl RawCatalogEntry {
    pub fn new(catalog_course_id: impl Into<String>, subject_name: impl Into<String>) -> Self {
        Self {
            catalog_course_id: catalog_course_id.into(),
            subject_code: SubjectCode {
                name: subject_name.into(),
                description: None,
            },
            pid: None,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A catalog entry split into its subject and code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct CourseIdentity {
    pub subject: String,
    pub code: String,
}

impl CourseIdentity {
    pub fn new(subject: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            code: code.into(),
        }
    }

    /// The concatenated identifier this course was decomposed from.
    pub fn catalog_id(&self) -> String {
        format!("{}{}", self.subject, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TermsResponse {
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
