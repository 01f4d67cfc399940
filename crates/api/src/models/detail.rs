use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Course metadata as returned by the upstream detail lookup.
///
/// Fields beyond the ones named here are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CourseDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CourseDetails {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}

/// One registration section as listed upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RawSectionEntry {
    pub crn: String,
    pub section_code: String,
    pub section_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawSectionEntry {
    pub fn new(
        crn: impl Into<String>,
        section_code: impl Into<String>,
        section_type: impl Into<String>,
    ) -> Self {
        Self {
            crn: crn.into(),
            section_code: section_code.into(),
            section_type: section_type.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionSummary {
    pub crn: String,
    pub section: String,
    pub section_type: String,
}

impl From<&RawSectionEntry> for SectionSummary {
    fn from(raw: &RawSectionEntry) -> Self {
        Self {
            crn: raw.crn.clone(),
            section: raw.section_code.clone(),
            section_type: raw.section_type.clone(),
        }
    }
}

impl From<RawSectionEntry> for SectionSummary {
    fn from(raw: RawSectionEntry) -> Self {
        Self {
            crn: raw.crn,
            section: raw.section_code,
            section_type: raw.section_type,
        }
    }
}

/// Course metadata merged with its section summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub details: CourseDetails,
    pub sections: Vec<SectionSummary>,
}

impl CourseDetail {
    /// Merge `details` with `sections`.
    ///
    /// An upstream `sections` field in the passthrough metadata is dropped so
    /// the merged record carries a single `sections` key.
    pub fn new(mut details: CourseDetails, sections: Vec<SectionSummary>) -> Self {
        details.extra.remove("sections");
        Self { details, sections }
    }
}
