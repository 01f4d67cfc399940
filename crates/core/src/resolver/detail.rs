use crate::validate::{CourseKey, SectionKey};
use catalogscope_api::{
    ApiError, ApiResult, CourseDataProvider, CourseDetail, CourseDetails, RawSectionEntry,
    SectionSummary,
};
use std::sync::Arc;
use tracing::{debug, error};

/// Resolves a single course, or a single section of it.
///
/// Details and sections are independent reads and are fetched together; a
/// failure of either fails the lookup.
#[derive(Clone)]
pub struct DetailResolver {
    provider: Arc<dyn CourseDataProvider>,
}

impl DetailResolver {
    pub fn new(provider: Arc<dyn CourseDataProvider>) -> Self {
        Self { provider }
    }

    pub async fn get_course_detail(&self, key: &CourseKey) -> ApiResult<CourseDetail> {
        let (details, sections) = self.fetch(key).await?;
        let Some(details) = details else {
            debug!("{} {}{} not found", key.term, key.subject, key.code);
            return Err(ApiError::course_not_found());
        };

        Ok(CourseDetail::new(
            details,
            sections.into_iter().map(SectionSummary::from).collect(),
        ))
    }

    /// A missing section is reported the same way as a missing course.
    pub async fn get_section(&self, key: &SectionKey) -> ApiResult<SectionSummary> {
        let course = &key.course;
        let (details, sections) = self.fetch(course).await?;
        if details.is_none() {
            debug!("{} {}{} not found", course.term, course.subject, course.code);
            return Err(ApiError::course_not_found());
        }

        sections
            .into_iter()
            .find(|section| section.section_code == key.section)
            .map(SectionSummary::from)
            .ok_or_else(ApiError::course_not_found)
    }

    async fn fetch(&self, key: &CourseKey) -> ApiResult<(Option<CourseDetails>, Vec<RawSectionEntry>)> {
        let provider = self.provider.as_ref();
        let (details, sections) = tokio::try_join!(
            provider.get_course_details(key.term, &key.subject, &key.code),
            provider.get_course_sections(key.term, &key.subject, &key.code),
        )
        .map_err(|e| {
            error!(
                "Provider {} failed to fetch {} {}{}: {}",
                provider.name(),
                key.term,
                key.subject,
                key.code,
                e
            );
            ApiError::from(e)
        })?;
        Ok((details, sections.response))
    }
}
