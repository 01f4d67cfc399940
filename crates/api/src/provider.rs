use crate::error::ProviderResult;
use crate::models::{CourseDetails, ProviderResponse, RawCatalogEntry, RawSectionEntry, Term};
use async_trait::async_trait;

/// Upstream source of raw catalog, course-detail, and section data.
///
/// Implementations are free to go over the network; every call may fail with a
/// [`ProviderError`](crate::error::ProviderError). Retry and timeout policy, if
/// any, belongs to the implementation.
#[async_trait]
pub trait CourseDataProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Every course offered in `term`, in upstream order.
    async fn get_courses(&self, term: Term) -> ProviderResult<ProviderResponse<Vec<RawCatalogEntry>>>;

    /// Course metadata, or `None` when the course does not exist in `term`.
    async fn get_course_details(
        &self,
        term: Term,
        subject: &str,
        code: &str,
    ) -> ProviderResult<Option<CourseDetails>>;

    /// Registration sections of a course, in upstream order.
    async fn get_course_sections(
        &self,
        term: Term,
        subject: &str,
        code: &str,
    ) -> ProviderResult<ProviderResponse<Vec<RawSectionEntry>>>;
}
