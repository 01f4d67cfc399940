use crate::config::MalformedEntryPolicy;
use crate::decompose::decompose;
use crate::validate::{CourseQuery, Pagination};
use catalogscope_api::{ApiError, ApiResult, CourseDataProvider, CourseIdentity};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Resolves the filtered, paginated course list of a term.
#[derive(Clone)]
pub struct CatalogResolver {
    provider: Arc<dyn CourseDataProvider>,
    policy: MalformedEntryPolicy,
}

impl CatalogResolver {
    pub fn new(provider: Arc<dyn CourseDataProvider>, policy: MalformedEntryPolicy) -> Self {
        Self { provider, policy }
    }

    /// One upstream read per call; upstream order is preserved.
    pub async fn list_courses(&self, query: &CourseQuery) -> ApiResult<Vec<CourseIdentity>> {
        let entries = self
            .provider
            .get_courses(query.term)
            .await
            .map_err(|e| {
                error!(
                    "Provider {} failed to list courses for {}: {}",
                    self.provider.name(),
                    query.term,
                    e
                );
                ApiError::from(e)
            })?
            .response;

        let mut courses = Vec::with_capacity(entries.len());
        for entry in &entries {
            match decompose(entry) {
                Ok(course) => courses.push(course),
                Err(e) => match self.policy {
                    MalformedEntryPolicy::Skip => warn!("Skipping catalog entry: {}", e),
                    MalformedEntryPolicy::Reject => return Err(e.into()),
                },
            }
        }

        let filtered = courses.into_iter().filter(|course| {
            matches_filters(course, query.subject.as_deref(), query.code.as_deref())
        });
        let page = paginate(filtered, query.pagination);

        debug!(
            "Term {}: {} upstream entries, returning {} on page {}",
            query.term,
            entries.len(),
            page.len(),
            query.pagination.page
        );
        Ok(page)
    }
}

/// Absent filters match everything.
pub fn matches_filters(course: &CourseIdentity, subject: Option<&str>, code: Option<&str>) -> bool {
    subject.is_none_or(|s| course.subject == s) && code.is_none_or(|c| course.code == c)
}

/// The `[(page - 1) * limit, page * limit)` slice of `items`.
pub fn paginate<T>(items: impl IntoIterator<Item = T>, pagination: Pagination) -> Vec<T> {
    items
        .into_iter()
        .skip(pagination.offset())
        .take(pagination.limit as usize)
        .collect()
}
