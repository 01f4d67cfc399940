use super::course_key;
use async_trait::async_trait;
use catalogscope_api::{
    CourseDataProvider, CourseDetails, ProviderError, ProviderResponse, ProviderResult,
    RawCatalogEntry, RawSectionEntry, Term,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderOperation {
    Courses,
    Details,
    Sections,
}

/// Everything the provider knows about one term.
///
/// `details` and `sections` are keyed by the concatenated catalog id
/// (`"CSC110"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermCatalog {
    pub courses: Vec<RawCatalogEntry>,
    pub details: HashMap<String, CourseDetails>,
    pub sections: HashMap<String, Vec<RawSectionEntry>>,
}

#[derive(Debug, Default)]
struct CallCounters {
    courses: AtomicUsize,
    details: AtomicUsize,
    sections: AtomicUsize,
}

impl CallCounters {
    fn record(&self, operation: ProviderOperation) {
        let counter = match operation {
            ProviderOperation::Courses => &self.courses,
            ProviderOperation::Details => &self.details,
            ProviderOperation::Sections => &self.sections,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

/// Number of provider calls issued so far, per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub courses: usize,
    pub details: usize,
    pub sections: usize,
}

impl CallCounts {
    pub fn total(&self) -> usize {
        self.courses + self.details + self.sections
    }
}

/// Provider serving fixed catalog data from memory.
///
/// Data is immutable once built; clones share it together with the call
/// counters. Failures can be injected per operation and every call can be
/// delayed to imitate network latency.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    catalogs: Arc<HashMap<Term, TermCatalog>>,
    failures: Arc<HashMap<ProviderOperation, ProviderError>>,
    calls: Arc<CallCounters>,
    latency_ms: u64,
    provider_name: &'static str,
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProvider {
    /// A provider with no terms: every catalog is empty, every course missing.
    pub fn new() -> Self {
        InMemoryProviderBuilder::new().build()
    }

    pub fn builder() -> InMemoryProviderBuilder {
        InMemoryProviderBuilder::new()
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            courses: self.calls.courses.load(Ordering::SeqCst),
            details: self.calls.details.load(Ordering::SeqCst),
            sections: self.calls.sections.load(Ordering::SeqCst),
        }
    }

    pub fn term_count(&self) -> usize {
        self.catalogs.len()
    }

    async fn begin(&self, operation: ProviderOperation) -> ProviderResult<()> {
        self.calls.record(operation);
        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
        match self.failures.get(&operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CourseDataProvider for InMemoryProvider {
    fn name(&self) -> &'static str {
        self.provider_name
    }

    async fn get_courses(&self, term: Term) -> ProviderResult<ProviderResponse<Vec<RawCatalogEntry>>> {
        self.begin(ProviderOperation::Courses).await?;
        let courses = self
            .catalogs
            .get(&term)
            .map(|catalog| catalog.courses.clone())
            .unwrap_or_default();
        Ok(ProviderResponse::new(courses))
    }

    async fn get_course_details(
        &self,
        term: Term,
        subject: &str,
        code: &str,
    ) -> ProviderResult<Option<CourseDetails>> {
        self.begin(ProviderOperation::Details).await?;
        Ok(self
            .catalogs
            .get(&term)
            .and_then(|catalog| catalog.details.get(&course_key(subject, code)))
            .cloned())
    }

    async fn get_course_sections(
        &self,
        term: Term,
        subject: &str,
        code: &str,
    ) -> ProviderResult<ProviderResponse<Vec<RawSectionEntry>>> {
        self.begin(ProviderOperation::Sections).await?;
        let sections = self
            .catalogs
            .get(&term)
            .and_then(|catalog| catalog.sections.get(&course_key(subject, code)))
            .cloned()
            .unwrap_or_default();
        Ok(ProviderResponse::new(sections))
    }
}

/// Fluent construction of an [`InMemoryProvider`].
///
/// ```rust,ignore
/// let term = Term::parse("202109")?;
/// let provider = InMemoryProvider::builder()
///     .course(term, "CSC110", "CSC")
///     .details(term, "CSC", "110", CourseDetails::titled("Fundamentals of Programming I"))
///     .sections(term, "CSC", "110", vec![RawSectionEntry::new("10846", "A01", "lecture")])
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryProviderBuilder {
    catalogs: HashMap<Term, TermCatalog>,
    failures: HashMap<ProviderOperation, ProviderError>,
    latency_ms: u64,
    provider_name: Option<&'static str>,
}

impl InMemoryProviderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a catalog entry for `term`, keeping insertion order.
    pub fn entry(mut self, term: Term, entry: RawCatalogEntry) -> Self {
        self.catalogs.entry(term).or_default().courses.push(entry);
        self
    }

    pub fn course(self, term: Term, catalog_course_id: &str, subject_name: &str) -> Self {
        self.entry(term, RawCatalogEntry::new(catalog_course_id, subject_name))
    }

    pub fn details(mut self, term: Term, subject: &str, code: &str, details: CourseDetails) -> Self {
        self.catalogs
            .entry(term)
            .or_default()
            .details
            .insert(course_key(subject, code), details);
        self
    }

    pub fn sections(
        mut self,
        term: Term,
        subject: &str,
        code: &str,
        sections: Vec<RawSectionEntry>,
    ) -> Self {
        self.catalogs
            .entry(term)
            .or_default()
            .sections
            .insert(course_key(subject, code), sections);
        self
    }

    /// Replace everything known about `term`.
    pub fn catalog(mut self, term: Term, catalog: TermCatalog) -> Self {
        self.catalogs.insert(term, catalog);
        self
    }

    pub fn catalogs(mut self, catalogs: HashMap<Term, TermCatalog>) -> Self {
        self.catalogs.extend(catalogs);
        self
    }

    /// Make every call of `operation` fail with `error`.
    pub fn failure(mut self, operation: ProviderOperation, error: ProviderError) -> Self {
        self.failures.insert(operation, error);
        self
    }

    pub fn latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.provider_name = Some(name);
        self
    }

    pub fn build(self) -> InMemoryProvider {
        InMemoryProvider {
            catalogs: Arc::new(self.catalogs),
            failures: Arc::new(self.failures),
            calls: Arc::new(CallCounters::default()),
            latency_ms: self.latency_ms,
            provider_name: self.provider_name.unwrap_or("memory"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fall() -> Term {
        Term::parse("202109").unwrap()
    }

    #[tokio::test]
    async fn test_courses_keep_insertion_order() {
        let provider = InMemoryProvider::builder()
            .course(fall(), "CSC225", "CSC")
            .course(fall(), "CSC110", "CSC")
            .build();

        let courses = provider.get_courses(fall()).await.unwrap().response;
        let ids: Vec<&str> = courses.iter().map(|c| c.catalog_course_id.as_str()).collect();
        assert_eq!(ids, vec!["CSC225", "CSC110"]);
    }

    #[tokio::test]
    async fn test_unknown_term_and_course_are_empty() {
        let provider = InMemoryProvider::builder()
            .course(fall(), "CSC110", "CSC")
            .build();
        let spring = Term::parse("202201").unwrap();

        assert!(provider.get_courses(spring).await.unwrap().response.is_empty());
        assert!(
            provider
                .get_course_details(fall(), "CSC", "999")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            provider
                .get_course_sections(fall(), "CSC", "999")
                .await
                .unwrap()
                .response
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_calls_are_counted_across_clones() {
        let provider = InMemoryProvider::new();
        let cloned = provider.clone();

        provider.get_courses(fall()).await.unwrap();
        cloned.get_course_details(fall(), "CSC", "110").await.unwrap();
        cloned.get_course_sections(fall(), "CSC", "110").await.unwrap();

        let calls = provider.calls();
        assert_eq!(
            calls,
            CallCounts {
                courses: 1,
                details: 1,
                sections: 1
            }
        );
        assert_eq!(calls.total(), 3);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let provider = InMemoryProvider::builder()
            .course(fall(), "CSC110", "CSC")
            .failure(
                ProviderOperation::Courses,
                ProviderError::Transport("connection reset".to_string()),
            )
            .build();

        let result = provider.get_courses(fall()).await;
        assert_eq!(
            result,
            Err(ProviderError::Transport("connection reset".to_string()))
        );
        assert_eq!(provider.calls().courses, 1);
        assert!(provider.get_course_details(fall(), "CSC", "110").await.is_ok());
    }

    #[tokio::test]
    async fn test_name() {
        assert_eq!(InMemoryProvider::new().name(), "memory");
        assert_eq!(InMemoryProvider::builder().name("stub").build().name(), "stub");
    }
}
