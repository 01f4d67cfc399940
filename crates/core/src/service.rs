use crate::config::ServiceConfig;
use crate::resolver::{CatalogResolver, DetailResolver};
use crate::validate::{ListCoursesParams, Validator};
use catalogscope_api::{
    ApiResult, CourseDataProvider, CourseDetail, CourseIdentity, SectionSummary, Term,
    TermsResponse,
};
use std::sync::Arc;

/// Entry point for every catalog query.
///
/// Raw route parameters go in, are validated, and only then reach a resolver.
/// The provider is injected; the service holds no other state and is cheap to
/// clone into request handlers.
#[derive(Clone)]
pub struct CatalogService {
    provider: Arc<dyn CourseDataProvider>,
    validator: Validator,
    catalog: CatalogResolver,
    detail: DetailResolver,
}

impl CatalogService {
    pub fn new(provider: Arc<dyn CourseDataProvider>, config: &ServiceConfig) -> Self {
        Self {
            validator: Validator::new(config),
            catalog: CatalogResolver::new(provider.clone(), config.malformed_entries),
            detail: DetailResolver::new(provider.clone()),
            provider,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub fn terms(&self) -> TermsResponse {
        TermsResponse {
            terms: Term::all().map(|term| term.as_str().to_string()).collect(),
        }
    }

    pub async fn list_courses(
        &self,
        term: &str,
        params: &ListCoursesParams,
    ) -> ApiResult<Vec<CourseIdentity>> {
        let query = self.validator.course_query(term, params)?;
        self.catalog.list_courses(&query).await
    }

    pub async fn course_detail(
        &self,
        term: &str,
        subject: &str,
        code: &str,
    ) -> ApiResult<CourseDetail> {
        let key = self.validator.course_key(term, subject, code)?;
        self.detail.get_course_detail(&key).await
    }

    pub async fn section(
        &self,
        term: &str,
        subject: &str,
        code: &str,
        section: &str,
    ) -> ApiResult<SectionSummary> {
        let key = self.validator.section_key(term, subject, code, section)?;
        self.detail.get_section(&key).await
    }
}
