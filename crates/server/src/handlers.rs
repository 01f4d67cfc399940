use crate::extract::{ApiPath, ApiQuery};
use crate::response::ApiErrorResponse;
use axum::extract::State;
use axum::Json;
use catalogscope_api::{CourseDetail, CourseIdentity, SectionSummary, TermsResponse};
use catalogscope_core::validate::ListCoursesParams;
use catalogscope_core::CatalogService;
use tracing::info;

type HandlerResult<T> = Result<Json<T>, ApiErrorResponse>;

pub async fn list_terms(State(service): State<CatalogService>) -> Json<TermsResponse> {
    Json(service.terms())
}

pub async fn list_courses(
    State(service): State<CatalogService>,
    ApiPath(term): ApiPath<String>,
    ApiQuery(params): ApiQuery<ListCoursesParams>,
) -> HandlerResult<Vec<CourseIdentity>> {
    info!("GET courses term={} {:?}", term, params);
    let courses = service.list_courses(&term, &params).await?;
    Ok(Json(courses))
}

pub async fn course_detail(
    State(service): State<CatalogService>,
    ApiPath((term, subject, code)): ApiPath<(String, String, String)>,
) -> HandlerResult<CourseDetail> {
    info!("GET course {} {}{}", term, subject, code);
    let detail = service.course_detail(&term, &subject, &code).await?;
    Ok(Json(detail))
}

pub async fn section_detail(
    State(service): State<CatalogService>,
    ApiPath((term, subject, code, section)): ApiPath<(String, String, String, String)>,
) -> HandlerResult<SectionSummary> {
    info!("GET section {} {}{} {}", term, subject, code, section);
    let summary = service.section(&term, &subject, &code, &section).await?;
    Ok(Json(summary))
}
