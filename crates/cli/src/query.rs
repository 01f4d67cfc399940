use crate::CliResult;
use catalogscope_api::TermsResponse;
use catalogscope_core::validate::ListCoursesParams;
use catalogscope_core::ServiceConfig;
use serde::Serialize;

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn terms() -> CliResult {
    let terms = TermsResponse {
        terms: catalogscope_api::Term::all()
            .map(|term| term.to_string())
            .collect(),
    };
    print_json(&terms)
}

pub async fn courses(
    config: ServiceConfig,
    term: String,
    params: ListCoursesParams,
) -> CliResult {
    let service = catalogscope_runtime::build_default_service(&config)?;
    let courses = service.list_courses(&term, &params).await?;
    print_json(&courses)
}

pub async fn course(
    config: ServiceConfig,
    term: String,
    subject: String,
    code: String,
    section: Option<String>,
) -> CliResult {
    let service = catalogscope_runtime::build_default_service(&config)?;
    match section {
        Some(section) => {
            let summary = service.section(&term, &subject, &code, &section).await?;
            print_json(&summary)
        }
        None => {
            let detail = service.course_detail(&term, &subject, &code).await?;
            print_json(&detail)
        }
    }
}
