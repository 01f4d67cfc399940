//! Validation of raw route parameters.
//!
//! Everything arrives as strings; the validator turns them into typed
//! queries and keys or fails with a [`ValidationError`]. Nothing here talks
//! to the provider, so a rejected request never costs an upstream call.

use crate::config::{DEFAULT_PAGE, ServiceConfig};
use catalogscope_api::{Term, ValidationError};
use serde::Deserialize;
use std::ops::RangeInclusive;

pub const SUBJECT_LEN: RangeInclusive<usize> = 2..=4;
pub const CODE_LEN: RangeInclusive<usize> = 3..=4;
pub const SECTION_LEN: RangeInclusive<usize> = 1..=4;

/// Query string of the course list route, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCoursesParams {
    pub subject: Option<String>,
    pub code: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Pagination {
    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page as usize)
            .saturating_sub(1)
            .saturating_mul(self.limit as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseQuery {
    pub term: Term,
    pub subject: Option<String>,
    pub code: Option<String>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseKey {
    pub term: Term,
    pub subject: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionKey {
    pub course: CourseKey,
    pub section: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Validator {
    default_limit: u32,
    max_limit: Option<u32>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}

impl Validator {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            default_limit: config.default_limit,
            max_limit: config.max_limit,
        }
    }

    pub fn term(&self, raw: &str) -> Result<Term, ValidationError> {
        Term::parse(raw)
    }

    /// Subject and code are free-form filters here; empty values count as absent.
    pub fn course_query(
        &self,
        term: &str,
        params: &ListCoursesParams,
    ) -> Result<CourseQuery, ValidationError> {
        let term = self.term(term)?;
        let page = parse_positive("page", params.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_positive("limit", params.limit.as_deref(), self.default_limit)?;
        if let Some(max) = self.max_limit.filter(|max| limit > *max) {
            return Err(ValidationError::LimitTooLarge { max, value: limit });
        }

        Ok(CourseQuery {
            term,
            subject: non_empty(params.subject.as_deref()),
            code: non_empty(params.code.as_deref()),
            pagination: Pagination { page, limit },
        })
    }

    pub fn course_key(
        &self,
        term: &str,
        subject: &str,
        code: &str,
    ) -> Result<CourseKey, ValidationError> {
        let term = self.term(term)?;
        check_len("subject", subject, SUBJECT_LEN)?;
        check_len("code", code, CODE_LEN)?;
        Ok(CourseKey {
            term,
            subject: subject.to_string(),
            code: code.to_string(),
        })
    }

    pub fn section_key(
        &self,
        term: &str,
        subject: &str,
        code: &str,
        section: &str,
    ) -> Result<SectionKey, ValidationError> {
        let course = self.course_key(term, subject, code)?;
        check_len("section", section, SECTION_LEN)?;
        Ok(SectionKey {
            course,
            section: section.to_string(),
        })
    }
}

fn check_len(
    field: &'static str,
    value: &str,
    bounds: RangeInclusive<usize>,
) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if bounds.contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError::LengthOutOfRange {
            field,
            min: *bounds.start(),
            max: *bounds.end(),
            actual,
        })
    }
}

fn parse_positive(
    field: &'static str,
    raw: Option<&str>,
    default: u32,
) -> Result<u32, ValidationError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u32>() {
        Ok(value) if value >= 1 => Ok(value),
        _ => Err(ValidationError::InvalidPagination {
            field,
            value: raw.to_string(),
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<&str>, limit: Option<&str>) -> ListCoursesParams {
        ListCoursesParams {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_course_query_defaults() {
        let query = Validator::default()
            .course_query("202109", &ListCoursesParams::default())
            .unwrap();
        assert_eq!(query.term.as_str(), "202109");
        assert_eq!(query.pagination, Pagination { page: 1, limit: 10 });
        assert!(query.subject.is_none());
        assert!(query.code.is_none());
    }

    #[test]
    fn test_course_query_unknown_term() {
        let err = Validator::default()
            .course_query("209999", &ListCoursesParams::default())
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownTerm("209999".to_string()));
    }

    #[test]
    fn test_pagination_must_be_positive() {
        let validator = Validator::default();
        for (page, limit) in [
            (Some("0"), None),
            (None, Some("0")),
            (Some("-1"), None),
            (Some("two"), None),
            (None, Some("1.5")),
            (Some(""), None),
        ] {
            let err = validator
                .course_query("202109", &params(page, limit))
                .unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidPagination { .. }),
                "page={page:?} limit={limit:?} gave {err:?}"
            );
        }

        let query = validator
            .course_query("202109", &params(Some("3"), Some("25")))
            .unwrap();
        assert_eq!(query.pagination, Pagination { page: 3, limit: 25 });
    }

    #[test]
    fn test_limit_is_unbounded_by_default() {
        let query = Validator::default()
            .course_query("202109", &params(None, Some("150")))
            .unwrap();
        assert_eq!(query.pagination.limit, 150);
    }

    #[test]
    fn test_configured_limit_cap() {
        let config = ServiceConfig {
            max_limit: Some(100),
            ..ServiceConfig::default()
        };
        let validator = Validator::new(&config);
        let err = validator
            .course_query("202109", &params(None, Some("101")))
            .unwrap_err();
        assert_eq!(err, ValidationError::LimitTooLarge { max: 100, value: 101 });
        assert!(validator.course_query("202109", &params(None, Some("100"))).is_ok());
    }

    #[test]
    fn test_configured_default_limit() {
        let config = ServiceConfig {
            default_limit: 25,
            ..ServiceConfig::default()
        };
        let query = Validator::new(&config)
            .course_query("202109", &ListCoursesParams::default())
            .unwrap();
        assert_eq!(query.pagination.limit, 25);
    }

    #[test]
    fn test_list_filters_are_unconstrained() {
        let query = Validator::default()
            .course_query(
                "202109",
                &ListCoursesParams {
                    subject: Some("COMPSCI".to_string()),
                    code: Some("1".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(query.subject.as_deref(), Some("COMPSCI"));
        assert_eq!(query.code.as_deref(), Some("1"));

        let query = Validator::default()
            .course_query(
                "202109",
                &ListCoursesParams {
                    subject: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert!(query.subject.is_none());
    }

    #[test]
    fn test_course_key_bounds() {
        let validator = Validator::default();
        assert!(validator.course_key("202109", "CSC", "110").is_ok());
        assert!(validator.course_key("202109", "EN", "1010").is_ok());

        assert_eq!(
            validator.course_key("202109", "C", "110").unwrap_err(),
            ValidationError::LengthOutOfRange {
                field: "subject",
                min: 2,
                max: 4,
                actual: 1,
            }
        );
        assert!(validator.course_key("202109", "COMPS", "110").is_err());
        assert!(validator.course_key("202109", "CSC", "11").is_err());
        assert!(validator.course_key("202109", "CSC", "11000").is_err());
        assert!(matches!(
            validator.course_key("2021", "CSC", "110"),
            Err(ValidationError::UnknownTerm(_))
        ));
    }

    #[test]
    fn test_section_key_bounds() {
        let validator = Validator::default();
        let key = validator.section_key("202109", "CSC", "110", "A01").unwrap();
        assert_eq!(key.section, "A01");
        assert_eq!(key.course.subject, "CSC");

        assert!(validator.section_key("202109", "CSC", "110", "").is_err());
        assert!(validator.section_key("202109", "CSC", "110", "A0001").is_err());
    }

    #[test]
    fn test_lengths_count_characters() {
        assert!(check_len("subject", "ÉÉÉ", SUBJECT_LEN).is_ok());
    }

    #[test]
    fn test_offset_saturates() {
        let pagination = Pagination {
            page: u32::MAX,
            limit: u32::MAX,
        };
        assert!(pagination.offset() > 0);
        assert_eq!(Pagination { page: 2, limit: 10 }.offset(), 10);
    }
}
