//! Splitting concatenated catalog identifiers into subject and code.
//!
//! Upstream identifiers carry no delimiter (`"CSC110"`, `"MATH100"`). The
//! split point is the length of the entry's reference subject name, so the
//! subject half is always exactly as wide as that name. The split itself
//! cannot tell whether the reference name is right; the checks here only
//! catch splits that are plainly broken.

use catalogscope_api::{CourseIdentity, DecomposeError, RawCatalogEntry};

pub fn decompose(entry: &RawCatalogEntry) -> Result<CourseIdentity, DecomposeError> {
    let id = entry.catalog_course_id.as_str();
    let reference = entry.subject_code.name.as_str();
    let width = reference.len();

    if width == 0 {
        return Err(DecomposeError::EmptySubject { id: id.to_string() });
    }
    if width >= id.len() {
        return Err(DecomposeError::EmptyCode {
            id: id.to_string(),
            reference: reference.to_string(),
        });
    }
    if !id.is_char_boundary(width) {
        return Err(DecomposeError::NotCharBoundary {
            id: id.to_string(),
            at: width,
        });
    }

    let (subject, code) = id.split_at(width);
    if !subject.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(DecomposeError::NonAlphabeticSubject {
            id: id.to_string(),
            subject: subject.to_string(),
        });
    }

    Ok(CourseIdentity::new(subject, code))
}
