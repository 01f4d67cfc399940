use crate::error::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Academic terms the catalog knows about, oldest first.
///
/// Codes are `YYYYMM` where the month marks the session start
/// (`01` spring, `05` summer, `09` fall).
pub const KNOWN_TERMS: &[&str] = &[
    "202009", "202101", "202105", "202109", "202201", "202205", "202209", "202301", "202305",
    "202309", "202401", "202405", "202409",
];

/// A term code drawn from [`KNOWN_TERMS`].
///
/// The only way to obtain a `Term` is through [`Term::parse`], so a value of
/// this type is always a recognised term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(&'static str);

impl Term {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        KNOWN_TERMS
            .iter()
            .find(|known| **known == raw)
            .map(|known| Term(*known))
            .ok_or_else(|| ValidationError::UnknownTerm(raw.to_string()))
    }

    pub fn all() -> impl Iterator<Item = Term> {
        KNOWN_TERMS.iter().map(|known| Term(*known))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl FromStr for Term {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::parse(s)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
