pub mod catalog;
pub mod detail;
pub mod term;

pub use catalog::*;
pub use detail::*;
pub use term::*;
