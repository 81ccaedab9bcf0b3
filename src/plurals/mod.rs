//! Plural selector keywords and the locale rules they are checked against

mod check;
mod keywords;
mod rules;

pub use check::*;
pub use keywords::*;
pub use rules::*;
