//! Parse and print ICU-style message patterns
//!
//! The printer turns a message AST back into pattern source text, escaping
//! syntax characters according to context and laying out plural and select
//! branches with aligned selector keys. Parsing the printed text gives back
//! the same AST.

#[macro_use]
mod regex;

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod plurals;
