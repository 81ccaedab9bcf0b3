//! Printing message patterns as source text

mod printer;
mod renderer;
mod syntax;

pub use printer::print_with_renderer;
pub use renderer::{print, render, Terminal};
pub use syntax::{Identity, Render, Syntax};
