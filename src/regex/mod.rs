//! Regular expressions compiled once and cached for the life of the program

#[macro_use]
mod cache;
