//! singlehdr - single-header amalgamation for small C/C++ header libraries
//!
//! Takes an ordered list of headers and writes one self-contained header:
//! every source body is wrapped in its own include guard, and quoted
//! includes plus `#pragma once` lines are stripped. The list order is used
//! as-is; callers are responsible for putting each header after the headers
//! it depends on.

pub mod amalgamator;
pub mod cli;
pub mod directive;
pub mod error;
pub mod guard;
pub mod manifest;
pub mod report;

pub use amalgamator::{amalgamate, AmalgamateOptions, Amalgamator, RunState};
pub use error::AmalgamateError;
pub use guard::GuardStyle;
