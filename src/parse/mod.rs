//! Heuristic structural parsing of resume-style plain text.
//!
//! A single line-oriented scan with small lookahead for bullet
//! soft-wraps. Lines are classified by an ordered chain of pure
//! predicates and folded into an explicit accumulator holding the
//! currently open section, entry, and sub-role.

mod classify;
mod date;
mod header;
mod scan;

pub use scan::parse_structure;
