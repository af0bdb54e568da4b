//! Structured resume model types.
//!
//! This module defines the document model produced by the structural
//! parser and consumed by the renderers. The model is a plain tree:
//! a header followed by sections, each owning its entries and items
//! in source order.

mod resume;

pub use resume::{ResumeBulletEntry, ResumeData, ResumeHeader, ResumeSection, SubRole};
