//! Resume document tree.
//!
//! Field names serialize in camelCase (`contactItems`, `dateRange`,
//! `subRoles`) so the JSON stays interchangeable with the surrounding
//! tooling. Optional lists (`subRoles`, `items`) are plain `Vec`s in
//! memory and are omitted from JSON when empty.

use serde::{Deserialize, Serialize};

/// A fully parsed resume: identity header plus titled sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    /// Candidate identity block from the top of the document
    pub header: ResumeHeader,

    /// Sections in source order
    pub sections: Vec<ResumeSection>,
}

impl ResumeData {
    /// The canonical empty resume: blank name, no contacts, no sections.
    ///
    /// Whitespace-only input parses to exactly this value.
    pub fn empty() -> Self {
        Self {
            header: ResumeHeader::default(),
            sections: Vec::new(),
        }
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Total number of bullets, including sub-role bullets.
    pub fn bullet_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| s.entries.iter())
            .map(|e| {
                e.bullets.len()
                    + e.sub_roles.iter().map(|r| r.bullets.len()).sum::<usize>()
            })
            .sum()
    }

    /// Check whether this is the canonical empty resume.
    pub fn is_empty(&self) -> bool {
        self.header.name.is_empty()
            && self.header.contact_items.is_empty()
            && self.sections.is_empty()
    }
}

impl Default for ResumeData {
    fn default() -> Self {
        Self::empty()
    }
}

/// Identity block: the candidate's name and contact fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeHeader {
    /// Candidate name, taken from the first non-blank line
    pub name: String,

    /// Contact fragments (email, phone, links) in source order
    pub contact_items: Vec<String>,
}

impl ResumeHeader {
    /// Create a header with a name and no contact items.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_items: Vec::new(),
        }
    }
}

/// A titled section such as EXPERIENCE or EDUCATION.
///
/// `entries` holds dated/titled records; `items` holds flat lines that
/// matched no stronger classification (skill lists, summaries).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSection {
    /// Section heading as written (may be empty for preamble content)
    pub heading: String,

    /// Structured entries in source order
    pub entries: Vec<ResumeBulletEntry>,

    /// Flat content lines in source order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<String>,
}

impl ResumeSection {
    /// Create an empty section with the given heading.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            entries: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Check whether the section carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.items.is_empty()
    }
}

/// A titled entry within a section: a job, project, or degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeBulletEntry {
    /// Entry title (role, project name, institution)
    pub title: String,

    /// Opaque date-range text as written ("January 2024 – Present");
    /// empty when the title carried no recognizable range
    pub date_range: String,

    /// Bullets belonging directly to this entry
    pub bullets: Vec<String>,

    /// Nested roles under the same employer
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_roles: Vec<SubRole>,
}

impl ResumeBulletEntry {
    /// Create an entry with a title and date range and no bullets.
    pub fn new(title: impl Into<String>, date_range: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date_range: date_range.into(),
            bullets: Vec::new(),
            sub_roles: Vec::new(),
        }
    }
}

/// A nested role beneath an entry (same employer, different title).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubRole {
    /// Sub-role title as written
    pub title: String,

    /// Bullets belonging to this sub-role
    pub bullets: Vec<String>,
}

impl SubRole {
    /// Create a sub-role with a title and no bullets.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bullets: Vec::new(),
        }
    }
}
