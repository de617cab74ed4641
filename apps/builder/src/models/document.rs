//! The canonical in-memory document model.
//!
//! `Document` is a derived snapshot: it is reconstructed wholesale from the
//! form's current state on every observed change, never patched in place.
//! The Change Controller owns the single live instance; the renderer only
//! ever sees `&Document`.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder shown until a profile image is loaded at the image boundary.
pub const PROFILE_PLACEHOLDER: &str = "./public/assets/profile-placeholder.jpg";

// ────────────────────────────────────────────────────────────────────────────
// Section vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// A named, independently hideable block of the rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Section::Summary),
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            "skills" => Ok(Section::Skills),
            other => Err(format!("unknown section '{other}'")),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two repeatable-entry containers. Unlike `Section`, these identify the
/// editable lists, not the rendered blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
}

impl SectionKind {
    /// The hideable section this container renders into.
    pub fn section(&self) -> Section {
        match self {
            SectionKind::Experience => Section::Experience,
            SectionKind::Education => Section::Education,
        }
    }

    /// Form field names for the title / organization pair of this kind.
    pub fn title_field(&self) -> &'static str {
        match self {
            SectionKind::Experience => "jobTitle",
            SectionKind::Education => "degree",
        }
    }

    pub fn org_field(&self) -> &'static str {
        match self {
            SectionKind::Experience => "company",
            SectionKind::Education => "institution",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Templates & theme
// ────────────────────────────────────────────────────────────────────────────

/// One of the three fixed layout strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Template {
    #[default]
    Modern,
    Classic,
    Creative,
}

impl Template {
    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Modern => "modern",
            Template::Classic => "classic",
            Template::Creative => "creative",
        }
    }
}

impl FromStr for Template {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "modern" => Ok(Template::Modern),
            "classic" => Ok(Template::Classic),
            "creative" => Ok(Template::Creative),
            other => Err(format!("unknown template '{other}'")),
        }
    }
}

/// Color/font parameters threaded through to the rendered tree as CSS
/// custom properties. Styling beyond these is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub primary_color: String,
    pub accent_color: String,
    pub font_family: String,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary_color: "#2c3e50".to_string(),
            accent_color: "#3498db".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Document contents
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub summary: String,
    /// Data URI or path reference. Collection supplies the placeholder
    /// when nothing has been loaded.
    pub profile_image: Option<String>,
}

/// One repeatable record within Experience or Education.
///
/// Experience maps jobTitle/company onto title/organization; Education maps
/// degree/institution. `end_date` is cleared at collection time whenever
/// `is_current` is set, and the date formatter honors the flag regardless.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    /// "YYYY-MM" or empty.
    pub start_date: String,
    /// "YYYY-MM" or empty. Treated as absent when `is_current` is true.
    pub end_date: String,
    pub is_current: bool,
    pub description: String,
}

impl Entry {
    /// True when every rendered sub-field would be omitted.
    pub fn is_blank(&self) -> bool {
        self.title.is_empty()
            && self.organization.is_empty()
            && self.start_date.is_empty()
            && self.description.is_empty()
    }
}

/// The full document snapshot handed to the Template Renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub personal: PersonalInfo,
    pub experience: Vec<Entry>,
    pub education: Vec<Entry>,
    pub skills: Vec<String>,
    pub hidden_sections: BTreeSet<Section>,
    pub template: Template,
    pub theme: Theme,
}

impl Document {
    pub fn entries(&self, kind: SectionKind) -> &[Entry] {
        match kind {
            SectionKind::Experience => &self.experience,
            SectionKind::Education => &self.education,
        }
    }
}
