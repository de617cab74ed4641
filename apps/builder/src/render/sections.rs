//! Section builders shared by all three templates.
//!
//! The inclusion rule set is identical across Modern/Classic/Creative:
//! a section is emitted only when it is not hidden AND it has content;
//! within an entry, every sub-field is omitted independently when empty.
//! Templates differ only in placement and ordering.

use crate::models::{Document, Entry, PersonalInfo, Section, SectionKind};

use super::dates::format_date_range;
use super::tree::{el, Element};

/// Whether contact lines carry pictogram prefixes (Modern/Creative) or
/// render as plain inline spans (Classic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactStyle {
    Icons,
    Plain,
}

/// How an entry's header groups its fields: Modern nests title and
/// organization in an inner block beside the date; the others lay them flat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLayout {
    Grouped,
    Flat,
}

/// The shared section-selection rule: not hidden AND has content.
pub fn section_visible(doc: &Document, section: Section) -> bool {
    if doc.hidden_sections.contains(&section) {
        return false;
    }
    match section {
        Section::Summary => !doc.personal.summary.is_empty(),
        Section::Experience => !doc.experience.is_empty(),
        Section::Education => !doc.education.is_empty(),
        Section::Skills => !doc.skills.is_empty(),
    }
}

pub fn section_title(section: Section) -> &'static str {
    match section {
        Section::Summary => "Professional Summary",
        Section::Experience => "Work Experience",
        Section::Education => "Education",
        Section::Skills => "Skills",
    }
}

fn section_shell(section: Section) -> Element {
    el("div").class("cv-section").child(
        el("h3")
            .class("cv-section-title")
            .text(section_title(section)),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Identity & contact
// ────────────────────────────────────────────────────────────────────────────

/// Profile image, name and title — each omitted independently when empty.
pub fn identity_block(personal: &PersonalInfo) -> Vec<Element> {
    let mut nodes = Vec::new();
    if let Some(image) = personal.profile_image.as_deref().filter(|s| !s.is_empty()) {
        nodes.push(
            el("img")
                .class("cv-profile-img")
                .attr("src", image)
                .attr("alt", "Profile"),
        );
    }
    if !personal.full_name.is_empty() {
        nodes.push(el("h1").class("cv-name").text(&personal.full_name));
    }
    if !personal.job_title.is_empty() {
        nodes.push(el("p").class("cv-title").text(&personal.job_title));
    }
    nodes
}

pub fn contact_block(personal: &PersonalInfo, style: ContactStyle) -> Element {
    let lines: [(&str, &str); 4] = [
        ("📧", personal.email.as_str()),
        ("📞", personal.phone.as_str()),
        ("📍", personal.location.as_str()),
        ("🌐", personal.website.as_str()),
    ];
    let mut block = el("div").class("cv-contact");
    for (icon, value) in lines {
        if value.is_empty() {
            continue;
        }
        let item = match style {
            ContactStyle::Icons => el("div")
                .class("cv-contact-item")
                .text(format!("{icon} {value}")),
            ContactStyle::Plain => el("span").class("cv-contact-item").text(value),
        };
        block = block.child(item);
    }
    block
}

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

pub fn summary_section(doc: &Document) -> Option<Element> {
    if !section_visible(doc, Section::Summary) {
        return None;
    }
    Some(section_shell(Section::Summary).child(el("p").class("cv-summary").text(&doc.personal.summary)))
}

pub fn entries_section(doc: &Document, kind: SectionKind, layout: HeaderLayout) -> Option<Element> {
    if !section_visible(doc, kind.section()) {
        return None;
    }
    let mut section = section_shell(kind.section());
    for entry in doc.entries(kind) {
        section = section.child(entry_block(entry, layout));
    }
    Some(section)
}

fn entry_block(entry: &Entry, layout: HeaderLayout) -> Element {
    let title = (!entry.title.is_empty())
        .then(|| el("div").class("cv-item-title").text(&entry.title));
    let organization = (!entry.organization.is_empty())
        .then(|| el("div").class("cv-item-subtitle").text(&entry.organization));
    let range = format_date_range(&entry.start_date, &entry.end_date, entry.is_current);
    let date = (!range.is_empty()).then(|| el("div").class("cv-item-date").text(range));

    let header = match layout {
        HeaderLayout::Grouped => el("div")
            .class("cv-item-header")
            .child(el("div").child_if(title).child_if(organization))
            .child_if(date),
        HeaderLayout::Flat => el("div")
            .class("cv-item-header")
            .child_if(title)
            .child_if(organization)
            .child_if(date),
    };

    let mut block = el("div").class("cv-item").child(header);
    if !entry.description.is_empty() {
        block = block.child(el("p").class("cv-item-description").text(&entry.description));
    }
    block
}

pub fn skills_section(doc: &Document) -> Option<Element> {
    if !section_visible(doc, Section::Skills) {
        return None;
    }
    let mut grid = el("div").class("cv-skills-grid");
    for skill in &doc.skills {
        grid = grid.child(el("span").class("cv-skill").text(skill));
    }
    Some(section_shell(Section::Skills).child(grid))
}
