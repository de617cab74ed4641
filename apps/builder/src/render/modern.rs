//! Modern layout: sidebar (identity, contact, skills) beside a main
//! column (summary, experience, education).

use crate::models::{Document, SectionKind};

use super::sections::{
    contact_block, entries_section, identity_block, skills_section, summary_section, ContactStyle,
    HeaderLayout,
};
use super::tree::{el, Element};

pub fn layout(doc: &Document) -> Vec<Element> {
    let sidebar = el("div")
        .class("cv-sidebar")
        .children(identity_block(&doc.personal))
        .child(contact_block(&doc.personal, ContactStyle::Icons))
        .child_if(skills_section(doc));

    let main = el("div")
        .class("cv-main")
        .child_if(summary_section(doc))
        .child_if(entries_section(doc, SectionKind::Experience, HeaderLayout::Grouped))
        .child_if(entries_section(doc, SectionKind::Education, HeaderLayout::Grouped));

    vec![sidebar, main]
}
