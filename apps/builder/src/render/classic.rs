//! Classic layout: centered header, then stacked summary, experience,
//! education and skills.

use crate::models::{Document, SectionKind};

use super::sections::{
    contact_block, entries_section, identity_block, skills_section, summary_section, ContactStyle,
    HeaderLayout,
};
use super::tree::{el, Element};

pub fn layout(doc: &Document) -> Vec<Element> {
    let header = el("div")
        .class("cv-header")
        .children(identity_block(&doc.personal))
        .child(contact_block(&doc.personal, ContactStyle::Plain));

    let mut blocks = vec![header];
    blocks.extend(summary_section(doc));
    blocks.extend(entries_section(doc, SectionKind::Experience, HeaderLayout::Flat));
    blocks.extend(entries_section(doc, SectionKind::Education, HeaderLayout::Flat));
    blocks.extend(skills_section(doc));
    blocks
}
