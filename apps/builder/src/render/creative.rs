//! Creative layout: two-column content — identity, contact and skills on
//! the left; summary, experience and education on the right.

use crate::models::{Document, SectionKind};

use super::sections::{
    contact_block, entries_section, identity_block, skills_section, summary_section, ContactStyle,
    HeaderLayout,
};
use super::tree::{el, Element};

pub fn layout(doc: &Document) -> Vec<Element> {
    let left = el("div")
        .class("cv-left")
        .children(identity_block(&doc.personal))
        .child(contact_block(&doc.personal, ContactStyle::Icons))
        .child_if(skills_section(doc));

    let right = el("div")
        .class("cv-right")
        .child_if(summary_section(doc))
        .child_if(entries_section(doc, SectionKind::Experience, HeaderLayout::Flat))
        .child_if(entries_section(doc, SectionKind::Education, HeaderLayout::Flat));

    vec![el("div").class("cv-content").child(left).child(right)]
}
