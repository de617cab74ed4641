//! Template Renderer: `render(&Document) -> VisualTree`.
//!
//! Pure and deterministic — no hidden state, no side effects. The active
//! template is a tagged variant dispatched through a plain `match`; all
//! three layouts share the section-selection and field-omission rules in
//! [`sections`].

pub mod classic;
pub mod creative;
pub mod dates;
pub mod modern;
pub mod sections;
pub mod tree;

pub use dates::format_date_range;
pub use tree::{el, Element, Node, VisualTree};

use crate::models::{Document, Template};

/// Renders the document through its active template.
pub fn render(doc: &Document) -> VisualTree {
    let blocks = match doc.template {
        Template::Modern => modern::layout(doc),
        Template::Classic => classic::layout(doc),
        Template::Creative => creative::layout(doc),
    };

    let root = el("div")
        .class("cv-preview")
        .class(format!("{}-template", doc.template.as_str()))
        .style(format!(
            "--primary-color: {}; --accent-color: {}; --font-family: '{}', sans-serif;",
            doc.theme.primary_color, doc.theme.accent_color, doc.theme.font_family
        ))
        .children(blocks);

    VisualTree::new(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entry, Section, Template, Theme};
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn make_entry(title: &str) -> Entry {
        Entry {
            id: Uuid::new_v4(),
            title: title.to_string(),
            organization: "Engines Ltd".to_string(),
            start_date: "2021-03".to_string(),
            end_date: String::new(),
            is_current: true,
            description: "Compiled tables.".to_string(),
        }
    }

    fn make_doc(template: Template) -> Document {
        let mut doc = Document {
            experience: vec![make_entry("Analyst")],
            skills: vec!["Rust".to_string()],
            template,
            theme: Theme::default(),
            ..Document::default()
        };
        doc.personal.full_name = "Ada Lovelace".to_string();
        doc.personal.summary = "Pioneer of computing.".to_string();
        doc
    }

    #[test]
    fn test_root_carries_template_class_and_theme() {
        let tree = render(&make_doc(Template::Classic));
        assert!(tree.root.has_class("cv-preview"));
        assert!(tree.root.has_class("classic-template"));
        let style = tree.root.style.as_deref().unwrap();
        assert!(style.contains("--primary-color: #2c3e50"));
        assert!(style.contains("--font-family: 'Arial'"));
    }

    #[test]
    fn test_modern_places_skills_in_sidebar() {
        let tree = render(&make_doc(Template::Modern));
        let sidebar = tree.find_class("cv-sidebar").expect("sidebar present");
        let sidebar_tree = VisualTree::new(sidebar.clone());
        assert!(sidebar_tree.find_class("cv-skill").is_some());
        let main = tree.find_class("cv-main").expect("main column present");
        let main_tree = VisualTree::new(main.clone());
        assert!(main_tree.find_class("cv-skill").is_none());
        assert!(main_tree.find_class("cv-summary").is_some());
    }

    #[test]
    fn test_classic_stacks_sections_after_header() {
        let tree = render(&make_doc(Template::Classic));
        assert!(tree.find_class("cv-header").is_some());
        assert!(tree.find_class("cv-sidebar").is_none());
        assert!(tree.find_class("cv-summary").is_some());
    }

    #[test]
    fn test_creative_splits_two_columns() {
        let tree = render(&make_doc(Template::Creative));
        let content = tree.find_class("cv-content").expect("content wrapper");
        let content_tree = VisualTree::new(content.clone());
        assert!(content_tree.find_class("cv-left").is_some());
        assert!(content_tree.find_class("cv-right").is_some());
    }

    #[test]
    fn test_empty_experience_renders_no_section_in_any_template() {
        for template in [Template::Modern, Template::Classic, Template::Creative] {
            let mut doc = make_doc(template);
            doc.experience.clear();
            let tree = render(&doc);
            assert!(
                !tree.text_content().contains("Work Experience"),
                "{template:?} must omit an empty experience section"
            );
        }
    }

    #[test]
    fn test_hidden_experience_suppressed_and_toggle_restores() {
        let mut doc = make_doc(Template::Modern);
        doc.hidden_sections.insert(Section::Experience);
        let tree = render(&doc);
        assert!(!tree.text_content().contains("Work Experience"));

        doc.hidden_sections.remove(&Section::Experience);
        let tree = render(&doc);
        assert!(tree.text_content().contains("Work Experience"));
    }

    #[test]
    fn test_current_entry_renders_present() {
        let tree = render(&make_doc(Template::Modern));
        let date = tree.find_class("cv-item-date").expect("date block");
        let date_tree = VisualTree::new(date.clone());
        assert_eq!(date_tree.text_content(), "Mar 2021 - Present");
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = make_doc(Template::Creative);
        assert_eq!(render(&doc), render(&doc));
    }

    #[test]
    fn test_hidden_sections_ignore_other_sections() {
        let mut doc = make_doc(Template::Classic);
        doc.hidden_sections.insert(Section::Skills);
        let tree = render(&doc);
        assert!(tree.find_class("cv-skill").is_none());
        assert!(tree.text_content().contains("Work Experience"));
    }
}
