//! Collection: form state → fresh `Document` snapshot.
//!
//! Collection tolerates any field being empty (empty renders as omitted,
//! never as an error) and performs no validation — validation is a
//! separate, cosmetic concern on individual fields.

use std::collections::BTreeSet;

use crate::models::document::PROFILE_PLACEHOLDER;
use crate::models::{Document, Entry, PersonalInfo, Section, SectionKind, Template, Theme};
use crate::models::SkillSet;

use super::snapshot::{DynamicItem, FormSnapshot};

/// Produces a fresh `Document` from the form's current state.
///
/// Checkbox fields coerce to bool, everything else to string. `end_date`
/// is cleared whenever the current-position flag is set, so the stored
/// value can never leak into a "Present" range.
pub fn collect(
    form: &FormSnapshot,
    skills: &SkillSet,
    hidden_sections: &BTreeSet<Section>,
    template: Template,
    theme: &Theme,
    profile_image: Option<&str>,
) -> Document {
    Document {
        personal: PersonalInfo {
            full_name: form.field("fullName"),
            job_title: form.field("jobTitle"),
            email: form.field("email"),
            phone: form.field("phone"),
            location: form.field("location"),
            website: form.field("website"),
            summary: form.field("summary"),
            profile_image: Some(
                profile_image
                    .map(str::to_string)
                    .unwrap_or_else(|| PROFILE_PLACEHOLDER.to_string()),
            ),
        },
        experience: collect_entries(form, SectionKind::Experience),
        education: collect_entries(form, SectionKind::Education),
        skills: skills.to_vec(),
        hidden_sections: hidden_sections.clone(),
        template,
        theme: theme.clone(),
    }
}

fn collect_entries(form: &FormSnapshot, kind: SectionKind) -> Vec<Entry> {
    form.items(kind)
        .iter()
        .map(|item| collect_entry(item, kind))
        .collect()
}

fn collect_entry(item: &DynamicItem, kind: SectionKind) -> Entry {
    let is_current = item.flag("current");
    Entry {
        id: item.id,
        title: item.text(kind.title_field()),
        organization: item.text(kind.org_field()),
        start_date: item.text("startDate"),
        end_date: if is_current {
            String::new()
        } else {
            item.text("endDate")
        },
        is_current,
        description: item.text("description"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> FormSnapshot {
        let mut form = FormSnapshot::new();
        form.set_field("fullName", "Ada Lovelace");
        form.set_field("email", "ada@example.com");
        let id = form.add_item(SectionKind::Experience);
        let item = form.item_mut(SectionKind::Experience, id).unwrap();
        item.set_text("jobTitle", "Analyst");
        item.set_text("company", "Analytical Engines Ltd");
        item.set_text("startDate", "2021-03");
        item.set_text("endDate", "2022-07");
        form
    }

    fn collect_default(form: &FormSnapshot) -> Document {
        collect(
            form,
            &SkillSet::new(),
            &BTreeSet::new(),
            Template::Modern,
            &Theme::default(),
            None,
        )
    }

    #[test]
    fn test_collect_maps_experience_fields() {
        let doc = collect_default(&make_form());
        let entry = &doc.experience[0];
        assert_eq!(entry.title, "Analyst");
        assert_eq!(entry.organization, "Analytical Engines Ltd");
        assert_eq!(entry.start_date, "2021-03");
        assert_eq!(entry.end_date, "2022-07");
        assert!(!entry.is_current);
    }

    #[test]
    fn test_collect_maps_education_fields() {
        let mut form = FormSnapshot::new();
        let id = form.add_item(SectionKind::Education);
        let item = form.item_mut(SectionKind::Education, id).unwrap();
        item.set_text("degree", "BSc Mathematics");
        item.set_text("institution", "University of London");
        let doc = collect_default(&form);
        assert_eq!(doc.education[0].title, "BSc Mathematics");
        assert_eq!(doc.education[0].organization, "University of London");
    }

    #[test]
    fn test_collect_tolerates_empty_form() {
        let doc = collect_default(&FormSnapshot::new());
        assert_eq!(doc.personal.full_name, "");
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_current_position_clears_end_date() {
        let mut form = make_form();
        let id = form.items(SectionKind::Experience)[0].id;
        form.item_mut(SectionKind::Experience, id)
            .unwrap()
            .set_flag("current", true);
        let doc = collect_default(&form);
        let entry = &doc.experience[0];
        assert!(entry.is_current);
        assert_eq!(entry.end_date, "", "stored end date must not survive");
    }

    #[test]
    fn test_profile_image_placeholder_until_loaded() {
        let form = make_form();
        let doc = collect_default(&form);
        assert_eq!(
            doc.personal.profile_image.as_deref(),
            Some(PROFILE_PLACEHOLDER)
        );

        let doc = collect(
            &form,
            &SkillSet::new(),
            &BTreeSet::new(),
            Template::Modern,
            &Theme::default(),
            Some("data:image/png;base64,AAAA"),
        );
        assert_eq!(
            doc.personal.profile_image.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn test_collect_carries_template_theme_and_hidden() {
        let mut hidden = BTreeSet::new();
        hidden.insert(Section::Skills);
        let theme = Theme {
            primary_color: "#111111".to_string(),
            ..Theme::default()
        };
        let doc = collect(
            &make_form(),
            &SkillSet::new(),
            &hidden,
            Template::Creative,
            &theme,
            None,
        );
        assert_eq!(doc.template, Template::Creative);
        assert_eq!(doc.theme.primary_color, "#111111");
        assert!(doc.hidden_sections.contains(&Section::Skills));
    }
}
