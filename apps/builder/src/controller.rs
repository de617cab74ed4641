//! Change Controller — the single funnel between mutation sources and the
//! rendered preview.
//!
//! Every observed mutation (field edit, entry add/remove, skill add/remove,
//! reorder completion, visibility toggle, template/theme switch, profile
//! image load) flows through [`ChangeController::apply`], which mutates the
//! form-backed state, recollects the `Document` snapshot and re-renders the
//! visual tree — synchronously and sequentially on the control thread.
//! The controller exclusively owns both the model and the displayed tree;
//! re-entrancy is excluded by construction (`&mut self`, no suspension
//! inside the pipeline). The one async boundary is the export flow.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_file_name, ExportAdapter, ExportOptions, ExportedDocument};
use crate::form::{collect, rules_for, validate_field, FieldError, FieldValue, FormSnapshot};
use crate::models::{Document, Section, SectionKind, SkillSet, Template, Theme};
use crate::render::{render, VisualTree};
use crate::reorder::SortableList;

/// Label shown on the export trigger while idle.
pub const EXPORT_IDLE_LABEL: &str = "Download PDF";
/// Label swapped in while an export is pending.
pub const EXPORT_PENDING_LABEL: &str = "Generating PDF...";

/// State of the export trigger control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportControl {
    pub enabled: bool,
    pub label: String,
}

impl Default for ExportControl {
    fn default() -> Self {
        ExportControl {
            enabled: true,
            label: EXPORT_IDLE_LABEL.to_string(),
        }
    }
}

/// A single theme parameter change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeParam {
    PrimaryColor(String),
    AccentColor(String),
    FontFamily(String),
}

/// Every mutation source the controller observes.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEvent {
    FieldEdited {
        field: String,
        value: String,
    },
    EntryAdded(SectionKind),
    EntryRemoved {
        kind: SectionKind,
        id: Uuid,
    },
    EntryFieldEdited {
        kind: SectionKind,
        id: Uuid,
        field: String,
        value: FieldValue,
    },
    SkillAdded(String),
    SkillRemoved(String),
    ReorderCompleted {
        kind: SectionKind,
        order: Vec<Uuid>,
    },
    SectionToggled(Section),
    TemplateSelected(Template),
    ThemeChanged(ThemeParam),
    ProfileImageLoaded(String),
}

pub struct ChangeController {
    form: FormSnapshot,
    skills: SkillSet,
    hidden_sections: BTreeSet<Section>,
    template: Template,
    theme: Theme,
    /// Data URI once the image boundary has delivered one; the placeholder
    /// applies until then.
    profile_image: Option<String>,
    /// Cosmetic, per-field, independent — never blocks collection.
    field_errors: BTreeMap<String, FieldError>,
    document: Document,
    preview: VisualTree,
    export_control: ExportControl,
}

impl ChangeController {
    pub fn new(template: Template, theme: Theme) -> Self {
        Self::with_form(FormSnapshot::new(), template, theme)
    }

    /// Builds a controller over an existing form snapshot and renders the
    /// initial preview.
    pub fn with_form(form: FormSnapshot, template: Template, theme: Theme) -> Self {
        let skills = SkillSet::new();
        let hidden_sections = BTreeSet::new();
        let document = collect(&form, &skills, &hidden_sections, template, &theme, None);
        let preview = render(&document);
        ChangeController {
            form,
            skills,
            hidden_sections,
            template,
            theme,
            profile_image: None,
            field_errors: BTreeMap::new(),
            document,
            preview,
            export_control: ExportControl::default(),
        }
    }

    // ── accessors ───────────────────────────────────────────────────────────

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn preview(&self) -> &VisualTree {
        &self.preview
    }

    pub fn export_control(&self) -> &ExportControl {
        &self.export_control
    }

    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors.get(field)
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn is_hidden(&self, section: Section) -> bool {
        self.hidden_sections.contains(&section)
    }

    /// Builds an independent reorder container over the current items of a
    /// repeatable section, stacked with a uniform row height.
    pub fn sortable(&self, kind: SectionKind, origin: f32, row_height: f32) -> SortableList {
        let heights: Vec<(Uuid, f32)> = self
            .form
            .items(kind)
            .iter()
            .map(|item| (item.id, row_height))
            .collect();
        SortableList::from_heights(origin, &heights)
    }

    // ── the funnel ──────────────────────────────────────────────────────────

    /// Applies one mutation, then recollects and re-renders. Returns the
    /// freshly displayed tree.
    pub fn apply(&mut self, event: ChangeEvent) -> &VisualTree {
        match event {
            ChangeEvent::FieldEdited { field, value } => {
                self.set_field_error(&field, &value);
                self.form.set_field(&field, &value);
            }
            ChangeEvent::EntryAdded(kind) => {
                self.form.add_item(kind);
            }
            ChangeEvent::EntryRemoved { kind, id } => {
                self.form.remove_item(kind, id);
            }
            ChangeEvent::EntryFieldEdited {
                kind,
                id,
                field,
                value,
            } => {
                if let Some(item) = self.form.item_mut(kind, id) {
                    // Checking "current position" clears the end date input.
                    if field == "current" && value.as_flag() {
                        item.set_text("endDate", "");
                    }
                    item.values.insert(field, value);
                }
            }
            ChangeEvent::SkillAdded(skill) => {
                self.skills.add(&skill);
            }
            ChangeEvent::SkillRemoved(skill) => {
                self.skills.remove(&skill);
            }
            ChangeEvent::ReorderCompleted { kind, order } => {
                self.form.apply_order(kind, &order);
            }
            ChangeEvent::SectionToggled(section) => {
                self.flip_section(section);
            }
            ChangeEvent::TemplateSelected(template) => {
                self.template = template;
            }
            ChangeEvent::ThemeChanged(param) => match param {
                ThemeParam::PrimaryColor(color) => self.theme.primary_color = color,
                ThemeParam::AccentColor(color) => self.theme.accent_color = color,
                ThemeParam::FontFamily(font) => self.theme.font_family = font,
            },
            ChangeEvent::ProfileImageLoaded(data_uri) => {
                self.profile_image = Some(data_uri);
            }
        }
        self.refresh();
        &self.preview
    }

    /// Flips a section's visibility and returns the toggle control's new
    /// label: "Hide" while the section is shown, "Show" while hidden.
    pub fn toggle_section(&mut self, section: Section) -> &'static str {
        let label = self.flip_section(section);
        self.refresh();
        label
    }

    fn flip_section(&mut self, section: Section) -> &'static str {
        if self.hidden_sections.remove(&section) {
            "Hide"
        } else {
            self.hidden_sections.insert(section);
            "Show"
        }
    }

    /// Recollects the Document snapshot from current state and re-renders.
    pub fn refresh(&mut self) {
        self.document = collect(
            &self.form,
            &self.skills,
            &self.hidden_sections,
            self.template,
            &self.theme,
            self.profile_image.as_deref(),
        );
        self.preview = render(&self.document);
        tracing::debug!(
            template = self.template.as_str(),
            experience = self.document.experience.len(),
            education = self.document.education.len(),
            skills = self.document.skills.len(),
            "preview refreshed"
        );
    }

    fn set_field_error(&mut self, field: &str, value: &str) {
        match validate_field(value, rules_for(field)) {
            Some(error) => {
                self.field_errors.insert(field.to_string(), error);
            }
            None => {
                self.field_errors.remove(field);
            }
        }
    }

    // ── export flow ─────────────────────────────────────────────────────────

    /// Runs the export boundary: disables the trigger while the adapter is
    /// pending and restores it — enabled, original label — whether the
    /// export succeeds or fails. A failure is logged and surfaced; the
    /// Document Model is never touched.
    pub async fn export_document(
        &mut self,
        adapter: &dyn ExportAdapter,
        options: &ExportOptions,
    ) -> Result<ExportedDocument, AppError> {
        let original_label = std::mem::replace(
            &mut self.export_control.label,
            EXPORT_PENDING_LABEL.to_string(),
        );
        self.export_control.enabled = false;

        let result = adapter.export(&self.preview, options).await;

        self.export_control = ExportControl {
            enabled: true,
            label: original_label,
        };

        match result {
            Ok(bytes) => Ok(ExportedDocument {
                bytes,
                file_name: export_file_name(&self.document.personal.full_name),
            }),
            Err(error) => {
                tracing::error!("Error generating PDF: {error}");
                Err(AppError::Export(error))
            }
        }
    }
}
