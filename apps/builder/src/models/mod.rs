pub mod document;
pub mod skills;

// Re-export the model vocabulary consumed by the rest of the pipeline.
pub use document::{Document, Entry, PersonalInfo, Section, SectionKind, Template, Theme};
pub use skills::SkillSet;
