//! Ordered, duplicate-free skill list.
//!
//! Matching is exact and case-sensitive ("Rust" and "rust" are distinct
//! skills). Insertion order is preserved for display.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill, trimming surrounding whitespace first.
    /// No-op (returns false) when the trimmed text is empty or the skill
    /// is already present.
    pub fn add(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Removes the first exact match. No-op (returns false) when absent.
    pub fn remove(&mut self, skill: &str) -> bool {
        match self.skills.iter().position(|s| s == skill) {
            Some(index) => {
                self.skills.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.skills.clone()
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.add(&skill);
        }
        set
    }
}
