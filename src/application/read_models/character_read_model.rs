//! Character read model for query operations
//!
//! Aggregates the view model with derived tags and display lists so the
//! formatters never recompute domain rules.

use crate::character_lookup::domain::{
    CharacterViewModel, DerivedTag, ItemEquipment, PetUrgency,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Display-ready result of one successful search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterReadModel {
    /// Shareable query string that reproduces this search
    pub share_query: String,
    /// Instant the pet urgency tags were evaluated against
    pub evaluated_at: DateTime<Utc>,
    pub character: CharacterViewModel,
    /// Ring, guild ward and tier-count tags, in that order
    pub equipment_tags: Vec<DerivedTag>,
    /// Equipment panel contents: filtered and sorted by category
    pub display_equipment: Vec<ItemEquipment>,
    pub pet_urgency: Vec<PetUrgency>,
    pub matrix: MatrixView,
}

impl CharacterReadModel {
    /// Urgency entry for a 1-based pet slot, if that pet is about to expire
    pub fn pet_urgency_for(&self, slot: u8) -> Option<&PetUrgency> {
        self.pet_urgency.iter().find(|u| u.slot == slot)
    }
}

/// Matrix cores as rendered, one list per bucket
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixView {
    pub skill: Vec<CoreView>,
    pub enhancement: Vec<CoreView>,
    pub special: Vec<CoreView>,
}

impl MatrixView {
    pub fn is_empty(&self) -> bool {
        self.skill.is_empty() && self.enhancement.is_empty() && self.special.is_empty()
    }
}

/// One matrix core line, e.g. `스프레드 스로우 (25+2)` with a slot badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreView {
    pub slot_id: String,
    pub label: String,
    /// Boosted skills; only populated for enhancement cores
    pub sub_skills: Vec<String>,
    pub slot_badge: Option<DerivedTag>,
}
