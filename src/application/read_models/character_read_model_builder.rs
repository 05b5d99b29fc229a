//! Builder for constructing CharacterReadModel from domain objects

use super::character_read_model::{CharacterReadModel, CoreView, MatrixView};
use crate::character_lookup::domain::{
    CharacterViewModel, DerivedTag, SearchQuery, TagColor, VCoreEquipment,
};
use crate::character_lookup::policies::MarkerTable;
use crate::character_lookup::services::{
    EquipmentDisplayFilter, EquipmentTagger, PetUrgencyChecker,
};
use chrono::{DateTime, Utc};

const SLOT_BADGE_LABEL: &str = "슬롯강화";

/// Builds the read model shown for a search result.
///
/// All derived data is computed here in one pass over the view model, so the
/// result is a pure function of its inputs (including `now`).
pub struct CharacterReadModelBuilder;

impl CharacterReadModelBuilder {
    pub fn build(
        query: &SearchQuery,
        character: CharacterViewModel,
        markers: &MarkerTable,
        now: DateTime<Utc>,
    ) -> CharacterReadModel {
        let equipment_tags = EquipmentTagger::tags(&character.item_equipment, markers);
        let display_equipment = EquipmentDisplayFilter::display_items(&character.item_equipment);
        let pet_urgency = character
            .pet_info
            .as_ref()
            .map(|pets| PetUrgencyChecker::check(pets, now))
            .unwrap_or_default();
        let matrix = Self::build_matrix(&character);

        CharacterReadModel {
            share_query: query.to_query_string(),
            evaluated_at: now,
            character,
            equipment_tags,
            display_equipment,
            pet_urgency,
            matrix,
        }
    }

    fn build_matrix(character: &CharacterViewModel) -> MatrixView {
        let buckets = &character.vmatrix;
        MatrixView {
            skill: buckets.skill.iter().map(|c| Self::core_view(c, false)).collect(),
            enhancement: buckets
                .enhancement
                .iter()
                .map(|c| Self::core_view(c, true))
                .collect(),
            special: buckets.special.iter().map(|c| Self::core_view(c, false)).collect(),
        }
    }

    fn core_view(core: &VCoreEquipment, with_sub_skills: bool) -> CoreView {
        let (label, slot_badge) = if core.slot_level > 0 {
            (
                format!("{} ({}+{})", core.v_core_name, core.v_core_level, core.slot_level),
                Some(DerivedTag::new(TagColor::Blue, SLOT_BADGE_LABEL)),
            )
        } else {
            (format!("{} ({})", core.v_core_name, core.v_core_level), None)
        };

        let sub_skills = if with_sub_skills {
            core.sub_skill_names().into_iter().map(String::from).collect()
        } else {
            Vec::new()
        };

        CoreView {
            slot_id: core.slot_id.clone(),
            label,
            sub_skills,
            slot_badge,
        }
    }
}
