use super::character::{
    CharacterBasicInfo, CharacterPetInfo, CharacterSkillInfo, ItemEquipment, Stat, VCoreEquipment,
};
use serde::Serialize;

/// Matrix cores partitioned by category, each bucket in upstream order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatrixBuckets {
    pub enhancement: Vec<VCoreEquipment>,
    pub skill: Vec<VCoreEquipment>,
    pub special: Vec<VCoreEquipment>,
}

impl MatrixBuckets {
    pub fn total(&self) -> usize {
        self.enhancement.len() + self.skill.len() + self.special.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Everything one search shows about a character.
///
/// Built fresh from a successful lookup and replaced wholesale by the next
/// one. `Default` is the empty state shown when no search is active.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CharacterViewModel {
    pub basic_info: Option<CharacterBasicInfo>,
    /// Empty when the character has no guild
    pub guild_name: String,
    pub item_equipment: Vec<ItemEquipment>,
    pub pet_info: Option<CharacterPetInfo>,
    pub skill_info: Option<CharacterSkillInfo>,
    pub stat: Vec<Stat>,
    pub vmatrix: MatrixBuckets,
}

impl CharacterViewModel {
    pub fn is_empty(&self) -> bool {
        self.basic_info.is_none()
    }
}
