pub mod character;
pub mod derived_tag;
pub mod search_query;
pub mod view_model;
pub mod world;

pub use character::{
    CharacterBasicInfo, CharacterPetInfo, CharacterSkillInfo, CoreType, EquipmentSkill,
    ItemEquipment, Ocid, PetSlot, SkillPreset, SkillSet, Stat, StealSkill, StellaMemorize,
    VCoreEquipment,
};
pub use derived_tag::{DerivedTag, PetUrgency, TagColor};
pub use search_query::{CharacterName, SearchQuery};
pub use view_model::{CharacterViewModel, MatrixBuckets};
pub use world::World;
