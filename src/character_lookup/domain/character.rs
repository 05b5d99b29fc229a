//! Character records as the NEXON Open API returns them.
//!
//! These are pass-through shapes: field names follow the upstream JSON,
//! unknown fields are ignored and nullable fields are `Option`.

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes an explicit `null` the same way as a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Opaque character identifier returned by the identity lookup
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ocid(String);

impl Ocid {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ocid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterBasicInfo {
    pub character_name: String,
    pub world_name: String,
    /// e.g. `2023-12-14T08:28:35Z`
    pub character_date_create: String,
    #[serde(default)]
    pub character_date_last_login: Option<String>,
    #[serde(default)]
    pub character_date_last_logout: Option<String>,
    pub character_job_name: String,
    pub character_gender: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub character_exp: u64,
    pub character_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEquipment {
    pub item_name: String,
    /// Equipment category, e.g. `장비 무기` or `Cash 모자`
    pub item_equipment_page_name: String,
    pub item_equipment_slot_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub stat_name: String,
    /// Numeric value encoded as a string
    pub stat_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterPetInfo {
    #[serde(default)]
    pub pet_1_name: Option<String>,
    #[serde(default)]
    pub pet_1_pet_type: Option<String>,
    #[serde(default)]
    pub pet_1_date_expire: Option<String>,
    #[serde(default)]
    pub pet_2_name: Option<String>,
    #[serde(default)]
    pub pet_2_pet_type: Option<String>,
    #[serde(default)]
    pub pet_2_date_expire: Option<String>,
    #[serde(default)]
    pub pet_3_name: Option<String>,
    #[serde(default)]
    pub pet_3_pet_type: Option<String>,
    #[serde(default)]
    pub pet_3_date_expire: Option<String>,
}

/// One pet slot viewed independently of its numbered upstream fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetSlot<'a> {
    /// 1-based slot number
    pub slot: u8,
    pub name: Option<&'a str>,
    pub date_expire: Option<&'a str>,
}

impl CharacterPetInfo {
    /// Returns the three pet slots in order
    pub fn slots(&self) -> [PetSlot<'_>; 3] {
        [
            PetSlot {
                slot: 1,
                name: self.pet_1_name.as_deref(),
                date_expire: self.pet_1_date_expire.as_deref(),
            },
            PetSlot {
                slot: 2,
                name: self.pet_2_name.as_deref(),
                date_expire: self.pet_2_date_expire.as_deref(),
            },
            PetSlot {
                slot: 3,
                name: self.pet_3_name.as_deref(),
                date_expire: self.pet_3_date_expire.as_deref(),
            },
        ]
    }
}

/// Carried through to JSON output only; every field may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentSkill {
    pub skill_mode: Option<i64>,
    pub equipment_skill_set: Option<String>,
    pub slot_id: Option<String>,
    pub skill_name: Option<String>,
    pub skill_type: Option<String>,
    pub skill_grade: Option<String>,
    pub add_feature_flag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPreset {
    pub preset_slot_no: i64,
    #[serde(default)]
    pub skill_name_1: Option<String>,
    #[serde(default)]
    pub skill_name_2: Option<String>,
    #[serde(default)]
    pub skill_name_3: Option<String>,
    #[serde(default)]
    pub skill_name_4: Option<String>,
    #[serde(default)]
    pub preset_command_flag: Option<String>,
}

impl SkillPreset {
    /// The four preset skill names in slot order
    pub fn skill_names(&self) -> [Option<&str>; 4] {
        [
            self.skill_name_1.as_deref(),
            self.skill_name_2.as_deref(),
            self.skill_name_3.as_deref(),
            self.skill_name_4.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StealSkill {
    pub skill_name: String,
    #[serde(default)]
    pub skill_slot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StellaMemorize {
    pub skill_name: String,
    #[serde(default)]
    pub equipment_skill_set: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub equipment_skill: Vec<EquipmentSkill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preset: Vec<SkillPreset>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steal_skill: Vec<StealSkill>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stella_memorize: Vec<StellaMemorize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterSkillInfo {
    #[serde(default)]
    pub character_class: Option<String>,
    #[serde(default)]
    pub skill: Option<SkillSet>,
}

/// Matrix core category, parsed from the upstream `v_core_type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoreType {
    /// Three-skill boost core
    Enhancement,
    /// Fifth-job skill core
    Skill,
    Special,
}

impl CoreType {
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "Enhancement" => Some(CoreType::Enhancement),
            "Skill" => Some(CoreType::Skill),
            "Special" => Some(CoreType::Special),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VCoreEquipment {
    pub slot_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slot_level: u32,
    pub v_core_name: String,
    /// Raw tag; see [`VCoreEquipment::core_type`]
    pub v_core_type: String,
    pub v_core_level: u32,
    #[serde(default)]
    pub v_core_skill_name_1: Option<String>,
    #[serde(default)]
    pub v_core_skill_name_2: Option<String>,
    #[serde(default)]
    pub v_core_skill_name_3: Option<String>,
}

impl VCoreEquipment {
    /// `None` for tags outside the three known categories
    pub fn core_type(&self) -> Option<CoreType> {
        CoreType::parse(&self.v_core_type)
    }

    pub fn sub_skill_names(&self) -> Vec<&str> {
        [
            self.v_core_skill_name_1.as_deref(),
            self.v_core_skill_name_2.as_deref(),
            self.v_core_skill_name_3.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|name| !name.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_info_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "character_name": "슬라임",
            "world_name": "루나",
            "character_date_create": "2023-12-14T08:28:35Z",
            "character_date_last_login": "2024-03-01T21:05:11Z",
            "character_date_last_logout": null,
            "character_job_name": "나이트로드",
            "character_gender": "Female",
            "character_exp": 123456789,
            "character_level": 187,
            "some_future_field": true
        }"#;
        let info: CharacterBasicInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.character_name, "슬라임");
        assert_eq!(info.character_level, 187);
        assert!(info.character_date_last_logout.is_none());
    }

    #[test]
    fn test_pet_slots_order() {
        let pets = CharacterPetInfo {
            pet_1_name: Some("핑크빈".to_string()),
            pet_1_date_expire: Some("2024-01-01T00:00:00Z".to_string()),
            pet_3_name: Some("예티".to_string()),
            ..Default::default()
        };
        let slots = pets.slots();
        assert_eq!(slots[0].slot, 1);
        assert_eq!(slots[0].name, Some("핑크빈"));
        assert_eq!(slots[1].name, None);
        assert_eq!(slots[2].name, Some("예티"));
        assert_eq!(slots[2].date_expire, None);
    }

    #[test]
    fn test_skill_info_null_skill() {
        let info: CharacterSkillInfo =
            serde_json::from_str(r#"{"character_class": null, "skill": null}"#).unwrap();
        assert!(info.skill.is_none());
    }

    #[test]
    fn test_basic_info_null_exp_defaults_to_zero() {
        let json = r#"{
            "character_name": "슬라임",
            "world_name": "루나",
            "character_date_create": "2023-12-14T08:28:35Z",
            "character_job_name": "나이트로드",
            "character_gender": "Female",
            "character_exp": null,
            "character_level": 187
        }"#;
        let info: CharacterBasicInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.character_exp, 0);
        assert!(info.character_date_last_login.is_none());
    }

    #[test]
    fn test_skill_info_tolerates_nulls_in_unrendered_fields() {
        let json = r#"{
            "character_class": "나이트로드",
            "skill": {
                "equipment_skill": [
                    {
                        "skill_mode": null,
                        "equipment_skill_set": "1",
                        "slot_id": null,
                        "skill_name": "어썰트",
                        "skill_type": null,
                        "skill_grade": null,
                        "add_feature_flag": null
                    }
                ],
                "preset": [{"preset_slot_no": 1, "skill_name_1": "어썰트"}],
                "steal_skill": [{"skill_name": "메이플 용사", "skill_slot": null}],
                "stella_memorize": null
            }
        }"#;
        let info: CharacterSkillInfo = serde_json::from_str(json).unwrap();
        let skill = info.skill.unwrap();
        assert_eq!(skill.equipment_skill.len(), 1);
        assert_eq!(skill.equipment_skill[0].skill_name.as_deref(), Some("어썰트"));
        assert!(skill.equipment_skill[0].add_feature_flag.is_none());
        assert_eq!(skill.steal_skill[0].skill_name, "메이플 용사");
        assert!(skill.stella_memorize.is_empty());
    }

    #[test]
    fn test_skill_set_null_lists_are_empty() {
        let json = r#"{
            "equipment_skill": null,
            "preset": null,
            "steal_skill": null,
            "stella_memorize": null
        }"#;
        let skills: SkillSet = serde_json::from_str(json).unwrap();
        assert_eq!(skills, SkillSet::default());
    }

    #[test]
    fn test_vcore_null_slot_level_is_unenhanced() {
        let json = r#"{
            "slot_id": "3",
            "slot_level": null,
            "v_core_name": "리스트레인트 링",
            "v_core_type": "Special",
            "v_core_level": 1
        }"#;
        let core: VCoreEquipment = serde_json::from_str(json).unwrap();
        assert_eq!(core.slot_level, 0);
        assert_eq!(core.core_type(), Some(CoreType::Special));
        assert!(core.sub_skill_names().is_empty());
    }

    #[test]
    fn test_core_type_parse() {
        assert_eq!(CoreType::parse("Enhancement"), Some(CoreType::Enhancement));
        assert_eq!(CoreType::parse("Skill"), Some(CoreType::Skill));
        assert_eq!(CoreType::parse("Special"), Some(CoreType::Special));
        assert_eq!(CoreType::parse("skill"), None);
        assert_eq!(CoreType::parse(""), None);
    }

    #[test]
    fn test_sub_skill_names_skips_missing() {
        let core = VCoreEquipment {
            slot_id: "1".to_string(),
            slot_level: 0,
            v_core_name: "어썰트 강화".to_string(),
            v_core_type: "Enhancement".to_string(),
            v_core_level: 25,
            v_core_skill_name_1: Some("어썰트".to_string()),
            v_core_skill_name_2: Some(String::new()),
            v_core_skill_name_3: None,
        };
        assert_eq!(core.sub_skill_names(), vec!["어썰트"]);
    }
}
