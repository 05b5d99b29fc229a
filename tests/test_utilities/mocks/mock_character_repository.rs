use async_trait::async_trait;
use maplem_lookup::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Mock CharacterRepository for testing
///
/// Serves canned responses for one character and counts calls. Individual
/// categories can be made to fail or to respond after a delay.
#[derive(Clone)]
pub struct MockCharacterRepository {
    pub basic_info: CharacterBasicInfo,
    pub guild_name: Option<String>,
    pub items: Vec<ItemEquipment>,
    pub pets: CharacterPetInfo,
    pub skills: CharacterSkillInfo,
    pub stats: Vec<Stat>,
    pub cores: Vec<VCoreEquipment>,
    identity_fails: bool,
    failing: Option<&'static str>,
    delays: HashMap<&'static str, Duration>,
    identity_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
    completed_fetches: Arc<AtomicUsize>,
}

impl MockCharacterRepository {
    pub fn new() -> Self {
        Self {
            basic_info: CharacterBasicInfo {
                character_name: "슬라임".to_string(),
                world_name: "루나".to_string(),
                character_date_create: "2023-12-14T08:28:35Z".to_string(),
                character_date_last_login: Some("2024-03-01T21:05:11Z".to_string()),
                character_date_last_logout: None,
                character_job_name: "나이트로드".to_string(),
                character_gender: "Female".to_string(),
                character_exp: 123_456,
                character_level: 187,
            },
            guild_name: None,
            items: Vec::new(),
            pets: CharacterPetInfo::default(),
            skills: CharacterSkillInfo::default(),
            stats: Vec::new(),
            cores: Vec::new(),
            identity_fails: false,
            failing: None,
            delays: HashMap::new(),
            identity_calls: Arc::new(AtomicUsize::new(0)),
            fetch_calls: Arc::new(AtomicUsize::new(0)),
            completed_fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_guild(mut self, guild_name: &str) -> Self {
        self.guild_name = Some(guild_name.to_string());
        self
    }

    pub fn with_item(mut self, name: &str, page: &str, slot: &str) -> Self {
        self.items.push(ItemEquipment {
            item_name: name.to_string(),
            item_equipment_page_name: page.to_string(),
            item_equipment_slot_name: slot.to_string(),
        });
        self
    }

    pub fn with_pets(mut self, pets: CharacterPetInfo) -> Self {
        self.pets = pets;
        self
    }

    pub fn with_stat(mut self, name: &str, value: &str) -> Self {
        self.stats.push(Stat {
            stat_name: name.to_string(),
            stat_value: value.to_string(),
        });
        self
    }

    pub fn with_core(mut self, name: &str, core_type: &str, level: u32, slot_level: u32) -> Self {
        self.cores.push(VCoreEquipment {
            slot_id: self.cores.len().to_string(),
            slot_level,
            v_core_name: name.to_string(),
            v_core_type: core_type.to_string(),
            v_core_level: level,
            v_core_skill_name_1: None,
            v_core_skill_name_2: None,
            v_core_skill_name_3: None,
        });
        self
    }

    pub fn with_identity_failure(mut self) -> Self {
        self.identity_fails = true;
        self
    }

    /// Makes one category (e.g. `"stat"`) fail with an upstream error
    pub fn with_failing_category(mut self, category: &'static str) -> Self {
        self.failing = Some(category);
        self
    }

    pub fn with_delay(mut self, category: &'static str, delay: Duration) -> Self {
        self.delays.insert(category, delay);
        self
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    /// Fetches started, including ones that were later cancelled
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Fetches that ran to completion
    pub fn completed_fetches(&self) -> usize {
        self.completed_fetches.load(Ordering::SeqCst)
    }

    async fn fetch<T>(&self, category: &'static str, value: T) -> Result<T> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delays.get(category) {
            tokio::time::sleep(*delay).await;
        }

        if self.failing == Some(category) {
            return Err(LookupError::upstream(
                &format!("character/{}", category),
                "API returned status code 500",
            )
            .into());
        }

        self.completed_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(value)
    }
}

impl Default for MockCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterRepository for MockCharacterRepository {
    async fn resolve_ocid(&self, query: &SearchQuery) -> Result<Ocid> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        if self.identity_fails {
            return Err(LookupError::NotFound {
                character_name: query.character_name().to_string(),
                world_name: query.world().to_string(),
            }
            .into());
        }
        Ok(Ocid::new(format!("ocid-{}", query.character_name())))
    }

    async fn fetch_basic_info(&self, _ocid: &Ocid) -> Result<CharacterBasicInfo> {
        self.fetch("basic", self.basic_info.clone()).await
    }

    async fn fetch_guild_name(&self, _ocid: &Ocid) -> Result<Option<String>> {
        self.fetch("guild", self.guild_name.clone()).await
    }

    async fn fetch_item_equipment(&self, _ocid: &Ocid) -> Result<Vec<ItemEquipment>> {
        self.fetch("item-equipment", self.items.clone()).await
    }

    async fn fetch_pet_info(&self, _ocid: &Ocid) -> Result<CharacterPetInfo> {
        self.fetch("pet-equipment", self.pets.clone()).await
    }

    async fn fetch_skill_info(&self, _ocid: &Ocid) -> Result<CharacterSkillInfo> {
        self.fetch("skill-equipment", self.skills.clone()).await
    }

    async fn fetch_stats(&self, _ocid: &Ocid) -> Result<Vec<Stat>> {
        self.fetch("stat", self.stats.clone()).await
    }

    async fn fetch_vmatrix(&self, _ocid: &Ocid) -> Result<Vec<VCoreEquipment>> {
        self.fetch("vmatrix", self.cores.clone()).await
    }
}
