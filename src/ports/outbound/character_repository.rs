use crate::character_lookup::domain::{
    CharacterBasicInfo, CharacterPetInfo, CharacterSkillInfo, ItemEquipment, Ocid, SearchQuery,
    Stat, VCoreEquipment,
};
use crate::shared::Result;
use async_trait::async_trait;

/// CharacterRepository port for fetching character data
///
/// This port abstracts the external data source (the NEXON Open API)
/// behind one identity lookup and seven per-category fetchers.
///
/// # Async Support
/// All methods are async so the pipeline can poll the seven fetchers
/// concurrently. Implementations must be `Send + Sync`.
///
/// # Errors
/// Implementations report failures as `LookupError` values inside the
/// returned `anyhow::Error`:
/// - `resolve_ocid` fails with `NotFound` when the character does not exist
/// - every fetcher fails with `UpstreamError` on a non-success status or an
///   unparseable payload
#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Maps a character name and world to the internal identifier
    async fn resolve_ocid(&self, query: &SearchQuery) -> Result<Ocid>;

    async fn fetch_basic_info(&self, ocid: &Ocid) -> Result<CharacterBasicInfo>;

    /// Guild name, `None` when the character has no guild
    async fn fetch_guild_name(&self, ocid: &Ocid) -> Result<Option<String>>;

    async fn fetch_item_equipment(&self, ocid: &Ocid) -> Result<Vec<ItemEquipment>>;

    async fn fetch_pet_info(&self, ocid: &Ocid) -> Result<CharacterPetInfo>;

    async fn fetch_skill_info(&self, ocid: &Ocid) -> Result<CharacterSkillInfo>;

    async fn fetch_stats(&self, ocid: &Ocid) -> Result<Vec<Stat>>;

    /// Equipped matrix cores in upstream order
    async fn fetch_vmatrix(&self, ocid: &Ocid) -> Result<Vec<VCoreEquipment>>;
}
