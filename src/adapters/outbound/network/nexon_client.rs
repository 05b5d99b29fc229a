use crate::character_lookup::domain::character::null_as_default;
use crate::character_lookup::domain::{
    CharacterBasicInfo, CharacterPetInfo, CharacterSkillInfo, ItemEquipment, Ocid, SearchQuery,
    Stat, VCoreEquipment,
};
use crate::config::ApiConfig;
use crate::ports::outbound::CharacterRepository;
use crate::shared::error::LookupError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// NEXON Open API client for MapleStory M character data
///
/// Implements the CharacterRepository port over the async reqwest client.
/// The API key travels in the `x-nxopen-api-key` header of every request.
///
/// # Failure policy
/// - No retries: a single failed attempt is terminal for the search
/// - No timeout override beyond the client default below
pub struct NexonOpenApiClient {
    client: reqwest::Client,
    api_root: String,
}

impl NexonOpenApiClient {
    const API_KEY_HEADER: &'static str = "x-nxopen-api-key";
    const API_PREFIX: &'static str = "maplestorym/v1";
    const TIMEOUT_SECONDS: u64 = 30;

    /// Creates a new client from the loaded configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut api_key = HeaderValue::from_str(config.api_key()).map_err(|_| LookupError::Config {
            message: "API key contains characters that are not valid in an HTTP header"
                .to_string(),
            hint: "Check the key for stray whitespace or quotes".to_string(),
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(Self::API_KEY_HEADER, api_key);

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("maplem-lookup/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_root: format!(
                "{}/{}",
                config.base_url().trim_end_matches('/'),
                Self::API_PREFIX
            ),
        })
    }

    fn identity_url(&self, query: &SearchQuery) -> String {
        format!(
            "{}/id?character_name={}&world_name={}",
            self.api_root,
            urlencoding::encode(query.character_name()),
            urlencoding::encode(query.world().as_str())
        )
    }

    fn character_url(&self, category: &str, ocid: &Ocid) -> String {
        format!(
            "{}/character/{}?ocid={}",
            self.api_root,
            category,
            urlencoding::encode(ocid.as_str())
        )
    }

    /// Fetches one character category and decodes its JSON body
    async fn fetch_category<T: DeserializeOwned>(&self, category: &str, ocid: &Ocid) -> Result<T> {
        let endpoint = format!("character/{}", category);
        let url = self.character_url(category, ocid);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::upstream(&endpoint, e.to_string()))?;

        let status = response.status();
        tracing::debug!(endpoint = %endpoint, status = %status, "upstream response");

        if !status.is_success() {
            return Err(
                LookupError::upstream(&endpoint, format!("API returned status code {}", status))
                    .into(),
            );
        }

        let body = response
            .json::<T>()
            .await
            .map_err(|e| LookupError::upstream(&endpoint, format!("Malformed payload: {}", e)))?;
        Ok(body)
    }
}

#[async_trait]
impl CharacterRepository for NexonOpenApiClient {
    async fn resolve_ocid(&self, query: &SearchQuery) -> Result<Ocid> {
        const ENDPOINT: &str = "id";

        let response = self
            .client
            .get(self.identity_url(query))
            .send()
            .await
            .map_err(|e| LookupError::upstream(ENDPOINT, e.to_string()))?;

        let status = response.status();
        tracing::debug!(endpoint = ENDPOINT, status = %status, "upstream response");

        if !status.is_success() {
            return Err(LookupError::NotFound {
                character_name: query.character_name().to_string(),
                world_name: query.world().to_string(),
            }
            .into());
        }

        let body: IdResponse = response
            .json()
            .await
            .map_err(|e| LookupError::upstream(ENDPOINT, format!("Malformed payload: {}", e)))?;
        Ok(Ocid::new(body.ocid))
    }

    async fn fetch_basic_info(&self, ocid: &Ocid) -> Result<CharacterBasicInfo> {
        self.fetch_category("basic", ocid).await
    }

    async fn fetch_guild_name(&self, ocid: &Ocid) -> Result<Option<String>> {
        let body: GuildResponse = self.fetch_category("guild", ocid).await?;
        Ok(body.guild_name)
    }

    async fn fetch_item_equipment(&self, ocid: &Ocid) -> Result<Vec<ItemEquipment>> {
        let body: ItemEquipmentResponse = self.fetch_category("item-equipment", ocid).await?;
        Ok(body.item_equipment)
    }

    async fn fetch_pet_info(&self, ocid: &Ocid) -> Result<CharacterPetInfo> {
        self.fetch_category("pet-equipment", ocid).await
    }

    async fn fetch_skill_info(&self, ocid: &Ocid) -> Result<CharacterSkillInfo> {
        self.fetch_category("skill-equipment", ocid).await
    }

    async fn fetch_stats(&self, ocid: &Ocid) -> Result<Vec<Stat>> {
        let body: StatResponse = self.fetch_category("stat", ocid).await?;
        Ok(body.stat)
    }

    async fn fetch_vmatrix(&self, ocid: &Ocid) -> Result<Vec<VCoreEquipment>> {
        let body: VmatrixResponse = self.fetch_category("vmatrix", ocid).await?;
        Ok(body.character_v_core_equipment)
    }
}

// Open API response envelopes

#[derive(Debug, Deserialize)]
struct IdResponse {
    ocid: String,
}

#[derive(Debug, Deserialize)]
struct GuildResponse {
    #[serde(default)]
    guild_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ItemEquipmentResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    item_equipment: Vec<ItemEquipment>,
}

#[derive(Debug, Deserialize)]
struct StatResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    stat: Vec<Stat>,
}

#[derive(Debug, Deserialize)]
struct VmatrixResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    character_v_core_equipment: Vec<VCoreEquipment>,
}
