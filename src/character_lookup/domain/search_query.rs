use super::World;
use crate::shared::error::LookupError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::HashMap;

/// Maximum character name length, counted in characters
pub const MAX_CHARACTER_NAME_LENGTH: usize = 20;

/// Query-string key carrying the character name
pub const CHARACTER_NAME_PARAM: &str = "characterName";

/// Query-string key carrying the world name
pub const WORLD_NAME_PARAM: &str = "worldName";

/// NewType wrapper for a character name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CharacterName(String);

impl CharacterName {
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();

        if name.is_empty() {
            return Err(LookupError::invalid_input("Please enter a character name").into());
        }

        let length = name.chars().count();
        if length > MAX_CHARACTER_NAME_LENGTH {
            return Err(LookupError::invalid_input(format!(
                "Character name is too long ({} characters). Maximum allowed: {} characters",
                length, MAX_CHARACTER_NAME_LENGTH
            ))
            .into());
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted character search: who to look up and on which world
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    character_name: CharacterName,
    world: World,
}

impl SearchQuery {
    pub fn new(character_name: &str, world: World) -> Result<Self> {
        Ok(Self {
            character_name: CharacterName::new(character_name)?,
            world,
        })
    }

    pub fn character_name(&self) -> &str {
        self.character_name.as_str()
    }

    pub fn world(&self) -> World {
        self.world
    }

    /// Renders the shareable query string, e.g.
    /// `characterName=%EC%8A%AC%EB%9D%BC%EC%9E%84&worldName=%EB%A3%A8%EB%82%98`
    pub fn to_query_string(&self) -> String {
        format!(
            "{}={}&{}={}",
            CHARACTER_NAME_PARAM,
            urlencoding::encode(self.character_name.as_str()),
            WORLD_NAME_PARAM,
            urlencoding::encode(self.world.as_str())
        )
    }

    /// Parses a shareable query string back into a search.
    ///
    /// Returns `Ok(None)` when either parameter is missing or empty, so a bare
    /// page load does not trigger a search. A leading `?` is accepted and both
    /// `+` and `%20` decode to a space.
    ///
    /// # Errors
    /// Returns `InvalidInput` when both parameters are present but the name
    /// fails validation or the world is unknown.
    pub fn from_query_string(query: &str) -> Result<Option<Self>> {
        let params = parse_params(query.trim_start_matches('?'))?;

        let (Some(name), Some(world)) = (
            params.get(CHARACTER_NAME_PARAM).filter(|v| !v.is_empty()),
            params.get(WORLD_NAME_PARAM).filter(|v| !v.is_empty()),
        ) else {
            return Ok(None);
        };

        let world: World = world.parse()?;
        Ok(Some(Self::new(name, world)?))
    }
}

fn parse_params(query: &str) -> Result<HashMap<String, String>> {
    let mut params = HashMap::new();

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(key)?;
        let value = decode_component(value)?;
        // First occurrence wins, matching URLSearchParams::get
        params.entry(key).or_insert(value);
    }

    Ok(params)
}

fn decode_component(component: &str) -> Result<String> {
    let spaced = component.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map_err(|e| {
        LookupError::invalid_input(format!("Malformed query string component '{}': {}", component, e))
    })?;
    Ok(decoded.into_owned())
}
