use crate::shared::error::LookupError;
use serde::{Deserialize, Serialize};

/// MapleStory M game world, named the way the Open API expects `world_name`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum World {
    #[serde(rename = "아케인")]
    Arcane,
    #[serde(rename = "크로아")]
    Croa,
    #[serde(rename = "엘니도")]
    Elnido,
    #[serde(rename = "루나")]
    Luna,
    #[serde(rename = "스카니아")]
    Scania,
    #[serde(rename = "유니온")]
    Union,
    #[serde(rename = "제니스")]
    Zenith,
}

impl World {
    /// All worlds in selection order; the first one is the default
    pub const ALL: [World; 7] = [
        World::Arcane,
        World::Croa,
        World::Elnido,
        World::Luna,
        World::Scania,
        World::Union,
        World::Zenith,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            World::Arcane => "아케인",
            World::Croa => "크로아",
            World::Elnido => "엘니도",
            World::Luna => "루나",
            World::Scania => "스카니아",
            World::Union => "유니온",
            World::Zenith => "제니스",
        }
    }

    fn names() -> String {
        Self::ALL
            .iter()
            .map(|w| w.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for World {
    fn default() -> Self {
        World::ALL[0]
    }
}

impl std::str::FromStr for World {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        World::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == trimmed)
            .ok_or_else(|| {
                LookupError::invalid_input(format!(
                    "Unknown world: {}. Please specify one of: {}",
                    s,
                    World::names()
                ))
            })
    }
}

impl std::fmt::Display for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
