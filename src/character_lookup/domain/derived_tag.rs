use serde::Serialize;

/// Display color of a derived tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    Green,
    Red,
    Cyan,
    Blue,
}

impl std::fmt::Display for TagColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TagColor::Green => "green",
            TagColor::Red => "red",
            TagColor::Cyan => "cyan",
            TagColor::Blue => "blue",
        };
        write!(f, "{}", name)
    }
}

/// A computed badge; never persisted, recomputed whenever the view model changes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedTag {
    pub color: TagColor,
    pub label: String,
}

impl DerivedTag {
    pub fn new(color: TagColor, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// Urgency badge for a pet whose life is about to run out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetUrgency {
    /// 1-based pet slot
    pub slot: u8,
    pub pet_name: String,
    /// Calendar days until expiry; negative once expired
    pub days_remaining: i64,
    pub tag: DerivedTag,
}
