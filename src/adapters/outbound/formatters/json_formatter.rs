use crate::application::read_models::CharacterReadModel;
use crate::ports::outbound::CharacterFormatter;
use crate::shared::Result;

/// JsonFormatter adapter emitting the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterFormatter for JsonFormatter {
    fn format(&self, model: &CharacterReadModel) -> Result<String> {
        let mut json = serde_json::to_string_pretty(model)?;
        json.push('\n');
        Ok(json)
    }
}
