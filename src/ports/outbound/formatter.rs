use crate::application::read_models::CharacterReadModel;
use crate::shared::Result;

/// CharacterFormatter port for rendering a looked-up character
///
/// This port abstracts the presentation format (Markdown, JSON, etc.).
pub trait CharacterFormatter {
    /// Renders the read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &CharacterReadModel) -> Result<String>;
}
