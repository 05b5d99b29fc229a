/// Mock implementations for testing
mod mock_character_repository;
mod mock_progress_reporter;

pub use mock_character_repository::MockCharacterRepository;
pub use mock_progress_reporter::{LookupEvent, MockProgressReporter};
