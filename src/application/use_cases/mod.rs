/// Use cases module containing application business logic orchestration
mod lookup_character;

pub use lookup_character::{LookupCharacterUseCase, FETCHER_COUNT};
