//! Domain layer: character records, the search query, and the pure
//! services that classify matrix cores and derive display tags.
pub mod domain;
pub mod policies;
pub mod services;
