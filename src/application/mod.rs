/// Application layer - Use cases, read models and presentation state
///
/// This layer orchestrates domain services and coordinates with
/// infrastructure through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod search_session;
pub mod use_cases;
