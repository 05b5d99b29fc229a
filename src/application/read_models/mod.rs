//! Read models for CQRS-lite pattern
//!
//! This module contains the display-ready view of a looked-up character:
//! the raw view model plus everything derived from it for rendering.

mod character_read_model;
mod character_read_model_builder;

pub use character_read_model::{CharacterReadModel, CoreView, MatrixView};
pub use character_read_model_builder::CharacterReadModelBuilder;
