//! maplem-lookup - MapleStory M character lookup over the NEXON Open API
//!
//! Resolves a character by name and world, fetches every character panel
//! concurrently and renders one combined view, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`character_lookup`): Character records, derived tags and pure services
//! - **Application Layer** (`application`): The lookup use case, read models and search session
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Open API client, console, formatters and file output
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use maplem_lookup::prelude::*;
//!
//! # async fn lookup() -> Result<()> {
//! let config = ApiConfig::from_env()?;
//! let use_case = LookupCharacterUseCase::new(
//!     NexonOpenApiClient::new(&config)?,
//!     StderrProgressReporter::new(),
//! );
//!
//! let query = SearchQuery::new("슬라임", World::Luna)?;
//! let character = use_case.execute(&query).await?;
//!
//! let model = CharacterReadModelBuilder::build(
//!     &query,
//!     character,
//!     &MarkerTable::default(),
//!     chrono::Utc::now(),
//! );
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod character_lookup;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::NexonOpenApiClient;
    pub use crate::application::dto::OutputFormat;
    pub use crate::application::read_models::{CharacterReadModel, CharacterReadModelBuilder};
    pub use crate::application::search_session::{SearchSession, SessionState};
    pub use crate::application::use_cases::LookupCharacterUseCase;
    pub use crate::character_lookup::domain::{
        CharacterBasicInfo, CharacterPetInfo, CharacterSkillInfo, CharacterViewModel,
        DerivedTag, ItemEquipment, MatrixBuckets, Ocid, PetUrgency, SearchQuery, Stat,
        TagColor, VCoreEquipment, World,
    };
    pub use crate::character_lookup::policies::MarkerTable;
    pub use crate::character_lookup::services::{
        EquipmentDisplayFilter, EquipmentTagger, MatrixClassifier, PetUrgencyChecker,
    };
    pub use crate::config::ApiConfig;
    pub use crate::ports::outbound::{
        CharacterFormatter, CharacterRepository, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, LookupError};
    pub use crate::shared::Result;
}
