use crate::character_lookup::domain::{CharacterViewModel, Ocid, SearchQuery};
use crate::character_lookup::services::MatrixClassifier;
use crate::ports::outbound::{CharacterRepository, ProgressReporter};
use crate::shared::Result;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Instrument;
use uuid::Uuid;


/// Number of per-character endpoints fetched after identity resolution
pub const FETCHER_COUNT: usize = 7;

/// LookupCharacterUseCase - Core use case for a character search
///
/// Resolves the character id, fans out to every character endpoint
/// concurrently and assembles one view model. The join is all-or-nothing:
/// the first failing fetch fails the search and the remaining in-flight
/// requests are dropped.
///
/// # Type Parameters
/// * `R` - CharacterRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct LookupCharacterUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> LookupCharacterUseCase<R, PR>
where
    R: CharacterRepository,
    PR: ProgressReporter,
{
    /// Creates a new LookupCharacterUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Executes one search.
    ///
    /// The use case holds no state between calls; each run re-resolves the
    /// character id and gets its own correlation id on the tracing span.
    pub async fn execute(&self, query: &SearchQuery) -> Result<CharacterViewModel> {
        let span = tracing::info_span!(
            "lookup",
            request_id = %Uuid::new_v4(),
            character = query.character_name(),
            world = %query.world(),
        );

        async {
            let result = self.run(query).await;
            if let Err(e) = &result {
                tracing::debug!(error = %e, "lookup failed");
                self.progress_reporter.report_error("❌ Lookup failed");
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn run(&self, query: &SearchQuery) -> Result<CharacterViewModel> {
        // Step 1: Resolve the character id
        self.progress_reporter.report(&format!(
            "🔍 Resolving {} on {}...",
            query.character_name(),
            query.world()
        ));
        let ocid = self.repository.resolve_ocid(query).await?;
        tracing::debug!(ocid = %ocid, "resolved character id");

        // Step 2: Fetch every category concurrently
        let view_model = self.fetch_all(&ocid).await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Loaded {} ({})",
            query.character_name(),
            query.world()
        ));
        Ok(view_model)
    }

    async fn fetch_all(&self, ocid: &Ocid) -> Result<CharacterViewModel> {
        let completed = AtomicUsize::new(0);
        let repo = &self.repository;

        let (basic_info, guild_name, item_equipment, pet_info, skill_info, stat, vmatrix) =
            futures::try_join!(
                self.tracked("basic", &completed, repo.fetch_basic_info(ocid)),
                self.tracked("guild", &completed, repo.fetch_guild_name(ocid)),
                self.tracked("item-equipment", &completed, repo.fetch_item_equipment(ocid)),
                self.tracked("pet-equipment", &completed, repo.fetch_pet_info(ocid)),
                self.tracked("skill-equipment", &completed, repo.fetch_skill_info(ocid)),
                self.tracked("stat", &completed, repo.fetch_stats(ocid)),
                self.tracked("vmatrix", &completed, repo.fetch_vmatrix(ocid)),
            )?;

        Ok(CharacterViewModel {
            basic_info: Some(basic_info),
            guild_name: guild_name.unwrap_or_default(),
            item_equipment,
            pet_info: Some(pet_info),
            skill_info: Some(skill_info),
            stat,
            vmatrix: MatrixClassifier::classify(vmatrix),
        })
    }

    /// Awaits one fetch and reports it against the shared completion counter
    async fn tracked<T, F>(&self, category: &str, completed: &AtomicUsize, fetch: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match fetch.await {
            Ok(value) => {
                let current = completed.fetch_add(1, Ordering::Relaxed) + 1;
                self.progress_reporter
                    .report_progress(current, FETCHER_COUNT, Some(category));
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(category, error = %e, "character fetch failed");
                Err(e)
            }
        }
    }
}
