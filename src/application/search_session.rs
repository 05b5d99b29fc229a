//! Presentation state of a character search.
//!
//! A session moves `Idle → Loading → Loaded | Failed` and back to `Idle` on
//! dismissal. Every transition replaces the whole state; nothing is patched
//! in place, so a failed search never leaves a partial character behind.

use crate::application::read_models::CharacterReadModel;
use crate::character_lookup::domain::{SearchQuery, World};
use crate::shared::Result;

/// Current state of the session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing searched, or the last result was dismissed
    #[default]
    Idle,
    Loading {
        query: SearchQuery,
    },
    Loaded {
        query: SearchQuery,
        model: Box<CharacterReadModel>,
    },
    Failed {
        query: SearchQuery,
        message: String,
    },
}

/// SearchSession - State machine driven by search submissions and outcomes
#[derive(Debug, Default)]
pub struct SearchSession {
    state: SessionState,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Starts a search for `character_name` on `world`.
    ///
    /// # Errors
    /// Returns `InvalidInput` for an empty or over-long name; the state is
    /// left untouched and no search starts.
    pub fn submit(&mut self, character_name: &str, world: World) -> Result<SearchQuery> {
        let query = SearchQuery::new(character_name, world)?;
        self.start(query.clone());
        Ok(query)
    }

    /// Starts the search encoded in a shared query string.
    ///
    /// Returns `Ok(None)` and leaves the state untouched when the string does
    /// not carry both parameters.
    pub fn submit_query_string(&mut self, query_string: &str) -> Result<Option<SearchQuery>> {
        let Some(query) = SearchQuery::from_query_string(query_string)? else {
            return Ok(None);
        };
        self.start(query.clone());
        Ok(Some(query))
    }

    fn start(&mut self, query: SearchQuery) {
        tracing::debug!(query = %query.to_query_string(), "search submitted");
        self.state = SessionState::Loading { query };
    }

    /// Applies the outcome of the running search.
    ///
    /// Every failure collapses into the same "no such character" message for
    /// the submitted name. Outcomes arriving outside `Loading` are ignored.
    pub fn resolve(&mut self, outcome: Result<CharacterReadModel>) {
        let SessionState::Loading { query } = &self.state else {
            tracing::debug!("ignoring outcome without a search in flight");
            return;
        };
        let query = query.clone();

        self.state = match outcome {
            Ok(model) => SessionState::Loaded {
                query,
                model: Box::new(model),
            },
            Err(e) => {
                tracing::debug!(error = %e, "search failed");
                let message = not_found_message(query.character_name());
                SessionState::Failed { query, message }
            }
        };
    }

    /// Returns to `Idle`, dropping any result and query
    pub fn dismiss(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Query string to share for the current search, if one is active or shown
    pub fn share_query(&self) -> Option<String> {
        match &self.state {
            SessionState::Loading { query } | SessionState::Loaded { query, .. } => {
                Some(query.to_query_string())
            }
            SessionState::Idle | SessionState::Failed { .. } => None,
        }
    }

    pub fn read_model(&self) -> Option<&CharacterReadModel> {
        match &self.state {
            SessionState::Loaded { model, .. } => Some(model),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

fn not_found_message(character_name: &str) -> String {
    format!("{}은/는 없는 캐릭터에요!", character_name)
}
