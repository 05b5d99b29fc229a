use maplem_lookup::prelude::*;
use std::sync::{Arc, Mutex};

/// What the lookup told its progress reporter, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    Status(String),
    /// One category finished; `done` counts finished categories so far
    Fetched { category: String, done: usize, total: usize },
    Failed(String),
    Completed(String),
}

/// Mock ProgressReporter recording lookup events
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<LookupEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LookupEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Categories in the order they finished
    pub fn fetched_categories(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LookupEvent::Fetched { category, .. } => Some(category),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LookupEvent::Failed(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn completed(&self) -> bool {
        self.events()
            .iter()
            .any(|event| matches!(event, LookupEvent::Completed(_)))
    }

    fn push(&self, event: LookupEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(LookupEvent::Status(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(LookupEvent::Fetched {
            category: message.unwrap_or_default().to_string(),
            done: current,
            total,
        });
    }

    fn report_error(&self, message: &str) {
        self.push(LookupEvent::Failed(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.push(LookupEvent::Completed(message.to_string()));
    }
}
