mod equipment_display;
mod equipment_tags;
mod matrix_classifier;
mod pet_urgency;

pub use equipment_display::EquipmentDisplayFilter;
pub use equipment_tags::{EquipmentSummary, EquipmentTagger};
pub use matrix_classifier::MatrixClassifier;
pub use pet_urgency::{PetUrgencyChecker, PET_URGENCY_THRESHOLD_DAYS};
