pub mod marker_table;

pub use marker_table::{EquipmentMarker, MarkerRule, MarkerTable};
