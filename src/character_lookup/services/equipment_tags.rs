use crate::character_lookup::domain::{DerivedTag, ItemEquipment, TagColor};
use crate::character_lookup::policies::{EquipmentMarker, MarkerTable};

const RING_PRESENT_LABEL: &str = "혈반 있음";
const RING_ABSENT_LABEL: &str = "혈반 없음";
const WARD_PRESENT_LABEL: &str = "가호 있음";
const WARD_ABSENT_LABEL: &str = "가호 없음";

/// Counters accumulated from one pass over the equipped items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentSummary {
    pub has_ring: bool,
    pub has_guild_ward: bool,
    pub arcane_count: usize,
    pub absolute_count: usize,
}

/// EquipmentTagger - Derives the equipment badges shown above the panels
pub struct EquipmentTagger;

impl EquipmentTagger {
    /// Scans the item names once against the marker table
    pub fn summarize(items: &[ItemEquipment], table: &MarkerTable) -> EquipmentSummary {
        items
            .iter()
            .flat_map(|item| table.flags_for(&item.item_name))
            .fold(EquipmentSummary::default(), |mut summary, flag| {
                match flag {
                    EquipmentMarker::Ring => summary.has_ring = true,
                    EquipmentMarker::GuildWard => summary.has_guild_ward = true,
                    EquipmentMarker::ArcaneTier => summary.arcane_count += 1,
                    EquipmentMarker::AbsoluteTier => summary.absolute_count += 1,
                }
                summary
            })
    }

    /// Returns exactly three tags in fixed order: ring, guild ward, tier counts
    pub fn tags(items: &[ItemEquipment], table: &MarkerTable) -> Vec<DerivedTag> {
        let summary = Self::summarize(items, table);

        vec![
            Self::presence_tag(summary.has_ring, RING_PRESENT_LABEL, RING_ABSENT_LABEL),
            Self::presence_tag(
                summary.has_guild_ward,
                WARD_PRESENT_LABEL,
                WARD_ABSENT_LABEL,
            ),
            DerivedTag::new(
                TagColor::Cyan,
                format!("{}앜 {}앱", summary.arcane_count, summary.absolute_count),
            ),
        ]
    }

    fn presence_tag(present: bool, present_label: &str, absent_label: &str) -> DerivedTag {
        if present {
            DerivedTag::new(TagColor::Green, present_label)
        } else {
            DerivedTag::new(TagColor::Red, absent_label)
        }
    }
}
