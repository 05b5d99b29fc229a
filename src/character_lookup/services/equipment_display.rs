use crate::character_lookup::domain::ItemEquipment;

/// Categories containing this marker are cash-shop cosmetics
const CASH_CATEGORY_MARKER: &str = "Cash";

/// Second word of categories hidden from the equipment panel:
/// symbols, mounts, effects, androids, chairs
const EXCLUDED_CATEGORY_KINDS: [&str; 5] = ["아케인심볼", "탈것", "이펙트", "안드로이드", "의자"];

/// EquipmentDisplayFilter - Selects and orders items for the equipment panel
pub struct EquipmentDisplayFilter;

impl EquipmentDisplayFilter {
    /// Drops cash and excluded categories, then sorts by category name.
    ///
    /// The sort is stable, so items sharing a category keep upstream order.
    pub fn display_items(items: &[ItemEquipment]) -> Vec<ItemEquipment> {
        let mut shown: Vec<ItemEquipment> = items
            .iter()
            .filter(|item| Self::is_displayed(&item.item_equipment_page_name))
            .cloned()
            .collect();

        shown.sort_by(|a, b| a.item_equipment_page_name.cmp(&b.item_equipment_page_name));
        shown
    }

    fn is_displayed(category: &str) -> bool {
        if category.contains(CASH_CATEGORY_MARKER) {
            return false;
        }

        match category.split(' ').nth(1) {
            Some(kind) => !EXCLUDED_CATEGORY_KINDS.contains(&kind),
            None => true,
        }
    }
}
