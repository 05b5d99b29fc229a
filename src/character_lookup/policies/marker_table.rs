/// Semantic meaning of an item-name marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquipmentMarker {
    /// Alliance ring (혈맹의 반지), tracked by presence
    Ring,
    /// Union guild ward (유니온의 가호), tracked by presence
    GuildWard,
    /// Arcane Shade tier piece, counted
    ArcaneTier,
    /// Absolab tier piece, counted
    AbsoluteTier,
}

/// Maps one substring of an item name to the flag it raises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    pub marker: &'static str,
    pub flag: EquipmentMarker,
}

/// The markers recognised in the live game's item names
const DEFAULT_RULES: [MarkerRule; 4] = [
    MarkerRule {
        marker: "혈맹의 반지",
        flag: EquipmentMarker::Ring,
    },
    MarkerRule {
        marker: "유니온의 가호",
        flag: EquipmentMarker::GuildWard,
    },
    MarkerRule {
        marker: "아케인셰이드",
        flag: EquipmentMarker::ArcaneTier,
    },
    MarkerRule {
        marker: "앱솔랩스",
        flag: EquipmentMarker::AbsoluteTier,
    },
];

/// MarkerTable policy: the single place where upstream item naming
/// conventions are translated into equipment flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerTable {
    rules: Vec<MarkerRule>,
}

impl MarkerTable {
    pub fn new(rules: Vec<MarkerRule>) -> Self {
        Self { rules }
    }

    /// Flags raised by an item name; an item may raise several
    pub fn flags_for<'a>(&'a self, item_name: &'a str) -> impl Iterator<Item = EquipmentMarker> + 'a {
        self.rules
            .iter()
            .filter(move |rule| item_name.contains(rule.marker))
            .map(|rule| rule.flag)
    }

    pub fn rules(&self) -> &[MarkerRule] {
        &self.rules
    }
}

impl Default for MarkerTable {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}
