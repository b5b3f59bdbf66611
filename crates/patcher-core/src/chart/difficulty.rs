use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
    ExpertPlus,
}

/// Order in which recorded track tempos are consulted when choosing a patch
/// tempo. The last label with a tempo wins, so the hardest chart takes
/// precedence.
pub const PATCH_PRIORITY: [Difficulty; 5] = [
    Difficulty::Easy,
    Difficulty::Normal,
    Difficulty::Hard,
    Difficulty::Expert,
    Difficulty::ExpertPlus,
];

impl Difficulty {
    /// Parse a manifest `difficulty` label. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }
}
