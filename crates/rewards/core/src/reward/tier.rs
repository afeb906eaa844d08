//! Rarity tiers.

/// Ordered rarity band controlling draw probability and presentation.
///
/// Only the first five tiers are drawable. `Luxury` exists purely so luck
/// values above the Master band can be tinted differently.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tier {
    #[default]
    Common,
    Great,
    Ultra,
    Rogue,
    Master,
    /// Cosmetic band used for luck tinting, never drawn.
    Luxury,
}

impl Tier {
    /// Tiers a pool can contain, lowest first.
    pub const DRAWABLE: [Tier; 5] = [
        Tier::Common,
        Tier::Great,
        Tier::Ultra,
        Tier::Rogue,
        Tier::Master,
    ];

    pub const COUNT: usize = Self::DRAWABLE.len();

    /// Position of this tier in [`Tier::DRAWABLE`]. Luxury maps past the end.
    pub const fn index(self) -> usize {
        match self {
            Tier::Common => 0,
            Tier::Great => 1,
            Tier::Ultra => 2,
            Tier::Rogue => 3,
            Tier::Master => 4,
            Tier::Luxury => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Tier> {
        Self::DRAWABLE.get(index).copied()
    }

    pub const fn is_drawable(self) -> bool {
        !matches!(self, Tier::Luxury)
    }

    /// Next drawable tier upward, `None` at Master.
    pub fn up(self) -> Option<Tier> {
        if !self.is_drawable() {
            return None;
        }
        Self::from_index(self.index() + 1)
    }

    /// Next drawable tier downward, `None` at Common.
    pub fn down(self) -> Option<Tier> {
        match self {
            Tier::Common => None,
            Tier::Luxury => Some(Tier::Master),
            other => Self::from_index(other.index() - 1),
        }
    }

    /// Display label for offer screens.
    pub const fn display_name(self) -> &'static str {
        match self {
            Tier::Common => "Common",
            Tier::Great => "Great",
            Tier::Ultra => "Ultra",
            Tier::Rogue => "Rogue",
            Tier::Master => "Master",
            Tier::Luxury => "Luxury",
        }
    }

    /// RGB text tint used by presentation layers.
    pub const fn text_tint(self) -> u32 {
        match self {
            Tier::Common => 0xf8f8f8,
            Tier::Great => 0x4998f8,
            Tier::Ultra => 0xf8d038,
            Tier::Rogue => 0xdb4343,
            Tier::Master => 0xe331c5,
            Tier::Luxury => 0xe74c18,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_totally_ordered() {
        for pair in Tier::DRAWABLE.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(Tier::Master < Tier::Luxury);
    }

    #[test]
    fn walks_stop_at_drawable_bounds() {
        assert_eq!(Tier::Common.down(), None);
        assert_eq!(Tier::Master.up(), None);
        assert_eq!(Tier::Luxury.up(), None);
        assert_eq!(Tier::Great.up(), Some(Tier::Ultra));
        assert_eq!(Tier::Rogue.down(), Some(Tier::Ultra));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ULTRA".parse::<Tier>().unwrap(), Tier::Ultra);
        assert_eq!(Tier::Rogue.to_string(), "rogue");
    }
}
