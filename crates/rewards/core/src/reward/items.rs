//! Concrete item families referenced by reward kinds.
//!
//! Each family is a closed enum so generators can pick among them by index and
//! pregeneration arguments can name one directly in RON/TOML.

use crate::env::MoveType;

macro_rules! item_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            Debug,
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
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Player-facing name.
            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }
    };
}

item_enum! {
    /// Ball families, lowest catch rate first.
    BallKind {
        Poke => "Poké Ball",
        Great => "Great Ball",
        Ultra => "Ultra Ball",
        Rogue => "Rogue Ball",
        Master => "Master Ball",
    }
}

item_enum! {
    /// Berries. Order matters: the berry generator indexes into `ALL`.
    BerryKind {
        Sitrus => "Sitrus Berry",
        Lum => "Lum Berry",
        Enigma => "Enigma Berry",
        Liechi => "Liechi Berry",
        Ganlon => "Ganlon Berry",
        Petaya => "Petaya Berry",
        Apicot => "Apicot Berry",
        Salac => "Salac Berry",
        Lansat => "Lansat Berry",
        Starf => "Starf Berry",
        Leppa => "Leppa Berry",
    }
}

impl BerryKind {
    pub const fn max_stack(self) -> u16 {
        match self {
            BerryKind::Lum => 2,
            BerryKind::Liechi
            | BerryKind::Ganlon
            | BerryKind::Petaya
            | BerryKind::Apicot
            | BerryKind::Salac
            | BerryKind::Starf => 3,
            BerryKind::Lansat => 1,
            BerryKind::Sitrus | BerryKind::Enigma | BerryKind::Leppa => 3,
        }
    }
}

item_enum! {
    /// In-battle stat stages raised by X items.
    BattleStat {
        Attack => "X Attack",
        Defense => "X Defense",
        SpAttack => "X Sp. Atk",
        SpDefense => "X Sp. Def",
        Speed => "X Speed",
        Accuracy => "X Accuracy",
    }
}

item_enum! {
    /// Permanent base stats raised by vitamins.
    PermanentStat {
        Hp => "HP Up",
        Attack => "Protein",
        Defense => "Iron",
        SpAttack => "Calcium",
        SpDefense => "Zinc",
        Speed => "Carbos",
    }
}

item_enum! {
    /// Items that trigger an evolution when used on a compatible member.
    EvolutionItem {
        LinkingCord => "Linking Cord",
        SunStone => "Sun Stone",
        MoonStone => "Moon Stone",
        LeafStone => "Leaf Stone",
        FireStone => "Fire Stone",
        WaterStone => "Water Stone",
        ThunderStone => "Thunder Stone",
        IceStone => "Ice Stone",
        DuskStone => "Dusk Stone",
        DawnStone => "Dawn Stone",
        ShinyStone => "Shiny Stone",
        SweetApple => "Sweet Apple",
        TartApple => "Tart Apple",
        BlackAugurite => "Black Augurite",
        PeatBlock => "Peat Block",
        GalaricaCuff => "Galarica Cuff",
        GalaricaWreath => "Galarica Wreath",
        AuspiciousArmor => "Auspicious Armor",
        MaliciousArmor => "Malicious Armor",
        MetalAlloy => "Metal Alloy",
        ScrollOfDarkness => "Scroll of Darkness",
        ScrollOfWaters => "Scroll of Waters",
    }
}

impl EvolutionItem {
    /// Rare items are offered by the rare evolution generator only.
    pub const fn is_rare(self) -> bool {
        matches!(
            self,
            EvolutionItem::BlackAugurite
                | EvolutionItem::PeatBlock
                | EvolutionItem::GalaricaCuff
                | EvolutionItem::GalaricaWreath
                | EvolutionItem::AuspiciousArmor
                | EvolutionItem::MaliciousArmor
                | EvolutionItem::MetalAlloy
                | EvolutionItem::ScrollOfDarkness
                | EvolutionItem::ScrollOfWaters
        )
    }
}

item_enum! {
    /// Items that unlock an alternate form while held.
    FormChangeItem {
        Venusaurite => "Venusaurite",
        CharizarditeX => "Charizardite X",
        CharizarditeY => "Charizardite Y",
        Blastoisinite => "Blastoisinite",
        Gengarite => "Gengarite",
        Lucarionite => "Lucarionite",
        Garchompite => "Garchompite",
        BlueOrb => "Blue Orb",
        RedOrb => "Red Orb",
        RustedSword => "Rusted Sword",
        RustedShield => "Rusted Shield",
        PrisonBottle => "Prison Bottle",
    }
}

item_enum! {
    /// Fixed held items with their own stack limits.
    HeldItem {
        Leftovers => "Leftovers",
        ShellBell => "Shell Bell",
        FocusBand => "Focus Band",
        KingsRock => "King's Rock",
        QuickClaw => "Quick Claw",
        GripClaw => "Grip Claw",
        ScopeLens => "Scope Lens",
        WideLens => "Wide Lens",
        MultiLens => "Multi Lens",
        ReviverSeed => "Reviver Seed",
        LuckyEgg => "Lucky Egg",
        GoldenEgg => "Golden Egg",
        WhiteHerb => "White Herb",
        BatonPass => "Baton Pass",
        SoulDew => "Soul Dew",
        SootheBell => "Soothe Bell",
        GoldenPunch => "Golden Punch",
        MiniBlackHole => "Mini Black Hole",
    }
}

impl HeldItem {
    pub const fn max_stack(self) -> u16 {
        match self {
            HeldItem::ScopeLens
            | HeldItem::ReviverSeed
            | HeldItem::BatonPass
            | HeldItem::MiniBlackHole => 1,
            HeldItem::MultiLens | HeldItem::WhiteHerb => 2,
            HeldItem::KingsRock
            | HeldItem::QuickClaw
            | HeldItem::GripClaw
            | HeldItem::WideLens
            | HeldItem::SootheBell => 3,
            HeldItem::Leftovers | HeldItem::ShellBell | HeldItem::LuckyEgg => 4,
            HeldItem::FocusBand | HeldItem::GoldenPunch => 5,
            HeldItem::GoldenEgg => 2,
            HeldItem::SoulDew => 10,
        }
    }
}

item_enum! {
    /// Run-wide items owned by the trainer rather than a party member.
    PersistentItem {
        ExpShare => "Exp. All",
        ExpCharm => "Exp. Charm",
        SuperExpCharm => "Super Exp. Charm",
        AmuletCoin => "Amulet Coin",
        ShinyCharm => "Shiny Charm",
        HealingCharm => "Healing Charm",
        BerryPouch => "Berry Pouch",
        LockCapsule => "Lock Capsule",
        Map => "Map",
    }
}

impl PersistentItem {
    pub const fn max_stack(self) -> u16 {
        match self {
            PersistentItem::ExpShare | PersistentItem::AmuletCoin | PersistentItem::HealingCharm => 5,
            PersistentItem::ExpCharm => 99,
            PersistentItem::SuperExpCharm => 30,
            PersistentItem::ShinyCharm => 4,
            PersistentItem::BerryPouch => 3,
            PersistentItem::LockCapsule | PersistentItem::Map => 1,
        }
    }
}

item_enum! {
    /// Modifiers granted to the opposing side between waves.
    EnemyBuff {
        DamageBooster => "Damage Token",
        DamageReduction => "Protection Token",
        Heal => "Recovery Token",
        PoisonChance => "Poison Token",
        ParalyzeChance => "Paralyze Token",
        BurnChance => "Burn Token",
        StatusHealChance => "Full Heal Token",
        EndureChance => "Endure Token",
        FusedChance => "Fusion Token",
    }
}

impl EnemyBuff {
    pub const fn max_stack(self) -> u16 {
        match self {
            EnemyBuff::DamageBooster | EnemyBuff::DamageReduction => 999,
            _ => 10,
        }
    }
}

/// Held item that boosts moves of one type.
pub const fn type_booster_name(move_type: MoveType) -> &'static str {
    match move_type {
        MoveType::Normal => "Silk Scarf",
        MoveType::Fire => "Charcoal",
        MoveType::Water => "Mystic Water",
        MoveType::Electric => "Magnet",
        MoveType::Grass => "Miracle Seed",
        MoveType::Ice => "Never-Melt Ice",
        MoveType::Fighting => "Black Belt",
        MoveType::Poison => "Poison Barb",
        MoveType::Ground => "Soft Sand",
        MoveType::Flying => "Sharp Beak",
        MoveType::Psychic => "Twisted Spoon",
        MoveType::Bug => "Silver Powder",
        MoveType::Rock => "Hard Stone",
        MoveType::Ghost => "Spell Tag",
        MoveType::Dragon => "Dragon Fang",
        MoveType::Dark => "Black Glasses",
        MoveType::Steel => "Metal Coat",
        MoveType::Fairy => "Fairy Feather",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rare_evolution_items_are_a_strict_subset() {
        let rare = EvolutionItem::ALL.iter().filter(|i| i.is_rare()).count();
        assert!(rare > 0);
        assert!(rare < EvolutionItem::ALL.len());
        assert!(!EvolutionItem::ThunderStone.is_rare());
    }

    #[test]
    fn item_ids_round_trip_through_strings() {
        assert_eq!("kings_rock".parse::<HeldItem>().unwrap(), HeldItem::KingsRock);
        assert_eq!(BerryKind::Sitrus.as_ref(), "sitrus");
        assert_eq!(HeldItem::KingsRock.name(), "King's Rock");
    }
}
