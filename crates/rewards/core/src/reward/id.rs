//! Stable catalog identifiers.

/// Identifier of a catalog entry.
///
/// Identifiers are what pools, overrides and guaranteed specs refer to. A
/// generator's identifier is copied onto every concrete reward it produces.
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
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RewardId {
    // Balls
    Pokeball,
    GreatBall,
    UltraBall,
    RogueBall,
    MasterBall,

    // Consumables
    RareCandy,
    RarerCandy,
    Potion,
    SuperPotion,
    HyperPotion,
    MaxPotion,
    FullRestore,
    Revive,
    MaxRevive,
    SacredAsh,
    Ether,
    MaxEther,
    Elixir,
    MaxElixir,
    PpUp,
    PpMax,
    FullHeal,
    Lure,
    SuperLure,
    MaxLure,
    TempStatStageBooster,
    DireHit,

    // Money
    Nugget,
    BigNugget,
    RelicGold,

    // Generated per draw
    Berry,
    BaseStatBooster,
    AttackTypeBooster,
    EvolutionItem,
    RareEvolutionItem,
    FormChangeItem,
    TmCommon,
    TmGreat,
    TmUltra,

    // Held items
    Leftovers,
    ShellBell,
    FocusBand,
    KingsRock,
    QuickClaw,
    GripClaw,
    ScopeLens,
    WideLens,
    MultiLens,
    ReviverSeed,
    LuckyEgg,
    GoldenEgg,
    WhiteHerb,
    BatonPass,
    SoulDew,
    SootheBell,
    GoldenPunch,
    MiniBlackHole,

    // Run-wide items
    ExpShare,
    ExpCharm,
    SuperExpCharm,
    AmuletCoin,
    ShinyCharm,
    HealingCharm,
    BerryPouch,
    LockCapsule,
    Map,

    // Enemy buffs
    EnemyDamageBooster,
    EnemyDamageReduction,
    EnemyHeal,
    EnemyAttackPoisonChance,
    EnemyAttackParalyzeChance,
    EnemyAttackBurnChance,
    EnemyStatusEffectHealChance,
    EnemyEndureChance,
    EnemyFusedChance,
}
