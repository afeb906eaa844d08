use reward_core::engine::{assemble, draw_entry, draw_unique, random_base_tier};
use reward_core::env::MoveSlot;
use reward_core::reward::{BerryKind, RewardKind};
use reward_core::{
    BatchRequest, CustomSettings, DrawContext, DrawError, DrawOutcome, EngineConfig, MemberView, MoveId,
    MoveType, PartySnapshot, PcgRng, Pool, PoolKind, RewardEngine, RewardId, RewardOption,
    SequenceRng, SpeciesId, Tier, TierRequest, WeightedEntry, compile,
};

fn berry_pool() -> Pool {
    Pool::new(PoolKind::Player).with_tier(Tier::Common, vec![WeightedEntry::fixed(RewardId::Berry, 1)])
}

fn fighter(species: u16) -> MemberView {
    MemberView::new(SpeciesId(species), 60, 100).with_moves(vec![MoveSlot {
        move_id: MoveId(33),
        move_type: MoveType::Fire,
        max_pp: 25,
        pp_used: 3,
        damaging: true,
    }])
}

// ================================================================
// Single-tier pool
// ================================================================

/// A pool with one Common entry always yields that entry at Common.
#[test]
fn test_single_entry_pool_always_draws_that_entry() {
    let config = EngineConfig::default();
    let pool = Pool::new(PoolKind::Player)
        .with_tier(Tier::Common, vec![WeightedEntry::fixed(RewardId::Pokeball, 10)]);
    let party = PartySnapshot::default();
    let thresholds = compile(&pool, &party, 0);
    let ctx = DrawContext::new(&config, &pool, &thresholds, &party);
    let mut rng = PcgRng::new(0x5eed);

    for _ in 0..500 {
        let request = TierRequest::rolled().with_upgrades(false);
        let option = draw_unique(&ctx, &[], 1, request, &mut rng).unwrap();
        assert_eq!(option.reward.id, RewardId::Pokeball);
        assert_eq!(option.tier(), Some(Tier::Common));
        assert_eq!(option.upgrade_count, 0);
    }
}

// ================================================================
// Base tier roll
// ================================================================

/// The zero sample is the Master slot, one above is Rogue.
#[test]
fn test_zero_sample_rolls_master() {
    assert_eq!(random_base_tier(&mut SequenceRng::repeat(0)), Tier::Master);
    assert_eq!(random_base_tier(&mut SequenceRng::repeat(1)), Tier::Rogue);
    assert_eq!(random_base_tier(&mut SequenceRng::repeat(1023)), Tier::Common);
}

// ================================================================
// Guaranteed tiers without fill
// ================================================================

/// Asking for three with one guaranteed tier and no fill returns one option.
#[test]
fn test_guaranteed_tier_without_fill_returns_one_option() {
    let engine = RewardEngine::new(EngineConfig::default(), 9);
    let request = BatchRequest::new(3).with_settings(CustomSettings {
        guaranteed_tiers: vec![Tier::Great],
        fill_remaining: false,
        ..CustomSettings::default()
    });
    let party = PartySnapshot::new(vec![fighter(1)], 14);

    let options = engine.generate(&request, &party, &mut PcgRng::new(3)).unwrap();
    assert_eq!(options.len(), 1);
    assert!(options[0].tier() >= Some(Tier::Great));
}

// ================================================================
// Duplicate acceptance
// ================================================================

/// With a budget of one draw a colliding berry is accepted as is.
#[test]
fn test_exhausted_budget_accepts_duplicate() {
    let config = EngineConfig::default();
    let pool = berry_pool();
    let party = PartySnapshot::default();
    let thresholds = compile(&pool, &party, 0);
    let ctx = DrawContext::new(&config, &pool, &thresholds, &party);

    let mut seed_rng = SequenceRng::new(vec![4]);
    let existing = draw_unique(&ctx, &[], 1, TierRequest::rolled(), &mut seed_rng).unwrap();
    assert_eq!(existing.reward.kind, RewardKind::Berry(BerryKind::Leppa));

    // Every value resolves to a Sitrus berry, which shares the berry group.
    let mut rng = SequenceRng::repeat(0);
    let option = draw_unique(&ctx, &[existing.clone()], 1, TierRequest::rolled(), &mut rng).unwrap();
    assert_eq!(option.reward.kind, RewardKind::Berry(BerryKind::Sitrus));
    assert_eq!(option.reward.group(), existing.reward.group());
}

/// A whole batch from a single-group pool still fills every slot.
#[test]
fn test_single_group_batch_still_fills() {
    let config = EngineConfig {
        retries_per_slot: 1,
        max_retries: 1,
        ..EngineConfig::default()
    };
    let pool = berry_pool();
    let party = PartySnapshot::default();
    let thresholds = compile(&pool, &party, 0);
    let ctx = DrawContext::new(&config, &pool, &thresholds, &party);

    let options = assemble(&ctx, 4, &[], None, 0, &mut PcgRng::new(77)).unwrap();
    assert_eq!(options.len(), 4);
    assert!(options.iter().all(|option| option.reward.id == RewardId::Berry));
}

/// A colliding candidate is redrawn at its own tier and upgrade count.
#[test]
fn test_redraw_keeps_candidate_tier_and_upgrades() {
    let config = EngineConfig::default();
    let pool = Pool::new(PoolKind::Player)
        .with_tier(Tier::Common, vec![WeightedEntry::fixed(RewardId::Pokeball, 1)])
        .with_tier(
            Tier::Great,
            vec![
                WeightedEntry::fixed(RewardId::Potion, 1),
                WeightedEntry::fixed(RewardId::Ether, 1),
            ],
        );
    let party = PartySnapshot::default();
    let thresholds = compile(&pool, &party, 0);
    let ctx = DrawContext::new(&config, &pool, &thresholds, &party);

    let potion = reward_core::reward::resolve(
        RewardId::Potion,
        &party,
        &mut SequenceRng::repeat(0),
        None,
    )
    .unwrap();
    let existing = RewardOption::free(potion.with_tier(Tier::Great), 0);

    // First sample picks the Potion again, the second the Ether.
    let mut rng = SequenceRng::new(vec![0, 1]);
    let request = TierRequest::exact(Tier::Great, 2);
    let option = draw_unique(&ctx, &[existing], 3, request, &mut rng).unwrap();

    assert_eq!(option.reward.id, RewardId::Ether);
    assert_eq!(option.tier(), Some(Tier::Great));
    assert_eq!(option.upgrade_count, 2);
    assert_eq!(rng.consumed(), 2);
}

// ================================================================
// Generator fallback
// ================================================================

/// An Ultra generator with nothing to offer falls back once to Great and
/// keeps the rolled upgrade count.
#[test]
fn test_failing_ultra_generator_falls_back_once() {
    let config = EngineConfig::default();
    let pool = Pool::new(PoolKind::Player)
        .with_tier(Tier::Common, vec![WeightedEntry::fixed(RewardId::Potion, 1)])
        .with_tier(Tier::Great, vec![WeightedEntry::fixed(RewardId::Berry, 1)])
        .with_tier(Tier::Ultra, vec![WeightedEntry::fixed(RewardId::TmUltra, 1)]);
    let party = PartySnapshot::new(vec![fighter(4)], 20);
    let thresholds = compile(&pool, &party, 0);
    let ctx = DrawContext::new(&config, &pool, &thresholds, &party);

    let outcome = draw_entry(&ctx, Tier::Ultra, 1, Tier::Common, &mut PcgRng::new(1)).unwrap();
    let DrawOutcome::Drawn { option, fallbacks } = outcome else {
        panic!("expected a drawn option, got {outcome:?}");
    };
    assert_eq!(fallbacks, 1);
    assert_eq!(option.reward.id, RewardId::Berry);
    assert_eq!(option.tier(), Some(Tier::Great));
    assert_eq!(option.upgrade_count, 1);
}

/// Generators that never yield walk down to the floor, resample there and
/// surface as an error from the engine.
#[test]
fn test_exhausted_generators_fail_the_batch() {
    let config = EngineConfig::default().with_generator_floor(Tier::Great);
    let retry_limit = config.generator_retry_limit;
    let engine = RewardEngine::new(config, 0);
    let pool = Pool::new(PoolKind::Trainer)
        .with_tier(Tier::Great, vec![WeightedEntry::fixed(RewardId::TmGreat, 1)])
        .with_tier(Tier::Ultra, vec![WeightedEntry::fixed(RewardId::TmUltra, 1)]);
    // No member can learn a TM.
    let party = PartySnapshot::new(vec![MemberView::new(SpeciesId(4), 20, 20)], 12);

    // Base roll 0 is Master, which settles onto Ultra.
    let mut rng = SequenceRng::repeat(0);
    let err = engine
        .generate_from(&pool, &BatchRequest::new(1), &party, &mut rng)
        .unwrap_err();

    assert_eq!(
        err,
        DrawError::GeneratorExhausted {
            pool: PoolKind::Trainer,
            tier: Tier::Great,
        }
    );
    // Base roll, the Ultra sample, the first Great sample, then every resample.
    assert_eq!(rng.consumed() as u32, 3 + retry_limit);
}

// ================================================================
// Pinned tiers and pool membership
// ================================================================

/// Pinned tiers are a floor, and results only ever come from listed tiers.
#[test]
fn test_pinned_tiers_are_never_undercut() {
    let engine = RewardEngine::new(EngineConfig::default(), 42);
    let party = PartySnapshot::new(vec![fighter(1).with_luck(6), fighter(7)], 33);
    let request = BatchRequest::new(3).with_pinned_tiers(vec![Tier::Ultra, Tier::Great]);

    for seed in 0..64 {
        let options = engine.generate(&request, &party, &mut PcgRng::new(seed)).unwrap();
        assert_eq!(options.len(), 3);
        assert!(options[0].tier() >= Some(Tier::Ultra), "seed {seed}: {:?}", options[0]);
        assert!(options[1].tier() >= Some(Tier::Great), "seed {seed}: {:?}", options[1]);
        for option in &options {
            let tier = option.tier().unwrap();
            let pool = reward_core::pool(PoolKind::Player);
            assert!(
                pool.entries(tier).iter().any(|entry| entry.id == option.reward.id),
                "seed {seed}: {} not listed at {tier}",
                option.reward.id
            );
        }
    }
}

// ================================================================
// Cost clamping
// ================================================================

/// Overflowing shop multipliers clamp to the safe integer ceiling.
#[test]
fn test_costs_stay_within_safe_range() {
    let reward = reward_core::reward::resolve(
        RewardId::Potion,
        &PartySnapshot::default(),
        &mut SequenceRng::repeat(0),
        None,
    )
    .unwrap();

    let huge = RewardOption::priced(reward.clone(), u64::MAX, 1e300);
    assert_eq!(huge.cost, EngineConfig::MAX_SAFE_INTEGER);
    let infinite = RewardOption::priced(reward.clone(), 10, f64::INFINITY);
    assert_eq!(infinite.cost, EngineConfig::MAX_SAFE_INTEGER);
    let negative = RewardOption::priced(reward.clone(), 10, -3.0);
    assert_eq!(negative.cost, 0);
    let nan = RewardOption::priced(reward, 10, f64::NAN);
    assert_eq!(nan.cost, 0);
}
