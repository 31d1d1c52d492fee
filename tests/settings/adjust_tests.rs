//! Integration tests for DifficultyAdjust
//!
//! These tests verify that overrides are applied the same way no matter how
//! often, or to which bases, they are applied.

use crate::test_helpers::{random_difficulty, seeded_rng};
use difficulty_adjust::settings::{BeatmapDifficulty, DifficultyAdjust, DifficultyField, Override};

#[test]
fn test_no_overrides_is_identity() {
    let adjust = DifficultyAdjust::new();
    let mut rng = seeded_rng(7);

    for _ in 0..100 {
        let base = random_difficulty(&mut rng);
        assert_eq!(adjust.apply(&base), base);
    }
}

#[test]
fn test_override_holds_across_bases() {
    let mut rng = seeded_rng(42);

    for field in DifficultyField::ALL {
        let mut adjust = DifficultyAdjust::new();
        adjust.setting_mut(field).set(3.3);

        for _ in 0..50 {
            let base = random_difficulty(&mut rng);
            let adjusted = adjust.apply(&base);

            assert_eq!(adjusted.get(field), 3.3);
            for other in DifficultyField::ALL.into_iter().filter(|&other| other != field) {
                assert_eq!(adjusted.get(other), base.get(other));
            }
            assert_eq!(adjusted.slider_multiplier, base.slider_multiplier);
            assert_eq!(adjusted.slider_tick_rate, base.slider_tick_rate);
        }
    }
}

#[test]
fn test_apply_does_not_touch_base() {
    let mut adjust = DifficultyAdjust::new();
    adjust.setting_mut(DifficultyField::DrainRate).set(0.0);

    let base = BeatmapDifficulty {
        drain_rate: 8.0,
        ..Default::default()
    };
    let snapshot = base;

    let adjusted = adjust.apply(&base);
    assert_eq!(adjusted.drain_rate, 0.0);
    assert_eq!(base, snapshot);
}

#[test]
fn test_repeated_application_is_stable() {
    let mut adjust = DifficultyAdjust::new();
    adjust.setting_mut(DifficultyField::CircleSize).set(4.0);
    adjust.setting_mut(DifficultyField::ApproachRate).set(9.0);

    let base = BeatmapDifficulty {
        drain_rate: 6.0,
        circle_size: 2.0,
        overall_difficulty: 7.0,
        approach_rate: 8.0,
        ..Default::default()
    };

    let first = adjust.apply(&base);
    for _ in 0..10 {
        assert_eq!(adjust.apply(&base), first);
    }

    // Feeding the output back in changes nothing either
    assert_eq!(adjust.apply(&first), first);
}

#[test]
fn test_reassigning_observed_value_keeps_override() {
    let mut adjust = DifficultyAdjust::new();
    adjust.setting_mut(DifficultyField::ApproachRate).set(8.0);

    // First application on a base that already matches the override
    let matching = BeatmapDifficulty {
        approach_rate: 8.0,
        ..Default::default()
    };
    let observed = adjust.apply(&matching).approach_rate;
    assert_eq!(observed, 8.0);

    adjust.setting_mut(DifficultyField::ApproachRate).set(observed);

    let different = BeatmapDifficulty {
        approach_rate: 3.0,
        ..Default::default()
    };
    assert_eq!(adjust.apply(&different).approach_rate, 8.0);
    assert_eq!(
        adjust.setting(DifficultyField::ApproachRate).current(),
        Override::Overridden(8.0)
    );
}

#[test]
fn test_reset_returns_to_passthrough() {
    let mut rng = seeded_rng(1234);
    let mut adjust = DifficultyAdjust::new();
    for field in DifficultyField::ALL {
        adjust.setting_mut(field).set(1.0);
    }

    let base = random_difficulty(&mut rng);
    assert_ne!(adjust.apply(&base), base);

    adjust.reset_settings_to_defaults();

    for field in DifficultyField::ALL {
        assert_eq!(adjust.setting(field).current(), Override::Unset);
    }
    for _ in 0..20 {
        let base = random_difficulty(&mut rng);
        assert_eq!(adjust.apply(&base), base);
    }
}

#[test]
fn test_reset_then_new_override() {
    let mut adjust = DifficultyAdjust::new();
    adjust.setting_mut(DifficultyField::CircleSize).set(2.0);
    adjust.reset_settings_to_defaults();
    adjust.setting_mut(DifficultyField::OverallDifficulty).set(9.0);

    let base = BeatmapDifficulty::default();
    let adjusted = adjust.apply(&base);
    assert_eq!(adjusted.circle_size, base.circle_size);
    assert_eq!(adjusted.overall_difficulty, 9.0);
    assert_eq!(adjust.settings_description(), "OD 9");
}

#[test]
fn test_zero_override_is_not_unset() {
    let mut adjust = DifficultyAdjust::new();
    adjust.setting_mut(DifficultyField::DrainRate).set(0.0);

    let base = BeatmapDifficulty {
        drain_rate: 6.0,
        ..Default::default()
    };
    assert_eq!(adjust.apply(&base).drain_rate, 0.0);
    assert!(!adjust.uses_default_configuration());
}

#[test]
fn test_shared_readers() {
    let mut adjust = DifficultyAdjust::new();
    adjust.setting_mut(DifficultyField::ApproachRate).set(10.0);

    let bases = [
        BeatmapDifficulty::default(),
        BeatmapDifficulty {
            approach_rate: 2.0,
            ..Default::default()
        },
    ];

    let adjust = &adjust;
    std::thread::scope(|scope| {
        let handles: Vec<_> = bases
            .iter()
            .map(|base| scope.spawn(move || adjust.apply(base).approach_rate))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 10.0);
        }
    });
}
