// ABOUTME: Static age-keyed benchmark standards for every assessment metric
// ABOUTME: Pure reference data used to classify strengths and weaknesses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

//! Benchmark table.
//!
//! Standards are typical values for a competitive club player of the age
//! category. Direction comes from [`Metric::direction`].

use pitchside_core::models::{AgeCategory, Direction, Metric};
use serde::Serialize;

/// Reference standard for one metric in one age category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    /// Metric the standard applies to
    pub metric: Metric,
    /// Age category
    pub age_category: AgeCategory,
    /// Standard value in the metric's own unit
    pub standard: f64,
    /// Which way the metric improves
    pub direction: Direction,
}

impl Benchmark {
    /// Signed distance from the standard, positive when `value` is better
    #[must_use]
    pub fn favorable_delta(&self, value: f64) -> f64 {
        match self.direction {
            Direction::HigherIsBetter => value - self.standard,
            Direction::LowerIsBetter => self.standard - value,
        }
    }
}

struct AgeStandards {
    sprint_30m: f64,
    endurance_distance: f64,
    aerobic_capacity: f64,
    jump_height: f64,
    body_fat: f64,
    ball_control: f64,
    passing_accuracy: f64,
    dribbling_success: f64,
    shooting_accuracy: f64,
    defensive_duels_won: f64,
    tactical: f64,
    psychological: f64,
}

const U13: AgeStandards = AgeStandards {
    sprint_30m: 5.2,
    endurance_distance: 1200.0,
    aerobic_capacity: 48.0,
    jump_height: 30.0,
    body_fat: 18.0,
    ball_control: 3.0,
    passing_accuracy: 65.0,
    dribbling_success: 55.0,
    shooting_accuracy: 45.0,
    defensive_duels_won: 45.0,
    tactical: 2.5,
    psychological: 3.0,
};

const U15: AgeStandards = AgeStandards {
    sprint_30m: 4.8,
    endurance_distance: 1600.0,
    aerobic_capacity: 52.0,
    jump_height: 38.0,
    body_fat: 15.0,
    ball_control: 3.5,
    passing_accuracy: 70.0,
    dribbling_success: 60.0,
    shooting_accuracy: 50.0,
    defensive_duels_won: 50.0,
    tactical: 3.0,
    psychological: 3.0,
};

const U17: AgeStandards = AgeStandards {
    sprint_30m: 4.5,
    endurance_distance: 2000.0,
    aerobic_capacity: 55.0,
    jump_height: 45.0,
    body_fat: 13.0,
    ball_control: 3.5,
    passing_accuracy: 75.0,
    dribbling_success: 65.0,
    shooting_accuracy: 55.0,
    defensive_duels_won: 55.0,
    tactical: 3.5,
    psychological: 3.5,
};

const U19: AgeStandards = AgeStandards {
    sprint_30m: 4.3,
    endurance_distance: 2300.0,
    aerobic_capacity: 57.0,
    jump_height: 50.0,
    body_fat: 12.0,
    ball_control: 4.0,
    passing_accuracy: 80.0,
    dribbling_success: 70.0,
    shooting_accuracy: 60.0,
    defensive_duels_won: 58.0,
    tactical: 3.5,
    psychological: 3.5,
};

const SENIOR: AgeStandards = AgeStandards {
    sprint_30m: 4.2,
    endurance_distance: 2500.0,
    aerobic_capacity: 58.0,
    jump_height: 52.0,
    body_fat: 11.0,
    ball_control: 4.0,
    passing_accuracy: 82.0,
    dribbling_success: 72.0,
    shooting_accuracy: 62.0,
    defensive_duels_won: 60.0,
    tactical: 4.0,
    psychological: 4.0,
};

const fn standards_for(category: AgeCategory) -> &'static AgeStandards {
    match category {
        AgeCategory::U13 => &U13,
        AgeCategory::U15 => &U15,
        AgeCategory::U17 => &U17,
        AgeCategory::U19 => &U19,
        AgeCategory::Senior => &SENIOR,
    }
}

/// Standard value for a metric in an age category
#[must_use]
pub const fn standard(category: AgeCategory, metric: Metric) -> f64 {
    let s = standards_for(category);
    match metric {
        Metric::Sprint30m => s.sprint_30m,
        Metric::EnduranceDistance => s.endurance_distance,
        Metric::AerobicCapacity => s.aerobic_capacity,
        Metric::JumpHeight => s.jump_height,
        Metric::BodyFat => s.body_fat,
        Metric::BallControl => s.ball_control,
        Metric::PassingAccuracy => s.passing_accuracy,
        Metric::DribblingSuccess => s.dribbling_success,
        Metric::ShootingAccuracy => s.shooting_accuracy,
        Metric::DefensiveDuelsWon => s.defensive_duels_won,
        Metric::GameIntelligence | Metric::Positioning | Metric::DecisionMaking => s.tactical,
        Metric::Coachability | Metric::MentalToughness => s.psychological,
    }
}

/// Benchmark for a metric in an age category
///
/// Every metric has a benchmark in every category; the `Option` leaves room
/// for metrics that are recorded but not benchmarked.
#[must_use]
pub const fn benchmark(category: AgeCategory, metric: Metric) -> Option<Benchmark> {
    Some(Benchmark {
        metric,
        age_category: category,
        standard: standard(category, metric),
        direction: metric.direction(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_metric_has_a_positive_standard() {
        for category in AgeCategory::ALL {
            for metric in Metric::ALL {
                let bench = benchmark(category, metric).unwrap();
                assert!(bench.standard > 0.0, "{category} {metric}");
            }
        }
    }

    #[test]
    fn test_standards_get_harder_with_age() {
        for pair in AgeCategory::ALL.windows(2) {
            let (younger, older) = (pair[0], pair[1]);
            assert!(standard(older, Metric::Sprint30m) <= standard(younger, Metric::Sprint30m));
            assert!(
                standard(older, Metric::EnduranceDistance)
                    >= standard(younger, Metric::EnduranceDistance)
            );
        }
    }

    #[test]
    fn test_favorable_delta_respects_direction() {
        let sprint = benchmark(AgeCategory::U17, Metric::Sprint30m).unwrap();
        assert!((sprint.favorable_delta(4.1) - 0.4).abs() < 1e-9);

        let passing = benchmark(AgeCategory::U17, Metric::PassingAccuracy).unwrap();
        assert!((passing.favorable_delta(50.0) + 25.0).abs() < 1e-9);
    }
}
