// ABOUTME: Player assessment snapshot with physical, technical, tactical, and psychological metrics
// ABOUTME: Defines metric catalog, age categories, and structural validation of raw measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::assessment_limits::{
    MAX_AGE, MIN_AGE, ORDINAL_MAX, ORDINAL_MIN, PERCENT_MAX,
};
use crate::errors::ValidationError;

/// Playing position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Goalkeeper
    Goalkeeper,
    /// Defender
    Defender,
    /// Midfielder
    #[default]
    Midfielder,
    /// Forward
    Forward,
}

impl Position {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "goalkeeper",
            Self::Defender => "defender",
            Self::Midfielder => "midfielder",
            Self::Forward => "forward",
        }
    }
}

/// Player gender as recorded by the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Not specified
    #[default]
    Unspecified,
}

/// Age bracket used to select benchmark standards
///
/// Boundary ages map to the younger bracket: 13 is U13, 15 is U15, 17 is U17,
/// 19 is U19, and 20 onward is Senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeCategory {
    /// 13 and under
    U13,
    /// 14-15
    U15,
    /// 16-17
    U17,
    /// 18-19
    U19,
    /// 20 and over
    Senior,
}

impl AgeCategory {
    /// All categories, youngest first
    pub const ALL: [Self; 5] = [Self::U13, Self::U15, Self::U17, Self::U19, Self::Senior];

    /// Derive the category from an age in whole years
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=13 => Self::U13,
            14..=15 => Self::U15,
            16..=17 => Self::U17,
            18..=19 => Self::U19,
            _ => Self::Senior,
        }
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::U13 => "U13",
            Self::U15 => "U15",
            Self::U17 => "U17",
            Self::U19 => "U19",
            Self::Senior => "Senior",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four scored assessment categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    /// Athletic measurements
    Physical,
    /// Ball skills
    Technical,
    /// Reading of the game
    Tactical,
    /// Mentality
    Psychological,
}

impl MetricCategory {
    /// All categories in declaration order
    pub const ALL: [Self; 4] = [
        Self::Physical,
        Self::Technical,
        Self::Tactical,
        Self::Psychological,
    ];

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Technical => "technical",
            Self::Tactical => "tactical",
            Self::Psychological => "psychological",
        }
    }

    /// Metrics belonging to this category
    #[must_use]
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        Metric::ALL.into_iter().filter(move |m| m.category() == *self)
    }
}

/// How a raw metric value is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Physical measurement in its own unit
    Measured,
    /// Coach rating on a 1-5 scale
    Ordinal,
    /// Success rate on a 0-100 scale
    Percentage,
}

/// Which way a metric improves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Larger values are better
    HigherIsBetter,
    /// Smaller values are better (times, body fat)
    LowerIsBetter,
}

/// Every metric captured by an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// 30m sprint time in seconds
    Sprint30m,
    /// Yo-Yo intermittent recovery distance in metres
    EnduranceDistance,
    /// Estimated VO2max in ml/kg/min
    AerobicCapacity,
    /// Countermovement jump height in cm
    JumpHeight,
    /// Body fat percentage
    BodyFat,
    /// Ball control rating (1-5)
    BallControl,
    /// Passing accuracy (%)
    PassingAccuracy,
    /// Dribbling success (%)
    DribblingSuccess,
    /// Shooting accuracy (%)
    ShootingAccuracy,
    /// Defensive duels won (%)
    DefensiveDuelsWon,
    /// Game intelligence rating (1-5)
    GameIntelligence,
    /// Positioning rating (1-5)
    Positioning,
    /// Decision-making rating (1-5)
    DecisionMaking,
    /// Coachability rating (1-5)
    Coachability,
    /// Mental toughness rating (1-5)
    MentalToughness,
}

impl Metric {
    /// All metrics in declaration order
    pub const ALL: [Self; 15] = [
        Self::Sprint30m,
        Self::EnduranceDistance,
        Self::AerobicCapacity,
        Self::JumpHeight,
        Self::BodyFat,
        Self::BallControl,
        Self::PassingAccuracy,
        Self::DribblingSuccess,
        Self::ShootingAccuracy,
        Self::DefensiveDuelsWon,
        Self::GameIntelligence,
        Self::Positioning,
        Self::DecisionMaking,
        Self::Coachability,
        Self::MentalToughness,
    ];

    /// Stable field name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sprint30m => "sprint_30m",
            Self::EnduranceDistance => "endurance_distance",
            Self::AerobicCapacity => "aerobic_capacity",
            Self::JumpHeight => "jump_height",
            Self::BodyFat => "body_fat",
            Self::BallControl => "ball_control",
            Self::PassingAccuracy => "passing_accuracy",
            Self::DribblingSuccess => "dribbling_success",
            Self::ShootingAccuracy => "shooting_accuracy",
            Self::DefensiveDuelsWon => "defensive_duels_won",
            Self::GameIntelligence => "game_intelligence",
            Self::Positioning => "positioning",
            Self::DecisionMaking => "decision_making",
            Self::Coachability => "coachability",
            Self::MentalToughness => "mental_toughness",
        }
    }

    /// Category the metric is scored under
    #[must_use]
    pub const fn category(&self) -> MetricCategory {
        match self {
            Self::Sprint30m
            | Self::EnduranceDistance
            | Self::AerobicCapacity
            | Self::JumpHeight
            | Self::BodyFat => MetricCategory::Physical,
            Self::BallControl
            | Self::PassingAccuracy
            | Self::DribblingSuccess
            | Self::ShootingAccuracy
            | Self::DefensiveDuelsWon => MetricCategory::Technical,
            Self::GameIntelligence | Self::Positioning | Self::DecisionMaking => {
                MetricCategory::Tactical
            }
            Self::Coachability | Self::MentalToughness => MetricCategory::Psychological,
        }
    }

    /// How the raw value is expressed
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        match self {
            Self::Sprint30m
            | Self::EnduranceDistance
            | Self::AerobicCapacity
            | Self::JumpHeight
            | Self::BodyFat => MetricKind::Measured,
            Self::PassingAccuracy
            | Self::DribblingSuccess
            | Self::ShootingAccuracy
            | Self::DefensiveDuelsWon => MetricKind::Percentage,
            Self::BallControl
            | Self::GameIntelligence
            | Self::Positioning
            | Self::DecisionMaking
            | Self::Coachability
            | Self::MentalToughness => MetricKind::Ordinal,
        }
    }

    /// Which way the metric improves
    #[must_use]
    pub const fn direction(&self) -> Direction {
        match self {
            Self::Sprint30m | Self::BodyFat => Direction::LowerIsBetter,
            _ => Direction::HigherIsBetter,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical test results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicalMetrics {
    /// 30m sprint time (s)
    pub sprint_30m: Option<f64>,
    /// Yo-Yo IR1 distance (m)
    pub endurance_distance: Option<f64>,
    /// VO2max estimate (ml/kg/min)
    pub aerobic_capacity: Option<f64>,
    /// Countermovement jump (cm)
    pub jump_height: Option<f64>,
    /// Body fat (%)
    pub body_fat: Option<f64>,
}

/// Technical ratings and match statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalMetrics {
    /// Ball control (1-5)
    pub ball_control: Option<f64>,
    /// Passing accuracy (%)
    pub passing_accuracy: Option<f64>,
    /// Dribbling success (%)
    pub dribbling_success: Option<f64>,
    /// Shooting accuracy (%)
    pub shooting_accuracy: Option<f64>,
    /// Defensive duels won (%)
    pub defensive_duels_won: Option<f64>,
}

/// Tactical coach ratings (1-5)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TacticalMetrics {
    /// Game intelligence
    pub game_intelligence: Option<f64>,
    /// Positioning
    pub positioning: Option<f64>,
    /// Decision-making
    pub decision_making: Option<f64>,
}

/// Psychological coach ratings (1-5)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PsychologicalMetrics {
    /// Coachability
    pub coachability: Option<f64>,
    /// Mental toughness
    pub mental_toughness: Option<f64>,
}

/// One player's raw measurement snapshot
///
/// Immutable once captured: a re-test is a new `Assessment` with a new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Player identity from the intake system
    pub player_id: String,
    /// Assessment identity from the intake system
    pub assessment_id: String,
    /// Age in whole years at capture time
    pub age: u32,
    /// Playing position
    pub position: Position,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
    /// When the measurements were taken
    pub captured_at: DateTime<Utc>,
    /// Physical results
    #[serde(default)]
    pub physical: PhysicalMetrics,
    /// Technical results
    #[serde(default)]
    pub technical: TechnicalMetrics,
    /// Tactical ratings
    #[serde(default)]
    pub tactical: TacticalMetrics,
    /// Psychological ratings
    #[serde(default)]
    pub psychological: PsychologicalMetrics,
}

impl Assessment {
    /// Create an assessment with no metrics recorded
    pub fn new(
        player_id: impl Into<String>,
        assessment_id: impl Into<String>,
        age: u32,
        position: Position,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            player_id: player_id.into(),
            assessment_id: assessment_id.into(),
            age,
            position,
            gender: Gender::default(),
            captured_at,
            physical: PhysicalMetrics::default(),
            technical: TechnicalMetrics::default(),
            tactical: TacticalMetrics::default(),
            psychological: PsychologicalMetrics::default(),
        }
    }

    /// Set gender
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    /// Record a metric value
    #[must_use]
    pub fn with_metric(mut self, metric: Metric, value: f64) -> Self {
        *self.slot_mut(metric) = Some(value);
        self
    }

    /// Age bracket derived from the recorded age
    #[must_use]
    pub const fn age_category(&self) -> AgeCategory {
        AgeCategory::from_age(self.age)
    }

    /// Raw value of a metric, if recorded
    #[must_use]
    pub const fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Sprint30m => self.physical.sprint_30m,
            Metric::EnduranceDistance => self.physical.endurance_distance,
            Metric::AerobicCapacity => self.physical.aerobic_capacity,
            Metric::JumpHeight => self.physical.jump_height,
            Metric::BodyFat => self.physical.body_fat,
            Metric::BallControl => self.technical.ball_control,
            Metric::PassingAccuracy => self.technical.passing_accuracy,
            Metric::DribblingSuccess => self.technical.dribbling_success,
            Metric::ShootingAccuracy => self.technical.shooting_accuracy,
            Metric::DefensiveDuelsWon => self.technical.defensive_duels_won,
            Metric::GameIntelligence => self.tactical.game_intelligence,
            Metric::Positioning => self.tactical.positioning,
            Metric::DecisionMaking => self.tactical.decision_making,
            Metric::Coachability => self.psychological.coachability,
            Metric::MentalToughness => self.psychological.mental_toughness,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Sprint30m => &mut self.physical.sprint_30m,
            Metric::EnduranceDistance => &mut self.physical.endurance_distance,
            Metric::AerobicCapacity => &mut self.physical.aerobic_capacity,
            Metric::JumpHeight => &mut self.physical.jump_height,
            Metric::BodyFat => &mut self.physical.body_fat,
            Metric::BallControl => &mut self.technical.ball_control,
            Metric::PassingAccuracy => &mut self.technical.passing_accuracy,
            Metric::DribblingSuccess => &mut self.technical.dribbling_success,
            Metric::ShootingAccuracy => &mut self.technical.shooting_accuracy,
            Metric::DefensiveDuelsWon => &mut self.technical.defensive_duels_won,
            Metric::GameIntelligence => &mut self.tactical.game_intelligence,
            Metric::Positioning => &mut self.tactical.positioning,
            Metric::DecisionMaking => &mut self.tactical.decision_making,
            Metric::Coachability => &mut self.psychological.coachability,
            Metric::MentalToughness => &mut self.psychological.mental_toughness,
        }
    }

    /// Metrics with no recorded value
    #[must_use]
    pub fn missing_metrics(&self) -> Vec<Metric> {
        Metric::ALL
            .into_iter()
            .filter(|m| self.value(*m).is_none())
            .collect()
    }

    /// Reject structurally invalid input before scoring
    ///
    /// Missing values are fine; present values must be finite and on-scale.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking identifiers, age,
    /// then metrics in declaration order
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.player_id.trim().is_empty() {
            return Err(ValidationError::EmptyField { field: "player_id" });
        }
        if self.assessment_id.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                field: "assessment_id",
            });
        }
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(ValidationError::AgeOutOfRange {
                age: self.age,
                min: MIN_AGE,
                max: MAX_AGE,
            });
        }

        for metric in Metric::ALL {
            let Some(value) = self.value(metric) else {
                continue;
            };
            let field = metric.as_str();
            if !value.is_finite() {
                return Err(ValidationError::NotFinite { field });
            }
            match metric.kind() {
                MetricKind::Ordinal => {
                    if !(ORDINAL_MIN..=ORDINAL_MAX).contains(&value) {
                        return Err(ValidationError::OrdinalOutOfRange { field, value });
                    }
                }
                MetricKind::Percentage => {
                    if !(0.0..=PERCENT_MAX).contains(&value) {
                        return Err(ValidationError::PercentageOutOfRange { field, value });
                    }
                }
                MetricKind::Measured => {
                    if value <= 0.0 {
                        return Err(ValidationError::NonPositiveMeasurement { field, value });
                    }
                    if metric == Metric::BodyFat && value > PERCENT_MAX {
                        return Err(ValidationError::PercentageOutOfRange { field, value });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assessment {
        Assessment::new("player-1", "assessment-1", 16, Position::Forward, Utc::now())
    }

    #[test]
    fn test_age_category_boundaries() {
        let table = [
            (5, AgeCategory::U13),
            (12, AgeCategory::U13),
            (13, AgeCategory::U13),
            (14, AgeCategory::U15),
            (15, AgeCategory::U15),
            (16, AgeCategory::U17),
            (17, AgeCategory::U17),
            (18, AgeCategory::U19),
            (19, AgeCategory::U19),
            (20, AgeCategory::Senior),
            (35, AgeCategory::Senior),
        ];
        for (age, expected) in table {
            assert_eq!(AgeCategory::from_age(age), expected, "age {age}");
        }
    }

    #[test]
    fn test_every_category_has_metrics() {
        assert_eq!(MetricCategory::Physical.metrics().count(), 5);
        assert_eq!(MetricCategory::Technical.metrics().count(), 5);
        assert_eq!(MetricCategory::Tactical.metrics().count(), 3);
        assert_eq!(MetricCategory::Psychological.metrics().count(), 2);
    }

    #[test]
    fn test_with_metric_round_trips_through_value() {
        let assessment = sample()
            .with_metric(Metric::Sprint30m, 4.3)
            .with_metric(Metric::Coachability, 4.0);
        assert_eq!(assessment.value(Metric::Sprint30m), Some(4.3));
        assert_eq!(assessment.value(Metric::Coachability), Some(4.0));
        assert_eq!(assessment.missing_metrics().len(), 13);
    }

    #[test]
    fn test_validate_accepts_incomplete_assessment() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let ordinal = sample().with_metric(Metric::BallControl, 6.0);
        assert!(matches!(
            ordinal.validate(),
            Err(ValidationError::OrdinalOutOfRange { field: "ball_control", .. })
        ));

        let percent = sample().with_metric(Metric::PassingAccuracy, 101.0);
        assert!(matches!(
            percent.validate(),
            Err(ValidationError::PercentageOutOfRange { .. })
        ));

        let nan = sample().with_metric(Metric::JumpHeight, f64::NAN);
        assert!(matches!(nan.validate(), Err(ValidationError::NotFinite { .. })));

        let negative = sample().with_metric(Metric::Sprint30m, -1.0);
        assert!(matches!(
            negative.validate(),
            Err(ValidationError::NonPositiveMeasurement { .. })
        ));

        let mut too_old = sample();
        too_old.age = 70;
        assert!(matches!(
            too_old.validate(),
            Err(ValidationError::AgeOutOfRange { age: 70, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_ids() {
        let mut assessment = sample();
        assessment.player_id = "  ".into();
        assert_eq!(
            assessment.validate(),
            Err(ValidationError::EmptyField { field: "player_id" })
        );
    }
}
