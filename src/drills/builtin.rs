// ABOUTME: Built-in drill catalog covering all nine drill categories
// ABOUTME: Static fallback for the drill library and source data for the seed binary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pitchside Contributors

use pitchside_core::models::{Drill, DrillCategory, Intensity};

/// Compile-time drill definition
pub struct DrillData {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Category
    pub category: DrillCategory,
    /// Short description
    pub description: &'static str,
    /// Planned minutes
    pub duration_minutes: Option<u32>,
    /// Sets
    pub sets: Option<u32>,
    /// Reps per set
    pub reps: Option<u32>,
    /// Intended intensity
    pub intensity: Option<Intensity>,
    /// Equipment
    pub equipment: &'static [&'static str],
    /// Coaching cues
    pub coaching_points: &'static [&'static str],
    /// Health flags that exclude the drill
    pub contraindications: &'static [&'static str],
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

impl DrillData {
    /// Owned `Drill` for this definition
    #[must_use]
    pub fn to_drill(&self) -> Drill {
        Drill {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            category: self.category,
            description: self.description.to_owned(),
            duration_minutes: self.duration_minutes,
            sets: self.sets,
            reps: self.reps,
            intensity: self.intensity,
            equipment: owned(self.equipment),
            coaching_points: owned(self.coaching_points),
            contraindications: owned(self.contraindications),
        }
    }
}

/// Every built-in drill
pub const BUILTIN_DRILLS: &[DrillData] = &[
    // Technical
    DrillData {
        id: "technical-first-touch-gates",
        name: "First Touch Through Gates",
        category: DrillCategory::Technical,
        description: "Receive a driven pass and take the first touch through a cone gate away from pressure.",
        duration_minutes: Some(20),
        sets: Some(4),
        reps: Some(10),
        intensity: Some(Intensity::Medium),
        equipment: &["balls", "cones"],
        coaching_points: &[
            "Open body shape before the ball arrives",
            "Touch into space, not under the body",
        ],
        contraindications: &[],
    },
    DrillData {
        id: "technical-passing-triangles",
        name: "Passing Triangles",
        category: DrillCategory::Technical,
        description: "Three-player triangle with one- and two-touch passing and movement after the pass.",
        duration_minutes: Some(15),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: &["balls", "cones"],
        coaching_points: &["Pass to the far foot", "Move after every pass"],
        contraindications: &[],
    },
    DrillData {
        id: "technical-finishing-circuit",
        name: "Finishing Circuit",
        category: DrillCategory::Technical,
        description: "Dribble, set, and finish from three angles around the box.",
        duration_minutes: Some(20),
        sets: Some(3),
        reps: Some(6),
        intensity: Some(Intensity::High),
        equipment: &["balls", "goal", "mannequins"],
        coaching_points: &["Head over the ball", "Pick a corner before striking"],
        contraindications: &["groin_strain"],
    },
    // Tactical
    DrillData {
        id: "tactical-pressing-triggers",
        name: "Pressing Triggers 6v4",
        category: DrillCategory::Tactical,
        description: "Defending unit presses on agreed triggers such as a back pass or a poor touch.",
        duration_minutes: Some(20),
        sets: Some(4),
        reps: None,
        intensity: Some(Intensity::High),
        equipment: &["balls", "bibs", "cones"],
        coaching_points: &["Curve the run to cut the passing lane", "Press as a unit"],
        contraindications: &[],
    },
    DrillData {
        id: "tactical-shadow-shape",
        name: "Shadow Play Shape",
        category: DrillCategory::Tactical,
        description: "Unopposed team shape walkthrough shifting with the ball position.",
        duration_minutes: Some(15),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["balls", "cones"],
        coaching_points: &["Keep distances between lines", "Communicate the shift"],
        contraindications: &[],
    },
    DrillData {
        id: "tactical-transition-game",
        name: "Transition Game 5v5+2",
        category: DrillCategory::Tactical,
        description: "Small-sided game rewarding goals scored within six seconds of winning the ball.",
        duration_minutes: Some(20),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::High),
        equipment: &["balls", "bibs", "mini_goals"],
        coaching_points: &["First pass forward when possible", "React on the turnover"],
        contraindications: &["concussion_protocol"],
    },
    // Possession
    DrillData {
        id: "possession-rondo-4v2",
        name: "Rondo 4v2",
        category: DrillCategory::Possession,
        description: "Four players keep the ball from two defenders in a small grid.",
        duration_minutes: Some(15),
        sets: Some(4),
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: &["balls", "cones", "bibs"],
        coaching_points: &["Create passing angles", "Play through the middle when open"],
        contraindications: &[],
    },
    DrillData {
        id: "possession-positional-game",
        name: "Positional Game 7v7+3",
        category: DrillCategory::Possession,
        description: "Zoned possession game with three neutral players supporting the team in possession.",
        duration_minutes: Some(20),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: &["balls", "bibs", "cones"],
        coaching_points: &["Occupy the zones", "Receive on the half turn"],
        contraindications: &[],
    },
    DrillData {
        id: "possession-keep-ball-wide",
        name: "Wide Keep-Ball",
        category: DrillCategory::Possession,
        description: "Possession in a wide channel with switches of play for points.",
        duration_minutes: Some(15),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: &["balls", "bibs"],
        coaching_points: &["Switch when the press overloads one side"],
        contraindications: &[],
    },
    // Speed and agility
    DrillData {
        id: "speed-acceleration-starts",
        name: "Acceleration Starts",
        category: DrillCategory::SpeedAgility,
        description: "Ten-metre starts from varied positions with full recovery.",
        duration_minutes: Some(15),
        sets: Some(3),
        reps: Some(5),
        intensity: Some(Intensity::High),
        equipment: &["cones"],
        coaching_points: &["Drive the arms", "Low shin angle for the first steps"],
        contraindications: &["hamstring_strain"],
    },
    DrillData {
        id: "speed-ladder-footwork",
        name: "Ladder Footwork",
        category: DrillCategory::SpeedAgility,
        description: "Agility ladder patterns finishing with a cut and a short sprint.",
        duration_minutes: Some(15),
        sets: Some(4),
        reps: Some(4),
        intensity: Some(Intensity::Medium),
        equipment: &["agility_ladder", "cones"],
        coaching_points: &["Quick contacts", "Stay on the balls of the feet"],
        contraindications: &["ankle_sprain"],
    },
    DrillData {
        id: "speed-reactive-mirror",
        name: "Reactive Mirror Drill",
        category: DrillCategory::SpeedAgility,
        description: "Partner mirror in a five-metre channel reacting to the leader's changes of direction.",
        duration_minutes: Some(10),
        sets: Some(4),
        reps: None,
        intensity: Some(Intensity::High),
        equipment: &["cones"],
        coaching_points: &["Low centre of gravity", "React off the hips, not the feet"],
        contraindications: &["ankle_sprain", "knee_injury"],
    },
    // Cardio
    DrillData {
        id: "cardio-box-to-box-intervals",
        name: "Box-to-Box Intervals",
        category: DrillCategory::Cardio,
        description: "Repeated box-to-box runs at high pace with jog recovery.",
        duration_minutes: Some(20),
        sets: Some(2),
        reps: Some(6),
        intensity: Some(Intensity::High),
        equipment: &["cones"],
        coaching_points: &["Hold the target split on every rep"],
        contraindications: &["hamstring_strain"],
    },
    DrillData {
        id: "cardio-small-sided-conditioning",
        name: "Small-Sided Conditioning 3v3",
        category: DrillCategory::Cardio,
        description: "High-tempo 3v3 bouts with short rest to build repeated-effort capacity.",
        duration_minutes: Some(20),
        sets: Some(5),
        reps: None,
        intensity: Some(Intensity::High),
        equipment: &["balls", "bibs", "mini_goals"],
        coaching_points: &["Keep the ball in play", "Work rate on and off the ball"],
        contraindications: &[],
    },
    DrillData {
        id: "cardio-tempo-runs",
        name: "Tempo Runs",
        category: DrillCategory::Cardio,
        description: "Continuous runs around the pitch perimeter at a steady aerobic pace.",
        duration_minutes: Some(25),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: &[],
        coaching_points: &["Conversational pace", "Relaxed shoulders"],
        contraindications: &[],
    },
    // Gym
    DrillData {
        id: "gym-goblet-squat",
        name: "Goblet Squat",
        category: DrillCategory::Gym,
        description: "Front-loaded squat for lower-body strength with an upright torso.",
        duration_minutes: Some(15),
        sets: Some(3),
        reps: Some(8),
        intensity: Some(Intensity::Medium),
        equipment: &["kettlebell"],
        coaching_points: &["Knees track over toes", "Chest tall"],
        contraindications: &["knee_injury", "back_injury"],
    },
    DrillData {
        id: "gym-nordic-curl",
        name: "Nordic Hamstring Curl",
        category: DrillCategory::Gym,
        description: "Eccentric hamstring strength exercise with a partner holding the ankles.",
        duration_minutes: Some(10),
        sets: Some(3),
        reps: Some(5),
        intensity: Some(Intensity::High),
        equipment: &["mat"],
        coaching_points: &["Lower as slowly as possible", "Hips stay extended"],
        contraindications: &["hamstring_strain"],
    },
    DrillData {
        id: "gym-single-leg-rdl",
        name: "Single-Leg Romanian Deadlift",
        category: DrillCategory::Gym,
        description: "Unilateral hinge for posterior chain strength and balance.",
        duration_minutes: Some(15),
        sets: Some(3),
        reps: Some(8),
        intensity: Some(Intensity::Medium),
        equipment: &["dumbbells"],
        coaching_points: &["Square hips", "Soft standing knee"],
        contraindications: &["back_injury"],
    },
    // Mobility
    DrillData {
        id: "mobility-hip-openers",
        name: "Hip Openers Flow",
        category: DrillCategory::Mobility,
        description: "World's greatest stretch, 90/90 switches, and hip circles in a continuous flow.",
        duration_minutes: Some(15),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["mat"],
        coaching_points: &["Breathe through each position"],
        contraindications: &[],
    },
    DrillData {
        id: "mobility-thoracic-rotation",
        name: "Thoracic Rotations",
        category: DrillCategory::Mobility,
        description: "Open-book and quadruped rotations for upper-back mobility.",
        duration_minutes: Some(10),
        sets: Some(2),
        reps: Some(10),
        intensity: Some(Intensity::Low),
        equipment: &["mat"],
        coaching_points: &["Follow the hand with the eyes"],
        contraindications: &[],
    },
    DrillData {
        id: "mobility-ankle-rocks",
        name: "Ankle Rocks",
        category: DrillCategory::Mobility,
        description: "Knee-to-wall ankle dorsiflexion mobilisation.",
        duration_minutes: Some(10),
        sets: Some(2),
        reps: Some(12),
        intensity: Some(Intensity::Low),
        equipment: &[],
        coaching_points: &["Heel stays down"],
        contraindications: &["ankle_sprain"],
    },
    // Recovery
    DrillData {
        id: "recovery-foam-roll",
        name: "Foam Roll Routine",
        category: DrillCategory::Recovery,
        description: "Foam rolling of quads, hamstrings, calves, and glutes.",
        duration_minutes: Some(15),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["foam_roller"],
        coaching_points: &["Slow passes", "Pause on tender spots"],
        contraindications: &[],
    },
    DrillData {
        id: "recovery-easy-bike",
        name: "Easy Bike Flush",
        category: DrillCategory::Recovery,
        description: "Low-resistance cycling to promote blood flow.",
        duration_minutes: Some(20),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["stationary_bike"],
        coaching_points: &["Keep cadence smooth and easy"],
        contraindications: &[],
    },
    DrillData {
        id: "recovery-static-stretch",
        name: "Static Stretch Cool-Down",
        category: DrillCategory::Recovery,
        description: "Held stretches for the major lower-body muscle groups.",
        duration_minutes: Some(10),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["mat"],
        coaching_points: &["Hold 30 seconds", "No bouncing"],
        contraindications: &[],
    },
    // Prehab
    DrillData {
        id: "prehab-fifa-11-plus",
        name: "FIFA 11+ Warm-Up",
        category: DrillCategory::Prehab,
        description: "Structured injury-prevention warm-up of running, strength, and balance exercises.",
        duration_minutes: Some(20),
        sets: None,
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["cones"],
        coaching_points: &["Knees over toes on landings", "Controlled technique over speed"],
        contraindications: &[],
    },
    DrillData {
        id: "prehab-copenhagen-plank",
        name: "Copenhagen Plank",
        category: DrillCategory::Prehab,
        description: "Side plank with the top leg supported to strengthen the adductors.",
        duration_minutes: Some(10),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::Medium),
        equipment: &["bench"],
        coaching_points: &["Straight line from head to feet"],
        contraindications: &["groin_strain"],
    },
    DrillData {
        id: "prehab-balance-board",
        name: "Single-Leg Balance Work",
        category: DrillCategory::Prehab,
        description: "Single-leg balance progressions with perturbations.",
        duration_minutes: Some(10),
        sets: Some(3),
        reps: None,
        intensity: Some(Intensity::Low),
        equipment: &["balance_board"],
        coaching_points: &["Soft knee", "Eyes forward"],
        contraindications: &[],
    },
];

/// Built-in drills as owned values
#[must_use]
pub fn builtin_drills() -> Vec<Drill> {
    BUILTIN_DRILLS.iter().map(DrillData::to_drill).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_category_has_drills() {
        for category in DrillCategory::ALL {
            assert!(
                BUILTIN_DRILLS.iter().any(|d| d.category == category),
                "no built-in drills for {category}"
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<&str> = BUILTIN_DRILLS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), BUILTIN_DRILLS.len());
    }
}
