//! Goal-based training advice.

use super::types::FitnessGoal;
use crate::workouts::types::WorkoutType;

/// Suggested training mix for a goal.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecommendation {
    /// Workout types in order of priority
    pub types: Vec<WorkoutType>,
    /// Sessions per week
    pub frequency: u32,
    pub description: &'static str,
}

/// Training mix recommended for `goal`.
pub fn workout_recommendations(goal: FitnessGoal) -> WorkoutRecommendation {
    use WorkoutType::*;

    match goal {
        FitnessGoal::WeightLoss => WorkoutRecommendation {
            types: vec![Cardio, Functional, Strength],
            frequency: 4,
            description: "Cardio to burn calories plus functional work to keep muscles toned",
        },
        FitnessGoal::MuscleGain => WorkoutRecommendation {
            types: vec![Strength, Functional],
            frequency: 5,
            description: "Strength training with progressive overload to build muscle",
        },
        FitnessGoal::Strength => WorkoutRecommendation {
            types: vec![Strength, Functional],
            frequency: 4,
            description: "Heavy compound lifts with enough rest to grow maximal strength",
        },
        FitnessGoal::Endurance => WorkoutRecommendation {
            types: vec![Cardio, Functional],
            frequency: 4,
            description: "Cardio and functional circuits to build stamina",
        },
        FitnessGoal::Maintenance => WorkoutRecommendation {
            types: vec![Strength, Cardio, Stretching],
            frequency: 3,
            description: "Balanced sessions to keep your current shape",
        },
    }
}

const BASE_RECOVERY_TIPS: [&str; 3] = [
    "Sleep 7-9 hours so your muscles can recover",
    "Drink enough water throughout the day",
    "Never skip the warm-up and cool-down",
];

/// Recovery advice: general tips followed by goal-specific ones.
pub fn recovery_tips(goal: FitnessGoal) -> Vec<&'static str> {
    let specific: &[&str] = match goal {
        FitnessGoal::WeightLoss => &[
            "Control calories, but do not starve yourself",
            "Eat protein after training",
            "Avoid late-night meals",
        ],
        FitnessGoal::MuscleGain => &[
            "Raise protein intake to about 2 g per kg of body weight",
            "Eat every 3-4 hours",
            "Allow 48 hours between strength sessions for the same muscles",
        ],
        FitnessGoal::Strength => &[
            "Rest 3-5 minutes between heavy sets",
            "Plan a lighter deload week every 4-6 weeks",
        ],
        FitnessGoal::Endurance => &[
            "Refuel with carbohydrates after cardio",
            "Increase intensity gradually",
            "Do easy sessions between hard ones",
        ],
        FitnessGoal::Maintenance => &[
            "Keep your training regular",
            "Listen to your body and adjust the load",
        ],
    };

    BASE_RECOVERY_TIPS.iter().chain(specific).copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_per_goal() {
        let weight_loss = workout_recommendations(FitnessGoal::WeightLoss);
        assert_eq!(weight_loss.types[0], WorkoutType::Cardio);
        assert_eq!(weight_loss.frequency, 4);

        assert_eq!(workout_recommendations(FitnessGoal::MuscleGain).frequency, 5);
        assert_eq!(
            workout_recommendations(FitnessGoal::Maintenance).types,
            vec![WorkoutType::Strength, WorkoutType::Cardio, WorkoutType::Stretching]
        );
    }

    #[test]
    fn test_recovery_tips_start_with_base_tips() {
        for goal in FitnessGoal::all() {
            let tips = recovery_tips(*goal);
            assert_eq!(&tips[..3], &BASE_RECOVERY_TIPS[..]);
            assert!(tips.len() > 3);
        }
        assert_eq!(recovery_tips(FitnessGoal::Maintenance).len(), 5);
    }
}
