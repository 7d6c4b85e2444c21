//! Built-in program catalog.

use std::collections::BTreeMap;

use super::types::{ProgramDay, ProgramExercise, SetTarget, WeightLoad, WorkoutProgram};
use crate::goals::{FitnessGoal, UserLevel};
use crate::workouts::library::{ExerciseLibrary, MuscleGroup};

/// Read-only collection of training programs.
#[derive(Debug, Clone)]
pub struct ProgramCatalog {
    programs: Vec<WorkoutProgram>,
}

impl Default for ProgramCatalog {
    fn default() -> Self {
        Self::builtin(&ExerciseLibrary::builtin())
    }
}

impl ProgramCatalog {
    /// Catalog of built-in programs, exercise names resolved from `library`.
    pub fn builtin(library: &ExerciseLibrary) -> Self {
        Self {
            programs: builtin_programs(library),
        }
    }

    pub fn all(&self) -> &[WorkoutProgram] {
        &self.programs
    }

    pub fn get(&self, id: &str) -> Option<&WorkoutProgram> {
        self.programs.iter().find(|p| p.id == id)
    }

    pub fn by_goal(&self, goal: FitnessGoal) -> Vec<&WorkoutProgram> {
        self.programs.iter().filter(|p| p.goal == goal).collect()
    }

    pub fn by_level(&self, level: UserLevel) -> Vec<&WorkoutProgram> {
        self.programs.iter().filter(|p| p.level == level).collect()
    }

    /// Programs matching both the goal and the level exactly.
    pub fn recommended(&self, goal: FitnessGoal, level: UserLevel) -> Vec<&WorkoutProgram> {
        self.programs
            .iter()
            .filter(|p| p.goal == goal && p.level == level)
            .collect()
    }

    /// Programs grouped by goal; every goal is present, possibly empty.
    pub fn by_category(&self) -> BTreeMap<&'static str, Vec<&WorkoutProgram>> {
        let mut categories: BTreeMap<&'static str, Vec<&WorkoutProgram>> = FitnessGoal::all()
            .iter()
            .map(|g| (g.as_str(), Vec::new()))
            .collect();

        for program in &self.programs {
            categories.entry(program.goal.as_str()).or_default().push(program);
        }

        categories
    }
}

/// Helper that resolves exercise names and primary muscles from the library.
struct Prescriber<'a> {
    library: &'a ExerciseLibrary,
}

impl<'a> Prescriber<'a> {
    fn slot(
        &self,
        id: &str,
        sets: u32,
        target: SetTarget,
        load: Option<WeightLoad>,
        rest: u32,
    ) -> ProgramExercise {
        let exercise = self.library.get(id);
        ProgramExercise {
            exercise_id: id.to_string(),
            name: exercise.map(|e| e.name.clone()).unwrap_or_else(|| id.to_string()),
            muscle_group: exercise
                .and_then(|e| e.primary_muscle())
                .unwrap_or(MuscleGroup::Chest),
            sets,
            target,
            load,
            rest_secs: rest,
            notes: None,
        }
    }

    fn reps(&self, id: &str, sets: u32, reps: u32, rest: u32) -> ProgramExercise {
        self.slot(id, sets, SetTarget::Reps(reps), None, rest)
    }

    fn loaded(
        &self,
        id: &str,
        sets: u32,
        reps: u32,
        load: WeightLoad,
        rest: u32,
    ) -> ProgramExercise {
        self.slot(id, sets, SetTarget::Reps(reps), Some(load), rest)
    }

    fn timed(&self, id: &str, sets: u32, secs: u32, rest: u32) -> ProgramExercise {
        self.slot(id, sets, SetTarget::Seconds(secs), None, rest)
    }
}

fn day(
    day_number: u8,
    name: &str,
    muscle_groups: &[MuscleGroup],
    exercises: Vec<ProgramExercise>,
) -> ProgramDay {
    ProgramDay {
        day_number,
        name: name.to_string(),
        muscle_groups: muscle_groups.to_vec(),
        exercises,
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn with_note(mut exercise: ProgramExercise, note: &str) -> ProgramExercise {
    exercise.notes = Some(note.to_string());
    exercise
}

fn builtin_programs(library: &ExerciseLibrary) -> Vec<WorkoutProgram> {
    use MuscleGroup::*;
    use WeightLoad::*;

    let p = Prescriber { library };

    vec![
        WorkoutProgram {
            id: "fullbody_beginner".to_string(),
            name: "Full Body 3×/week".to_string(),
            description: "Whole-body training for newcomers. Learn the basic movements with \
                 bodyweight and light loads."
                .to_string(),
            goal: FitnessGoal::Maintenance,
            duration_weeks: 8,
            level: UserLevel::Beginner,
            workouts_per_week: 3,
            days: vec![
                day(1, "Full body A", &[Chest, Legs, Abs], vec![
                    p.reps("pushups", 3, 8, 90),
                    p.loaded("squat", 3, 12, Bodyweight, 90),
                    p.timed("plank", 3, 30, 60),
                    p.reps("lunges", 2, 10, 60),
                ]),
                day(3, "Full body B", &[Back, Legs, Shoulders, Abs], vec![
                    with_note(p.reps("pullups", 3, 5, 120), "Use a resistance band if needed"),
                    p.loaded("leg_press", 3, 15, Light, 90),
                    p.loaded("shoulder_press", 3, 10, Light, 90),
                    p.reps("crunches", 3, 15, 45),
                ]),
                day(5, "Full body C", &[Chest, Back, Shoulders, Abs], vec![
                    p.loaded("dumbbell_press", 3, 10, Light, 90),
                    p.loaded("deadlift", 3, 8, Light, 120),
                    p.loaded("lateral_raises", 3, 12, Light, 60),
                    p.timed("mountain_climbers", 3, 20, 60),
                ]),
            ],
            benefits: lines(&[
                "Learn correct technique on the basic lifts",
                "Build baseline strength and endurance",
                "Prepare your body for harder programs",
                "Train every major muscle group",
            ]),
            tips: lines(&[
                "Focus on technique, not on the weight",
                "Rest at least one day between sessions",
                "Always warm up for 5-10 minutes",
                "Finish each session by stretching the main muscles",
            ]),
        },
        WorkoutProgram {
            id: "fitness_starter".to_string(),
            name: "Beginner Fitness Plan".to_string(),
            description: "A gentle introduction to fitness with an emphasis on cardio and \
                 functional movement."
                .to_string(),
            goal: FitnessGoal::WeightLoss,
            duration_weeks: 6,
            level: UserLevel::Beginner,
            workouts_per_week: 3,
            days: vec![
                day(1, "Cardio + basic strength", &[Legs, Chest, Abs], vec![
                    p.timed("jumping_jacks", 3, 30, 30),
                    p.reps("pushups", 2, 8, 60),
                    p.reps("lunges", 2, 10, 60),
                    p.timed("plank", 2, 20, 45),
                ]),
                day(3, "Functional training", &[Legs, Abs, Chest], vec![
                    p.reps("burpees", 3, 5, 90),
                    p.timed("mountain_climbers", 3, 20, 60),
                    p.reps("crunches", 3, 12, 45),
                    p.reps("step_ups", 2, 10, 60),
                ]),
                day(5, "Cardio + stretching", &[Legs, Back], vec![
                    p.timed("running", 1, 15 * 60, 0),
                    p.loaded("squat", 2, 15, Bodyweight, 60),
                    p.timed("back_stretch", 3, 30, 30),
                    p.timed("leg_stretch", 3, 30, 30),
                ]),
            ],
            benefits: lines(&[
                "Better overall fitness",
                "Improved cardiovascular endurance",
                "Learn basic functional movements",
                "Preparation for more intense training",
            ]),
            tips: lines(&[
                "Listen to your body and do not overdo it",
                "Never skip the warm-up",
                "Drink enough water during the session",
                "Rest a day between sessions",
            ]),
        },
        WorkoutProgram {
            id: "push_pull_legs".to_string(),
            name: "Push/Pull/Legs".to_string(),
            description: "Sessions split by movement pattern: pushing, pulling and legs."
                .to_string(),
            goal: FitnessGoal::MuscleGain,
            duration_weeks: 12,
            level: UserLevel::Intermediate,
            workouts_per_week: 6,
            days: vec![
                day(1, "Push", &[Chest, Shoulders, Arms], vec![
                    p.loaded("bench_press", 4, 8, Moderate, 120),
                    p.loaded("shoulder_press", 4, 10, Moderate, 90),
                    p.reps("tricep_dips", 3, 12, 90),
                    p.loaded("lateral_raises", 3, 15, Light, 60),
                ]),
                day(2, "Pull", &[Back, Arms], vec![
                    p.loaded("deadlift", 4, 6, Moderate, 180),
                    p.reps("pullups", 4, 8, 120),
                    p.loaded("barbell_rows", 4, 10, Moderate, 90),
                    p.loaded("bicep_curls", 3, 12, Moderate, 60),
                ]),
                day(3, "Legs", &[Legs, Abs], vec![
                    p.loaded("squat", 4, 8, Moderate, 120),
                    p.loaded("leg_press", 4, 12, Moderate, 90),
                    p.reps("lunges", 3, 12, 90),
                    p.reps("crunches", 3, 20, 45),
                ]),
            ],
            benefits: lines(&[
                "Load is well distributed between muscle groups",
                "Each group gets enough time to recover",
                "Well suited to building muscle",
                "Can be trained up to six times a week",
            ]),
            tips: lines(&[
                "Repeat the cycle twice a week for six sessions",
                "Take a day off after a full cycle",
                "Focus on movement quality",
                "Increase weights gradually every week",
            ]),
        },
        WorkoutProgram {
            id: "upper_lower_split".to_string(),
            name: "Upper/Lower Split".to_string(),
            description: "Upper and lower body on separate days. An ideal intermediate program."
                .to_string(),
            goal: FitnessGoal::MuscleGain,
            duration_weeks: 12,
            level: UserLevel::Intermediate,
            workouts_per_week: 4,
            days: vec![
                day(1, "Upper body A", &[Chest, Back, Shoulders, Arms], vec![
                    p.loaded("bench_press", 4, 8, Moderate, 120),
                    p.loaded("barbell_rows", 4, 8, Moderate, 120),
                    p.loaded("shoulder_press", 3, 10, Moderate, 90),
                    p.reps("pullups", 3, 8, 90),
                    p.reps("tricep_dips", 3, 12, 60),
                    p.loaded("bicep_curls", 3, 12, Moderate, 60),
                ]),
                day(2, "Lower body A", &[Legs, Abs], vec![
                    p.loaded("squat", 4, 8, Moderate, 150),
                    p.loaded("deadlift", 3, 6, Moderate, 180),
                    p.loaded("leg_press", 3, 12, Moderate, 90),
                    p.reps("lunges", 3, 12, 60),
                    p.timed("plank", 3, 45, 60),
                ]),
                day(4, "Upper body B", &[Chest, Back, Shoulders, Arms], vec![
                    p.loaded("dumbbell_press", 4, 10, Moderate, 90),
                    p.reps("pullups", 4, 10, 90),
                    p.loaded("lateral_raises", 4, 15, Light, 60),
                    p.loaded("barbell_rows", 3, 10, Moderate, 90),
                    p.reps("tricep_dips", 3, 15, 60),
                    p.loaded("bicep_curls", 3, 15, Light, 60),
                ]),
                day(5, "Lower body B", &[Legs, Abs], vec![
                    p.loaded("leg_press", 4, 12, Moderate, 120),
                    p.reps("lunges", 4, 15, 60),
                    p.loaded("squat", 3, 12, Light, 90),
                    p.reps("crunches", 4, 20, 45),
                    p.timed("mountain_climbers", 3, 30, 60),
                ]),
            ],
            benefits: lines(&[
                "High training volume for every muscle group",
                "Plenty of recovery time",
                "Builds both muscle and strength",
                "Exercise variety keeps it interesting",
            ]),
            tips: lines(&[
                "Rest a day between sessions",
                "Apply periodization to your working weights",
                "Watch your form on heavy sets",
                "Nutrition and sleep are critical for recovery",
            ]),
        },
        WorkoutProgram {
            id: "stronglifts_5x5".to_string(),
            name: "5×5 StrongLifts".to_string(),
            description: "Classic maximal strength program built on compound lifts with linear \
                 progression."
                .to_string(),
            goal: FitnessGoal::Strength,
            duration_weeks: 16,
            level: UserLevel::Advanced,
            workouts_per_week: 3,
            days: vec![
                day(1, "Workout A", &[Legs, Chest, Back], vec![
                    p.loaded("squat", 5, 5, Heavy, 180),
                    p.loaded("bench_press", 5, 5, Heavy, 180),
                    p.loaded("barbell_rows", 5, 5, Heavy, 180),
                ]),
                day(3, "Workout B", &[Legs, Shoulders, Back], vec![
                    p.loaded("squat", 5, 5, Heavy, 180),
                    p.loaded("shoulder_press", 5, 5, Heavy, 180),
                    p.loaded("deadlift", 1, 5, Heavy, 300),
                ]),
                day(5, "Workout A", &[Legs, Chest, Back], vec![
                    p.loaded("squat", 5, 5, Heavy, 180),
                    p.loaded("bench_press", 5, 5, Heavy, 180),
                    p.loaded("barbell_rows", 5, 5, Heavy, 180),
                ]),
            ],
            benefits: lines(&[
                "Maximum growth in strength",
                "Simple and easy to follow",
                "Focus on the most effective compound lifts",
                "Decades of proven results",
            ]),
            tips: lines(&[
                "Add 2.5 kg per session for upper body lifts and 5 kg for lower body",
                "Keep your technique perfect",
                "Rest 3-5 minutes between sets",
                "If you fail 5×5, drop the weight by 10% and build back up",
            ]),
        },
        WorkoutProgram {
            id: "cardio_weight_loss".to_string(),
            name: "Cardio Weight-Loss Plan".to_string(),
            description: "Intensive cardio program for maximum fat burning.".to_string(),
            goal: FitnessGoal::WeightLoss,
            duration_weeks: 8,
            level: UserLevel::Intermediate,
            workouts_per_week: 5,
            days: vec![
                day(1, "Interval cardio", &[Legs, Chest], vec![
                    with_note(
                        p.timed("running", 1, 30 * 60, 0),
                        "Alternate 2 min running with 1 min walking",
                    ),
                    p.timed("jumping_jacks", 4, 30, 30),
                    p.reps("burpees", 3, 8, 60),
                ]),
                day(2, "Strength + cardio", &[Legs, Chest, Abs], vec![
                    p.loaded("squat", 3, 15, Light, 45),
                    p.reps("pushups", 3, 12, 45),
                    p.timed("mountain_climbers", 3, 30, 45),
                    p.timed("plank", 3, 45, 60),
                ]),
                day(3, "Long cardio", &[Legs, Abs], vec![
                    p.timed("cycling", 1, 40 * 60, 0),
                    p.reps("crunches", 3, 20, 30),
                    p.timed("leg_stretch", 3, 30, 30),
                ]),
                day(5, "HIIT", &[Legs, Chest, Abs], vec![
                    p.reps("burpees", 5, 6, 30),
                    p.timed("jumping_jacks", 5, 20, 40),
                    p.timed("mountain_climbers", 5, 20, 40),
                    p.loaded("squat", 4, 20, Bodyweight, 30),
                ]),
                day(6, "Active recovery", &[Legs, Back], vec![
                    p.timed("elliptical", 1, 25 * 60, 0),
                    p.timed("back_stretch", 3, 30, 30),
                    p.timed("leg_stretch", 3, 30, 30),
                ]),
            ],
            benefits: lines(&[
                "Maximum fat burning",
                "Better cardiovascular health",
                "Varied cardio exercises",
                "Preserves muscle mass",
            ]),
            tips: lines(&[
                "Nutrition is 70% of weight-loss success",
                "Watch your heart rate during cardio",
                "Drink enough water",
                "Do not skip rest days",
            ]),
        },
        WorkoutProgram {
            id: "hiit_strength_combo".to_string(),
            name: "HIIT + Strength".to_string(),
            description: "High-intensity intervals combined with strength work.".to_string(),
            goal: FitnessGoal::WeightLoss,
            duration_weeks: 10,
            level: UserLevel::Intermediate,
            workouts_per_week: 4,
            days: vec![
                day(1, "HIIT + upper body", &[Chest, Back, Abs], vec![
                    p.reps("burpees", 4, 8, 45),
                    p.loaded("bench_press", 3, 12, Moderate, 60),
                    p.timed("mountain_climbers", 4, 30, 30),
                    p.loaded("barbell_rows", 3, 12, Moderate, 60),
                ]),
                day(2, "HIIT + lower body", &[Legs], vec![
                    p.timed("jumping_jacks", 5, 30, 30),
                    p.loaded("squat", 4, 15, Moderate, 60),
                    p.reps("burpees", 3, 6, 60),
                    p.reps("lunges", 3, 12, 60),
                ]),
                day(4, "Strength circuit", &[Chest, Back, Legs, Abs], vec![
                    p.reps("pushups", 4, 12, 30),
                    p.loaded("squat", 4, 15, Bodyweight, 30),
                    p.reps("pullups", 4, 6, 30),
                    p.timed("plank", 4, 30, 30),
                ]),
                day(6, "Metabolic", &[Legs, Back, Abs], vec![
                    p.reps("kettlebell_swings", 5, 15, 45),
                    p.timed("mountain_climbers", 4, 30, 30),
                    p.reps("burpees", 4, 8, 60),
                    p.timed("jumping_jacks", 4, 45, 15),
                ]),
            ],
            benefits: lines(&[
                "Effective fat burning",
                "Keeps and builds muscle",
                "Elevated metabolism for 24 hours after training",
                "Time efficient",
            ]),
            tips: lines(&[
                "Keep the intensity high in HIIT blocks",
                "Maintain form even when tired",
                "Rest enough between sessions",
                "Drink plenty of water",
            ]),
        },
        WorkoutProgram {
            id: "crossfit_basic".to_string(),
            name: "CrossFit Basics".to_string(),
            description: "An introduction to CrossFit focused on functional movement and general \
                 conditioning."
                .to_string(),
            goal: FitnessGoal::Endurance,
            duration_weeks: 12,
            level: UserLevel::Intermediate,
            workouts_per_week: 4,
            days: vec![
                day(1, "Strength endurance", &[Legs, Chest, Back], vec![
                    p.loaded("squat", 5, 20, Bodyweight, 60),
                    p.reps("pushups", 5, 15, 60),
                    p.reps("pullups", 5, 8, 90),
                    p.reps("burpees", 3, 10, 120),
                ]),
                day(2, "Metabolic", &[Legs, Back, Abs], vec![
                    p.reps("kettlebell_swings", 4, 20, 45),
                    p.timed("mountain_climbers", 4, 30, 30),
                    p.timed("jumping_jacks", 4, 45, 15),
                    p.timed("rowing", 4, 60, 60),
                ]),
                day(4, "Functional", &[Legs, Back, Shoulders, Abs], vec![
                    p.loaded("deadlift", 4, 12, Moderate, 90),
                    p.reps("step_ups", 4, 16, 60),
                    p.loaded("shoulder_press", 4, 10, Moderate, 90),
                    p.timed("plank", 3, 60, 60),
                ]),
                day(6, "Mixed", &[Legs, Chest, Abs], vec![
                    p.reps("burpees", 3, 12, 60),
                    p.loaded("squat", 3, 25, Bodyweight, 45),
                    p.reps("pushups", 3, 20, 45),
                    p.timed("running", 1, 10 * 60, 0),
                ]),
            ],
            benefits: lines(&[
                "Develops general physical preparedness",
                "Functional strength for everyday life",
                "Wide variety of movements",
                "High training intensity",
            ]),
            tips: lines(&[
                "Scale the exercises to your level",
                "Technique matters more than speed",
                "Rest enough between sessions",
                "Keep an eye on recovery and nutrition",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ProgramCatalog::default();
        assert_eq!(catalog.all().len(), 8);
        assert!(catalog.get("stronglifts_5x5").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_every_program_exercise_exists_in_library() {
        let library = ExerciseLibrary::builtin();
        let catalog = ProgramCatalog::builtin(&library);

        for program in catalog.all() {
            assert!(!program.days.is_empty(), "{} has no days", program.id);
            for day in &program.days {
                for exercise in &day.exercises {
                    assert!(
                        library.get(&exercise.exercise_id).is_some(),
                        "{} references unknown exercise {}",
                        program.id,
                        exercise.exercise_id
                    );
                }
            }
        }
    }

    #[test]
    fn test_names_resolved_from_library() {
        let catalog = ProgramCatalog::default();
        let push = catalog.get("push_pull_legs").and_then(|p| p.day(1)).unwrap();
        assert_eq!(push.exercises[0].name, "Barbell bench press");
        assert_eq!(push.exercises[0].muscle_group, MuscleGroup::Chest);
    }

    #[test]
    fn test_filters() {
        let catalog = ProgramCatalog::default();
        assert_eq!(catalog.by_goal(FitnessGoal::WeightLoss).len(), 3);
        assert_eq!(catalog.by_level(UserLevel::Beginner).len(), 2);
        assert_eq!(catalog.by_level(UserLevel::Advanced).len(), 1);

        let recommended = catalog.recommended(FitnessGoal::MuscleGain, UserLevel::Intermediate);
        let ids: Vec<&str> = recommended.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["push_pull_legs", "upper_lower_split"]);

        assert!(catalog
            .recommended(FitnessGoal::Strength, UserLevel::Beginner)
            .is_empty());
    }

    #[test]
    fn test_by_category_lists_every_goal() {
        let catalog = ProgramCatalog::default();
        let categories = catalog.by_category();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories["strength"].len(), 1);
        assert_eq!(categories["endurance"].len(), 1);
        assert_eq!(categories["maintenance"].len(), 1);
    }

    #[test]
    fn test_rest_days_and_cycle() {
        let catalog = ProgramCatalog::default();
        let program = catalog.get("fullbody_beginner").unwrap();
        assert!(program.day(2).is_none());
        assert_eq!(program.next_day(Some(1)).unwrap().day_number, 3);
        assert_eq!(program.next_day(Some(5)).unwrap().day_number, 1);
        assert_eq!(program.next_day(None).unwrap().day_number, 1);
    }
}
