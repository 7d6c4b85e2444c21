//! Built-in exercise library.
//!
//! Static catalog of exercises with search and filter helpers. Custom
//! exercises can be appended at runtime.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::goals::UserLevel;

/// Broad exercise category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Functional,
    Flexibility,
}

impl ExerciseCategory {
    pub fn all() -> &'static [ExerciseCategory] {
        &[
            ExerciseCategory::Strength,
            ExerciseCategory::Cardio,
            ExerciseCategory::Functional,
            ExerciseCategory::Flexibility,
        ]
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "category-strength",
            ExerciseCategory::Cardio => "category-cardio",
            ExerciseCategory::Functional => "category-functional",
            ExerciseCategory::Flexibility => "category-flexibility",
        }
    }
}

/// Muscle group targeted by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Arms,
    Shoulders,
    Abs,
}

impl MuscleGroup {
    pub fn all() -> &'static [MuscleGroup] {
        &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Arms,
            MuscleGroup::Shoulders,
            MuscleGroup::Abs,
        ]
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "muscle-chest",
            MuscleGroup::Back => "muscle-back",
            MuscleGroup::Legs => "muscle-legs",
            MuscleGroup::Arms => "muscle-arms",
            MuscleGroup::Shoulders => "muscle-shoulders",
            MuscleGroup::Abs => "muscle-abs",
        }
    }
}

/// An exercise description from the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_groups: Vec<MuscleGroup>,
    pub description: String,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub equipment: Vec<String>,
    pub difficulty: UserLevel,
}

impl Exercise {
    /// First listed muscle group, used as the primary target.
    pub fn primary_muscle(&self) -> Option<MuscleGroup> {
        self.muscle_groups.first().copied()
    }

    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }
}

/// Fields for a user-defined exercise; the library assigns the id.
#[derive(Debug, Clone)]
pub struct CustomExercise {
    pub name: String,
    pub category: ExerciseCategory,
    pub muscle_groups: Vec<MuscleGroup>,
    pub description: String,
    pub difficulty: UserLevel,
}

/// Exercise catalog.
#[derive(Debug, Clone)]
pub struct ExerciseLibrary {
    exercises: Vec<Exercise>,
}

impl Default for ExerciseLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExerciseLibrary {
    /// Library seeded with the built-in exercises.
    pub fn builtin() -> Self {
        Self {
            exercises: builtin_exercises(),
        }
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Display name for an id, falling back to the id itself.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|e| e.name.as_str()).unwrap_or(id)
    }

    pub fn by_muscle_group(&self, group: MuscleGroup) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.muscle_groups.contains(&group))
            .collect()
    }

    pub fn by_category(&self, category: ExerciseCategory) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: UserLevel) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .collect()
    }

    /// Exercises suitable for `level`, optionally narrowed by category and muscle group.
    pub fn recommended(
        &self,
        level: UserLevel,
        category: Option<ExerciseCategory>,
        muscle_group: Option<MuscleGroup>,
    ) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| level.includes(e.difficulty))
            .filter(|e| category.map_or(true, |c| e.category == c))
            .filter(|e| muscle_group.map_or(true, |m| e.muscle_groups.contains(&m)))
            .collect()
    }

    /// Case-insensitive search over names and descriptions.
    pub fn search(&self, query: &str) -> Vec<&Exercise> {
        let query = query.to_lowercase();
        self.exercises
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&query)
                    || e.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Every muscle group mapped to the exercises that train it.
    ///
    /// An exercise appears under each of its groups.
    pub fn grouped_by_muscle(&self) -> BTreeMap<MuscleGroup, Vec<&Exercise>> {
        let mut groups: BTreeMap<MuscleGroup, Vec<&Exercise>> = MuscleGroup::all()
            .iter()
            .map(|g| (*g, Vec::new()))
            .collect();

        for exercise in &self.exercises {
            for group in &exercise.muscle_groups {
                groups.entry(*group).or_default().push(exercise);
            }
        }

        groups
    }

    /// Append a custom exercise with a generated `custom_<millis>` id.
    pub fn add_custom(&mut self, custom: CustomExercise) -> &Exercise {
        let mut id = format!("custom_{}", Utc::now().timestamp_millis());
        while self.get(&id).is_some() {
            id.push('_');
        }

        tracing::debug!("Adding custom exercise {} ({})", custom.name, id);

        self.exercises.push(Exercise {
            id,
            name: custom.name,
            category: custom.category,
            muscle_groups: custom.muscle_groups,
            description: custom.description,
            instructions: Vec::new(),
            tips: Vec::new(),
            equipment: Vec::new(),
            difficulty: custom.difficulty,
        });

        let last = self.exercises.len() - 1;
        &self.exercises[last]
    }
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    muscle_groups: &[MuscleGroup],
    difficulty: UserLevel,
    equipment: &[&str],
    description: &str,
    instructions: &[&str],
    tips: &[&str],
) -> Exercise {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Exercise {
        id: id.to_string(),
        name: name.to_string(),
        category,
        muscle_groups: muscle_groups.to_vec(),
        description: description.to_string(),
        instructions: owned(instructions),
        tips: owned(tips),
        equipment: owned(equipment),
        difficulty,
    }
}

fn builtin_exercises() -> Vec<Exercise> {
    use ExerciseCategory::*;
    use MuscleGroup::*;
    use UserLevel::*;

    vec![
        // Chest
        exercise(
            "bench_press",
            "Barbell bench press",
            Strength,
            &[Chest, Shoulders, Arms],
            Intermediate,
            &["Barbell", "Bench"],
            "Foundational press for chest, shoulders and triceps. The king of upper-body lifts.",
            &[
                "Lie on the bench with the bar above your chest",
                "Pull your shoulder blades together, feet flat on the floor",
                "Lower the bar until it touches your chest",
                "Press the bar up until your arms are straight",
            ],
            &[
                "Keep the shoulder blades squeezed throughout",
                "Do not lift your lower back off the bench",
                "Lower the bar under control for 2-3 seconds",
            ],
        ),
        exercise(
            "pushups",
            "Push-ups",
            Strength,
            &[Chest, Arms, Shoulders],
            Beginner,
            &[],
            "Bodyweight press for chest, triceps and front delts that can be done anywhere.",
            &[
                "Start in a plank with hands slightly wider than your shoulders",
                "Lower your chest almost to the floor",
                "Push back up to straight arms",
            ],
            &[
                "Keep your body in one straight line",
                "Elbows at about 45 degrees to the torso",
                "Drop to your knees if full push-ups are too hard",
            ],
        ),
        exercise(
            "dumbbell_press",
            "Dumbbell bench press",
            Strength,
            &[Chest, Shoulders, Arms],
            Intermediate,
            &["Dumbbells", "Bench"],
            "Chest press with a longer range of motion than the barbell version.",
            &[
                "Lie on the bench with a dumbbell in each hand at chest level",
                "Press both dumbbells up until your arms are straight",
                "Lower them slowly back to the chest",
            ],
            &[
                "Bring the dumbbells slightly together at the top",
                "Control the descent and feel the stretch in the chest",
            ],
        ),
        // Back
        exercise(
            "deadlift",
            "Deadlift",
            Strength,
            &[Back, Legs],
            Advanced,
            &["Barbell"],
            "Whole-body pull that builds the back, glutes and hamstrings.",
            &[
                "Stand with feet hip-width apart, bar over mid-foot",
                "Grip the bar just outside your knees",
                "Drive through the floor and stand up with a flat back",
                "Lower the bar along your legs",
            ],
            &[
                "Never round your lower back",
                "Keep the bar close to your body the whole time",
                "Start light and master the technique",
            ],
        ),
        exercise(
            "pullups",
            "Pull-ups",
            Strength,
            &[Back, Arms],
            Intermediate,
            &["Pull-up bar"],
            "Bodyweight pull for a wide back and strong biceps.",
            &[
                "Hang from the bar with an overhand grip",
                "Pull yourself up until your chin clears the bar",
                "Lower yourself under control",
            ],
            &[
                "Avoid swinging the body",
                "Use a resistance band if you cannot yet do full reps",
            ],
        ),
        exercise(
            "barbell_rows",
            "Bent-over barbell row",
            Strength,
            &[Back, Arms],
            Intermediate,
            &["Barbell"],
            "Horizontal pull for back thickness.",
            &[
                "Hinge forward with a flat back, bar hanging at arm's length",
                "Pull the bar to your lower chest",
                "Lower it back under control",
            ],
            &[
                "Squeeze the shoulder blades at the top",
                "Keep the torso still, do not jerk the weight",
            ],
        ),
        // Legs
        exercise(
            "squat",
            "Barbell squat",
            Strength,
            &[Legs],
            Intermediate,
            &["Barbell", "Squat rack"],
            "The main lower-body exercise for quads, glutes and core strength.",
            &[
                "Place the bar on your upper back and step out of the rack",
                "Feet shoulder-width apart, toes slightly out",
                "Sit down until your thighs are parallel to the floor",
                "Drive back up through your heels",
            ],
            &[
                "Knees track over the toes",
                "Keep the chest up and the back neutral",
                "Breathe in on the way down",
            ],
        ),
        exercise(
            "lunges",
            "Lunges",
            Strength,
            &[Legs],
            Beginner,
            &[],
            "Single-leg exercise for balance, quads and glutes.",
            &[
                "Step forward with one leg",
                "Lower until both knees are bent at 90 degrees",
                "Push back to the starting position and switch legs",
            ],
            &[
                "Keep the front knee behind the toes",
                "Stay upright through the torso",
            ],
        ),
        exercise(
            "leg_press",
            "Leg press",
            Strength,
            &[Legs],
            Beginner,
            &["Leg press machine"],
            "Machine press that loads the legs without stressing the spine.",
            &[
                "Sit in the machine with feet shoulder-width on the platform",
                "Lower the platform until knees reach 90 degrees",
                "Press back up without locking the knees",
            ],
            &["Keep your lower back against the pad", "Do not lock out the knees"],
        ),
        // Arms
        exercise(
            "bicep_curls",
            "Biceps curls",
            Strength,
            &[Arms],
            Beginner,
            &["Dumbbells"],
            "Isolation exercise for the biceps.",
            &[
                "Stand holding dumbbells with palms facing forward",
                "Curl the weights up to your shoulders",
                "Lower slowly",
            ],
            &["Keep elbows pinned to your sides", "Do not swing the torso"],
        ),
        exercise(
            "tricep_dips",
            "Triceps dips",
            Strength,
            &[Arms, Chest],
            Intermediate,
            &["Parallel bars"],
            "Bodyweight press for triceps and lower chest.",
            &[
                "Support yourself on the bars with straight arms",
                "Lower until your elbows reach 90 degrees",
                "Press back up",
            ],
            &[
                "Stay upright to focus on the triceps",
                "Avoid dropping too deep if your shoulders hurt",
            ],
        ),
        // Shoulders
        exercise(
            "shoulder_press",
            "Overhead press",
            Strength,
            &[Shoulders, Arms],
            Intermediate,
            &["Barbell"],
            "Standing press for strong shoulders and triceps.",
            &[
                "Hold the bar at shoulder height",
                "Press it overhead until your arms are straight",
                "Lower back to the shoulders",
            ],
            &["Brace your core and glutes", "Do not lean back excessively"],
        ),
        exercise(
            "lateral_raises",
            "Lateral raises",
            Strength,
            &[Shoulders],
            Beginner,
            &["Dumbbells"],
            "Isolation exercise for the side delts.",
            &[
                "Stand with dumbbells at your sides",
                "Raise the arms out to shoulder height",
                "Lower slowly",
            ],
            &["Use light weights", "Keep a slight bend in the elbows"],
        ),
        // Core
        exercise(
            "plank",
            "Plank",
            Strength,
            &[Abs],
            Beginner,
            &[],
            "Static hold that builds core stability.",
            &[
                "Rest on your forearms and toes",
                "Keep your body in a straight line",
                "Hold for the prescribed time",
            ],
            &["Do not let the hips sag", "Keep breathing steadily"],
        ),
        exercise(
            "crunches",
            "Crunches",
            Strength,
            &[Abs],
            Beginner,
            &[],
            "Classic exercise for the rectus abdominis.",
            &[
                "Lie on your back with knees bent",
                "Lift your shoulders off the floor by contracting the abs",
                "Lower back down slowly",
            ],
            &["Do not pull on your neck", "Exhale as you crunch up"],
        ),
        exercise(
            "hyperextensions",
            "Back extensions",
            Strength,
            &[Back],
            Beginner,
            &["Back extension bench"],
            "Strengthens the lower back and glutes.",
            &[
                "Position your hips on the pad with feet secured",
                "Lower your torso forward",
                "Raise it until your body is straight",
            ],
            &["Do not hyperextend at the top", "Move slowly and under control"],
        ),
        // Cardio
        exercise(
            "running",
            "Running",
            Cardio,
            &[Legs],
            Beginner,
            &["Treadmill"],
            "Steady-state cardio that builds endurance and burns calories.",
            &[
                "Start with a five minute walk",
                "Run at a pace where you can still talk",
                "Finish with a cool-down walk",
            ],
            &["Land on the mid-foot", "Increase distance gradually"],
        ),
        exercise(
            "cycling",
            "Stationary bike",
            Cardio,
            &[Legs],
            Beginner,
            &["Exercise bike"],
            "Low-impact cardio that is easy on the joints.",
            &[
                "Adjust the seat so your knee is slightly bent at the bottom",
                "Pedal at a steady cadence",
            ],
            &["Keep your back straight", "Vary the resistance to add intervals"],
        ),
        exercise(
            "elliptical",
            "Elliptical trainer",
            Cardio,
            &[Legs, Arms],
            Beginner,
            &["Elliptical trainer"],
            "Full-body low-impact cardio.",
            &[
                "Step onto the pedals and hold the handles",
                "Move in a smooth elliptical motion using both arms and legs",
            ],
            &["Keep an upright posture", "Push and pull the handles actively"],
        ),
        exercise(
            "rowing",
            "Rowing machine",
            Cardio,
            &[Back, Legs, Arms],
            Intermediate,
            &["Rowing machine"],
            "Cardio that trains the back, legs and arms together.",
            &[
                "Drive with the legs first",
                "Lean back slightly and pull the handle to your ribs",
                "Return in reverse order: arms, torso, legs",
            ],
            &["Most of the power comes from the legs", "Keep the back neutral"],
        ),
        exercise(
            "jumping_jacks",
            "Jumping jacks",
            Cardio,
            &[Legs],
            Beginner,
            &[],
            "Simple warm-up and conditioning drill.",
            &[
                "Jump the feet apart while raising the arms overhead",
                "Jump back to the starting position",
            ],
            &["Land softly on the balls of your feet", "Keep a steady rhythm"],
        ),
        // Functional
        exercise(
            "burpees",
            "Burpees",
            Functional,
            &[Legs, Arms, Abs],
            Intermediate,
            &[],
            "High-intensity full-body exercise.",
            &[
                "Squat down and place your hands on the floor",
                "Jump your feet back into a plank and do a push-up",
                "Jump the feet forward and explode upward",
            ],
            &["Keep the core tight in the plank", "Scale down by stepping instead of jumping"],
        ),
        exercise(
            "mountain_climbers",
            "Mountain climbers",
            Functional,
            &[Abs, Legs, Arms],
            Intermediate,
            &[],
            "Dynamic core and cardio exercise.",
            &[
                "Start in a high plank",
                "Drive one knee toward your chest",
                "Switch legs quickly",
            ],
            &["Keep the hips level", "Move fast but stay controlled"],
        ),
        exercise(
            "kettlebell_swings",
            "Kettlebell swings",
            Functional,
            &[Legs, Back, Shoulders],
            Intermediate,
            &["Kettlebell"],
            "Explosive hip hinge for the posterior chain.",
            &[
                "Hinge at the hips with the kettlebell between your legs",
                "Snap the hips forward to swing it to chest height",
                "Let it swing back and repeat",
            ],
            &["Power comes from the hips, not the arms", "Keep the back flat"],
        ),
        exercise(
            "step_ups",
            "Step-ups",
            Functional,
            &[Legs],
            Beginner,
            &["Bench or step platform"],
            "Functional single-leg exercise.",
            &[
                "Place one foot on the bench",
                "Step up until the leg is straight",
                "Step down and repeat",
            ],
            &["Push through the heel of the top foot", "Do not push off the bottom leg"],
        ),
        // Flexibility
        exercise(
            "back_stretch",
            "Back stretch",
            Flexibility,
            &[Back],
            Beginner,
            &["Mat"],
            "Gentle stretching to relieve back tension.",
            &[
                "Kneel on the mat and sit back on your heels",
                "Reach your arms forward along the floor",
                "Hold and breathe deeply",
            ],
            &["Never bounce in a stretch", "Relax into the position"],
        ),
        exercise(
            "leg_stretch",
            "Leg stretch",
            Flexibility,
            &[Legs],
            Beginner,
            &["Mat"],
            "Hamstring and quad stretching for recovery.",
            &[
                "Sit with legs straight and reach for your toes",
                "Hold for 30 seconds",
                "Repeat with a standing quad stretch",
            ],
            &["Stretch warm muscles", "Stop before it hurts"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_size_and_unique_ids() {
        let library = ExerciseLibrary::builtin();
        assert_eq!(library.len(), 27);

        let mut ids: Vec<&str> = library.all().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 27);
    }

    #[test]
    fn test_get_and_name_of() {
        let library = ExerciseLibrary::builtin();
        assert_eq!(library.get("squat").unwrap().category, ExerciseCategory::Strength);
        assert_eq!(library.name_of("deadlift"), "Deadlift");
        assert_eq!(library.name_of("unknown_move"), "unknown_move");
    }

    #[test]
    fn test_recommended_respects_level() {
        let library = ExerciseLibrary::builtin();

        let beginner = library.recommended(UserLevel::Beginner, None, None);
        assert!(beginner.iter().all(|e| e.difficulty == UserLevel::Beginner));

        let intermediate = library.recommended(UserLevel::Intermediate, None, None);
        assert!(intermediate.iter().all(|e| e.difficulty != UserLevel::Advanced));
        assert!(intermediate.len() > beginner.len());

        let advanced = library.recommended(UserLevel::Advanced, None, None);
        assert_eq!(advanced.len(), library.len());
    }

    #[test]
    fn test_recommended_with_filters() {
        let library = ExerciseLibrary::builtin();
        let cardio_legs = library.recommended(
            UserLevel::Beginner,
            Some(ExerciseCategory::Cardio),
            Some(MuscleGroup::Legs),
        );
        let ids: Vec<&str> = cardio_legs.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"running"));
        assert!(ids.contains(&"jumping_jacks"));
        assert!(!ids.contains(&"rowing"));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let library = ExerciseLibrary::builtin();
        let results = library.search("PRESS");
        let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert!(ids.contains(&"bench_press"));
        assert!(ids.contains(&"leg_press"));

        let by_description = library.search("posterior chain");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, "kettlebell_swings");
    }

    #[test]
    fn test_grouped_by_muscle_contains_every_group() {
        let library = ExerciseLibrary::builtin();
        let groups = library.grouped_by_muscle();
        assert_eq!(groups.len(), MuscleGroup::all().len());
        assert!(groups[&MuscleGroup::Abs].iter().any(|e| e.id == "plank"));
        // Multi-group exercises are listed under each group
        assert!(groups[&MuscleGroup::Chest].iter().any(|e| e.id == "tricep_dips"));
        assert!(groups[&MuscleGroup::Arms].iter().any(|e| e.id == "tricep_dips"));
    }

    #[test]
    fn test_add_custom_exercise() {
        let mut library = ExerciseLibrary::builtin();
        let id = library
            .add_custom(CustomExercise {
                name: "Farmer's walk".to_string(),
                category: ExerciseCategory::Functional,
                muscle_groups: vec![MuscleGroup::Arms, MuscleGroup::Back],
                description: "Carry heavy weights".to_string(),
                difficulty: UserLevel::Beginner,
            })
            .id
            .clone();

        assert!(id.starts_with("custom_"));
        assert_eq!(library.len(), 28);
        assert_eq!(library.search("farmer").len(), 1);
    }
}
