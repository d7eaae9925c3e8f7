use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{TrainingLevel, Goal, UserProfile, WorkoutDay, WorkoutDayType, WorkoutEntry};

struct ExerciseSpec {
    name: &'static str,
    sets: u32,
    reps: &'static str,
    rest: &'static str,
}

struct CardioSpec {
    name: &'static str,
    duration: &'static str,
    intensity: &'static str,
}

const PUSH_POOL: &[ExerciseSpec] = &[
    ExerciseSpec { name: "Bench Press", sets: 3, reps: "8-12", rest: "60-90s" },
    ExerciseSpec { name: "Inclined Press", sets: 3, reps: "8-12", rest: "60s" },
    ExerciseSpec { name: "Overhead Press", sets: 3, reps: "8-12", rest: "60s" },
    ExerciseSpec { name: "Lateral Raise", sets: 3, reps: "12-15", rest: "45s" },
    ExerciseSpec { name: "Tricep Dip", sets: 3, reps: "10-15", rest: "60s" },
    ExerciseSpec { name: "Tricep Pushdown", sets: 3, reps: "12-15", rest: "45s" },
];

const PULL_POOL: &[ExerciseSpec] = &[
    ExerciseSpec { name: "Barbell Row", sets: 3, reps: "8-12", rest: "60-90s" },
    ExerciseSpec { name: "Dumbbell Row", sets: 3, reps: "8-12", rest: "60s" },
    ExerciseSpec { name: "Lat Pull Down", sets: 3, reps: "8-12", rest: "60s" },
    ExerciseSpec { name: "Cable Row", sets: 3, reps: "10-12", rest: "60s" },
    ExerciseSpec { name: "Bicep Curl", sets: 3, reps: "10-15", rest: "45s" },
    ExerciseSpec { name: "Hammer Curl", sets: 3, reps: "10-15", rest: "45s" },
];

const LEG_POOL: &[ExerciseSpec] = &[
    ExerciseSpec { name: "Barbell Squat", sets: 4, reps: "6-10", rest: "90s" },
    ExerciseSpec { name: "Romanian Deadlift", sets: 3, reps: "8-12", rest: "90s" },
    ExerciseSpec { name: "Lunges", sets: 3, reps: "10-12 each leg", rest: "60s" },
    ExerciseSpec { name: "Leg Press", sets: 3, reps: "10-15", rest: "60s" },
    ExerciseSpec { name: "Leg Extension", sets: 3, reps: "12-15", rest: "45s" },
    ExerciseSpec { name: "Calf Raise", sets: 4, reps: "15-20", rest: "45s" },
];

const CORE_POOL: &[ExerciseSpec] = &[
    ExerciseSpec { name: "Seated Crunch", sets: 3, reps: "15-20", rest: "30s" },
    ExerciseSpec { name: "Russian Twist", sets: 3, reps: "12-15 each side", rest: "30s" },
    ExerciseSpec { name: "Reverse Crunch", sets: 3, reps: "12-15", rest: "30s" },
    ExerciseSpec { name: "Leg Raise", sets: 3, reps: "10-15", rest: "30s" },
    ExerciseSpec { name: "Bicycle Crunch", sets: 3, reps: "15-20 each side", rest: "30s" },
    ExerciseSpec { name: "Plank", sets: 3, reps: "30-60 seconds", rest: "30s" },
];

const CARDIO_MUSCLE_GAIN: &[CardioSpec] = &[
    CardioSpec { name: "Jogging", duration: "15 min", intensity: "Low" },
    CardioSpec { name: "Cycling", duration: "15 min", intensity: "Moderate" },
    CardioSpec { name: "Walking", duration: "15 min", intensity: "Low" },
];

const CARDIO_FAT_LOSS: &[CardioSpec] = &[
    CardioSpec { name: "Running", duration: "30-40 min", intensity: "Moderate-High" },
    CardioSpec { name: "Cycling", duration: "40 min", intensity: "Moderate" },
    CardioSpec { name: "HIIT Circuit", duration: "25 min", intensity: "High" },
    CardioSpec { name: "Elliptical", duration: "35 min", intensity: "Moderate" },
];

const CARDIO_MAINTAIN: &[CardioSpec] = &[
    CardioSpec { name: "Walking", duration: "20-30 min", intensity: "Low" },
    CardioSpec { name: "Swimming", duration: "20 min", intensity: "Moderate" },
    CardioSpec { name: "Cycling", duration: "15 min", intensity: "Moderate" },
    CardioSpec { name: "Running", duration: "30-40 min", intensity: "Moderate-High" },
];

const WEEKLY_SPLIT: [WorkoutDayType; 7] = [
    WorkoutDayType::Push,
    WorkoutDayType::Pull,
    WorkoutDayType::Leg,
    WorkoutDayType::Push,
    WorkoutDayType::Pull,
    WorkoutDayType::Leg,
    WorkoutDayType::Rest,
];

const REST_DAY_SENTINEL: &str = "Rest - Recovery";
const MINUTES_PER_EXERCISE: usize = 10;

/// Builds the 7-day push/pull/leg split with goal- and level-adjusted volume.
///
/// Exercise picks are sampled without replacement within a day but are
/// independent across days; meals are the only plan entity with an
/// inter-day novelty constraint.
#[derive(Debug, Clone, Default)]
pub struct WorkoutScheduler;

impl WorkoutScheduler {
    pub fn new() -> Self {
        Self
    }

    pub fn generate<R: Rng>(&self, profile: &UserProfile, rng: &mut R) -> Vec<WorkoutDay> {
        let goal = profile.goal();
        let level = profile.training_level();

        WEEKLY_SPLIT
            .iter()
            .enumerate()
            .map(|(idx, day_type)| self.build_day(idx as u8 + 1, *day_type, goal, level, rng))
            .collect()
    }

    fn build_day<R: Rng>(
        &self,
        day: u8,
        day_type: WorkoutDayType,
        goal: Goal,
        level: TrainingLevel,
        rng: &mut R,
    ) -> WorkoutDay {
        if day_type == WorkoutDayType::Rest {
            return WorkoutDay {
                day,
                day_type,
                workout: vec![WorkoutEntry::Rest {
                    name: REST_DAY_SENTINEL.to_string(),
                }],
                total_exercises: None,
                estimated_duration: None,
            };
        }

        let mut workout: Vec<WorkoutEntry> = match day_type {
            WorkoutDayType::Leg => {
                // Leg day trades one lift for two core movements.
                let mut picks: Vec<&ExerciseSpec> =
                    LEG_POOL.choose_multiple(rng, 4).collect();
                picks.extend(CORE_POOL.choose_multiple(rng, 2));
                picks
            }
            WorkoutDayType::Push => PUSH_POOL.choose_multiple(rng, 5).collect(),
            WorkoutDayType::Pull => PULL_POOL.choose_multiple(rng, 5).collect(),
            WorkoutDayType::Rest => unreachable!(),
        }
        .into_iter()
        .map(|spec| self.adjusted_entry(spec, goal, level))
        .collect();

        let cardio_pool = match goal {
            Goal::MuscleGain => CARDIO_MUSCLE_GAIN,
            Goal::FatLoss => CARDIO_FAT_LOSS,
            Goal::Maintain => CARDIO_MAINTAIN,
        };
        if let Some(cardio) = cardio_pool.choose(rng) {
            workout.push(WorkoutEntry::Cardio {
                name: cardio.name.to_string(),
                duration: cardio.duration.to_string(),
                intensity: cardio.intensity.to_string(),
            });
        }

        let total = workout.len();
        WorkoutDay {
            day,
            day_type,
            workout,
            total_exercises: Some(total),
            estimated_duration: Some(format!("{} minutes", total * MINUTES_PER_EXERCISE)),
        }
    }

    /// Goal adjustment first, then experience adjustment on top.
    fn adjusted_entry(&self, spec: &ExerciseSpec, goal: Goal, level: TrainingLevel) -> WorkoutEntry {
        let mut sets = spec.sets;
        let mut reps = spec.reps.to_string();

        match goal {
            Goal::MuscleGain => {
                sets = (sets + 1).min(5);
                reps = "6-12".to_string();
            }
            Goal::FatLoss => {
                reps = "12-15".to_string();
            }
            Goal::Maintain => {}
        }

        match level {
            TrainingLevel::Beginner => sets = sets.saturating_sub(1).max(2),
            TrainingLevel::Advanced => sets += 1,
            TrainingLevel::Intermediate => {}
        }

        WorkoutEntry::Strength {
            name: spec.name.to_string(),
            sets,
            reps,
            rest: spec.rest.to_string(),
        }
    }
}
