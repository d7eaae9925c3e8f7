use serde::{Deserialize, Serialize};

/// Profile submitted with every plan-generation request.
///
/// `gender`, `goal` and `active_level` arrive as free-form strings and are
/// parsed leniently: unknown labels fall back to a safe default rather than
/// rejecting the request. Range validation for age/weight/height happens in
/// the nutrition service before any calculation runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: String,
    pub active_level: String,
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub target_weight: Option<f64>,
}

impl UserProfile {
    pub fn goal(&self) -> Goal {
        Goal::parse(&self.goal)
    }

    pub fn gender(&self) -> Gender {
        Gender::parse(&self.gender)
    }

    pub fn training_level(&self) -> TrainingLevel {
        TrainingLevel::parse(&self.active_level)
    }

    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

/// Training goal driving calorie, workout and progress adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    FatLoss,
    MuscleGain,
    Maintain,
}

impl Goal {
    /// Unknown labels fall back to `Maintain`, the no-adjustment branch.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "fat_loss" => Goal::FatLoss,
            "muscle_gain" => Goal::MuscleGain,
            _ => Goal::Maintain,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::FatLoss => "fat_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintain => "maintain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Mifflin-St Jeor only distinguishes the male constant; anything that is
    /// not "male"/"m" takes the female branch.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            _ => Gender::Female,
        }
    }
}

/// Training experience, read from the same `active_level` field that the
/// nutrition service reads as an activity-factor label. The two meanings are
/// kept as separate parsers on purpose; merging them silently would change
/// calorie math for users who send "beginner".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl TrainingLevel {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "beginner" => TrainingLevel::Beginner,
            "advanced" => TrainingLevel::Advanced,
            _ => TrainingLevel::Intermediate,
        }
    }
}

/// TDEE multiplier for an activity label. Unknown labels get the sedentary
/// factor so a typo never inflates the calorie target.
pub fn activity_factor(label: &str) -> f64 {
    match label.trim().to_lowercase().as_str() {
        "sedentary" => 1.2,
        "light" => 1.375,
        "moderate" => 1.55,
        "active" => 1.725,
        "very_active" => 1.9,
        _ => 1.2,
    }
}

/// Progress-pace multiplier for the weekly weight-change rate.
pub fn pace_multiplier(label: &str) -> f64 {
    match label.trim().to_lowercase().as_str() {
        "low" => 0.7,
        "moderate" => 1.0,
        "high" => 1.3,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_parsing_defaults_to_maintain() {
        assert_eq!(Goal::parse("fat_loss"), Goal::FatLoss);
        assert_eq!(Goal::parse("MUSCLE_GAIN"), Goal::MuscleGain);
        assert_eq!(Goal::parse("shredded"), Goal::Maintain);
        assert_eq!(Goal::parse(""), Goal::Maintain);
    }

    #[test]
    fn gender_parsing_accepts_short_form() {
        assert_eq!(Gender::parse("M"), Gender::Male);
        assert_eq!(Gender::parse("male"), Gender::Male);
        assert_eq!(Gender::parse("female"), Gender::Female);
        assert_eq!(Gender::parse("other"), Gender::Female);
    }

    #[test]
    fn unknown_activity_label_uses_sedentary_factor() {
        assert_eq!(activity_factor("moderate"), 1.55);
        assert_eq!(activity_factor("couch"), 1.2);
    }

    #[test]
    fn training_level_defaults_to_intermediate() {
        assert_eq!(TrainingLevel::parse("beginner"), TrainingLevel::Beginner);
        assert_eq!(TrainingLevel::parse("moderate"), TrainingLevel::Intermediate);
        assert_eq!(TrainingLevel::parse("advanced"), TrainingLevel::Advanced);
    }
}
