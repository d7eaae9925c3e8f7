use crate::models::{pace_multiplier, Goal, ProgressPoint, TimeEstimate, UserProfile};

const WEEKS_PER_MONTH: f64 = 4.33;
const MAX_WEEKLY_LOSS: f64 = -1.5;
const MAX_WEEKLY_GAIN: f64 = 0.8;

/// Simulates the week-by-week weight trajectory toward the target weight.
///
/// Deterministic: the rate is derived from the profile, and the trajectory is
/// pinned at the target once reached instead of random-walking around it.
#[derive(Debug, Clone, Default)]
pub struct ProgressProjector;

impl ProgressProjector {
    pub fn new() -> Self {
        Self
    }

    pub fn project(&self, profile: &UserProfile, weeks: u32) -> Vec<ProgressPoint> {
        let current = profile.weight_kg;
        let target = self.target_weight(profile);
        let weekly_change = self.weekly_change(profile, current, target);

        let mut points = Vec::with_capacity(weeks as usize + 1);
        let mut reached = false;

        for week in 0..=weeks {
            let mut predicted = current + weekly_change * week as f64;

            // Never overshoot past the target; once there, hold it and zero
            // the remaining weekly goal.
            if (weekly_change > 0.0 && predicted >= target)
                || (weekly_change < 0.0 && predicted <= target)
            {
                predicted = target;
                reached = true;
            }

            points.push(ProgressPoint {
                week,
                predicted_weight: round1(predicted),
                weight_change: round1(predicted - current),
                weekly_goal: if reached && predicted == target && week > 0 {
                    // Distinguish "still approaching on the final step" from
                    // "already holding at target".
                    let previous = current + weekly_change * (week - 1) as f64;
                    let previous_reached = (weekly_change > 0.0 && previous >= target)
                        || (weekly_change < 0.0 && previous <= target);
                    if previous_reached { 0.0 } else { round1(weekly_change) }
                } else {
                    round1(weekly_change)
                },
            });
        }

        points
    }

    /// Derive a sensible target when the profile does not supply one.
    pub fn target_weight(&self, profile: &UserProfile) -> f64 {
        if let Some(target) = profile.target_weight {
            return target;
        }

        let height_m = profile.height_cm / 100.0;
        match profile.goal() {
            // Middle of the healthy BMI band.
            Goal::FatLoss => round1(22.0 * height_m * height_m),
            // Allow some added mass but keep BMI at or under 25.
            Goal::MuscleGain => {
                let target_bmi = (profile.bmi() + 1.5).min(25.0);
                round1(target_bmi * height_m * height_m)
            }
            Goal::Maintain => profile.weight_kg,
        }
    }

    /// Realistic signed weekly change in kg, clamped per goal.
    fn weekly_change(&self, profile: &UserProfile, current: f64, target: f64) -> f64 {
        let total_change = target - current;
        if total_change == 0.0 {
            return 0.0;
        }

        let base_rate = match profile.goal() {
            Goal::FatLoss => -0.7,
            Goal::MuscleGain => 0.3,
            Goal::Maintain => 0.0,
        };

        // Larger gaps move a little faster at the start.
        let magnitude_factor = if total_change.abs() > 10.0 { 1.2 } else { 1.0 };

        let mut weekly = base_rate * pace_multiplier(&profile.active_level) * magnitude_factor;

        // Force the sign toward the target.
        if total_change > 0.0 {
            weekly = weekly.abs();
        } else {
            weekly = -weekly.abs();
        }

        match profile.goal() {
            Goal::FatLoss => weekly.clamp(MAX_WEEKLY_LOSS, 0.0),
            Goal::MuscleGain => weekly.clamp(0.0, MAX_WEEKLY_GAIN),
            Goal::Maintain => weekly,
        }
    }

    /// How long reaching the target should take, with a realism check used
    /// by the orchestrator to size the projection window.
    pub fn time_to_target(&self, profile: &UserProfile) -> TimeEstimate {
        let current = profile.weight_kg;
        let target = self.target_weight(profile);
        let weekly_change = self.weekly_change(profile, current, target);

        if weekly_change == 0.0 {
            return TimeEstimate {
                weeks_to_target: 0,
                months_to_target: 0.0,
                is_achievable: true,
                message: "You're already at your target weight!".to_string(),
                weekly_change_goal: 0.0,
            };
        }

        let weeks_needed = ((target - current) / weekly_change).abs();
        let months_needed = weeks_needed / WEEKS_PER_MONTH;

        let goal = profile.goal();
        let (is_achievable, message) = if goal == Goal::FatLoss && weeks_needed > 52.0 {
            (
                false,
                "Consider setting a closer target weight for better motivation".to_string(),
            )
        } else if goal == Goal::MuscleGain && weeks_needed > 78.0 {
            (
                false,
                "Muscle gain takes time. Consider a more gradual target".to_string(),
            )
        } else {
            (true, "This is a realistic goal!".to_string())
        };

        TimeEstimate {
            weeks_to_target: weeks_needed.round() as u32,
            months_to_target: round1(months_needed),
            is_achievable,
            message,
            weekly_change_goal: round1(weekly_change),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
