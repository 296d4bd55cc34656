use serde::{Deserialize, Serialize};

/// One screen of the guided routine. Exactly one step is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Initial,
    Workout,
    Meditation,
    Stretch,
    Breakfast,
    Shower,
    Dressed,
    Space,
    Declutter,
    Complete,
}

impl Step {
    /// Every step, in display order.
    pub const ALL: [Step; 10] = [
        Step::Initial,
        Step::Workout,
        Step::Meditation,
        Step::Stretch,
        Step::Breakfast,
        Step::Shower,
        Step::Dressed,
        Step::Space,
        Step::Declutter,
        Step::Complete,
    ];

    /// Screen heading.
    pub fn title(self) -> &'static str {
        match self {
            Step::Initial => "How did you sleep?",
            Step::Workout => "Quick 20-Minute Workout",
            Step::Meditation => "Morning Meditation",
            Step::Stretch => "Stretch Your Muscles",
            Step::Breakfast => "Eat Breakfast",
            Step::Shower => "Take a Cold Shower",
            Step::Dressed => "Get Dressed",
            Step::Space => "Check Your Space",
            Step::Declutter => "Quick Declutter",
            Step::Complete => "You're Ready!",
        }
    }

    /// One-line guidance shown under the heading, where the screen has one.
    pub fn guidance(self) -> Option<&'static str> {
        match self {
            Step::Breakfast => Some("Take time to enjoy a healthy breakfast"),
            Step::Shower => Some("A cold shower helps wake you up!"),
            Step::Dressed => Some("Put on your clothes for the day"),
            Step::Space => Some("Is your space messy or cluttered?"),
            Step::Complete => Some("Your day has started powerfully. Keep up the momentum!"),
            _ => None,
        }
    }

    /// Countdown duration for timed steps, in seconds.
    pub fn countdown_secs(self) -> Option<u32> {
        match self {
            Step::Workout => Some(20 * 60),
            Step::Meditation => Some(10 * 60),
            Step::Stretch => Some(5 * 60),
            Step::Declutter => Some(15 * 60),
            _ => None,
        }
    }

    /// Linear successor used by `advance`. Branching steps (`Initial`,
    /// `Space`) and the terminal step have none.
    pub(crate) fn successor(self) -> Option<Step> {
        match self {
            Step::Workout => Some(Step::Stretch),
            Step::Meditation => Some(Step::Breakfast),
            Step::Stretch => Some(Step::Breakfast),
            Step::Breakfast => Some(Step::Shower),
            Step::Shower => Some(Step::Dressed),
            Step::Dressed => Some(Step::Space),
            Step::Declutter => Some(Step::Complete),
            Step::Initial | Step::Space | Step::Complete => None,
        }
    }
}

/// Workout variant chosen on the workout step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Home,
    Gym,
    Yoga,
    Cardio,
}

impl WorkoutType {
    /// Every workout variant, in display order.
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Home,
        WorkoutType::Gym,
        WorkoutType::Yoga,
        WorkoutType::Cardio,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Home => "Home",
            WorkoutType::Gym => "Gym",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Cardio => "Cardio",
        }
    }
}
