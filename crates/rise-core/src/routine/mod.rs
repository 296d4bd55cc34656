mod machine;
mod step;

pub use machine::RoutineMachine;
pub use step::{Step, WorkoutType};
