//! Interactive routine session.
//!
//! Reads intents as lines on stdin and drives the one-second countdown
//! tick, re-rendering after every transition and every tick. The tick
//! branch is disarmed whenever no countdown is running, and the interval
//! is re-armed on every timer start so the first decrement lands a full
//! second after it.

use std::time::Duration;

use rise_core::{format_clock, Config, Event, Intent, RoutineSession, Step, WorkoutType};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;
use tracing::debug;

const QUOTE: &str = "\"Don't wake up to watch the sunrise.\n Wake up earlier and let the sun watch you rise.\"";

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(session_loop(config))
}

async fn session_loop(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = RoutineSession::new(config.streak.seed);
    debug!(session = %session.id(), "interactive session started");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    render(&session, &config);
    loop {
        tokio::select! {
            _ = interval.tick(), if session.timer_running() => {
                let finished = session.tick();
                render(&session, &config);
                if let Some(Event::TimerFinished { step, .. }) = finished {
                    println!("(time is up for {})", step.title());
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Help) => print_help(&session),
                    Some(Command::Status) => {
                        println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
                    }
                    Some(Command::Intent(intent)) => {
                        let starts_timer = intent == Intent::StartTimer;
                        match session.apply(intent) {
                            Ok(_) => {
                                if starts_timer {
                                    interval.reset();
                                }
                                render(&session, &config);
                            }
                            Err(e) => println!("cannot do that here: {e}"),
                        }
                    }
                    None => {
                        if !line.trim().is_empty() {
                            println!("unknown command '{}' (try 'help')", line.trim());
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

enum Command {
    Intent(Intent),
    Status,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_lowercase();
        let intent = match word.as_str() {
            "well" | "rested" => Intent::AnswerSleep { well: true },
            "tired" => Intent::AnswerSleep { well: false },
            "begin" => Intent::Begin,
            "home" => Intent::ChooseWorkout {
                workout: WorkoutType::Home,
            },
            "gym" => Intent::ChooseWorkout {
                workout: WorkoutType::Gym,
            },
            "yoga" => Intent::ChooseWorkout {
                workout: WorkoutType::Yoga,
            },
            "cardio" => Intent::ChooseWorkout {
                workout: WorkoutType::Cardio,
            },
            "start" | "timer" => Intent::StartTimer,
            "next" | "skip" | "done" => Intent::Advance,
            "messy" | "yes" => Intent::AssessSpace { messy: true },
            "tidy" | "no" => Intent::AssessSpace { messy: false },
            "finish" | "complete" => Intent::Complete,
            "back" => Intent::Reset,
            "status" => return Some(Command::Status),
            "help" | "?" => return Some(Command::Help),
            "quit" | "exit" | "q" => return Some(Command::Quit),
            _ => return None,
        };
        Some(Command::Intent(intent))
    }
}

fn render(session: &RoutineSession, config: &Config) {
    if config.ui.clear_screen {
        print!("\x1b[2J\x1b[H");
    }
    let step = session.step();
    println!("rise  |  {} day streak", session.streak());
    println!();
    println!("== {} ==", step.title());

    if step == Step::Initial && config.ui.show_quote {
        println!();
        println!("{QUOTE}");
    }
    if let Some(guidance) = step.guidance() {
        println!();
        println!("{guidance}");
    }

    if step == Step::Workout && session.machine().workout_type().is_none() {
        println!();
        println!("Pick a workout: home, gym, yoga, cardio");
    } else if let Some(duration_secs) = step.countdown_secs() {
        println!();
        match session.timer_remaining_secs() {
            Some(remaining) => println!("   {}", format_clock(remaining)),
            None => println!(
                "   {}  (type 'start' to begin the countdown)",
                format_clock(duration_secs)
            ),
        }
    }

    println!();
    println!("[{}]", prompt_line(session));
}

/// The controls valid for the current state, in display order.
///
/// "next" is offered only while the countdown is unset; "skip" is always
/// available on timed steps. Both dispatch the same transition.
fn prompt_line(session: &RoutineSession) -> String {
    let step = session.step();
    let mut options: Vec<&str> = Vec::new();
    match step {
        Step::Initial => {
            options.extend(["well", "tired"]);
            if session.machine().slept_well().is_some() {
                options.push("begin");
            }
        }
        Step::Workout if session.machine().workout_type().is_none() => {
            options.extend(["home", "gym", "yoga", "cardio"]);
        }
        Step::Workout | Step::Meditation | Step::Stretch | Step::Declutter => {
            if session.timer_remaining_secs().is_none() {
                options.extend(["start", "next"]);
            }
            options.push("skip");
        }
        Step::Breakfast | Step::Shower | Step::Dressed => options.push("done"),
        Step::Space => options.extend(["messy", "tidy"]),
        Step::Complete => options.push("finish"),
    }
    if step != Step::Initial {
        options.push("back");
    }
    options.push("quit");
    options.join(" / ")
}

fn print_help(session: &RoutineSession) {
    println!("commands: {}", prompt_line(session));
    println!("          status (JSON snapshot), help, quit");
}
