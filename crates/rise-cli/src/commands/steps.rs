use rise_core::{format_clock, Step};
use serde::Serialize;

#[derive(Serialize)]
struct StepRow {
    step: Step,
    title: &'static str,
    countdown_secs: Option<u32>,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let rows: Vec<StepRow> = Step::ALL
            .iter()
            .map(|&step| StepRow {
                step,
                title: step.title(),
                countdown_secs: step.countdown_secs(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Morning routine:");
    for step in Step::ALL {
        let clock = step
            .countdown_secs()
            .map(format_clock)
            .unwrap_or_default();
        println!("  {:<26} {}", step.title(), clock);
    }
    println!();
    println!("Slept well starts at the workout, tired at meditation.");
    println!("A messy space adds a declutter before completion.");
    Ok(())
}
