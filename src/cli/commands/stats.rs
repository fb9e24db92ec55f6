use crate::cli::parser::Commands;
use crate::core::layout;
use crate::core::logic::{Core, PrepareOptions};
use crate::core::sweep::concurrency_profile;
use crate::errors::AppResult;
use crate::import::load_records;
use crate::utils::time::{format_minutes, minute_label};

/// Handle the `stats` command: event count, peak concurrency and where it occurs.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Stats { file } = cmd {
        let records = load_records(file)?;
        let prepared = Core::prepare(&records, &PrepareOptions::default())?;
        let events = prepared.events;

        let profile = concurrency_profile(&events);
        let results = layout::layout(&events)?;
        let busy: i64 = events.iter().map(|e| e.duration_minutes() as i64).sum();

        println!("Events:           {}", events.len());
        println!("Booked time:      {}", format_minutes(busy));
        println!("Peak concurrency: {}", profile.peak);
        println!(
            "Columns:          {}",
            results.first().map(|r| r.column_count).unwrap_or(0)
        );
        for (from, to) in &profile.windows {
            println!(
                "Peak window:      {} - {}",
                minute_label(*from as i64),
                minute_label(*to as i64)
            );
        }
    }
    Ok(())
}
