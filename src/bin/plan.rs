use clap::Parser;
use sahneplan::dates;
use sahneplan::plan::{formatter, scheduler};
use sahneplan::report::parser;
use std::fs;
use tracing::{error, info, warn};

/// Builds a spaced-out attendance plan from a scraped report.
#[derive(Parser, Debug)]
#[command(name = "plan")]
struct Cli {
    /// First day to consider, as "Ay Gün" (e.g. "Mayıs 11")
    #[arg(long = "start-date")]
    start_date: Option<String>,

    /// Report file produced by the scraper
    #[arg(long, default_value = "biletinial_scraper_output.txt")]
    input: String,

    /// Where to write the plan
    #[arg(long, default_value = "etkinlik_planlayici_output.txt")]
    output: String,

    /// Minimum days between two planned events
    #[arg(long = "min-days", default_value_t = scheduler::DEFAULT_MIN_DAYS_APART)]
    min_days: i64,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let start_date = cli.start_date.as_deref().and_then(|raw| {
        let parsed = dates::parse_month_day(raw);

        match parsed {
            Some(date) => info!("Planning starts at {}", date),
            None => warn!("Invalid start date '{}'; the filter will not be applied", raw),
        }

        parsed
    });

    let text = match fs::read_to_string(&cli.input) {
        Ok(text) => text,
        Err(err) => {
            error!("Could not read input file '{}': {}", cli.input, err);
            return;
        }
    };

    if text.trim().is_empty() {
        warn!("Input file '{}' is empty. Nothing to plan.", cli.input);
        return;
    }

    let events = parser::parse_events(&text);

    info!("Read {} events from '{}'", events.len(), cli.input);

    let events = match start_date {
        Some(start_date) => {
            let total = events.len();
            let filtered = scheduler::filter_from_start(events, start_date);

            info!(
                "Filtered out {} events before {}",
                total - filtered.len(),
                start_date
            );
            filtered
        }
        None => {
            info!("No start date given; considering every event");
            events
        }
    };

    let plan = scheduler::create_plan(events, cli.min_days);
    let output = formatter::format_plan(&plan);

    match fs::write(&cli.output, &output) {
        Ok(()) => info!("Plan written to {}", cli.output),
        Err(err) => {
            error!("Could not write '{}': {}. Printing instead.", cli.output, err);
            println!("{}", output);
        }
    }
}
