use clap::{Parser, ValueEnum};
use sahneplan::biletinial::api::BiletinialAPI;
use sahneplan::biletinial::model::{Category, ListingQuery};
use sahneplan::config::env_loader;
use sahneplan::logging;
use sahneplan::report::{grouping, writer};
use std::fs;
use tracing::{error, info};

const OUTPUT_FILE: &str = "biletinial_scraper_output.txt";

/// Scrapes Biletinial listings and writes them grouped by day.
#[derive(Parser, Debug)]
#[command(name = "scrape")]
struct Cli {
    /// Event category to scrape
    #[arg(long, value_enum)]
    category: CategoryArg,

    /// City slug, e.g. "antalya"
    #[arg(long)]
    city: String,

    /// Date filter: "YYYY-MM-DD", "thisweekend", or empty for all dates
    #[arg(long, default_value = "")]
    date: String,

    /// Venue ids to restrict to (all venues if omitted)
    #[arg(long = "venue-id", num_args = 1..)]
    venue_ids: Vec<String>,

    /// Theatre film type ids
    #[arg(long = "tiyatro-filmtypeids", num_args = 1..)]
    tiyatro_filmtypeids: Vec<u32>,

    /// Opera/ballet film type ids
    #[arg(long = "opera-filmtypeids", num_args = 1..)]
    opera_filmtypeids: Vec<u32>,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum CategoryArg {
    Tiyatro,
    OperaBale,
    Both,
}

impl CategoryArg {
    fn categories(self) -> Vec<Category> {
        match self {
            CategoryArg::Tiyatro => vec![Category::Tiyatro],
            CategoryArg::OperaBale => vec![Category::OperaBale],
            CategoryArg::Both => vec![Category::Tiyatro, Category::OperaBale],
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _loki = logging::setup_loki().await;
    let config = env_loader::load_config();

    let query = ListingQuery {
        categories: cli.category.categories(),
        city: cli.city,
        date_filter: cli.date,
        venue_ids: cli.venue_ids,
        tiyatro_type_ids: cli.tiyatro_filmtypeids,
        opera_type_ids: cli.opera_filmtypeids,
    };

    let events = BiletinialAPI::get_events(&query, &config).await;

    info!("Scraped {} events in total", events.len());

    let grouped = grouping::group_by_date(events);
    let report = writer::format_report(&grouped);

    match fs::write(OUTPUT_FILE, &report) {
        Ok(()) => info!("Report written to {}", OUTPUT_FILE),
        Err(err) => {
            error!("Could not write '{}': {}. Printing instead.", OUTPUT_FILE, err);
            println!("{}", report);
        }
    }
}
