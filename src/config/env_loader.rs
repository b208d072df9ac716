use crate::config::model::Config;
use std::env;
use std::time::Duration;

const DEFAULT_REQUEST_DELAY_MS: u64 = 1000;

pub fn load_config() -> Config {
    let excluded_plays = load_list_config("EXCLUDED_PLAYS");
    let request_delay_ms = load_u64_config("SCRAPE_DELAY_MS", DEFAULT_REQUEST_DELAY_MS);

    Config {
        excluded_plays,
        request_delay: Duration::from_millis(request_delay_ms),
    }
}

fn load_list_config(name: &str) -> Vec<String> {
    env::var(name)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name))
}
