use super::model::ParsedEvent;
use crate::dates;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;
use voca_rs::case::capitalize;

lazy_static! {
    // "Nisan - 10:" opens a date context for the lines below it.
    static ref DATE_HEADER: Regex =
        Regex::new(r"^(\w+)\s*-\s*(\d+):").expect("Failed to create date header regex");
    // "  - [TIYATRO] Oyun – Sahne -> https://..."
    static ref EVENT_LINE: Regex =
        Regex::new(r"^\s*-\s*(\[.*?\])\s*(.*?)\s*->\s*(https?://.*)")
            .expect("Failed to create event line regex");
}

/**
Reads a report back into typed events.

The grammar has three line kinds: date headers, event bullets, and noise
(blank lines and separators). Event lines before any date header are
discarded, and a header with an unknown month skips its events with a
diagnostic. The result is sorted by date, ties keeping input order.
*/
pub fn parse_events(text: &str) -> Vec<ParsedEvent> {
    let mut events = Vec::new();
    let mut current_month: Option<String> = None;
    let mut current_day: Option<u32> = None;

    for line in text.lines() {
        let line = line.trim();

        if line.is_empty() || line.contains("---") {
            continue;
        }

        if let Some(header) = DATE_HEADER.captures(line) {
            current_month = Some(capitalize(&header[1], true));
            current_day = header[2].parse().ok();
            continue;
        }

        let captures = match EVENT_LINE.captures(line) {
            Some(captures) => captures,
            None => continue,
        };

        let (month, day) = match (&current_month, current_day) {
            (Some(month), Some(day)) => (month, day),
            _ => continue,
        };

        match dates::month_day_to_date(month, day) {
            Some(date) => {
                let details = captures[2].trim();
                let name = details.split('–').next().unwrap_or_default().trim();

                events.push(ParsedEvent {
                    date,
                    name: name.to_string(),
                    full_detail: line
                        .trim_start_matches(|c| c == '-' || c == ' ')
                        .to_string(),
                });
            }
            None => warn!("Skipping event under unresolvable date '{} - {}'", month, day),
        }
    }

    events.sort_by_key(|event| event.date);
    events
}
