use super::model::EventsByDate;
use crate::biletinial::model::Event;
use crate::dates;
use std::collections::BTreeSet;

/**
Groups events by day.

An event spanning several days is stored once per day. After placement, every
calendar day between the earliest and latest parsed key is present, empty days
included, so a missing day is distinguishable from an unscraped one.
*/
pub fn group_by_date(events: Vec<Event>) -> EventsByDate {
    let mut by_date = EventsByDate::new();
    let mut parsed_dates = BTreeSet::new();

    for event in events {
        let keys = dates::expand_day_tokens(&event.raw_dates);

        if keys.is_empty() {
            // Unrecognized month: keep the event under its raw text.
            by_date.entry(event.raw_dates.clone()).or_default().push(event);
            continue;
        }

        for key in keys {
            if let Some(parsed) = dates::parse_date_key(&key) {
                parsed_dates.insert(parsed);
            }

            by_date.entry(key).or_default().push(event.clone());
        }
    }

    if let (Some(first), Some(last)) = (parsed_dates.first(), parsed_dates.last()) {
        for day in first.iter_days().take_while(|day| day <= last) {
            by_date.entry(dates::date_key(&day)).or_default();
        }
    }

    by_date
}
