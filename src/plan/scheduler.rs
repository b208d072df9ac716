use crate::report::model::ParsedEvent;
use chrono::NaiveDate;
use std::collections::HashSet;

pub const DEFAULT_MIN_DAYS_APART: i64 = 4;

/// Drops events dated before the cutoff. Dates carry no time component.
pub fn filter_from_start(events: Vec<ParsedEvent>, start_date: NaiveDate) -> Vec<ParsedEvent> {
    events
        .into_iter()
        .filter(|event| event.date >= start_date)
        .collect()
}

/**
Greedy single-pass selection over date-sorted events: a production is planned
at most once, and each acceptance must be at least `min_days_apart` days after
the previous acceptance. A skipped event never advances that reference point,
so spacing is always measured against the last accepted entry.

Deliberately not an optimal interval scheduler; it does not backtrack, and for
equal dates the earlier input wins.
*/
pub fn create_plan(events: Vec<ParsedEvent>, min_days_apart: i64) -> Vec<ParsedEvent> {
    let mut planned = Vec::new();
    let mut planned_names = HashSet::new();
    let mut last_planned_date: Option<NaiveDate> = None;

    for event in events {
        if planned_names.contains(&event.name) {
            continue;
        }

        let far_enough = match last_planned_date {
            None => true,
            Some(last) => (event.date - last).num_days() >= min_days_apart,
        };

        if far_enough {
            planned_names.insert(event.name.clone());
            last_planned_date = Some(event.date);
            planned.push(event);
        }
    }

    planned
}
