use super::model::EventsByDate;
use crate::biletinial::model::Event;
use crate::dates;
use chrono::NaiveDate;
use itertools::Itertools;

const REPORT_HEADER: &str = "--- Grouped Events by Date ---";
const REPORT_FOOTER: &str = "------------------------------";
const NO_EVENTS_LINE: &str = "No events found or could be grouped for the specified criteria.";

/**
Serializes grouped events into the report format the planner consumes.

Dates ascend by calendar value; a key that does not parse falls back to the
earliest representable date so the events under it are still emitted. Gap days
are kept in the grouping but suppressed here. Within a day, events order by
(category, name).
*/
pub fn format_report(events_by_date: &EventsByDate) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');

    if events_by_date.values().any(|events| !events.is_empty()) {
        let sorted_keys = events_by_date
            .keys()
            .sorted_by_key(|key| dates::parse_date_key(key).unwrap_or(NaiveDate::MIN));

        for key in sorted_keys {
            let events = &events_by_date[key];

            if events.is_empty() {
                continue;
            }

            out.push_str(&format!("\n{}:\n", key));

            for event in events
                .iter()
                .sorted_by_key(|event| (event.category.slug(), event.name.clone()))
            {
                out.push_str(&format_event_line(event));
            }
        }
    } else {
        out.push_str(&format!("\n{}\n", NO_EVENTS_LINE));
    }

    out.push_str(REPORT_FOOTER);
    out.push_str("\n\nScript finished.\n");
    out
}

fn format_event_line(event: &Event) -> String {
    format!(
        "  - [{}] {} – {} -> {}\n",
        event.category.slug().to_uppercase(),
        event.name,
        event.venue,
        event.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biletinial::model::Category;
    use crate::report::grouping::group_by_date;

    fn event(raw_dates: &str, name: &str, category: Category) -> Event {
        Event {
            raw_dates: raw_dates.to_string(),
            name: name.to_string(),
            venue: "Sahne".to_string(),
            category,
            url: format!("https://biletinial.com/e/{}", name.to_lowercase()),
        }
    }

    #[test_log::test]
    fn should_emit_the_documented_layout() {
        let grouped = group_by_date(vec![event("Nisan - 05", "Antigone", Category::Tiyatro)]);

        let report = format_report(&grouped);

        assert_eq!(
            report,
            "--- Grouped Events by Date ---\n\
             \n\
             Nisan - 05:\n\
             \x20 - [TIYATRO] Antigone – Sahne -> https://biletinial.com/e/antigone\n\
             ------------------------------\n\
             \n\
             Script finished.\n"
        );
    }

    #[test_log::test]
    fn should_suppress_empty_gap_days() {
        let grouped = group_by_date(vec![
            event("Nisan - 05", "Antigone", Category::Tiyatro),
            event("Nisan - 08", "Carmen", Category::OperaBale),
        ]);

        let report = format_report(&grouped);

        assert!(report.contains("Nisan - 05:"));
        assert!(report.contains("Nisan - 08:"));
        assert!(!report.contains("Nisan - 06:"));
        assert!(!report.contains("Nisan - 07:"));
    }

    #[test_log::test]
    fn should_order_events_by_category_then_name_within_a_day() {
        let grouped = group_by_date(vec![
            event("Nisan - 05", "Tosca", Category::Tiyatro),
            event("Nisan - 05", "Antigone", Category::Tiyatro),
            event("Nisan - 05", "Carmen", Category::OperaBale),
        ]);

        let report = format_report(&grouped);
        let carmen = report.find("Carmen").unwrap();
        let antigone = report.find("Antigone").unwrap();
        let tosca = report.find("Tosca").unwrap();

        assert!(carmen < antigone, "opera-bale sorts before tiyatro");
        assert!(antigone < tosca);
    }

    #[test_log::test]
    fn should_emit_unparseable_dates_first() {
        let grouped = group_by_date(vec![
            event("Nisan - 05", "Antigone", Category::Tiyatro),
            event("April - 10", "Carmen", Category::OperaBale),
        ]);

        let report = format_report(&grouped);

        assert!(report.find("April - 10:").unwrap() < report.find("Nisan - 05:").unwrap());
    }

    #[test_log::test]
    fn should_emit_the_sentinel_when_nothing_was_scraped() {
        let report = format_report(&EventsByDate::new());

        assert_eq!(
            report,
            "--- Grouped Events by Date ---\n\
             \n\
             No events found or could be grouped for the specified criteria.\n\
             ------------------------------\n\
             \n\
             Script finished.\n"
        );
    }
}
