use crate::dates;
use crate::report::model::ParsedEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

const PLAN_HEADER: &str = "--- Önerilen Plan ---";
const PLAN_FOOTER: &str = "------------------------------";
const EMPTY_PLAN_LINE: &str = "(Belirtilen kriterlere uygun etkinlik bulunamadı)";

/**
Renders a plan grouped by day, reusing each event's detail text verbatim so
the plan stays line-compatible with the report it came from.
*/
pub fn format_plan(planned_events: &[ParsedEvent]) -> String {
    if planned_events.is_empty() {
        return format!("{}\n{}\n{}", PLAN_HEADER, EMPTY_PLAN_LINE, PLAN_FOOTER);
    }

    let mut grouped_by_date: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();

    for event in planned_events {
        grouped_by_date
            .entry(event.date)
            .or_default()
            .push(&event.full_detail);
    }

    let mut output = vec![PLAN_HEADER.to_string()];

    for (date, details) in &grouped_by_date {
        output.push(format!("\n{}:", dates::date_key(date)));

        for detail in details {
            output.push(format!("  - {}", detail));
        }
    }

    output.push(format!("\n{}", PLAN_FOOTER));
    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(day: u32, name: &str) -> ParsedEvent {
        ParsedEvent {
            date: NaiveDate::from_ymd_opt(2025, 4, day).unwrap(),
            name: name.to_string(),
            full_detail: format!(
                "[TIYATRO] {} – Sahne -> https://biletinial.com/e/{}",
                name,
                name.to_lowercase()
            ),
        }
    }

    #[test_log::test]
    fn should_group_the_plan_by_day() {
        let plan = vec![event(5, "Antigone"), event(10, "Carmen")];

        let output = format_plan(&plan);

        assert_eq!(
            output,
            "--- Önerilen Plan ---\n\
             \n\
             Nisan - 05:\n\
             \x20 - [TIYATRO] Antigone – Sahne -> https://biletinial.com/e/antigone\n\
             \n\
             Nisan - 10:\n\
             \x20 - [TIYATRO] Carmen – Sahne -> https://biletinial.com/e/carmen\n\
             \n\
             ------------------------------"
        );
    }

    #[test_log::test]
    fn should_reuse_the_detail_text_verbatim() {
        let output = format_plan(&[event(5, "Antigone")]);

        assert!(output.contains("  - [TIYATRO] Antigone – Sahne -> https://biletinial.com/e/antigone"));
    }

    #[test_log::test]
    fn should_emit_the_sentinel_for_an_empty_plan() {
        assert_eq!(
            format_plan(&[]),
            "--- Önerilen Plan ---\n\
             (Belirtilen kriterlere uygun etkinlik bulunamadı)\n\
             ------------------------------"
        );
    }
}
