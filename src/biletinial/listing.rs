use super::model::{Category, Event};
use itertools::Itertools;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;
use url::Url;

pub const BASE_DOMAIN: &str = "https://biletinial.com";

// Selectors taken from the Tiyatro listing page; other categories share the layout.
const EVENT_ITEM_SELECTOR: &str = "#kategori__etkinlikler > ul > li";
const PLAY_NAME_SELECTOR: &str = "h3 a";
const VENUE_NAME_SELECTOR: &str = "address small";
const DATE_TEXT_SELECTOR: &str = "span";

lazy_static! {
    static ref EVENT_ITEM: Selector =
        Selector::parse(EVENT_ITEM_SELECTOR).expect("Invalid event item selector");
    static ref PLAY_NAME: Selector =
        Selector::parse(PLAY_NAME_SELECTOR).expect("Invalid play name selector");
    static ref VENUE_NAME: Selector =
        Selector::parse(VENUE_NAME_SELECTOR).expect("Invalid venue selector");
    static ref DATE_TEXT: Selector =
        Selector::parse(DATE_TEXT_SELECTOR).expect("Invalid date selector");
    static ref BASE_URL: Url = Url::parse(BASE_DOMAIN).expect("Invalid base domain");
}

/**
Extracts events from a listing page.

Items missing a name, venue, date, or link are skipped, as are plays on the
excluded list.
*/
pub fn extract_events(html: &str, category: Category, excluded_plays: &[String]) -> Vec<Event> {
    let document = Html::parse_document(html);

    document
        .select(&EVENT_ITEM)
        .filter_map(|item| extract_event(item, category))
        .filter(|event| !excluded_plays.contains(&event.name))
        .collect()
}

fn extract_event(item: ElementRef, category: Category) -> Option<Event> {
    let name_tag = item.select(&PLAY_NAME).next()?;
    let name = element_text(&name_tag);
    let venue = element_text(&item.select(&VENUE_NAME).next()?);
    let raw_dates = element_text(&item.select(&DATE_TEXT).next()?);

    if name.is_empty() || venue.is_empty() || raw_dates.is_empty() {
        return None;
    }

    let href = name_tag.value().attr("href")?;
    let url = match BASE_URL.join(href) {
        Ok(url) => url.to_string(),
        Err(err) => {
            warn!("Skipping '{}' with unusable link '{}': {}", name, href, err);
            return None;
        }
    };

    Some(Event {
        raw_dates,
        name,
        venue,
        category,
        url,
    })
}

// Collapses the runs of whitespace the listing markup is full of.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING_HTML: &str = r#"
        <div id="kategori__etkinlikler">
          <ul>
            <li>
              <span>
                Nisan -
                10   11
              </span>
              <h3><a href="/tr-tr/tiyatro/antigone">Antigone</a></h3>
              <address><small>Haşim İşcan Kültür Merkezi</small></address>
            </li>
            <li>
              <span>Nisan - 12</span>
              <h3><a href="https://biletinial.com/tr-tr/opera/carmen">Carmen</a></h3>
              <address><small>Opera Sahnesi</small></address>
            </li>
            <li>
              <span>Nisan - 13</span>
              <h3>Eksik oyun</h3>
              <address><small>Bilinmeyen Sahne</small></address>
            </li>
          </ul>
        </div>
    "#;

    #[test_log::test]
    fn should_extract_events_with_absolute_links() {
        let events = extract_events(LISTING_HTML, Category::Tiyatro, &[]);

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            Event {
                raw_dates: "Nisan - 10 11".to_string(),
                name: "Antigone".to_string(),
                venue: "Haşim İşcan Kültür Merkezi".to_string(),
                category: Category::Tiyatro,
                url: "https://biletinial.com/tr-tr/tiyatro/antigone".to_string(),
            }
        );
        assert_eq!(events[1].url, "https://biletinial.com/tr-tr/opera/carmen");
    }

    #[test_log::test]
    fn should_skip_items_without_a_link() {
        let events = extract_events(LISTING_HTML, Category::Tiyatro, &[]);

        assert!(!events.iter().any(|event| event.name == "Eksik oyun"));
    }

    #[test_log::test]
    fn should_skip_excluded_plays() {
        let excluded = vec!["Antigone".to_string()];

        let events = extract_events(LISTING_HTML, Category::Tiyatro, &excluded);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Carmen");
    }

    #[test_log::test]
    fn should_extract_nothing_from_an_unrelated_page() {
        assert!(extract_events("<html><body>404</body></html>", Category::OperaBale, &[]).is_empty());
    }
}
