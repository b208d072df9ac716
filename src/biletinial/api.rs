use super::listing;
use super::model::{Category, Event, ListingQuery};
use crate::config::model::Config;
use lazy_static::lazy_static;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::time::Duration;
use tracing::{error, info, warn};
use url::Url;

const BASE_URL_FORMAT: &str = "https://biletinial.com/tr-tr/{category}/";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; TheatreScraperBot/1.0; +http://example.com/botinfo)";
const MAX_RETRIES: u32 = 5;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(
        Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Error creating HTTP client")
    )
    .with(RetryTransientMiddleware::new_with_policy(
        ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
    ))
    .build();
}

pub struct BiletinialAPI;

impl BiletinialAPI {
    /**
    Fetches every listing page the query describes, one request per
    category/type/venue combination, and extracts the events.

    Failed requests are logged and contribute no events; the run never aborts.
    */
    #[tracing::instrument(skip(query, config), fields(city = %query.city))]
    pub async fn get_events(query: &ListingQuery, config: &Config) -> Vec<Event> {
        let mut all_events = Vec::new();
        let venue_ids = if query.venue_ids.is_empty() {
            vec![String::new()]
        } else {
            query.venue_ids.clone()
        };

        for category in &query.categories {
            for type_id in query.type_ids_for(*category) {
                for venue_id in &venue_ids {
                    let url = match build_url(
                        *category,
                        &query.city,
                        &query.date_filter,
                        type_id,
                        venue_id,
                    ) {
                        Ok(url) => url,
                        Err(err) => {
                            error!("Skipping malformed listing URL: {}", err);
                            continue;
                        }
                    };

                    if let Some(html) = Self::fetch_html(&url, config.request_delay).await {
                        let mut events =
                            listing::extract_events(&html, *category, &config.excluded_plays);

                        info!("Extracted {} events from {}", events.len(), url);
                        all_events.append(&mut events);
                    }
                }
            }
        }

        all_events
    }

    async fn fetch_html(url: &Url, request_delay: Duration) -> Option<String> {
        // Politeness toward the site: fixed pause before every request.
        tokio::time::sleep(request_delay).await;

        let response = match REST_CLIENT.get(url.clone()).send().await {
            Ok(response) => response,
            Err(err) => {
                error!("Error fetching {}: {}", url, err);
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(err) => {
                error!("Request to {} failed: {}", url, err);
                return None;
            }
        };

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if !content_type.contains("text/html") {
            warn!("Expected HTML from {} but got '{}'", url, content_type);
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(err) => {
                error!("Error reading response body from {}: {}", url, err);
                None
            }
        }
    }
}

/// Builds a listing URL for one category/city page, with optional filters.
pub fn build_url(
    category: Category,
    city: &str,
    date_filter: &str,
    type_id: u32,
    venue_id: &str,
) -> Result<Url, url::ParseError> {
    let base = BASE_URL_FORMAT.replace("{category}", category.slug());
    let mut url = Url::parse(&base)?.join(&city.to_lowercase())?;

    let has_params = !date_filter.is_empty() || type_id != 0 || !venue_id.is_empty();
    if has_params {
        let mut params = url.query_pairs_mut();

        if !date_filter.is_empty() {
            if date_filter.eq_ignore_ascii_case("thisweekend") {
                params.append_key_only("thisweekend");
            } else {
                params.append_pair("date", date_filter);
            }
        }

        if type_id != 0 {
            params.append_pair("filmtypeid", &type_id.to_string());
        }

        if !venue_id.is_empty() {
            params.append_pair("loc", venue_id);
        }
    }

    Ok(url)
}
