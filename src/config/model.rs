use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Plays already seen; dropped at extraction time.
    pub excluded_plays: Vec<String>,
    /// Pause before every listing request.
    pub request_delay: Duration,
}
