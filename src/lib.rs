pub mod biletinial;
pub mod config;
pub mod dates;
pub mod logging;
pub mod plan;
pub mod report;
