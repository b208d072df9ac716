use crate::biletinial::model::Event;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/**
Events grouped under their "Ay - GG" keys, spanning every day between the
earliest and latest parsed key. Gap days carry an empty list; raw strings that
yielded no key are kept as keys themselves so no event is lost.
*/
pub type EventsByDate = BTreeMap<String, Vec<Event>>;

/// An event read back from a report file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEvent {
    pub date: NaiveDate,
    pub name: String,
    /// The detail text exactly as it appeared, minus the leading bullet.
    pub full_detail: String,
}
