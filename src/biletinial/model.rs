/// A single listed performance, as scraped. Immutable once extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Raw date text from the listing, e.g. "Nisan - 10 11 12".
    pub raw_dates: String,
    pub name: String,
    pub venue: String,
    pub category: Category,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::IntoStaticStr)]
pub enum Category {
    #[strum(serialize = "tiyatro")]
    Tiyatro,
    #[strum(serialize = "opera-bale")]
    OperaBale,
}

impl Category {
    pub fn slug(&self) -> &'static str {
        self.into()
    }
}

/// One collector run: which listing pages to request.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub categories: Vec<Category>,
    pub city: String,
    /// "YYYY-MM-DD", "thisweekend", or empty for all dates.
    pub date_filter: String,
    pub venue_ids: Vec<String>,
    pub tiyatro_type_ids: Vec<u32>,
    pub opera_type_ids: Vec<u32>,
}

impl ListingQuery {
    /// Film type ids to request for a category; 0 means no type filter.
    pub fn type_ids_for(&self, category: Category) -> Vec<u32> {
        let ids = match category {
            Category::Tiyatro => &self.tiyatro_type_ids,
            Category::OperaBale => &self.opera_type_ids,
        };

        if ids.is_empty() {
            vec![0]
        } else {
            ids.clone()
        }
    }
}
