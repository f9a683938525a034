use serde::{Deserialize, Serialize};

/// State tag of a mutable quote draft.
pub const DEVIS_TAG: &str = "devis";
/// Substring marking any terminal invoice state tag.
pub const FACTURE_TAG: &str = "facture";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub write_date: String,
    pub duration: u32,
    pub state: String,
}

impl Document {
    pub fn is_invoice(&self) -> bool {
        self.state.contains(FACTURE_TAG)
    }
}

impl Default for Document {
    fn default() -> Self {
        Document {
            id: 0,
            name: String::new(),
            date: String::new(),
            write_date: String::new(),
            duration: 1,
            state: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub event_name: String,
    pub address: String,
    pub phone: String,
    pub mail: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub item_type: String,
    pub total: u32,
    pub available: u32,
    pub value: f64,
    pub contrib: f64,
    pub usage_count: u32,
    pub margin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedItem {
    pub item: CatalogItem,
    pub quantity: u32,
    pub duration: u32,
    pub total_price: f64,
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Utilities {
    pub tech_qty: u32,
    pub tech_rate: f64,
    pub tech_hourly: bool,
    pub transport_km: u32,
    pub transport_rate: f64,
    pub membership: bool,
    pub discount_euro: f64,
}

impl Utilities {
    /// Rates below 100 are hourly tariffs, flat per-day rates otherwise.
    /// The flag is derived here and nowhere else.
    pub fn set_tech_rate(&mut self, rate: f64) {
        self.tech_rate = rate;
        self.tech_hourly = rate > 0.0 && rate < 100.0;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingFormula {
    pub contrib_following: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub client_name: String,
    pub event_name: String,
    pub state: String,
}

impl DocumentSummary {
    pub fn is_invoice(&self) -> bool {
        self.state.contains(FACTURE_TAG)
    }
}
