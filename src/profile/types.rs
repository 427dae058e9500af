use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Industry a startup operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Industry {
    Technology,
    Healthcare,
    Finance,
    Education,
    Energy,
    #[serde(rename = "Real Estate")]
    RealEstate,
    #[serde(rename = "Consumer Goods")]
    ConsumerGoods,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Energy,
        Industry::RealEstate,
        Industry::ConsumerGoods,
        Industry::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Education => "Education",
            Industry::Energy => "Energy",
            Industry::RealEstate => "Real Estate",
            Industry::ConsumerGoods => "Consumer Goods",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A startup as submitted for evaluation.
///
/// Monetary amounts share one (unspecified) currency unit. Extra fields present
/// in stored records (ids, upload URLs, timestamps) are ignored on load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StartupProfile {
    pub company_name: String,
    pub industry: Industry,
    pub founding_date: NaiveDate,
    pub business_model: String,
    pub funding_needed: f64,
    /// Percentage of equity offered, 0-100
    pub equity_offered: f64,
    pub team_size: u32,
    pub team_experience: String,
    pub current_revenue: f64,
    pub traction_metrics: String,
    pub market_size: f64,
    pub competition_analysis: String,
}
