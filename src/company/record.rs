use serde::{Deserialize, Serialize};

use crate::config::{
    NAME_CAPACITY, SAMPLE_COMPANY_ID, SAMPLE_COMPANY_NAME, SAMPLE_COMPANY_REVENUE,
    SAMPLE_COMPANY_SECTOR, SECTOR_CAPACITY,
};

/// A registered company.
///
/// Fields are set once at construction and only read afterwards. Contents are
/// not validated; see [`Company::oversized_fields`] for the storage bounds
/// used by the course's fixed-size layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub sector: String,
    /// Monthly revenue in reais.
    pub monthly_revenue: f64,
}

impl Company {
    pub fn new(
        id: i32,
        name: impl Into<String>,
        sector: impl Into<String>,
        monthly_revenue: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sector: sector.into(),
            monthly_revenue,
        }
    }

    /// The record used in the exercise handout.
    pub fn sample() -> Self {
        Self::new(
            SAMPLE_COMPANY_ID,
            SAMPLE_COMPANY_NAME,
            SAMPLE_COMPANY_SECTOR,
            SAMPLE_COMPANY_REVENUE,
        )
    }

    /// Names of the text fields whose UTF-8 length would not fit their
    /// fixed-size buffer (one byte of each buffer is the terminator).
    pub fn oversized_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.name.len() >= NAME_CAPACITY {
            fields.push("name");
        }
        if self.sector.len() >= SECTOR_CAPACITY {
            fields.push("sector");
        }
        fields
    }
}
