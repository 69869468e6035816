//! Candle data model and series loading.

pub mod signals;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Indices the board knows about, with their exchange security ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketIndex {
    Nifty,
    BankNifty,
    Sensex,
}

impl MarketIndex {
    pub const ALL: [MarketIndex; 3] =
        [MarketIndex::Nifty, MarketIndex::BankNifty, MarketIndex::Sensex];

    pub fn name(self) -> &'static str {
        match self {
            MarketIndex::Nifty => "NIFTY",
            MarketIndex::BankNifty => "BANKNIFTY",
            MarketIndex::Sensex => "SENSEX",
        }
    }

    pub fn security_id(self) -> &'static str {
        match self {
            MarketIndex::Nifty => "13",
            MarketIndex::BankNifty => "25",
            MarketIndex::Sensex => "51",
        }
    }
}

/// One OHLC bar of the base intraday series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

/// Candle series per index name, as stored on disk.
pub type SeriesMap = BTreeMap<String, Vec<Candle>>;

/// Loads the series document. A missing file is an empty board, not an
/// error; a malformed file is.
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<SeriesMap> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(SeriesMap::new());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading candle data from {}", path.display()))?;
    let series: SeriesMap = serde_json::from_str(&content)
        .with_context(|| format!("parsing candle data in {}", path.display()))?;
    Ok(series)
}
