use eyre::{ensure, Result};
use serde::{Deserialize, Serialize};

/// One OHLC + volume sample, `time` seconds after its chunk's base timestamp.
///
/// The renderer only reads `high` and `low` (and `time` for the axis label);
/// `low <= open, close <= high` is expected upstream but not enforced here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bar {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub tick_volume: f64,
}

/// A contiguous run of bars sharing one base timestamp, ascending in time.
///
/// Index position determines the horizontal slot; the `time` values do not
/// influence spacing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BarDataset {
    /// Epoch seconds of the chunk's first instant.
    pub chunk_start: i64,
    pub bars: Vec<Bar>,
}

impl BarDataset {
    pub fn new(chunk_start: i64, bars: Vec<Bar>) -> Result<Self> {
        let dataset = Self { chunk_start, bars };
        dataset.validate()?;
        Ok(dataset)
    }

    /// A chart session refuses an empty chunk up front rather than drawing a
    /// blank or distorted chart.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.bars.is_empty(), "bar dataset is empty, nothing to chart");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Global `(min, max)` over every bar's high/low, scanned in full.
    pub fn price_bounds(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for bar in &self.bars {
            min = min.min(bar.low.min(bar.high));
            max = max.max(bar.high.max(bar.low));
        }
        (min, max)
    }
}
