// File: crates/story-shell/src/marker.rs
// Summary: Typed scrollytelling marker commands folded into chart props.

use chrono::NaiveDate;
use serde::Deserialize;

use story_core::{ChartError, ChartResult, HighlightWindow};

use crate::component::ChartProps;

/// Sentinel `fromDate` that clears the highlight instead of setting one.
const CLEAR_SENTINEL: &str = "none";

/// One marker activation from the story scroller. Absent fields mean
/// "no change"; `fromDate: "none"` clears the highlight; a `fromDate` without
/// a `toDate` is a single-day window.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerCommand {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub legend: Option<bool>,
    pub channel_visible: Option<bool>,
}

impl MarkerCommand {
    /// Fold this command into the previous props. Errors are recoverable: a
    /// malformed date leaves the previous props in force.
    pub fn apply_to(&self, props: ChartProps) -> ChartResult<ChartProps> {
        let mut next = props;
        if let Some(legend) = self.legend {
            next.legend = legend;
        }
        if let Some(visible) = self.channel_visible {
            next.channel_visible = visible;
        }
        if let Some(from) = self.from_date.as_deref() {
            if from == CLEAR_SENTINEL {
                next.highlight = None;
            } else {
                let from = parse_marker_date(from)?;
                let to = self.to_date.as_deref().map(parse_marker_date).transpose()?;
                next.highlight = Some(HighlightWindow::from_range(from, to));
            }
        }
        Ok(next)
    }
}

/// Parse the scroller's compact `YYYYMMDD` date form.
pub fn parse_marker_date(raw: &str) -> ChartResult<NaiveDate> {
    let invalid = || ChartError::InvalidMarkerDate { raw: raw.to_string() };
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = raw[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = raw[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = raw[6..8].parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}
