// File: crates/story-core/src/scale.rs
// Summary: Linear share scale and day-granularity time scale with rounded output.

use chrono::NaiveDate;

use crate::data::SeriesPoint;
use crate::error::{ChartError, ChartResult};
use crate::geometry::ChartGeometry;

/// Which axis carries time. The reference story runs time down the page
/// (`TimeVertical`); variants may put time across the page instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    TimeVertical,
    TimeHorizontal,
}

/// Share axis: fixed [0, 100] percentage domain mapped to a pixel range.
/// Output positions are rounded to whole pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShareScale {
    range_px: f64,
}

impl ShareScale {
    const DOMAIN: (f64, f64) = (0.0, 100.0);

    pub fn new(range_px: f64) -> Self {
        Self { range_px: range_px.max(0.0) }
    }

    #[inline]
    pub fn to_px(&self, share: f64) -> f64 {
        let (d0, d1) = Self::DOMAIN;
        ((share - d0) / (d1 - d0) * self.range_px).round()
    }

    pub fn range_px(&self) -> f64 {
        self.range_px
    }

    /// Remap the pixel range, leaving the percentage domain untouched.
    pub fn re_range(&mut self, range_px: f64) {
        self.range_px = range_px.max(0.0);
    }
}

/// Time axis: linear in whole days across the data window's date extent.
/// Positions extrapolate linearly past either end of the domain, so a
/// highlight may reference the day after the final row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    domain: (NaiveDate, NaiveDate),
    range_px: f64,
}

impl TimeScale {
    pub fn new(domain: (NaiveDate, NaiveDate), range_px: f64) -> Self {
        Self { domain, range_px: range_px.max(0.0) }
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f64 {
        let (d0, d1) = self.domain;
        let span_days = (d1 - d0).num_days();
        if span_days == 0 {
            return 0.0;
        }
        let offset_days = (date - d0).num_days() as f64;
        (offset_days / span_days as f64 * self.range_px).round()
    }

    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        self.domain
    }

    pub fn range_px(&self) -> f64 {
        self.range_px
    }

    pub fn re_range(&mut self, range_px: f64) {
        self.range_px = range_px.max(0.0);
    }
}

/// The pair of scales a chart instance owns: built on mount, re-ranged on
/// resize, rebuilt only when the data window itself changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePair {
    pub share: ShareScale,
    pub time: TimeScale,
    pub orientation: Orientation,
    /// Number of side-by-side series columns sharing the cross axis; 1 for an
    /// overlaid chart. The share scale spans a single column.
    columns: usize,
}

impl ScalePair {
    /// Derive both scales from a data window and geometry. The domain comes
    /// from the window, not the full dataset, so a narrowed story section
    /// stretches across the full range.
    pub fn build(
        window: &[SeriesPoint],
        geometry: &ChartGeometry,
        orientation: Orientation,
        columns: usize,
    ) -> ChartResult<Self> {
        let first = window.first().ok_or(ChartError::EmptyDataWindow)?;
        let last = window.last().ok_or(ChartError::EmptyDataWindow)?;
        let columns = columns.max(1);
        let (share_range, time_range) = Self::ranges(geometry, orientation, columns);
        Ok(Self {
            share: ShareScale::new(share_range),
            time: TimeScale::new((first.date, last.date), time_range),
            orientation,
            columns,
        })
    }

    /// Remap both ranges for a new geometry. Domains are preserved, so the
    /// data-to-normalized-position mapping survives a resize intact.
    pub fn re_range(&mut self, geometry: &ChartGeometry) {
        let (share_range, time_range) = Self::ranges(geometry, self.orientation, self.columns);
        self.share.re_range(share_range);
        self.time.re_range(time_range);
    }

    /// Cross-axis pixel offset of the `index`-th column.
    pub fn column_offset(&self, index: usize) -> f64 {
        self.share.range_px() * index as f64
    }

    /// Project a (date, share) pair into (x, y) pixels for this orientation.
    #[inline]
    pub fn project(&self, date: NaiveDate, share: f64) -> (f64, f64) {
        match self.orientation {
            Orientation::TimeVertical => (self.share.to_px(share), self.time.to_px(date)),
            Orientation::TimeHorizontal => (self.time.to_px(date), self.share.to_px(share)),
        }
    }

    fn ranges(geometry: &ChartGeometry, orientation: Orientation, columns: usize) -> (f64, f64) {
        let (share_extent, time_extent) = match orientation {
            Orientation::TimeVertical => (geometry.inner_width(), geometry.inner_height()),
            Orientation::TimeHorizontal => (geometry.inner_height(), geometry.inner_width()),
        };
        (share_extent / columns as f64, time_extent)
    }
}
