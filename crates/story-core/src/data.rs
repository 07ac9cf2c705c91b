// File: crates/story-core/src/data.rs
// Summary: Channel identifiers and the immutable daily coverage dataset.

use chrono::NaiveDate;

use crate::error::{ChartError, ChartResult};

/// The cable-news channels a story can draw. The set is closed; draw order is
/// chosen per chart via `ChartConfig`, not by this enum's ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Bbc,
    Msnbc,
    Cnn,
    Fox,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::Bbc, Channel::Msnbc, Channel::Cnn, Channel::Fox];

    /// Identifier used by upstream data feeds.
    pub fn wire_id(&self) -> &'static str {
        match self {
            Channel::Bbc => "BBCNEWS",
            Channel::Msnbc => "MSNBCW",
            Channel::Cnn => "CNNW",
            Channel::Fox => "FOXNEWSW",
        }
    }

    /// Short on-screen label (legend entries, value labels).
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Bbc => "BBC",
            Channel::Msnbc => "MSNBC",
            Channel::Cnn => "CNN",
            Channel::Fox => "FOX",
        }
    }

    pub fn from_wire_id(id: &str) -> Option<Channel> {
        Channel::ALL.iter().copied().find(|c| c.wire_id() == id)
    }
}

/// One day's per-channel coverage share. Shares are independent percentages
/// in [0, 100]; they are not required to sum to 100.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub bbc: f64,
    pub msnbc: f64,
    pub cnn: f64,
    pub fox: f64,
}

impl SeriesPoint {
    /// Construct a point, enforcing the [0, 100] share bound per channel.
    pub fn try_new(date: NaiveDate, bbc: f64, msnbc: f64, cnn: f64, fox: f64) -> ChartResult<Self> {
        let point = Self { date, bbc, msnbc, cnn, fox };
        for channel in Channel::ALL {
            let share = point.share(channel);
            if !(0.0..=100.0).contains(&share) || !share.is_finite() {
                return Err(ChartError::InvalidData {
                    reason: format!("{} share {share} out of [0, 100] on {date}", channel.wire_id()),
                });
            }
        }
        Ok(point)
    }

    pub fn share(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Bbc => self.bbc,
            Channel::Msnbc => self.msnbc,
            Channel::Cnn => self.cnn,
            Channel::Fox => self.fox,
        }
    }
}

/// Ordered daily series, strictly increasing by date, immutable once built.
/// The shell owns the dataset; the core only ever borrows it.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    points: Vec<SeriesPoint>,
}

impl Dataset {
    /// Validate ordering on construction; duplicates and regressions are
    /// loader bugs surfaced as `InvalidData` rather than silent misdraws.
    pub fn try_new(points: Vec<SeriesPoint>) -> ChartResult<Self> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(ChartError::InvalidData {
                    reason: format!("dates not strictly increasing: {} then {}", pair[0].date, pair[1].date),
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Exact-date lookup. There is deliberately no nearest-neighbor fallback:
    /// a date between rows is a `MissingHighlightMatch`, not a guess.
    pub fn row_at(&self, date: NaiveDate) -> ChartResult<&SeriesPoint> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .map(|i| &self.points[i])
            .map_err(|_| ChartError::MissingHighlightMatch { date })
    }

    /// First and last date of the series, or `EmptyDataWindow` when empty.
    pub fn date_extent(&self) -> ChartResult<(NaiveDate, NaiveDate)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Ok((first.date, last.date)),
            _ => Err(ChartError::EmptyDataWindow),
        }
    }

    /// Sub-window starting at `from` (inclusive), used when a story section
    /// narrows the visible range.
    pub fn window_from(&self, from: NaiveDate) -> &[SeriesPoint] {
        let start = self.points.partition_point(|p| p.date < from);
        &self.points[start..]
    }
}
