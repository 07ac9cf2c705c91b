// File: crates/story-core/src/chart.rs
// Summary: ChartScene: builds the persistent scene once, then mutates it via transitions.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::animate::{Animator, Easing};
use crate::axis::AxisModel;
use crate::data::{Channel, Dataset, SeriesPoint};
use crate::error::ChartResult;
use crate::geometry::{ChartGeometry, MarginPolicy, Viewport};
use crate::scale::{Orientation, ScalePair};
use crate::scene::{
    AttrTarget, DateLabelNode, HighlightNode, LegendEntry, LegendNode, PathNode, Scene,
    SeriesStyle, ValueLabelNode,
};
use crate::theme::{channel_colour, Theme};

/// Duration of every scene transition, in milliseconds.
pub const TRANSITION_MS: f64 = 300.0;

/// How far the hidden legend sits off its anchored position.
const LEGEND_HIDDEN_SLIDE_PX: f64 = 16.0;

/// The highlight band bleeds past both cross-axis edges.
const HIGHLIGHT_CROSS_BLEED_PX: f64 = 100.0;

/// Requested share-axis tick count; lands on 0 / 50 / 100.
const AXIS_TICK_COUNT: usize = 2;

/// Gap between the band's trailing edge and the date label.
const DATE_LABEL_TRAIL_PX: f64 = 5.0;

/// How the configured channels share the cross axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesLayout {
    /// All channels overlaid on the full share range.
    Overlay,
    /// One column per channel, small-multiple style.
    Columns,
}

/// Everything that distinguishes one chart variant from another. Variants are
/// configuration, not separate components.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Explicit draw order; controls z-stacking and legend order.
    pub channels: Vec<Channel>,
    pub orientation: Orientation,
    pub layout: SeriesLayout,
    pub style: SeriesStyle,
    pub margin_policy: MarginPolicy,
    pub theme: Theme,
    pub axis_title: String,
    /// Initial legend visibility.
    pub legend_visible: bool,
    /// Narrow the data window to rows on or after this date.
    pub window_from: Option<NaiveDate>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            channels: Channel::ALL.to_vec(),
            orientation: Orientation::TimeVertical,
            layout: SeriesLayout::Overlay,
            style: SeriesStyle::Line,
            margin_policy: MarginPolicy::default(),
            theme: Theme::default(),
            axis_title: "% coverage".to_string(),
            legend_visible: false,
            window_from: None,
        }
    }
}

/// The emphasized date range. A missing `to` means a single-day window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl HighlightWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn single_day(from: NaiveDate) -> Self {
        Self { from, to: from + Days::new(1) }
    }

    pub fn from_range(from: NaiveDate, to: Option<NaiveDate>) -> Self {
        match to {
            Some(to) => Self::new(from, to),
            None => Self::single_day(from),
        }
    }
}

/// The imperative half of the chart: owns scales, geometry and the persistent
/// scene, and is only ever mutated through the operations below. Built at most
/// once per mount; dropping it is the dispose.
#[derive(Debug)]
pub struct ChartScene {
    config: ChartConfig,
    geometry: ChartGeometry,
    scales: ScalePair,
    scene: Scene,
    animator: Animator<AttrTarget>,
    highlight: Option<HighlightWindow>,
    legend_visible: bool,
    channel_visible: BTreeMap<Channel, bool>,
}

impl ChartScene {
    /// Build scales and allocate every scene node. Calling this twice for one
    /// mount would duplicate the scene; the shell enforces build-at-most-once.
    pub fn build(dataset: &Dataset, config: ChartConfig, viewport: Viewport) -> ChartResult<Self> {
        let geometry = ChartGeometry::derive(viewport, config.margin_policy);
        let window = Self::window_of(dataset, &config);
        let columns = match config.layout {
            SeriesLayout::Overlay => 1,
            SeriesLayout::Columns => config.channels.len(),
        };
        let scales = ScalePair::build(window, &geometry, config.orientation, columns)?;

        let paths = config
            .channels
            .iter()
            .enumerate()
            .map(|(index, &channel)| PathNode {
                channel,
                colour: channel_colour(channel),
                style: config.style,
                points: Self::project_series(window, &scales, channel),
                column_offset: match config.layout {
                    SeriesLayout::Overlay => 0.0,
                    SeriesLayout::Columns => scales.column_offset(index),
                },
                opacity: 1.0,
            })
            .collect();

        let cross_extent = Self::cross_extent(&geometry, config.orientation);
        let highlight = HighlightNode {
            time_offset: 0.0,
            time_extent: 0.0,
            cross_offset: -HIGHLIGHT_CROSS_BLEED_PX,
            cross_extent: cross_extent + 2.0 * HIGHLIGHT_CROSS_BLEED_PX,
            fill: config.theme.highlight_fill,
        };

        let value_labels = config
            .channels
            .iter()
            .map(|&channel| ValueLabelNode {
                channel,
                text: String::new(),
                x: 0.0,
                y: 0.0,
                opacity: 0.0,
            })
            .collect();

        let date_label = DateLabelNode { text: String::new(), time_offset: 0.0, opacity: 0.0 };

        let legend = LegendNode {
            entries: config
                .channels
                .iter()
                .enumerate()
                .map(|(row, &channel)| LegendEntry {
                    channel,
                    colour: channel_colour(channel),
                    label: channel.label(),
                    row,
                })
                .collect(),
            anchor_px: cross_extent,
            slide_offset: if config.legend_visible { 0.0 } else { LEGEND_HIDDEN_SLIDE_PX },
            opacity: if config.legend_visible { 1.0 } else { 0.0 },
        };

        let axis = AxisModel::new(config.axis_title.clone(), AXIS_TICK_COUNT, &scales.share);

        debug!(
            channels = config.channels.len(),
            rows = window.len(),
            width = geometry.viewport.width,
            height = geometry.viewport.height,
            "scene built"
        );

        let channel_visible = config.channels.iter().map(|&c| (c, true)).collect();
        let legend_visible = config.legend_visible;
        Ok(Self {
            config,
            geometry,
            scales,
            scene: Scene { paths, highlight, value_labels, date_label, legend, axis },
            animator: Animator::new(),
            highlight: None,
            legend_visible,
            channel_visible,
        })
    }

    /// Move the highlight band to `window`, or shrink it away for `None`.
    /// Value labels show the dataset row matching `window.from` exactly; a
    /// non-matching date is the explicit empty state, never a guess.
    pub fn update_highlight(&mut self, dataset: &Dataset, window: Option<HighlightWindow>) {
        self.highlight = window;
        match window {
            Some(window) => {
                let from_px = self.scales.time.to_px(window.from);
                let to_px = self.scales.time.to_px(window.to);
                let extent = to_px - from_px;
                // Band centered on the `from` position, as in the source story.
                let offset = from_px - extent / 2.0;

                match dataset.row_at(window.from) {
                    Ok(row) => self.place_value_labels(*row, window),
                    Err(error) => {
                        debug!(%error, "highlight date has no dataset row; clearing value labels");
                        self.clear_value_labels();
                    }
                }

                // Date label: text, then position, then opacity.
                self.scene.date_label.text = window.from.format("%B %-d").to_string();
                self.retarget(AttrTarget::DateLabelOffset, to_px + DATE_LABEL_TRAIL_PX);
                self.retarget(AttrTarget::DateLabelOpacity, 1.0);

                self.retarget(AttrTarget::HighlightOffset, offset);
                self.retarget(AttrTarget::HighlightExtent, extent);
            }
            None => {
                self.clear_value_labels();
                self.scene.date_label.text.clear();
                self.retarget(AttrTarget::DateLabelOffset, 0.0);
                self.retarget(AttrTarget::DateLabelOpacity, 0.0);
                self.retarget(AttrTarget::HighlightOffset, 0.0);
                self.retarget(AttrTarget::HighlightExtent, 0.0);
            }
        }
    }

    /// Slide and fade the legend. Targets derive from the boolean alone, so
    /// repeated calls with the same value retarget to identical end states.
    pub fn set_legend_visible(&mut self, visible: bool) {
        self.legend_visible = visible;
        let (offset, opacity) = if visible { (0.0, 1.0) } else { (LEGEND_HIDDEN_SLIDE_PX, 0.0) };
        self.retarget(AttrTarget::LegendOffset, offset);
        self.retarget(AttrTarget::LegendOpacity, opacity);
    }

    /// Fade one channel's path in or out, independent of the others.
    pub fn set_channel_visible(&mut self, channel: Channel, visible: bool) {
        if !self.config.channels.contains(&channel) {
            debug!(channel = channel.wire_id(), "visibility toggle for unconfigured channel ignored");
            return;
        }
        self.channel_visible.insert(channel, visible);
        let opacity = if visible { 1.0 } else { 0.0 };
        self.retarget(AttrTarget::PathOpacity(channel), opacity);
        // A hidden channel must not keep a readable value label.
        if self.highlight.is_some() {
            self.retarget(AttrTarget::ValueLabelOpacity(channel), opacity);
        }
    }

    /// Re-derive geometry, re-range the scales and re-project every node from
    /// unchanged domain data, then re-apply the current highlight so nothing
    /// desyncs from the data at the new size.
    pub fn resize(&mut self, dataset: &Dataset, viewport: Viewport) {
        self.geometry = ChartGeometry::derive(viewport, self.config.margin_policy);
        self.scales.re_range(&self.geometry);

        let window = Self::window_of(dataset, &self.config);
        for (index, path) in self.scene.paths.iter_mut().enumerate() {
            path.points = Self::project_series(window, &self.scales, path.channel);
            path.column_offset = match self.config.layout {
                SeriesLayout::Overlay => 0.0,
                SeriesLayout::Columns => self.scales.column_offset(index),
            };
        }

        let cross_extent = Self::cross_extent(&self.geometry, self.config.orientation);
        self.scene.highlight.cross_offset = -HIGHLIGHT_CROSS_BLEED_PX;
        self.scene.highlight.cross_extent = cross_extent + 2.0 * HIGHLIGHT_CROSS_BLEED_PX;
        self.scene.legend.anchor_px = cross_extent;
        self.scene.axis.reposition(AXIS_TICK_COUNT, &self.scales.share);

        debug!(
            width = viewport.width,
            height = viewport.height,
            "resized; re-applying highlight"
        );
        let last = self.highlight;
        self.update_highlight(dataset, last);
    }

    /// Drive active transitions forward by `dt_ms` of wall time. Non-blocking;
    /// the caller decides the frame cadence.
    pub fn advance(&mut self, dt_ms: f64) {
        let scene = &mut self.scene;
        self.animator.advance(dt_ms, |target, value| scene.set_attr(target, value));
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scales(&self) -> &ScalePair {
        &self.scales
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn highlight(&self) -> Option<HighlightWindow> {
        self.highlight
    }

    pub fn legend_visible(&self) -> bool {
        self.legend_visible
    }

    pub fn channel_visible(&self, channel: Channel) -> bool {
        self.channel_visible.get(&channel).copied().unwrap_or(false)
    }

    pub fn is_animating(&self) -> bool {
        !self.animator.is_idle()
    }

    // ---- helpers ------------------------------------------------------------

    fn window_of<'d>(dataset: &'d Dataset, config: &ChartConfig) -> &'d [SeriesPoint] {
        match config.window_from {
            Some(from) => dataset.window_from(from),
            None => dataset.points(),
        }
    }

    fn project_series(window: &[SeriesPoint], scales: &ScalePair, channel: Channel) -> Vec<(f64, f64)> {
        window
            .iter()
            .map(|point| scales.project(point.date, point.share(channel)))
            .collect()
    }

    fn cross_extent(geometry: &ChartGeometry, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::TimeVertical => geometry.inner_width(),
            Orientation::TimeHorizontal => geometry.inner_height(),
        }
    }

    /// Per-channel readouts for the highlighted row. Writes are ordered text,
    /// then position, then opacity.
    fn place_value_labels(&mut self, row: SeriesPoint, window: HighlightWindow) {
        for index in 0..self.scene.value_labels.len() {
            let channel = self.scene.value_labels[index].channel;
            let share = row.share(channel);
            let (x, y) = self.scales.project(window.from, share);
            let column_offset = self
                .scene
                .path(channel)
                .map(|p| p.column_offset)
                .unwrap_or(0.0);
            let label = &mut self.scene.value_labels[index];
            label.text = format!("{share}%");
            match self.scales.orientation {
                Orientation::TimeVertical => {
                    label.x = x + column_offset;
                    label.y = y;
                }
                Orientation::TimeHorizontal => {
                    label.x = x;
                    label.y = y + column_offset;
                }
            }
            let visible = self.channel_visible.get(&channel).copied().unwrap_or(true);
            self.retarget(
                AttrTarget::ValueLabelOpacity(channel),
                if visible { 1.0 } else { 0.0 },
            );
        }
    }

    /// Explicit empty state: no text, origin position, fading out.
    fn clear_value_labels(&mut self) {
        for index in 0..self.scene.value_labels.len() {
            let channel = self.scene.value_labels[index].channel;
            let label = &mut self.scene.value_labels[index];
            label.text.clear();
            label.x = 0.0;
            label.y = 0.0;
            self.retarget(AttrTarget::ValueLabelOpacity(channel), 0.0);
        }
    }

    /// All scene transitions run through here: current sampled value as the
    /// start, fixed duration, ease-cubic. A repeat call supersedes in flight.
    fn retarget(&mut self, target: AttrTarget, to: f64) {
        let from = self.scene.attr(target);
        self.animator.animate(target, from, to, TRANSITION_MS, Easing::CubicInOut);
    }
}
