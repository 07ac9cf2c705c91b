// File: crates/story-core/src/scene.rs
// Summary: Persistent scene-graph node types, mutated in place for the chart's lifetime.

use crate::axis::AxisModel;
use crate::data::Channel;
use crate::theme::Rgba;

/// How a series path is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesStyle {
    /// Stroked polyline through (time, share) points.
    Line,
    /// Filled band between the share baseline and the share edge.
    Area,
}

/// One channel's path. `points` hold projected pixels and are rewritten in
/// place on resize; the node itself lives for the whole mount.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNode {
    pub channel: Channel,
    pub colour: Rgba,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
    /// Cross-axis translation; non-zero only in the `Columns` layout.
    pub column_offset: f64,
    pub opacity: f64,
}

/// The emphasized-range band. Extends `time_extent` pixels along the time
/// axis and bleeds past both cross-axis edges like the reference chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightNode {
    pub time_offset: f64,
    pub time_extent: f64,
    pub cross_offset: f64,
    pub cross_extent: f64,
    pub fill: Rgba,
}

/// Per-channel value readout shown while a highlight is active.
/// An empty `text` is the explicit cleared state.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabelNode {
    pub channel: Channel,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

/// The highlighted date, trailing the band along the time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DateLabelNode {
    pub text: String,
    pub time_offset: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub channel: Channel,
    pub colour: Rgba,
    pub label: &'static str,
    /// Stacking row, in draw order.
    pub row: usize,
}

/// Legend block: anchored to the far cross-axis edge, sliding and fading
/// between its hidden and shown states.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendNode {
    pub entries: Vec<LegendEntry>,
    pub anchor_px: f64,
    pub slide_offset: f64,
    pub opacity: f64,
}

/// Scalar scene attributes addressable by the transition engine. Each key
/// identifies one animatable value on one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrTarget {
    HighlightOffset,
    HighlightExtent,
    DateLabelOffset,
    DateLabelOpacity,
    LegendOffset,
    LegendOpacity,
    PathOpacity(Channel),
    ValueLabelOpacity(Channel),
}

/// The persistent scene: allocated once per mount, mutated through the
/// transition engine, dropped only on unmount.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub paths: Vec<PathNode>,
    pub highlight: HighlightNode,
    pub value_labels: Vec<ValueLabelNode>,
    pub date_label: DateLabelNode,
    pub legend: LegendNode,
    pub axis: AxisModel,
}

impl Scene {
    /// Current value of an animatable attribute; the `from` of any retarget.
    pub fn attr(&self, target: AttrTarget) -> f64 {
        match target {
            AttrTarget::HighlightOffset => self.highlight.time_offset,
            AttrTarget::HighlightExtent => self.highlight.time_extent,
            AttrTarget::DateLabelOffset => self.date_label.time_offset,
            AttrTarget::DateLabelOpacity => self.date_label.opacity,
            AttrTarget::LegendOffset => self.legend.slide_offset,
            AttrTarget::LegendOpacity => self.legend.opacity,
            AttrTarget::PathOpacity(channel) => {
                self.path(channel).map(|p| p.opacity).unwrap_or(0.0)
            }
            AttrTarget::ValueLabelOpacity(channel) => {
                self.value_label(channel).map(|l| l.opacity).unwrap_or(0.0)
            }
        }
    }

    /// Write a sampled attribute value back into the scene.
    pub fn set_attr(&mut self, target: AttrTarget, value: f64) {
        match target {
            AttrTarget::HighlightOffset => self.highlight.time_offset = value,
            AttrTarget::HighlightExtent => self.highlight.time_extent = value,
            AttrTarget::DateLabelOffset => self.date_label.time_offset = value,
            AttrTarget::DateLabelOpacity => self.date_label.opacity = value,
            AttrTarget::LegendOffset => self.legend.slide_offset = value,
            AttrTarget::LegendOpacity => self.legend.opacity = value,
            AttrTarget::PathOpacity(channel) => {
                if let Some(path) = self.path_mut(channel) {
                    path.opacity = value;
                }
            }
            AttrTarget::ValueLabelOpacity(channel) => {
                if let Some(label) = self.value_label_mut(channel) {
                    label.opacity = value;
                }
            }
        }
    }

    pub fn path(&self, channel: Channel) -> Option<&PathNode> {
        self.paths.iter().find(|p| p.channel == channel)
    }

    pub fn path_mut(&mut self, channel: Channel) -> Option<&mut PathNode> {
        self.paths.iter_mut().find(|p| p.channel == channel)
    }

    pub fn value_label(&self, channel: Channel) -> Option<&ValueLabelNode> {
        self.value_labels.iter().find(|l| l.channel == channel)
    }

    pub fn value_label_mut(&mut self, channel: Channel) -> Option<&mut ValueLabelNode> {
        self.value_labels.iter_mut().find(|l| l.channel == channel)
    }
}
