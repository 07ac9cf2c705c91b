// File: crates/story-core/src/axis.rs
// Summary: Percent-axis model: tick layout over [0, 100] and an anchored title.

use crate::scale::ShareScale;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub px: f64,
}

/// Tick values for the share axis at roughly `count` ticks. The reference
/// chart asks for two, which lands on 0 / 50 / 100.
pub fn share_ticks(count: usize) -> Vec<f64> {
    let count = count.max(1);
    let step = 100.0 / count as f64;
    (0..=count).map(|i| step * i as f64).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisModel {
    pub title: String,
    pub ticks: Vec<Tick>,
    /// Pixel position the title hangs from (the far end of the share range).
    pub title_anchor_px: f64,
}

impl AxisModel {
    pub fn new(title: impl Into<String>, tick_count: usize, scale: &ShareScale) -> Self {
        let mut axis = Self { title: title.into(), ticks: Vec::new(), title_anchor_px: 0.0 };
        axis.reposition(tick_count, scale);
        axis
    }

    /// Recompute tick pixels and the title anchor from the current scale.
    /// Called at build and again after every re-range.
    pub fn reposition(&mut self, tick_count: usize, scale: &ShareScale) {
        self.ticks = share_ticks(tick_count)
            .into_iter()
            .map(|value| Tick { value, px: scale.to_px(value) })
            .collect();
        self.title_anchor_px = scale.range_px();
    }
}
