// File: crates/story-shell/src/component.rs
// Summary: Declarative shell owning lifecycle and prop diffing over the imperative scene.

use tracing::debug;

use story_core::{
    ChartConfig, ChartError, ChartResult, ChartScene, Channel, Dataset, HighlightWindow, Scene,
};

use crate::marker::MarkerCommand;
use crate::viewport::ViewportProvider;

/// The external state the shell owns. Each field diffs independently; a prop
/// update touches only the scene mutations for fields that changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartProps {
    pub highlight: Option<HighlightWindow>,
    pub legend: bool,
    /// Visibility of the configured optional channel.
    pub channel_visible: bool,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self { highlight: None, legend: false, channel_visible: true }
    }
}

/// The declarative half of the chart. Owns the dataset, the current props and
/// the mounted scene; guarantees the scene is built at most once per mount and
/// that no declarative update ever rebuilds it.
///
/// Lifecycle: Unmounted -> Mounted -> Unmounted. Imperative operations while
/// unmounted are recoverable `UnmountedOperation` no-ops.
pub struct StoryChart<P: ViewportProvider> {
    dataset: Dataset,
    config: ChartConfig,
    provider: P,
    /// Which channel the marker `channelVisible` flag controls, if any.
    optional_channel: Option<Channel>,
    props: ChartProps,
    mounted: Option<ChartScene>,
}

impl<P: ViewportProvider> StoryChart<P> {
    pub fn new(dataset: Dataset, config: ChartConfig, provider: P) -> Self {
        Self {
            dataset,
            config,
            provider,
            optional_channel: Some(Channel::Bbc),
            props: ChartProps::default(),
            mounted: None,
        }
    }

    pub fn with_optional_channel(mut self, channel: Option<Channel>) -> Self {
        self.optional_channel = channel;
        self
    }

    /// Enter the Mounted state: build scales and scene once, then bring the
    /// scene in line with whatever props accumulated before the first paint.
    /// A second mount while mounted is a no-op; the scene is never rebuilt.
    pub fn mount(&mut self) -> ChartResult<()> {
        if self.mounted.is_some() {
            debug!("mount while mounted ignored; scene is built at most once");
            return Ok(());
        }
        let mut config = self.config.clone();
        config.legend_visible = self.props.legend;
        let mut chart = ChartScene::build(&self.dataset, config, self.provider.size())?;
        if self.props.highlight.is_some() {
            chart.update_highlight(&self.dataset, self.props.highlight);
        }
        if let Some(channel) = self.optional_channel {
            if !self.props.channel_visible {
                chart.set_channel_visible(channel, false);
            }
        }
        self.mounted = Some(chart);
        Ok(())
    }

    /// Leave the Mounted state. The scene and its nodes are dropped here,
    /// exactly once; repeated unmounts are no-ops.
    pub fn unmount(&mut self) {
        if self.mounted.take().is_some() {
            debug!("unmounted; scene disposed");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Declarative update: store the new props and, if mounted, forward each
    /// changed piece to its scene operation. Never rebuilds the scene; props
    /// set while unmounted simply wait for the next mount.
    pub fn set_props(&mut self, next: ChartProps) {
        let prev = self.props;
        self.props = next;

        let Some(chart) = self.mounted.as_mut() else {
            return;
        };
        if prev.highlight != next.highlight {
            chart.update_highlight(&self.dataset, next.highlight);
        }
        if prev.legend != next.legend {
            chart.set_legend_visible(next.legend);
        }
        if prev.channel_visible != next.channel_visible {
            if let Some(channel) = self.optional_channel {
                chart.set_channel_visible(channel, next.channel_visible);
            }
        }
    }

    /// Fold a marker command into the current props and apply the result.
    /// A malformed command leaves the props untouched.
    pub fn apply_marker(&mut self, command: &MarkerCommand) -> ChartResult<()> {
        let next = command.apply_to(self.props)?;
        self.set_props(next);
        Ok(())
    }

    /// Resize listener body: re-sample the viewport provider and let the
    /// scene re-project itself.
    pub fn on_resize(&mut self) -> ChartResult<()> {
        let viewport = self.provider.size();
        let chart = self.mounted.as_mut().ok_or(ChartError::UnmountedOperation)?;
        chart.resize(&self.dataset, viewport);
        Ok(())
    }

    /// Frame tick: drive in-flight transitions.
    pub fn advance(&mut self, dt_ms: f64) -> ChartResult<()> {
        let chart = self.mounted.as_mut().ok_or(ChartError::UnmountedOperation)?;
        chart.advance(dt_ms);
        Ok(())
    }

    pub fn props(&self) -> ChartProps {
        self.props
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.mounted.as_ref().map(ChartScene::scene)
    }

    pub fn chart(&self) -> Option<&ChartScene> {
        self.mounted.as_ref()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }
}
