// File: crates/story-shell/src/lib.rs
// Summary: Shell library entry point; exports the component, marker adapter and viewport trait.

pub mod component;
pub mod marker;
pub mod viewport;

pub use component::{ChartProps, StoryChart};
pub use marker::{parse_marker_date, MarkerCommand};
pub use viewport::{FixedViewport, ViewportProvider};
