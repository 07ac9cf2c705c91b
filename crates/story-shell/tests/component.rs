// File: crates/story-shell/tests/component.rs
// Purpose: Shell lifecycle: build-once mounting, prop diffing, unmounted no-ops.

use chrono::NaiveDate;

use story_core::{
    Channel, ChartConfig, ChartError, Dataset, HighlightWindow, SeriesPoint,
};
use story_shell::{ChartProps, FixedViewport, StoryChart};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 9, d).expect("valid date")
}

fn reference_dataset() -> Dataset {
    Dataset::try_new(vec![
        SeriesPoint::try_new(day(9), 2.0, 10.0, 8.0, 12.0).expect("row"),
        SeriesPoint::try_new(day(10), 3.0, 11.0, 9.0, 13.0).expect("row"),
    ])
    .expect("dataset")
}

fn shell() -> StoryChart<FixedViewport> {
    let config = ChartConfig { channels: Channel::ALL.to_vec(), ..ChartConfig::default() };
    StoryChart::new(reference_dataset(), config, FixedViewport::new(1200.0, 800.0))
}

fn settle(chart: &mut StoryChart<FixedViewport>) {
    while chart.chart().map(|c| c.is_animating()).unwrap_or(false) {
        chart.advance(16.0).expect("mounted");
    }
}

#[test]
fn props_before_mount_do_not_build_and_fold_into_the_first_paint() {
    let mut chart = shell();
    assert!(!chart.is_mounted());

    // Prop churn before mount: no scene may exist yet.
    chart.set_props(ChartProps { legend: true, ..ChartProps::default() });
    chart.set_props(ChartProps {
        legend: true,
        highlight: Some(HighlightWindow::single_day(day(10))),
        ..ChartProps::default()
    });
    assert!(chart.scene().is_none());

    chart.mount().expect("mount");
    settle(&mut chart);
    let scene = chart.scene().expect("scene");
    // The accumulated props are all reflected in the single build.
    assert_eq!(scene.legend.opacity, 1.0);
    assert!(scene.highlight.time_extent > 0.0);
}

#[test]
fn remounting_while_mounted_never_rebuilds_the_scene() {
    let mut chart = shell();
    chart.mount().expect("mount");
    chart.set_props(ChartProps {
        highlight: Some(HighlightWindow::new(day(10), day(11))),
        ..ChartProps::default()
    });
    settle(&mut chart);
    let extent = chart.scene().expect("scene").highlight.time_extent;
    assert!(extent > 0.0);

    // A rebuild would reset the band to zero extent.
    chart.mount().expect("second mount is a no-op");
    assert_eq!(chart.scene().expect("scene").highlight.time_extent, extent);
}

#[test]
fn only_changed_props_reach_the_engine() {
    let mut chart = shell();
    chart.mount().expect("mount");
    settle(&mut chart);

    // Identical props: nothing to animate.
    chart.set_props(ChartProps::default());
    assert!(!chart.chart().expect("mounted").is_animating());

    // One changed piece starts exactly that transition.
    chart.set_props(ChartProps { legend: true, ..ChartProps::default() });
    assert!(chart.chart().expect("mounted").is_animating());
    settle(&mut chart);
    assert_eq!(chart.scene().expect("scene").legend.opacity, 1.0);
    assert_eq!(chart.scene().expect("scene").highlight.time_extent, 0.0);
}

#[test]
fn unmounted_operations_are_recoverable_no_ops() {
    let mut chart = shell();
    assert_eq!(chart.on_resize(), Err(ChartError::UnmountedOperation));
    assert_eq!(chart.advance(16.0), Err(ChartError::UnmountedOperation));

    chart.mount().expect("mount");
    chart.unmount();
    assert!(!chart.is_mounted());
    assert_eq!(chart.on_resize(), Err(ChartError::UnmountedOperation));
    // Declarative updates stay legal; they wait for the next mount.
    chart.set_props(ChartProps { legend: true, ..ChartProps::default() });
    assert!(chart.scene().is_none());

    // Unmounting twice is fine.
    chart.unmount();
}

#[test]
fn remount_after_unmount_builds_a_fresh_scene() {
    let mut chart = shell();
    chart.mount().expect("mount");
    chart.set_props(ChartProps {
        highlight: Some(HighlightWindow::new(day(10), day(11))),
        ..ChartProps::default()
    });
    settle(&mut chart);
    chart.unmount();

    chart.mount().expect("remount");
    settle(&mut chart);
    // The retained highlight prop is applied to the fresh scene.
    assert!(chart.scene().expect("scene").highlight.time_extent > 0.0);
}

#[test]
fn resize_samples_the_injected_provider() {
    let mut chart = shell();
    chart.mount().expect("mount");
    chart.set_props(ChartProps {
        highlight: Some(HighlightWindow::new(day(10), day(11))),
        ..ChartProps::default()
    });
    settle(&mut chart);

    chart.provider_mut().set(400.0, 800.0);
    chart.on_resize().expect("resize");
    settle(&mut chart);

    let inner = chart.chart().expect("mounted").geometry().inner_width();
    assert_eq!(inner, 360.0);
    assert_eq!(chart.scene().expect("scene").axis.title_anchor_px, 360.0);
    // Highlight still aligned to its dates after the resize.
    let scales = *chart.chart().expect("mounted").scales();
    let expected = scales.time.to_px(day(11)) - scales.time.to_px(day(10));
    assert_eq!(chart.scene().expect("scene").highlight.time_extent, expected);
}

#[test]
fn optional_channel_flag_drives_one_channel() {
    let mut chart = shell().with_optional_channel(Some(Channel::Bbc));
    chart.mount().expect("mount");
    settle(&mut chart);

    chart.set_props(ChartProps { channel_visible: false, ..ChartProps::default() });
    settle(&mut chart);
    let scene = chart.scene().expect("scene");
    assert_eq!(scene.path(Channel::Bbc).expect("bbc").opacity, 0.0);
    assert_eq!(scene.path(Channel::Cnn).expect("cnn").opacity, 1.0);
}

#[test]
fn mounting_an_empty_dataset_degrades_without_panicking() {
    let dataset = Dataset::try_new(Vec::new()).expect("empty dataset");
    let config = ChartConfig::default();
    let mut chart = StoryChart::new(dataset, config, FixedViewport::new(1200.0, 800.0));

    assert_eq!(chart.mount(), Err(ChartError::EmptyDataWindow));
    assert!(!chart.is_mounted());
    // The shell stays usable as a prop sink.
    chart.set_props(ChartProps { legend: true, ..ChartProps::default() });
}
