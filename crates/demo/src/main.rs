// File: crates/demo/src/main.rs
// Summary: Demo loads a daily-coverage JSON file (or synthesizes one) and replays a marker script.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use story_core::{Channel, ChartConfig, Dataset, Orientation, SeriesPoint};
use story_shell::{FixedViewport, MarkerCommand, StoryChart};

/// One row of the published daily-coverage feed. Channel fields may be absent
/// for days a channel was off the air.
#[derive(Debug, Deserialize)]
struct FeedRow {
    #[serde(rename = "seenAt")]
    seen_at: String,
    #[serde(rename = "BBCNEWS", default)]
    bbc: f64,
    #[serde(rename = "MSNBCW", default)]
    msnbc: f64,
    #[serde(rename = "CNNW", default)]
    cnn: f64,
    #[serde(rename = "FOXNEWSW", default)]
    fox: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let dataset = match std::env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading daily coverage feed");
            load_feed(&path)?
        }
        None => {
            info!("no feed path given; synthesizing sample data");
            sample_dataset()?
        }
    };
    info!(rows = dataset.len(), "dataset ready");

    let config = ChartConfig {
        channels: vec![Channel::Cnn, Channel::Msnbc, Channel::Fox],
        orientation: Orientation::TimeVertical,
        axis_title: "% story coverage".to_string(),
        ..ChartConfig::default()
    };

    let mut chart = StoryChart::new(dataset, config, FixedViewport::new(1280.0, 720.0));
    chart.mount().context("mounting the chart")?;

    // The story script: each step is one marker activation as the reader
    // scrolls, in the scroller's wire format.
    let script = [
        r#"{ "legend": true }"#,
        r#"{ "fromDate": "20170910" }"#,
        r#"{ "fromDate": "20170915", "toDate": "20170918" }"#,
        r#"{ "fromDate": "none", "legend": false }"#,
    ];

    for (step, raw) in script.iter().enumerate() {
        let command: MarkerCommand = serde_json::from_str(raw).context("parsing marker command")?;
        if let Err(error) = chart.apply_marker(&command) {
            warn!(%error, step, "marker rejected");
            continue;
        }
        settle(&mut chart)?;
        report(step, &chart);

        // Simulate the reader rotating the device mid-story.
        if step == 2 {
            chart.provider_mut().set(640.0, 720.0);
            chart.on_resize().context("resizing the chart")?;
            settle(&mut chart)?;
            info!("resized to 640x720; highlight re-applied");
        }
    }

    chart.unmount();
    Ok(())
}

/// Run transitions to completion at a 60 Hz cadence.
fn settle(chart: &mut StoryChart<FixedViewport>) -> Result<()> {
    while chart.chart().map(|c| c.is_animating()).unwrap_or(false) {
        chart.advance(16.0).context("advancing transitions")?;
    }
    Ok(())
}

fn report(step: usize, chart: &StoryChart<FixedViewport>) {
    if let Some(scene) = chart.scene() {
        info!(
            step,
            band_offset = scene.highlight.time_offset,
            band_extent = scene.highlight.time_extent,
            legend_opacity = scene.legend.opacity,
            date_label = scene.date_label.text.as_str(),
            "story step settled"
        );
    }
}

fn load_feed(path: &str) -> Result<Dataset> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading '{path}'"))?;
    let rows: Vec<FeedRow> = serde_json::from_str(&raw).with_context(|| format!("parsing '{path}'"))?;
    let points = rows
        .iter()
        .map(|row| {
            let day = row.seen_at.split('T').next().unwrap_or(&row.seen_at);
            let date: NaiveDate = day.parse().with_context(|| format!("bad date '{day}'"))?;
            SeriesPoint::try_new(date, row.bbc, row.msnbc, row.cnn, row.fox)
                .with_context(|| format!("bad row for {day}"))
        })
        .collect::<Result<Vec<_>>>()?;
    Dataset::try_new(points).context("validating feed")
}

/// Deterministic sample series: two months of plausible coverage shares.
fn sample_dataset() -> Result<Dataset> {
    let start = NaiveDate::from_ymd_opt(2017, 9, 9).expect("valid date");
    let points = (0..60)
        .map(|day| {
            let date = start + chrono::Days::new(day);
            let t = day as f64;
            let wave = |phase: f64, base: f64, swing: f64| {
                (base + swing * ((t / 9.0) + phase).sin()).clamp(0.0, 100.0)
            };
            SeriesPoint::try_new(
                date,
                wave(0.0, 12.0, 6.0),
                wave(1.3, 38.0, 14.0),
                wave(2.1, 33.0, 12.0),
                wave(3.4, 42.0, 16.0),
            )
        })
        .collect::<story_core::ChartResult<Vec<_>>>()?;
    Ok(Dataset::try_new(points)?)
}
