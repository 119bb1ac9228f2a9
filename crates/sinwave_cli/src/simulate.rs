//! Headless runs of the demo screens
//!
//! Each run drives a [`WaveApp`] through a sweep of control positions and
//! records what the wave looked like after every frame.

use anyhow::{bail, Result};
use sinwave_app::{AppConfig, AppEvent, DemoScreen, Screen, ScreenId, WaveApp};
use std::fmt::Write as _;
use tracing::{debug, info};

/// One sampled frame of a simulation
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    /// Control position that produced this frame
    pub input: i32,
    pub waviness: f32,
    /// SVG path data of the wave
    pub path_data: String,
    /// Whether the app painted a new frame for this input
    pub painted: bool,
}

/// Sweep the seek bar from 0 to `max` in `steps` increments
pub fn seekbar(mut config: AppConfig, max: i32, steps: u32) -> Result<Vec<Sample>> {
    if steps == 0 {
        bail!("steps must be at least 1");
    }
    if max < 0 {
        bail!("seek bar max must not be negative, got {}", max);
    }

    config.seekbar_max = max;
    let mut app = WaveApp::new(config);
    info!(max, steps, "simulating seek bar");

    (0..=steps)
        .map(|i| {
            let progress = (i64::from(max) * i64::from(i) / i64::from(steps)) as i32;
            app.handle_event(AppEvent::SeekBarProgress {
                progress,
                from_user: true,
            });
            sample(&mut app, progress)
        })
        .collect()
}

/// Scroll the collapsing header from fully expanded to fully collapsed
///
/// `range` overrides how far the sweep scrolls; by default it is the app
/// bar's own scroll range.
pub fn toolbar(config: AppConfig, range: Option<f32>, steps: u32) -> Result<Vec<Sample>> {
    if steps == 0 {
        bail!("steps must be at least 1");
    }
    if let Some(range) = range.filter(|r| r.is_nan() || *r < 0.0) {
        bail!("scroll range must not be negative, got {}", range);
    }

    let mut app = WaveApp::new(config);
    app.handle_event(AppEvent::Navigate {
        screen: ScreenId::Toolbar,
        add_to_back_stack: true,
    });

    let range = match (range, app.primary_screen()) {
        (Some(range), Some(DemoScreen::Toolbar(_))) => range,
        (None, Some(DemoScreen::Toolbar(screen))) => screen.app_bar().scroll_range(),
        _ => bail!("toolbar screen did not open"),
    };
    info!(range, steps, "simulating toolbar");

    (0..=steps)
        .map(|i| {
            let offset = -(range * i as f32 / steps as f32).round() as i32;
            app.handle_event(AppEvent::AppBarOffset { offset });
            sample(&mut app, offset)
        })
        .collect()
}

fn sample(app: &mut WaveApp, input: i32) -> Result<Sample> {
    let painted = app.paint_frame();
    let Some(screen) = app.primary_screen() else {
        bail!("no screen attached");
    };
    let wave = screen.wave();
    let sample = Sample {
        input,
        waviness: wave.waviness(),
        path_data: wave.path().to_svg_data(),
        painted,
    };
    debug!(input, waviness = sample.waviness, painted, "sampled frame");
    Ok(sample)
}

/// Format samples as a text table, one row per frame
pub fn table(samples: &[Sample]) -> String {
    let mut out = format!("{:>8}  {:>8}  {:>7}  path\n", "input", "waviness", "painted");
    for sample in samples {
        let _ = writeln!(
            out,
            "{:>8}  {:>8.3}  {:>7}  {}",
            sample.input,
            sample.waviness,
            if sample.painted { "yes" } else { "no" },
            sample.path_data
        );
    }
    out
}
