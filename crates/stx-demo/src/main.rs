//! Headless stx-math driver.
//!
//! Simulates a frame loop that fades a panel colour with `Damped<Vec4>`,
//! clips panels against a viewport and hit-tests a pointer path.

mod config;

use std::time::Instant;

use anyhow::{Context, Result};
use stx_math::logging::{init_logging, LoggingConfig};
use stx_math::time::{Damped, FrameClock};
use stx_math::{rgb, rgba, Quad, Rect, Vec2, Vec4};

use config::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::from_args(std::env::args().skip(1)).context("failed to parse arguments")?;

    init_logging(match &config.log_filter {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    log::info!(
        "running {} frames at {} fps (fade {})",
        config.frames,
        config.fps,
        config.fade
    );

    let viewport = Rect::new(0.0, 0.0, 320.0, 200.0);
    let panels = [
        Rect::new(-40.0, 20.0, 120.0, 80.0),
        Rect::new(100.0, 60.0, 80.0, 40.0),
        Rect::new(300.0, 180.0, 60.0, 60.0),
        Rect::new(400.0, 10.0, 20.0, 20.0),
    ];

    let visible = clip_panels(viewport, &panels);
    for (i, clipped) in visible.iter().enumerate() {
        log::info!(
            "panel {i}: visible at ({}, {}) size {}x{}",
            clipped.position.x,
            clipped.position.y,
            clipped.size.x,
            clipped.size.y
        );
    }
    log::info!("{} of {} panels visible", visible.len(), panels.len());

    let bounds = bounding_quad(&visible);
    log::debug!("visible bounds {:?} ({}x{})", bounds, bounds.width(), bounds.height());

    let start = Instant::now();
    let interval = config.frame_interval()?;
    let mut clock = FrameClock::with_clamps(interval / 4, interval * 4);
    clock.reset_at(start);

    let mut colour = Damped::new(rgb(230, 57, 70), config.fade, 1.0);
    colour.set_target(rgba(29, 53, 87, 0.8));

    let pointer_from = Vec2::new(0.0, 0.0);
    let pointer_to = viewport.max();
    let mut hits = 0u32;

    for frame in 1..=config.frames {
        let now = start
            .checked_add(interval * frame)
            .context("simulated frame time overflowed the clock")?;
        let ft = clock.tick_at(now);
        let c = colour.update(ft.dt);

        let t = frame as f32 / config.frames as f32;
        let pointer = pointer_to.mix(pointer_from, t);
        let hovered = visible.iter().position(|r| r.contains(pointer));
        if hovered.is_some() {
            hits += 1;
        }

        log::trace!(
            "frame {}: dt {:.4} colour {} pointer ({:.1}, {:.1}) hovered {:?}",
            ft.frame_index,
            ft.dt,
            format_colour(c),
            pointer.x,
            pointer.y,
            hovered
        );
    }

    let elapsed = (interval * config.frames).as_secs_f32();
    log::info!(
        "after {:.2}s colour is {} (target {}), settled: {}",
        elapsed,
        format_colour(colour.value()),
        format_colour(colour.target()),
        colour.is_settled()
    );
    log::info!("pointer hovered a panel on {hits} of {} frames", config.frames);

    Ok(())
}

/// Clips every panel to the viewport, dropping panels with no area left.
fn clip_panels(viewport: Rect, panels: &[Rect]) -> Vec<Rect> {
    panels
        .iter()
        .map(|p| p.clamp(viewport))
        .filter(|c| c.size.x > 0.0 && c.size.y > 0.0)
        .collect()
}

/// Smallest quad covering all `rects`; an empty quad when there are none.
fn bounding_quad(rects: &[Rect]) -> Quad {
    let mut iter = rects.iter();
    let Some(first) = iter.next() else {
        return Quad::default();
    };

    iter.fold(Quad::new(first.position, first.max()), |q, r| {
        Quad::new(q.min.min(r.position), q.max.max(r.max()))
    })
}

fn format_colour(c: Vec4) -> String {
    format!("rgba({:.3}, {:.3}, {:.3}, {:.3})", c.r(), c.g(), c.b(), c.a())
}
