//! Cornerlab studio: shows one image with rounded corners and lets you
//! switch between the three corner strategies while watching their cost.
//!
//! Keys: `1`/`2`/`3` strategy, `H`/`S` hardware/software layer, arrows,
//! PageUp/PageDown, Home/End and the mouse wheel change the corner percent,
//! `Esc` quits.

mod app;
mod config;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use image::{Rgba, RgbaImage};

use cornerlab_engine::bitmap::SourceImage;
use cornerlab_engine::compositor::{Compositor, SharedClipSink};
use cornerlab_engine::device::GpuInit;
use cornerlab_engine::host::RenderHost;
use cornerlab_engine::logging::{init_logging, LoggingConfig};
use cornerlab_engine::strategy::create_strategy;
use cornerlab_engine::window::{Runtime, RuntimeConfig};

use app::StudioApp;
use config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env()?;
    let source = load_source(&config)?;
    log::info!(
        "studio: {}x{} source, strategy {}, corner {}%, layer {}",
        source.width(),
        source.height(),
        config.host.strategy,
        config.host.corner_percent.get(),
        config.host.layer_mode
    );

    let compositor = Rc::new(RefCell::new(Compositor::new()));
    let sink: SharedClipSink = compositor.clone();
    let strategy = create_strategy(config.host.strategy, &source, &sink);
    let host = RenderHost::new(strategy, compositor, config.host);

    Runtime::run(RuntimeConfig::default(), GpuInit::default(), StudioApp::new(source, host))
}

fn load_source(config: &StudioConfig) -> Result<SourceImage> {
    match &config.image {
        Some(path) => SourceImage::open(path),
        None => {
            log::info!("no image given; using a generated gradient");
            SourceImage::from_rgba(gradient(512, 512))
        }
    }
}

/// Diagonal two-tone gradient with a checker overlay, so scaling and corner
/// clipping are both easy to see.
fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        let t = (x + y) as f32 / (w + h).max(1) as f32;
        let checker = ((x / 32) + (y / 32)) % 2 == 0;
        let shade = if checker { 1.0 } else { 0.85 };
        let r = (40.0 + 200.0 * t) * shade;
        let g = (120.0 + 60.0 * (1.0 - t)) * shade;
        let b = (220.0 - 150.0 * t) * shade;
        Rgba([r as u8, g as u8, b as u8, 255])
    })
}
