//! Interactive viewer: drives the progressive renderer over a minifb window.
//!
//! Each frame runs one scheduler tick, repacks the film into the window
//! buffer, and repaints, so the image fills in as scattered pixels while the
//! window stays responsive. Resizing the window changes the magnification
//! the scheduler sees, which rebalances how many pixels a tick resolves.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use glint_render::{build_world, Camera, Film, Group, ProgressiveRenderer, RenderSettings};
use glint_scene::SceneDescription;
use minifb::{Key, ScaleMode, Window, WindowOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Progressive toy ray tracer.
#[derive(Parser)]
#[command(name = "glint", about = "Progressive toy ray tracer", version)]
struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Jittered samples per pixel
    #[arg(long, short = 's', default_value_t = 4)]
    samples: u32,

    /// Bounce ceiling per ray
    #[arg(long, default_value_t = 50)]
    bounces: u32,

    /// Base pixel budget per tick at 1x magnification
    #[arg(long, default_value_t = 100)]
    budget: u32,

    /// Scene description file (JSON); defaults to the built-in starter scene
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Where to write the finished image
    #[arg(long, short = 'o', default_value = "glint.png")]
    output: PathBuf,

    /// RNG seed for reproducible renders
    #[arg(long)]
    seed: Option<u64>,

    /// Render to completion without opening a window
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let desc = match &args.scene {
        Some(path) => SceneDescription::load(path)?,
        None => SceneDescription::default(),
    };
    let aspect = args.width as f32 / args.height as f32;
    let (world, camera) = build_world(&desc, aspect)?;

    let settings = RenderSettings {
        samples_per_pixel: args.samples,
        max_bounces: args.bounces,
        tick_budget: args.budget,
        ..RenderSettings::default()
    };

    let mut film = Film::new(args.width, args.height);
    let mut renderer = match args.seed {
        Some(seed) => {
            ProgressiveRenderer::with_rng(args.width, args.height, settings, StdRng::seed_from_u64(seed))
        }
        None => ProgressiveRenderer::new(args.width, args.height, settings),
    };

    log::info!(
        "rendering {}x{} at {} spp, {} pixel(s) to resolve",
        args.width,
        args.height,
        args.samples,
        renderer.remaining()
    );

    let start = Instant::now();

    if args.headless {
        while !renderer.finished() {
            renderer.tick(&world, &camera, &mut film, 1.0);
        }
        save(&film, &args.output, start)?;
        return Ok(());
    }

    run_window(&args, &world, &camera, &mut film, &mut renderer, start)
}

fn run_window(
    args: &Args,
    world: &Group,
    camera: &Camera,
    film: &mut Film,
    renderer: &mut ProgressiveRenderer,
    start: Instant,
) -> Result<()> {
    let width = args.width as usize;
    let height = args.height as usize;

    let mut window = Window::new(
        "glint",
        width,
        height,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        },
    )?;

    // ~60 fps cap; each frame is one scheduler tick plus a repaint
    window.limit_update_rate(Some(Duration::from_micros(16_600)));

    let mut buffer = vec![0u32; width * height];
    let mut saved = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if !renderer.finished() {
            let magnification = window.get_size().0 as f32 / args.width as f32;
            let report = renderer.tick(world, camera, film, magnification);
            log::debug!(
                "tick: {} resolved, {} remaining (magnification {:.2})",
                report.resolved,
                report.remaining,
                magnification
            );
            repack(film, &mut buffer);
        } else if !saved {
            save(film, &args.output, start)?;
            saved = true;
        }

        window.update_with_buffer(&buffer, width, height)?;
    }

    if !saved {
        if renderer.finished() {
            save(film, &args.output, start)?;
        } else {
            log::info!(
                "window closed with {} pixel(s) unresolved; nothing written",
                renderer.remaining()
            );
        }
    }

    Ok(())
}

/// Pack the film into minifb's 0RGB u32 layout, top row first.
fn repack(film: &Film, buffer: &mut [u32]) {
    let width = film.width();
    for y in 0..film.height() {
        for x in 0..width {
            let c = film.pixel(x, y);
            let r = (255.0 * c.x.clamp(0.0, 1.0)) as u32;
            let g = (255.0 * c.y.clamp(0.0, 1.0)) as u32;
            let b = (255.0 * c.z.clamp(0.0, 1.0)) as u32;
            buffer[(y * width + x) as usize] = (r << 16) | (g << 8) | b;
        }
    }
}

fn save(film: &Film, output: &Path, start: Instant) -> Result<()> {
    film.save(output)?;
    log::info!(
        "render complete in {:.2?}, wrote {}",
        start.elapsed(),
        output.display()
    );
    Ok(())
}
