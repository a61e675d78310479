use std::{path::PathBuf, time::Duration};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spotlight::{CpuSurface, Tour, TourPlayer, scene::tour::pixel_size};

#[derive(Parser, Debug)]
#[command(name = "spotlight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scripted tour to numbered PNG frames.
    Render(RenderArgs),
    /// Validate a tour file and print a summary.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Simulation frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Write every Nth simulated frame.
    #[arg(long, default_value_t = 1)]
    every: u32,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input tour JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let tour = Tour::from_path(&args.in_path)?;
    tour.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;

    let vp = tour.viewport();
    println!(
        "ok: {} targets, {} script steps, viewport {}x{}, duration {} ms",
        tour.target_count(),
        tour.script().len(),
        vp.width,
        vp.height,
        tour.duration().as_millis()
    );
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be > 0");
    anyhow::ensure!(args.every > 0, "--every must be > 0");

    let tour = Tour::from_path(&args.in_path)?;
    let mut player = TourPlayer::new(&tour)?;

    let (w, h) = pixel_size(tour.viewport())?;
    let mut surface = CpuSurface::new(w, h)?;
    surface.set_backdrop(&tour.render_backdrop()?)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let dt = Duration::from_secs(1) / args.fps;
    let total = tour.duration();
    let mut frame_i: u64 = 0;
    let mut written: u64 = 0;

    loop {
        player.draw(&mut surface);
        if frame_i % u64::from(args.every) == 0 {
            let frame = surface.frame();
            let out = args.out_dir.join(format!("frame_{written:05}.png"));
            image::save_buffer_with_format(
                &out,
                &frame.to_straight_rgba(),
                frame.width,
                frame.height,
                image::ColorType::Rgba8,
                image::ImageFormat::Png,
            )
            .with_context(|| format!("write png '{}'", out.display()))?;
            written += 1;
        }

        if player.now() >= total || player.is_finished() {
            break;
        }
        player.advance(dt);
        frame_i += 1;
    }

    eprintln!("wrote {written} frames to {}", args.out_dir.display());
    Ok(())
}
