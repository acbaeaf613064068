//! Headless endless-run simulation: drives the chunk streamer at a fixed
//! frame rate and reports what it did.
//!
//! Usage: cargo run --release --bin simulate_run -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Streamer config JSON (default: built-in defaults)
//!   --seconds <S>     Simulated time in seconds (default: 60)
//!   --fps <N>         Fixed frame rate (default: 60)
//!   --seed <SEED>     Random seed (default: 12345)
//!   --view <WIDTH>    Visible world width (default: 20)
//!   --report <PATH>   Write a JSON summary to PATH

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Instant;

use serde_json::json;

use tilestream::core::logging;
use tilestream::{ChunkStreamer, OrthoCamera, StreamerConfig, TileKind};

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let seconds = parse_arg::<f32>(&args, "--seconds").unwrap_or(60.0);
    let fps = parse_arg::<u32>(&args, "--fps").unwrap_or(60).max(1);
    let seed = parse_arg::<u64>(&args, "--seed").unwrap_or(12345);
    let view_width = parse_arg::<f32>(&args, "--view").unwrap_or(20.0);
    let report_path = parse_arg::<PathBuf>(&args, "--report");

    let config = match parse_arg::<PathBuf>(&args, "--config") {
        Some(path) => match StreamerConfig::load_sync(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => StreamerConfig::default(),
    };

    let camera = OrthoCamera::with_view_width(view_width / 2.0, view_width);
    let mut streamer = match ChunkStreamer::seeded(config, camera, seed) {
        Ok(streamer) => streamer,
        Err(e) => {
            log::error!("Invalid streamer config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let frames = (seconds * fps as f32).round() as u64;
    let dt = 1.0 / fps as f32;

    println!("=== Tilestream Run Simulation ===");
    println!("Frames: {} at {} fps ({}s)", frames, fps, seconds);
    println!("Seed:   {}", seed);
    println!("View:   {} units, chunk width {}", view_width, streamer.chunk_width());
    println!();

    let start = Instant::now();
    let mut recycled = 0usize;
    let mut spawned = 0usize;
    let mut distance = 0.0f64;
    let mut obstacles = 0usize;

    for frame in 1..=frames {
        let report = streamer.tick(dt);
        recycled += report.recycled;
        spawned += report.spawned;
        distance += report.moved as f64;

        if report.spawned > 0 {
            obstacles += streamer
                .chunks()
                .rev()
                .take(report.spawned)
                .map(|c| c.surface().count(TileKind::Obstacle))
                .sum::<usize>();
        }

        if frame % (fps as u64 * 10) == 0 {
            log::info!(
                "[{}/{}] distance {:.0}, {} active chunks",
                frame,
                frames,
                distance,
                streamer.active_count()
            );
        }
    }

    let elapsed = start.elapsed();
    let stats = streamer.pool_stats();

    println!("Distance:  {:.1} units", distance);
    println!("Spawned:   {} chunks ({} obstacles)", spawned, obstacles);
    println!("Recycled:  {} chunks", recycled);
    println!(
        "Pool:      {} constructed, peak {} active",
        stats.constructed, stats.peak_active
    );
    println!(
        "Time:      {:.2}ms total, {:.3}us per tick",
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1e6 / frames.max(1) as f64
    );

    if let Some(path) = report_path {
        let report = json!({
            "seed": seed,
            "frames": frames,
            "fps": fps,
            "config": streamer.config(),
            "distance": distance,
            "spawned": spawned,
            "recycled": recycled,
            "obstacles": obstacles,
            "pool": {
                "constructed": stats.constructed,
                "active": stats.active,
                "free": stats.free,
                "peak_active": stats.peak_active,
            },
            "cursor": streamer.cursor(),
            "positions": streamer.positions(),
        });
        let written = serde_json::to_string_pretty(&report)
            .map_err(std::io::Error::from)
            .and_then(|text| std::fs::write(&path, text));
        if let Err(e) = written {
            log::error!("Failed to write report {}: {}", path.display(), e);
            return ExitCode::FAILURE;
        }
        println!("Report:    {}", path.display());
    }

    streamer.shutdown();
    ExitCode::SUCCESS
}

fn parse_arg<T: FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
