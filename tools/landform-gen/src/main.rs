//! landform-gen: generate procedural terrain from the command line.
//!
//! Usage:
//!   landform-gen generate --config terrain.json --output terrain.obj
//!   landform-gen generate --detail 4 --height 6 --seed 7 --threads 8
//!   landform-gen defaults > terrain.json

use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use landform_core::config::TerrainSettings;
use landform_terrain::export::save_obj;
use landform_terrain::{flooded_surface, TerrainGenerator, TerrainService, WaterSurface};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "defaults" => cmd_defaults(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "landform-gen: procedural terrain generator\n\
         \n\
         Commands:\n\
         \n\
         generate  Generate terrain and optionally export it as OBJ\n\
         \n\
           --config <path>      JSON terrain settings (default: built-in settings)\n\
           --output <path>      Write the mesh as Wavefront OBJ\n\
           --detail <f>         Segments per world unit\n\
           --height <f>         Height amplitude\n\
           --noise-scale <f>    Noise frequency multiplier\n\
           --seed <n>           Noise seed\n\
           --threads <n>        Worker threads (0: one per core)\n\
         \n\
         defaults  Print the default settings as JSON\n\
         \n\
         Set RUST_LOG=debug for per-phase timings.\n"
    );
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_flag<T: FromStr>(args: &[String], name: &str) -> Result<Option<T>> {
    match flag_value(args, name) {
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow!("invalid value for {name}: {raw}")),
        None => Ok(None),
    }
}

/// Load settings from `--config` (or defaults) and apply flag overrides.
fn settings_from_args(args: &[String]) -> Result<TerrainSettings> {
    let mut settings = match flag_value(args, "--config") {
        Some(path) => TerrainSettings::load(&PathBuf::from(path))
            .with_context(|| format!("loading settings from {path}"))?,
        None => TerrainSettings::default(),
    };

    if let Some(detail) = parse_flag(args, "--detail")? {
        settings.detail = detail;
    }
    if let Some(height) = parse_flag(args, "--height")? {
        settings.height_amplitude = height;
    }
    if let Some(scale) = parse_flag(args, "--noise-scale")? {
        settings.noise_scale = scale;
    }
    if let Some(seed) = parse_flag(args, "--seed")? {
        settings.seed = seed;
    }
    Ok(settings)
}

// --- Generate command ---

fn cmd_generate(args: &[String]) -> Result<()> {
    let settings = settings_from_args(args)?;
    let threads = parse_flag::<usize>(args, "--threads")?.unwrap_or(0);
    let output = flag_value(args, "--output").map(PathBuf::from);

    let generator = TerrainGenerator::with_threads(threads).context("building worker pool")?;
    info!(threads = generator.num_threads(), "worker pool ready");

    let water = Arc::new(Mutex::new(WaterSurface::default()));
    let mut service = TerrainService::new(generator);
    service.register(Arc::clone(&water));
    service.register_fn(|event| {
        info!(
            vertices = event.vertex_count,
            triangles = event.triangle_count,
            world_x = event.world_size_x,
            world_z = event.world_size_z,
            "terrain ready"
        );
    });

    let snapshot = service
        .apply_settings(&settings)
        .context("generating terrain")?;

    let placement = water
        .lock()
        .map_err(|_| anyhow!("water listener poisoned"))?
        .placement();
    if let Some(placement) = placement {
        info!(
            height = placement.height,
            center_x = placement.center.x,
            center_z = placement.center.z,
            "water plane placed"
        );
    }

    let flooded = flooded_surface(&snapshot);
    info!(
        level = flooded.level,
        submerged_triangles = flooded.indices.len() / 3,
        "flooded surface computed"
    );

    if let Some(path) = output {
        save_obj(&snapshot, &path).with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "mesh written");
    }
    Ok(())
}

// --- Defaults command ---

fn cmd_defaults() -> Result<()> {
    let json = serde_json::to_string_pretty(&TerrainSettings::default())?;
    println!("{json}");
    Ok(())
}
