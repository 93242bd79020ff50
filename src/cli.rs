use anyhow::Context;
use clap::Parser;
use raybox::{
    Aabb, Ray,
    geometry::{WorldPoint, WorldVector},
    intersect,
};

/// Intersect a single ray with an axis aligned box and print the entry/exit record
#[derive(Parser, Debug)]
#[command(name = "raybox-cli")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Ray as origin followed by direction: OX OY OZ DX DY DZ
    #[arg(long, num_args = 6, value_names = ["OX", "OY", "OZ", "DX", "DY", "DZ"], required = true)]
    ray: Vec<f32>,

    /// Box as min corner followed by max corner: MINX MINY MINZ MAXX MAXY MAXZ
    #[arg(long, num_args = 6, value_names = ["MINX", "MINY", "MINZ", "MAXX", "MAXY", "MAXZ"], required = true)]
    aabb: Vec<f32>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let ray = Ray::from(to_flat(&cli.ray)?);
    let [x0, y0, z0, x1, y1, z1] = to_flat(&cli.aabb)?;
    let aabb = Aabb::try_new(WorldPoint::new(x0, y0, z0), WorldPoint::new(x1, y1, z1))
        .context("Invalid --aabb")?;

    if ray.direction == WorldVector::zeros() {
        log::warn!("Ray direction is zero, the ray can only hit the box by starting inside it");
    }
    log::debug!("Intersecting {ray:?} with {aabb:?}");

    let result = intersect(&ray, &aabb);
    log::info!(
        "hit: {}, started inside: {}",
        result.hit(),
        result.started_inside()
    );

    println!("{result}");

    Ok(())
}

fn to_flat(values: &[f32]) -> anyhow::Result<[f32; 6]> {
    values
        .try_into()
        .with_context(|| format!("Expected 6 values, got {}", values.len()))
}
