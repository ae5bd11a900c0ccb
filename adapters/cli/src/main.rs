#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates and exercises a Rift Delver dungeon.
//!
//! The binary drives the whole engine core headlessly: it seeds the map
//! generator, materializes the dungeon, scatters blockades and their unlock
//! buttons, prints the resulting layout, and then runs a short scripted
//! physics session in the start room to demonstrate the resolver.

mod config;

use std::{path::PathBuf, time::Duration};

use anyhow::{bail, Context, Result};
use clap::Parser;

use rift_delver_core::{BodyKind, RoomCoord};
use rift_delver_system_mapgen::MapGenerator;
use rift_delver_system_physics::{Physics, BASE_GRAVITY};
use rift_delver_world::{query, DungeonState};

const FRAME: Duration = Duration::from_millis(16);

/// Generates a dungeon, prints its layout, and runs a short physics demo.
#[derive(Debug, Parser)]
#[command(name = "rift-delver")]
struct Args {
    /// Seed for the dungeon generator; drawn from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of 16 ms physics frames to simulate in the start room.
    #[arg(long, default_value_t = 120)]
    steps: u32,

    /// Tileset name stamped into every generated room.
    #[arg(long, default_value = "ruins")]
    tileset: String,

    /// Optional TOML file with generator and physics tuning overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Entry point for the Rift Delver command-line demo.
fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config::DemoConfig::load(path)?,
        None => config::DemoConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("generating dungeon with seed {seed}");

    let mut generator = MapGenerator::with_tuning(seed, config.tuning());
    let topology = generator.generate();
    let mut state = generator.convert_map(&topology, &args.tileset);
    let blockades = generator.generate_blockades(&mut state);
    let buttons = generator.generate_buttons(&mut state, blockades.clone())?;

    println!("seed {seed}");
    print!("{}", query::map_representation(&state));
    println!(
        "rooms: {}, blockades: {}, buttons: {}",
        query::room_count(&state),
        blockades.len(),
        buttons,
    );

    run_demo(&mut state, &config, args.steps)
}

/// Drops a character into the start room and drives it rightward.
fn run_demo(state: &mut DungeonState, config: &config::DemoConfig, steps: u32) -> Result<()> {
    let start = RoomCoord::new(0, 0);
    state.set_current_room(start);

    let Some(room) = state.room_mut(start) else {
        bail!("the start room is always materialized");
    };
    room.set_visited(true);

    let (spawn_x, spawn_y) = room.spawn_point();
    let hero = room.spawn_body(BodyKind::Character, spawn_x, spawn_y - 64.0, 32, 32);

    let physics = Physics::new(config.gravity.unwrap_or(BASE_GRAVITY));
    for _ in 0..steps {
        if let Some(body) = room.body_mut(hero) {
            // Walk toward the room's interior, stopping short of the
            // down-door pit some layouts carve into the floor.
            if body.x() < 250.0 {
                body.accelerate_right(16.0);
            } else {
                body.set_moving(false);
            }
        }
        physics.step(room, FRAME);
    }

    let body = room.body(hero).context("the hero outlives the demo")?;
    println!(
        "hero settled at ({:.1}, {:.1}), on_ground: {}, life: {}",
        body.x(),
        body.y(),
        body.is_on_ground(),
        body.life(),
    );

    Ok(())
}
