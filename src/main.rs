//! Arstage main entry point.
//!
//! A headless AR staging engine written in Rust using:
//! - **bevy_ecs** for entity-component-system architecture
//! - **crossbeam-channel** for the detection-subsystem bridge
//!
//! This executable demonstrates the engine against a scripted detection
//! feed: models listed in the scene manifest are staged hidden, then shown,
//! moved, and left in place as the feed discovers, follows, and degrades
//! their reference images.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (position, active flag, model tag)
//! - [`events`] – Event types (tracking batches, target triggers)
//! - [`game`] – High-level stage setup and schedule construction
//! - [`resources`] – ECS resources (registry, manifest, config, bridge)
//! - [`systems`] – ECS systems (bridge polling, dispatch, visibility, feed)
//!
//! # Main Loop
//!
//! 1. Load the INI config and the JSON scene manifest
//! 2. Build the world: staged entities, registry, visibility observers
//! 3. Attach the tracking bridge and spawn the scripted feed thread
//! 4. Run the bridge schedule once per frame, logging stage transitions
//! 5. Detach the bridge and join the feed thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --frames 120
//! ```

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::scenevisibility::SceneVisible;
use crate::components::trackedmodel::TrackedModel;
use crate::components::worldposition::WorldPosition;
use crate::resources::registry::TargetRegistry;
use crate::resources::stageconfig::StageConfig;
use crate::resources::tracking::{attach_tracking, detach_tracking};
use crate::systems::feed::{FeedScript, feed_thread};
use bevy_ecs::prelude::*;
use clap::Parser;
use crossbeam_channel::unbounded;
use std::path::PathBuf;

/// Arstage demo
#[derive(Parser)]
#[command(
    version,
    about = "AR image-target staging: a scripted detection feed drives model visibility"
)]
struct Cli {
    /// Path to the engine configuration INI.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the number of frames to run before exiting.
    #[arg(long, value_name = "N")]
    frames: Option<u32>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => StageConfig::with_path(path),
        None => StageConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Config file not found or invalid, using defaults: {}", e);
    }
    if let Some(frames) = cli.frames {
        config.feed_frames = frames;
    }

    let mut world = match game::setup_world(&config) {
        Ok(world) => world,
        Err(e) => {
            log::error!("Failed to set up stage: {e}");
            std::process::exit(1);
        }
    };

    // Manifest order, for a stable feed script.
    let names: Vec<String> = {
        let mut models = world.query::<&TrackedModel>();
        models.iter(&world).map(|m| m.name.clone()).collect()
    };

    let (tx_batches, rx_batches) = unbounded();
    attach_tracking(&mut world, rx_batches);
    world.clear_trackers(); // spawn-time changes are not stage transitions

    let script = FeedScript::demo(&names, config.feed_frames).with_jitter(0.02);
    let feed_fps = config.feed_fps;
    let feed = std::thread::spawn(move || feed_thread(script, feed_fps, tx_batches));

    let mut update = game::build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let frame_time = std::time::Duration::from_secs_f32(1.0 / config.feed_fps.max(1) as f32);
    for _ in 0..config.feed_frames {
        update.run(&mut world);
        log_stage_transitions(&mut world);
        world.clear_trackers(); // Clear changed components for next frame
        std::thread::sleep(frame_time);
    }

    detach_tracking(&mut world);
    let _ = feed.join();

    let registry = world.resource::<TargetRegistry>();
    let shown = registry
        .names()
        .filter(|name| registry.is_shown(name.as_str()))
        .count();
    log::info!("Demo finished: {}/{} models on stage", shown, registry.len());
}

/// Log every model whose active flag flipped this frame.
fn log_stage_transitions(world: &mut World) {
    let mut changed = world
        .query_filtered::<(&TrackedModel, &WorldPosition, &SceneVisible), Changed<SceneVisible>>();
    for (model, position, visible) in changed.iter(world) {
        if visible.active {
            log::info!("'{}' entered the stage at {}", model.name, position.pos);
        } else {
            log::info!("'{}' left the stage", model.name);
        }
    }
}
