//! High-level stage setup and schedule construction.
//!
//! [`setup_world`] builds a ready-to-attach world from a [`StageConfig`]:
//! manifest load, one staged entity per model, the [`TargetRegistry`], and
//! the visibility observers. [`build_schedule`] wires the per-frame bridge
//! systems. Hosts embedding the engine can call the smaller pieces directly.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::scenevisibility::SceneVisible;
use crate::components::trackedmodel::TrackedModel;
use crate::components::worldposition::WorldPosition;
use crate::events::tracking::TrackedImagesChanged;
use crate::resources::manifest::SceneManifest;
use crate::resources::registry::TargetRegistry;
use crate::resources::stageconfig::StageConfig;
use crate::systems::tracking::{
    dispatch_tracked_images, poll_tracking_batches, update_tracking_messages,
};
use crate::systems::visibility::{observe_target_lost, observe_target_seen};

/// Spawn one staged entity per manifest model and insert the registry.
///
/// Every entity starts at the origin, inactive and marked hidden. On a
/// duplicate model name the offending entity is despawned and setup fails
/// without inserting the registry, so no orphaned binding survives.
pub fn spawn_tracked_models(world: &mut World, manifest: &SceneManifest) -> Result<(), String> {
    let mut registry = TargetRegistry::default();
    for model in &manifest.models {
        let entity = world
            .spawn((
                TrackedModel::new(&model.name, &model.asset),
                WorldPosition::default(),
                SceneVisible::hidden(),
            ))
            .id();
        if let Err(e) = registry.register(&model.name, entity) {
            world.entity_mut(entity).despawn();
            return Err(e);
        }
    }
    info!("staged {} model(s) from manifest", registry.len());
    world.insert_resource(registry);
    Ok(())
}

/// Register the visibility observers for target sighting and loss.
pub fn register_visibility_observers(world: &mut World) {
    world.spawn(Observer::new(observe_target_seen));
    world.spawn(Observer::new(observe_target_lost));
    // Ensure the observers are registered before anything triggers target events.
    world.flush();
}

/// Build a world staged from the manifest named in `config`.
pub fn setup_world(config: &StageConfig) -> Result<World, String> {
    let manifest = SceneManifest::load_from_file(&config.manifest_path)?;

    let mut world = World::new();
    world.insert_resource(config.clone());
    world.init_resource::<Messages<TrackedImagesChanged>>();
    spawn_tracked_models(&mut world, &manifest)?;
    register_visibility_observers(&mut world);
    Ok(world)
}

/// Per-frame schedule: poll the detection channel, advance the message
/// queue, dispatch qualifying entries to the observers.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        // bridge systems must stay together and in this order
        (
            poll_tracking_batches,
            update_tracking_messages,
            dispatch_tracked_images,
        )
            .chain(),
    );
    schedule
}
