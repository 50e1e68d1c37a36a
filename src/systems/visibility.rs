//! Visibility observers for staged models.
//!
//! [`observe_target_seen`] and [`observe_target_lost`] are the only writers
//! of [`WorldPosition`](crate::components::worldposition::WorldPosition),
//! [`SceneVisible`](crate::components::scenevisibility::SceneVisible), and
//! the registry's shown flags. Both run synchronously inside the trigger
//! that fires them, so per-target state never sees a partial update.
//!
//! Contract
//! - First sighting of a target: place the model at the reported position,
//!   set it active, mark it shown.
//! - Every later sighting: update the position only, active state untouched.
//!   A sighting after an explicit hide goes through the first-sighting path
//!   again and re-shows the model.
//! - Loss: deactivate and mark hidden if shown, otherwise a no-op.
//! - Orientation from the pose estimate is never applied.
//!
//! Unknown target names panic; see
//! [`TargetRegistry`](crate::resources::registry::TargetRegistry).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::scenevisibility::SceneVisible;
use crate::components::worldposition::WorldPosition;
use crate::events::target::{TargetLostEvent, TargetSeenEvent};
use crate::resources::registry::TargetRegistry;

/// Observer that shows and places a model when its image is sighted.
pub fn observe_target_seen(
    trigger: On<TargetSeenEvent>,
    mut registry: ResMut<TargetRegistry>,
    mut models: Query<(&mut WorldPosition, &mut SceneVisible)>,
) {
    let event = trigger.event();
    let entity = registry.entity(&event.name);
    let (mut position, mut visible) = models
        .get_mut(entity)
        .unwrap_or_else(|_| panic!("staged model '{}' lost its staging components", event.name));

    if !registry.is_shown(&event.name) {
        // First sighting (or first after an explicit hide): place and show.
        position.pos = event.position;
        visible.active = true;
        registry.set_shown(&event.name, true);
        info!("showing '{}' at {}", event.name, event.position);
    } else {
        // Already on stage: follow the image, nothing else changes.
        position.pos = event.position;
        debug!("moving '{}' to {}", event.name, event.position);
    }
}

/// Observer that hides a model when its target is declared lost.
pub fn observe_target_lost(
    trigger: On<TargetLostEvent>,
    mut registry: ResMut<TargetRegistry>,
    mut models: Query<&mut SceneVisible>,
) {
    let event = trigger.event();
    let entity = registry.entity(&event.name);

    if registry.is_shown(&event.name) {
        let mut visible = models
            .get_mut(entity)
            .unwrap_or_else(|_| panic!("staged model '{}' lost its staging components", event.name));
        visible.active = false;
        registry.set_shown(&event.name, false);
        info!("hiding '{}'", event.name);
    }
}
