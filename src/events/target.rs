//! Per-target trigger events consumed by the visibility observers.

use bevy_ecs::prelude::Event;
use glam::Vec3;

/// A registered reference image was sighted at `position`.
///
/// Emitted by the dispatcher for every `added` batch entry and for `updated`
/// entries whose quality is
/// [`Tracking`](crate::events::tracking::TrackingState::Tracking). Hosts that
/// drive the controller without a tracking stream can trigger it directly.
///
/// Precondition: `name` must be registered in
/// [`TargetRegistry`](crate::resources::registry::TargetRegistry); an unknown
/// name panics in the observer.
#[derive(Event, Debug, Clone)]
pub struct TargetSeenEvent {
    pub name: String,
    pub position: Vec3,
}

/// A registered reference image should have its model hidden.
///
/// No inbound batch category emits this; the dispatcher leaves models in
/// place when their image degrades or disappears. Applications trigger it
/// when they decide a model must leave the scene.
#[derive(Event, Debug, Clone)]
pub struct TargetLostEvent {
    pub name: String,
}
