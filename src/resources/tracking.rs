//! ECS resource bridging the world with the detection subsystem.
//!
//! The detector (or the simulated feed) owns the sending half of a crossbeam
//! channel and delivers one [`TrackedImagesChanged`] batch per detector
//! frame. [`attach_tracking`] installs the receiving half as a resource so
//! the poll system can drain it; [`detach_tracking`] removes it, after which
//! no further batches reach the world and all staged state freezes at its
//! last value. The channel itself stays with the producer, so batches sent
//! while detached are delivered if the receiver is attached again.

use crate::events::tracking::TrackedImagesChanged;
use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;

/// Receiving half of the detection channel.
///
/// Present only while the world is attached to a tracking stream. Systems
/// take it as `Option<Res<TrackingBridge>>` and do nothing when it is
/// absent.
#[derive(Resource)]
pub struct TrackingBridge {
    /// Receiver for per-frame detection batches (detector -> ECS).
    pub rx_batches: Receiver<TrackedImagesChanged>,
}

/// Subscribe the world to a tracking-event stream.
///
/// Inserts the [`TrackingBridge`] and makes sure the
/// `Messages<TrackedImagesChanged>` mailbox exists. Re-attaching with a new
/// receiver replaces the bridge without touching messages already queued.
pub fn attach_tracking(world: &mut World, rx_batches: Receiver<TrackedImagesChanged>) {
    world.insert_resource(TrackingBridge { rx_batches });
    world.init_resource::<Messages<TrackedImagesChanged>>();
}

/// Unsubscribe the world from its tracking-event stream.
///
/// Returns the receiver so the caller can re-attach later without losing
/// batches the producer sent in the meantime. Safe to call when no bridge is
/// attached.
pub fn detach_tracking(world: &mut World) -> Option<Receiver<TrackedImagesChanged>> {
    world
        .remove_resource::<TrackingBridge>()
        .map(|bridge| bridge.rx_batches)
}
