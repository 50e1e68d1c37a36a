//! Tracking-event bridge systems.
//!
//! Three systems move detection results from the channel into observer
//! triggers, and must run chained in this order each frame:
//! - [`poll_tracking_batches`] non-blockingly drains the
//!   [`TrackingBridge`](crate::resources::tracking::TrackingBridge) receiver
//!   into the ECS message queue.
//! - [`update_tracking_messages`] advances the message queue so batches
//!   written this frame become readable in the same frame.
//! - [`dispatch_tracked_images`] converts qualifying batch entries into
//!   [`TargetSeenEvent`](crate::events::target::TargetSeenEvent) triggers,
//!   which run the visibility observers synchronously when commands are
//!   applied at the end of the system.
//!
//! Dispatch policy: every `added` entry is dispatched unconditionally;
//! `updated` entries are dispatched only while their estimate quality is
//! [`TrackingState::Tracking`] (a degraded image keeps its model where it
//! is); `removed` entries are counted in a debug log and nothing else.

use crate::events::target::TargetSeenEvent;
use crate::events::tracking::{TrackedImagesChanged, TrackingState};
use crate::resources::tracking::TrackingBridge;
use bevy_ecs::prelude::*;
use log::debug;

/// Drain any pending batches from the detection channel and enqueue them
/// into the ECS [`Messages<TrackedImagesChanged>`] mailbox.
///
/// No-op while the world is detached from the stream.
pub fn poll_tracking_batches(
    bridge: Option<Res<TrackingBridge>>,
    mut writer: MessageWriter<TrackedImagesChanged>,
) {
    let Some(bridge) = bridge else {
        return;
    };
    writer.write_batch(bridge.rx_batches.try_iter());
}

/// Advance the ECS message queue for [`TrackedImagesChanged`].
///
/// Run this after [`poll_tracking_batches`] so the dispatcher sees batches
/// polled this frame.
pub fn update_tracking_messages(mut messages: ResMut<Messages<TrackedImagesChanged>>) {
    messages.update();
}

/// Convert batch entries into [`TargetSeenEvent`] triggers.
pub fn dispatch_tracked_images(
    mut reader: MessageReader<TrackedImagesChanged>,
    mut commands: Commands,
) {
    for batch in reader.read() {
        for image in &batch.added {
            commands.trigger(TargetSeenEvent {
                name: image.name.clone(),
                position: image.position,
            });
        }
        for image in &batch.updated {
            if image.state == TrackingState::Tracking {
                commands.trigger(TargetSeenEvent {
                    name: image.name.clone(),
                    position: image.position,
                });
            }
        }
        if !batch.removed.is_empty() {
            // Models stay at their last pose; hiding is an application call.
            debug!(
                "detector dropped {} image(s): {:?}",
                batch.removed.len(),
                batch.removed
            );
        }
    }
}
