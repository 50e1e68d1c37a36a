//! Inbound tracking batches from the image-detection subsystem.
//!
//! The detector reports its per-frame results as one
//! [`TrackedImagesChanged`] batch: reference images detected for the first
//! time in `added`, images seen again in `updated`, and images dropped by the
//! detector in `removed`. Batches cross thread boundaries over a crossbeam
//! channel and are re-published into the ECS message queue by
//! [`poll_tracking_batches`](crate::systems::tracking::poll_tracking_batches).

use bevy_ecs::message::Message;
use glam::Vec3;
use smallvec::SmallVec;

/// Quality of the detector's pose estimate for one reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// The image is not being followed at all.
    NotTracking,
    /// The image is followed but the pose estimate is unreliable.
    Limited,
    /// The image is actively followed with a trustworthy pose.
    Tracking,
}

/// One reference image in a batch: its name, estimated world position, and
/// estimate quality. Orientation is not carried; staged models only follow
/// position.
#[derive(Debug, Clone)]
pub struct TrackedImage {
    pub name: String,
    pub position: Vec3,
    pub state: TrackingState,
}

impl TrackedImage {
    pub fn new(name: impl Into<String>, position: Vec3, state: TrackingState) -> Self {
        Self {
            name: name.into(),
            position,
            state,
        }
    }
}

/// Per-frame batch of detection results.
///
/// `removed` entries are carried for completeness but the dispatcher never
/// acts on them: a model whose image disappears stays visible at its last
/// pose. Hiding is an explicit application decision via
/// [`TargetLostEvent`](crate::events::target::TargetLostEvent).
#[derive(Message, Debug, Clone, Default)]
pub struct TrackedImagesChanged {
    /// Images detected for the first time this frame.
    pub added: SmallVec<[TrackedImage; 4]>,
    /// Images already known to the detector and seen again this frame.
    pub updated: SmallVec<[TrackedImage; 4]>,
    /// Names of images the detector stopped following this frame.
    pub removed: SmallVec<[String; 4]>,
}

impl TrackedImagesChanged {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty() && self.removed.is_empty()
    }
}
