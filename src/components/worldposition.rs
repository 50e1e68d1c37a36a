use bevy_ecs::prelude::Component;
use glam::Vec3;

/// World-space position of a staged model.
///
/// Only position is tracked. The detector's pose estimate also carries an
/// orientation, but staged models keep the orientation they were spawned
/// with; see [`crate::systems::visibility`].
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct WorldPosition {
    pub pos: Vec3,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }
}
