use bevy_ecs::prelude::Component;

/// Tag identifying which reference image a staged model belongs to.
///
/// `name` matches the reference-image name reported by the tracking
/// subsystem. `asset` is the opaque path from the scene manifest; the engine
/// never opens it, a renderer integration does.
#[derive(Component, Clone, Debug)]
pub struct TrackedModel {
    pub name: String,
    pub asset: String,
}

impl TrackedModel {
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            asset: asset.into(),
        }
    }
}
