use bevy_ecs::prelude::Component;

/// Scene-graph active flag for a staged model.
///
/// A renderer integration draws an entity only while `active` is true. The
/// flag is flipped by the visibility observers; everything else treats it as
/// read-only.
#[derive(Component, Clone, Copy, Debug)]
pub struct SceneVisible {
    pub active: bool,
}

impl SceneVisible {
    /// A model starts hidden until its reference image is first seen.
    pub fn hidden() -> Self {
        Self { active: false }
    }
}
