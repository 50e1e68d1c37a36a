//! Registry of staged models keyed by reference-image name.
//!
//! [`TargetRegistry`] is built once during setup, one entry per scene
//! manifest model, and never grows or shrinks afterwards. It keeps two maps:
//! name → staged entity, and name → shown flag. The shown flag is the
//! controller's own bookkeeping of whether a first sighting has happened; it
//! mirrors the entity's
//! [`SceneVisible`](crate::components::scenevisibility::SceneVisible) state
//! but lets the observers branch without querying the entity first.
//!
//! Lookups of unregistered names panic: a tracking event naming an image the
//! scene never configured means the configuration and the detector disagree,
//! and continuing would corrupt staging state.

use bevy_ecs::prelude::*;
use rustc_hash::FxHashMap;

/// Name-keyed registry of staged model entities and their shown flags.
#[derive(Debug, Clone, Resource, Default)]
pub struct TargetRegistry {
    models: FxHashMap<String, Entity>,
    shown: FxHashMap<String, bool>,
}

impl TargetRegistry {
    /// Bind `name` to a staged entity, starting hidden.
    ///
    /// Returns an error if the name is already bound. Duplicate names in the
    /// manifest are a configuration mistake; binding the second entity would
    /// orphan the first one in the scene.
    pub fn register(&mut self, name: impl Into<String>, entity: Entity) -> Result<(), String> {
        let name = name.into();
        if self.models.contains_key(&name) {
            return Err(format!("duplicate tracked model name '{name}'"));
        }
        self.models.insert(name.clone(), entity);
        self.shown.insert(name, false);
        Ok(())
    }

    /// Entity staged for `name`. Panics on unregistered names.
    pub fn entity(&self, name: &str) -> Entity {
        *self
            .models
            .get(name)
            .unwrap_or_else(|| panic!("tracking event for unregistered image '{name}'"))
    }

    /// Whether `name` is currently shown. Panics on unregistered names.
    pub fn is_shown(&self, name: &str) -> bool {
        self.shown
            .get(name)
            .copied()
            .unwrap_or_else(|| panic!("tracking event for unregistered image '{name}'"))
    }

    /// Update the shown flag for `name`. Panics on unregistered names.
    pub fn set_shown(&mut self, name: &str, shown: bool) {
        *self
            .shown
            .get_mut(name)
            .unwrap_or_else(|| panic!("tracking event for unregistered image '{name}'")) = shown;
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Iterator over all registered image names, in map order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.models.keys()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}
