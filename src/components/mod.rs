//! ECS components for staged model entities.
//!
//! Every model named in the scene manifest becomes one entity carrying all
//! three components below. They hold the per-model state the visibility
//! observers mutate; nothing here has behavior of its own.
//!
//! Submodules overview:
//! - [`scenevisibility`] – scene-graph active flag toggled on sighting/loss
//! - [`trackedmodel`] – reference-image name and manifest asset path
//! - [`worldposition`] – world-space position written from tracked poses

pub mod scenevisibility;
pub mod trackedmodel;
pub mod worldposition;
