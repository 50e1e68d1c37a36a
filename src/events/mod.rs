//! Event types exchanged between the tracking bridge and the controller.
//!
//! Two layers of events exist. Inbound [`tracking`] batches arrive from the
//! detection subsystem through the ECS message queue, once per frame. The
//! dispatcher converts qualifying batch entries into [`target`] trigger
//! events, which the visibility observers react to synchronously.
//!
//! Submodules:
//! - [`tracking`] – batches of detected/updated reference images (messages)
//! - [`target`] – per-target sighting and loss triggers (observer events)

pub mod target;
pub mod tracking;
