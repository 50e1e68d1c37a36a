//! Simulated detection feed backed by a dedicated thread.
//!
//! Real deployments attach the world to a channel fed by an AR detection
//! pipeline. For the demo binary and for soak testing, [`feed_thread`] plays
//! back a pre-built [`FeedScript`] of batches at a fixed rate, with a little
//! position jitter so staged models wander the way real pose estimates do.
//!
//! The thread owns nothing but the sending half of the channel. It stops on
//! its own when the script is exhausted or when the receiving half is
//! dropped, so joining it never blocks.

use crate::events::tracking::{TrackedImage, TrackedImagesChanged, TrackingState};
use crossbeam_channel::Sender;
use glam::Vec3;
use log::debug;
use smallvec::SmallVec;
use std::time::Duration;

/// How often a scripted update degrades to `Limited` quality.
const LIMITED_EVERY: u32 = 8;

/// A pre-built sequence of detection batches, one per feed frame.
#[derive(Debug, Clone, Default)]
pub struct FeedScript {
    steps: Vec<TrackedImagesChanged>,
    jitter: f32,
}

impl FeedScript {
    pub fn new(steps: Vec<TrackedImagesChanged>) -> Self {
        Self { steps, jitter: 0.0 }
    }

    /// Amplitude of the uniform position noise applied at playback time.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    /// Scripted walkthrough for the demo binary.
    ///
    /// Target `i` is discovered at frame `2 * i`, then followed with a slow
    /// drift along +x. Every [`LIMITED_EVERY`]th update for a target reports
    /// `Limited` quality, which the dispatcher skips, so the demo exercises
    /// the degraded-quality path too.
    pub fn demo(names: &[String], frames: u32) -> Self {
        let mut steps = Vec::with_capacity(frames as usize);
        for frame in 0..frames {
            let mut batch = TrackedImagesChanged::default();
            for (i, name) in names.iter().enumerate() {
                let discovered_at = 2 * i as u32;
                let base = Vec3::new(i as f32 * 0.5, 0.0, 1.5);
                if frame == discovered_at {
                    batch
                        .added
                        .push(TrackedImage::new(name, base, TrackingState::Tracking));
                } else if frame > discovered_at {
                    let age = frame - discovered_at;
                    let state = if age % LIMITED_EVERY == 0 {
                        TrackingState::Limited
                    } else {
                        TrackingState::Tracking
                    };
                    let position = base + Vec3::new(age as f32 * 0.01, 0.0, 0.0);
                    batch
                        .updated
                        .push(TrackedImage::new(name, position, state));
                }
            }
            steps.push(batch);
        }
        Self::new(steps)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Entry point of the dedicated feed thread.
///
/// Sends one scripted batch every `1 / fps` seconds, applying the script's
/// jitter to every reported position. Returns when the script ends or the
/// channel disconnects.
pub fn feed_thread(script: FeedScript, fps: u32, tx: Sender<TrackedImagesChanged>) {
    let FeedScript { steps, jitter } = script;
    let frame_time = Duration::from_secs_f32(1.0 / fps.max(1) as f32);
    let mut rng = fastrand::Rng::new();

    let mut noise = |images: &mut SmallVec<[TrackedImage; 4]>| {
        for image in images.iter_mut() {
            image.position += Vec3::new(
                (rng.f32() - 0.5) * jitter,
                (rng.f32() - 0.5) * jitter,
                (rng.f32() - 0.5) * jitter,
            );
        }
    };

    for mut batch in steps {
        if jitter > 0.0 {
            noise(&mut batch.added);
            noise(&mut batch.updated);
        }
        if tx.send(batch).is_err() {
            debug!("detection feed receiver dropped, stopping");
            return;
        }
        std::thread::sleep(frame_time);
    }
    debug!("detection feed script exhausted");
}
