//! Bridge lifecycle integration tests: attach/detach/re-attach and the
//! scripted feed thread.

use bevy_ecs::prelude::*;
use crossbeam_channel::{TryRecvError, unbounded};
use glam::Vec3;
use smallvec::smallvec;

use arstage::components::scenevisibility::SceneVisible;
use arstage::components::trackedmodel::TrackedModel;
use arstage::components::worldposition::WorldPosition;
use arstage::events::tracking::{TrackedImage, TrackedImagesChanged, TrackingState};
use arstage::game::{build_schedule, register_visibility_observers, spawn_tracked_models};
use arstage::resources::manifest::SceneManifest;
use arstage::resources::registry::TargetRegistry;
use arstage::resources::tracking::{TrackingBridge, attach_tracking, detach_tracking};
use arstage::systems::feed::{FeedScript, feed_thread};

fn cat_manifest() -> SceneManifest {
    SceneManifest::from_json(r#"{ "models": [{ "name": "cat", "asset": "assets/models/cat.glb" }] }"#)
        .unwrap()
}

fn make_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<TrackedImagesChanged>>();
    spawn_tracked_models(&mut world, &cat_manifest()).unwrap();
    register_visibility_observers(&mut world);
    world
}

fn cat_state(world: &mut World) -> (Vec3, bool) {
    let entity = world.resource::<TargetRegistry>().entity("cat");
    let position = world.get::<WorldPosition>(entity).unwrap().pos;
    let active = world.get::<SceneVisible>(entity).unwrap().active;
    (position, active)
}

fn cat_batch(position: Vec3) -> TrackedImagesChanged {
    TrackedImagesChanged {
        added: smallvec![TrackedImage::new("cat", position, TrackingState::Tracking)],
        ..Default::default()
    }
}

#[test]
fn detach_is_safe_without_bridge() {
    let mut world = make_world();
    assert!(detach_tracking(&mut world).is_none());
}

#[test]
fn batches_sent_while_detached_survive_reattach() {
    let mut world = make_world();
    let mut schedule = build_schedule();
    let (tx, rx) = unbounded();
    attach_tracking(&mut world, rx);

    let rx = detach_tracking(&mut world).unwrap();

    // producer keeps sending while nobody listens
    tx.send(cat_batch(Vec3::new(2.0, 0.0, 1.0))).unwrap();
    schedule.run(&mut world);
    let (_, active) = cat_state(&mut world);
    assert!(!active);

    // re-attaching the same receiver delivers the buffered batch
    attach_tracking(&mut world, rx);
    schedule.run(&mut world);
    let (position, active) = cat_state(&mut world);
    assert!(active);
    assert!((position - Vec3::new(2.0, 0.0, 1.0)).abs().max_element() < 1e-6);
}

#[test]
fn reattach_replaces_the_bridge() {
    let mut world = make_world();
    let (_tx_a, rx_a) = unbounded();
    let (tx_b, rx_b) = unbounded();
    attach_tracking(&mut world, rx_a);
    attach_tracking(&mut world, rx_b);

    tx_b.send(cat_batch(Vec3::ZERO)).unwrap();
    let bridge = world.resource::<TrackingBridge>();
    assert_eq!(bridge.rx_batches.len(), 1);
}

#[test]
fn feed_thread_terminates_and_disconnects() {
    let (tx, rx) = unbounded();
    let script = FeedScript::demo(&["cat".to_string()], 3);
    let handle = std::thread::spawn(move || feed_thread(script, 240, tx));
    handle.join().unwrap();

    let mut received = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(batch) => received.push(batch),
            Err(TryRecvError::Disconnected) => break,
            Err(TryRecvError::Empty) => unreachable!("sender is gone, channel cannot be empty"),
        }
    }
    assert_eq!(received.len(), 3);
    assert_eq!(received[0].added.len(), 1);
    assert_eq!(received[0].added[0].name, "cat");
}

#[test]
fn feed_thread_stops_when_receiver_dropped() {
    let (tx, rx) = unbounded();
    drop(rx);
    let script = FeedScript::demo(&["cat".to_string()], 10_000);
    let handle = std::thread::spawn(move || feed_thread(script, 240, tx));
    // would take ~40s if the thread ignored the disconnect
    handle.join().unwrap();
}

#[test]
fn scripted_feed_drives_the_stage() {
    let mut world = make_world();
    let mut schedule = build_schedule();
    let (tx, rx) = unbounded();
    attach_tracking(&mut world, rx);

    let names: Vec<String> = {
        let mut models = world.query::<&TrackedModel>();
        models.iter(&world).map(|m| m.name.clone()).collect()
    };
    let script = FeedScript::demo(&names, 6);
    let handle = std::thread::spawn(move || feed_thread(script, 240, tx));
    handle.join().unwrap();

    // one run drains every queued batch and dispatches them in order
    schedule.run(&mut world);

    let (position, active) = cat_state(&mut world);
    assert!(active);
    // discovery at x = 0, then a slow drift along +x
    assert!(position.x > 0.0);
    assert!((position.z - 1.5).abs() < 1e-6);
}
