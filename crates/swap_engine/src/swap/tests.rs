//! Integration tests for the swap engine
//!
//! Exercises whole-mapping swaps against a populated scene: set-preserving
//! reassignment, idempotence, round-trips, and per-entry failure isolation.

use crate::materials::{Material, MaterialHandle, MaterialRegistry};
use crate::scene::{ObjectId, Scene};
use crate::swap::{
    EntryOutcome, MappingEntry, MatchMode, Severity, SwapConfig, SwapEngine, SwapError,
    SwapMapping,
};

struct Fixture {
    registry: MaterialRegistry,
    scene: Scene,
    red: MaterialHandle,
    blue: MaterialHandle,
    yellow: MaterialHandle,
}

/// Registry with the red/blue + green/yellow pairs and a scene holding two
/// objects on blue, one on yellow, one slotless camera.
fn fixture() -> Fixture {
    let mut registry = MaterialRegistry::new();
    let red = registry.register(Material::new("red_mat")).unwrap();
    let blue = registry.register(Material::new("blue_mat")).unwrap();
    registry.register(Material::new("green_mat")).unwrap();
    let yellow = registry.register(Material::new("yellow_mat")).unwrap();

    let mut scene = Scene::new();
    scene.add_object_with_slots("cube", vec![blue]);
    scene.add_object_with_slots("sphere", vec![blue]);
    scene.add_object_with_slots("plane", vec![yellow]);
    scene.add_object("camera");

    Fixture {
        registry,
        scene,
        red,
        blue,
        yellow,
    }
}

fn mapping() -> SwapMapping {
    SwapMapping::new(vec![
        MappingEntry::new("red_mat", "blue_mat"),
        MappingEntry::new("green_mat", "yellow_mat"),
    ])
    .unwrap()
}

fn primaries_of(scene: &Scene, ids: &[ObjectId]) -> Vec<Option<MaterialHandle>> {
    ids.iter()
        .map(|&id| scene.object(id).unwrap().primary_material())
        .collect()
}

#[test]
fn test_swap_to_render_reassigns_matched_set() {
    let mut f = fixture();
    let engine = SwapEngine::new();

    let on_blue = engine.find_objects_by_material(&f.scene, &f.registry, "blue_mat");
    assert_eq!(on_blue.len(), 2);

    let report = engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());

    // The set now on red equals the set that was on blue beforehand.
    let on_red = engine.find_objects_by_material(&f.scene, &f.registry, "red_mat");
    assert_eq!(on_red, on_blue);
    assert!(engine
        .find_objects_by_material(&f.scene, &f.registry, "blue_mat")
        .is_empty());

    assert_eq!(report.len(), 2);
    assert_eq!(report.entries()[0].outcome, EntryOutcome::Assigned { count: 2 });
    assert_eq!(report.entries()[1].outcome, EntryOutcome::Assigned { count: 1 });
    assert_eq!(report.assigned_total(), 3);
}

#[test]
fn test_swap_is_idempotent() {
    let mut f = fixture();
    let engine = SwapEngine::new();

    let first = engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());
    assert_eq!(first.assigned_total(), 3);

    let ids: Vec<ObjectId> = f.scene.objects().map(|o| o.id()).collect();
    let after_first = primaries_of(&f.scene, &ids);

    // Second application finds nothing left on the export side.
    let second = engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());
    assert_eq!(primaries_of(&f.scene, &ids), after_first);
    assert_eq!(second.count_at(Severity::Warning), second.len());
    assert_eq!(second.assigned_total(), 0);
}

#[test]
fn test_round_trip_restores_assignments() {
    let mut f = fixture();
    let engine = SwapEngine::new();
    let ids: Vec<ObjectId> = f.scene.objects().map(|o| o.id()).collect();
    let before = primaries_of(&f.scene, &ids);

    engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());
    engine.swap_to_export_materials(&mut f.scene, &f.registry, &mapping());

    assert_eq!(primaries_of(&f.scene, &ids), before);
}

#[test]
fn test_zero_match_warns_and_mutates_nothing() {
    let mut registry = MaterialRegistry::new();
    registry.register(Material::new("red")).unwrap();
    registry.register(Material::new("blue")).unwrap();
    let other = registry.register(Material::new("other")).unwrap();

    let mut scene = Scene::new();
    let id = scene.add_object_with_slots("cube", vec![other]);

    let mapping = SwapMapping::new(vec![MappingEntry::new("red", "blue")]).unwrap();
    let report = SwapEngine::new().swap_to_render_materials(&mut scene, &registry, &mapping);

    assert_eq!(report.len(), 1);
    assert_eq!(report.entries()[0].outcome, EntryOutcome::NoMatches);
    assert_eq!(report.entries()[0].target, "red");
    assert_eq!(scene.object(id).unwrap().primary_material(), Some(other));
}

#[test]
fn test_unresolved_target_fails_entry_and_leaves_slot() {
    // "red" is mapped but never registered.
    let mut registry = MaterialRegistry::new();
    let blue = registry.register(Material::new("blue")).unwrap();

    let mut scene = Scene::new();
    let id = scene.add_object_with_slots("cube", vec![blue]);

    let mapping = SwapMapping::new(vec![MappingEntry::new("red", "blue")]).unwrap();
    let report = SwapEngine::new().swap_to_render_materials(&mut scene, &registry, &mapping);

    assert_eq!(
        report.entries()[0].outcome,
        EntryOutcome::Failed(SwapError::UnresolvedMaterial("red".to_string()))
    );
    assert!(report.has_failures());
    assert_eq!(scene.object(id).unwrap().primary_material(), Some(blue));
}

#[test]
fn test_failed_entry_does_not_block_remaining_entries() {
    // First pair's render material is unregistered; second pair is fine.
    let mut registry = MaterialRegistry::new();
    let blue = registry.register(Material::new("blue")).unwrap();
    let green = registry.register(Material::new("green")).unwrap();
    let yellow = registry.register(Material::new("yellow")).unwrap();

    let mut scene = Scene::new();
    let bad = scene.add_object_with_slots("cube", vec![blue]);
    let good = scene.add_object_with_slots("plane", vec![yellow]);

    let mapping = SwapMapping::new(vec![
        MappingEntry::new("red", "blue"),
        MappingEntry::new("green", "yellow"),
    ])
    .unwrap();
    let report = SwapEngine::new().swap_to_render_materials(&mut scene, &registry, &mapping);

    assert_eq!(report.count_at(Severity::Error), 1);
    assert_eq!(report.count_at(Severity::Info), 1);
    assert_eq!(scene.object(bad).unwrap().primary_material(), Some(blue));
    assert_eq!(scene.object(good).unwrap().primary_material(), Some(green));
}

#[test]
fn test_multi_entry_independence() {
    // Only the yellow side of the second pair has matching objects.
    let mut f = fixture();
    f.scene = Scene::new();
    let plane = f.scene.add_object_with_slots("plane", vec![f.yellow]);
    let bystander = f.scene.add_object_with_slots("cube", vec![f.red]);

    let engine = SwapEngine::new();
    let report = engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());

    assert_eq!(report.entries()[0].outcome, EntryOutcome::NoMatches);
    assert_eq!(report.entries()[0].target, "red_mat");
    assert_eq!(report.entries()[1].outcome, EntryOutcome::Assigned { count: 1 });
    assert_eq!(report.entries()[1].target, "green_mat");

    let green = f.registry.resolve("green_mat").unwrap();
    assert_eq!(f.scene.object(plane).unwrap().primary_material(), Some(green));
    assert_eq!(f.scene.object(bystander).unwrap().primary_material(), Some(f.red));
}

#[test]
fn test_any_slot_mode_matches_secondary_slots() {
    let mut f = fixture();
    f.scene = Scene::new();
    let id = f
        .scene
        .add_object_with_slots("trim", vec![f.yellow, f.blue]);

    let primary_only = SwapEngine::new();
    assert!(primary_only
        .find_objects_by_material(&f.scene, &f.registry, "blue_mat")
        .is_empty());

    let any_slot = SwapEngine::with_config(SwapConfig {
        match_mode: MatchMode::AnySlot,
    });
    let report = any_slot.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());

    // Matched via slot 1, but only slot 0 is rewritten.
    assert_eq!(report.entries()[0].outcome, EntryOutcome::Assigned { count: 1 });
    let object = f.scene.object(id).unwrap();
    assert_eq!(object.slots(), Some([f.red, f.blue].as_slice()));
}

#[test]
fn test_slotless_objects_are_skipped() {
    let mut f = fixture();
    let engine = SwapEngine::new();

    let matched = engine.find_objects_by_material(&f.scene, &f.registry, "blue_mat");
    assert!(f
        .scene
        .objects()
        .filter(|object| !object.has_slots())
        .all(|object| !matched.contains(&object.id())));

    // A swap over a scene containing slotless objects must not touch them.
    engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());
    let camera = f
        .scene
        .objects()
        .find(|object| object.name == "camera")
        .unwrap();
    assert!(!camera.has_slots());
}

#[test]
fn test_unassigned_material_falls_to_host_sweep() {
    // Known limitation carried from the original tool: the engine does not
    // pin materials it unassigns, so the host's unused-asset sweep may
    // discard them.
    let mut f = fixture();
    let engine = SwapEngine::new();

    engine.swap_to_render_materials(&mut f.scene, &f.registry, &mapping());

    let removed = f.registry.sweep_unused(&f.scene);
    assert!(removed.contains(&"blue_mat".to_string()));
    assert!(removed.contains(&"yellow_mat".to_string()));
    assert!(f.registry.resolve("blue_mat").is_none());
    assert_eq!(f.registry.resolve("red_mat"), Some(f.red));
}
