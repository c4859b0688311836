//! End-to-end tests for the generation pipeline, publication, and water.

use std::sync::{Arc, Mutex};

use landform_core::config::{GenerationConfig, TerrainSettings};
use landform_core::error::ConfigError;
use landform_core::gradient::{ColorGradient, GradientStop};
use landform_core::types::Color;

use crate::error::TerrainError;
use crate::generator::TerrainGenerator;
use crate::service::TerrainService;
use crate::water::WaterSurface;

fn config(segments_x: u32, segments_z: u32) -> GenerationConfig {
    GenerationConfig {
        segments_x,
        segments_z,
        ..Default::default()
    }
}

// ---- Buffer sizes ----

#[test]
fn test_buffer_lengths_match_segment_counts() {
    let generator = TerrainGenerator::new();
    for (sx, sz) in [(1, 1), (1, 7), (13, 2), (20, 20), (64, 33)] {
        let snapshot = generator.generate(&config(sx, sz)).unwrap();
        let expected_vertices = (sx as usize + 1) * (sz as usize + 1);
        assert_eq!(snapshot.vertex_count(), expected_vertices);
        assert_eq!(snapshot.indices().len(), sx as usize * sz as usize * 6);
        assert_eq!(snapshot.colors().len(), expected_vertices);
        assert_eq!(snapshot.normals().len(), expected_vertices);
    }
}

#[test]
fn test_single_quad_scenario() {
    let snapshot = TerrainGenerator::new().generate(&config(1, 1)).unwrap();
    assert_eq!(snapshot.vertex_count(), 4);
    assert_eq!(snapshot.indices(), &[0, 2, 1, 1, 2, 3]);
}

// ---- Elevation bounds ----

#[test]
fn test_bounds_are_tight() {
    let cfg = GenerationConfig {
        segments_x: 50,
        segments_z: 40,
        height_amplitude: 8.0,
        noise_scale: 0.5,
        seed: 17,
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();
    let range = snapshot.elevation_range();

    assert!(range.min < range.max, "noise should produce relief");
    for p in snapshot.positions() {
        assert!(range.min <= p.y && p.y <= range.max);
    }
    assert!(snapshot.positions().iter().any(|p| p.y == range.min));
    assert!(snapshot.positions().iter().any(|p| p.y == range.max));
}

// ---- Flat terrain ----

#[test]
fn test_flat_terrain_scenario() {
    let cfg = GenerationConfig {
        segments_x: 2,
        segments_z: 2,
        world_size_x: 2.0,
        world_size_z: 2.0,
        height_amplitude: 0.0,
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();

    assert_eq!(snapshot.vertex_count(), 9);
    assert_eq!(snapshot.indices().len(), 24);
    assert!(snapshot.positions().iter().all(|p| p.y == 0.0));

    let range = snapshot.elevation_range();
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 0.0);

    let start = cfg.gradient.evaluate(0.0);
    assert!(snapshot.colors().iter().all(|c| *c == start));
}

#[test]
fn test_flat_terrain_uses_gradient_start_for_any_gradient() {
    let gradient = ColorGradient::new(vec![
        GradientStop::new(0.4, Color::rgb(0.2, 0.4, 0.6)),
        GradientStop::new(1.0, Color::WHITE),
    ])
    .unwrap();
    let cfg = GenerationConfig {
        segments_x: 9,
        segments_z: 4,
        height_amplitude: 0.0,
        gradient: gradient.clone(),
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();
    let expected = gradient.evaluate(0.0);
    assert_eq!(expected, Color::rgb(0.2, 0.4, 0.6));
    assert!(snapshot.colors().iter().all(|c| *c == expected));
}

// ---- Determinism ----

#[test]
fn test_generation_is_bit_identical() {
    let cfg = GenerationConfig {
        segments_x: 120,
        segments_z: 90,
        height_amplitude: 6.0,
        seed: 4242,
        ..Default::default()
    };
    let a = TerrainGenerator::new().generate(&cfg).unwrap();
    let b = TerrainGenerator::with_threads(2).unwrap().generate(&cfg).unwrap();

    let bits = |s: &crate::GeometrySnapshot| -> Vec<u32> {
        s.positions()
            .iter()
            .flat_map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
            .chain(s.colors().iter().flat_map(|c| c.to_array().map(f32::to_bits)))
            .collect()
    };
    assert_eq!(bits(&a), bits(&b));
    assert_eq!(a.indices(), b.indices());
}

#[test]
fn test_different_seeds_differ() {
    let a = TerrainGenerator::new()
        .generate(&GenerationConfig {
            seed: 1,
            ..Default::default()
        })
        .unwrap();
    let b = TerrainGenerator::new()
        .generate(&GenerationConfig {
            seed: 2,
            ..Default::default()
        })
        .unwrap();
    assert_ne!(a.positions(), b.positions());
}

// ---- Winding ----

#[test]
fn test_every_cell_is_two_triangles_sharing_the_diagonal() {
    let snapshot = TerrainGenerator::new().generate(&config(5, 3)).unwrap();
    let w = snapshot.topology().row_width() as u32;

    for (cell, group) in snapshot.indices().chunks_exact(6).enumerate() {
        let x = cell as u32 % 5;
        let z = cell as u32 / 5;
        let v = z * w + x;
        assert_eq!(group, &[v, v + w, v + 1, v + 1, v + w, v + w + 1]);
    }
}

#[test]
fn test_normals_face_up_on_generated_terrain() {
    let snapshot = TerrainGenerator::new().generate(&config(30, 30)).unwrap();
    for n in snapshot.normals() {
        assert!((n.length() - 1.0).abs() < 1e-4);
        assert!(n.y > 0.0, "terrain normals should point upward, got {n}");
    }
}

// ---- Extreme but valid inputs ----

#[test]
fn test_huge_world_size_generates() {
    let cfg = GenerationConfig {
        segments_x: 4,
        segments_z: 4,
        world_size_x: 1e20,
        world_size_z: 1e20,
        height_amplitude: 3.0,
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();
    assert_eq!(snapshot.vertex_count(), 25);
    assert!(snapshot
        .positions()
        .iter()
        .all(|p| (0.0..=3.0).contains(&p.y)));
}

#[test]
fn test_huge_noise_scale_generates() {
    let cfg = GenerationConfig {
        segments_x: 4,
        segments_z: 4,
        noise_scale: 1e20,
        height_amplitude: 3.0,
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();
    let range = snapshot.elevation_range();
    assert!(0.0 <= range.min && range.max <= 3.0);
}

#[test]
fn test_overflowing_sample_coordinates_generate() {
    // world * scale overflows f32 to infinity.
    let cfg = GenerationConfig {
        segments_x: 3,
        segments_z: 3,
        world_size_x: f32::MAX,
        world_size_z: f32::MAX,
        noise_scale: 1e20,
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();
    assert!(snapshot.positions().iter().all(|p| p.y.is_finite()));
}

// ---- Configuration errors ----

#[test]
fn test_zero_segments_rejected() {
    let generator = TerrainGenerator::new();
    for (sx, sz) in [(0, 4), (4, 0), (0, 0)] {
        let err = generator.generate(&config(sx, sz)).unwrap_err();
        assert!(matches!(
            err,
            TerrainError::Config(ConfigError::SegmentsOutOfRange { value: 0, .. })
        ));
    }
}

// ---- Service and listeners ----

#[test]
fn test_service_notifies_water_surface() {
    let water = Arc::new(Mutex::new(WaterSurface::new(0.0)));
    let mut service = TerrainService::default();
    service.register(Arc::clone(&water));
    let rx = service.subscribe();

    let snapshot = service.regenerate(&config(10, 10)).unwrap();
    let range = snapshot.elevation_range();

    let event = rx.try_recv().unwrap();
    assert_eq!(event.min_height, range.min);
    assert_eq!(event.max_height, range.max);
    assert_eq!(event.vertex_count, 121);
    assert_eq!(event.triangle_count, 200);

    let placement = water.lock().unwrap().placement().unwrap();
    assert!((placement.height - range.lerp(0.2)).abs() < 1e-6);
    assert_eq!(placement.center.x, 10.0);
    assert_eq!(placement.center.z, 10.0);
}

#[test]
fn test_service_failure_keeps_previous_snapshot() {
    let mut service = TerrainService::default();
    let rx = service.subscribe();
    let first = service.regenerate(&config(4, 4)).unwrap();
    assert!(rx.try_recv().is_ok());

    let bad = GenerationConfig {
        noise_scale: -1.0,
        ..Default::default()
    };
    assert!(service.regenerate(&bad).is_err());
    assert!(rx.try_recv().is_err(), "failed generation must not notify");

    let current = service.current().unwrap();
    assert!(Arc::ptr_eq(&current, &first));
    assert_eq!(service.config().unwrap().segments_x, 4);
}

#[test]
fn test_service_apply_settings_and_refresh() {
    let mut service = TerrainService::default();
    assert!(service.refresh().is_none());

    let settings = TerrainSettings {
        base_size_x: 10,
        base_size_z: 6,
        detail: 2.0,
        ..Default::default()
    };
    let first = service.apply_settings(&settings).unwrap();
    assert_eq!(first.topology().segments_x(), 20);
    assert_eq!(first.topology().segments_z(), 12);

    let again = service.refresh().unwrap().unwrap();
    assert!(!Arc::ptr_eq(&first, &again), "refresh publishes a new snapshot");
    assert_eq!(first.positions(), again.positions());
}

#[test]
fn test_snapshot_handles_survive_regeneration() {
    let mut service = TerrainService::default();
    let old = service.regenerate(&config(3, 3)).unwrap();
    let new = service.regenerate(&config(6, 6)).unwrap();

    assert_eq!(old.vertex_count(), 16);
    assert_eq!(new.vertex_count(), 49);
    assert!(Arc::ptr_eq(&service.current().unwrap(), &new));
}

#[test]
fn test_flooded_surface_on_generated_terrain() {
    let cfg = GenerationConfig {
        segments_x: 40,
        segments_z: 40,
        height_amplitude: 5.0,
        seed: 8,
        ..Default::default()
    };
    let snapshot = TerrainGenerator::new().generate(&cfg).unwrap();
    let flooded: crate::FloodedSurface = crate::flooded_surface(&snapshot);
    assert_eq!(flooded, crate::flooded_surface_at(&snapshot, 0.7));

    assert_eq!(flooded.positions.len(), snapshot.vertex_count());
    assert!(flooded.positions.iter().all(|p| p.y >= flooded.level));
    assert_eq!(flooded.indices.len() % 3, 0);
    for tri in flooded.indices.chunks_exact(3) {
        let y = flooded.positions[tri[0] as usize].y;
        assert!(tri.iter().all(|&i| flooded.positions[i as usize].y == y));
    }
}
