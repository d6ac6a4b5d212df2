use glam::Vec3;
use scene::constants::{BOX_POSITIONS, MAX_DIST, MAX_STEPS, SURF_DIST};
use scene::{Scene, SurfaceId};

#[test]
fn downward_ray_hits_plane_at_origin_height() {
    let scene = Scene::new();
    let origin = Vec3::new(20.0, 5.0, -20.0);
    let hit = scene.march(origin, Vec3::NEG_Y);
    assert_eq!(hit.surface, SurfaceId::Plane);
    assert!((hit.distance - origin.y).abs() < 1e-3, "distance={}", hit.distance);
}

#[test]
fn camera_ray_towards_centre_box_hits_it() {
    let scene = Scene::new();
    let origin = Vec3::new(0.0, 2.0, 0.0);
    let direction = (BOX_POSITIONS[0] - origin).normalize();
    let hit = scene.march(origin, direction);
    assert_eq!(hit.surface, SurfaceId::Box(0));
    assert!(hit.distance < MAX_DIST);

    // The front face sits at z = 5.
    let p = origin + direction * hit.distance;
    assert!((p.z - 5.0).abs() < 0.01, "p={p:?}");
}

#[test]
fn camera_rays_towards_side_boxes_hit_them() {
    let scene = Scene::new();
    let origin = Vec3::new(0.0, 2.0, 0.0);
    for (index, centre) in BOX_POSITIONS.iter().enumerate() {
        let hit = scene.march(origin, (*centre - origin).normalize());
        assert_eq!(hit.surface, SurfaceId::Box(index), "box {index}");
    }
}

#[test]
fn hit_point_is_within_surface_tolerance() {
    let scene = Scene::new();
    let origin = Vec3::new(0.0, 2.0, 0.0);
    let direction = Vec3::new(0.0, -0.5, 1.0).normalize();
    let hit = scene.march(origin, direction);
    let (d, _) = scene.distance(origin + direction * hit.distance);
    assert!(d < SURF_DIST, "d={d}");
}

#[test]
fn grazing_ray_terminates_within_step_cap() {
    // Skims the plane almost parallel: tiny steps, cap ends the loop.
    let scene = Scene::new();
    let origin = Vec3::new(0.0, 0.01, -50.0);
    let direction = Vec3::new(0.0, -0.000_01, -1.0).normalize();
    let hit = scene.march(origin, direction);
    let max_travel = 0.01 * MAX_STEPS as f32;
    assert!(hit.distance <= max_travel, "distance={}", hit.distance);
    assert_eq!(hit.surface, SurfaceId::Plane);
}
