// Host-side tests for pointer projection and plane raycasting.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod input {
    include!("../src/input.rs");
}

use camera::*;
use glam::{Vec2, Vec3};
use input::*;

#[test]
fn pointer_ndc_maps_corners_and_flips_y() {
    let tl = pointer_ndc(0.0, 0.0, 800.0, 600.0).unwrap();
    assert_eq!(tl, Vec2::new(-1.0, 1.0));

    let br = pointer_ndc(800.0, 600.0, 800.0, 600.0).unwrap();
    assert_eq!(br, Vec2::new(1.0, -1.0));

    let center = pointer_ndc(400.0, 300.0, 800.0, 600.0).unwrap();
    assert_eq!(center, Vec2::ZERO);
}

#[test]
fn pointer_ndc_rejects_empty_viewport() {
    assert!(pointer_ndc(10.0, 10.0, 0.0, 600.0).is_none());
    assert!(pointer_ndc(10.0, 10.0, 800.0, 0.0).is_none());
}

#[test]
fn first_touch_point_uses_first_entry() {
    assert_eq!(
        first_touch_point(&[(12.0, 34.0), (56.0, 78.0)]),
        Some(Vec2::new(12.0, 34.0))
    );
    assert_eq!(first_touch_point(&[]), None);
}

#[test]
fn center_ray_points_at_camera_target() {
    let cam = PerspectiveCamera::looking_at(Vec3::new(0.0, 1.5, 2.0), Vec3::ZERO, 50.0);
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    let expected = (Vec3::ZERO - cam.eye).normalize();
    assert_eq!(ray.origin, cam.eye);
    assert!(ray.dir.abs_diff_eq(expected, 1e-4), "dir={:?}", ray.dir);
}

#[test]
fn rays_through_right_edge_bend_right() {
    let cam = PerspectiveCamera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 45.0);
    let ray = cam.ray_from_ndc(Vec2::new(1.0, 0.0));
    assert!(ray.dir.x > 0.0);
    assert!(ray.dir.z < 0.0);
    assert!((ray.dir.length() - 1.0).abs() < 1e-5);
}

#[test]
fn infinite_plane_hit_from_above() {
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::Y);
    let ray = Ray {
        origin: Vec3::new(0.3, 2.0, -0.2),
        dir: Vec3::NEG_Y,
    };
    let hit = plane.intersect(&ray).unwrap();
    assert!(hit.abs_diff_eq(Vec3::new(0.3, 0.0, -0.2), 1e-6));
}

#[test]
fn plane_behind_ray_is_missed() {
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::Y);
    let ray = Ray {
        origin: Vec3::new(0.0, 2.0, 0.0),
        dir: Vec3::Y,
    };
    assert!(plane.intersect(&ray).is_none());
}

#[test]
fn parallel_ray_is_missed() {
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::Y);
    let ray = Ray {
        origin: Vec3::new(0.0, 1.0, 0.0),
        dir: Vec3::X,
    };
    assert!(plane.intersect(&ray).is_none());
}

#[test]
fn single_sided_plane_ignores_back_face() {
    let ray = Ray {
        origin: Vec3::new(0.0, 1.0, 0.0),
        dir: Vec3::NEG_Y,
    };
    let front = DragPlane::rect(Vec3::ZERO, Vec3::Y, Vec2::splat(2.0), false);
    assert!(front.intersect(&ray).is_some());

    let back = DragPlane::rect(Vec3::ZERO, Vec3::NEG_Y, Vec2::splat(2.0), false);
    assert!(back.intersect(&ray).is_none());

    let both = DragPlane::rect(Vec3::ZERO, Vec3::NEG_Y, Vec2::splat(2.0), true);
    assert!(both.intersect(&ray).is_some());
}

#[test]
fn rect_plane_bounds_hits() {
    let plane = DragPlane::rect(Vec3::ZERO, Vec3::Y, Vec2::new(1.0, 1.0), true);
    let inside = Ray {
        origin: Vec3::new(0.4, 1.0, -0.4),
        dir: Vec3::NEG_Y,
    };
    let outside = Ray {
        origin: Vec3::new(0.6, 1.0, 0.0),
        dir: Vec3::NEG_Y,
    };
    assert!(plane.intersect(&inside).is_some());
    assert!(plane.intersect(&outside).is_none());
}

#[test]
fn degenerate_normal_never_hits() {
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::ZERO);
    let ray = Ray {
        origin: Vec3::Y,
        dir: Vec3::NEG_Y,
    };
    assert!(plane.intersect(&ray).is_none());
}

#[test]
fn raycast_agrees_with_render_projection() {
    let mut cam = PerspectiveCamera::looking_at(Vec3::new(0.5, 1.5, 2.0), Vec3::ZERO, 60.0);
    cam.aspect = 16.0 / 9.0;
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::Y);
    for ndc in [Vec2::new(0.3, -0.2), Vec2::new(-0.6, 0.1), Vec2::ZERO] {
        let hit = plane.intersect(&cam.ray_from_ndc(ndc)).unwrap();
        let back = cam.project(hit).unwrap();
        assert!(back.abs_diff_eq(ndc, 1e-3), "ndc={:?} back={:?}", ndc, back);
    }
}

#[test]
fn points_behind_the_eye_do_not_project() {
    let cam = PerspectiveCamera::looking_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, 45.0);
    assert!(cam.project(Vec3::new(0.0, 0.0, 10.0)).is_none());
}

#[test]
fn top_down_camera_produces_finite_rays_and_matrix() {
    let cam = PerspectiveCamera::looking_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 50.0);
    for ndc in [Vec2::ZERO, Vec2::new(0.5, -0.5), Vec2::new(-1.0, 1.0)] {
        let ray = cam.ray_from_ndc(ndc);
        assert!(ray.dir.is_finite(), "ndc={:?} dir={:?}", ndc, ray.dir);
        assert!(ray.dir.y < 0.0);
    }
    assert!(cam.ray_from_ndc(Vec2::ZERO).dir.abs_diff_eq(Vec3::NEG_Y, 1e-6));
    assert!(cam.view_proj().is_finite());
}

#[test]
fn top_down_raycast_agrees_with_render_projection() {
    let cam = PerspectiveCamera::looking_at(Vec3::new(0.0, 5.0, 0.0), Vec3::ZERO, 50.0);
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::Y);
    let ndc = Vec2::new(0.4, 0.2);
    let hit = plane.intersect(&cam.ray_from_ndc(ndc)).unwrap();
    assert!(cam.project(hit).unwrap().abs_diff_eq(ndc, 1e-3));
}

#[test]
fn nan_ray_never_hits() {
    let plane = DragPlane::infinite(Vec3::ZERO, Vec3::Y);
    let nan_dir = Ray {
        origin: Vec3::new(0.0, 1.0, 0.0),
        dir: Vec3::splat(f32::NAN),
    };
    assert!(plane.intersect(&nan_dir).is_none());

    let nan_origin = Ray {
        origin: Vec3::new(f32::NAN, 1.0, 0.0),
        dir: Vec3::NEG_Y,
    };
    assert!(plane.intersect(&nan_origin).is_none());

    let single = DragPlane::rect(Vec3::ZERO, Vec3::Y, Vec2::splat(4.0), false);
    assert!(single.intersect(&nan_dir).is_none());
}
