use glam::{Vec2, Vec3};
use orbit_cam::core::controller::Button;
use orbit_cam::dispatch::{BindingScheme, Operation};
use orbit_cam::input::{normalize_movement, InputState, BUTTON_MIDDLE, BUTTON_PRIMARY, BUTTON_SECONDARY};
use orbit_cam::projection::Lens;
use orbit_cam::types::Viewport;
use orbit_cam::zoom::{apply_zoom_ratio, PanStrategy, ZoomStrategy, MAX_FOV, MIN_FOV};
use orbit_cam::{CameraConfig, CameraRig};
use std::f32::consts::FRAC_PI_4;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn rig_with(config: CameraConfig) -> CameraRig {
    CameraRig::from_config(&config, Viewport::new(WIDTH, HEIGHT).unwrap()).unwrap()
}

fn pointer(buttons: u8, from: Vec2, to: Vec2) -> InputState {
    let movement = to - from;
    InputState {
        buttons,
        position: to,
        movement,
        delta: normalize_movement(movement, Vec2::new(WIDTH as f32, HEIGHT as f32)),
        ..Default::default()
    }
}

fn to_pixel(rig: &CameraRig, point: Vec3) -> Vec2 {
    let ndc = rig.matrices().view_projection.project_point3(point);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * WIDTH as f32,
        (1.0 - ndc.y) * 0.5 * HEIGHT as f32,
    )
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_exactly_one_operation_per_event() {
        let mut rig = rig_with(CameraConfig {
            scheme: BindingScheme::Buttons,
            ..Default::default()
        });
        let from = Vec2::new(400.0, 300.0);
        let to = Vec2::new(420.0, 310.0);

        let cases = [
            (BUTTON_PRIMARY, Some(Operation::Rotate)),
            (BUTTON_SECONDARY, Some(Operation::Pinch)),
            (BUTTON_MIDDLE, Some(Operation::Pan)),
            (BUTTON_MIDDLE | BUTTON_PRIMARY, Some(Operation::Rotate)),
            (BUTTON_MIDDLE | BUTTON_SECONDARY, Some(Operation::Pinch)),
            (BUTTON_PRIMARY | BUTTON_SECONDARY, None),
            (0, None),
        ];
        for (buttons, expected) in cases {
            assert_eq!(rig.handle_input(&pointer(buttons, from, to)), expected, "buttons {}", buttons);
        }
    }

    #[test]
    fn test_rotate_keeps_target_and_radius() {
        let mut rig = rig_with(CameraConfig::default());
        let r = rig.camera().radius();
        rig.handle_input(&pointer(BUTTON_PRIMARY, Vec2::new(100.0, 100.0), Vec2::new(300.0, 50.0)));

        assert_eq!(rig.camera().target, Vec3::ZERO);
        assert!((rig.camera().radius() - r).abs() < 1e-4);
    }

    #[test]
    fn test_shift_drag_dollies() {
        let mut rig = rig_with(CameraConfig::default());
        let mut input = pointer(BUTTON_PRIMARY, Vec2::new(400.0, 300.0), Vec2::new(480.0, 300.0));
        input.keys.insert(Button::Shift);

        assert_eq!(rig.handle_input(&input), Some(Operation::Dolly));
        let offset = rig.camera().eye() - rig.camera().target;
        assert!((offset.length() - 12.0_f32.sqrt()).abs() < 1e-3);
        assert!(rig.camera().target.length() > 0.1);
    }

    #[test]
    fn test_view_projection_snapshot_matches_matrices() {
        let mut rig = rig_with(CameraConfig::default());
        rig.handle_input(&pointer(BUTTON_MIDDLE, Vec2::new(400.0, 300.0), Vec2::new(350.0, 320.0)));

        let snapshot = rig.view_projection();
        assert_eq!(snapshot.view_proj(), rig.matrices().view_projection);
        assert!((Vec3::from_array(snapshot.eye) - rig.camera().eye()).length() < 1e-4);
    }
}

#[cfg(test)]
mod strategy_tests {
    use super::*;

    #[test]
    fn test_anchored_pan_keeps_grabbed_point_under_pointer() {
        let mut rig = rig_with(CameraConfig {
            pan: PanStrategy::PlaneAnchored,
            ..Default::default()
        });
        let from = Vec2::new(380.0, 260.0);
        let to = Vec2::new(450.0, 330.0);
        let grabbed = rig.cast(from);

        assert_eq!(
            rig.handle_input(&pointer(BUTTON_MIDDLE, from, to)),
            Some(Operation::Pan)
        );

        let pixel = to_pixel(&rig, grabbed);
        assert!((pixel - to).length() < 1.0, "grabbed point at {:?}, pointer at {:?}", pixel, to);
    }

    #[test]
    fn test_anchored_pan_is_rigid() {
        let mut rig = rig_with(CameraConfig {
            pan: PanStrategy::PlaneAnchored,
            ..Default::default()
        });
        let offset = rig.camera().eye() - rig.camera().target;
        rig.handle_input(&pointer(BUTTON_MIDDLE, Vec2::new(200.0, 200.0), Vec2::new(260.0, 180.0)));

        let after = rig.camera().eye() - rig.camera().target;
        assert!((after - offset).length() < 1e-3);
    }

    #[test]
    fn test_angular_zoom_widens_when_dragging_out() {
        let mut rig = rig_with(CameraConfig {
            zoom: ZoomStrategy::AngularRatio,
            ..Default::default()
        });
        let r = rig.camera().radius();

        let applied = rig.handle_input(&pointer(
            BUTTON_SECONDARY,
            Vec2::new(500.0, 300.0),
            Vec2::new(600.0, 300.0),
        ));
        assert_eq!(applied, Some(Operation::Pinch));

        let fov = rig.lens().yfov;
        assert!(fov > 1.4 && fov < 1.6, "fov {}", fov);
        assert!((rig.camera().radius() - r).abs() < 1e-4);
    }

    #[test]
    fn test_angular_zoom_stays_in_bounds() {
        let mut rig = rig_with(CameraConfig {
            zoom: ZoomStrategy::AngularRatio,
            ..Default::default()
        });
        for _ in 0..10 {
            rig.handle_input(&pointer(BUTTON_SECONDARY, Vec2::new(450.0, 300.0), Vec2::new(700.0, 300.0)));
            assert!(rig.lens().yfov <= MAX_FOV);
        }
        assert_eq!(rig.lens().yfov, MAX_FOV);

        for _ in 0..10 {
            rig.handle_input(&pointer(BUTTON_SECONDARY, Vec2::new(700.0, 300.0), Vec2::new(450.0, 300.0)));
            assert!(rig.lens().yfov >= MIN_FOV);
        }
        assert_eq!(rig.lens().yfov, MIN_FOV);
    }

    #[test]
    fn test_angular_zoom_from_target_pixel_is_skipped() {
        let mut rig = rig_with(CameraConfig {
            zoom: ZoomStrategy::AngularRatio,
            lens: Lens {
                near: 1.0,
                ..Lens::default()
            },
            ..Default::default()
        });
        let fov = rig.lens().yfov;
        let before = *rig.matrices();
        let center = Vec2::new(WIDTH as f32, HEIGHT as f32) * 0.5;

        // Previous hit is the target itself: no angle to take a ratio of
        let applied = rig.handle_input(&pointer(BUTTON_SECONDARY, center, center + Vec2::new(100.0, 0.0)));
        assert_eq!(applied, None);
        assert_eq!(rig.lens().yfov, fov);
        assert_eq!(*rig.matrices(), before);
    }

    #[test]
    fn test_anchored_zoom_moves_by_hit_distance() {
        let mut rig = rig_with(CameraConfig {
            zoom: ZoomStrategy::PlaneAnchored,
            scheme: BindingScheme::Buttons,
            ..Default::default()
        });
        let r = rig.camera().radius();
        let dir = rig.camera().direction();
        let from = Vec2::new(400.0, 300.0);
        let to = Vec2::new(460.0, 300.0);
        let step = rig.cast(to).distance(rig.cast(from));

        assert_eq!(rig.handle_input(&pointer(BUTTON_SECONDARY, from, to)), Some(Operation::Pinch));
        assert!(step > 0.1);
        assert!((rig.camera().radius() - (r - step)).abs() < 1e-3);
        assert!((rig.camera().direction() - dir).length() < 1e-4);
        assert_eq!(rig.camera().target, Vec3::ZERO);
    }

    #[test]
    fn test_anchored_zoom_follows_vertical_drag() {
        let mut rig = rig_with(CameraConfig {
            zoom: ZoomStrategy::PlaneAnchored,
            scheme: BindingScheme::Buttons,
            ..Default::default()
        });
        let r = rig.camera().radius();

        // Dragging down pulls in
        let (from, to) = (Vec2::new(400.0, 300.0), Vec2::new(400.0, 360.0));
        let step = rig.cast(to).distance(rig.cast(from));
        assert_eq!(rig.handle_input(&pointer(BUTTON_SECONDARY, from, to)), Some(Operation::Pinch));
        assert!((rig.camera().radius() - (r - step)).abs() < 1e-3);

        // Dragging up pushes out
        let r = rig.camera().radius();
        let step = rig.cast(from).distance(rig.cast(to));
        rig.handle_input(&pointer(BUTTON_SECONDARY, to, from));
        assert!((rig.camera().radius() - (r + step)).abs() < 1e-3);
    }

    #[test]
    fn test_fov_ratio_converges_to_upper_clamp() {
        let mut yfov = FRAC_PI_4;
        for _ in 0..100 {
            let next = apply_zoom_ratio(yfov, 10.0);
            assert!(next <= MAX_FOV);
            if next == yfov {
                break;
            }
            yfov = next;
        }
        assert_eq!(yfov, MAX_FOV);
    }
}

#[cfg(test)]
mod resize_tests {
    use super::*;

    #[test]
    fn test_burst_collapses_to_last_size() {
        let mut rig = rig_with(CameraConfig::default());
        for width in [900, 1000, 1100, 1280] {
            rig.request_resize(width, 720);
            assert!(!rig.tick(0.05));
        }
        assert_eq!(rig.viewport(), Viewport::new(WIDTH, HEIGHT).unwrap());

        assert!(rig.tick(0.2));
        assert_eq!(rig.viewport(), Viewport::new(1280, 720).unwrap());
        assert!(!rig.tick(1.0));
    }

    #[test]
    fn test_immediate_resize_updates_aspect() {
        let mut rig = rig_with(CameraConfig::default());
        rig.resize(600, 600).unwrap();

        let p = rig.matrices().projection;
        assert!((p.x_axis.x - p.y_axis.y).abs() < 1e-6);
    }

    #[test]
    fn test_debounce_window_from_config() {
        let mut rig = rig_with(CameraConfig {
            resize_debounce_ms: 0,
            ..Default::default()
        });
        rig.request_resize(1024, 768);
        assert!(rig.tick(0.0));
        assert_eq!(rig.viewport(), Viewport::new(1024, 768).unwrap());
    }
}
