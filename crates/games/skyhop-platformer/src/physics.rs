use skyhop_core::geometry::clamp;

use crate::config::PhysicsConfig;
use crate::entities::{Platform, Player};

/// Horizontal acceleration for an input axis (-1, 0, +1).
///
/// Airborne players only get `air_control` of the ground acceleration.
pub fn horizontal_accel(axis: f32, on_ground: bool, physics: &PhysicsConfig) -> f32 {
    let accel = axis * physics.move_accel;
    if on_ground {
        accel
    } else {
        accel * physics.air_control
    }
}

/// Decelerate `vx` toward zero by `friction * dt` without crossing zero.
pub fn apply_friction(vx: f32, friction: f32, dt: f32) -> f32 {
    let speed = (vx.abs() - friction * dt).max(0.0);
    speed.copysign(vx)
}

/// Accelerate from input, cap run speed, and apply ground friction when no
/// direction is held. Uses the grounded flag from the previous tick.
pub fn integrate_horizontal_velocity(
    player: &mut Player,
    axis: f32,
    dt: f32,
    physics: &PhysicsConfig,
) {
    let accel = horizontal_accel(axis, player.on_ground, physics);
    player.vx = clamp(
        player.vx + accel * dt,
        -physics.max_run_speed,
        physics.max_run_speed,
    );
    if player.on_ground && axis == 0.0 {
        player.vx = apply_friction(player.vx, physics.friction, dt);
    }
}

/// Apply gravity, capped at terminal fall speed.
pub fn apply_gravity(player: &mut Player, dt: f32, physics: &PhysicsConfig) {
    player.vy = (player.vy + physics.gravity * dt).min(physics.max_fall_speed);
}

/// Integrate x and push out of every overlapping platform along x only.
///
/// Platforms are visited in list order and each overlap corrects the player
/// independently, so a later platform can override an earlier correction.
/// The push direction comes from the sign of `vx` at contact; once a contact
/// has zeroed `vx`, later overlaps in the same pass leave x alone.
pub fn move_x_and_resolve(player: &mut Player, platforms: &[Platform], dt: f32) {
    player.body.x += player.vx * dt;
    for platform in platforms {
        if !player.body.overlaps(&platform.body) {
            continue;
        }
        if player.vx > 0.0 {
            player.body.x = platform.body.x - player.body.w;
        } else if player.vx < 0.0 {
            player.body.x = platform.body.right();
        }
        player.vx = 0.0;
    }
}

/// Integrate y and push out of every overlapping platform along y only.
///
/// Same order-dependent policy as [`move_x_and_resolve`]. Returns true when
/// any contact pushed the player up out of a floor.
pub fn move_y_and_resolve(player: &mut Player, platforms: &[Platform], dt: f32) -> bool {
    player.body.y += player.vy * dt;
    let mut landed = false;
    for platform in platforms {
        if !player.body.overlaps(&platform.body) {
            continue;
        }
        if player.vy > 0.0 {
            player.body.y = platform.body.y - player.body.h;
            landed = true;
        } else if player.vy < 0.0 {
            player.body.y = platform.body.bottom();
        }
        player.vy = 0.0;
    }
    landed
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyhop_core::geometry::{Rect, Vec2};

    const DT: f32 = 1.0 / 60.0;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), 28.0, 40.0)
    }

    fn platform(x: f32, y: f32, w: f32, h: f32) -> Platform {
        Platform {
            body: Rect::new(x, y, w, h),
        }
    }

    #[test]
    fn air_control_scales_accel() {
        let physics = PhysicsConfig::default();
        let ground = horizontal_accel(1.0, true, &physics);
        let air = horizontal_accel(1.0, false, &physics);
        assert_eq!(ground, physics.move_accel);
        assert!((air - physics.move_accel * physics.air_control).abs() < 1e-3);
        assert_eq!(horizontal_accel(0.0, true, &physics), 0.0);
    }

    #[test]
    fn friction_never_overshoots() {
        assert_eq!(apply_friction(10.0, 2400.0, DT), 0.0);
        assert_eq!(apply_friction(-10.0, 2400.0, DT), 0.0);
        let slowed = apply_friction(-200.0, 2400.0, DT);
        assert!(slowed < 0.0 && slowed > -200.0);
        assert_eq!(apply_friction(0.0, 2400.0, DT), 0.0);
    }

    #[test]
    fn run_speed_is_capped() {
        let physics = PhysicsConfig::default();
        let mut player = player_at(0.0, 0.0);
        player.on_ground = true;
        for _ in 0..200 {
            integrate_horizontal_velocity(&mut player, -1.0, DT, &physics);
        }
        assert_eq!(player.vx, -physics.max_run_speed);
    }

    #[test]
    fn friction_only_when_grounded() {
        let physics = PhysicsConfig::default();
        let mut player = player_at(0.0, 0.0);
        player.vx = 150.0;
        player.on_ground = false;
        integrate_horizontal_velocity(&mut player, 0.0, DT, &physics);
        assert_eq!(player.vx, 150.0, "Airborne vx must not decay");

        player.on_ground = true;
        integrate_horizontal_velocity(&mut player, 0.0, DT, &physics);
        assert!(player.vx < 150.0);
    }

    #[test]
    fn gravity_caps_at_terminal_velocity() {
        let physics = PhysicsConfig::default();
        let mut player = player_at(0.0, 0.0);
        for _ in 0..1000 {
            apply_gravity(&mut player, DT, &physics);
        }
        assert_eq!(player.vy, physics.max_fall_speed);
    }

    #[test]
    fn wall_on_the_right_stops_player() {
        let wall = [platform(100.0, 0.0, 20.0, 100.0)];
        let mut player = player_at(70.0, 20.0);
        player.vx = 300.0;
        move_x_and_resolve(&mut player, &wall, DT);
        assert_eq!(player.body.x, 100.0 - 28.0);
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn wall_on_the_left_stops_player() {
        let wall = [platform(0.0, 0.0, 20.0, 100.0)];
        let mut player = player_at(22.0, 20.0);
        player.vx = -300.0;
        move_x_and_resolve(&mut player, &wall, DT);
        assert_eq!(player.body.x, 20.0);
        assert_eq!(player.vx, 0.0);
    }

    #[test]
    fn landing_snaps_to_floor() {
        let floor = [platform(0.0, 500.0, 960.0, 40.0)];
        let mut player = player_at(60.0, 455.0);
        player.vy = 600.0;
        let landed = move_y_and_resolve(&mut player, &floor, DT);
        assert!(landed);
        assert_eq!(player.body.y, 460.0);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn ceiling_bonk_is_not_landing() {
        let ceiling = [platform(0.0, 100.0, 200.0, 20.0)];
        let mut player = player_at(50.0, 125.0);
        player.vy = -750.0;
        let landed = move_y_and_resolve(&mut player, &ceiling, DT);
        assert!(!landed);
        assert_eq!(player.body.y, 120.0);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn resting_on_edge_is_not_contact() {
        let floor = [platform(0.0, 500.0, 960.0, 40.0)];
        let mut player = player_at(60.0, 460.0);
        player.vy = 0.0;
        let landed = move_y_and_resolve(&mut player, &floor, DT);
        assert!(!landed, "Touching the floor edge is not an overlap");
        assert_eq!(player.body.y, 460.0);
    }

    #[test]
    fn zero_motion_without_overlap_is_noop() {
        let floor = [platform(0.0, 500.0, 960.0, 40.0)];
        let mut player = player_at(60.0, 100.0);
        let before = player.clone();
        move_x_and_resolve(&mut player, &floor, DT);
        assert!(!move_y_and_resolve(&mut player, &floor, DT));
        assert_eq!(player, before);
    }

    #[test]
    fn later_platform_overrides_earlier_correction() {
        // Two stacked floors at a seam: the second in list order wins.
        let platforms = [
            platform(0.0, 500.0, 100.0, 40.0),
            platform(0.0, 495.0, 100.0, 40.0),
        ];
        let mut player = player_at(10.0, 450.0);
        player.vy = 900.0;
        let landed = move_y_and_resolve(&mut player, &platforms, DT);
        assert!(landed);
        // First contact zeroed vy, so the second overlap does not move y.
        assert_eq!(player.body.y, 460.0);

        let reversed = [platforms[1], platforms[0]];
        let mut player = player_at(10.0, 450.0);
        player.vy = 900.0;
        move_y_and_resolve(&mut player, &reversed, DT);
        assert_eq!(player.body.y, 455.0, "Iteration order decides the result");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn airborne_vx_unchanged_without_input(
                vx in -320.0f32..=320.0,
                dt in 0.001f32..0.033,
            ) {
                let physics = PhysicsConfig::default();
                let mut player = player_at(0.0, 0.0);
                player.vx = vx;
                player.on_ground = false;
                integrate_horizontal_velocity(&mut player, 0.0, dt, &physics);
                prop_assert_eq!(player.vx, vx);
            }

            #[test]
            fn friction_preserves_sign(vx in -1000.0f32..1000.0, dt in 0.0f32..0.033) {
                let out = apply_friction(vx, 2400.0, dt);
                prop_assert!(out.abs() <= vx.abs());
                prop_assert!(out == 0.0 || out.signum() == vx.signum());
            }

            #[test]
            fn falling_onto_floor_never_ends_inside_it(
                x in 0.0f32..900.0,
                start_y in 300.0f32..450.0,
                vy in 0.0f32..1400.0,
            ) {
                let floor = [platform(0.0, 500.0, 960.0, 40.0)];
                let mut player = player_at(x, start_y);
                player.vy = vy;
                for _ in 0..120 {
                    apply_gravity(&mut player, 1.0 / 60.0, &PhysicsConfig::default());
                    move_y_and_resolve(&mut player, &floor, 1.0 / 60.0);
                }
                prop_assert!(player.body.bottom() <= 500.0);
            }
        }
    }
}
