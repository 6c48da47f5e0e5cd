use skyhop_core::game_trait::{GameEvent, LoseReason};
use skyhop_core::input::InputState;

use crate::config::PhysicsConfig;
use crate::entities::{Facing, Player};
use crate::level::Level;
use crate::physics::{
    apply_gravity, integrate_horizontal_velocity, move_x_and_resolve, move_y_and_resolve,
};

/// One tick's worth of player intent, with the jump edge already consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlIntent {
    /// -1 (left), 0, +1 (right).
    pub axis: f32,
    /// True only on the tick the jump control was pressed.
    pub jump_pressed: bool,
}

impl ControlIntent {
    /// Read the held flags and consume the jump edge from `input`.
    pub fn consume(input: &mut InputState) -> Self {
        Self {
            axis: input.horizontal_axis(),
            jump_pressed: input.consume_jump_press(),
        }
    }
}

/// Tick the jump buffer and coyote timers and fire a jump if both windows allow.
///
/// Returns true when a jump fired this tick.
pub fn update_jump(
    player: &mut Player,
    jump_pressed: bool,
    dt: f32,
    physics: &PhysicsConfig,
) -> bool {
    player.jump_buffer -= dt;
    player.coyote_time -= dt;
    if jump_pressed {
        player.jump_buffer = physics.jump_buffer_window;
    }

    if player.jump_buffer > 0.0 && (player.on_ground || player.coyote_time > 0.0) {
        player.vy = -physics.jump_velocity;
        player.on_ground = false;
        player.jump_buffer = 0.0;
        player.coyote_time = 0.0;
        return true;
    }
    false
}

/// Advance the player one tick against `level` and evaluate triggers.
///
/// Order: horizontal velocity, jump, gravity, x move + resolve, y move +
/// resolve, coyote refresh, then bounce pads, coins, goal, and the fall-out
/// check. Win/lose requests go through `level`, which ignores them unless
/// playing.
pub fn update_player(
    player: &mut Player,
    level: &mut Level,
    intent: ControlIntent,
    dt: f32,
    physics: &PhysicsConfig,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let was_on_ground = player.on_ground;

    if intent.axis < 0.0 {
        player.facing = Facing::Left;
    } else if intent.axis > 0.0 {
        player.facing = Facing::Right;
    }

    integrate_horizontal_velocity(player, intent.axis, dt, physics);

    if update_jump(player, intent.jump_pressed, dt, physics) {
        events.push(GameEvent::Jumped);
    }

    apply_gravity(player, dt, physics);
    move_x_and_resolve(player, level.platforms(), dt);

    let pre_step_bottom = player.body.bottom();
    let tick_vy = player.vy;
    player.on_ground = move_y_and_resolve(player, level.platforms(), dt);
    if player.on_ground {
        player.coyote_time = physics.coyote_window;
    }

    if check_bounce_pads(player, level, pre_step_bottom, tick_vy, physics) {
        events.push(GameEvent::Bounced);
    } else if player.on_ground && !was_on_ground {
        events.push(GameEvent::Landed);
    }
    collect_coins(player, level, &mut events);

    if player.body.overlaps(&level.goal().body) && level.all_coins_collected() && level.win() {
        events.push(GameEvent::Won {
            time_left: level.time_left(),
        });
    }

    if player.body.y > physics.fall_out_y && level.lose(LoseReason::FellOut) {
        events.push(GameEvent::Lost {
            reason: LoseReason::FellOut,
        });
    }

    events
}

/// Launch the player off any pad it fell onto from above this tick.
///
/// `pre_step_bottom` is the player's bottom edge before vertical integration
/// and `tick_vy` the vertical velocity before platform correction, so a pad
/// lying on a floor still fires when the floor stopped the fall.
fn check_bounce_pads(
    player: &mut Player,
    level: &Level,
    pre_step_bottom: f32,
    tick_vy: f32,
    physics: &PhysicsConfig,
) -> bool {
    let mut bounced = false;
    for pad in level.pads() {
        // vy is negative once an earlier pad has fired.
        let falling = tick_vy > 0.0 && player.vy >= 0.0;
        if falling && pre_step_bottom <= pad.body.y && player.body.overlaps(&pad.body) {
            player.body.y = pad.body.y - player.body.h;
            player.vy = -physics.bounce_velocity;
            player.on_ground = false;
            player.coyote_time = 0.0;
            tracing::debug!(x = player.body.x, pad_y = pad.body.y, "Bounce pad fired");
            bounced = true;
        }
    }
    bounced
}

fn collect_coins(player: &Player, level: &mut Level, events: &mut Vec<GameEvent>) {
    for i in 0..level.coins().len() {
        let coin = level.coins()[i];
        if coin.collected || !player.body.overlaps(&coin.body) {
            continue;
        }
        if level.collect_coin(i) {
            let collected = level.collected_coins();
            let total = level.total_coins();
            tracing::debug!(coin = i, collected, total, "Coin collected");
            events.push(GameEvent::CoinCollected { collected, total });
        }
    }
}
