pub mod game_trait;
pub mod geometry;
pub mod input;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::game_trait::{Game, GameEvent, GamePhase};
    use crate::input::InputState;

    /// Fixed 60 Hz tick used by the contract helpers.
    pub const TEST_DT: f32 = 1.0 / 60.0;

    /// Run N game ticks with idle input, returning all accumulated events.
    pub fn run_game_ticks(game: &mut dyn Game, n: usize, dt: f32) -> Vec<GameEvent> {
        let mut input = InputState::default();
        run_game_ticks_with(game, n, dt, &mut input)
    }

    /// Run N game ticks reusing one input record, as a host loop would.
    pub fn run_game_ticks_with(
        game: &mut dyn Game,
        n: usize,
        dt: f32,
        input: &mut InputState,
    ) -> Vec<GameEvent> {
        let mut all_events = Vec::new();
        for _ in 0..n {
            all_events.extend(game.update(dt, input));
        }
        all_events
    }

    // ================================================================
    // Game Trait Contract Tests
    // ================================================================
    // Every Game implementation must pass these. Game crates call them from
    // their own #[cfg(test)] modules with a freshly constructed instance.

    /// update() before the first start() must not change anything.
    pub fn contract_update_before_start_is_noop(game: &mut dyn Game) {
        assert_eq!(game.phase(), GamePhase::Ready);
        let before = game.serialize_state();
        let events = run_game_ticks(game, 10, TEST_DT);
        assert!(events.is_empty(), "No events expected before start");
        assert_eq!(
            before,
            game.serialize_state(),
            "State must not change before start()"
        );
    }

    /// start() must enter Playing and produce a non-empty snapshot.
    pub fn contract_start_enters_playing(game: &mut dyn Game) {
        game.start();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(
            !game.serialize_state().is_empty(),
            "serialize_state() must return non-empty bytes after start"
        );
    }

    /// update() with dt>0 while playing must advance the snapshot (timer).
    pub fn contract_update_advances_time(game: &mut dyn Game) {
        game.start();
        let before = game.serialize_state();
        run_game_ticks(game, 1, TEST_DT);
        assert_ne!(
            before,
            game.serialize_state(),
            "update(dt>0) must advance game state"
        );
    }

    /// Idle ticks must eventually end the round, with exactly one end event.
    pub fn contract_round_eventually_completes(game: &mut dyn Game, max_ticks: usize) {
        game.start();
        let mut round_end_events = 0;
        for _ in 0..max_ticks {
            round_end_events += run_game_ticks(game, 1, TEST_DT)
                .iter()
                .filter(|e| e.is_round_end())
                .count();
            if game.is_round_complete() {
                break;
            }
        }
        assert!(
            game.is_round_complete(),
            "Game must complete within {max_ticks} idle ticks"
        );
        // Keep ticking: terminal phases must not re-fire.
        round_end_events += run_game_ticks(game, 30, TEST_DT)
            .iter()
            .filter(|e| e.is_round_end())
            .count();
        assert_eq!(round_end_events, 1, "Round end must be signalled exactly once");
    }

    /// start() after a terminal phase must re-enter Playing and resume ticking.
    pub fn contract_restart_after_round_end(game: &mut dyn Game, max_ticks: usize) {
        game.start();
        for _ in 0..max_ticks {
            run_game_ticks(game, 1, TEST_DT);
            if game.is_round_complete() {
                break;
            }
        }
        assert!(game.is_round_complete());
        let finished = game.serialize_state();

        game.start();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(!game.is_round_complete());
        assert_ne!(finished, game.serialize_state(), "start() must reset state");

        let events = run_game_ticks(game, 1, TEST_DT);
        assert!(
            !events.iter().any(GameEvent::is_round_end),
            "A restarted round must not end on its first tick"
        );
    }
}
