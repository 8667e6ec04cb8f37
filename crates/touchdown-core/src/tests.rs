#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::enums::{FlightPhase, LandingOutcome, SpriteKind};
    use crate::events::GameEvent;
    use crate::state::GameSnapshot;
    use crate::types::{ShipState, SimTime};

    #[test]
    fn test_landing_band_geometry() {
        assert_eq!(FLOOR_Y, 143.0);
        assert_eq!(LANDING_Y, 133.0);
        assert!(LANDING_Y < FLOOR_Y);
        assert!(LANDING_BAND_H > 0.0);
        assert!(CRASH_SPEED > 0.0);
        // Thrust must be able to arrest a fall that gravity builds.
        assert!(THRUST_ACCEL > 0.0 && THRUST_ACCEL < GRAVITY);
    }

    #[test]
    fn test_ship_at_rest() {
        let ship = ShipState::at_rest(SHIP_START_X, 0.0);
        assert_eq!(ship.x, SHIP_START_X);
        assert_eq!(ship.y, 0.0);
        assert_eq!(ship.velocity, 0.0);
        assert!(!ship.thrust_active);
    }

    #[test]
    fn test_ship_rect_truncates_position() {
        let mut ship = ShipState::at_rest(60.0, 12.93);
        let rect = ship.rect();
        assert_eq!(rect.x, 60);
        assert_eq!(rect.y, 12);
        assert_eq!(rect.w, SHIP_W);
        assert_eq!(rect.h, SHIP_H);

        // Slight overshoot above the top edge still renders on row 0.
        ship.y = -0.4;
        assert_eq!(ship.rect().y, 0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        // 30 ticks of 33 ms.
        assert!((time.elapsed_secs - 0.99).abs() < 1e-4);
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(FlightPhase::default(), FlightPhase::Flying);
        assert_eq!(SpriteKind::default(), SpriteKind::Idle);
    }

    #[test]
    fn test_player_command_serde() {
        let cmd = PlayerCommand::SetThrust { active: true };
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"type\":\"SetThrust\""));
        assert!(json.contains("\"active\":true"));

        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cmd);

        let reset: PlayerCommand = serde_json::from_str("{\"type\":\"Reset\"}").unwrap();
        assert_eq!(reset, PlayerCommand::Reset);
    }

    #[test]
    fn test_game_event_serde() {
        let event = GameEvent::Touchdown {
            outcome: LandingOutcome::Crash,
            speed: 0.31,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Touchdown\""));

        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = GameSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\":\"Flying\""));
        assert!(json.contains("\"events\":[]"));
        // Snapshots cross the frontend boundary every tick; keep them small.
        assert!(
            json.len() < 1024,
            "snapshot too large: {} bytes",
            json.len()
        );

        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
