use bevy::prelude::*;
use crate::bevy_interface::{ConfigResource, GameResource, MoveStats};
use crate::core::{tick, Direction};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, advance_game);
    }
}

const DIRECTION_KEYS: [(KeyCode, KeyCode, Direction); 4] = [
    (KeyCode::ArrowUp, KeyCode::KeyW, Direction::Up),
    (KeyCode::ArrowDown, KeyCode::KeyS, Direction::Down),
    (KeyCode::ArrowLeft, KeyCode::KeyA, Direction::Left),
    (KeyCode::ArrowRight, KeyCode::KeyD, Direction::Right),
];

/// Directions whose key is down right now. Level triggered: holding a key keeps yielding it.
pub fn held_directions(keys: &ButtonInput<KeyCode>) -> Vec<Direction> {
    DIRECTION_KEYS
        .iter()
        .filter(|(arrow, letter, _)| keys.pressed(*arrow) || keys.pressed(*letter))
        .map(|&(_, _, direction)| direction)
        .collect()
}

pub fn advance_game(
    mut game: ResMut<GameResource>,
    mut stats: ResMut<MoveStats>,
    config: Res<ConfigResource>,
    keys: Res<ButtonInput<KeyCode>>,
) {
    let report = tick(&mut game.0, held_directions(&keys), config.0.speed);

    if let Some((direction, change)) = report.started {
        stats.moves += 1;
        debug!("move {} {:?}: {:?}", stats.moves, direction, change);
    }
    if report.blocked.is_some() {
        stats.blocked += 1;
    }
}

#[cfg(test)]
mod test {
    use bevy::math::IVec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use super::*;
    use crate::config::GameConfig;
    use crate::core::GameState;

    fn test_app() -> App {
        let mut app = App::new();
        app
            .insert_resource(GameResource(GameState::new_default(&mut StdRng::seed_from_u64(0))))
            .insert_resource(ConfigResource(GameConfig::default()))
            .init_resource::<MoveStats>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(Update, advance_game);
        app
    }

    #[test]
    fn held_keys_follow_poll_order() {
        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyD);
        keys.press(KeyCode::ArrowUp);
        assert_eq!(held_directions(&keys), vec![Direction::Up, Direction::Right]);
    }

    #[test]
    fn holding_right_walks_one_tile_per_ten_ticks() {
        let mut app = test_app();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::ArrowRight);

        for _ in 0..20 {
            app.update();
        }

        let game = app.world().resource::<GameResource>();
        assert_eq!(game.0.player().tile_pos, IVec2::new(7, 5));
        assert!(game.0.player().is_at_rest());
        assert_eq!(app.world().resource::<MoveStats>().moves, 2);
    }

    #[test]
    fn blocked_input_is_counted() {
        let mut app = test_app();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::ArrowUp);
        for _ in 0..50 {
            app.update();
        }

        let stats = app.world().resource::<MoveStats>();
        assert_eq!(stats.moves, 4);
        assert_eq!(app.world().resource::<GameResource>().0.player().tile_pos, IVec2::new(5, 1));
        assert_eq!(stats.blocked, 10);
    }
}
