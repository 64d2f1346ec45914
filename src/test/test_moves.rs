use bevy::math::IVec2;
use crate::core::Direction::*;
use crate::core::*;
use crate::test::test_util::GameTestState;

#[test]
fn when_move_right_observes_move_right() {
    let level = r#"
#@ #
"#;
    let mut game = GameTestState::new(level);
    let change = game.assert_move(Right);

    assert_eq!(change, MoveChange::PlayerMove);
    game.assert_matches(r#"
# @#
"#);
}

#[test]
fn when_push_pushes() {
    let level = r#"
#@8 #
"#;
    let mut game = GameTestState::new(level);
    let change = game.assert_move(Right);

    assert_eq!(change, MoveChange::PlayerAndBoxesMove { boxes: 1 });
    game.assert_matches(r#"
# @8#
"#);
}

#[test]
fn when_two_boxes_have_room_both_are_pushed() {
    let level = r#"
#@82 #
"#;
    let mut game = GameTestState::new(level);
    let change = game.assert_move(Right);

    assert_eq!(change, MoveChange::PlayerAndBoxesMove { boxes: 2 });
    game.assert_matches(r#"
# @82#
"#);
}

#[test]
fn when_chain_hits_wall_nothing_moves() {
    let level = r#"
#@82#
"#;
    let mut game = GameTestState::new(level);
    let reason = game.assert_blocked(Right);

    assert_eq!(reason, BlockedReason::Wall(IVec2::new(4, 0)));
    game.assert_matches(level);
}

#[test]
fn when_walking_into_wall_is_blocked() {
    let level = r#"
###
#@#
###
"#;
    let mut game = GameTestState::new(level);
    for &direction in Direction::all() {
        game.assert_blocked(direction);
    }
    game.assert_matches(level);
}

#[test]
fn when_leaving_the_field_is_blocked() {
    let level = r#"
@8 
"#;
    let mut game = GameTestState::new(level);
    assert_eq!(game.assert_blocked(Left), BlockedReason::OutOfBounds(IVec2::new(-1, 0)));
    assert_eq!(game.assert_blocked(Up), BlockedReason::OutOfBounds(IVec2::new(0, -1)));

    game.assert_move(Right);
    assert_eq!(game.assert_blocked(Right), BlockedReason::OutOfBounds(IVec2::new(3, 0)));
}

#[test]
fn when_pushing_vertically_needs_free_tile_past_every_box() {
    let level = r#"
#####
#@  #
#8  #
#2  #
#   #
#####
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Down);
    game.assert_matches(r#"
#####
#   #
#@  #
#8  #
#2  #
#####
"#);

    game.assert_blocked(Down);
}

#[test]
fn when_boxes_are_not_adjacent_only_the_first_is_pushed() {
    let level = r#"
#@8 2 #
"#;
    let mut game = GameTestState::new(level);
    game.assert_move(Right);
    game.assert_matches(r#"
# @82 #
"#);
    game.assert_move(Right);
    game.assert_matches(r#"
#  @82#
"#);
    game.assert_blocked(Right);
}

#[test]
fn when_player_walks_around_boxes_they_stay_put() {
    let level = r#"
#####
#@  #
# 8 #
#   #
#####
"#;
    let mut game = GameTestState::new(level);
    game.assert_moves(&[Right, Right, Down, Down, Left, Left, Up, Up]);
    game.assert_matches(level);
}

#[test]
fn when_box_pushed_back_game_returns_to_start() {
    let level = r#"
######
#    #
#@8  #
#    #
######
"#;
    let mut game = GameTestState::new(level);
    game.assert_moves(&[Right, Up, Right, Right, Down]);
    game.assert_matches(r#"
######
#    #
#  8@#
#    #
######
"#);
    game.assert_moves(&[Left, Down, Left, Left, Up]);
    game.assert_matches(level);
}

#[test]
fn when_moving_again_during_animation_nothing_changes() {
    let level = r#"
#@8  #
"#;
    let mut game = GameTestState::new(level);
    assert!(game.try_move(Right).moved());
    game.advance(3);

    let before = game.game_state.actors.clone();
    for &direction in Direction::all() {
        assert_eq!(game.try_move(direction), MoveUpdate::PlayerBusy);
    }
    assert_eq!(before, game.game_state.actors);
}

#[test]
fn when_two_actors_share_a_tile_only_first_found_is_pushed() {
    let level = r#"
#@8  #
"#;
    let mut game = GameTestState::new(level);
    game.game_state.actors.push(Actor::new(ActorKind::Box, Rgb::default(), IVec2::new(2, 0), 'x'));

    game.assert_move(Right);

    assert_eq!(game.player().tile_pos, IVec2::new(2, 0));
    assert_eq!(game.actor_labeled('8').tile_pos, IVec2::new(3, 0));
    assert_eq!(game.actor_labeled('x').tile_pos, IVec2::new(2, 0));
}

#[test]
fn resolve_chain_lists_player_then_pushed_boxes() {
    let level = r#"
#@82 #
"#;
    let game = GameTestState::new(level);
    assert_eq!(resolve_chain(&game.game_state, Right), Ok(vec![0, 1, 2]));
    assert_eq!(resolve_chain(&game.game_state, Left), Err(BlockedReason::Wall(IVec2::new(0, 0))));
}
