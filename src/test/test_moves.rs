#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::levels::LevelCatalog;
    use crate::test::test_util::GameTestState;

    fn builtin(id: u32) -> GameTestState {
        let level = LevelCatalog::builtin().unwrap().find(id).unwrap().clone();
        GameTestState::from_level(level)
    }

    #[test]
    fn when_move_right_both_worlds_move(){
        let level = r#"
#@  .#
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Right);

        game.assert_matches(r#"
# @ .#
"#);
        game.assert_mirror_matches(r#"
#. @ #
"#);
    }

    #[test]
    fn when_move_vertical_mirror_keeps_vertical_sense(){
        let level = r#"
#    #
#@  .#
#    #
"#;
        let mut game = GameTestState::new(level);
        game.assert_move(Down);

        assert_eq!(game.game_state.player, Position::new(1, 2));
        assert_eq!(game.game_state.mirror_player(&game.level), Position::new(4, 2));
    }

    #[test]
    fn when_walking_into_wall_nothing_moves(){
        let level = r#"
#@ .#
"#;
        let mut game = GameTestState::new(level);
        let original_state = game.game_state.clone();

        let reason = game.assert_rejected(Left);

        assert_eq!(reason, MoveRejection::Blocked { real: true, mirror: true });
        assert_eq!(original_state, game.game_state);
    }

    #[test]
    fn when_only_mirror_is_blocked_real_does_not_move(){
        let mut game = builtin(2).at(3, 2);
        let original_state = game.game_state.clone();

        let reason = game.assert_rejected(Right);

        assert_eq!(reason, MoveRejection::Blocked { real: false, mirror: true });
        assert_eq!(original_state, game.game_state);
    }

    #[test]
    fn when_only_real_is_blocked_mirror_does_not_move(){
        let mut game = builtin(2).at(4, 2);

        let reason = game.assert_rejected(Right);

        assert_eq!(reason, MoveRejection::Blocked { real: true, mirror: false });
        assert_eq!(game.game_state.player, Position::new(4, 2));
    }

    #[test]
    fn when_moving_off_the_grid_move_is_rejected(){
        let mut game = builtin(1).at(0, 0);

        assert!(matches!(game.assert_rejected(Left), MoveRejection::Blocked { real: true, .. }));
        assert!(matches!(game.assert_rejected(Up), MoveRejection::Blocked { real: true, .. }));
    }

    #[test]
    fn when_pit_reflection_is_approached_both_characters_are_stopped(){
        let mut game = builtin(3).at(3, 2);

        assert_eq!(game.level.tile(&Position::new(4, 2)), Some(TileType::Empty));
        let reason = game.assert_rejected(Right);

        assert_eq!(reason, MoveRejection::Blocked { real: true, mirror: true });
    }

    #[test]
    fn when_moves_succeed_history_records_names(){
        let mut game = builtin(1);
        game.assert_moves(&[Right, Up, Down, Left]);

        assert_eq!(game.game_state.history_names(), vec!["Right", "Up", "Down", "Left"]);
        assert_eq!(game.game_state.move_count(), 4);
        assert_eq!(game.game_state.player, game.level.player_start());
    }

    #[test]
    fn when_game_is_complete_moves_are_rejected(){
        let mut game = builtin(1);
        game.game_state.complete = true;

        assert_eq!(game.assert_rejected(Right), MoveRejection::LevelComplete);
    }

    #[test]
    fn step_does_not_modify_its_input(){
        let game = builtin(1);
        let before = game.game_state.clone();

        let update = step(&game.level, &game.game_state, Right);

        assert!(matches!(update, GameUpdate::NextState(_)));
        assert_eq!(before, game.game_state);
    }

    #[test]
    fn win_requires_both_goals_and_is_not_reported_twice(){
        let mut game = builtin(1);
        game.assert_moves(&[Right; 6]);
        assert!(!check_win(&game.level, &game.game_state));

        game.assert_move(Right);
        assert!(check_win(&game.level, &game.game_state));
        assert_eq!(game.game_state.mirror_player(&game.level), mirror_goal(&game.level));

        game.game_state.complete = true;
        assert!(!check_win(&game.level, &game.game_state));
    }

    #[test]
    fn restart_returns_to_start_and_clears_progress(){
        let mut game = builtin(3);
        game.assert_moves(&[Right, Right, Up]);
        game.game_state.complete = true;

        game.game_state.restart(&game.level);

        assert_eq!(game.game_state, GameState::new(&game.level));
        assert_eq!(game.game_state.player, Position::new(1, 3));
        assert!(game.game_state.history.is_empty());
        assert!(!game.game_state.complete);
    }

    #[test]
    fn mirrored_direction_flips_only_horizontal(){
        assert_eq!(Left.mirrored(), Right);
        assert_eq!(Right.mirrored(), Left);
        assert_eq!(Up.mirrored(), Up);
        assert_eq!(Down.mirrored(), Down);
        assert_eq!(vec_from_dir(Up), Position::new(0, -1));
    }
}
