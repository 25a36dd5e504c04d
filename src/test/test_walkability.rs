#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::levels::LevelCatalog;
    use crate::test::test_util::GameTestState;

    fn level(id: u32) -> &'static Level {
        LevelCatalog::builtin().unwrap().find(id).unwrap()
    }

    #[test]
    fn out_of_bounds_is_never_walkable(){
        let level = level(1);
        for pos in [
            Position::new(-1, 3),
            Position::new(10, 3),
            Position::new(3, -1),
            Position::new(3, 7),
        ] {
            assert!(!is_walkable(level, pos, World::Real), "{} real", pos);
            assert!(!is_walkable(level, pos, World::Mirror), "{} mirror", pos);
        }
    }

    #[test]
    fn walls_block_both_worlds(){
        let level = level(2);
        let wall = Position::new(5, 2);

        assert!(!is_walkable(level, wall, World::Real));
        assert!(!is_walkable(level, wall, World::Mirror));
        // a wall's reflection is open floor
        assert!(is_walkable(level, Position::new(4, 2), World::Real));
        assert!(is_walkable(level, Position::new(4, 2), World::Mirror));
        assert!(is_walkable(level, Position::new(5, 3), World::Real));
    }

    #[test]
    fn pit_blocks_real_world_on_itself_and_its_reflection(){
        let level = level(3);

        assert!(!is_walkable(level, Position::new(5, 2), World::Real));
        assert!(!is_walkable(level, Position::new(4, 2), World::Real));
        assert_eq!(level.tile(&Position::new(4, 2)), Some(TileType::Empty));
        assert!(is_walkable(level, Position::new(5, 3), World::Real));
        assert!(is_walkable(level, Position::new(4, 3), World::Real));
    }

    #[test]
    fn mirror_world_is_only_blocked_by_the_pit_cell(){
        let level = level(3);

        assert!(is_walkable(level, Position::new(4, 2), World::Mirror));
        assert!(!is_walkable(level, Position::new(5, 2), World::Mirror));
    }

    #[test]
    fn display_shows_pit_reflections_in_real_world_only(){
        let game = GameTestState::new(r#"
@  O    .
"#);

        game.assert_matches(r#"
@  O O  .
"#);
        game.assert_mirror_matches(r#"
.       @
"#);
        assert_eq!(display_tile(&game.level, Position::new(3, 0), World::Mirror), TileType::Empty);
        assert_eq!(display_tile(&game.level, Position::new(5, 0), World::Real), TileType::Pit);
    }

    #[test]
    fn mirror_of_reflects_x_only(){
        assert_eq!(mirror_of(Position::new(1, 3), 10), Position::new(8, 3));
        assert_eq!(mirror_of(Position::new(-2, 5), 10), Position::new(11, 5));
        assert_eq!(mirror_goal(level(4)), Position::new(1, 3));
    }

    #[test]
    fn mirror_of_round_trips_at_integer_extremes(){
        for x in [i32::MIN, i32::MIN + 1, i32::MAX, -1, 0] {
            let pos = Position::new(x, 2);
            assert_eq!(mirror_of(mirror_of(pos, 10), 10), pos, "x = {}", x);
        }
        assert_eq!(mirror_of(Position::new(i32::MIN, 0), 10).x, 9i32.wrapping_sub(i32::MIN));
    }
}
