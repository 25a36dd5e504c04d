#[cfg(test)]
mod test {
    use crate::console_interface::parse_level;
    use crate::core::*;
    use crate::levels::LevelCatalog;

    const TINY: &str = r#"[{"id":7,"name":"Tiny","difficulty":"Easy","gridSize":{"width":3,"height":1},"playerStart":{"x":0,"y":0},"goal":{"x":2,"y":0},"tiles":[["Empty","Wall","Empty"]]}]"#;

    fn rows(width: usize, height: usize) -> Vec<Vec<TileType>> {
        vec![vec![TileType::Empty; width]; height]
    }

    #[test]
    fn builtin_catalog_has_the_four_levels_in_order(){
        let catalog = LevelCatalog::builtin().unwrap();
        let names: Vec<&str> = catalog.iter().map(|l| l.name()).collect();

        assert_eq!(names, vec!["First Steps", "The Wall", "Deceptive Depth", "Timed Gates"]);
        for level in catalog.iter() {
            assert_eq!(level.player_start(), Position::new(1, 3));
        }
        assert_eq!(catalog.find(4).unwrap().size(), GridSize::new(12, 7));
        assert_eq!(catalog.find(3).unwrap().difficulty(), Difficulty::Medium);
    }

    #[test]
    fn unknown_level_is_not_found(){
        assert_eq!(LevelCatalog::builtin().unwrap().find(9).unwrap_err(), LevelError::NotFound(9));
    }

    #[test]
    fn next_level_follows_ids_until_the_last(){
        let catalog = LevelCatalog::builtin().unwrap();

        assert_eq!(catalog.next_after(1).map(|l| l.id()), Some(2));
        assert_eq!(catalog.next_after(3).map(|l| l.id()), Some(4));
        assert!(catalog.next_after(4).is_none());
    }

    #[test]
    fn catalog_loads_from_json(){
        let catalog = LevelCatalog::from_json(TINY).unwrap();
        let level = catalog.find(7).unwrap();

        assert_eq!(level.name(), "Tiny");
        assert_eq!(level.tile(&Position::new(1, 0)), Some(TileType::Wall));
    }

    #[test]
    fn catalog_loads_from_a_file(){
        let path = std::env::temp_dir().join(format!("dual_dimension_levels_{}.json", std::process::id()));
        std::fs::write(&path, TINY).unwrap();

        let loaded = LevelCatalog::load(&path);
        std::fs::remove_file(&path).unwrap();

        let catalog = loaded.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.find(7).unwrap().goal(), Position::new(2, 0));
    }

    #[test]
    fn missing_level_file_is_an_io_error(){
        let path = std::env::temp_dir().join("dual_dimension_no_such_levels.json");

        assert!(matches!(LevelCatalog::load(&path), Err(LevelError::Io(_))));
    }

    #[test]
    fn json_with_blocked_start_is_rejected(){
        let json = TINY.replace(r#""playerStart":{"x":0"#, r#""playerStart":{"x":1"#);

        let Err(LevelError::Parse(message)) = LevelCatalog::from_json(&json) else {
            panic!("expected a parse error");
        };
        assert!(message.contains("start"), "{}", message);
    }

    #[test]
    fn duplicate_ids_are_rejected(){
        let level = LevelCatalog::builtin().unwrap().find(1).unwrap().clone();

        let result = LevelCatalog::new(vec![level.clone(), level]);

        assert_eq!(result.unwrap_err(), LevelError::DuplicateId(1));
    }

    #[test]
    fn builtin_catalog_survives_json(){
        let json = LevelCatalog::builtin().unwrap().to_json().unwrap();
        let reloaded = LevelCatalog::from_json(&json).unwrap();

        assert!(reloaded.iter().eq(LevelCatalog::builtin().unwrap().iter()));
    }

    #[test]
    fn level_validation_catches_bad_layouts(){
        let size = GridSize::new(3, 2);
        let start = Position::new(0, 0);
        let goal = Position::new(2, 1);

        assert_eq!(
            Level::new(0, "x", Difficulty::Easy, size, start, goal, rows(3, 2)),
            Err(LevelError::ZeroId)
        );
        assert_eq!(
            Level::new(1, "x", Difficulty::Easy, GridSize::new(0, 2), start, goal, rows(0, 2)),
            Err(LevelError::InvalidSize { width: 0, height: 2 })
        );
        assert_eq!(
            Level::new(1, "x", Difficulty::Easy, size, start, goal, rows(3, 1)),
            Err(LevelError::RowCount { expected: 2, actual: 1 })
        );

        let mut ragged = rows(3, 2);
        ragged[1].pop();
        assert_eq!(
            Level::new(1, "x", Difficulty::Easy, size, start, goal, ragged),
            Err(LevelError::RowWidth { row: 1, expected: 3, actual: 2 })
        );

        let mut overlay = rows(3, 2);
        overlay[0][1] = TileType::Goal;
        assert_eq!(
            Level::new(1, "x", Difficulty::Easy, size, start, goal, overlay),
            Err(LevelError::OverlayInLayout { position: Position::new(1, 0), tile: TileType::Goal })
        );

        assert_eq!(
            Level::new(1, "x", Difficulty::Easy, size, start, Position::new(3, 1), rows(3, 2)),
            Err(LevelError::OutOfBounds { what: "goal", position: Position::new(3, 1) })
        );

        let mut pit_goal = rows(3, 2);
        pit_goal[1][2] = TileType::Pit;
        assert_eq!(
            Level::new(1, "x", Difficulty::Easy, size, start, goal, pit_goal),
            Err(LevelError::BlockedPosition { what: "goal", position: goal, tile: TileType::Pit })
        );
    }

    #[test]
    fn parse_level_reads_ascii_layouts(){
        let level = parse_level(r#"
#  O
@  .
"#).unwrap();

        assert_eq!(level.size(), GridSize::new(4, 2));
        assert_eq!(level.player_start(), Position::new(0, 1));
        assert_eq!(level.goal(), Position::new(3, 1));
        assert_eq!(level.tile(&Position::new(0, 0)), Some(TileType::Wall));
        assert_eq!(level.tile(&Position::new(3, 0)), Some(TileType::Pit));
    }

    #[test]
    fn parse_level_requires_a_goal(){
        assert!(matches!(parse_level("#@ #"), Err(LevelError::Parse(_))));
    }
}
