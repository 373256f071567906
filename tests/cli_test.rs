#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use solo_battleship::{
        describe_ai_turn, describe_player_turn, describe_winner, parse_command, placement_hint,
        level_from, render_board, ship_cells, simulate, AiTurn, Board, Command, Coord, Difficulty,
        Game, GameConfig, PlayerTurn, ShotResult, Side, TOTAL_SHIP_CELLS,
    };
    use log::LevelFilter;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("c5"), Ok(Command::Target(Coord::new(4, 2))));
        assert_eq!(parse_command("  R "), Ok(Command::Rotate));
        assert_eq!(parse_command("auto"), Ok(Command::Auto));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(
            parse_command("difficulty Hard"),
            Ok(Command::SetDifficulty(Difficulty::Hard))
        );
        assert!(parse_command("difficulty").is_err());
        assert!(parse_command("difficulty extreme").is_err());
        assert!(parse_command("Z9").is_err());
        assert!(parse_command("").is_err());
    }

    #[test]
    fn test_render_board_marks() {
        let mut board = Board::new();
        board
            .place_ship("Patrol", 2, ship_cells(0, 0, 2, true), "Patrol")
            .unwrap();
        board
            .place_ship("Submarine 1", 3, ship_cells(5, 5, 3, false), "Submarine")
            .unwrap();
        board.fire(0, 0).unwrap();
        board.fire(1, 0).unwrap();
        board.fire(5, 5).unwrap();
        board.fire(9, 9).unwrap();

        let revealed = render_board(&board, true);
        let rows: Vec<&str> = revealed.lines().collect();
        assert_eq!(rows.len(), 11);
        assert!(rows[1].starts_with("  A "));
        assert_eq!(rows[1].matches('#').count(), 2);
        assert!(rows[6].contains('X'));
        assert!(rows[7].contains('S'));
        assert!(rows[10].ends_with('o'));

        let hidden = render_board(&board, false);
        assert!(!hidden.contains('S'));
        assert!(hidden.contains('X'));
    }

    #[test]
    fn test_turn_messages() {
        let turn = PlayerTurn {
            target: Coord::new(4, 2),
            result: ShotResult::Miss { at: Coord::new(4, 2) },
            winner: None,
        };
        assert_eq!(describe_player_turn(&turn), "You fired at C5 and missed.");

        let ai = AiTurn::Fired {
            target: Coord::new(0, 0),
            result: ShotResult::Sunk {
                ship: "Patrol",
                cells: vec![Coord::new(0, 0), Coord::new(1, 0)],
            },
            winner: None,
        };
        assert_eq!(describe_ai_turn(&ai), "Enemy fired at A1 and sunk your Patrol.");
        assert!(describe_winner(Side::Computer, Difficulty::Hard).contains("Hard"));
    }

    #[test]
    fn test_placement_hint_names_next_ship() {
        let game = Game::new(GameConfig {
            seed: Some(1),
            ..GameConfig::default()
        })
        .unwrap();
        let hint = placement_hint(&game);
        assert!(hint.contains("Carrier"));
        assert!(hint.contains("5 cells"));
    }

    #[test]
    fn test_log_level_from_env_value() {
        assert_eq!(level_from(None), LevelFilter::Warn);
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" INFO ")), LevelFilter::Info);
        assert_eq!(level_from(Some("chatty")), LevelFilter::Warn);
    }

    #[test]
    fn test_simulation_sinks_fleet_for_every_difficulty() {
        let mut rng = SmallRng::seed_from_u64(12345);
        for difficulty in Difficulty::ALL {
            let stats = simulate(difficulty, 5, &mut rng).unwrap();
            assert_eq!(stats.games, 5);
            assert!(stats.min_shots >= TOTAL_SHIP_CELLS);
            assert!(stats.max_shots <= 100);
            assert!(stats.mean_shots >= stats.min_shots as f64);
        }
        let impossible = simulate(Difficulty::Impossible, 3, &mut rng).unwrap();
        assert_eq!(impossible.max_shots, TOTAL_SHIP_CELLS);
    }
}
