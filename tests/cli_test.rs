#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{self, Cursor};

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use sea_battle::{
        parse_number, ui, Coord, Game, GameStatus, ManualStrategy, RandomStrategy, ShotError,
        TargetingStrategy, BB,
    };

    fn manual(input: &str) -> ManualStrategy<Cursor<Vec<u8>>, Vec<u8>> {
        ManualStrategy::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(strategy: &ManualStrategy<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(strategy.output().clone()).unwrap()
    }

    #[test]
    fn test_reads_one_based_row_then_column() {
        let mut player = manual("3\n4\n");
        assert_eq!(player.read_target().unwrap(), Some(Coord::new(2, 3)));
        assert_eq!(written(&player), format!("{}{}", ui::ROW_PROMPT, ui::COL_PROMPT));
    }

    #[test]
    fn test_whitespace_around_numbers_is_ignored() {
        let mut player = manual("  1 \r\n\t6\n");
        assert_eq!(player.read_target().unwrap(), Some(Coord::new(0, 5)));
    }

    #[test]
    fn test_non_numeric_input_reprompts() {
        let mut player = manual("a\n2\n2\nb\n5\n5\n");
        assert_eq!(player.read_target().unwrap(), Some(Coord::new(4, 4)));
        let out = written(&player);
        assert_eq!(out.matches(ui::ENTER_NUMBERS).count(), 2);
        assert_eq!(out.matches(ui::ROW_PROMPT).count(), 3);
        assert_eq!(out.matches(ui::COL_PROMPT).count(), 3);
    }

    #[test]
    fn test_out_of_range_numbers_pass_through() {
        // the board decides about bounds
        let mut player = manual("0\n7\n");
        assert_eq!(player.read_target().unwrap(), Some(Coord::new(-1, 6)));
    }

    #[test]
    fn test_negative_numbers_are_not_numbers() {
        let mut player = manual("-1\n2\n1\n1\n");
        assert_eq!(player.read_target().unwrap(), Some(Coord::new(0, 0)));
        assert!(written(&player).contains(ui::ENTER_NUMBERS));
    }

    #[test]
    fn test_end_of_input_cancels() {
        assert_eq!(manual("").read_target().unwrap(), None);
        assert_eq!(manual("4\n").read_target().unwrap(), None);

        let mut player = manual("x\n");
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(player.next_target(&mut rng, &BB::new()), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("42"), Some(42));
        assert_eq!(parse_number(" 7\n"), Some(7));
        assert_eq!(parse_number("007"), Some(7));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("+3"), None);
        assert_eq!(parse_number("-3"), None);
        assert_eq!(parse_number("3.0"), None);
        assert_eq!(parse_number("1 2"), None);
        assert_eq!(parse_number("99999999999"), None);
    }

    #[test]
    fn test_rejection_is_shown_to_player() {
        let mut player = manual("");
        player.report_rejection(Coord::new(6, 0), ShotError::OutOfBounds);
        player.report_rejection(Coord::new(0, 0), ShotError::AlreadyAttacked);
        let out = written(&player);
        assert!(out.contains(&format!("{}\n", ShotError::OutOfBounds)));
        assert!(out.contains(&format!("{}\n", ShotError::AlreadyAttacked)));
        // the game loop relies on this to avoid printing the message twice
        assert!(player.shows_rejections());
    }

    #[test]
    fn test_manual_game_ends_when_input_runs_out() {
        let input = Cursor::new(b"1\n1\n1\n1\n9\n9\n".to_vec());
        let mut game = Game::new(
            Box::new(ManualStrategy::new(input, io::sink())),
            Box::new(RandomStrategy::new()),
            SmallRng::seed_from_u64(4),
        );
        let mut out = Vec::new();
        assert_eq!(game.run(&mut out).unwrap(), GameStatus::Abandoned);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("You fire at 1:1."));
        assert!(text.trim_end().ends_with("Game abandoned."));
    }
}
