use super::*;

fn game(number: u32, outcome: GameOutcome, result: GameResult) -> GameRecord {
    GameRecord {
        number,
        white: "Classical v1.0".into(),
        black: "Random v1.0".into(),
        moves: vec!["e2e4".into(), "e7e5".into()],
        notation: vec!["e4".into(), "e5".into()],
        outcome,
        result,
    }
}

#[test]
fn match_result_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);

    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    result.record(GameResult::Win);
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.score(), 2.5 / 4.0);
}

#[test]
fn outcome_maps_to_white_result() {
    assert_eq!(GameOutcome::WhiteMates.for_white(), GameResult::Win);
    assert_eq!(GameOutcome::BlackMates.for_white(), GameResult::Loss);
    assert_eq!(GameOutcome::Stalemate.for_white(), GameResult::Draw);
    assert_eq!(GameOutcome::MoveLimit.for_white().flipped(), GameResult::Draw);
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
}

#[test]
fn report_counts_added_games() {
    let mut report = MatchReport::new("classical", "random", MatchConfig::default());
    report.add_game(game(1, GameOutcome::WhiteMates, GameResult::Win));
    report.add_game(game(2, GameOutcome::MoveLimit, GameResult::Draw));

    assert_eq!(report.result.wins, 1);
    assert_eq!(report.result.draws, 1);
    let text = report.generate_report();
    assert!(text.contains("classical vs random"));
    assert!(text.contains("WhiteMates"));
    assert!(text.contains("1 wins, 0 losses, 1 draws"));
}

#[test]
fn report_json_uses_snake_case_enums() {
    let mut report = MatchReport::new("classical", "random", MatchConfig::default());
    report.add_game(game(1, GameOutcome::MoveLimit, GameResult::Draw));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["games"][0]["outcome"], "move_limit");
    assert_eq!(json["games"][0]["result"], "draw");
    assert_eq!(json["config"]["depth"], 2);
}

#[test]
fn report_save_and_load() {
    let mut report = MatchReport::new("classical", "random", MatchConfig::default());
    report.add_game(game(1, GameOutcome::BlackMates, GameResult::Loss));

    let path = std::env::temp_dir().join(format!("match_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, report);
}
