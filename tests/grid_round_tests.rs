//! End-to-end grid rounds: scripted humans and heuristic bots through the
//! full engine loop.

use roundcraft::{
    GameRng, GridBot, GridHuman, GridRuler, Marker, Player, PlayerId, RoundCrafter, Scoreboard,
    Script, Tile, Transcript,
};

const X: PlayerId = PlayerId::new(0);
const O: PlayerId = PlayerId::new(1);

fn scripted_human(id: PlayerId, name: &str, answers: &[&str]) -> Box<dyn Player<GridRuler>> {
    Box::new(GridHuman::new(
        id,
        name,
        Box::new(Script::new(answers.iter().copied())),
    ))
}

#[test]
fn test_bot_blocks_then_wins_on_secondary_diagonal() {
    // X works down a fixed tile list. The bot takes the center, blocks
    // the top row at 3, then completes {3, 5, 7} on its third move, so
    // the script is never consumed past "4".
    let mut players: Vec<Box<dyn Player<GridRuler>>> = vec![
        scripted_human(X, "Ada", &["1", "2", "4", "3", "5", "6", "7"]),
        Box::new(GridBot::new(O, "Hal")),
    ];
    let mut scores = Scoreboard::new(2);
    let mut transcript = Transcript::new();

    let mut round = RoundCrafter::new(GridRuler::classic(GameRng::new(7)), &mut players);
    let winner = round.play(&mut transcript, &mut scores).unwrap();

    assert_eq!(winner, Some(O));
    assert_eq!(round.turns_taken(), 6);
    assert_eq!(scores.wins(O), 1);
    assert_eq!(scores.wins(X), 0);

    let board = round.ruler().board();
    assert_eq!(board.marker_at(Tile(5)), Some(Marker('O')));
    assert_eq!(board.marker_at(Tile(3)), Some(Marker('O')));
    assert_eq!(board.marker_at(Tile(7)), Some(Marker('O')));
}

#[test]
fn test_round_alternates_seats_in_history() {
    let mut players: Vec<Box<dyn Player<GridRuler>>> = vec![
        scripted_human(X, "Ada", &["1", "2", "4", "3", "5", "6", "7"]),
        Box::new(GridBot::new(O, "Hal")),
    ];
    let mut scores = Scoreboard::new(2);
    let mut transcript = Transcript::new();

    let mut round = RoundCrafter::new(GridRuler::classic(GameRng::new(7)), &mut players);
    round.play(&mut transcript, &mut scores).unwrap();

    let movers: Vec<_> = round.history().iter().map(|r| r.player).collect();
    assert_eq!(movers, vec![X, O, X, O, X, O]);
    let turns: Vec<_> = round.history().iter().map(|r| r.turn).collect();
    assert_eq!(turns, (1..=6).collect::<Vec<u32>>());
}

#[test]
fn test_full_board_without_winner_is_a_tie() {
    // Nine scripted moves filling the board with no three-in-a-row
    let mut players: Vec<Box<dyn Player<GridRuler>>> = vec![
        scripted_human(X, "Ada", &["1", "3", "8", "6", "7"]),
        scripted_human(O, "Bea", &["2", "5", "4", "9"]),
    ];
    let mut scores = Scoreboard::new(2);
    let mut transcript = Transcript::new();

    let mut round = RoundCrafter::new(GridRuler::classic(GameRng::new(1)), &mut players);
    let winner = round.play(&mut transcript, &mut scores).unwrap();

    assert_eq!(winner, None);
    assert_eq!(round.turns_taken(), 9);
    assert!(round.ruler().board().is_full());
    assert_eq!(scores.wins(X), 0);
    assert_eq!(scores.wins(O), 0);
}

#[test]
fn test_main_diagonal_win_on_5x5() {
    // X marches down the main diagonal while O fills the rest of row one
    let mut players: Vec<Box<dyn Player<GridRuler>>> = vec![
        scripted_human(X, "Ada", &["1", "7", "13", "19", "25"]),
        scripted_human(O, "Bea", &["2", "3", "4", "5"]),
    ];
    let mut scores = Scoreboard::new(2);
    let mut transcript = Transcript::new();

    let ruler = GridRuler::new(5, &[Marker('X'), Marker('O')], GameRng::new(1));
    let mut round = RoundCrafter::new(ruler, &mut players);
    let winner = round.play(&mut transcript, &mut scores).unwrap();

    assert_eq!(winner, Some(X));
    assert_eq!(round.turns_taken(), 9);
}

#[test]
fn test_invalid_answers_do_not_consume_turns() {
    // Junk and taken tiles re-prompt within the same turn
    let mut players: Vec<Box<dyn Player<GridRuler>>> = vec![
        scripted_human(X, "Ada", &["zero", "1", "1", "2", "4"]),
        Box::new(GridBot::new(O, "Hal")),
    ];
    let mut scores = Scoreboard::new(2);
    let mut transcript = Transcript::new();

    let mut round = RoundCrafter::new(GridRuler::classic(GameRng::new(7)), &mut players);
    let winner = round.play(&mut transcript, &mut scores).unwrap();

    assert_eq!(winner, Some(O));
    assert_eq!(round.turns_taken(), 6);
    assert!(transcript.contains("not a valid square"));
}
