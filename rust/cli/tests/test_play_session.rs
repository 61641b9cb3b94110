use std::io::Cursor;

use felt_cli::commands::handle_play_command;
use felt_engine::logger::RoundRecord;

fn play_scripted(script: &str, rounds: u32, log: Option<std::path::PathBuf>) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(script.as_bytes().to_vec());
    handle_play_command(
        "holdem",
        1,
        Some(7),
        rounds,
        log,
        &mut out,
        &mut err,
        &mut stdin,
    )
    .expect("play session should succeed");
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn calling_down_reaches_a_showdown() {
    // one call per street: preflop, flop, turn, river
    let (out, _err) = play_scripted("call\ncall\ncall\ncall\n", 1, None);
    assert!(out.contains("--- flop ---"));
    assert!(out.contains("--- river ---"));
    assert!(out.contains("Winner:"));
    assert!(out.contains("Session over."));
}

#[test]
fn quit_ends_the_session_early() {
    let (out, _err) = play_scripted("q\n", 1, None);
    assert!(!out.contains("Winner:"));
    assert!(out.contains("Session over."));
}

#[test]
fn eof_counts_as_quit() {
    let (out, _err) = play_scripted("", 1, None);
    assert!(out.contains("Session over."));
}

#[test]
fn illegal_raise_is_reported_and_reprompted() {
    // raise equal to the table bet is rejected, then a legal raise lands
    let script = "raise 20\nraise 60\ncall\ncall\ncall\n";
    let (out, err) = play_scripted(script, 1, None);
    assert!(err.contains("must exceed the current table bet"));
    assert!(out.contains("Winner:"));
}

#[test]
fn garbage_input_is_reprompted() {
    let script = "allin\ncall\ncall\ncall\ncall\n";
    let (out, err) = play_scripted(script, 1, None);
    assert!(err.contains("Invalid action"));
    assert!(out.contains("Winner:"));
}

#[test]
fn folding_still_plays_out_the_board() {
    // seat 0 folds preflop; the opponent wins at showdown
    let (out, _err) = play_scripted("fold\n", 1, None);
    assert!(out.contains("Winner: Opponent 1"));
}

#[test]
fn log_file_gets_one_record_per_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rounds.jsonl");
    let script = "call\ncall\ncall\ncall\ncall\ncall\ncall\ncall\n";
    let (_out, _err) = play_scripted(script, 2, Some(path.clone()));

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<RoundRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].seed, 7);
    assert!(!records[0].actions.is_empty());
    assert!(records[0].winner.is_some());
    assert_eq!(records[0].community.len(), 5);
}
