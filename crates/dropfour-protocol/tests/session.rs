//! Scripted protocol sessions run end to end through `ProtocolEngine`.

use dropfour_protocol::ProtocolEngine;

fn session(script: &[&str]) -> Vec<String> {
    let input = script.join("\n");
    let mut output = Vec::new();
    ProtocolEngine::default()
        .run_with(input.as_bytes(), &mut output)
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

fn bestmove_column(line: &str) -> i64 {
    line.split_whitespace()
        .nth(1)
        .and_then(|t| t.parse().ok())
        .unwrap_or_else(|| panic!("not a bestmove line: {line}"))
}

#[test]
fn game_of_two_moves() {
    let out = session(&[
        "isready",
        "newgame",
        "position startpos",
        "go player 1 depth 2",
        "position startpos moves 3",
        "go depth 2",
        "quit",
    ]);
    assert_eq!(out[0], "readyok");
    let bestmoves: Vec<&String> = out.iter().filter(|l| l.starts_with("bestmove")).collect();
    assert_eq!(bestmoves.len(), 2);
    assert_eq!(bestmove_column(bestmoves[0]), 3);
    assert!((0..7).contains(&bestmove_column(bestmoves[1])));
}

#[test]
fn win_taken_from_compact_board() {
    let out = session(&[
        "position 0000000/0000000/0000000/0000000/2220000/1110000",
        "go player 1",
    ]);
    assert_eq!(out.len(), 1);
    assert!(out[0].starts_with("bestmove 3 score 1000000 depth 1 "), "{out:?}");
}

#[test]
fn caller_legal_list_does_not_override_board() {
    let out = session(&[
        "position startpos moves 3 3 3 3 3 3",
        "go player 1 legal 3 depth 2",
    ]);
    let last = out.last().unwrap();
    let column = bestmove_column(last);
    assert_ne!(column, 3);
    assert!((0..7).contains(&column));
}

#[test]
fn info_lines_carry_all_fields() {
    let out = session(&["setoption name TimeBudget value 200", "go player 1 depth 2"]);
    let info: Vec<&String> = out.iter().filter(|l| l.starts_with("info")).collect();
    assert_eq!(info.len(), 2);
    for line in info {
        let fields: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(fields[1], "depth");
        assert_eq!(fields[3], "score");
        assert_eq!(fields[5], "nodes");
        assert_eq!(fields[7], "time");
        assert_eq!(fields[9], "column");
    }
}
