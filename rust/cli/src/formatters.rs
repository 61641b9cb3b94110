//! Display formatting for game state.
//!
//! Opponent hole cards stay hidden until the showdown; the engine does not
//! enforce visibility, so it is done here.

use felt_engine::cards::Card;
use felt_engine::participant::Participant;
use felt_engine::round::Round;

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// One status line per seat. Hole cards are shown only for the primary
/// seat unless `reveal` is set (showdown).
pub fn format_participant(seat: usize, p: &Participant, reveal: bool) -> String {
    let hand = if !p.is_active() {
        "folded".to_string()
    } else if seat == 0 || reveal {
        format!("[{}]", format_cards(p.hole_cards()))
    } else {
        "[hidden]".to_string()
    };
    format!(
        "{}: {} chips, Bet: {}, Hand: {}",
        p.name(),
        p.chips(),
        p.committed(),
        hand
    )
}

/// Multi-line table summary: variant, street, pot, table bet, board, seats.
pub fn format_table(round: &Round, reveal: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("Game Type: {}\n", round.variant()));
    out.push_str(&format!("Round: {}\n", round.street()));
    out.push_str(&format!("Pot: {} chips\n", round.pot()));
    out.push_str(&format!("Current Bet: {} chips\n", round.table_bet()));
    out.push_str(&format!(
        "Community Cards: [{}]\n",
        format_cards(round.community())
    ));
    out.push_str("Players:\n");
    for (seat, p) in round.participants().iter().enumerate() {
        out.push_str(&format!("  {}\n", format_participant(seat, p, reveal)));
    }
    out
}
