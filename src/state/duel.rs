//! Result computation for a single duel between two players.

use crate::state::choice::{Choice, Outcome, beats};

/// A participant and the object they picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Platform user identifier.
    pub id: String,
    pub choice: Choice,
}

impl Player {
    pub fn new(id: impl Into<String>, choice: Choice) -> Self {
        Self {
            id: id.into(),
            choice,
        }
    }
}

/// Human readable outcome and the winner, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelResult {
    pub text: String,
    pub winner_id: Option<String>,
}

/// Decide the duel between the challenger and the responder.
///
/// Both players may share the same id; the result is still computed from their choices.
pub fn compute_result(challenger: &Player, responder: &Player) -> DuelResult {
    match beats(challenger.choice, responder.choice) {
        Outcome::Win => victory(challenger, responder),
        Outcome::Lose => victory(responder, challenger),
        Outcome::Tie => DuelResult {
            text: format!(
                "<@{}> and <@{}> draw with **{}**",
                challenger.id, responder.id, challenger.choice
            ),
            winner_id: None,
        },
    }
}

fn victory(winner: &Player, loser: &Player) -> DuelResult {
    // beats() only reports a win when a verb exists
    let verb = winner.choice.verb_against(loser.choice).unwrap_or("beats");
    DuelResult {
        text: format!(
            "<@{}>'s **{}** {} <@{}>'s **{}**",
            winner.id, winner.choice, verb, loser.id, loser.choice
        ),
        winner_id: Some(winner.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenger_wins_when_their_choice_beats() {
        let result = compute_result(
            &Player::new("U1", Choice::Rock),
            &Player::new("U2", Choice::Scissors),
        );
        assert_eq!(result.winner_id.as_deref(), Some("U1"));
        assert_eq!(result.text, "<@U1>'s **rock** crushes <@U2>'s **scissors**");
    }

    #[test]
    fn responder_wins_when_challenger_loses() {
        let result = compute_result(
            &Player::new("U1", Choice::Rock),
            &Player::new("U2", Choice::Paper),
        );
        assert_eq!(result.winner_id.as_deref(), Some("U2"));
        assert_eq!(result.text, "<@U2>'s **paper** covers <@U1>'s **rock**");
    }

    #[test]
    fn same_choice_is_a_draw() {
        let result = compute_result(
            &Player::new("U1", Choice::Virus),
            &Player::new("U2", Choice::Virus),
        );
        assert_eq!(result.winner_id, None);
        assert_eq!(result.text, "<@U1> and <@U2> draw with **virus**");
    }

    #[test]
    fn self_play_is_resolved_structurally() {
        let result = compute_result(
            &Player::new("U1", Choice::Cowboy),
            &Player::new("U1", Choice::Wumpus),
        );
        assert_eq!(result.winner_id.as_deref(), Some("U1"));
        assert!(result.text.contains("lassos"));
    }
}
