//! Alternating turn invariant: accepted moves alternate X, O, X, O, ...

use super::super::MatchState;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The first accepted move belongs to the opening symbol, no two consecutive
/// accepted moves share a symbol, and while the match is in progress the
/// turn belongs to the opponent of the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return state.turn() == state.opening();
        };

        if first.symbol != state.opening() {
            return false;
        }

        if history.windows(2).any(|w| w[0].symbol == w[1].symbol) {
            return false;
        }

        if state.is_over() {
            return true;
        }

        history
            .last()
            .is_some_and(|last| state.turn() == last.symbol.opponent())
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opening symbol"
    }
}
