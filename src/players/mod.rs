//! Actors and the move-selection policies that drive them.

mod actor;
mod random;
mod scripted;
mod sequential;

pub use actor::{Actor, ActorReport};
pub use random::RandomCells;
pub use scripted::Scripted;
pub use sequential::Sequential;

use crate::games::tictactoe::Coord;
use serde::{Deserialize, Serialize};

/// Source of candidate cells for an actor.
///
/// A policy knows nothing about the board. It proposes, and the monitor
/// decides; a rejected proposal simply leads to the next one.
pub trait Policy: Send {
    /// Next candidate, or `None` once the sequence is exhausted.
    fn next_proposal(&mut self) -> Option<Coord>;

    /// Rewinds the sequence. Returns `false` if this policy cannot restart.
    fn restart(&mut self) -> bool {
        false
    }

    /// Short name for logs.
    fn name(&self) -> &str;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn next_proposal(&mut self) -> Option<Coord> {
        (**self).next_proposal()
    }

    fn restart(&mut self) -> bool {
        (**self).restart()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Built-in policies selectable from config or the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PolicyKind {
    /// Row-major scan of all nine cells, once.
    Sequential,
    /// Uniformly random cell on every proposal, forever.
    Random,
}

impl PolicyKind {
    /// Builds the policy. `seed` only affects [`PolicyKind::Random`].
    pub fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            PolicyKind::Sequential => Box::new(Sequential::new()),
            PolicyKind::Random => match seed {
                Some(seed) => Box::new(RandomCells::seeded(seed)),
                None => Box::new(RandomCells::from_entropy()),
            },
        }
    }
}

/// What an actor does when its policy runs dry before the game ends.
///
/// Without a choice here the opponent would wait forever for a move that
/// never comes.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Exhaustion {
    /// Resign, ending the game as a win for the opponent.
    #[default]
    Resign,
    /// Rewind the policy and keep proposing; resign if it cannot rewind.
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_names() {
        assert_eq!(PolicyKind::Sequential.to_string(), "sequential");
        assert_eq!(PolicyKind::Random.build(Some(1)).name(), "random");
        assert_eq!(PolicyKind::Sequential.build(None).name(), "sequential");
    }

    #[test]
    fn test_every_kind_proposes() {
        use strum::IntoEnumIterator;
        for kind in PolicyKind::iter() {
            let mut policy = kind.build(Some(0));
            assert_eq!(policy.name(), kind.to_string());
            assert!(policy.next_proposal().is_some());
        }
    }

    #[test]
    fn test_boxed_policy_delegates() {
        let mut policy: Box<dyn Policy> = PolicyKind::Sequential.build(None);
        assert_eq!(policy.next_proposal(), Some(Coord::ALL[0]));
        assert!(policy.restart());
        assert_eq!(policy.next_proposal(), Some(Coord::ALL[0]));
    }
}
