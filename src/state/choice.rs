//! Fixed catalog of objects a player can pick and the relation deciding who wins.

use std::{fmt, str::FromStr};

use rand::seq::SliceRandom;
use thiserror::Error;

/// Objects a player can throw in a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Rock,
    Cowboy,
    Scissors,
    Virus,
    Computer,
    Wumpus,
    Paper,
}

/// Outcome of comparing one choice against another, from the first choice's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    /// Same comparison seen from the other side.
    pub fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

/// Raised when a string does not name any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown object `{0}`")]
pub struct UnknownChoice(pub String);

impl Choice {
    /// Every catalog entry in declaration order.
    pub const ALL: [Choice; 7] = [
        Choice::Rock,
        Choice::Cowboy,
        Choice::Scissors,
        Choice::Virus,
        Choice::Computer,
        Choice::Wumpus,
        Choice::Paper,
    ];

    /// Lowercase identifier used as the select-menu value and command option value.
    pub fn name(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Cowboy => "cowboy",
            Choice::Scissors => "scissors",
            Choice::Virus => "virus",
            Choice::Computer => "computer",
            Choice::Wumpus => "wumpus",
            Choice::Paper => "paper",
        }
    }

    /// Capitalised label shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Cowboy => "Cowboy",
            Choice::Scissors => "Scissors",
            Choice::Virus => "Virus",
            Choice::Computer => "Computer",
            Choice::Wumpus => "Wumpus",
            Choice::Paper => "Paper",
        }
    }

    /// Flavour text shown under the label in the select menu.
    pub fn description(self) -> &'static str {
        match self {
            Choice::Rock => "sedimentary, igneous, or perhaps even metamorphic",
            Choice::Cowboy => "yeehaw~",
            Choice::Scissors => "careful ! sharp ! edges !!",
            Choice::Virus => "genetic mutation, malware, or something inbetween",
            Choice::Computer => "beep boop beep bzzrrhggggg",
            Choice::Wumpus => "the purple Discord fella",
            Choice::Paper => "versatile and iconic",
        }
    }

    /// Verb describing how `self` defeats `other`, or `None` when it does not.
    pub fn verb_against(self, other: Choice) -> Option<&'static str> {
        use Choice::*;

        let verb = match (self, other) {
            (Rock, Virus) => "outwaits",
            (Rock, Computer) => "smashes",
            (Rock, Scissors) => "crushes",
            (Cowboy, Scissors) => "puts away",
            (Cowboy, Wumpus) => "lassos",
            (Cowboy, Rock) => "steel-toe kicks",
            (Scissors, Paper) => "cuts",
            (Scissors, Computer) => "cuts cord of",
            (Scissors, Virus) => "cuts DNA of",
            (Virus, Cowboy) => "infects",
            (Virus, Computer) => "corrupts",
            (Virus, Wumpus) => "infects",
            (Computer, Cowboy) => "overwhelms",
            (Computer, Paper) => "uninstalls firmware for",
            (Computer, Wumpus) => "deletes assets for",
            (Wumpus, Paper) => "draws picture on",
            (Wumpus, Rock) => "paints cute face on",
            (Wumpus, Scissors) => "admires own reflection in",
            (Paper, Virus) => "ignores",
            (Paper, Cowboy) => "gives papercut to",
            (Paper, Rock) => "covers",
            _ => return None,
        };
        Some(verb)
    }
}

/// Compare `a` against `b`.
///
/// Distinct entries never tie: every pair in the catalog has exactly one winner.
pub fn beats(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.verb_against(b).is_some() {
        Outcome::Win
    } else if b.verb_against(a).is_some() {
        Outcome::Lose
    } else {
        Outcome::Tie
    }
}

/// Return every catalog entry exactly once in a random order.
pub fn shuffled_options() -> Vec<Choice> {
    let mut options = Choice::ALL.to_vec();
    options.shuffle(&mut rand::rng());
    options
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Choice {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Choice::ALL
            .into_iter()
            .find(|choice| choice.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn beats_is_reflexive_tie() {
        for choice in Choice::ALL {
            assert_eq!(beats(choice, choice), Outcome::Tie);
        }
    }

    #[test]
    fn beats_is_total_and_antisymmetric() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                let forward = beats(a, b);
                assert_eq!(beats(b, a), forward.flip(), "{a} vs {b}");
                if a != b {
                    assert_ne!(forward, Outcome::Tie, "{a} vs {b} must have a winner");
                }
            }
        }
    }

    #[test]
    fn every_choice_beats_exactly_three_others() {
        for a in Choice::ALL {
            let wins = Choice::ALL
                .into_iter()
                .filter(|b| beats(a, *b) == Outcome::Win)
                .count();
            assert_eq!(wins, 3, "{a}");
        }
    }

    #[test]
    fn rock_crushes_scissors() {
        assert_eq!(beats(Choice::Rock, Choice::Scissors), Outcome::Win);
        assert_eq!(Choice::Rock.verb_against(Choice::Scissors), Some("crushes"));
        assert_eq!(Choice::Scissors.verb_against(Choice::Rock), None);
    }

    #[test]
    fn shuffled_options_cover_catalog_each_call() {
        for _ in 0..20 {
            let options = shuffled_options();
            assert_eq!(options.len(), Choice::ALL.len());
            let unique: HashSet<_> = options.iter().copied().collect();
            assert_eq!(unique.len(), Choice::ALL.len());
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("rock".parse::<Choice>(), Ok(Choice::Rock));
        assert_eq!("Wumpus".parse::<Choice>(), Ok(Choice::Wumpus));
        assert_eq!(
            "lizard".parse::<Choice>(),
            Err(UnknownChoice("lizard".into()))
        );
        for choice in Choice::ALL {
            assert_eq!(choice.to_string().parse::<Choice>(), Ok(choice));
        }
    }
}
