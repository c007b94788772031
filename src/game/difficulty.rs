use std::fmt;
use std::str::FromStr;

use crate::evaluate::EvaluatorKind;
use crate::searcher::alpha_beta::{MoveOrdering, SearchProfile};

/// The strength of the automated opponent, weakest first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
    GodMode,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
        Difficulty::GodMode,
    ];

    /// The tier tried when this one fails to produce a move.
    pub fn fallback(&self) -> Option<Difficulty> {
        match self {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(Difficulty::Easy),
            Difficulty::Hard => Some(Difficulty::Medium),
            Difficulty::Extreme => Some(Difficulty::Hard),
            Difficulty::GodMode => Some(Difficulty::Extreme),
        }
    }

    /// Parameters of the alpha-beta stage. The two lowest tiers never search.
    pub fn search_profile(&self) -> Option<SearchProfile> {
        match self {
            Difficulty::Easy | Difficulty::Medium => None,
            Difficulty::Hard => Some(SearchProfile {
                depth: 3,
                breadth: 8,
                evaluator: EvaluatorKind::Standard,
                ordering: MoveOrdering::Quick,
                max_extensions: 0,
            }),
            Difficulty::Extreme => Some(SearchProfile {
                depth: 4,
                breadth: 6,
                evaluator: EvaluatorKind::Standard,
                ordering: MoveOrdering::Quick,
                max_extensions: 0,
            }),
            Difficulty::GodMode => Some(SearchProfile {
                depth: 6,
                breadth: 8,
                evaluator: EvaluatorKind::Positional,
                ordering: MoveOrdering::Tactical,
                max_extensions: 8,
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
            Difficulty::GodMode => "godmode",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" | "random" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            "godmode" | "god-mode" | "god" => Ok(Difficulty::GodMode),
            _ => Err("invalid difficulty; options are: easy, medium, hard, extreme, godmode"),
        }
    }
}
