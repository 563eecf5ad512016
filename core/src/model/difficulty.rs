use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn code(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Medio",
            Difficulty::Hard => "Difícil",
        }
    }

    /// Star rating, one filled star per level.
    pub fn stars(self) -> &'static str {
        match self {
            Difficulty::Easy => "★☆☆",
            Difficulty::Medium => "★★☆",
            Difficulty::Hard => "★★★",
        }
    }

    /// Accepts `1/2/3`, `F/M/D` or the full name with or without accent, any case.
    pub fn from_input(input: &str) -> Option<Difficulty> {
        match input.trim().to_uppercase().as_str() {
            "1" | "F" | "FACIL" | "FÁCIL" => Some(Difficulty::Easy),
            "2" | "M" | "MEDIO" => Some(Difficulty::Medium),
            "3" | "D" | "DIFICIL" | "DIFÍCIL" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.stars())
    }
}
