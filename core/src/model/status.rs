use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Pending,
    InProgress,
    Done,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::InProgress,
        Status::Done,
        Status::Cancelled,
    ];

    pub fn code(self) -> char {
        match self {
            Status::Pending => 'P',
            Status::InProgress => 'E',
            Status::Done => 'T',
            Status::Cancelled => 'C',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pendiente",
            Status::InProgress => "En curso",
            Status::Done => "Terminada",
            Status::Cancelled => "Cancelada",
        }
    }

    /// Lenient parse of prompt text: single-letter code or full name, any case.
    /// Empty or unrecognized input yields `None`.
    pub fn from_input(input: &str) -> Option<Status> {
        match input.trim().to_uppercase().as_str() {
            "P" | "PENDIENTE" => Some(Status::Pending),
            "E" | "EN CURSO" | "EN_CURSO" => Some(Status::InProgress),
            "T" | "TERMINADA" => Some(Status::Done),
            "C" | "CANCELADA" => Some(Status::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
