use std::fmt::Display;

use strum_macros::{EnumCount, EnumIter};

/// State of a Jasmin method body being emitted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
#[repr(u8)]
pub enum JasminCmd {
    Start = 0,
    End,
    Err,
}

impl JasminCmd {
    pub fn is_err(self) -> bool {
        self == JasminCmd::Err
    }
}

impl Display for JasminCmd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JasminCmd::Start => write!(f, "start"),
            JasminCmd::End => write!(f, "end"),
            JasminCmd::Err => write!(f, "err"),
        }
    }
}
