use std::fmt::Display;
use std::str::FromStr;

use strum_macros::{EnumCount, EnumIter};

use crate::error::Error;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter, EnumCount)]
#[repr(u8)]
pub enum Operator {
    Add = 0,
    Sub,
    Mul,
    Div,
    Mod,
    /// <
    Lt,
    /// <=
    Le,
    /// ==
    Eq,
    /// >=
    Ge,
    /// >
    Gt,
    /// !=
    Ne,
    And,
    Or,
    Not,
    /// Terminal sentinel, not an operator
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperatorKind {
    Arithmetic,
    Relational,
    Logical,
    Nothing,
}

impl Operator {
    pub fn as_index(self) -> u8 {
        self as u8
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Eq => "==",
            Operator::Ge => ">=",
            Operator::Gt => ">",
            Operator::Ne => "!=",
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Not => "!",
            Operator::None => "",
        }
    }

    pub fn kind(self) -> OperatorKind {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Mod => {
                OperatorKind::Arithmetic
            }
            Operator::Lt
            | Operator::Le
            | Operator::Eq
            | Operator::Ge
            | Operator::Gt
            | Operator::Ne => OperatorKind::Relational,
            Operator::And | Operator::Or | Operator::Not => OperatorKind::Logical,
            Operator::None => OperatorKind::Nothing,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operator::Not => 1,
            Operator::None => 0,
            _ => 2,
        }
    }

    pub fn is_none(self) -> bool {
        self == Operator::None
    }
}

impl TryFrom<u8> for Operator {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use strum::IntoEnumIterator;

        Operator::iter()
            .find(|op| op.as_index() == value)
            .ok_or(Error::InvalidDiscriminant {
                name: "Operator",
                value,
            })
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            f.pad("none")
        } else {
            f.pad(self.symbol())
        }
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use strum::IntoEnumIterator;

        Operator::iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| Error::UnknownOperator(s.to_string()))
    }
}
