use thiserror;

use crate::{Operator, SemType};

#[derive(PartialEq, Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("Unknown semantic type: `{0}`")]
    UnknownType(String),

    #[error("Unknown operator: `{0}`")]
    UnknownOperator(String),

    #[error("{value} is not a discriminant of {name}")]
    InvalidDiscriminant { name: &'static str, value: u8 },

    #[error("Operator `{0}` cannot be applied to {1} and {2}")]
    TypeMismatch(Operator, SemType, SemType),

    #[error("Operator `{0}` cannot be applied to {1}")]
    UnaryTypeMismatch(Operator, SemType),

    #[error("Operator `{op}` takes {expected} operand(s), but {actual} given")]
    ArityMismatch {
        op: Operator,
        expected: usize,
        actual: usize,
    },

    #[error("A {0} value has no payload")]
    MissingPayload(SemType),

    #[error("Variable `{0}` is already declared")]
    Redeclared(String),

    #[error("No free local variable slot (limit {0})")]
    LocalsExhausted(usize),

    #[error("Slot {0} is not in use")]
    SlotNotInUse(usize),

    #[error("Operand stack overflow (limit {0})")]
    StackOverflow(usize),

    #[error("Operand stack underflow")]
    StackUnderflow,

    #[error("Bug: {message:?} at {file:?}:{line:?}")]
    Bug {
        message: String,
        file: &'static str,
        line: u32,
    },
}

#[macro_export]
macro_rules! bug {
    () => {
        $crate::bug!("")
    };
    ( $msg:expr ) => {
        $crate::Error::Bug {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };
}
