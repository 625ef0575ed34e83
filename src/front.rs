pub mod cli_option;
pub mod console;
pub mod frame;
pub mod rule;
pub mod typer;

pub use jasmin_vocab::{Error, JasminCmd, Operator, OperatorKind, SemType, STACK_MAX};
