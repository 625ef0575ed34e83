pub mod command;
pub mod error;
pub mod operator;
pub mod sem_type;

pub use command::JasminCmd;
pub use error::Error;
pub use operator::{Operator, OperatorKind};
pub use sem_type::SemType;

/// Limit of the operand stack, the local variables and the temporary local variables
/// of a single method.
pub const STACK_MAX: usize = 15;
