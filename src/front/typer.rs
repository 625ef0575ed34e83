use jasmin_vocab::{Error, Operator, OperatorKind, SemType};

fn check_arity(op: Operator, actual: usize) -> Result<(), Error> {
    if op.arity() == actual {
        Ok(())
    } else {
        Err(Error::ArityMismatch {
            op,
            expected: op.arity(),
            actual,
        })
    }
}

/// `StrongInt` survives only when every integral operand is `StrongInt`.
fn integral_result(lhs: SemType, rhs: SemType) -> SemType {
    if lhs == SemType::StrongInt && rhs == SemType::StrongInt {
        SemType::StrongInt
    } else {
        SemType::Int
    }
}

/// Type of `lhs op rhs`.
pub fn binary_result(op: Operator, lhs: SemType, rhs: SemType) -> Result<SemType, Error> {
    check_arity(op, 2)?;

    let mismatch = || Error::TypeMismatch(op, lhs, rhs);

    match op.kind() {
        OperatorKind::Arithmetic if op == Operator::Mod => {
            if lhs.is_integral() && rhs.is_integral() {
                Ok(integral_result(lhs, rhs))
            } else {
                Err(mismatch())
            }
        }
        OperatorKind::Arithmetic => {
            if !(lhs.is_numeric() && rhs.is_numeric()) {
                Err(mismatch())
            } else if lhs == SemType::Float || rhs == SemType::Float {
                Ok(SemType::Float)
            } else {
                Ok(integral_result(lhs, rhs))
            }
        }
        OperatorKind::Relational => {
            let comparable = (lhs.is_numeric() && rhs.is_numeric())
                || (lhs == SemType::String
                    && rhs == SemType::String
                    && matches!(op, Operator::Eq | Operator::Ne));
            if comparable {
                Ok(SemType::Int)
            } else {
                Err(mismatch())
            }
        }
        OperatorKind::Logical => {
            if lhs.is_integral() && rhs.is_integral() {
                Ok(SemType::Int)
            } else {
                Err(mismatch())
            }
        }
        OperatorKind::Nothing => Err(mismatch()),
    }
}

/// Type of `op operand`. Only `!` is unary.
pub fn unary_result(op: Operator, operand: SemType) -> Result<SemType, Error> {
    check_arity(op, 1)?;

    if operand.is_integral() {
        Ok(SemType::Int)
    } else {
        Err(Error::UnaryTypeMismatch(op, operand))
    }
}
