use colored::*;
use itertools::Itertools;
use jasmin_vocab::{Error, JasminCmd, Operator, SemType};
use strum::IntoEnumIterator;

use super::{frame::limit_directives, typer};

pub fn type_rows() -> Vec<String> {
    SemType::iter()
        .map(|ty| format!("{:>2}  {:<10} {}", ty.as_index(), ty, ty.descriptor()))
        .collect()
}

pub fn operator_rows() -> Vec<String> {
    Operator::iter()
        .map(|op| {
            format!(
                "{:>2}  {:<4} {:?} / {}",
                op.as_index(),
                op,
                op.kind(),
                op.arity()
            )
        })
        .collect()
}

pub fn command_rows() -> Vec<String> {
    JasminCmd::iter()
        .enumerate()
        .map(|(i, cmd)| format!("{:>2}  {}", i, cmd))
        .collect()
}

/// Splits "lhs op rhs" or "op operand" into its parts. Type names may contain spaces.
pub fn parse_application(text: &str) -> Result<(Operator, Vec<SemType>), Error> {
    let words = text.split_whitespace().collect_vec();
    let (pos, op) = words
        .iter()
        .enumerate()
        .find_map(|(i, w)| w.parse::<Operator>().ok().map(|op| (i, op)))
        .ok_or_else(|| Error::UnknownOperator(text.to_string()))?;

    let lhs = words[..pos].join(" ");
    let rhs = words[pos + 1..].join(" ");

    let mut operands = Vec::new();
    if !lhs.is_empty() {
        operands.push(lhs.parse::<SemType>()?);
    }
    operands.push(rhs.parse::<SemType>()?);

    Ok((op, operands))
}

pub fn check_application(text: &str) -> Result<SemType, Error> {
    let (op, operands) = parse_application(text)?;
    match operands.as_slice() {
        [operand] => typer::unary_result(op, *operand),
        [lhs, rhs] => typer::binary_result(op, *lhs, *rhs),
        _ => Err(jasmin_vocab::bug!("unexpected operand count")),
    }
}

fn print_section(title: &str, rows: &[String]) {
    println!("{}", title.red());
    for row in rows {
        println!("  {}", row);
    }
}

pub fn print_types() {
    print_section("Semantic types:", &type_rows());
}

pub fn print_operators() {
    print_section("Operators:", &operator_rows());
}

pub fn print_commands() {
    print_section("Jasmin commands:", &command_rows());
}

pub fn print_limits() {
    println!("{}", "Limits:".red());
    for directive in limit_directives() {
        println!("  {}", directive);
    }
}

pub fn print_check(text: &str, result: &SemType) {
    let comment = format!("; {}", text);
    println!("{} {}", result, comment.dimmed());
}
