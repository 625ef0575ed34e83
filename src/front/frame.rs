//! Method frame limits
//!
//! Every generated method gets the same fixed budget:
//!
//! ```text
//! .limit stack  STACK_MAX    operand stack depth
//! .limit locals STACK_MAX    named locals and temporaries share the slots
//! ```
//!

use std::fmt::Display;

use jasmin_vocab::{bug, Error, Operator, SemType, STACK_MAX};
use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::typer;

/// Index of a local variable slot. Always less than `STACK_MAX`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    pub fn new(index: usize) -> Option<Slot> {
        if index < STACK_MAX {
            Some(Slot(index as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Debug)]
struct Local {
    /// `None` for temporaries
    name: Option<String>,
    ty: SemType,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LocalTable {
    slots: [Option<Local>; STACK_MAX],
    names: FxHashMap<String, Slot>,
    high_water: usize,
}

impl Default for LocalTable {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalTable {
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            names: FxHashMap::default(),
            high_water: 0,
        }
    }

    /// Assigns the lowest free slot to `name`.
    pub fn declare(&mut self, name: &str, ty: SemType) -> Result<Slot, Error> {
        if self.names.contains_key(name) {
            return Err(Error::Redeclared(name.to_string()));
        }

        let slot = self.allocate(Local {
            name: Some(name.to_string()),
            ty,
        })?;
        self.names.insert(name.to_string(), slot);
        debug!("declare {}: {} at slot {}", name, ty, slot);
        Ok(slot)
    }

    pub fn temp(&mut self, ty: SemType) -> Result<Slot, Error> {
        let slot = self.allocate(Local { name: None, ty })?;
        trace!("temporary {} at slot {}", ty, slot);
        Ok(slot)
    }

    pub fn lookup(&self, name: &str) -> Option<(Slot, SemType)> {
        let slot = *self.names.get(name)?;
        self.slots[slot.index()]
            .as_ref()
            .map(|local| (slot, local.ty))
    }

    pub fn release(&mut self, slot: Slot) -> Result<(), Error> {
        let local = self.slots[slot.index()]
            .take()
            .ok_or(Error::SlotNotInUse(slot.index()))?;
        if let Some(name) = local.name {
            self.names.remove(&name);
        }
        trace!("release slot {}", slot);
        Ok(())
    }

    /// Number of slots currently in use
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest number of slots that were in use at the same time.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn allocate(&mut self, local: Local) -> Result<Slot, Error> {
        let index = self
            .slots
            .iter()
            .position(|s| s.is_none())
            .ok_or(Error::LocalsExhausted(STACK_MAX))?;
        self.slots[index] = Some(local);
        self.high_water = self.high_water.max(self.len());

        Slot::new(index).ok_or_else(|| bug!("slot index out of range"))
    }
}

/// Operand stack of a method, tracked by the type of each entry.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct EvalStack {
    entries: Vec<SemType>,
    max_depth: usize,
}

impl EvalStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ty: SemType) -> Result<(), Error> {
        if self.entries.len() >= STACK_MAX {
            return Err(Error::StackOverflow(STACK_MAX));
        }
        self.entries.push(ty);
        self.max_depth = self.max_depth.max(self.entries.len());
        trace!("push {} (depth {})", ty, self.entries.len());
        Ok(())
    }

    pub fn pop(&mut self) -> Result<SemType, Error> {
        self.entries.pop().ok_or(Error::StackUnderflow)
    }

    pub fn peek(&self) -> Option<SemType> {
        self.entries.last().copied()
    }

    /// Replaces the operands of `op` on top of the stack with its result type.
    pub fn apply(&mut self, op: Operator) -> Result<SemType, Error> {
        let arity = op.arity();
        if self.entries.len() < arity {
            return Err(Error::StackUnderflow);
        }

        // Operands stay on the stack until the check succeeds.
        let base = self.entries.len() - arity;
        let result = match self.entries[base..] {
            [lhs, rhs] => typer::binary_result(op, lhs, rhs)?,
            [operand] => typer::unary_result(op, operand)?,
            _ => return Err(Error::UnknownOperator(op.to_string())),
        };
        self.entries.truncate(base);
        self.push(result)?;
        Ok(result)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

pub fn limit_directives() -> [String; 2] {
    [
        format!(".limit stack {}", STACK_MAX),
        format!(".limit locals {}", STACK_MAX),
    ]
}
