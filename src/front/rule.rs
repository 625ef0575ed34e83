use std::fmt::Display;

use jasmin_vocab::{Error, SemType};

use super::frame::Slot;

/// Semantic value attached to a grammar rule or a token.
///
/// The fields are independent storage; `ty` tells which payload is meaningful.
/// Use [`RuleType::value`] to read the payload as a [`SemValue`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RuleType {
    pub i_val: i32,
    pub reg: Option<Slot>,
    pub f_val: f64,
    pub id: Option<String>,
    pub string: Option<String>,
    pub ty: SemType,
}

#[derive(Clone, PartialEq, Debug)]
pub enum SemValue {
    Void,
    Int(i32),
    Float(f64),
    String(String),
    StrongInt(i32),
}

impl SemValue {
    pub fn ty(&self) -> SemType {
        match self {
            SemValue::Void => SemType::Void,
            SemValue::Int(_) => SemType::Int,
            SemValue::Float(_) => SemType::Float,
            SemValue::String(_) => SemType::String,
            SemValue::StrongInt(_) => SemType::StrongInt,
        }
    }
}

impl Display for SemValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SemValue::Void => write!(f, "void"),
            SemValue::Int(v) | SemValue::StrongInt(v) => write!(f, "{}", v),
            SemValue::Float(v) => write!(f, "{}", v),
            SemValue::String(v) => write!(f, "\"{}\"", v),
        }
    }
}

impl RuleType {
    pub fn int(value: i32) -> Self {
        Self {
            i_val: value,
            ty: SemType::Int,
            ..Default::default()
        }
    }

    pub fn strong_int(value: i32) -> Self {
        Self {
            i_val: value,
            ty: SemType::StrongInt,
            ..Default::default()
        }
    }

    pub fn float(value: f64) -> Self {
        Self {
            f_val: value,
            ty: SemType::Float,
            ..Default::default()
        }
    }

    pub fn string<S: Into<String>>(value: S) -> Self {
        Self {
            string: Some(value.into()),
            ty: SemType::String,
            ..Default::default()
        }
    }

    /// A reference to a variable named `name` of type `ty`. The payload is left empty.
    pub fn identifier<S: Into<String>>(name: S, ty: SemType) -> Self {
        Self {
            id: Some(name.into()),
            ty,
            ..Default::default()
        }
    }

    pub fn with_reg(mut self, reg: Slot) -> Self {
        self.reg = Some(reg);
        self
    }

    /// Reads the payload selected by `ty`.
    pub fn value(&self) -> Result<SemValue, Error> {
        match self.ty {
            SemType::Void => Ok(SemValue::Void),
            SemType::Int => Ok(SemValue::Int(self.i_val)),
            SemType::Float => Ok(SemValue::Float(self.f_val)),
            SemType::String => self
                .string
                .clone()
                .map(SemValue::String)
                .ok_or(Error::MissingPayload(SemType::String)),
            SemType::StrongInt => Ok(SemValue::StrongInt(self.i_val)),
        }
    }
}

impl From<SemValue> for RuleType {
    fn from(value: SemValue) -> Self {
        match value {
            SemValue::Void => RuleType::default(),
            SemValue::Int(v) => RuleType::int(v),
            SemValue::Float(v) => RuleType::float(v),
            SemValue::String(v) => RuleType::string(v),
            SemValue::StrongInt(v) => RuleType::strong_int(v),
        }
    }
}
