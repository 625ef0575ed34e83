use std::fmt::Display;
use std::str::FromStr;

use strum_macros::{EnumCount, EnumIter};

use crate::error::Error;

/// Kind of the payload carried by a semantic value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, EnumIter, EnumCount)]
#[repr(u8)]
pub enum SemType {
    #[default]
    Void = 0,
    Int,
    Float,
    String,
    /// Integer whose type is fixed by a declaration rather than inferred from a literal.
    StrongInt,
}

impl SemType {
    pub fn as_index(self) -> u8 {
        self as u8
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, SemType::Int | SemType::Float | SemType::StrongInt)
    }

    pub fn is_integral(self) -> bool {
        matches!(self, SemType::Int | SemType::StrongInt)
    }

    /// JVM field descriptor
    pub fn descriptor(self) -> &'static str {
        match self {
            SemType::Void => "V",
            SemType::Int | SemType::StrongInt => "I",
            SemType::Float => "F",
            SemType::String => "Ljava/lang/String;",
        }
    }

    fn name(self) -> &'static str {
        match self {
            SemType::Void => "void",
            SemType::Int => "int",
            SemType::Float => "float",
            SemType::String => "string",
            SemType::StrongInt => "strong int",
        }
    }
}

impl TryFrom<u8> for SemType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SemType::Void),
            1 => Ok(SemType::Int),
            2 => Ok(SemType::Float),
            3 => Ok(SemType::String),
            4 => Ok(SemType::StrongInt),
            _ => Err(Error::InvalidDiscriminant {
                name: "SemType",
                value,
            }),
        }
    }
}

impl Display for SemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SemType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "void" => Ok(SemType::Void),
            "int" => Ok(SemType::Int),
            "float" => Ok(SemType::Float),
            "string" => Ok(SemType::String),
            "strong int" => Ok(SemType::StrongInt),
            _ => Err(Error::UnknownType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn declaration_order() {
        let all = SemType::iter().collect::<Vec<_>>();
        assert_eq!(
            vec![
                SemType::Void,
                SemType::Int,
                SemType::Float,
                SemType::String,
                SemType::StrongInt
            ],
            all
        );
        assert_eq!(5, SemType::COUNT);

        for (i, ty) in all.iter().enumerate() {
            assert_eq!(i as u8, ty.as_index());
            assert_eq!(Ok(*ty), SemType::try_from(i as u8));
        }
    }

    #[test]
    fn pairwise_distinct() {
        for a in SemType::iter() {
            for b in SemType::iter() {
                assert_eq!(a.as_index() == b.as_index(), a == b);
            }
        }
    }

    #[test]
    fn invalid_discriminant() {
        assert_eq!(
            Err(Error::InvalidDiscriminant {
                name: "SemType",
                value: 5
            }),
            SemType::try_from(5)
        );
    }

    #[test]
    fn parse_names() {
        for ty in SemType::iter() {
            assert_eq!(Ok(ty), ty.to_string().parse::<SemType>());
        }
        assert_eq!(
            Err(Error::UnknownType("bool".to_string())),
            "bool".parse::<SemType>()
        );
    }

    #[test]
    fn classification() {
        assert!(SemType::StrongInt.is_integral());
        assert!(SemType::Float.is_numeric());
        assert!(!SemType::Float.is_integral());
        assert!(!SemType::String.is_numeric());
        assert!(!SemType::Void.is_numeric());
    }

    #[test]
    fn descriptors() {
        assert_eq!("V", SemType::Void.descriptor());
        assert_eq!("I", SemType::StrongInt.descriptor());
        assert_eq!("Ljava/lang/String;", SemType::String.descriptor());
    }
}
