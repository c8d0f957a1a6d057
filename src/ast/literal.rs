use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Bit widths available for the integer primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntWidth {
    W32,
    W64,
    W128,
    W256,
}

impl IntWidth {
    pub fn bits(&self) -> usize {
        match self {
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
            IntWidth::W128 => 128,
            IntWidth::W256 => 256,
        }
    }
}

impl Display for IntWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Literal values as they appear in programs. Digits are kept in their
/// source form; 256-bit values do not fit any native integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Literal {
    StringLit(String),
    IntLit(IntWidth, String),
    UintLit(IntWidth, String),
    BNumLit(String),
    /// Fixed-length byte string; the length is part of the type.
    ByStrXLit(Vec<u8>),
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::StringLit(s) => write!(f, "{s:?}"),
            Literal::IntLit(width, digits) => write!(f, "Int{width} {digits}"),
            Literal::UintLit(width, digits) => write!(f, "Uint{width} {digits}"),
            Literal::BNumLit(digits) => write!(f, "BNum {digits}"),
            Literal::ByStrXLit(bytes) => {
                write!(f, "0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
        }
    }
}
