//! Objective-C runtime type encodings for scalar values.

/// Scalar kinds that have a runtime type encoding.
///
/// Some kinds share an encoding: `Bool` and `Char` are both `c`, `Unichar`
/// and `UnsignedShort` are both `S`. This is how the runtime has always
/// encoded them, so the overlaps are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Unichar,
    Char,
    Short,
    Int,
    LongLong,
    UnsignedChar,
    UnsignedShort,
    UnsignedInt,
    UnsignedLongLong,
    Float,
    Double,
    Pointer,
}

impl ValueType {
    pub const ALL: [ValueType; 13] = [
        Self::Bool,
        Self::Unichar,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::LongLong,
        Self::UnsignedChar,
        Self::UnsignedShort,
        Self::UnsignedInt,
        Self::UnsignedLongLong,
        Self::Float,
        Self::Double,
        Self::Pointer,
    ];

    /// The `@encode` string for this kind.
    pub fn encoding(&self) -> &'static str {
        match self {
            Self::Bool => "c",
            Self::Unichar => "S",
            Self::Char => "c",
            Self::Short => "s",
            Self::Int => "i",
            Self::LongLong => "q",
            Self::UnsignedChar => "C",
            Self::UnsignedShort => "S",
            Self::UnsignedInt => "I",
            Self::UnsignedLongLong => "Q",
            Self::Float => "f",
            Self::Double => "d",
            Self::Pointer => "^v",
        }
    }
}
