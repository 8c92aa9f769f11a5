//! Host-language scalar kinds and their Objective-C counterparts.

use objcx_types::{ObjCType, PrimitiveType, ValueType};

/// Fixed-width scalar kinds of the host language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostPrimitive {
    Boolean,
    Char,
    Byte,
    Short,
    Int,
    Long,
    UByte,
    UShort,
    UInt,
    ULong,
    Float,
    Double,
    NativePtr,
}

impl HostPrimitive {
    pub const ALL: [HostPrimitive; 13] = [
        Self::Boolean,
        Self::Char,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::UByte,
        Self::UShort,
        Self::UInt,
        Self::ULong,
        Self::Float,
        Self::Double,
        Self::NativePtr,
    ];

    /// The Objective-C type a value of this kind is exported as.
    pub fn objc_type(&self) -> ObjCType {
        match self.primitive() {
            Some(primitive) => ObjCType::Primitive(primitive),
            None => ObjCType::pointer(ObjCType::Void),
        }
    }

    /// The primitive spelling, or `None` for pointers.
    pub fn primitive(&self) -> Option<PrimitiveType> {
        Some(match self {
            Self::Boolean => PrimitiveType::Bool,
            Self::Char => PrimitiveType::Unichar,
            Self::Byte => PrimitiveType::Int8,
            Self::Short => PrimitiveType::Int16,
            Self::Int => PrimitiveType::Int32,
            Self::Long => PrimitiveType::Int64,
            Self::UByte => PrimitiveType::UInt8,
            Self::UShort => PrimitiveType::UInt16,
            Self::UInt => PrimitiveType::UInt32,
            Self::ULong => PrimitiveType::UInt64,
            Self::Float => PrimitiveType::Float,
            Self::Double => PrimitiveType::Double,
            Self::NativePtr => return None,
        })
    }

    /// The runtime value encoding used in metadata.
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Boolean => ValueType::Bool,
            Self::Char => ValueType::Unichar,
            Self::Byte => ValueType::Char,
            Self::Short => ValueType::Short,
            Self::Int => ValueType::Int,
            Self::Long => ValueType::LongLong,
            Self::UByte => ValueType::UnsignedChar,
            Self::UShort => ValueType::UnsignedShort,
            Self::UInt => ValueType::UnsignedInt,
            Self::ULong => ValueType::UnsignedLongLong,
            Self::Float => ValueType::Float,
            Self::Double => ValueType::Double,
            Self::NativePtr => ValueType::Pointer,
        }
    }

    /// Size of a value in bytes. `None` where the host does not fix it.
    pub fn size_bytes(&self) -> Option<u32> {
        match self {
            Self::Byte | Self::UByte => Some(1),
            Self::Char | Self::Short | Self::UShort => Some(2),
            Self::Int | Self::UInt | Self::Float => Some(4),
            Self::Long | Self::ULong | Self::Double => Some(8),
            Self::Boolean | Self::NativePtr => None,
        }
    }

    /// Size of a value in bits.
    pub fn size_bits(&self) -> Option<u32> {
        self.size_bytes().map(|bytes| bytes * 8)
    }
}
