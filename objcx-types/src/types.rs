//! The Objective-C type model.
//!
//! Nodes are plain immutable values. The hierarchy is closed and split so that
//! the illegal shapes cannot be built: a nullable reference only wraps a
//! [`NonNullReferenceType`], and class type arguments are non-null references.

use std::{fmt, rc::Rc};

use crate::{
    error::Error,
    namer::{TypeParameter, TypeParameterNamer},
    render::Render,
};

/// Any Objective-C type that can appear in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjCType {
    /// Verbatim text for constructs not otherwise modeled.
    Raw(String),
    /// An object reference, nullable or not.
    Reference(ReferenceType),
    /// A C scalar.
    Primitive(PrimitiveType),
    /// A raw C pointer.
    Pointer(PointerType),
    /// `void`.
    Void,
}

impl ObjCType {
    /// Create a raw passthrough type.
    pub fn raw(text: impl Into<String>) -> Self {
        Self::Raw(text.into())
    }

    /// Create a non-nullable pointer to `pointee`.
    pub fn pointer(pointee: impl Into<ObjCType>) -> Self {
        Self::Pointer(PointerType::new(pointee))
    }

    /// Create a nullable pointer to `pointee`.
    pub fn nullable_pointer(pointee: impl Into<ObjCType>) -> Self {
        Self::Pointer(PointerType::nullable(pointee))
    }

    /// Check if this is an object reference of either nullability.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    /// Check if this type admits an absent value.
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Reference(ReferenceType::Nullable(_)) => true,
            Self::Pointer(pointer) => pointer.is_nullable(),
            _ => false,
        }
    }
}

/// An object reference: either a non-null reference or its nullable wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceType {
    NonNull(NonNullReferenceType),
    Nullable(NullableReferenceType),
}

/// Object references that are never absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NonNullReferenceType {
    /// `Name<Args> *`
    Class(ClassType),
    /// A reference to a type parameter of the enclosing declaration.
    GenericParam(GenericParam),
    /// `id<Name>`
    Protocol(String),
    /// `id`
    Id,
    /// `instancetype`, used as the return type of methods returning `self`.
    InstanceType,
    /// `Ret (^)(Params)`
    BlockPointer(BlockPointerType),
    /// `Class`
    MetaClass,
}

impl NonNullReferenceType {
    /// Create a class type without type arguments.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(ClassType::new(name))
    }

    /// Create a class type with type arguments.
    pub fn generic_class(
        name: impl Into<String>,
        type_arguments: Vec<NonNullReferenceType>,
    ) -> Self {
        Self::Class(ClassType::with_type_arguments(name, type_arguments))
    }

    /// Create a protocol type.
    pub fn protocol(name: impl Into<String>) -> Self {
        Self::Protocol(name.into())
    }

    /// Create a reference to a type parameter resolved through `namer`.
    pub fn generic_param(parameter: TypeParameter, namer: Rc<dyn TypeParameterNamer>) -> Self {
        Self::GenericParam(GenericParam::new(parameter, namer))
    }

    /// Create a block type.
    pub fn block(return_type: impl Into<ObjCType>, parameter_types: Vec<ReferenceType>) -> Self {
        Self::BlockPointer(BlockPointerType::new(return_type, parameter_types))
    }

    /// Wrap this reference in its nullable counterpart.
    pub fn into_nullable(self) -> NullableReferenceType {
        NullableReferenceType::new(self)
    }
}

/// A nullable object reference. Wraps exactly one non-null reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullableReferenceType {
    non_null_type: NonNullReferenceType,
}

impl NullableReferenceType {
    pub fn new(non_null_type: NonNullReferenceType) -> Self {
        Self { non_null_type }
    }

    pub fn non_null_type(&self) -> &NonNullReferenceType {
        &self.non_null_type
    }

    pub fn into_non_null_type(self) -> NonNullReferenceType {
        self.non_null_type
    }
}

/// An Objective-C class reference, optionally with lightweight generics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassType {
    name: String,
    type_arguments: Vec<NonNullReferenceType>,
}

impl ClassType {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_type_arguments(name, Vec::new())
    }

    pub fn with_type_arguments(
        name: impl Into<String>,
        type_arguments: Vec<NonNullReferenceType>,
    ) -> Self {
        Self {
            name: name.into(),
            type_arguments,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_arguments(&self) -> &[NonNullReferenceType] {
        &self.type_arguments
    }
}

/// A use of a type parameter.
///
/// The display name is not stored: it is looked up from the namer each time
/// the node is rendered, so every use of one parameter shares a single name.
#[derive(Clone)]
pub struct GenericParam {
    parameter: TypeParameter,
    namer: Rc<dyn TypeParameterNamer>,
}

impl GenericParam {
    pub fn new(parameter: TypeParameter, namer: Rc<dyn TypeParameterNamer>) -> Self {
        Self { parameter, namer }
    }

    pub fn parameter(&self) -> &TypeParameter {
        &self.parameter
    }

    /// Resolve the display name through the namer.
    pub fn name(&self) -> String {
        self.namer.type_parameter_name(&self.parameter)
    }
}

impl fmt::Debug for GenericParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericParam")
            .field("parameter", &self.parameter)
            .finish_non_exhaustive()
    }
}

impl PartialEq for GenericParam {
    fn eq(&self, other: &Self) -> bool {
        self.parameter == other.parameter && Rc::ptr_eq(&self.namer, &other.namer)
    }
}

impl Eq for GenericParam {}

/// A block (closure) reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPointerType {
    return_type: Box<ObjCType>,
    parameter_types: Vec<ReferenceType>,
}

impl BlockPointerType {
    pub fn new(return_type: impl Into<ObjCType>, parameter_types: Vec<ReferenceType>) -> Self {
        Self {
            return_type: Box::new(return_type.into()),
            parameter_types,
        }
    }

    pub fn return_type(&self) -> &ObjCType {
        &self.return_type
    }

    pub fn parameter_types(&self) -> &[ReferenceType] {
        &self.parameter_types
    }
}

/// A raw C pointer. Nullability is a flag because `_Nullable` attaches after
/// the star rather than after the pointee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerType {
    pointee: Box<ObjCType>,
    nullable: bool,
}

impl PointerType {
    pub fn new(pointee: impl Into<ObjCType>) -> Self {
        Self {
            pointee: Box::new(pointee.into()),
            nullable: false,
        }
    }

    pub fn nullable(pointee: impl Into<ObjCType>) -> Self {
        Self {
            pointee: Box::new(pointee.into()),
            nullable: true,
        }
    }

    pub fn pointee(&self) -> &ObjCType {
        &self.pointee
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Return a copy of this pointer marked nullable.
    pub fn into_nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }
}

/// C scalar types with their canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    NsUInteger,
    Bool,
    Unichar,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    NsInteger,
    Char,
    UnsignedChar,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Short,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 24] = [
        Self::NsUInteger,
        Self::Bool,
        Self::Unichar,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::UInt8,
        Self::UInt16,
        Self::UInt32,
        Self::UInt64,
        Self::Float,
        Self::Double,
        Self::NsInteger,
        Self::Char,
        Self::UnsignedChar,
        Self::UnsignedShort,
        Self::Int,
        Self::UnsignedInt,
        Self::Long,
        Self::UnsignedLong,
        Self::LongLong,
        Self::UnsignedLongLong,
        Self::Short,
    ];

    /// The C spelling of this type.
    pub fn c_name(&self) -> &'static str {
        match self {
            Self::NsUInteger => "NSUInteger",
            Self::Bool => "BOOL",
            Self::Unichar => "unichar",
            Self::Int8 => "int8_t",
            Self::Int16 => "int16_t",
            Self::Int32 => "int32_t",
            Self::Int64 => "int64_t",
            Self::UInt8 => "uint8_t",
            Self::UInt16 => "uint16_t",
            Self::UInt32 => "uint32_t",
            Self::UInt64 => "uint64_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::NsInteger => "NSInteger",
            Self::Char => "char",
            Self::UnsignedChar => "unsigned char",
            Self::UnsignedShort => "unsigned short",
            Self::Int => "int",
            Self::UnsignedInt => "unsigned int",
            Self::Long => "long",
            Self::UnsignedLong => "unsigned long",
            Self::LongLong => "long long",
            Self::UnsignedLongLong => "unsigned long long",
            Self::Short => "short",
        }
    }
}

impl From<ReferenceType> for ObjCType {
    fn from(reference: ReferenceType) -> Self {
        Self::Reference(reference)
    }
}

impl From<NonNullReferenceType> for ObjCType {
    fn from(reference: NonNullReferenceType) -> Self {
        Self::Reference(reference.into())
    }
}

impl From<NullableReferenceType> for ObjCType {
    fn from(reference: NullableReferenceType) -> Self {
        Self::Reference(reference.into())
    }
}

impl From<ClassType> for ObjCType {
    fn from(class: ClassType) -> Self {
        NonNullReferenceType::Class(class).into()
    }
}

impl From<BlockPointerType> for ObjCType {
    fn from(block: BlockPointerType) -> Self {
        NonNullReferenceType::BlockPointer(block).into()
    }
}

impl From<PrimitiveType> for ObjCType {
    fn from(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<PointerType> for ObjCType {
    fn from(pointer: PointerType) -> Self {
        Self::Pointer(pointer)
    }
}

impl From<NonNullReferenceType> for ReferenceType {
    fn from(reference: NonNullReferenceType) -> Self {
        Self::NonNull(reference)
    }
}

impl From<NullableReferenceType> for ReferenceType {
    fn from(reference: NullableReferenceType) -> Self {
        Self::Nullable(reference)
    }
}

impl From<ClassType> for NonNullReferenceType {
    fn from(class: ClassType) -> Self {
        Self::Class(class)
    }
}

impl From<BlockPointerType> for NonNullReferenceType {
    fn from(block: BlockPointerType) -> Self {
        Self::BlockPointer(block)
    }
}

impl From<GenericParam> for NonNullReferenceType {
    fn from(param: GenericParam) -> Self {
        Self::GenericParam(param)
    }
}

impl TryFrom<ObjCType> for ReferenceType {
    type Error = Error;

    fn try_from(ty: ObjCType) -> Result<Self, Self::Error> {
        match ty {
            ObjCType::Reference(reference) => Ok(reference),
            other => Err(Error::NotReference {
                rendered: other.render(),
            }),
        }
    }
}

impl TryFrom<ObjCType> for NonNullReferenceType {
    type Error = Error;

    fn try_from(ty: ObjCType) -> Result<Self, Self::Error> {
        match ty {
            ObjCType::Reference(ReferenceType::NonNull(reference)) => Ok(reference),
            other => Err(Error::NotNonNullReference {
                rendered: other.render(),
            }),
        }
    }
}

impl TryFrom<ReferenceType> for NonNullReferenceType {
    type Error = Error;

    fn try_from(reference: ReferenceType) -> Result<Self, Self::Error> {
        match reference {
            ReferenceType::NonNull(reference) => Ok(reference),
            nullable @ ReferenceType::Nullable(_) => Err(Error::NotNonNullReference {
                rendered: nullable.render(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_c_names() {
        assert_eq!(PrimitiveType::NsUInteger.c_name(), "NSUInteger");
        assert_eq!(PrimitiveType::Bool.c_name(), "BOOL");
        assert_eq!(PrimitiveType::Int32.c_name(), "int32_t");
        assert_eq!(PrimitiveType::UnsignedLongLong.c_name(), "unsigned long long");
    }

    #[test]
    fn test_primitive_all_is_exhaustive_and_distinct() {
        let mut names: Vec<_> = PrimitiveType::ALL.iter().map(|p| p.c_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PrimitiveType::ALL.len());
    }

    #[test]
    fn test_pointer_into_nullable_keeps_pointee() {
        let pointer = PointerType::new(PrimitiveType::Int32).into_nullable();
        assert!(pointer.is_nullable());
        assert_eq!(pointer.pointee(), &ObjCType::Primitive(PrimitiveType::Int32));
    }

    #[test]
    fn test_is_nullable() {
        assert!(!ObjCType::from(NonNullReferenceType::Id).is_nullable());
        assert!(ObjCType::from(NonNullReferenceType::Id.into_nullable()).is_nullable());
        assert!(ObjCType::nullable_pointer(ObjCType::Void).is_nullable());
        assert!(!ObjCType::pointer(ObjCType::Void).is_nullable());
        assert!(!ObjCType::Void.is_nullable());
    }

    #[test]
    fn test_try_from_accepts_non_null_reference() {
        let ty = ObjCType::from(NonNullReferenceType::class("NSString"));
        let reference = NonNullReferenceType::try_from(ty).unwrap();
        assert_eq!(reference, NonNullReferenceType::class("NSString"));
    }

    #[test]
    fn test_try_from_rejects_nullable_reference() {
        let ty = ObjCType::from(NonNullReferenceType::class("NSString").into_nullable());
        let err = NonNullReferenceType::try_from(ty).unwrap_err();
        assert!(matches!(
            err,
            Error::NotNonNullReference { ref rendered } if rendered == "NSString * _Nullable"
        ));
    }

    #[test]
    fn test_try_from_rejects_primitive() {
        let err = ReferenceType::try_from(ObjCType::from(PrimitiveType::Int32)).unwrap_err();
        assert!(matches!(err, Error::NotReference { ref rendered } if rendered == "int32_t"));
    }

    #[test]
    fn test_generic_param_equality_uses_namer_identity() {
        let namer: Rc<dyn TypeParameterNamer> = Rc::new(|p: &TypeParameter| p.name().to_string());
        let other: Rc<dyn TypeParameterNamer> = Rc::new(|p: &TypeParameter| p.name().to_string());
        let t = TypeParameter::new("Box", 0, "T");

        let a = GenericParam::new(t.clone(), namer.clone());
        let b = GenericParam::new(t.clone(), namer);
        let c = GenericParam::new(t, other);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
