//! Nullable counterparts of types.

use crate::types::{ObjCType, ReferenceType};

impl ObjCType {
    /// Return the nullable counterpart of a reference or pointer type.
    ///
    /// Pointers get their nullable flag set and non-null references are
    /// wrapped. Everything else, including an already nullable reference, is
    /// returned unchanged, so applying this twice equals applying it once.
    /// Narrowing to non-null is never done here: callers build non-null nodes
    /// to begin with.
    pub fn make_nullable_if_reference_or_pointer(self) -> ObjCType {
        match self {
            Self::Pointer(pointer) => Self::Pointer(pointer.into_nullable()),
            Self::Reference(ReferenceType::NonNull(reference)) => {
                Self::Reference(ReferenceType::Nullable(reference.into_nullable()))
            }
            unchanged @ (Self::Reference(ReferenceType::Nullable(_))
            | Self::Raw(_)
            | Self::Primitive(_)
            | Self::Void) => unchanged,
        }
    }
}
