// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Objective-C type model and declarator renderer.
//!
//! This crate models the types that appear in an exported Objective-C header
//! and prints them as declarators:
//!
//! ```
//! use objcx_types::{BlockPointerType, ObjCType, PrimitiveType, Render};
//!
//! let block = BlockPointerType::new(PrimitiveType::Int32, vec![]);
//! assert_eq!(block.render_with("f"), "int32_t (^f)(void)");
//!
//! let ptr = ObjCType::nullable_pointer(PrimitiveType::Int32);
//! assert_eq!(ptr.render_with("p"), "int32_t * _Nullable p");
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - The node hierarchy ([`ObjCType`] and friends)
//! - [`render`] - The [`Render`] trait and the suffix combiner
//! - [`ValueType`] - Runtime type encodings for scalars
//! - [`TypeParameterNamer`] - Name lookup for type parameters

mod encoding;
mod error;
mod namer;
mod nullability;
pub mod render;
pub mod types;

pub use encoding::ValueType;
pub use error::Error;
pub use namer::{TypeParameter, TypeParameterNamer};
pub use render::{Render, with_attrs_and_name};
pub use types::{
    BlockPointerType, ClassType, GenericParam, NonNullReferenceType, NullableReferenceType,
    ObjCType, PointerType, PrimitiveType, ReferenceType,
};
