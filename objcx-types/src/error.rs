use miette::Diagnostic;
use thiserror::Error;

/// Errors raised when a type node of the wrong kind is supplied where the
/// model only admits references.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error("'{rendered}' is not an object reference")]
    #[diagnostic(
        code(objcx::not_reference),
        help("block parameters must be class, protocol, id, block or type parameter references")
    )]
    NotReference { rendered: String },

    #[error("'{rendered}' is not a non-null object reference")]
    #[diagnostic(
        code(objcx::not_non_null_reference),
        help("generic type arguments cannot be nullable, primitive, pointer or raw types")
    )]
    NotNonNullReference { rendered: String },
}
