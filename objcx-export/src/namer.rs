//! Scoped naming of type parameters.

use std::cell::RefCell;

use indexmap::IndexMap;
use objcx_types::{TypeParameter, TypeParameterNamer};

use crate::config::NamerConfig;

/// Words a type parameter can never be called in an Objective-C header.
pub const OBJC_RESERVED_WORDS: &[&str] = &[
    // C
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Bool", "_Complex", "_Imaginary",
    // Objective-C
    "id", "Class", "SEL", "IMP", "BOOL", "YES", "NO", "nil", "Nil", "NULL", "self", "super",
    "instancetype", "_cmd", "in", "out", "inout", "bycopy", "byref", "oneway", "__kindof",
    "_Nullable", "_Nonnull", "_Null_unspecified",
];

/// Assigns each type parameter a stable Objective-C name.
///
/// A parameter keeps its declared name unless that name is reserved or already
/// given to another parameter of the same owner; in that case the mangling
/// suffix is appended until it is free. The first answer for a parameter is
/// remembered and returned on every later call.
///
/// Call [`declare_parameters`](Self::declare_parameters) with an owner's full
/// parameter list before rendering its declarations: clashes are then resolved
/// in index order, so the names do not depend on which use is rendered first.
#[derive(Debug, Default)]
pub struct ScopedTypeParameterNamer {
    config: NamerConfig,
    assigned: RefCell<IndexMap<TypeParameter, String>>,
}

impl ScopedTypeParameterNamer {
    pub fn new(config: NamerConfig) -> Self {
        Self {
            config,
            assigned: RefCell::new(IndexMap::new()),
        }
    }

    /// Assign names to the type parameters of one or more owners.
    ///
    /// Parameters are named in `(owner, index)` order, so lower indices keep
    /// their declared names on a clash. Parameters that already have a name
    /// keep it.
    pub fn declare_parameters(&self, parameters: &[TypeParameter]) {
        let mut ordered: Vec<_> = parameters.iter().collect();
        ordered.sort_by(|a, b| (a.owner(), a.index()).cmp(&(b.owner(), b.index())));

        let mut assigned = self.assigned.borrow_mut();
        for parameter in ordered {
            if !assigned.contains_key(parameter) {
                self.assign(&mut assigned, parameter);
            }
        }
    }

    /// Names handed out so far, in assignment order.
    pub fn assigned_names(&self) -> Vec<(TypeParameter, String)> {
        self.assigned
            .borrow()
            .iter()
            .map(|(parameter, name)| (parameter.clone(), name.clone()))
            .collect()
    }

    /// Check if a name is reserved by the language or the configuration.
    pub fn is_reserved(&self, name: &str) -> bool {
        OBJC_RESERVED_WORDS.contains(&name)
            || self.config.reserved_names().iter().any(|r| r == name)
    }

    fn is_taken(
        assigned: &IndexMap<TypeParameter, String>,
        parameter: &TypeParameter,
        candidate: &str,
    ) -> bool {
        assigned
            .iter()
            .any(|(other, name)| other.owner() == parameter.owner() && name == candidate)
    }

    fn assign(
        &self,
        assigned: &mut IndexMap<TypeParameter, String>,
        parameter: &TypeParameter,
    ) -> String {
        let mut candidate = parameter.name().to_string();
        while self.is_reserved(&candidate) || Self::is_taken(assigned, parameter, &candidate) {
            candidate.push_str(self.config.mangling_suffix());
        }

        if candidate != parameter.name() {
            tracing::debug!(
                owner = parameter.owner(),
                declared = parameter.name(),
                assigned = %candidate,
                "mangled type parameter name"
            );
        }

        assigned.insert(parameter.clone(), candidate.clone());
        candidate
    }
}

impl TypeParameterNamer for ScopedTypeParameterNamer {
    fn type_parameter_name(&self, parameter: &TypeParameter) -> String {
        if let Some(name) = self.assigned.borrow().get(parameter).cloned() {
            return name;
        }
        self.assign(&mut self.assigned.borrow_mut(), parameter)
    }
}
