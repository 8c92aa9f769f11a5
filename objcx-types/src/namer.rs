//! Name lookup for type parameters.

/// Identity of a type parameter declared by a host class.
///
/// Two values denote the same parameter when they share the owner and the
/// position; the declared name is only the starting point for naming.
#[derive(Debug, Clone)]
pub struct TypeParameter {
    owner: String,
    index: usize,
    name: String,
}

impl TypeParameter {
    /// Create a type parameter identity.
    ///
    /// `owner` is the fully qualified name of the declaring class and `index`
    /// the zero-based position in its parameter list.
    pub fn new(owner: impl Into<String>, index: usize, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            index,
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The name the parameter was declared with.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for TypeParameter {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for TypeParameter {}

impl std::hash::Hash for TypeParameter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.index.hash(state);
    }
}

/// Supplies the Objective-C name of a type parameter.
///
/// Implementations must return the same name for the same parameter on every
/// call, and distinct parameters of one declaration must never share a name.
pub trait TypeParameterNamer {
    fn type_parameter_name(&self, parameter: &TypeParameter) -> String;
}

impl<F> TypeParameterNamer for F
where
    F: Fn(&TypeParameter) -> String,
{
    fn type_parameter_name(&self, parameter: &TypeParameter) -> String {
        self(parameter)
    }
}
