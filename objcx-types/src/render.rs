//! Declarator rendering.
//!
//! C declarators are written inside-out: stars, block carets and nullability
//! attributes wrap around the identifier instead of following the type. Every
//! node therefore renders with the suffix that still has to be placed (the
//! attributes plus the eventual name) and hands a grown suffix to its inner
//! node, so arbitrary nesting needs no special cases.

use std::fmt;

use crate::types::{
    BlockPointerType, ClassType, GenericParam, NonNullReferenceType, NullableReferenceType,
    ObjCType, PointerType, PrimitiveType, ReferenceType,
};

const NULLABLE: &str = " _Nullable";

/// Join a type spelling and a pending suffix with exactly one space.
///
/// An empty suffix leaves `text` untouched; leading whitespace of the suffix
/// is dropped so attributes never produce a double space.
pub fn with_attrs_and_name(text: &str, attrs_and_name: &str) -> String {
    if attrs_and_name.is_empty() {
        text.to_string()
    } else {
        format!("{} {}", text, attrs_and_name.trim_start())
    }
}

/// Trait for nodes that render to declarator text.
pub trait Render {
    /// Render with `attrs_and_name` placed at the position this node requires.
    fn render_with(&self, attrs_and_name: &str) -> String;

    /// Render as a bare type, e.g. for a cast or a generic argument.
    fn render(&self) -> String {
        self.render_with("")
    }
}

impl Render for ObjCType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        match self {
            Self::Raw(text) => with_attrs_and_name(text, attrs_and_name),
            Self::Reference(reference) => reference.render_with(attrs_and_name),
            Self::Primitive(primitive) => primitive.render_with(attrs_and_name),
            Self::Pointer(pointer) => pointer.render_with(attrs_and_name),
            Self::Void => with_attrs_and_name("void", attrs_and_name),
        }
    }
}

impl Render for ReferenceType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        match self {
            Self::NonNull(reference) => reference.render_with(attrs_and_name),
            Self::Nullable(reference) => reference.render_with(attrs_and_name),
        }
    }
}

impl Render for NullableReferenceType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        self.non_null_type()
            .render_with(&with_attrs_and_name(NULLABLE, attrs_and_name))
    }
}

impl Render for NonNullReferenceType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        match self {
            Self::Class(class) => class.render_with(attrs_and_name),
            Self::GenericParam(param) => param.render_with(attrs_and_name),
            Self::Protocol(name) => with_attrs_and_name(&format!("id<{}>", name), attrs_and_name),
            Self::Id => with_attrs_and_name("id", attrs_and_name),
            Self::InstanceType => with_attrs_and_name("instancetype", attrs_and_name),
            Self::BlockPointer(block) => block.render_with(attrs_and_name),
            Self::MetaClass => with_attrs_and_name("Class", attrs_and_name),
        }
    }
}

impl Render for ClassType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        let mut out = String::from(self.name());
        if !self.type_arguments().is_empty() {
            out.push('<');
            out.push_str(&join_rendered(self.type_arguments()));
            out.push('>');
        }
        // The star belongs to the class; the name hugs it (`NSString *name`).
        out.push_str(" *");
        out.push_str(attrs_and_name);
        out
    }
}

impl Render for GenericParam {
    fn render_with(&self, attrs_and_name: &str) -> String {
        with_attrs_and_name(&self.name(), attrs_and_name)
    }
}

impl Render for BlockPointerType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        let parameters = if self.parameter_types().is_empty() {
            "void".to_string()
        } else {
            join_rendered(self.parameter_types())
        };
        self.return_type()
            .render_with(&format!("(^{})({})", attrs_and_name, parameters))
    }
}

impl Render for PointerType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        let suffix = if self.is_nullable() {
            format!("*{}", with_attrs_and_name(NULLABLE, attrs_and_name))
        } else {
            format!("*{}", attrs_and_name)
        };
        self.pointee().render_with(&suffix)
    }
}

impl Render for PrimitiveType {
    fn render_with(&self, attrs_and_name: &str) -> String {
        with_attrs_and_name(self.c_name(), attrs_and_name)
    }
}

fn join_rendered<T: Render>(items: &[T]) -> String {
    items
        .iter()
        .map(Render::render)
        .collect::<Vec<_>>()
        .join(", ")
}

macro_rules! impl_display_via_render {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.render())
                }
            }
        )*
    };
}

impl_display_via_render!(
    ObjCType,
    ReferenceType,
    NonNullReferenceType,
    NullableReferenceType,
    ClassType,
    BlockPointerType,
    PointerType,
    PrimitiveType,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn int32() -> ObjCType {
        PrimitiveType::Int32.into()
    }

    #[test]
    fn test_with_attrs_and_name_empty_suffix() {
        assert_eq!(with_attrs_and_name("Foo", ""), "Foo");
    }

    #[test]
    fn test_with_attrs_and_name_trims_leading_space() {
        assert_eq!(with_attrs_and_name("Foo", " bar"), "Foo bar");
        assert_eq!(with_attrs_and_name("Foo", "bar"), "Foo bar");
    }

    #[test]
    fn test_singletons() {
        assert_eq!(NonNullReferenceType::Id.render(), "id");
        assert_eq!(NonNullReferenceType::InstanceType.render(), "instancetype");
        assert_eq!(NonNullReferenceType::MetaClass.render(), "Class");
        assert_eq!(ObjCType::Void.render(), "void");
        assert_eq!(ObjCType::Void.render_with("x"), "void x");
    }

    #[test]
    fn test_raw_and_primitive() {
        assert_eq!(ObjCType::raw("SEL").render_with("selector"), "SEL selector");
        assert_eq!(int32().render_with("count"), "int32_t count");
        assert_eq!(
            ObjCType::from(PrimitiveType::UnsignedLong).render(),
            "unsigned long"
        );
    }

    #[test]
    fn test_protocol() {
        let protocol = NonNullReferenceType::protocol("NSCopying");
        assert_eq!(protocol.render(), "id<NSCopying>");
        assert_eq!(protocol.render_with("value"), "id<NSCopying> value");
    }

    #[test]
    fn test_class_without_arguments() {
        let class = NonNullReferenceType::class("Name");
        assert_eq!(class.render(), "Name *");
        assert_eq!(class.render_with("name"), "Name *name");
    }

    #[test]
    fn test_class_with_arguments() {
        let class = NonNullReferenceType::generic_class(
            "Name",
            vec![
                NonNullReferenceType::class("A"),
                NonNullReferenceType::protocol("B"),
            ],
        );
        assert_eq!(class.render(), "Name<A *, id<B>> *");
    }

    #[test]
    fn test_nullable_reference() {
        let nullable = NonNullReferenceType::class("NSString").into_nullable();
        assert_eq!(nullable.render(), "NSString * _Nullable");
        assert_eq!(nullable.render_with("title"), "NSString * _Nullable title");

        let id = NonNullReferenceType::Id.into_nullable();
        assert_eq!(id.render_with("value"), "id _Nullable value");
    }

    #[test]
    fn test_block_without_parameters() {
        let block = BlockPointerType::new(int32(), vec![]);
        assert_eq!(block.render_with("f"), "int32_t (^f)(void)");
        assert_eq!(block.render(), "int32_t (^)(void)");
    }

    #[test]
    fn test_block_with_parameters() {
        let block = BlockPointerType::new(
            ObjCType::Void,
            vec![
                NonNullReferenceType::class("NSString").into(),
                NonNullReferenceType::Id.into_nullable().into(),
            ],
        );
        assert_eq!(
            block.render_with("handler"),
            "void (^handler)(NSString *, id _Nullable)"
        );
    }

    #[test]
    fn test_pointer() {
        assert_eq!(ObjCType::pointer(int32()).render_with("p"), "int32_t *p");
        assert_eq!(
            ObjCType::nullable_pointer(int32()).render_with("p"),
            "int32_t * _Nullable p"
        );
        assert_eq!(ObjCType::pointer(ObjCType::Void).render(), "void *");
    }

    #[test]
    fn test_nullable_pointer_attribute_appears_once() {
        let rendered = ObjCType::nullable_pointer(int32()).render_with("p");
        assert_eq!(rendered.matches("_Nullable").count(), 1);
        let star = rendered.find('*').unwrap();
        let attr = rendered.find("_Nullable").unwrap();
        let name = rendered.rfind('p').unwrap();
        assert!(star < attr && attr < name);
    }

    #[test]
    fn test_display_matches_render() {
        let ty = ObjCType::from(NonNullReferenceType::class("NSArray").into_nullable());
        assert_eq!(ty.to_string(), ty.render());
    }
}
