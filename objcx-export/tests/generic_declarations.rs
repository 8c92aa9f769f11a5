//! Rendering declarations that use type parameters named by the scoped namer.

use std::{io::Write, rc::Rc};

use objcx_export::{Error, ScopedTypeParameterNamer, parse_file, parse_str};
use objcx_types::{NonNullReferenceType, ObjCType, Render, TypeParameter, TypeParameterNamer};

fn namer_from(config: &str) -> Rc<ScopedTypeParameterNamer> {
    let config = parse_str(config).expect("Failed to parse config");
    Rc::new(ScopedTypeParameterNamer::new(config.type_parameters))
}

#[test]
fn test_generic_class_with_renamed_parameters() {
    let namer = namer_from("");
    let dyn_namer: Rc<dyn TypeParameterNamer> = namer.clone();

    let key =
        NonNullReferenceType::generic_param(TypeParameter::new("Map", 0, "id"), dyn_namer.clone());
    let value =
        NonNullReferenceType::generic_param(TypeParameter::new("Map", 1, "id_"), dyn_namer);

    let map = NonNullReferenceType::generic_class("Map", vec![key, value]);
    insta::assert_snapshot!(map.render_with("entries"), @"Map<id_, id__> *entries");
}

#[test]
fn test_distinct_parameters_never_share_a_name() {
    let namer = namer_from("");
    let dyn_namer: Rc<dyn TypeParameterNamer> = namer.clone();

    // Both declared as T; the one rendered second gets mangled.
    let first =
        NonNullReferenceType::generic_param(TypeParameter::new("Pair", 0, "T"), dyn_namer.clone());
    let second =
        NonNullReferenceType::generic_param(TypeParameter::new("Pair", 1, "T"), dyn_namer);

    let pair = NonNullReferenceType::generic_class("Pair", vec![first, second]);
    insta::assert_snapshot!(pair.render(), @"Pair<T, T_> *");

    let names: Vec<_> = namer.assigned_names().into_iter().map(|(_, n)| n).collect();
    assert_eq!(names, ["T", "T_"]);
}

#[test]
fn test_configured_suffix_and_reserved_names() {
    let namer = namer_from(
        r#"
        [type-parameters]
        mangling-suffix = "Type"
        reserved-names = ["Element"]
        "#,
    );
    let dyn_namer: Rc<dyn TypeParameterNamer> = namer;

    let element = NonNullReferenceType::generic_param(
        TypeParameter::new("List", 0, "Element"),
        dyn_namer,
    );
    let getter = NonNullReferenceType::block(
        ObjCType::from(element.into_nullable()),
        vec![NonNullReferenceType::class("NSNumber").into()],
    );
    insta::assert_snapshot!(
        getter.render_with("elementAt"),
        @"ElementType _Nullable (^elementAt)(NSNumber *)"
    );
}

#[test]
fn test_parse_file_reads_configuration() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "[type-parameters]\nmangling-suffix = \"__\"").expect("Failed to write config");

    let config = parse_file(file.path()).expect("Failed to parse config");
    assert_eq!(config.type_parameters.mangling_suffix(), "__");
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let err = parse_file(dir.path().join("objcx.toml")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_declared_parameters_ignore_render_order() {
    let namer = namer_from("");
    let first = TypeParameter::new("Pair", 0, "T");
    let second = TypeParameter::new("Pair", 1, "T");
    namer.declare_parameters(&[first.clone(), second.clone()]);

    let dyn_namer: Rc<dyn TypeParameterNamer> = namer;
    let swapped = NonNullReferenceType::generic_class(
        "Pair",
        vec![
            NonNullReferenceType::generic_param(second, dyn_namer.clone()),
            NonNullReferenceType::generic_param(first, dyn_namer),
        ],
    );
    insta::assert_snapshot!(swapped.render(), @"Pair<T_, T> *");
}
