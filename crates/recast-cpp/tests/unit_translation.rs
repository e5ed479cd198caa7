//! Compilation-unit translation fixtures: classes, fields, methods, and
//! header/source output modes.

use recast_common::SourceFile;
use recast_cpp::{translate_unit, CppProfile, ErrorKind, OutputKind, Result};

fn translate(java: &str, output_kind: OutputKind, profile: &CppProfile) -> Result<String> {
    let source = SourceFile::anonymous(java);
    let unit = recast_java::parse_source(&source).expect("parse");
    translate_unit(&unit, &source, 4, profile, output_kind)
}

#[test]
fn class_gains_trailing_semicolon() {
    let profile = CppProfile::spaces();
    let output = translate("class A { }\n", OutputKind::Source, &profile).unwrap();
    assert_eq!(output, "class A { };\n");
}

#[test]
fn class_with_fields_and_method() {
    let profile = CppProfile::spaces();
    let java = "class Point {\n    int x;\n    boolean flag;\n    int getX() { return x; }\n}\n";
    let expected =
        "class Point {\n    int x;\n    bool flag;\n    int getX() { return x; }\n};\n";
    let output = translate(java, OutputKind::Source, &profile).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn header_mode_emits_prototypes() {
    let profile = CppProfile::spaces();
    let java = "class Point {\n    int x;\n    int getX() { return x; }\n}\n";
    let expected = "class Point {\n    int x;\n    int getX();\n};\n";
    let output = translate(java, OutputKind::Header, &profile).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn parameter_types_are_translated() {
    let profile = CppProfile::spaces();
    let java = "class A {\n    void set(boolean on, char c) { flag = on; }\n}\n";
    let expected = "class A {\n    void set(bool on, char16_t c) { flag = on; }\n};\n";
    let output = translate(java, OutputKind::Source, &profile).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn modifiers_are_consumed() {
    let profile = CppProfile::spaces();
    let java = "public class Point {\n    private int x;\n}\n";
    let expected = "class Point {\n    int x;\n};\n";
    let output = translate(java, OutputKind::Source, &profile).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn package_and_imports_are_consumed() {
    let profile = CppProfile::spaces();
    let java = "package demo;\nimport java.util.List;\nclass A { }\n";
    let output = translate(java, OutputKind::Source, &profile).unwrap();
    assert_eq!(output, "class A { };\n");
}

#[test]
fn leading_comment_is_preserved() {
    let profile = CppProfile::spaces();
    let java = "// translated from Java\nclass A { }\n";
    let output = translate(java, OutputKind::Source, &profile).unwrap();
    assert_eq!(output, "// translated from Java\nclass A { };\n");
}

#[test]
fn field_of_long_type_fails_with_position() {
    let profile = CppProfile::default();
    let err = translate("class A { long x; }\n", OutputKind::Source, &profile).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeNotSupported);
    assert_eq!((err.line, err.col), (1, 11));
}

#[test]
fn constructor_is_reported_unsupported() {
    let profile = CppProfile::default();
    let java = "class A {\n    A() { }\n}\n";
    let err = translate(java, OutputKind::Source, &profile).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedConstruct);
    assert_eq!((err.line, err.col), (2, 5));
}
