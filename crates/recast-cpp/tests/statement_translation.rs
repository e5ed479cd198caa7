//! Statement-granularity translation fixtures.
//!
//! Each snippet is wrapped in a class/method shell, parsed, and the first
//! statement of the method body is translated on its own. The wrapper
//! puts the statement on line 2, column 1 of the parsed source.

use recast_common::SourceFile;
use recast_cpp::{translate_statement, CppProfile, ErrorKind, Result};

fn translate_with(java_stmt: &str, source_tab_stop: u32, profile: &CppProfile) -> Result<String> {
    let java = format!("class TestClass{{ void testMethod() {{\n{java_stmt}\n}} }}");
    let source = SourceFile::anonymous(java);
    let unit = recast_java::parse_source(&source).expect("parse");
    let block = unit.first_method_block().expect("method block");
    let stmt = block.statements.first().expect("statement");
    translate_statement(stmt, &source, source_tab_stop, profile)
}

#[track_caller]
fn check(java: &str, expected: &str, source_tab_stop: u32, profile: &CppProfile) {
    let output = translate_with(java, source_tab_stop, profile).unwrap();
    assert_eq!(output, expected, "input: {java:?}");
}

/// Most statements should come out unchanged.
#[track_caller]
fn check_same(java: &str, source_tab_stop: u32, profile: &CppProfile) {
    check(java, java, source_tab_stop, profile);
}

#[test]
fn return_statements_spaces_profile() {
    let profile = CppProfile::spaces();
    check_same("return 3;", 4, &profile);
    check("return\r\n\t3;", "return\r\n    3;", 4, &profile);
    check("return\t3\t\t;", "return  3       ;", 4, &profile);
}

#[test]
fn return_statements_matching_tab_stops() {
    let profile = CppProfile::default();
    check_same("return 3;", 4, &profile);
    check_same("return\r\n\t3;", 4, &profile);
    check("return\r\n   \t3;", "return\r\n\t3;", 4, &profile);
    check("return\r\n  \t  \t 3;", "return\r\n\t\t 3;", 4, &profile);
    check("return\t3\t\t;", "return  3       ;", 4, &profile);
}

#[test]
fn if_statements() {
    let profile = CppProfile::default();
    check_same("if (false) return 3;", 4, &profile);
    check_same("if (true) return 3; else return 7;", 4, &profile);
    check_same("if ( true ) { return 3 ; } else { return 7 ; }", 4, &profile);
    check_same(
        "if ( true )\r\n\t\t{ return 3 ; }\r\n\t\telse { return 7 ; }",
        4,
        &profile,
    );
}

#[test]
fn while_statements() {
    let profile = CppProfile::default();
    check_same("while (true) { x = x + 1; }", 4, &profile);
}

#[test]
fn variable_declarations() {
    let profile = CppProfile::default();
    check_same("int i = 3;", 4, &profile);
    check(
        "boolean /* comment 1 */ b /* comment 2 */ ;",
        "bool /* comment 1 */ b /* comment 2 */ ;",
        4,
        &profile,
    );
    check("char c = 25 , d = 25 ;", "char16_t c = 25 , d = 25 ;", 4, &profile);
    check("byte foo;", "char foo;", 4, &profile);
    check_same("short foo;", 4, &profile);
    check("char foo;", "char16_t foo;", 4, &profile);
    check_same("int foo;", 4, &profile);
    check_same("float foo;", 4, &profile);
    check_same("double foo;", 4, &profile);
    check("boolean foo;", "bool foo;", 4, &profile);
}

#[test]
fn long_requires_configured_target_type() {
    let profile = CppProfile::default();
    let err = translate_with("long foo;", 4, &profile).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeNotSupported: <unknown-file> (line 2, col 1): \
         long type isn't supported by default; need to specify target C++ type for 64 bit int"
    );

    // idempotent retry once the profile names a 64-bit type
    let profile = CppProfile {
        int64_type: Some("int64_t".to_string()),
        ..CppProfile::default()
    };
    check("long foo;", "int64_t foo;", 4, &profile);
}

#[test]
fn null_becomes_nullptr() {
    let profile = CppProfile::default();
    check("Object o = null;", "Object o = nullptr;", 4, &profile);
    check("o = null;", "o = nullptr;", 4, &profile);
}

#[test]
fn expression_statements() {
    let profile = CppProfile::default();
    check_same("foo(1, 2);", 4, &profile);
    check_same("x.update(y[2]);", 4, &profile);
    check_same("i++;", 4, &profile);
    check_same("x = (a + b) * 2;", 4, &profile);
}

#[test]
fn block_translation() {
    let profile = CppProfile::default();
    check(
        "{ int i = 3; boolean b = false; if ( b ) \r\n return 5; else return 6; }",
        "{ int i = 3; bool b = false; if ( b )\r\n return 5; else return 6; }",
        4,
        &profile,
    );
}

#[test]
fn block_matches_statements_translated_alone() {
    let profile = CppProfile::default();
    check(
        "{ int i = 3; boolean b = false; }",
        "{ int i = 3; bool b = false; }",
        4,
        &profile,
    );
    check("int i = 3;", "int i = 3;", 4, &profile);
    check("boolean b = false;", "bool b = false;", 4, &profile);
}

#[test]
fn fail_fast_on_unsupported_statement() {
    let profile = CppProfile::default();
    let err = translate_with("{ int i = 3; synchronized (obj) { } return 1; }", 4, &profile)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedConstruct);
    assert!(err.message.contains("synchronized"), "message: {}", err.message);
    // positioned at the offending statement, not the block
    assert_eq!((err.line, err.col), (2, 14));
}

#[test]
fn unsigned_shift_is_rejected() {
    let profile = CppProfile::default();
    let err = translate_with("int x = a >>> 2;", 4, &profile).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnsupportedConstruct);
    assert!(err.message.contains(">>>"), "message: {}", err.message);
}
