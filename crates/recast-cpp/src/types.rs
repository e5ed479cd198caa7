//! The Java → C++ type translation table.

use crate::context::Context;
use crate::error::Result;
use recast_ast::{PrimitiveType, TypeKind, TypeRef};

/// Translate a type reference to its C++ spelling.
///
/// The table is deterministic and total apart from one documented gap:
/// Java `long` has no safe default 64-bit mapping and fails until the
/// profile names one. Reference types are copied through verbatim.
pub fn translate_type(ty: &TypeRef, ctx: &Context) -> Result<String> {
    match &ty.kind {
        TypeKind::Void => Ok("void".to_string()),
        TypeKind::Named(name) => Ok(name.to_string()),
        TypeKind::Primitive(primitive) => translate_primitive(*primitive, ctx),
        TypeKind::Unsupported(kind) => {
            Err(ctx.unsupported(format!("{kind} isn't translated yet")))
        }
    }
}

fn translate_primitive(primitive: PrimitiveType, ctx: &Context) -> Result<String> {
    let token = match primitive {
        PrimitiveType::Boolean => "bool",
        PrimitiveType::Byte => "char",
        PrimitiveType::Short => "short",
        PrimitiveType::Char => "char16_t",
        PrimitiveType::Int => "int",
        PrimitiveType::Float => "float",
        PrimitiveType::Double => "double",
        PrimitiveType::Long => {
            // A configuration gap, not a translation bug: report it.
            return match &ctx.profile().int64_type {
                Some(target) => Ok(target.clone()),
                None => Err(ctx
                    .type_not_supported(
                        "long type isn't supported by default; \
                         need to specify target C++ type for 64 bit int",
                    )
                    .with_help("set int64_type in the output profile, e.g. \"int64_t\"")),
            };
        }
    };
    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::OutputKind;
    use crate::error::ErrorKind;
    use crate::profile::CppProfile;
    use recast_common::{SourceFile, Span};

    fn translate(kind: TypeKind, profile: &CppProfile) -> Result<String> {
        let file = SourceFile::anonymous("");
        let ctx = Context::new(&file, 4, profile, OutputKind::Source);
        translate_type(&TypeRef::new(kind, Span::new(0, 0)), &ctx)
    }

    #[test]
    fn test_primitive_table() {
        let profile = CppProfile::default();
        let cases = [
            (PrimitiveType::Boolean, "bool"),
            (PrimitiveType::Byte, "char"),
            (PrimitiveType::Short, "short"),
            (PrimitiveType::Char, "char16_t"),
            (PrimitiveType::Int, "int"),
            (PrimitiveType::Float, "float"),
            (PrimitiveType::Double, "double"),
        ];
        for (primitive, expected) in cases {
            let got = translate(TypeKind::Primitive(primitive), &profile).unwrap();
            assert_eq!(got, expected, "{}", primitive.keyword());
        }
    }

    #[test]
    fn test_long_rejected_without_mapping() {
        let profile = CppProfile::default();
        let err = translate(TypeKind::Primitive(PrimitiveType::Long), &profile).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeNotSupported);
    }

    #[test]
    fn test_long_with_configured_mapping() {
        let profile = CppProfile {
            int64_type: Some("int64_t".to_string()),
            ..CppProfile::default()
        };
        let got = translate(TypeKind::Primitive(PrimitiveType::Long), &profile).unwrap();
        assert_eq!(got, "int64_t");
    }

    #[test]
    fn test_named_type_passes_through() {
        let profile = CppProfile::default();
        let got = translate(TypeKind::Named("Object".into()), &profile).unwrap();
        assert_eq!(got, "Object");
    }
}
