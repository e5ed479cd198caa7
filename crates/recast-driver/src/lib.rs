mod config;
mod error;

pub use config::TranslateConfig;
pub use error::{ConfigError, ConfigResult};

use miette::Result;
use recast_ast::CompilationUnit;
use recast_common::{SourceFile, SourceMap};
use recast_cpp::{CppProfile, OutputKind};
use std::path::Path;

/// Translation driver that orchestrates the parse + translate pipeline.
pub struct Driver {
    source_map: SourceMap,
    profile: CppProfile,
    source_tab_stop: u32,
}

impl Driver {
    pub fn new() -> Self {
        Self::with_config(&TranslateConfig::default())
    }

    pub fn with_config(config: &TranslateConfig) -> Self {
        Self {
            source_map: SourceMap::new(),
            profile: config.profile(),
            source_tab_stop: config.source_tab_stop,
        }
    }

    /// Load a Java source file into the source map.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SourceFile> {
        let path = path.as_ref();

        let is_java = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "java");
        if !is_java {
            return Err(miette::miette!("Not a Java source file: {}", path.display()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e))?;

        let id = self.source_map.add_file(path, content)?;
        self.source_map
            .get(id)
            .ok_or_else(|| miette::miette!("Source file not found"))
    }

    /// Parse a Java source file into the translation AST.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<CompilationUnit> {
        let source = self.load_file(path)?;
        recast_java::parse_source(&source)
    }

    /// Translate a Java source file to C++ text.
    pub fn translate_file(
        &self,
        path: impl AsRef<Path>,
        output_kind: OutputKind,
    ) -> Result<String> {
        let source = self.load_file(path)?;
        let unit = recast_java::parse_source(&source)?;
        let output = recast_cpp::translate_unit(
            &unit,
            &source,
            self.source_tab_stop,
            &self.profile,
            output_kind,
        )?;
        Ok(output)
    }

    pub fn profile(&self) -> &CppProfile {
        &self.profile
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_translate_java_file() {
        let mut file = NamedTempFile::with_suffix(".java").unwrap();
        write!(file, "class A {{ boolean flag; }}").unwrap();

        let driver = Driver::new();
        let output = driver.translate_file(file.path(), OutputKind::Source).unwrap();

        assert_eq!(output, "class A { bool flag; };");
    }

    #[test]
    fn test_header_output() {
        let mut file = NamedTempFile::with_suffix(".java").unwrap();
        write!(file, "class A {{ int get() {{ return 1; }} }}").unwrap();

        let driver = Driver::new();
        let output = driver.translate_file(file.path(), OutputKind::Header).unwrap();

        assert_eq!(output, "class A { int get(); };");
    }

    #[test]
    fn test_error_carries_file_name() {
        let mut file = NamedTempFile::with_suffix(".java").unwrap();
        write!(file, "class A {{ long x; }}").unwrap();

        let driver = Driver::new();
        let err = driver
            .translate_file(file.path(), OutputKind::Source)
            .unwrap_err();

        let rendered = err.to_string();
        assert!(rendered.contains("TypeNotSupported"), "{rendered}");
        assert!(
            rendered.contains(&file.path().display().to_string()),
            "{rendered}"
        );
    }

    #[test]
    fn test_configured_int64_type() {
        let mut file = NamedTempFile::with_suffix(".java").unwrap();
        write!(file, "class A {{ long x; }}").unwrap();

        let config = TranslateConfig {
            int64_type: Some("int64_t".to_string()),
            ..TranslateConfig::default()
        };
        let driver = Driver::with_config(&config);
        let output = driver.translate_file(file.path(), OutputKind::Source).unwrap();

        assert_eq!(output, "class A { int64_t x; };");
    }

    #[test]
    fn test_rejects_non_java_extension() {
        let file = NamedTempFile::with_suffix(".cpp").unwrap();
        let driver = Driver::new();
        assert!(driver.load_file(file.path()).is_err());
    }
}
