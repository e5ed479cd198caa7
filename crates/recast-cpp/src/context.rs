use crate::error::{ErrorKind, TranslateError};
use crate::profile::CppProfile;
use crate::transcribe;
use crate::writer::TargetWriter;
use recast_common::SourceFile;

/// Which face of a declaration is being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Definitions with bodies (.cpp).
    Source,
    /// Declarations/prototypes (.h).
    Header,
}

/// Per-translation mutable state, threaded through every writer call.
///
/// Owns the read cursor into the original source and the target writer;
/// borrows the source file and the output profile. One Context per
/// translation call, never shared.
pub struct Context<'a> {
    pub(crate) source: &'a SourceFile,
    pub(crate) profile: &'a CppProfile,
    pub(crate) writer: TargetWriter,
    pub(crate) position: u32,
    pub(crate) source_tab_stop: u32,
    output_kind: OutputKind,
}

impl<'a> Context<'a> {
    pub fn new(
        source: &'a SourceFile,
        source_tab_stop: u32,
        profile: &'a CppProfile,
        output_kind: OutputKind,
    ) -> Self {
        Self {
            source,
            profile,
            writer: TargetWriter::new(profile.tab_stop),
            position: 0,
            source_tab_stop,
            output_kind,
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    /// Position the read cursor at a node's start offset. Entry points
    /// call this once before dispatching.
    pub fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    pub fn source(&self) -> &SourceFile {
        self.source
    }

    pub fn profile(&self) -> &CppProfile {
        self.profile
    }

    pub fn output_kind(&self) -> OutputKind {
        self.output_kind
    }

    /// Emit replacement text through the target writer.
    pub fn write(&mut self, s: &str) {
        self.writer.write_str(s);
    }

    /// Transcribe source text from the cursor up to `upto`, verbatim
    /// except for tab re-expansion, advancing the cursor.
    pub fn copy_to(&mut self, upto: u32) {
        transcribe::transcribe(self, upto);
    }

    /// Advance the cursor without emitting (the source token was replaced).
    pub fn skip_to(&mut self, upto: u32) {
        debug_assert!(
            upto >= self.position,
            "read cursor would move backward: {} -> {}",
            self.position,
            upto
        );
        self.position = upto;
    }

    /// Advance the cursor past whitespace and comments without emitting.
    pub fn skip_space_and_comments(&mut self) {
        transcribe::skip_space_and_comments(self);
    }

    /// If the cursor sits on a line break, consume it without emitting.
    pub fn skip_newline(&mut self) {
        let bytes = self.source.content.as_bytes();
        let mut pos = self.position as usize;
        if bytes.get(pos) == Some(&b'\r') {
            pos += 1;
        }
        if bytes.get(pos) == Some(&b'\n') {
            pos += 1;
        }
        self.position = pos as u32;
    }

    /// Consume the context and return the accumulated output.
    pub fn finish(self) -> String {
        self.writer.finish()
    }

    /// Build an error of the given kind at the current cursor position.
    pub fn error(&self, kind: ErrorKind, message: impl Into<String>) -> TranslateError {
        let (line, col) = self.source.line_col(self.position);
        TranslateError::new(kind, self.source.name(), line + 1, col + 1, message)
    }

    pub fn unsupported(&self, message: impl Into<String>) -> TranslateError {
        self.error(ErrorKind::UnsupportedConstruct, message)
    }

    pub fn type_not_supported(&self, message: impl Into<String>) -> TranslateError {
        self.error(ErrorKind::TypeNotSupported, message)
    }
}
