mod span;
mod source;

pub use span::Span;
pub use source::{SourceFile, SourceId, SourceMap};
