/// Formatting rules and type-size defaults for emitted C++.
///
/// Immutable for the duration of a translation; safe to share across
/// translations of different compilation units.
#[derive(Debug, Clone)]
pub struct CppProfile {
    /// Destination tab stop. `Some(n)` re-expands leading indentation as
    /// tabs of width `n`; `None` keeps indentation as spaces.
    pub tab_stop: Option<u32>,

    /// Target type for Java `long`. There is no safe default for a 64-bit
    /// integer, so translation of `long` fails until this is set
    /// (e.g. to `int64_t`).
    pub int64_type: Option<String>,
}

impl Default for CppProfile {
    fn default() -> Self {
        Self {
            tab_stop: Some(4),
            int64_type: None,
        }
    }
}

impl CppProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A profile that never emits tabs.
    pub fn spaces() -> Self {
        Self {
            tab_stop: None,
            ..Self::default()
        }
    }
}
