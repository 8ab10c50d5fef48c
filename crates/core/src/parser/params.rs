//! Parser limits.

/// Parameters for parsing.
///
/// Both limits turn pathological input into a fatal error instead of
/// unbounded recursion or work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of arrays and dictionaries inside one value.
    pub max_depth: usize,

    /// Maximum input size in bytes. 0 means no limit.
    pub max_input_len: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            max_input_len: 0,
        }
    }
}
