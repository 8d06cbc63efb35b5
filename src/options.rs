//! Parser configuration.

/// The default maximum nesting depth (e.g., `{{{}}}`) to prevent stack overflows.
///
/// The grammar itself puts no bound on nesting. Depth is limited only by
/// `ParserOptions::max_depth` and, past that, by the thread's stack, since
/// every table or bracket group is one level of recursion.
pub const DEFAULT_MAX_DEPTH: usize = 100;
/// The default maximum size of an input (10MB) to prevent DoS attacks.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// What `parse()` does with tokens left over after the first complete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingInput {
    /// Only the first value counts; anything after it is left unread.
    #[default]
    Ignore,
    /// Anything but end of input after the first value is a syntax error.
    Reject,
}

/// Limits and policies applied by the `Parser`.
///
/// ```
/// use rill_lua::{ParserOptions, TrailingInput};
///
/// let options = ParserOptions::default()
///     .with_max_depth(16)
///     .with_trailing_input(TrailingInput::Reject);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum nesting of tables and bracket groups.
    pub max_depth: usize,
    /// Maximum input size accepted by `parse_with_options`, in bytes.
    pub max_input_bytes: usize,
    /// Policy for tokens after the first complete value.
    pub trailing_input: TrailingInput,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            trailing_input: TrailingInput::Ignore,
        }
    }
}

impl ParserOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    pub fn with_trailing_input(mut self, trailing_input: TrailingInput) -> Self {
        self.trailing_input = trailing_input;
        self
    }

    /// Shorthand for `with_trailing_input(TrailingInput::Reject)`.
    pub fn strict(self) -> Self {
        self.with_trailing_input(TrailingInput::Reject)
    }
}
