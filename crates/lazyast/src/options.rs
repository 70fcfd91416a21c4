/// Knobs for a decode session.
///
/// # Examples
///
/// ```rust
/// use lazyast::DecodeOptions;
///
/// let options = DecodeOptions {
///     short_string_threshold: 16,
///     ..Default::default()
/// };
/// assert!(options.ascii_fast_path);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Slice strings straight out of the source text when the source is
    /// ASCII and the string pointer falls inside it.
    ///
    /// Turning this off forces every string through the byte decoders, which
    /// is only useful for testing that both paths agree.
    ///
    /// # Default
    ///
    /// `true`
    pub ascii_fast_path: bool,

    /// Strings longer than this many bytes are handed to the bulk UTF-8
    /// decoder; shorter ones are decoded byte by byte until the first
    /// non-ASCII byte.
    ///
    /// # Default
    ///
    /// `50`
    pub short_string_threshold: usize,

    /// Deepest node nesting the visitor and [`to_plain`](crate::View::to_plain)
    /// will follow before giving up with
    /// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded).
    ///
    /// A buffer whose pointers form a cycle would otherwise recurse until
    /// the stack runs out. Both walks recurse once per level, so raising this
    /// needs a thread with a stack to match.
    ///
    /// # Default
    ///
    /// `256`
    pub max_depth: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            ascii_fast_path: true,
            short_string_threshold: 50,
            max_depth: 256,
        }
    }
}
