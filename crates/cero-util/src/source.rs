//! Source model: a named, immutable piece of Cero source text.

use crate::location::CodeLocation;

/// Number of bits used to represent an offset into Cero source text. It is
/// 24 so that an offset and an 8-bit tag together fit into a 32-bit integer.
pub const SOURCE_OFFSET_BITS: u32 = 24;

/// Type used for byte offsets into source text.
pub type SourceOffset = u32;

/// Maximum allowed byte length of a Cero source input (circa 16 MiB). The
/// end-of-file token carries an offset equal to the source length, so the
/// length itself must still be representable in [`SOURCE_OFFSET_BITS`].
pub const MAX_SOURCE_LENGTH: SourceOffset = (1 << SOURCE_OFFSET_BITS) - 1;

/// Default tab width used for column computation.
pub const DEFAULT_TAB_SIZE: u8 = 4;

/// A source input for the compiler: its name, its text, and the tab size
/// used when computing columns. Created once and read-only thereafter.
///
/// # Examples
///
/// ```
/// use cero_util::Source;
///
/// let source = Source::new("main.ce", "main()\n{}\n");
/// assert_eq!(source.name(), "main.ce");
/// assert_eq!(source.len(), 10);
/// ```
pub struct Source {
    name: String,
    text: String,
    tab_size: u8,
}

impl Source {
    /// Creates a source from a name and its text, with the default tab size.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_tab_size(name, text, DEFAULT_TAB_SIZE)
    }

    /// Creates a source with an explicit tab size.
    pub fn with_tab_size(name: impl Into<String>, text: impl Into<String>, tab_size: u8) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            tab_size,
        }
    }

    /// The name of the source input, usually a file path.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The length of the source text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the source text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The tab size used for column computation.
    #[inline]
    pub fn tab_size(&self) -> u8 {
        self.tab_size
    }

    /// A location naming this source with zeroed line and column, used for
    /// diagnostics that concern the input as a whole.
    pub fn blank_location(&self) -> CodeLocation {
        CodeLocation::new(self.name.clone(), 0, 0)
    }

    /// Determines the line and column a byte offset corresponds to.
    ///
    /// Lines and columns are 1-based. A tab contributes [`Source::tab_size`]
    /// columns; every other byte contributes one, so columns count bytes,
    /// not code points. Offsets past the end of the text yield the final
    /// location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cero_util::Source;
    ///
    /// let source = Source::new("a.ce", "ab\ncd");
    /// let location = source.locate(4);
    /// assert_eq!((location.line, location.column), (2, 2));
    /// ```
    pub fn locate(&self, offset: SourceOffset) -> CodeLocation {
        let offset = (offset as usize).min(self.text.len());
        let range = &self.text.as_bytes()[..offset];

        let line = range.iter().filter(|&&b| b == b'\n').count() as u32 + 1;

        let line_start = match range.iter().rposition(|&b| b == b'\n') {
            Some(index) => index + 1,
            None => 0,
        };

        let mut column = 1u32;
        for &b in &range[line_start..] {
            if b == b'\t' {
                column += self.tab_size as u32;
            } else {
                column += 1;
            }
        }

        CodeLocation::new(self.name.clone(), line, column)
    }
}
