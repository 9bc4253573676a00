/// The viewport - which rows of the hex dump are on screen
///
/// The dump is a grid of `bytes_per_line` bytes per row. `offset` is the
/// buffer index of the top-left byte and is always a multiple of
/// `bytes_per_line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Byte index of the first visible byte
    pub offset: usize,

    /// Number of dump rows on screen
    lines_visible: usize,

    /// Bytes shown per row
    bytes_per_line: usize,
}

impl Viewport {
    /// Create a new viewport scrolled to the top
    ///
    /// Zero dimensions are bumped to 1 so the line arithmetic never divides by zero.
    pub fn new(lines_visible: usize, bytes_per_line: usize) -> Self {
        Self {
            offset: 0,
            lines_visible: lines_visible.max(1),
            bytes_per_line: bytes_per_line.max(1),
        }
    }

    /// Get the number of visible lines
    pub fn visible_line_count(&self) -> usize {
        self.lines_visible
    }

    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Number of bytes one full screen covers
    pub fn page_size(&self) -> usize {
        self.lines_visible * self.bytes_per_line
    }

    /// Row index (in the whole dump) that byte `index` sits on
    pub fn line_of(&self, index: usize) -> usize {
        index / self.bytes_per_line
    }

    /// Row index of the top visible row
    pub fn top_line(&self) -> usize {
        self.line_of(self.offset)
    }

    /// Scroll the minimum amount needed to bring `cursor`'s row on screen
    ///
    /// Scrolls up so the cursor row becomes the top row when it is above the
    /// window, scrolls down so it becomes the bottom row when it is below,
    /// and otherwise leaves the offset alone.
    pub fn ensure_visible(&mut self, cursor: usize) {
        let cursor_line = self.line_of(cursor);
        let top_line = self.top_line();

        let new_top = if cursor_line < top_line {
            cursor_line
        } else if cursor_line >= top_line + self.lines_visible {
            cursor_line + 1 - self.lines_visible
        } else {
            top_line
        };

        let new_offset = new_top * self.bytes_per_line;
        if new_offset != self.offset {
            tracing::trace!(
                "viewport scroll: offset {:#x} -> {:#x} (cursor {:#x})",
                self.offset,
                new_offset,
                cursor
            );
        }
        self.offset = new_offset;
    }

    /// Whether `index`'s row is currently on screen
    fn is_visible(&self, index: usize) -> bool {
        let line = self.line_of(index);
        line >= self.top_line() && line < self.top_line() + self.lines_visible
    }

    /// Screen row of byte `index`, if it is on screen
    pub fn screen_row(&self, index: usize) -> Option<usize> {
        self.is_visible(index)
            .then(|| self.line_of(index) - self.top_line())
    }

    /// Buffer index of the first byte of screen row `row`
    pub fn line_start(&self, row: usize) -> usize {
        self.offset + row * self.bytes_per_line
    }
}
