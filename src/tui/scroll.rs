// Scroll state for the transcript
//
// The transcript is newest-first, so "following" new content means staying at
// the top. Offsets are in rendered lines; the renderer reports content and
// viewport height each frame and the state clamps itself. Paragraph scrolling
// takes a u16, so offsets never go past u16::MAX.

#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,

    /// Total number of rendered lines
    total: usize,

    /// Number of lines visible in the viewport
    viewport: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.offset = (self.offset + 1).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    /// Jump back to the newest content
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Offset for `Paragraph::scroll`
    pub fn render_offset(&self) -> u16 {
        u16::try_from(self.offset).unwrap_or(u16::MAX)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    fn max_offset(&self) -> usize {
        self.total
            .saturating_sub(self.viewport)
            .min(usize::from(u16::MAX))
    }
}
