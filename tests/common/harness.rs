// EditorTestHarness - Virtual terminal environment for E2E testing

use bewitched::app::types::ApplicationMode;
use bewitched::app::Editor;
use bewitched::config::Config;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;

/// Terminal layout constants
/// The dump takes the first `visible_lines` rows, followed by a rule,
/// the status line, and another rule
pub mod layout {
    /// Get the first rule row for a given dump height
    #[inline]
    pub const fn top_rule_row(visible_lines: usize) -> usize {
        visible_lines
    }

    /// Get the status line row for a given dump height
    #[inline]
    pub const fn status_row(visible_lines: usize) -> usize {
        visible_lines + 1
    }

    /// Get the bottom rule row for a given dump height
    #[inline]
    pub const fn bottom_rule_row(visible_lines: usize) -> usize {
        visible_lines + 2
    }
}

/// How long to wait for a worker thread before failing the test
const IO_TIMEOUT: Duration = Duration::from_secs(5);

pub struct EditorTestHarness {
    /// The editor instance
    editor: Editor,

    /// Virtual terminal backend
    terminal: Terminal<TestBackend>,

    /// Temp directory holding the input file (kept alive for the duration of the test)
    temp_dir: TempDir,

    /// Dump rows, from the config
    visible_lines: usize,
}

impl EditorTestHarness {
    /// Create a harness editing a temp file holding `contents`, with the default config
    pub fn with_file(width: u16, height: u16, contents: &[u8]) -> io::Result<Self> {
        Self::with_config(width, height, contents, Config::default())
    }

    /// Create a harness with a custom config and wait for the initial load
    pub fn with_config(
        width: u16,
        height: u16,
        contents: &[u8],
        config: Config,
    ) -> io::Result<Self> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("input.bin");
        std::fs::write(&file_path, contents)?;

        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend)?;

        let visible_lines = config.editor.visible_lines;
        let mut editor = Editor::new(&config, file_path);
        editor.start_loading();

        let mut harness = EditorTestHarness {
            editor,
            terminal,
            temp_dir,
            visible_lines,
        };
        harness.wait_for_io()?;
        harness.render()?;
        Ok(harness)
    }

    /// Block until one load or save completes
    pub fn wait_for_io(&mut self) -> io::Result<()> {
        let arrived = self
            .editor
            .wait_for_async_message(IO_TIMEOUT)
            .map_err(|e| io::Error::other(format!("{e:#}")))?;
        if !arrived {
            return Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "Timed out waiting for file I/O",
            ));
        }
        self.render()
    }

    /// Block until any in-flight save has reported back
    ///
    /// The save may already have been applied by an earlier `send_key`.
    pub fn wait_for_save(&mut self) -> io::Result<()> {
        while self.editor.is_saving() {
            self.wait_for_io()?;
        }
        self.render()
    }

    /// Simulate a key press
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> io::Result<()> {
        // Delegate to the editor's handle_key method (just like main.rs does)
        self.editor.handle_key(code, modifiers);
        let _ = self.editor.process_async_messages();
        self.render()
    }

    /// Send the same key press multiple times, rendering once at the end
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> io::Result<()> {
        for _ in 0..count {
            self.editor.handle_key(code, modifiers);
        }
        let _ = self.editor.process_async_messages();
        self.render()
    }

    /// Simulate typing a string, one unmodified key per character
    pub fn type_text(&mut self, text: &str) -> io::Result<()> {
        for ch in text.chars() {
            self.editor.handle_key(KeyCode::Char(ch), KeyModifiers::NONE);
        }
        let _ = self.editor.process_async_messages();
        self.render()
    }

    /// Open the save dialog, replace the path, press Enter, and wait for the write
    pub fn save_as(&mut self, path: &Path) -> io::Result<()> {
        self.send_key(KeyCode::Char('s'), KeyModifiers::CONTROL)?;
        self.clear_prompt()?;
        self.type_text(&path.display().to_string())?;
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)?;
        self.wait_for_save()
    }

    /// Empty the save prompt
    pub fn clear_prompt(&mut self) -> io::Result<()> {
        let len = self.editor.prompt().value.chars().count();
        self.send_key(KeyCode::End, KeyModifiers::NONE)?;
        self.send_key_repeat(KeyCode::Backspace, KeyModifiers::NONE, len)
    }

    /// Force a render cycle and capture output
    pub fn render(&mut self) -> io::Result<()> {
        self.terminal.draw(|frame| {
            self.editor.render(frame);
        })?;
        Ok(())
    }

    /// Get the current terminal buffer (what would be displayed)
    pub fn buffer(&self) -> &ratatui::buffer::Buffer {
        self.terminal.backend().buffer()
    }

    /// Get the style (color, modifiers) of a specific cell
    pub fn get_cell_style(&self, x: u16, y: u16) -> Option<ratatui::style::Style> {
        let buffer = self.buffer();
        let pos = buffer.index_of(x, y);
        buffer.content.get(pos).map(|cell| cell.style())
    }

    /// Get the text content of a specific screen row
    pub fn get_row_text(&self, y: u16) -> String {
        let buffer = self.buffer();
        let width = buffer.area.width;
        let mut row_text = String::new();

        for x in 0..width {
            let pos = buffer.index_of(x, y);
            if let Some(cell) = buffer.content.get(pos) {
                row_text.push_str(cell.symbol());
            }
        }

        row_text
    }

    /// Get entire screen as string (for debugging)
    pub fn screen_to_string(&self) -> String {
        let height = self.buffer().area.height;
        (0..height)
            .map(|y| self.get_row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Verify text appears on screen
    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Verify text does not appear on screen
    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{text}'\nScreen content:\n{screen}"
        );
    }

    /// Text of dump row `row` (0-based), with trailing blanks trimmed
    pub fn get_dump_row(&self, row: usize) -> String {
        self.get_row_text(row as u16).trim_end().to_string()
    }

    pub fn get_status_line(&self) -> String {
        self.get_row_text(layout::status_row(self.visible_lines) as u16)
            .trim_end()
            .to_string()
    }

    pub fn assert_buffer_bytes(&self, expected: &[u8]) {
        assert_eq!(
            self.editor.state().buffer.as_bytes(),
            expected,
            "Buffer content mismatch"
        );
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn cursor_position(&self) -> usize {
        self.editor.state().cursor()
    }

    pub fn top_byte(&self) -> usize {
        self.editor.state().offset()
    }

    pub fn mode(&self) -> ApplicationMode {
        self.editor.mode()
    }

    pub fn should_quit(&self) -> bool {
        self.editor.should_quit()
    }

    pub fn input_path(&self) -> PathBuf {
        self.editor.file_path().to_path_buf()
    }

    /// The temp directory the input file lives in
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }
}
