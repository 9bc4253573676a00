pub mod edit;
mod movement;
mod render;
pub mod state;
pub mod types;

use anyhow::{Context, Result as AnyhowResult};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::{Path, PathBuf};
use std::time::Duration;

use self::state::EditorState;
use self::types::ApplicationMode;
use crate::config::Config;
use crate::input::actions::Action;
use crate::input::keybindings::{KeyContext, KeybindingResolver};
use crate::services::async_bridge::{AsyncBridge, AsyncMessage};
use crate::services::fs;
use crate::view::hex_view::HexLayout;
use crate::view::prompt::SavePrompt;

/// The editor application: editing state plus everything around it
///
/// Owns key resolution, the save prompt, and the I/O bridge. Buffer changes
/// all go through [`EditorState::dispatch`].
pub struct Editor {
    state: EditorState,

    /// Destination path field shown in the save dialog
    prompt: SavePrompt,

    layout: HexLayout,

    /// Absolute path of the file being edited
    file_path: PathBuf,

    keybindings: KeybindingResolver,

    async_bridge: AsyncBridge,

    loaded: bool,
    save_in_flight: bool,
    should_quit: bool,
}

impl Editor {
    /// Create an editor for `file_path` (already resolved to an absolute path)
    ///
    /// The buffer starts empty; call [`Editor::start_loading`] to read the file.
    pub fn new(config: &Config, file_path: PathBuf) -> Self {
        Self {
            state: EditorState::from_config(&config.editor),
            prompt: SavePrompt::new(),
            layout: HexLayout::from_config(&config.editor),
            file_path,
            keybindings: KeybindingResolver::new(),
            async_bridge: AsyncBridge::new(),
            loaded: false,
            save_in_flight: false,
            should_quit: false,
        }
    }

    /// Read the input file on a worker thread
    pub fn start_loading(&mut self) {
        tracing::info!("Loading {}", self.file_path.display());
        fs::spawn_load(&self.async_bridge, self.file_path.clone());
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn prompt(&self) -> &SavePrompt {
        &self.prompt
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn mode(&self) -> ApplicationMode {
        self.state.mode()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_saving(&self) -> bool {
        self.save_in_flight
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn key_context(&self) -> KeyContext {
        self.state.mode().into()
    }

    /// Resolve a key press for the current mode and apply it
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let action = self
            .keybindings
            .resolve(&KeyEvent::new(code, modifiers), self.key_context());
        self.handle_action(action);
    }

    /// Apply one action
    ///
    /// Until the input file has been read only `Quit` is honoured.
    pub fn handle_action(&mut self, action: Action) {
        let mode = self.state.mode();
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            action if !self.loaded => {
                tracing::debug!("Ignoring {:?} before the file has loaded", action);
            }
            Action::OpenSaveDialog if mode == ApplicationMode::Editing => {
                self.prompt = SavePrompt::new().with_value(self.file_path.display().to_string());
                self.state.dispatch(action);
            }
            Action::ConfirmSave => self.confirm_save(),
            action if action.is_prompt_edit() => {
                if mode == ApplicationMode::SaveDialog {
                    self.edit_prompt(action);
                }
            }
            action => self.state.dispatch(action),
        }
    }

    fn edit_prompt(&mut self, action: Action) {
        match action {
            Action::PromptInsertChar(c) => self.prompt.insert(c),
            Action::PromptBackspace => self.prompt.backspace(),
            Action::PromptDelete => self.prompt.delete(),
            Action::PromptLeft => self.prompt.move_left(),
            Action::PromptRight => self.prompt.move_right(),
            Action::PromptHome => self.prompt.move_home(),
            Action::PromptEnd => self.prompt.move_end(),
            _ => {}
        }
    }

    /// Write the buffer to the prompt's path on a worker thread
    ///
    /// The dialog stays open until the write reports back.
    fn confirm_save(&mut self) {
        if self.state.mode() != ApplicationMode::SaveDialog {
            return;
        }
        if self.save_in_flight {
            tracing::debug!("Save already in progress, ignoring Enter");
            return;
        }
        let Some(path) = self.prompt.path() else {
            self.state
                .set_status_message("Save failed: no file path given".to_string());
            return;
        };

        let path = match std::env::current_dir() {
            Ok(cwd) => fs::resolve_path(&path, &cwd),
            Err(_) => path,
        };
        let revision = self.state.buffer.revision();
        tracing::info!(
            "Saving {} bytes to {}",
            self.state.buffer.len(),
            path.display()
        );
        fs::spawn_save(
            &self.async_bridge,
            path,
            self.state.buffer.to_vec(),
            revision,
        );
        self.save_in_flight = true;
    }

    /// Apply every finished load or save
    ///
    /// Returns whether anything changed. A failed load is fatal and comes
    /// back as an error.
    pub fn process_async_messages(&mut self) -> AnyhowResult<bool> {
        let messages = self.async_bridge.try_recv_all();
        let changed = !messages.is_empty();
        for message in messages {
            self.handle_async_message(message)?;
        }
        Ok(changed)
    }

    /// Block up to `timeout` for one I/O completion and apply it
    pub fn wait_for_async_message(&mut self, timeout: Duration) -> AnyhowResult<bool> {
        match self.async_bridge.recv_timeout(timeout) {
            Some(message) => {
                self.handle_async_message(message)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn handle_async_message(&mut self, message: AsyncMessage) -> AnyhowResult<()> {
        match message {
            AsyncMessage::FileLoaded { path, result } => {
                let bytes =
                    result.with_context(|| format!("Failed to read {}", path.display()))?;
                tracing::info!("Loaded {} bytes from {}", bytes.len(), path.display());
                self.loaded = true;
                self.state.dispatch(Action::FileLoaded(bytes));
            }
            AsyncMessage::SaveCompleted {
                path,
                revision,
                result,
            } => {
                self.save_in_flight = false;
                self.state.dispatch(Action::SaveCompleted {
                    path,
                    revision,
                    result: result.map_err(|e| e.to_string()),
                });
            }
        }
        Ok(())
    }
}
