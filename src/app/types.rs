use crate::input::keybindings::KeyContext;

/// Which screen currently owns the keyboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApplicationMode {
    /// Navigating and editing bytes
    #[default]
    Editing,
    /// Help screen is shown
    HelpVisible,
    /// Save dialog is asking for a destination path
    SaveDialog,
}

impl From<ApplicationMode> for KeyContext {
    fn from(mode: ApplicationMode) -> Self {
        match mode {
            ApplicationMode::Editing => KeyContext::Editing,
            ApplicationMode::HelpVisible => KeyContext::Help,
            ApplicationMode::SaveDialog => KeyContext::SaveDialog,
        }
    }
}
