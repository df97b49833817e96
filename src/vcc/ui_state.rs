use vcc_model::Mood;

/// Snapshot of everything the form displays besides its own widgets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    /// Dropdown entries, in resource file order.
    pub moods: Vec<Mood>,
    pub output: String,
    pub status: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Blocking message. The form shows it until dismissed.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Error,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Warning,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UiCommand {
    Translate { mood: String, phrase: String },
    Reroll { mood: String },
    VibeCheck { phrase: String },
}

/// Side effects the form applies to its widgets after a command.
#[derive(Clone, Debug, PartialEq)]
pub enum UiUpdate {
    Notify(Notification),
    SelectMood(Mood),
}
