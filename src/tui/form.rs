//! Form widgets state and key handling.
//!
//! The form owns the session state that only the UI cares about: the phrase
//! being typed, the selected mood, focus and queued popups. Actions are turned
//! into [`UiCommand`]s for [`crate::vcc::Vcc`].

use std::collections::VecDeque;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};
use vcc_model::Mood;

use crate::vcc::ui_state::{Notification, UiCommand, UiUpdate};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Phrase,
    Mood,
    Translate,
    Reroll,
    VibeCheck,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Phrase,
        Focus::Mood,
        Focus::Translate,
        Focus::Reroll,
        Focus::VibeCheck,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Command(UiCommand),
    Quit,
}

#[derive(Debug, Default)]
pub struct Form {
    phrase: Input,
    moods: Vec<Mood>,
    selected: Option<usize>,
    /// Highlighted entry while the dropdown list is open.
    dropdown: Option<usize>,
    focus: Focus,
    popups: VecDeque<Notification>,
}

impl Form {
    /// Builds the form. The dropdown is filled once, from the loaded moods.
    pub fn new(moods: Vec<Mood>) -> Self {
        Form {
            moods,
            ..Default::default()
        }
    }

    pub fn phrase(&self) -> &Input {
        &self.phrase
    }

    pub fn moods(&self) -> &[Mood] {
        &self.moods
    }

    /// Selected mood name, empty when nothing is selected.
    pub fn selected_mood(&self) -> &str {
        self.selected
            .and_then(|i| self.moods.get(i))
            .map(Mood::as_str)
            .unwrap_or_default()
    }

    pub fn dropdown(&self) -> Option<usize> {
        self.dropdown
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Popup currently blocking the form.
    pub fn popup(&self) -> Option<&Notification> {
        self.popups.front()
    }

    pub fn apply_updates(&mut self, updates: impl IntoIterator<Item = UiUpdate>) {
        for update in updates {
            match update {
                UiUpdate::Notify(notification) => self.popups.push_back(notification),
                UiUpdate::SelectMood(mood) => {
                    if let Some(i) = self.moods.iter().position(|m| *m == mood) {
                        self.selected = Some(i);
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FormAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(FormAction::Quit);
        }

        if self.popup().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.popups.pop_front();
            }
            return None;
        }

        if let Some(highlighted) = self.dropdown {
            self.handle_dropdown_key(key, highlighted);
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(FormAction::Quit),
            KeyCode::F(2) => return Some(self.translate()),
            KeyCode::F(3) => return Some(self.reroll()),
            KeyCode::F(4) => return Some(self.vibe_check()),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        let activate = matches!(key.code, KeyCode::Enter | KeyCode::Char(' '));
        match self.focus {
            Focus::Phrase if key.code == KeyCode::Enter => Some(self.translate()),
            Focus::Phrase => {
                self.handle_phrase_key(key);
                None
            }
            Focus::Mood => {
                self.handle_mood_key(key);
                None
            }
            Focus::Translate if activate => Some(self.translate()),
            Focus::Reroll if activate => Some(self.reroll()),
            Focus::VibeCheck if activate => Some(self.vibe_check()),
            _ => None,
        }
    }

    fn translate(&self) -> FormAction {
        FormAction::Command(UiCommand::Translate {
            mood: self.selected_mood().to_owned(),
            phrase: self.phrase.value().to_owned(),
        })
    }

    fn reroll(&self) -> FormAction {
        FormAction::Command(UiCommand::Reroll {
            mood: self.selected_mood().to_owned(),
        })
    }

    fn vibe_check(&self) -> FormAction {
        FormAction::Command(UiCommand::VibeCheck {
            phrase: self.phrase.value().to_owned(),
        })
    }

    fn handle_phrase_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let request = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(request) = request {
                self.phrase.handle(request);
            }
            return;
        }

        let request = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };
        if let Some(request) = request {
            self.phrase.handle(request);
        }
    }

    fn handle_mood_key(&mut self, key: KeyEvent) {
        if self.moods.is_empty() {
            return;
        }
        let last = self.moods.len() - 1;
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dropdown = Some(self.selected.unwrap_or(0));
            }
            KeyCode::Down => {
                self.selected = Some(self.selected.map_or(0, |i| (i + 1).min(last)));
            }
            KeyCode::Up => {
                self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent, highlighted: usize) {
        let last = self.moods.len().saturating_sub(1);
        match key.code {
            KeyCode::Down => self.dropdown = Some((highlighted + 1).min(last)),
            KeyCode::Up => self.dropdown = Some(highlighted.saturating_sub(1)),
            KeyCode::Home => self.dropdown = Some(0),
            KeyCode::End => self.dropdown = Some(last),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selected = Some(highlighted);
                self.dropdown = None;
            }
            KeyCode::Esc => self.dropdown = None,
            _ => {}
        }
    }
}
