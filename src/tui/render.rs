use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::form::{Focus, Form};
use super::theme;
use crate::vcc::ui_state::{Notification, Severity, UiState};

const TITLE: &str = "Vibe-Check-Conditional ⚡";
const HELP: &str = "Tab: next  Enter: activate  F2: Translate  F3: Re-Roll  F4: Vibe Check  Esc: quit";

pub fn render(f: &mut Frame, form: &Form, state: &UiState) {
    let area = f.area();
    f.render_widget(Block::default().style(theme::base()), area);

    let [title, _, phrase_label, phrase, mood_label, mood, buttons, output, status, help] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .margin(1)
        .areas(area);

    f.render_widget(
        Paragraph::new(TITLE)
            .style(theme::title())
            .alignment(Alignment::Center),
        title,
    );
    f.render_widget(
        Paragraph::new("Enter your phrase:").style(theme::label()),
        phrase_label,
    );
    render_phrase(f, form, phrase);
    f.render_widget(
        Paragraph::new("Select your friend's mood:").style(theme::label()),
        mood_label,
    );
    render_mood(f, form, mood);
    render_buttons(f, form, buttons);
    render_output(f, state, output);
    f.render_widget(
        Paragraph::new(state.status.as_deref().unwrap_or_default()).style(theme::muted()),
        status,
    );
    f.render_widget(Paragraph::new(HELP).style(theme::muted()), help);

    if let Some(highlighted) = form.dropdown() {
        render_dropdown(f, form, highlighted, mood, area);
    }
    if let Some(popup) = form.popup() {
        render_popup(f, popup, area);
    }
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::border(focused))
        .style(theme::field())
}

fn render_phrase(f: &mut Frame, form: &Form, area: Rect) {
    let focused = form.focus() == Focus::Phrase;
    let input = form.phrase();
    let width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(width);
    let paragraph = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(field_block("", focused));
    f.render_widget(paragraph, area);

    if focused && form.popup().is_none() && form.dropdown().is_none() {
        let inner = area.inner(Margin::new(1, 1));
        let x = inner.x + (input.visual_cursor().saturating_sub(scroll)) as u16;
        f.set_cursor_position((x, inner.y));
    }
}

fn render_mood(f: &mut Frame, form: &Form, area: Rect) {
    let focused = form.focus() == Focus::Mood;
    let line = if form.moods().is_empty() {
        Line::from(Span::styled("(no moods loaded)", theme::muted()))
    } else if form.selected_mood().is_empty() {
        Line::from(Span::styled("(select a mood)", theme::muted()))
    } else {
        Line::from(form.selected_mood())
    };
    f.render_widget(
        Paragraph::new(line).block(field_block("▼", focused)),
        area,
    );
}

fn render_buttons(f: &mut Frame, form: &Form, area: Rect) {
    let buttons = [
        ("Translate", Focus::Translate),
        ("Re-Roll 🎲", Focus::Reroll),
        ("Vibe Check", Focus::VibeCheck),
    ];
    let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    for ((label, focus), area) in buttons.into_iter().zip(areas.iter()) {
        let focused = form.focus() == focus;
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(theme::button(focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme::border(focused)),
            );
        f.render_widget(button, *area);
    }
}

fn render_output(f: &mut Frame, state: &UiState, area: Rect) {
    let output = Paragraph::new(state.output.as_str())
        .style(theme::base())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Output")
                .borders(Borders::ALL)
                .border_style(theme::border(false)),
        );
    f.render_widget(output, area);
}

fn render_dropdown(f: &mut Frame, form: &Form, highlighted: usize, anchor: Rect, frame: Rect) {
    let wanted = form.moods().len() as u16 + 2;
    let top = anchor.y + anchor.height;
    let height = wanted.min(frame.bottom().saturating_sub(top));
    if height < 3 {
        return;
    }
    let area = Rect::new(anchor.x, top, anchor.width, height);

    let items: Vec<ListItem> = form
        .moods()
        .iter()
        .map(|mood| ListItem::new(mood.as_str()))
        .collect();
    let list = List::new(items)
        .style(theme::field())
        .highlight_style(theme::highlight())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(true)),
        );
    let mut list_state = ListState::default().with_selected(Some(highlighted));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_popup(f: &mut Frame, popup: &Notification, frame: Rect) {
    let area = centered_rect(60, 30, frame);
    let color = match popup.severity {
        Severity::Error => theme::ERROR,
        Severity::Warning => theme::WARNING,
    };
    let text = vec![
        Line::from(popup.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", theme::muted())),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(theme::base())
        .block(
            Block::default()
                .title(popup.title.as_str())
                .borders(Borders::ALL)
                .border_style(theme::base().fg(color)),
        );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

/// Centered rectangle taking the given percentage of `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(r);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcc::ui_state::UiUpdate;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use vcc_model::Mood;

    fn draw(form: &Form, state: &UiState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, form, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn moods() -> Vec<Mood> {
        vec![Mood::from("happy"), Mood::from("chill")]
    }

    fn press(form: &mut Form, code: KeyCode) {
        form.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn renders_the_form() {
        let form = Form::new(moods());
        let state = UiState {
            moods: moods(),
            output: "Yas queen!".into(),
            status: Some("Vibe check: happy (82% confidence).".into()),
        };
        let content = draw(&form, &state, 100, 30);
        assert!(content.contains("Vibe-Check-Conditional"));
        assert!(content.contains("Enter your phrase:"));
        assert!(content.contains("Select your friend's mood:"));
        assert!(content.contains("(select a mood)"));
        assert!(content.contains("Translate"));
        assert!(content.contains("Re-Roll"));
        assert!(content.contains("Yas queen!"));
        assert!(content.contains("82% confidence"));
    }

    #[test]
    fn wraps_long_output() {
        let form = Form::new(moods());
        let state = UiState {
            output: "Absolutely unhinged in the best way possible my friend".into(),
            ..Default::default()
        };
        let content = draw(&form, &state, 30, 30);
        assert!(content.contains("Absolutely"));
        assert!(content.contains("friend"));
    }

    #[test]
    fn renders_typed_phrase_and_selected_mood() {
        let mut form = Form::new(moods());
        for c in "hey bro".chars() {
            press(&mut form, KeyCode::Char(c));
        }
        form.apply_updates([UiUpdate::SelectMood(Mood::from("chill"))]);
        let content = draw(&form, &UiState::default(), 100, 30);
        assert!(content.contains("hey bro"));
        assert!(content.contains("chill"));
    }

    #[test]
    fn renders_open_dropdown() {
        let mut form = Form::new(moods());
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Enter);
        let content = draw(&form, &UiState::default(), 100, 30);
        assert!(content.contains("happy"));
        assert!(content.contains("chill"));
    }

    #[test]
    fn renders_popup() {
        let mut form = Form::new(vec![]);
        form.apply_updates([UiUpdate::Notify(Notification::error(
            "Error",
            "responses.json not found!",
        ))]);
        let content = draw(&form, &UiState::default(), 100, 30);
        assert!(content.contains("responses.json not found!"));
        assert!(content.contains("[Enter] OK"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut form = Form::new(moods());
        press(&mut form, KeyCode::Tab);
        press(&mut form, KeyCode::Enter);
        draw(&form, &UiState::default(), 10, 5);
    }
}
