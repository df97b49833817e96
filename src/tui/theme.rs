use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(0x1e, 0x1e, 0x1e);
pub const ACCENT: Color = Color::Rgb(0x00, 0xff, 0x99);
pub const FIELD: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const MUTED: Color = Color::Rgb(0x88, 0x88, 0x88);
pub const ERROR: Color = Color::Rgb(0xff, 0x55, 0x55);
pub const WARNING: Color = Color::Rgb(0xff, 0xcc, 0x00);

pub fn base() -> Style {
    Style::default().fg(ACCENT).bg(BACKGROUND)
}

pub fn label() -> Style {
    base()
}

pub fn title() -> Style {
    base().add_modifier(Modifier::BOLD)
}

pub fn field() -> Style {
    Style::default().fg(ACCENT).bg(FIELD)
}

pub fn border(focused: bool) -> Style {
    if focused {
        base().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).bg(BACKGROUND)
    }
}

pub fn button(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(BACKGROUND)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        base().add_modifier(Modifier::BOLD)
    }
}

pub fn highlight() -> Style {
    Style::default().fg(BACKGROUND).bg(ACCENT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED).bg(BACKGROUND)
}
