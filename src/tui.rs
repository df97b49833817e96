use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};
use rand::Rng;

use crate::vcc::Vcc;
use form::{Form, FormAction};
use terminal::TerminalGuard;

mod form;
mod render;
mod terminal;
mod theme;

/// Runs the form until the user quits. Each key press is handled to completion
/// before the next one is read.
pub fn run<R: Rng>(vcc: &mut Vcc<R>) -> Result<()> {
    let (_guard, mut terminal) = TerminalGuard::enter()?;
    let mut form = Form::new(vcc.ui_state().moods);
    form.apply_updates(vcc.take_updates());
    info!("UI started.");

    loop {
        let ui_state = vcc.ui_state();
        terminal
            .draw(|f| render::render(f, &form, &ui_state))
            .context("Cannot draw")?;

        let Event::Key(key) = event::read().context("Cannot read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match form.handle_key(key) {
            Some(FormAction::Quit) => break,
            Some(FormAction::Command(ui_command)) => {
                debug!("> {ui_command:?}");
                vcc.dispatch_ui_command(ui_command);
                form.apply_updates(vcc.take_updates());
            }
            None => {}
        }
    }

    info!("UI closed.");
    Ok(())
}
