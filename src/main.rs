use anyhow::Result;
use log::info;
use utils::{print_err, unwrap_or_def_verbose};
use vcc::{store, Vcc};

mod logging;
mod tui;
mod utils;
mod vcc;

fn main() -> Result<()> {
    let _logger = logging::init()?;
    let config = unwrap_or_def_verbose(store::load_config());
    let mut vcc = Vcc::from_config(&config);

    info!("Running");
    tui::run(&mut vcc).inspect_err(print_err)?;
    info!("Terminating.");
    Ok(())
}
