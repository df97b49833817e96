use anyhow::{Context, Result};
use flexi_logger::{Duplicate, FileSpec, Logger, LoggerHandle, WriteMode};
use log::error;

use super::vcc::store::data_dir;

const LOG_SPEC: &str = "warn,vibecheck=debug,vcc_model=debug,vibe_engine=debug";

pub fn init() -> Result<LoggerHandle> {
    let logger = Logger::try_with_str(LOG_SPEC)
        .context("log config text")?
        .log_to_file(FileSpec::default().directory(data_dir()?.join("logs")))
        .write_mode(WriteMode::BufferAndFlush)
        // the terminal belongs to the UI
        .duplicate_to_stderr(Duplicate::None)
        .start()
        .context("log init")?;

    let orig_hook = std::panic::take_hook();
    let logger_for_panic = logger.clone();
    std::panic::set_hook(Box::new(move |panic_info| {
        // log and flush before the default handler; unwinding restores the terminal
        error!("Panic: {panic_info}");
        logger_for_panic.flush();
        orig_hook(panic_info);
    }));
    Ok(logger)
}
