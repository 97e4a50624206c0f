use std::path::Path;

use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::error::errors::GameError;

const LOG_PATTERN : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";
const FILE_APPENDER : &str = "file";

/*
    Logs go to a file, the terminal is busy drawing the game
 */
pub fn init(log_file: &Path, level: LevelFilter) -> Result<log4rs::Handle, GameError> {
    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .append(false)
        .build(log_file)?;

    let config = Config::builder()
        .appender(Appender::builder().build(FILE_APPENDER, Box::new(file_appender)))
        .build(Root::builder().appender(FILE_APPENDER).build(level))
        .map_err(|e| GameError::Logging(e.to_string()))?;

    let handle = log4rs::init_config(config).map_err(|e| GameError::Logging(e.to_string()))?;
    log::info!("Logging initialised at {} to {}", level, log_file.display());
    Ok(handle)
}
