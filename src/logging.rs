use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the global logger at `level`. `RUST_LOG`, when set, wins.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    SimpleLogger::new().with_level(level).env().init()
}
