use anyhow::Result;
use widgetkit::config::Config;
use widgetkit::logger::Logger;
use widgetkit::ui;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = Config::load()?;

    let logger = Logger::from_config(config.logging.enabled)?;
    logger.install(config.logging.level_filter())?;

    // Run the TUI application
    let result = ui::run_app(config, logger.clone()).await;
    logger.flush()?;

    result
}
