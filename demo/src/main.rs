use anyhow::{Context, Result};
use dp_observer_demo::DemoConfig;

fn main() -> Result<()> {
    let config = DemoConfig::from_env()?;

    // initialize tracing - stdout is reserved for the observers
    tracing_subscriber::fmt().with_max_level(config.log_level).with_writer(std::io::stderr).init();

    dp_observer_demo::run(std::io::stdout).context("demo broadcast failed")?;
    Ok(())
}
