use clap::Parser;
use robot_wiring::utils::logger;
use robot_wiring::{run_demo, CliConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting robot-wiring");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let sent = run_demo(&config, std::io::stdout())?;
    tracing::info!("✅ Sent robot information {} time(s)", sent);

    Ok(())
}
