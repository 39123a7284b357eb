use clap::Parser;
use trade_journal::cli::{Cli, Commands};
use trade_journal::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(&cli.config).unwrap_or_else(|e| {
        if std::path::Path::new(&cli.config).exists() {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
        }
        Config::default()
    });
    if let Some(journal) = cli.journal {
        config.journal.path = journal;
    }

    // Initialize telemetry
    trade_journal::telemetry::init_telemetry(&config.telemetry)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Calc(args) => args.execute(&config, &mut out)?,
        Commands::Open(args) => args.execute(&config, &mut out)?,
        Commands::Close(args) => args.execute(&config, &mut out)?,
        Commands::Delete(args) => args.execute(&config, &mut out)?,
        Commands::List(args) => args.execute(&config, &mut out)?,
        Commands::History(args) => args.execute(&config, &mut out)?,
        Commands::Config => {
            println!("Current configuration:");
            println!("  Journal: {}", config.journal.path.display());
            println!(
                "  Risk: MMR={}, RoundQuantity={}, Rounding={:?}",
                config.risk.maintenance_margin_rate,
                config.risk.round_quantity,
                config.risk.rounding
            );
            println!(
                "  Fees: Taker={}, Maker={}",
                config.fees.taker_rate, config.fees.maker_rate
            );
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
