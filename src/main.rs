use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use roster_importer::{
    cli::Cli,
    services::load_roster,
    utils::{constants::load_env, tracing::init_tracing},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    load_env();
    init_tracing()?;

    let cli = Cli::parse();

    let running_as = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_owned());
    tracing::info!("Running as user: {}", running_as);

    let importer = cli
        .build_importer()
        .wrap_err("invalid import configuration")?;

    println!("Validating CSV...");
    let roster = load_roster(&cli.roster)
        .await
        .wrap_err("failed to load roster")?;
    println!("Valid CSV.");
    tracing::info!(
        members = roster.members.len(),
        skipped = roster.errors.len(),
        "roster loaded"
    );

    let mut stdout = std::io::stdout();
    importer
        .run(&roster.members, &mut stdout)
        .await
        .wrap_err("import aborted")?;

    Ok(())
}
