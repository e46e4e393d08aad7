//! # Marquee Main Entry Point
//!
//! Terminal client for the movie catalog.

use std::sync::Arc;

use anyhow::Result;
use marquee::{
    cmd_args::CommandLineArgs, config, AppController, HttpCatalogService, TerminalDialog,
    TerminalEventSource, TerminalRenderStream,
};
use tracing_subscriber::{filter::LevelFilter, fmt::time::ChronoLocal, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();
    init_tracing_subscriber(cmd_args.verbose())?;

    let profile_path = config::get_profile_path();
    let profile = config::load_profile(cmd_args.profile(), &profile_path)?;
    tracing::debug!("Profile: {:?}", profile);

    let api = Arc::new(HttpCatalogService::new(&profile)?);
    let mut app = AppController::with_io(
        api,
        TerminalDialog::new(),
        TerminalEventSource::new(),
        TerminalRenderStream::new(),
    );

    println!("🎬 Marquee ({})", profile.base_url());
    app.run(cmd_args.start_path()).await?;

    println!("\n👋 ¡Hasta luego!");
    Ok(())
}

fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .with_env_var(format!(
            "{}_LOG_LEVEL",
            env!("CARGO_PKG_NAME").to_uppercase()
        ))
        .from_env_lossy()
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("rustls=warn".parse()?)
        .add_directive("tokio=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
    Ok(())
}
