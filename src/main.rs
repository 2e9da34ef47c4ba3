use anyhow::Context;
use clap::Parser;

use larder::cli::Args;
use larder::config::Config;
use larder::logging::init_tracing;
use larder::ui::runtime;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.override_store_url(std::env::var("LARDER_STORE_URL").ok());
    config.override_store_url(args.store_url);
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime::run(config, &runtime)?;
    Ok(())
}
