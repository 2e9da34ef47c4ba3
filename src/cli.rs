use std::path::PathBuf;

use clap::Parser;

/// Terminal ingredient tracker backed by a remote JSON store.
#[derive(Parser, Debug)]
#[command(name = "larder", version, about)]
pub struct Args {
    /// Config file path (default: <config dir>/larder/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store base URL; overrides the config file and LARDER_STORE_URL.
    #[arg(long, value_name = "URL")]
    pub store_url: Option<String>,
}
