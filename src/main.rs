use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use spodl::{
    cli,
    config::{self, Config},
    error, info,
    prompt::ConsoleInput,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
struct Cli {
    /// Configuration tokens in key=value form:
    /// cid=<client-id> secret=<client-secret> playlist=<playlist-id> [log=DEBUG]
    #[clap(value_name = "KEY=VALUE")]
    args: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.args.is_empty() {
        info!("Usage: spodl cid=Client_ID secret=Client_Secret playlist=Playlist_ID [log=DEBUG]");
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment: {}", e);
    }

    let config = match Config::from_args(&cli.args) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
        }
    };

    let mut input = ConsoleInput;
    cli::run(config, &mut input).await;
}
