//! WGI CLI - generates and checks the static data assets of WebGIS Indonesia.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wgi-cli",
    version,
    about = "WebGIS Indonesia data asset toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wgi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wgi_cmd::run(cli.command).await
}
