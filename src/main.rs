// mirror_page: save one web page as a single self-contained HTML file.
//
// Stylesheets, scripts, images and CSS-referenced assets are fetched one at a
// time and embedded in the output. Set RUST_LOG=warn to see which resources
// were left as external references.

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use mirror_page::{MirrorConfig, mirror_page};
use std::path::PathBuf;

const USAGE: &str = "Usage: mirror_page <URL> <output.html>";

#[derive(Debug, Parser)]
#[command(name = "mirror_page", version, about = "Save a web page as one self-contained HTML file")]
struct Cli {
    /// Page to fetch
    url: String,

    /// Where to write the HTML file (overwritten if it exists)
    output: PathBuf,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    #[allow(dead_code)]
    rest: Vec<String>,
}

fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(2);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    println!("Fetching and inlining resources...");
    mirror_page(&cli.url, &cli.output, MirrorConfig::default()).await?;
    println!("Written {}", cli.output.display());

    Ok(())
}
