use anyhow::Result;
use clap::Parser;
use gatefetch::{
    catalog::Catalog,
    github::GitHubRepo,
    install::{Config, DEFAULT_REPO, install, list},
    platform::{Arch, Os, Platform},
    runtime::RealRuntime,
};
use std::path::PathBuf;

/// gatefetch - download the newest release asset for this machine
///
/// Lists the releases of a GitHub repository, picks the asset of the newest
/// release built for the current OS and CPU architecture, and saves it under
/// its own file name.
///
/// Examples:
///   gatefetch install                        # Newest Gate build for this machine
///   gatefetch install --os windows           # Same, but the Windows build
///   gatefetch --repo owner/repo list         # Show releases and their assets
#[derive(Parser, Debug)]
#[command(author, version = env!("GATEFETCH_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository to fetch releases from (also via GATEFETCH_REPO)
    #[arg(
        long = "repo",
        env = "GATEFETCH_REPO",
        value_name = "OWNER/REPO",
        default_value = DEFAULT_REPO,
        global = true
    )]
    pub repo: String,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(
        long = "api-url",
        env = "GATEFETCH_API_URL",
        value_name = "URL",
        global = true
    )]
    pub api_url: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Download the newest asset matching this machine
    Install(InstallArgs),

    /// List releases that have downloadable assets
    List,
}

#[derive(clap::Args, Debug)]
pub struct InstallArgs {
    /// Target operating system (defaults to the running one)
    #[arg(long, value_enum)]
    pub os: Option<Os>,

    /// Target CPU architecture (defaults to the running one)
    #[arg(long, value_enum)]
    pub arch: Option<Arch>,

    /// Directory to save the asset in (defaults to the current directory)
    #[arg(long = "dir", short = 'd', value_name = "PATH")]
    pub dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,gatefetch=info"),
    )
    .init();
    let cli = Cli::parse();
    let repo: GitHubRepo = cli.repo.parse()?;
    let config = Config::new(RealRuntime, repo, cli.api_url)?;

    match cli.command {
        Commands::Install(args) => {
            let target = Platform::detect().with_overrides(args.os, args.arch);
            let outcome = install(&config, target, args.dir).await?;
            println!("{}", outcome);
        }
        Commands::List => print_catalog(&list(&config).await),
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("No releases with downloadable assets found.");
        return;
    }

    for release in catalog.releases() {
        println!("{}", release.version);
        for download in &release.downloads {
            println!("  {}/{}  {}", download.os, download.arch, download.filename);
        }
    }
}
