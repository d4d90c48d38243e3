use clap::{Parser, Subcommand};
use log::{warn, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::error::Error;
use std::path::PathBuf;

use rampage_data::{is_version_like, ChangelogStore, CHANGELOG_FILE_NAME, LOGO_FILE_NAME};
use rampage_render::SitePageGenerator;

#[derive(Parser)]
#[command(name = "rampage-site")]
#[command(about = "Static download-page generator for Rampage Trainer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory path
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Turn on verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the download page into the output directory
    Build {
        /// Output directory path
        #[arg(long, default_value = "./public")]
        out_dir: PathBuf,
    },
    /// Print the changelog of the latest (or a given) version
    Changelog {
        /// Version to print instead of the latest
        #[arg(long)]
        version: Option<String>,
    },
    /// List known versions, newest first
    Versions,
    /// Record a release in the changelog data file
    Add {
        /// Version number
        version: String,
        /// Change descriptions
        #[arg(required = true)]
        items: Vec<String>,
    },
}

fn print_changelog(version: &str, items: &[String]) {
    println!("{}:", version);
    for item in items {
        println!("  - {}", item);
    }
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = SimpleLogger::init(log_level, Config::default());

    let data_path = cli.data_dir.join(CHANGELOG_FILE_NAME);
    let mut store = ChangelogStore::new();
    store.load(&data_path)?;

    match cli.command {
        Commands::Build { out_dir } => {
            for version in store.changelogs.versions() {
                if !is_version_like(version) {
                    warn!(
                        "changelog key '{}' does not look like a version number",
                        version
                    );
                }
            }

            let generator = SitePageGenerator::new(&out_dir);
            let files = generator.generate(&store.changelogs)?;
            if !generator.copy_logo(&cli.data_dir)? {
                warn!("logo '{}' not found in {}", LOGO_FILE_NAME, cli.data_dir.display());
            }
            println!("✓ Page written to {}", files.html_path);
            println!("✓ Changelog data written to {}", files.data_path);
        }

        Commands::Changelog { version } => match version {
            Some(version) => {
                if store.changelogs.contains(&version) {
                    print_changelog(&version, store.changelogs.items(&version));
                } else {
                    println!("✗ No changelog recorded for {}", version);
                }
            }
            None => {
                if let Some(latest) = store.changelogs.latest_version() {
                    print_changelog(latest, store.changelogs.latest_items());
                } else {
                    println!("✗ No changelog data available");
                }
            }
        },

        Commands::Versions => {
            if store.changelogs.is_empty() {
                println!("No versions recorded");
            } else {
                for version in store.changelogs.versions() {
                    if is_version_like(version) {
                        println!("{}", version);
                    } else {
                        println!("{} (unrecognized version format)", version);
                    }
                }
            }
        }

        Commands::Add { version, items } => {
            if !is_version_like(&version) {
                warn!("'{}' does not look like a version number", version);
            }
            if store.changelogs.insert(version.clone(), items) {
                store.save()?;
                println!("✓ Recorded {} in {}", version, data_path.display());
            } else {
                println!("⚠ Version {} already exists", version);
            }
        }
    }

    Ok(())
}
