use clap::{Parser, Subcommand};
use occa_site::helpers::{FixedClock, SystemClock};
use occa_site::site::Site;
use occa_site::{config, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    if env!("SITE_ON_RELEASE_TAG") == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("SITE_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "occa-site")]
#[command(about = "Build the OCCA project website")]
#[command(long_about = "\
Build the OCCA project website

Every page is composed from the shared header, menu and footer. The menu
highlights the section of the page being rendered; the footer carries the
copyright range up to the current year.

Source directory (all optional):

  site/
  ├── config.toml     # Overrides for branding, asset paths, code viewer
  └── assets/         # Copied to the output root (images/, library/, main.css)

Run 'occa-site gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site source directory (config.toml, assets/)
    #[arg(long, default_value = "site", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Render as if the current year were YEAR (reproducible builds)
    #[arg(long, value_name = "YEAR", global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and copy assets into the output directory
    Build,
    /// Print the page for a request path, e.g. /aboutUs.html
    Render {
        /// Root-relative request path
        path: String,
    },
    /// Render every page in memory and report problems
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match &cli.command {
        Command::Build => {
            let site = load_site(&cli)?;
            println!("==> Building {}", cli.output.display());
            let report = generate::generate(&site, &cli.source.join("assets"), &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Render { path } => {
            let site = load_site(&cli)?;
            let response = site.respond(path);
            print!("{}", response.body);
            if !response.status.is_ok() {
                return Err(format!("{} answered with status {}", path, response.status.code()).into());
            }
        }
        Command::Check => {
            let site = load_site(&cli)?;
            println!("==> Checking {}", cli.source.display());
            let pages = generate::render_all(&site)?;
            output::print_check_output(&pages);
            println!("==> Site is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn load_site(cli: &Cli) -> Result<Site, config::ConfigError> {
    let config = config::load_config(&cli.source)?;
    Ok(match cli.year {
        Some(year) if year < config.site.copyright_start_year => {
            return Err(config::ConfigError::Validation(format!(
                "--year {} is before site.copyright_start_year ({})",
                year, config.site.copyright_start_year
            )));
        }
        Some(year) => Site::with_clock(config, FixedClock(year)),
        None => Site::with_clock(config, SystemClock),
    })
}
