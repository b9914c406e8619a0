use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use markdown_sitegen_config::{CONFIG_FILE_NAME, SiteConfig};
use markdown_sitegen_engine::{BuildOptions, build_site, io, render_document};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markdown-sitegen")]
#[command(about = "Builds a static HTML site from a folder of markdown files")]
#[command(version)]
struct Cli {
    /// Log debug output (RUST_LOG still takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page and copy static assets into the public directory
    Build(BuildArgs),
    /// Write a default site.toml
    Init {
        #[arg(long, default_value = CONFIG_FILE_NAME)]
        config: PathBuf,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Print the HTML fragment for one markdown file
    Render {
        file: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,
    #[arg(long)]
    content: Option<PathBuf>,
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,
    #[arg(long)]
    public: Option<PathBuf>,
    #[arg(long)]
    template: Option<PathBuf>,
}

impl BuildArgs {
    /// Loads the config file (if any) and lets command-line flags win.
    fn resolve(self) -> Result<SiteConfig> {
        let mut config = match SiteConfig::load_from_path(&self.config)? {
            Some(config) => {
                log::info!("Loaded config from {}", self.config.display());
                config
            }
            None => {
                log::info!(
                    "No config file at {}, using defaults",
                    self.config.display()
                );
                SiteConfig::default()
            }
        };

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(public) = self.public {
            config.public_dir = public;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command {
        Command::Build(args) => build(args),
        Command::Init { config, force } => init(&config, force),
        Command::Render { file } => render(&file),
    }
}

fn build(args: BuildArgs) -> Result<()> {
    let config = args.resolve()?;
    let options = BuildOptions {
        content_dir: config.content_dir,
        static_dir: config.static_dir,
        public_dir: config.public_dir,
        template_path: config.template_path,
        default_title: config.default_title,
    };

    let report = build_site(&options).with_context(|| {
        format!(
            "Failed to build site from {}",
            options.content_dir.display()
        )
    })?;

    println!(
        "Built {} pages and copied {} static files into {}",
        report.pages,
        report.static_files,
        options.public_dir.display()
    );
    Ok(())
}

fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite it",
            config_path.display()
        );
    }
    SiteConfig::default()
        .save_to_path(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn render(file: &Path) -> Result<()> {
    let markdown =
        io::read_file(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let html =
        render_document(&markdown).with_context(|| format!("Failed to render {}", file.display()))?;
    println!("{html}");
    Ok(())
}
