use clap::{Parser, Subcommand, ValueEnum};
use folio::{config, content, generate, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Static generator for a one-page developer portfolio")]
#[command(long_about = "\
Static generator for a one-page developer portfolio

Everything on the page comes from one catalog file. The project with
id = \"main\" is featured in the work section; the first two other projects
fill the secondary slots.

Content structure:

  content/
  ├── config.toml      # Site settings, palette, animation timings (optional)
  ├── content.toml     # The catalog: projects, words, counters, testimonials...
  └── assets/          # Copied verbatim to the output root (images, models)

Output:

  dist/
  ├── index.html
  ├── style.<hash>.css
  ├── motion.<hash>.js
  └── ...assets

Run 'folio gen-config' for a documented config.toml and 'folio gen-content'
for a sample catalog.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log line format on stderr (level from RUST_LOG, default info)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty, global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Render the site into the output directory
    Build,
    /// Load config and catalog, report what the page would show
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the sample content.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            let catalog = content::load_catalog(&cli.source)?;
            println!("==> Generating {} → {}", cli.source.display(), cli.output.display());
            let report = generate::generate(&catalog, &config, &cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let catalog = content::load_catalog(&cli.source)?;
            let files = source_files(&cli.source, &config.site.assets_dir);
            output::print_check_output(&catalog, &catalog.diagnostics(), &files);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

/// Structured logs on stderr; stdout stays reserved for command output.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn source_files(source: &Path, assets_dir: &str) -> output::SourceFiles {
    output::SourceFiles {
        has_config: source.join(config::CONFIG_FILENAME).exists(),
        has_catalog: source.join(content::CATALOG_FILENAME).exists(),
        assets_dir: source
            .join(assets_dir)
            .is_dir()
            .then(|| assets_dir.to_string()),
    }
}
