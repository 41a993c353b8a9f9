use clap::{Parser, Subcommand};
use hilink::{config, content, generate, output, serve};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("HILINK_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("HILINK_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // called once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "hilink")]
#[command(about = "Static landing page for the Hilink camping app")]
#[command(long_about = "\
Static landing page for the Hilink camping app

The page content is compiled in. The source directory only supplies
optional configuration and static assets:

  site/
  ├── config.toml        # Palette, metadata base URL, preview server (optional)
  └── public/            # Images and icons → copied to the output root
      ├── hilink-logo.svg
      ├── camp.svg
      └── ...

Run 'hilink gen-config' to generate a documented config.toml.
Run 'hilink content' to print the content registry as JSON.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory (config.toml and assets)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Log filter used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render index.html and copy assets into the output directory
    Build,
    /// Validate config and content without writing anything
    Check,
    /// Print the content registry as JSON
    Content,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Build, then serve the output directory locally
    Serve {
        /// Port to listen on (overrides [serve] port)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Build => {
            println!("==> Building {}", cli.source.display());
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let registry = content::registry();
            registry.validate()?;
            output::print_check_output(registry, &cli.source, &config.assets_dir);
            println!("==> Content is valid");
        }
        Command::Content => {
            println!("{}", serde_json::to_string_pretty(content::registry())?);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Serve { port } => {
            let report = generate::generate(&cli.source, &cli.output)?;
            output::print_build_output(&report);
            serve::serve(
                &cli.output,
                &report.serve.interface,
                port.unwrap_or(report.serve.port),
            )?;
        }
    }

    Ok(())
}
