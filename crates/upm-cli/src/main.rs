use clap::{Parser, Subcommand};
use upm::{
    commands::{install, list, registry::{self, RegistryAction}},
    GlobalOpts,
};
use upm_logger as logger;

#[derive(Parser)]
#[command(name = "upm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Unity package installer",
    long_about = "upm adds scoped registries and package dependencies to a Unity project's Packages/manifest.json without reformatting the dependency table."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install catalog packages into the project manifest
    Install {
        /// Optional package id to install (default: every catalog package)
        package: Option<String>,
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Manage scoped registries
    Registry {
        #[command(subcommand)]
        action: RegistryAction,
    },
    /// List registries and dependencies of the project manifest
    List,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level()) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    init_tracing();

    let result = match cli.command {
        Commands::Install { package, yes } => install::handle_install(package, yes, &cli.global),
        Commands::Registry { action } => registry::handle_registry(action, &cli.global),
        Commands::List => list::handle_list(&cli.global),
    };

    if let Err(e) = result {
        logger::error(&e.to_string());
        std::process::exit(1);
    }
}

/// Wire library tracing to stderr when UPM_LOG is set (e.g. UPM_LOG=debug)
fn init_tracing() {
    if std::env::var("UPM_LOG").is_err() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::from_env("UPM_LOG");
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
