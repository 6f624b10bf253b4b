//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::{AppError, Command};

#[derive(Parser)]
#[command(name = "deploy")]
#[command(version)]
#[command(about = "Generate and run Ansible deploy playbooks from deploy.yml", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log pipeline steps to stderr
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an example deploy.yml in the working directory
    Init,
    /// Generate inventories, group variables and service playbooks
    #[clap(visible_alias = "g")]
    Generate,
    /// Show services and the actions available for them
    #[clap(visible_alias = "ls")]
    List,
    /// Show the status of a service's containers
    Status(ActionArgs),
    /// Build a service's containers
    Build(ActionArgs),
    /// Deploy a service's containers
    Deploy(ActionArgs),
    /// Start a service's containers
    Start(ActionArgs),
    /// Stop a service's containers
    Stop(ActionArgs),
    /// Restart a service's containers
    Restart(ActionArgs),
    /// Stop the previous version of a service and start the new one
    Upgrade(ActionArgs),
    /// Stop the new version of a service and start the previous one
    Rollback(ActionArgs),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Args)]
struct ActionArgs {
    /// Target environment (selects inventory-<environment>.ini)
    environment: String,
    /// Service to act on
    service: Option<String>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_exit_code(&e));
        }
    };
    init_tracing(cli.verbose);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `--help` and `--version` succeed; every usage error exits 1.
fn parse_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() { 1 } else { 0 }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Init => run_init(config),
        Commands::Generate => run_generate(config),
        Commands::List => run_list(config),
        Commands::Status(args) => run_action(config, Command::Status, args),
        Commands::Build(args) => run_action(config, Command::Build, args),
        Commands::Deploy(args) => run_action(config, Command::Deploy, args),
        Commands::Start(args) => run_action(config, Command::Start, args),
        Commands::Stop(args) => run_action(config, Command::Stop, args),
        Commands::Restart(args) => run_action(config, Command::Restart, args),
        Commands::Upgrade(args) => run_action(config, Command::Upgrade, args),
        Commands::Rollback(args) => run_action(config, Command::Rollback, args),
        Commands::Unknown(args) => unknown_command(&args),
    }
}

fn run_init(config: Option<&Path>) -> Result<(), AppError> {
    let path = crate::init(config)?;
    println!("✅ Created {}", path.display());
    Ok(())
}

fn run_generate(config: Option<&Path>) -> Result<(), AppError> {
    let outcome = crate::generate(config)?;
    println!(
        "✅ Generated {} inventories and {} playbooks in {}",
        outcome.inventories.len(),
        outcome.playbooks.len(),
        outcome.deploy_dir.display()
    );
    Ok(())
}

fn run_list(config: Option<&Path>) -> Result<(), AppError> {
    let outcome = crate::list(config)?;

    println!("Environments: {}", outcome.environments.join(", "));
    println!("Services:");
    for entry in &outcome.services {
        let actions: Vec<_> = entry.actions.iter().map(Command::name).collect();
        if actions.is_empty() {
            println!("  {}", entry.service);
        } else {
            println!("  {}: {}", entry.service, actions.join(", "));
        }
    }
    if !outcome.generated {
        println!("Deploy directory not generated yet. Run 'deploy generate' first.");
    }
    Ok(())
}

fn run_action(config: Option<&Path>, command: Command, args: ActionArgs) -> Result<(), AppError> {
    crate::run_action(config, command, &args.environment, args.service.as_deref())?;
    Ok(())
}

fn unknown_command(args: &[String]) -> Result<(), AppError> {
    let name = args.first().cloned().unwrap_or_default();
    Err(AppError::UnknownCommand(name))
}
