mod cmd;
mod prompt;
mod root;

use clap::{Parser, Subcommand};
use extdev_core::skeleton::{RemoteSkeletons, SKEL_BASE_URL};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "extdev",
    about = "CLI to help with DokuWiki plugin and template development.\n\n\
             Run this tool from within the extension's directory.",
    version,
    propagate_version = true
)]
struct Cli {
    /// DokuWiki installation root (default: walk upward looking for doku.php)
    #[arg(long, global = true, env = "DOKU_INC")]
    base: Option<PathBuf>,

    /// Base URL skeleton files are downloaded from
    #[arg(long, global = true, env = "EXTDEV_SKEL_BASE", default_value = SKEL_BASE_URL)]
    skel_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new plugin or template in the current (empty) directory
    Init,

    /// Add the testing framework files and a test (_test/)
    AddTest {
        /// Name of the new test; defaults to the general test
        test: Option<String>,
    },

    /// Add the configuration files (conf/)
    AddConf,

    /// Add the language files (lang/)
    AddLang,

    /// Add a new plugin component
    AddComponent {
        /// Type of the component: auth, admin, syntax, action, renderer,
        /// helper, remote or cli
        #[arg(value_name = "TYPE")]
        component_type: String,

        /// Name of the component; defaults to a base component
        name: Option<String>,
    },

    /// Create the list of deleted files based on the git history
    DeletedFiles,

    /// Delete obsolete files
    RmObsolete,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let base = cli.base.as_deref();
    let skeletons = RemoteSkeletons::new(cli.skel_base);

    let result = match cli.command {
        Commands::Init => cmd::init::run(base, &skeletons),
        Commands::AddTest { test } => cmd::add_test::run(base, &skeletons, test.as_deref()),
        Commands::AddConf => cmd::add_conf::run(base, &skeletons),
        Commands::AddLang => cmd::add_lang::run(base, &skeletons),
        Commands::AddComponent {
            component_type,
            name,
        } => cmd::add_component::run(base, &skeletons, &component_type, name.as_deref()),
        Commands::DeletedFiles => cmd::deleted_files::run(),
        Commands::RmObsolete => cmd::rm_obsolete::run(),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
