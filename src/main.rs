use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use usersvc::commands::{check_emails, print_demo_report, print_email_check_result, run_demo, DemoOptions};
use usersvc::UserServiceError;

/// usersvc - bounded in-process user record service
#[derive(Parser)]
#[command(name = "usersvc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create sample users and show the resulting records
    Demo {
        /// Override the user data path
        #[arg(long)]
        config_path: Option<String>,

        /// Override the maximum number of users
        #[arg(long)]
        max_users: Option<usize>,

        /// Print the final listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check email addresses against the creation rule
    CheckEmail {
        /// Addresses to check
        #[arg(required = true)]
        emails: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Demo {
            config_path,
            max_users,
            json,
        } => {
            let options = DemoOptions {
                config_path,
                max_users,
                json,
            };
            std::env::current_dir()
                .map_err(UserServiceError::from)
                .and_then(|root| run_demo(&root, &options))
                .and_then(|report| print_demo_report(&report, options.json))
        }

        Commands::CheckEmail { emails } => {
            let result = check_emails(&emails);
            print_email_check_result(&result);
            if !result.valid {
                std::process::exit(1);
            }
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
