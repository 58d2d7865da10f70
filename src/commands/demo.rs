use std::path::Path;
use tracing::{info, warn};

use crate::core::{load_config, validate_email, UserService};
use crate::error::UserServiceError;
use crate::models::User;

/// Sample users created by the demo, in creation order
pub const SAMPLE_USERS: [(&str, &str); 3] = [
    ("Alice Johnson", "alice@example.com"),
    ("Bob Smith", "bob@example.com"),
    ("Charlie Brown", "charlie@example.com"),
];

/// Options for the demo command
#[derive(Debug, Default)]
pub struct DemoOptions {
    pub config_path: Option<String>,
    pub max_users: Option<usize>,
    pub json: bool,
}

/// Outcome of a demo run
#[derive(Debug)]
pub struct DemoReport {
    /// Users as they were when created
    pub created: Vec<User>,
    /// Serialized form of the first created user
    pub first_user_dict: Option<String>,
    /// The first user after renaming
    pub updated: Option<User>,
    /// Listing taken at the end of the run
    pub users: Vec<User>,
    /// Sample users the service refused, with the reason
    pub skipped: Vec<String>,
    pub ready: bool,
}

/// Drive a service through the sample workflow
pub fn run_demo(project_root: &Path, options: &DemoOptions) -> Result<DemoReport, UserServiceError> {
    let config = load_config(project_root, options.config_path.clone(), options.max_users)?;

    let mut service = UserService::from_config(&config);
    service.initialize();

    let mut created = Vec::new();
    let mut skipped = Vec::new();
    for (name, email) in SAMPLE_USERS {
        if !validate_email(email) {
            warn!("Invalid email: {}", email);
            continue;
        }
        match service.try_create_user(name, email) {
            Ok(user) => {
                info!("Created user: {} ({})", user.name, user.id);
                created.push(user.clone());
            }
            Err(e) if e.is_rejection() => {
                warn!("Could not create {}: {}", name, e);
                skipped.push(format!("{}: {}", name, e));
            }
            Err(e) => return Err(e),
        }
    }

    let first_user_dict = created.first().map(User::to_dict);

    let updated = match created.first() {
        Some(first) => service.update_user(first.id, Some("Alice Cooper"), None).cloned(),
        None => None,
    };

    let users = service.list_users(service.capacity());

    Ok(DemoReport {
        created,
        first_user_dict,
        updated,
        users,
        skipped,
        ready: service.is_ready(),
    })
}

/// Print demo report
pub fn print_demo_report(report: &DemoReport, json: bool) -> Result<(), UserServiceError> {
    println!("=== usersvc Demo ===\n");

    for user in &report.created {
        println!("Created user: {} ({})", user.name, user.id);
    }

    if let Some(ref dict) = report.first_user_dict {
        println!("\nFirst user details: {}", dict);
    }

    if let Some(ref updated) = report.updated {
        println!("Updated user: {}", updated.name);
    }

    for reason in &report.skipped {
        println!("Skipped user: {}", reason);
    }

    println!("\nTotal users: {}", report.users.len());
    if json {
        let listing = serde_json::to_string_pretty(&report.users)?;
        println!("{}", listing);
    } else {
        for user in &report.users {
            println!("  {}", user.to_dict());
        }
    }

    if report.ready {
        println!("\nService is ready");
    }

    Ok(())
}
