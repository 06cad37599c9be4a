//! Creates an admin account from the command line.
//!
//! Reads the database settings from the same environment as the server.

use std::io::{self, BufRead, Write};

use clap::Parser;
use contract_desk::server::{
    config::Config, error::Error, service::user::UserService, startup,
};
use dioxus_logger::tracing;

#[derive(Parser, Debug)]
#[command(name = "seed-admin", about = "Create an admin account")]
struct Args {
    /// Username of the new admin
    #[arg(long, default_value = "admin")]
    username: String,

    /// Password of the new admin, prompted for when not given
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match seed(&config, args).await {
        Ok(true) => println!("Admin account created"),
        Ok(false) => println!("Username is already taken, nothing changed"),
        Err(e) => {
            tracing::error!("Failed to create admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn seed(config: &Config, args: Args) -> Result<bool, Error> {
    let password = match args.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let db = startup::connect_to_database(config).await?;

    UserService::new(&db)
        .seed_admin(&args.username, &password)
        .await
}

fn prompt_password() -> Result<String, Error> {
    print!("Password: ");
    io::stdout().flush()?;

    let mut password = String::new();
    io::stdin().lock().read_line(&mut password)?;

    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}
