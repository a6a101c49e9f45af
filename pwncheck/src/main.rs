use std::time::Duration;

use clap::Parser;
use pwncheck_client::{MatchResult, RangeClient, Secret, check_password};

#[derive(Parser, Debug)]
#[command(name = "pwncheck")]
#[command(about = "Check whether a password appears in the Have I Been Pwned breach corpus")]
struct Args {
    /// Password to check. If not specified, the password is read
    /// interactively without echo.
    password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error("failed to read password: {0}")]
    Prompt(#[from] std::io::Error),

    #[error(transparent)]
    Check(#[from] pwncheck_client::Error),
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = Args::parse();

    // Move the password out of the parsed arguments so the Secret owns the
    // only live copy.
    let secret = match args.password.take() {
        Some(password) => Secret::new(password),
        None => Secret::new(rpassword::prompt_password("Password to check: ")?),
    };

    let client = RangeClient::new(Duration::from_secs(args.timeout));

    match check_password(secret, &client)? {
        MatchResult::Found(count) => {
            println!("Password found in HIBP DB; appears {count} times.");
        }
        MatchResult::NotFound => {
            println!("Password not found in HIBP DB!");
        }
    }

    Ok(())
}
