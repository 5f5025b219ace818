/**
 * db-check - MySQL connectivity check
 *
 * Reads DB_HOST, DB_USER, DB_PASSWORD and DB_PORT (from the environment,
 * `.env.local` or `.env`), opens one connection, reports the outcome and
 * exits 0 when the database is reachable, 1 when it is not and 2 when the
 * configuration is unusable.
 */

use std::io;
use std::process::ExitCode;

mod config;  // Connection parameters from the environment
mod db;      // Database client capability and MySQL implementation
mod error;   // Configuration and connection errors
mod logging; // tracing subscriber setup
mod probe;   // The connectivity probe itself

use config::ConnectionParams;
use db::MySqlClient;
use error::ConfigError;

const EXIT_REACHABLE: u8 = 0;
const EXIT_UNREACHABLE: u8 = 1;
/// Exit status for an unusable configuration (e.g. a non-numeric DB_PORT).
const EXIT_CONFIG_ERROR: u8 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // .env.local takes precedence over .env; real env vars win over both
    dotenv::from_filename(".env.local").ok();
    dotenv::dotenv().ok();

    logging::init_logger();

    let outcome = match ConnectionParams::from_env() {
        Ok(params) => {
            tracing::debug!(?params, "resolved connection parameters");
            let mut out = io::stdout();
            let mut err = io::stderr();
            Ok(probe::test_connection(&MySqlClient, &params, &mut out, &mut err).await)
        }
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            Err(e)
        }
    };

    ExitCode::from(exit_status(&outcome))
}

/// Map the probe outcome to the process exit status.
fn exit_status(outcome: &Result<bool, ConfigError>) -> u8 {
    match outcome {
        Ok(true) => EXIT_REACHABLE,
        Ok(false) => EXIT_UNREACHABLE,
        Err(_) => EXIT_CONFIG_ERROR,
    }
}
