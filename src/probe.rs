//! Connectivity probe: echo the parameters, try one connection, report the outcome.

use crate::config::ConnectionParams;
use crate::db::DatabaseClient;
use std::io::Write;

pub const SUCCESS_LINE: &str = "✅ MySQL database connected successfully";
pub const FAILURE_PREFIX: &str = "❌ MySQL database connection failed:";

/// Attempt a single connection with `params`, writing diagnostics to `out`
/// and the failure line to `err`. Returns whether the database was reachable.
///
/// Connection errors never escape: they are reported and turned into `false`.
/// That includes a failure to close a connection that did open.
pub async fn test_connection<C, O, E>(
    client: &C,
    params: &ConnectionParams,
    out: &mut O,
    err: &mut E,
) -> bool
where
    C: DatabaseClient,
    O: Write,
    E: Write,
{
    // Report lines are best effort; a closed stdout must not change the result.
    writeln!(out, "Testing connection with:").ok();
    writeln!(out, "Host: {}", params.host).ok();
    writeln!(out, "User: {}", params.user).ok();
    writeln!(out, "Password: {}", params.masked_password()).ok();
    writeln!(out, "Port: {}", params.port).ok();

    let outcome = match client.connect(params).await {
        Ok(conn) => {
            writeln!(out, "{}", SUCCESS_LINE).ok();
            client.close(conn).await
        }
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = ?e, "MySQL connection check failed");
            writeln!(err, "{} {}", FAILURE_PREFIX, e).ok();
            false
        }
    }
}
