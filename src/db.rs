use crate::config::ConnectionParams;
use crate::error::ConnectionFailure;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

/// Opens and closes a single database connection.
#[async_trait::async_trait]
pub trait DatabaseClient: Send + Sync {
    type Connection: Send;

    async fn connect(
        &self,
        params: &ConnectionParams,
    ) -> Result<Self::Connection, ConnectionFailure>;
    async fn close(&self, conn: Self::Connection) -> Result<(), ConnectionFailure>;
}

/// MySQL client backed by a plain sqlx connection (no pool).
pub struct MySqlClient;

impl MySqlClient {
    fn options(params: &ConnectionParams) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&params.host)
            .port(params.port)
            .username(&params.user);

        if params.password.is_empty() {
            options
        } else {
            options.password(&params.password)
        }
    }
}

#[async_trait::async_trait]
impl DatabaseClient for MySqlClient {
    type Connection = MySqlConnection;

    async fn connect(
        &self,
        params: &ConnectionParams,
    ) -> Result<MySqlConnection, ConnectionFailure> {
        tracing::debug!(host = %params.host, port = params.port, "opening MySQL connection");
        let conn = Self::options(params).connect().await?;
        Ok(conn)
    }

    async fn close(&self, conn: MySqlConnection) -> Result<(), ConnectionFailure> {
        conn.close().await?;
        tracing::debug!("MySQL connection closed");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::net::TcpListener;

    /// A local port with nothing listening on it.
    pub(crate) fn closed_port() -> u16 {
        // Bind then drop so nothing is listening on the port.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    }

    #[tokio::test]
    async fn connect_to_closed_port_fails() {
        let params = ConnectionParams {
            host: "127.0.0.1".to_string(),
            user: "root".to_string(),
            password: String::new(),
            port: closed_port(),
        };

        let result = MySqlClient.connect(&params).await;
        let err = result.err().expect("nothing should be listening");
        assert!(!err.to_string().is_empty());
    }
}
