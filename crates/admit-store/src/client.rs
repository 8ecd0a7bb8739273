//! Store client and bounded-retry connection bootstrap.

use std::collections::BTreeMap;
use std::thread;

use tracing::{info, warn};

use crate::config::StoreConfig;
use crate::database::Database;
use crate::error::{Result, StoreError};

const URI_SCHEME: &str = "admitdb://";

/// A handle to the embedded store.
///
/// The client owns its databases; there is no ambient global state. Pass
/// the handle (or a database borrowed from it) to whatever needs the store.
#[derive(Debug, Default)]
pub struct StoreClient {
    databases: BTreeMap<String, Database>,
}

impl StoreClient {
    /// Connect using the given configuration, once.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUri`] when the connection string does
    /// not parse.
    pub fn connect(config: &StoreConfig) -> Result<Self> {
        let uri = config.connection_string();
        parse_uri(&uri)?;
        info!(host = %config.host, database = %config.database, "store connection established");
        Ok(Self::default())
    }

    /// Connect with the configured bounded retry: `max_retries` attempts
    /// separated by a fixed `retry_delay`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ConnectionExhausted`] after the final attempt
    /// fails.
    pub fn connect_with_retry(config: &StoreConfig) -> Result<Self> {
        let attempts = config.max_retries.max(1);
        for attempt in 1..=attempts {
            match Self::connect(config) {
                Ok(client) => return Ok(client),
                Err(error) => {
                    warn!(
                        attempt,
                        max_retries = attempts,
                        %error,
                        "store not ready"
                    );
                    if attempt < attempts {
                        thread::sleep(config.retry_delay);
                    }
                }
            }
        }
        Err(StoreError::ConnectionExhausted { attempts })
    }

    /// Borrow a database, creating it on first use.
    pub fn database(&mut self, name: &str) -> &mut Database {
        self.databases
            .entry(name.to_string())
            .or_insert_with(|| Database::new(name))
    }

    /// Names of databases touched so far, sorted.
    pub fn database_names(&self) -> Vec<String> {
        self.databases.keys().cloned().collect()
    }
}

fn parse_uri(uri: &str) -> Result<()> {
    let Some(rest) = uri.strip_prefix(URI_SCHEME) else {
        return Err(StoreError::InvalidUri {
            uri: uri.to_string(),
            reason: format!("expected scheme '{URI_SCHEME}'"),
        });
    };
    let authority = rest.split('/').next().unwrap_or("");
    let host = authority.rsplit('@').next().unwrap_or("");
    if host.is_empty() {
        return Err(StoreError::InvalidUri {
            uri: uri.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_connect_with_default_config() {
        let client = StoreClient::connect(&StoreConfig::default()).unwrap();
        assert!(client.database_names().is_empty());
    }

    #[test]
    fn test_connect_rejects_foreign_scheme() {
        let config = StoreConfig {
            uri: Some("mysql://localhost/".to_string()),
            ..StoreConfig::default()
        };
        let err = StoreClient::connect(&config).unwrap_err();
        assert!(matches!(err, StoreError::InvalidUri { .. }));
    }

    #[test]
    fn test_retry_budget_exhausts() {
        let config = StoreConfig {
            uri: Some("admitdb://".to_string()),
            max_retries: 3,
            retry_delay: Duration::from_millis(1),
            ..StoreConfig::default()
        };
        let err = StoreClient::connect_with_retry(&config).unwrap_err();
        assert!(matches!(err, StoreError::ConnectionExhausted { attempts: 3 }));
    }

    #[test]
    fn test_database_created_on_first_use() {
        let mut client = StoreClient::connect(&StoreConfig::default()).unwrap();
        client.database("medical_data");
        assert_eq!(client.database_names(), vec!["medical_data".to_string()]);
    }
}
