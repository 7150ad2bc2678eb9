use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; actix picks one per physical core when unset
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            workers: None,
        }
    }

    pub(crate) fn from_vars<F>(var: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = var("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        // PORT is what serverless container platforms inject
        let port = var("SERVER_PORT")
            .or_else(|| var("PORT"))
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid SERVER_PORT"))?;

        let workers = var("SERVER_WORKERS")
            .map(|w| {
                w.parse::<usize>()
                    .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))
            })
            .transpose()?;

        Ok(ServerConfig {
            host,
            port,
            workers,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::configuration("SERVER_PORT must be greater than 0"));
        }

        if self.workers == Some(0) {
            return Err(AppError::configuration(
                "SERVER_WORKERS must be greater than 0",
            ));
        }

        Ok(())
    }
}
