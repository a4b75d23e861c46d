use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 80;

pub const HOST_VAR: &str = "RUN_UPLOAD_HOST";
pub const PORT_VAR: &str = "RUN_UPLOAD_PORT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("RUN_UPLOAD_HOST is not a valid IP address: {0}")]
    InvalidHost(String),

    #[error("RUN_UPLOAD_PORT is not a valid port number: {0}")]
    InvalidPort(String)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16
}

impl Default for ServerConfig {

    fn default() -> Self {

        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT
        }

    }

}

impl ServerConfig {

    /// Reads `RUN_UPLOAD_HOST` and `RUN_UPLOAD_PORT`, after loading a `.env`
    /// file if one exists. Unset or unparsable values fall back to `0.0.0.0:80`.
    pub fn from_env() -> Self {

        dotenvy::dotenv().ok();

        Self::from_values(
            std::env::var(HOST_VAR).ok(),
            std::env::var(PORT_VAR).ok()
        )

    }

    pub fn from_values(host: Option<String>, port: Option<String>) -> Self {

        let mut config = ServerConfig::default();

        if let Some(host) = host {
            match parse_host(&host) {
                Ok(parsed) => config.host = parsed,
                Err(e) => eprintln!("{}, using {}", e, config.host)
            }
        }

        if let Some(port) = port {
            match parse_port(&port) {
                Ok(parsed) => config.port = parsed,
                Err(e) => eprintln!("{}, using {}", e, config.port)
            }
        }

        config

    }

    pub fn socket_addr(&self) -> SocketAddr {

        SocketAddr::new(self.host, self.port)

    }

}

pub fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {

    value.trim().parse()
        .map_err(|_| ConfigError::InvalidHost(value.to_string()))

}

pub fn parse_port(value: &str) -> Result<u16, ConfigError> {

    value.trim().parse()
        .map_err(|_| ConfigError::InvalidPort(value.to_string()))

}
