//! Server configuration: command-line flags layered over environment variables.
//!
//! Precedence for the bind address, highest first:
//!
//! 1. `--bind <addr>`
//! 2. `FREEFLOW_BIND_ADDR`
//! 3. `PORT` (listens on all interfaces)
//! 4. `127.0.0.1:3000`
//!
//! The identity header comes from `--identity-header`, then
//! `FREEFLOW_IDENTITY_HEADER`, then `x-user-id`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, SocketAddrV4};

use axum::http::HeaderName;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "FREEFLOW_BIND_ADDR";
pub const PORT_VAR: &str = "PORT";
pub const IDENTITY_HEADER_VAR: &str = "FREEFLOW_IDENTITY_HEADER";

pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 3000));
pub const DEFAULT_IDENTITY_HEADER: &str = "x-user-id";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address `{value}` (from {origin})")]
    InvalidBindAddr { value: String, origin: &'static str },

    #[error("invalid port `{0}` (from PORT)")]
    InvalidPort(String),

    #[error("invalid identity header name `{value}` (from {origin})")]
    InvalidHeaderName { value: String, origin: &'static str },
}

/// Flags accepted by `serve`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Address to listen on, e.g. 127.0.0.1:3000
    #[arg(long)]
    pub bind: Option<String>,

    /// Request header carrying the signed-in user's id
    #[arg(long)]
    pub identity_header: Option<String>,
}

/// Resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub identity_header: HeaderName,
}

#[cfg(test)]
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            identity_header: HeaderName::from_static(DEFAULT_IDENTITY_HEADER),
        }
    }
}

impl ServerConfig {
    /// Resolve against the process environment.
    pub fn from_env(args: &ServeArgs) -> Result<Self, ConfigError> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }

    /// Resolve against an arbitrary variable lookup.
    pub fn resolve<F>(args: &ServeArgs, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        let bind_addr = if let Some(value) = args.bind.as_deref() {
            parse_bind_addr(value, "--bind")?
        } else if let Some(value) = env(BIND_ADDR_VAR) {
            parse_bind_addr(&value, BIND_ADDR_VAR)?
        } else if let Some(value) = env(PORT_VAR) {
            let port = value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?;
            SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port)
        } else {
            DEFAULT_BIND_ADDR
        };

        let identity_header = if let Some(value) = args.identity_header.as_deref() {
            parse_header_name(value, "--identity-header")?
        } else if let Some(value) = env(IDENTITY_HEADER_VAR) {
            parse_header_name(&value, IDENTITY_HEADER_VAR)?
        } else {
            HeaderName::from_static(DEFAULT_IDENTITY_HEADER)
        };

        Ok(Self {
            bind_addr,
            identity_header,
        })
    }
}

fn parse_bind_addr(value: &str, origin: &'static str) -> Result<SocketAddr, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidBindAddr {
            value: value.to_owned(),
            origin,
        })
}

fn parse_header_name(value: &str, origin: &'static str) -> Result<HeaderName, ConfigError> {
    HeaderName::from_bytes(value.trim().as_bytes()).map_err(|_| ConfigError::InvalidHeaderName {
        value: value.to_owned(),
        origin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    fn args(bind: Option<&str>, header: Option<&str>) -> ServeArgs {
        ServeArgs {
            bind: bind.map(str::to_owned),
            identity_header: header.map(str::to_owned),
        }
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let config = ServerConfig::resolve(&ServeArgs::default(), env_of(&[])).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.identity_header.as_str(), "x-user-id");
    }

    #[test]
    fn flag_beats_environment() {
        let env = env_of(&[(BIND_ADDR_VAR, "127.0.0.1:9000"), (PORT_VAR, "8080")]);
        let config = ServerConfig::resolve(&args(Some("127.0.0.1:4000"), None), env).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:4000".parse().unwrap());
    }

    #[test]
    fn bind_addr_var_beats_port() {
        let env = env_of(&[(BIND_ADDR_VAR, "127.0.0.1:9000"), (PORT_VAR, "8080")]);
        let config = ServerConfig::resolve(&ServeArgs::default(), env).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
    }

    #[test]
    fn port_listens_on_all_interfaces() {
        let config = ServerConfig::resolve(&ServeArgs::default(), env_of(&[(PORT_VAR, "8080")]))
            .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn blank_variables_are_ignored() {
        let env = env_of(&[(BIND_ADDR_VAR, "  "), (PORT_VAR, "")]);
        let config = ServerConfig::resolve(&ServeArgs::default(), env).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn unparsable_values_are_errors() {
        let err = ServerConfig::resolve(&args(Some("localhost"), None), env_of(&[])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBindAddr {
                value: "localhost".into(),
                origin: "--bind",
            }
        );

        let err = ServerConfig::resolve(&ServeArgs::default(), env_of(&[(PORT_VAR, "http")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("http".into()));

        let err = ServerConfig::resolve(&ServeArgs::default(), env_of(&[(PORT_VAR, "70000")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("70000".into()));
    }

    #[test]
    fn identity_header_from_flag_then_env() {
        let env = env_of(&[(IDENTITY_HEADER_VAR, "X-Forwarded-User")]);
        let config = ServerConfig::resolve(&ServeArgs::default(), &env).unwrap();
        assert_eq!(config.identity_header.as_str(), "x-forwarded-user");

        let config = ServerConfig::resolve(&args(None, Some("x-auth-subject")), &env).unwrap();
        assert_eq!(config.identity_header.as_str(), "x-auth-subject");
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let err = ServerConfig::resolve(&args(None, Some("bad header")), env_of(&[])).unwrap_err();

        assert_eq!(
            err,
            ConfigError::InvalidHeaderName {
                value: "bad header".into(),
                origin: "--identity-header",
            }
        );
    }
}
