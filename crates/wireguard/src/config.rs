//! Client configuration for issued WireGuard peers
//!
//! A [`ClientConfig`] pairs a freshly generated client key with the
//! [`ServerSettings`] every client shares, and renders the `.conf` text a
//! WireGuard client imports.

use crate::error::{Error, Result};
use crate::keys::{KeyPair, PrivateKey, PublicKey};
use core::fmt;
use rand::Rng;
use std::net::Ipv4Addr;
use zeroize::Zeroizing;

/// Environment variable holding the server's base64 public key
pub const SERVER_PUBLIC_KEY_ENV: &str = "WG_SERVER_PUBLIC_KEY";

/// Environment variable holding the server's `host:port` endpoint
pub const SERVER_ENDPOINT_ENV: &str = "WG_SERVER_ENDPOINT";

/// Stand-in public key used when none is configured
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_SERVER_PUBLIC_KEY";

/// Stand-in endpoint used when none is configured
pub const PLACEHOLDER_ENDPOINT: &str = "YOUR_SERVER_IP:51820";

const DEFAULT_DNS: &str = "1.1.1.1, 8.8.8.8";
const DEFAULT_ALLOWED_IPS: &str = "0.0.0.0/0";
const DEFAULT_KEEPALIVE: u16 = 25;

const FILE_NAME_PREFIXES: [&str; 8] = [
    "cyber", "neon", "nova", "flux", "apex", "vortex", "quantum", "stellar",
];
const FILE_NAME_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const FILE_NAME_SUFFIX_LEN: usize = 8;

/// Server-side values shared by every issued configuration
///
/// The public key and endpoint are kept as text so that unconfigured
/// placeholders can still be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServerSettings {
    /// Base64 public key of the server peer
    pub public_key: String,
    /// `host:port` of the server peer
    pub endpoint: String,
    /// DNS servers pushed to the client
    pub dns: String,
    /// Routes sent through the tunnel
    pub allowed_ips: String,
    /// Keepalive interval in seconds
    pub persistent_keepalive: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
            endpoint: PLACEHOLDER_ENDPOINT.to_string(),
            dns: DEFAULT_DNS.to_string(),
            allowed_ips: DEFAULT_ALLOWED_IPS.to_string(),
            persistent_keepalive: DEFAULT_KEEPALIVE,
        }
    }
}

impl ServerSettings {
    /// Validated settings for a known server
    ///
    /// The key must be 32 bytes of base64 and the endpoint must be
    /// `host:port` with a numeric port.
    pub fn new(public_key: &str, endpoint: &str) -> Result<Self> {
        let key = PublicKey::from_base64(public_key)?;
        check_endpoint(endpoint)?;

        Ok(Self {
            public_key: key.to_base64(),
            endpoint: endpoint.to_string(),
            ..Self::default()
        })
    }

    /// Read the server key and endpoint from the environment
    ///
    /// Unset or blank variables fall back to placeholders; other values
    /// are not validated.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`ServerSettings::from_env`], with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let configured = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        match configured(SERVER_PUBLIC_KEY_ENV) {
            Some(key) => settings.public_key = key,
            None => log::info!(
                "{} not set, using placeholder server key",
                SERVER_PUBLIC_KEY_ENV
            ),
        }
        match configured(SERVER_ENDPOINT_ENV) {
            Some(endpoint) => settings.endpoint = endpoint,
            None => log::info!(
                "{} not set, using placeholder endpoint",
                SERVER_ENDPOINT_ENV
            ),
        }

        settings
    }

    /// Whether either the key or the endpoint is still a placeholder
    pub fn is_placeholder(&self) -> bool {
        self.public_key == PLACEHOLDER_PUBLIC_KEY || self.endpoint == PLACEHOLDER_ENDPOINT
    }
}

fn check_endpoint(endpoint: &str) -> Result<()> {
    let (host, port) = endpoint
        .rsplit_once(':')
        .ok_or_else(|| Error::InvalidEndpoint(endpoint.to_string()))?;
    if host.is_empty() || port.parse::<u16>().is_err() {
        return Err(Error::InvalidEndpoint(endpoint.to_string()));
    }
    Ok(())
}

/// Tunnel address of a client, derived from its numeric user id
///
/// Addresses run from 10.0.0.2 to 10.0.0.251; distinct ids may share one.
pub fn client_address(user_id: u64) -> Ipv4Addr {
    Ipv4Addr::new(10, 0, 0, (user_id % 250 + 2) as u8)
}

/// A random file name for a configuration, such as `neon_k3x9a0qz.conf`
pub fn config_file_name<R: Rng>(rng: &mut R) -> String {
    let prefix = FILE_NAME_PREFIXES[rng.gen_range(0..FILE_NAME_PREFIXES.len())];
    let suffix: String = (0..FILE_NAME_SUFFIX_LEN)
        .map(|_| FILE_NAME_CHARSET[rng.gen_range(0..FILE_NAME_CHARSET.len())] as char)
        .collect();
    format!("{}_{}.conf", prefix, suffix)
}

/// A client configuration ready to render
#[derive(Clone, Debug)]
pub struct ClientConfig {
    private_key: PrivateKey,
    address: Ipv4Addr,
    server: ServerSettings,
}

impl ClientConfig {
    /// Build a configuration for `keys` at `address`
    pub fn new(keys: &KeyPair, address: Ipv4Addr, server: &ServerSettings) -> Self {
        Self {
            private_key: keys.private_key().clone(),
            address,
            server: server.clone(),
        }
    }

    /// The client's tunnel address
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Render the `.conf` text
    ///
    /// The text contains the private key and is wiped on drop.
    pub fn render(&self) -> Zeroizing<String> {
        Zeroizing::new(self.to_string())
    }
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let private_key = self.private_key.to_base64();
        writeln!(f, "[Interface]")?;
        writeln!(f, "PrivateKey = {}", private_key.as_str())?;
        writeln!(f, "Address = {}/32", self.address)?;
        writeln!(f, "DNS = {}", self.server.dns)?;
        writeln!(f)?;
        writeln!(f, "[Peer]")?;
        writeln!(f, "PublicKey = {}", self.server.public_key)?;
        writeln!(f, "Endpoint = {}", self.server.endpoint)?;
        writeln!(f, "AllowedIPs = {}", self.server.allowed_ips)?;
        write!(
            f,
            "PersistentKeepalive = {}",
            self.server.persistent_keepalive
        )
    }
}
