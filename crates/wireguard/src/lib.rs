//! WireGuard key pairs and client configuration text.
//!
//! This crate wraps the X25519 primitive from `wgkeygen-algorithms` in the
//! types a configuration-issuing front end works with:
//!
//! - [`KeyPair`], [`PrivateKey`] and [`PublicKey`], with base64 text in the
//!   form WireGuard tools read and write
//! - [`ServerSettings`], the peer side of every issued configuration,
//!   loadable from the environment
//! - [`ClientConfig`], which renders a `.conf` file
//!
//! # Example
//!
//! ```no_run
//! use wgkeygen_wireguard::{client_address, ClientConfig, KeyPair, ServerSettings};
//!
//! # fn example() -> wgkeygen_wireguard::Result<()> {
//! let keys = KeyPair::generate()?;
//! let server = ServerSettings::from_env();
//! let config = ClientConfig::new(&keys, client_address(1234), &server);
//! println!("{}", config);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod keys;

pub use config::{client_address, config_file_name, ClientConfig, ServerSettings};
pub use error::{Error, Result};
pub use keys::{KeyPair, PrivateKey, PublicKey, WG_KEY_BASE64_LEN, WG_KEY_SIZE};
