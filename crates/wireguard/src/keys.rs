//! WireGuard key types
//!
//! Keys are exchanged as 32-byte values written in standard, padded base64
//! (44 characters), the form `wg genkey` and `wg pubkey` produce.

use crate::error::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use core::fmt;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use wgkeygen_algorithms::{generate_keypair, validate, x25519_base};
use wgkeygen_api::{ResultExt, Serialize, SerializeSecret};
use wgkeygen_common::SecretBuffer;
use wgkeygen_internal::ct_eq;
use zeroize::Zeroizing;

/// Size of a WireGuard key in bytes
pub const WG_KEY_SIZE: usize = 32;

/// Length of a key in standard padded base64
pub const WG_KEY_BASE64_LEN: usize = 44;

fn decode_key(s: &str) -> Result<Zeroizing<[u8; WG_KEY_SIZE]>> {
    let bytes = Zeroizing::new(
        STANDARD
            .decode(s.trim())
            .map_err(|e| Error::InvalidKey(e.to_string()))?,
    );
    if bytes.len() != WG_KEY_SIZE {
        return Err(Error::InvalidKey(format!(
            "expected {} bytes, got {}",
            WG_KEY_SIZE,
            bytes.len()
        )));
    }
    let mut key = Zeroizing::new([0u8; WG_KEY_SIZE]);
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// A WireGuard private key
///
/// The bytes are kept as given. Public-key derivation clamps them, so an
/// unclamped key imported from elsewhere still yields the public key
/// WireGuard would compute for it. Keys produced by [`KeyPair::generate`]
/// are already clamped.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(SecretBuffer<WG_KEY_SIZE>);

impl PrivateKey {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; WG_KEY_SIZE]) -> Self {
        PrivateKey(SecretBuffer::new(bytes))
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8; WG_KEY_SIZE] {
        self.0.as_array()
    }

    /// Parse a key from base64 text
    pub fn from_base64(s: &str) -> Result<Self> {
        let key = decode_key(s)?;
        Ok(Self::new(*key))
    }

    /// Encode the key as base64 text; the string is wiped on drop
    pub fn to_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(STANDARD.encode(self.0.as_array()))
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from(self)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey([REDACTED])")
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> wgkeygen_api::Result<Self> {
        let key = Zeroizing::new(validate::fixed_bytes::<WG_KEY_SIZE>("PrivateKey", bytes)?);
        Ok(Self::new(*key))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

/// A WireGuard public key
#[derive(Clone, Copy)]
pub struct PublicKey([u8; WG_KEY_SIZE]);

impl PublicKey {
    /// Wrap raw key bytes
    pub fn new(bytes: [u8; WG_KEY_SIZE]) -> Self {
        PublicKey(bytes)
    }

    /// Borrow the raw key bytes
    pub fn as_bytes(&self) -> &[u8; WG_KEY_SIZE] {
        &self.0
    }

    /// Parse a key from base64 text
    pub fn from_base64(s: &str) -> Result<Self> {
        let key = decode_key(s)?;
        Ok(Self::new(*key))
    }

    /// Encode the key as base64 text
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private: &PrivateKey) -> Self {
        PublicKey(x25519_base(private.as_bytes()))
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_base64())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> wgkeygen_api::Result<Self> {
        Ok(Self::new(validate::fixed_bytes::<WG_KEY_SIZE>(
            "PublicKey",
            bytes,
        )?))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PublicKey {
    fn serialize<S: serde::Serializer>(&self, s: S) -> core::result::Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_base64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PublicKey {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> core::result::Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        PublicKey::from_base64(&s).map_err(serde::de::Error::custom)
    }
}

/// A private key together with its public key
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair from the operating system's random source
    pub fn generate() -> Result<Self> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generate a key pair from the given random source
    ///
    /// A source that cannot deliver 32 bytes fails the call with an
    /// entropy error; no other source is tried.
    pub fn generate_with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self> {
        let (private, public) = generate_keypair(rng)
            .with_context("wireguard keypair generation")
            .map_err(|e| {
                log::warn!("Key generation failed: {}", e);
                e
            })?;

        let pair = KeyPair {
            private: PrivateKey(private),
            public: PublicKey(public),
        };
        log::debug!("Generated key pair with public key {}", pair.public);
        Ok(pair)
    }

    /// Build a key pair around an existing private key
    pub fn from_private(private: PrivateKey) -> Self {
        let public = PublicKey::from(&private);
        KeyPair { private, public }
    }

    /// The private half
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Split into `(private, public)`
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
