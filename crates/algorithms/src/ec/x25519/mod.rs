//! X25519 Elliptic Curve Primitives
//!
//! This module implements scalar multiplication on Curve25519 in Montgomery
//! form, v² = u³ + 486662·u² + u over GF(p) with p = 2^255 - 19, following
//! RFC 7748:
//! - field arithmetic on five 51-bit limbs ([`FieldElement`])
//! - fixed-width little-endian scalar codec and clamping ([`scalar`])
//! - the Montgomery ladder over projective u-coordinates ([`ladder`])
//! - key-pair generation against the base point u = 9 ([`generate_keypair`])
//!
//! No u-coordinate is ever rejected. All-zero and low-order inputs produce
//! the defined, degenerate output of the ladder rather than an error.

mod constants;
mod field;
pub mod scalar;

pub use constants::{X25519_FIELD_ELEMENT_SIZE, X25519_POINT_SIZE, X25519_SCALAR_SIZE};
pub use field::FieldElement;
pub use scalar::{clamp, clamp_in_place, decode_le, encode_le, Scalar};

use crate::error::{Error, Result};
use alloc::string::ToString;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConditionallySelectable};
use wgkeygen_common::security::SecretBuffer;
use wgkeygen_params::traditional::ecdh::{X25519_BASE_POINT_U, X25519_LADDER_BITS};

/// Encoding of the standard base point u = 9
pub fn base_point_u() -> [u8; X25519_POINT_SIZE] {
    let mut u = [0u8; X25519_POINT_SIZE];
    u[0] = X25519_BASE_POINT_U;
    u
}

/// Montgomery-ladder scalar multiplication: `scalar · u`
///
/// The scalar is used exactly as given; callers deriving keys clamp it
/// first (see [`x25519`]). The u-coordinate is decoded with bit 255 masked
/// and values ≥ p reduced. The result is the canonical encoding of the
/// affine u-coordinate of the product.
pub fn ladder(
    scalar: &[u8; X25519_SCALAR_SIZE],
    u: &[u8; X25519_POINT_SIZE],
) -> [u8; X25519_POINT_SIZE] {
    let k = Scalar::from_bytes(scalar);
    let x1 = FieldElement::from_bytes(u);
    montgomery_ladder(&k, &x1).to_bytes()
}

/// The X25519 function of RFC 7748: clamp the scalar, then run the ladder
pub fn x25519(
    scalar: &[u8; X25519_SCALAR_SIZE],
    u: &[u8; X25519_POINT_SIZE],
) -> [u8; X25519_POINT_SIZE] {
    let mut clamped = SecretBuffer::new(*scalar);
    clamp_in_place(clamped.as_mut_array());
    ladder(clamped.as_array(), u)
}

/// X25519 against the base point: the public key of `scalar`
pub fn x25519_base(scalar: &[u8; X25519_SCALAR_SIZE]) -> [u8; X25519_POINT_SIZE] {
    x25519(scalar, &base_point_u())
}

/// Generate an X25519 key pair
///
/// Draws 32 bytes from `rng`, clamps them into the private scalar and
/// multiplies the base point by it. Returns `(private, public)`.
///
/// A failing source surfaces as [`Error::InsufficientEntropy`]. The call
/// never retries and never falls back to another source.
pub fn generate_keypair<R: CryptoRng + RngCore>(
    rng: &mut R,
) -> Result<(SecretBuffer<X25519_SCALAR_SIZE>, [u8; X25519_POINT_SIZE])> {
    let mut private = SecretBuffer::<X25519_SCALAR_SIZE>::zeroed();

    rng.try_fill_bytes(private.as_mut())
        .map_err(|e| Error::InsufficientEntropy {
            operation: "x25519 keypair generation",
            details: e.to_string(),
        })?;

    clamp_in_place(private.as_mut_array());
    let public = ladder(private.as_array(), &base_point_u());

    Ok((private, public))
}

/// The ladder proper, on decoded values
///
/// Invariant at the top of each iteration, for the bits of k above t:
/// (x2:z2) = [m]P and (x3:z3) = [m+1]P, up to the pending swap. All 255
/// iterations run for every scalar, and the swaps are masked.
fn montgomery_ladder(k: &Scalar, x1: &FieldElement) -> FieldElement {
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = *x1;
    let mut z3 = FieldElement::ONE;
    let mut swap = Choice::from(0u8);

    for t in (0..X25519_LADDER_BITS).rev() {
        let k_t = k.bit(t);
        swap ^= k_t;
        FieldElement::conditional_swap(&mut x2, &mut x3, swap);
        FieldElement::conditional_swap(&mut z2, &mut z3, swap);
        swap = k_t;

        let a = x2.add(&z2);
        let aa = a.square();
        let b = x2.sub(&z2);
        let bb = b.square();
        let e = aa.sub(&bb);
        let c = x3.add(&z3);
        let d = x3.sub(&z3);
        let da = d.mul(&a);
        let cb = c.mul(&b);

        x3 = da.add(&cb).square();
        z3 = x1.mul(&da.sub(&cb).square());
        x2 = aa.mul(&bb);
        z2 = e.mul(&aa.add(&FieldElement::A24.mul(&e)));
    }

    FieldElement::conditional_swap(&mut x2, &mut x3, swap);
    FieldElement::conditional_swap(&mut z2, &mut z3, swap);

    x2.mul(&z2.invert())
}
