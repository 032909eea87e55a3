//! Curve25519 field arithmetic implementation

use crate::ec::x25519::constants::{FIELD_LIMBS, SCALAR_WORDS, X25519_FIELD_ELEMENT_SIZE};
use crate::ec::x25519::scalar::{decode_le, encode_le};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use wgkeygen_internal::constant_time::ct_is_zero;
use wgkeygen_params::traditional::ecdh::{X25519_A24, X25519_FIELD_PRIME_MINUS_TWO};

/// Mask selecting the low 51 bits of a limb
const LOW_51_BIT_MASK: u64 = (1u64 << 51) - 1;

/// Curve25519 field element representing values in GF(2^255 - 19)
///
/// Internally stored as 5 little-endian 51-bit limbs held in `u64`s.
/// Every public operation returns the canonical limbs of a value in
/// [0, p), so two elements are equal exactly when their limbs are.
#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub(crate) [u64; FIELD_LIMBS]);

impl FieldElement {
    /// 2p as limbs, added before subtracting so no limb underflows
    const TWO_P_LIMBS: [u64; FIELD_LIMBS] = [
        0xf_ffff_ffff_ffda, // 2⁵² - 38
        0xf_ffff_ffff_fffe,
        0xf_ffff_ffff_fffe,
        0xf_ffff_ffff_fffe,
        0xf_ffff_ffff_fffe,
    ];

    /// The additive identity element: 0
    pub const ZERO: FieldElement = FieldElement([0, 0, 0, 0, 0]);

    /// The multiplicative identity element: 1
    pub const ONE: FieldElement = FieldElement([1, 0, 0, 0, 0]);

    /// The ladder constant a24 = (A - 2) / 4 = 121665
    pub const A24: FieldElement = FieldElement([X25519_A24 as u64, 0, 0, 0, 0]);

    /// The additive identity element: 0
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// The multiplicative identity element: 1
    pub fn one() -> Self {
        Self::ONE
    }

    /// Decode a field element from its 32-byte little-endian encoding
    ///
    /// Bit 255 is ignored and values in [p, 2^255) are reduced, so every
    /// 32-byte string is accepted, as X25519 requires for u-coordinates.
    pub fn from_bytes(bytes: &[u8; X25519_FIELD_ELEMENT_SIZE]) -> Self {
        let w = decode_le(bytes);

        let limbs = [
            w[0] & LOW_51_BIT_MASK,
            ((w[0] >> 51) | (w[1] << 13)) & LOW_51_BIT_MASK,
            ((w[1] >> 38) | (w[2] << 26)) & LOW_51_BIT_MASK,
            ((w[2] >> 25) | (w[3] << 39)) & LOW_51_BIT_MASK,
            (w[3] >> 12) & LOW_51_BIT_MASK,
        ];

        Self::reduce(limbs)
    }

    /// Encode the field element as 32 little-endian bytes
    ///
    /// The output is canonical: it is always the encoding of a value below
    /// p and bit 255 is always clear.
    pub fn to_bytes(&self) -> [u8; X25519_FIELD_ELEMENT_SIZE] {
        let l = &self.0;
        let words: [u64; SCALAR_WORDS] = [
            l[0] | (l[1] << 51),
            (l[1] >> 13) | (l[2] << 38),
            (l[2] >> 26) | (l[3] << 25),
            (l[3] >> 39) | (l[4] << 12),
        ];
        encode_le(&words)
    }

    /// Field addition: (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = [0u64; FIELD_LIMBS];
        for (i, limb) in sum.iter_mut().enumerate() {
            *limb = self.0[i] + other.0[i];
        }
        Self::reduce(sum)
    }

    /// Field subtraction: (self - other) mod p
    ///
    /// Adds 2p limb by limb first, so every intermediate stays non-negative
    /// for canonical operands.
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = [0u64; FIELD_LIMBS];
        for (i, limb) in diff.iter_mut().enumerate() {
            *limb = (self.0[i] + Self::TWO_P_LIMBS[i]) - other.0[i];
        }
        Self::reduce(diff)
    }

    /// Field multiplication: (self * other) mod p
    ///
    /// Schoolbook product on 128-bit accumulators. Limb products that land
    /// at or above 2^255 are folded back in with the factor 19, since
    /// 2^255 ≡ 19 (mod p).
    pub fn mul(&self, other: &Self) -> Self {
        let a = self.0.map(|x| x as u128);
        let b = other.0.map(|x| x as u128);

        let b1_19 = b[1] * 19;
        let b2_19 = b[2] * 19;
        let b3_19 = b[3] * 19;
        let b4_19 = b[4] * 19;

        let mut r = [
            a[0] * b[0] + a[1] * b4_19 + a[2] * b3_19 + a[3] * b2_19 + a[4] * b1_19,
            a[0] * b[1] + a[1] * b[0] + a[2] * b4_19 + a[3] * b3_19 + a[4] * b2_19,
            a[0] * b[2] + a[1] * b[1] + a[2] * b[0] + a[3] * b4_19 + a[4] * b3_19,
            a[0] * b[3] + a[1] * b[2] + a[2] * b[1] + a[3] * b[0] + a[4] * b4_19,
            a[0] * b[4] + a[1] * b[3] + a[2] * b[2] + a[3] * b[1] + a[4] * b[0],
        ];

        // Carry propagation back down to (roughly) 51-bit limbs
        let mask = LOW_51_BIT_MASK as u128;
        for i in 0..FIELD_LIMBS - 1 {
            let carry = r[i] >> 51;
            r[i] &= mask;
            r[i + 1] += carry;
        }
        let carry = r[4] >> 51;
        r[4] &= mask;
        r[0] += carry * 19;

        Self::reduce(r.map(|x| x as u64))
    }

    /// Field squaring: self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Modular exponentiation by a 32-byte little-endian exponent
    ///
    /// Right-to-left square-and-multiply over all 256 exponent bits. Each
    /// step computes the product and keeps it with a constant-time select,
    /// so the running time does not depend on the exponent.
    pub fn pow(&self, exponent: &[u8; 32]) -> Self {
        let mut result = Self::ONE;
        let mut base = *self;

        for &byte in exponent.iter() {
            for bit in 0..8 {
                let product = result.mul(&base);
                let choice = Choice::from((byte >> bit) & 1);
                result = Self::conditional_select(&result, &product, choice);
                base = base.square();
            }
        }

        result
    }

    /// Compute the modular multiplicative inverse using Fermat's Little Theorem
    ///
    /// For prime p, a^(p-1) ≡ 1 (mod p), so a^(p-2) ≡ a^(-1) (mod p).
    /// Zero has no inverse; this returns zero for it instead of failing,
    /// which keeps the ladder total over degenerate inputs.
    pub fn invert(&self) -> Self {
        self.pow(&X25519_FIELD_PRIME_MINUS_TWO)
    }

    /// Constant-time check for the additive identity
    pub fn is_zero(&self) -> Choice {
        ct_is_zero(&self.to_bytes())
    }

    /// Bring limbs of a value below 2p into canonical form
    ///
    /// Each input limb must fit comfortably in 64 bits (below 2^63). A weak
    /// carry pass leaves a value below 2^255 + 2^19; then q = 1 exactly when
    /// that value is at least p, found by carrying 19 through the limbs,
    /// and q·p is subtracted.
    fn reduce(mut limbs: [u64; FIELD_LIMBS]) -> Self {
        // Weak reduction
        for i in 0..FIELD_LIMBS - 1 {
            limbs[i + 1] += limbs[i] >> 51;
            limbs[i] &= LOW_51_BIT_MASK;
        }
        let carry = limbs[4] >> 51;
        limbs[4] &= LOW_51_BIT_MASK;
        limbs[0] += carry * 19;

        // q = floor((value + 19) / 2^255)
        let mut q = (limbs[0] + 19) >> 51;
        for limb in limbs.iter().skip(1) {
            q = (limb + q) >> 51;
        }

        // value + 19q - q·2^255 = value - q·p
        limbs[0] += 19 * q;
        for i in 0..FIELD_LIMBS - 1 {
            limbs[i + 1] += limbs[i] >> 51;
            limbs[i] &= LOW_51_BIT_MASK;
        }
        limbs[4] &= LOW_51_BIT_MASK;

        FieldElement(limbs)
    }
}

impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        Self::reduce([value & LOW_51_BIT_MASK, value >> 51, 0, 0, 0])
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut limbs = [0u64; FIELD_LIMBS];
        for (i, limb) in limbs.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(limbs)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for FieldElement {}
