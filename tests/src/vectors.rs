//! Known-answer vectors from RFC 7748

/// One X25519 evaluation: `x25519(scalar, u) == output`
#[derive(Debug, Clone, Copy)]
pub struct X25519Vector {
    pub name: &'static str,
    pub scalar: &'static str,
    pub u: &'static str,
    pub output: &'static str,
}

/// The encoding of the base point u = 9
pub const BASE_POINT: &str = "0900000000000000000000000000000000000000000000000000000000000000";

/// Section 5.2 single evaluations
pub const FUNCTION_VECTORS: [X25519Vector; 2] = [
    X25519Vector {
        name: "rfc7748-5.2-1",
        scalar: "a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4",
        u: "e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c",
        output: "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552",
    },
    X25519Vector {
        name: "rfc7748-5.2-2",
        scalar: "4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d",
        u: "e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493",
        output: "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957",
    },
];

/// Section 6.1 key pairs: `(private, public)`
pub const ALICE: (&str, &str) = (
    "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a",
    "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a",
);
pub const BOB: (&str, &str) = (
    "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb",
    "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f",
);

/// Section 6.1 shared secret between Alice and Bob
pub const SHARED_SECRET: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

/// Section 5.2 iterated function: `(iterations, result)`
pub const ITERATED: [(usize, &str); 2] = [
    (1, "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079"),
    (1000, "684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51"),
];

/// Decode a 64-character hex string into 32 bytes
///
/// Panics on malformed input; vectors are compile-time constants.
pub fn hex32(s: &str) -> [u8; 32] {
    let bytes = hex::decode(s).unwrap_or_else(|e| panic!("bad vector hex {:?}: {}", s, e));
    bytes
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("vector is {} bytes, expected 32", v.len()))
}
