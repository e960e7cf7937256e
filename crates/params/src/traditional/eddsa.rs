//! Constants for the Edwards-curve Digital Signature Algorithm
//!
//! Every multi-byte constant is stored little-endian, the byte order used by
//! the EdDSA encodings themselves, so a table can be fed straight into a
//! little-endian big integer constructor.

/// Encoded length of an Ed25519 point or scalar in bytes
pub const ED25519_ENCODED_SIZE: usize = 32;

/// Ed25519 public key size in bytes
pub const ED25519_PUBLIC_KEY_SIZE: usize = ED25519_ENCODED_SIZE;

/// Ed25519 private key (seed) size in bytes
pub const ED25519_SECRET_KEY_SIZE: usize = ED25519_ENCODED_SIZE;

/// Ed25519 signature size in bytes (R || S)
pub const ED25519_SIGNATURE_SIZE: usize = 2 * ED25519_ENCODED_SIZE;

/// Encoded length of an Ed448 point or scalar in bytes
pub const ED448_ENCODED_SIZE: usize = 57;

/// Ed448 public key size in bytes
pub const ED448_PUBLIC_KEY_SIZE: usize = ED448_ENCODED_SIZE;

/// Ed448 private key (seed) size in bytes
pub const ED448_SECRET_KEY_SIZE: usize = ED448_ENCODED_SIZE;

/// Ed448 signature size in bytes (R || S)
pub const ED448_SIGNATURE_SIZE: usize = 2 * ED448_ENCODED_SIZE;

/// Longest context string accepted by the `dom` prefix
pub const MAX_CONTEXT_SIZE: usize = 255;

/// Output length of the prehash function for the `ph` variants
pub const PREHASH_OUTPUT_SIZE: usize = 64;

/// Domain separation label for Ed25519ctx and Ed25519ph (RFC 8032 dom2)
pub const ED25519_DOM_LABEL: &[u8] = b"SigEd25519 no Ed25519 collisions";

/// Domain separation label for Ed448 and Ed448ph (RFC 8032 dom4)
pub const ED448_DOM_LABEL: &[u8] = b"SigEd448";

// Curve25519 in twisted Edwards form: -x^2 + y^2 = 1 + d x^2 y^2

/// Field prime p = 2^255 - 19
pub const ED25519_P: [u8; 32] = [
    0xed, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x7f,
];

/// Curve constant d = -121665/121666 mod p
pub const ED25519_D: [u8; 32] = [
    0xa3, 0x78, 0x59, 0x13, 0xca, 0x4d, 0xeb, 0x75,
    0xab, 0xd8, 0x41, 0x41, 0x4d, 0x0a, 0x70, 0x00,
    0x98, 0xe8, 0x79, 0x77, 0x79, 0x40, 0xc7, 0x8c,
    0x73, 0xfe, 0x6f, 0x2b, 0xee, 0x6c, 0x03, 0x52,
];

/// Group order L = 2^252 + 27742317777372353535851937790883648493
pub const ED25519_L: [u8; 32] = [
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58,
    0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
];

/// Affine x-coordinate of the base point
pub const ED25519_BASE_X: [u8; 32] = [
    0x1a, 0xd5, 0x25, 0x8f, 0x60, 0x2d, 0x56, 0xc9,
    0xb2, 0xa7, 0x25, 0x95, 0x60, 0xc7, 0x2c, 0x69,
    0x5c, 0xdc, 0xd6, 0xfd, 0x31, 0xe2, 0xa4, 0xc0,
    0xfe, 0x53, 0x6e, 0xcd, 0xd3, 0x36, 0x69, 0x21,
];

/// Affine y-coordinate of the base point (4/5 mod p)
pub const ED25519_BASE_Y: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
];

/// A square root of -1 mod p, 2^((p-1)/4)
pub const ED25519_SQRT_M1: [u8; 32] = [
    0xb0, 0xa0, 0x0e, 0x4a, 0x27, 0x1b, 0xee, 0xc4,
    0x78, 0xe4, 0x2f, 0xad, 0x06, 0x18, 0x43, 0x2f,
    0xa7, 0xd7, 0xfb, 0x3d, 0x99, 0x00, 0x4d, 0x2b,
    0x0b, 0xdf, 0xc1, 0x4f, 0x80, 0x24, 0x83, 0x2b,
];


// Curve448 "edwards448": x^2 + y^2 = 1 + d x^2 y^2

/// Field prime p = 2^448 - 2^224 - 1
pub const ED448_P: [u8; 57] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x00,
];

/// Curve constant d = -39081 mod p
pub const ED448_D: [u8; 57] = [
    0x56, 0x67, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x00,
];

/// Group order L = 2^446 - 13818066809895115352007386748515426880336692474882178609894547503885
pub const ED448_L: [u8; 57] = [
    0xf3, 0x44, 0x58, 0xab, 0x92, 0xc2, 0x78, 0x23,
    0x55, 0x8f, 0xc5, 0x8d, 0x72, 0xc2, 0x6c, 0x21,
    0x90, 0x36, 0xd6, 0xae, 0x49, 0xdb, 0x4e, 0xc4,
    0xe9, 0x23, 0xca, 0x7c, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x3f,
    0x00,
];

/// Affine x-coordinate of the base point
pub const ED448_BASE_X: [u8; 57] = [
    0x5e, 0xc0, 0x0c, 0xc7, 0x2b, 0xa8, 0x26, 0x26,
    0x8e, 0x93, 0x00, 0x8b, 0xe1, 0x80, 0x3b, 0x43,
    0x11, 0x65, 0xb6, 0x2a, 0xf7, 0x1a, 0xae, 0x12,
    0x64, 0xa4, 0xd3, 0xa3, 0x24, 0xe3, 0x6d, 0xea,
    0x67, 0x17, 0x0f, 0x47, 0x70, 0x65, 0x14, 0x9e,
    0xda, 0x36, 0xbf, 0x22, 0xa6, 0x15, 0x1d, 0x22,
    0xed, 0x0d, 0xed, 0x6b, 0xc6, 0x70, 0x19, 0x4f,
    0x00,
];

/// Affine y-coordinate of the base point
pub const ED448_BASE_Y: [u8; 57] = [
    0x14, 0xfa, 0x30, 0xf2, 0x5b, 0x79, 0x08, 0x98,
    0xad, 0xc8, 0xd7, 0x4e, 0x2c, 0x13, 0xbd, 0xfd,
    0xc4, 0x39, 0x7c, 0xe6, 0x1c, 0xff, 0xd3, 0x3a,
    0xd7, 0xc2, 0xa0, 0x05, 0x1e, 0x9c, 0x78, 0x87,
    0x40, 0x98, 0xa3, 0x6c, 0x73, 0x73, 0xea, 0x4b,
    0x62, 0xc7, 0xc9, 0x56, 0x37, 0x20, 0x76, 0x88,
    0x24, 0xbc, 0xb6, 0x6e, 0x71, 0x46, 0x3f, 0x69,
    0x00,
];

