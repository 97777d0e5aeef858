//! # Address Derivation and Encoding
//!
//! - Addresses are the first 20 bytes of SHA-256 over the public key.
//! - The human-readable form is Lisk32: `lsk` followed by 32 base32 characters
//!   for the address and 6 characters of BCH checksum.

use std::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::entities::{Address, PublicKey, ADDRESS_LENGTH};

/// Prefix of every Lisk32 address.
pub const LISK32_PREFIX: &str = "lsk";

const LISK32_CHARSET: &[u8; 32] = b"zxvcpmbn3465o978uyrtkqew2adsjhfg";

const GENERATOR: [u32; 5] = [0x3b6a_57b2, 0x2650_8e6d, 0x1ea1_19fa, 0x3d42_33dd, 0x2a14_62b3];

/// Address of the synthetic account that absorbs legacy balances.
///
/// First 20 bytes of SHA-256 of the empty byte string.
pub const ADDRESS_LEGACY_RESERVE: Address = [
    0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14, 0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
    0x27, 0xae, 0x41, 0xe4,
];

/// Derive the account address owned by `public_key`.
pub fn address_from_public_key(public_key: &PublicKey) -> Address {
    let digest = Sha256::digest(public_key);
    let mut address = [0u8; ADDRESS_LENGTH];
    address.copy_from_slice(&digest[..ADDRESS_LENGTH]);
    address
}

/// Render an address in Lisk32 form.
pub fn lisk32_from_address(address: &Address) -> String {
    let mut groups = to_uint5(address);
    let checksum = create_checksum(&groups);
    groups.extend_from_slice(&checksum);

    let mut out = String::with_capacity(LISK32_PREFIX.len() + groups.len());
    out.push_str(LISK32_PREFIX);
    out.extend(groups.iter().map(|&g| LISK32_CHARSET[usize::from(g)] as char));
    out
}

fn to_uint5(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits = 0u32;
    for &byte in bytes {
        acc = ((acc << 8) | u32::from(byte)) & 0xfff;
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(((acc >> bits) & 31) as u8);
        }
    }
    if bits > 0 {
        out.push(((acc << (5 - bits)) & 31) as u8);
    }
    out
}

fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

fn create_checksum(groups: &[u8]) -> [u8; 6] {
    let mut values = groups.to_vec();
    values.extend_from_slice(&[0; 6]);
    let modulus = polymod(&values) ^ 1;

    let mut checksum = [0u8; 6];
    for (p, slot) in checksum.iter_mut().enumerate() {
        *slot = ((modulus >> (5 * (5 - p))) & 31) as u8;
    }
    checksum
}

/// An address that sorts by raw bytes and serializes as Lisk32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lisk32Address(pub Address);

impl From<Address> for Lisk32Address {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Lisk32Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&lisk32_from_address(&self.0))
    }
}

impl Serialize for Lisk32Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&lisk32_from_address(&self.0))
    }
}
