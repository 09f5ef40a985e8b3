//! Per-algorithm constants driving the shared sponge engine.

/// Domain-separation bytes (FIPS 202 and SP 800-185).
pub const DS_SHA3: u8 = 0b0000_0110;
pub const DS_KECCAK: u8 = 0b0000_0001;
pub const DS_SHAKE: u8 = 0b0001_1111;
pub const DS_KMAC: u8 = 0b0000_0100;

/// Largest rate of any family (SHAKE128 / KMAC128).
pub const MAX_BLOCK_SIZE: usize = block_size(128);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Sha3,
    Keccak,
    Shake,
    KeccakKmac,
}

/// Static configuration of one algorithm.
#[derive(Debug, PartialEq, Eq)]
pub struct Family {
    pub name: &'static str,
    pub kind: Kind,
    /// Security strength in bits; capacity is twice this value.
    pub bitlen: usize,
    pub pad: u8,
    /// The rate in bytes.
    pub block_size: usize,
    /// Fixed output length, or the default output length of an XOF.
    pub digest_size: usize,
    pub xof: bool,
}

const fn block_size(bitlen: usize) -> usize {
    (1600 - 2 * bitlen) / 8
}

impl Family {
    const fn new(name: &'static str, kind: Kind, bitlen: usize) -> Family {
        let (pad, digest_size, xof) = match kind {
            Kind::Sha3 => (DS_SHA3, bitlen / 8, false),
            Kind::Keccak => (DS_KECCAK, bitlen / 8, false),
            Kind::Shake => (DS_SHAKE, bitlen / 8, true),
            Kind::KeccakKmac => (DS_KMAC, 2 * bitlen / 8, true),
        };
        Family {
            name,
            kind,
            bitlen,
            pad,
            block_size: block_size(bitlen),
            digest_size,
            xof,
        }
    }

    /// SHA3 and raw Keccak digests carry no AlgorithmIdentifier parameters.
    pub fn algid_absent(&self) -> bool {
        matches!(self.kind, Kind::Sha3 | Kind::Keccak)
    }
}

pub static SHA3_224: Family = Family::new("SHA3-224", Kind::Sha3, 224);
pub static SHA3_256: Family = Family::new("SHA3-256", Kind::Sha3, 256);
pub static SHA3_384: Family = Family::new("SHA3-384", Kind::Sha3, 384);
pub static SHA3_512: Family = Family::new("SHA3-512", Kind::Sha3, 512);

pub static KECCAK_224: Family = Family::new("KECCAK-224", Kind::Keccak, 224);
pub static KECCAK_256: Family = Family::new("KECCAK-256", Kind::Keccak, 256);
pub static KECCAK_384: Family = Family::new("KECCAK-384", Kind::Keccak, 384);
pub static KECCAK_512: Family = Family::new("KECCAK-512", Kind::Keccak, 512);

pub static SHAKE_128: Family = Family::new("SHAKE-128", Kind::Shake, 128);
pub static SHAKE_256: Family = Family::new("SHAKE-256", Kind::Shake, 256);

pub static KECCAK_KMAC_128: Family = Family::new("KECCAK-KMAC-128", Kind::KeccakKmac, 128);
pub static KECCAK_KMAC_256: Family = Family::new("KECCAK-KMAC-256", Kind::KeccakKmac, 256);

/// Every family, in registration order.
pub static FAMILIES: [&Family; 12] = [
    &SHA3_224,
    &SHA3_256,
    &SHA3_384,
    &SHA3_512,
    &KECCAK_224,
    &KECCAK_256,
    &KECCAK_384,
    &KECCAK_512,
    &SHAKE_128,
    &SHAKE_256,
    &KECCAK_KMAC_128,
    &KECCAK_KMAC_256,
];
