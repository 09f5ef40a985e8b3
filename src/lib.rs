//! SHA3, Keccak, SHAKE and KMAC over one Keccak-f[1600] sponge engine.
//!
//! [`sha3::KeccakCtx`] is the engine; [`sha3::family`] holds the per-algorithm
//! rows that parameterize it and [`provider`] exposes it the way a host
//! library consumes digest implementations.

pub mod provider;
pub mod sha3;

#[cfg(feature = "capi")]
pub mod ffi;
