//! Digest provider: the dispatch surface a host library consumes.
//!
//! A provider carries the running flag every construction checks, the
//! algorithm registry and the parameter queries.

pub mod params;

use core::sync::atomic::{AtomicBool, Ordering};

use crate::sha3::backend::Backend;
use crate::sha3::errors::{Error, Result};
use crate::sha3::family::*;
use crate::sha3::KeccakCtx;

use params::*;

/// Registered names, canonical name first.
static ALGORITHMS: [(&[&str], &Family); 12] = [
    (&["SHA3-224", "2.16.840.1.101.3.4.2.7"], &SHA3_224),
    (&["SHA3-256", "2.16.840.1.101.3.4.2.8"], &SHA3_256),
    (&["SHA3-384", "2.16.840.1.101.3.4.2.9"], &SHA3_384),
    (&["SHA3-512", "2.16.840.1.101.3.4.2.10"], &SHA3_512),
    (&["KECCAK-224"], &KECCAK_224),
    (&["KECCAK-256"], &KECCAK_256),
    (&["KECCAK-384"], &KECCAK_384),
    (&["KECCAK-512"], &KECCAK_512),
    (&["SHAKE-128", "SHAKE128", "2.16.840.1.101.3.4.2.11"], &SHAKE_128),
    (&["SHAKE-256", "SHAKE256", "2.16.840.1.101.3.4.2.12"], &SHAKE_256),
    (&["KECCAK-KMAC-128", "KECCAK-KMAC128"], &KECCAK_KMAC_128),
    (&["KECCAK-KMAC-256", "KECCAK-KMAC256"], &KECCAK_KMAC_256),
];

static SHAKE_SETTABLE_CTX_PARAMS: &[&str] = &[DIGEST_PARAM_XOFLEN];

static GLOBAL: Provider = Provider::new();

/// Fixed parameters of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestParams {
    pub block_size: usize,
    /// 0 for extendable-output functions.
    pub digest_size: usize,
    pub default_output_len: usize,
    pub xof: bool,
    pub algid_absent: bool,
}

impl DigestParams {
    pub fn to_params(&self) -> Vec<Param> {
        vec![
            Param::uint(DIGEST_PARAM_BLOCK_SIZE, self.block_size as u64),
            Param::uint(DIGEST_PARAM_SIZE, self.digest_size as u64),
            Param::uint(DIGEST_PARAM_XOF, self.xof as u64),
            Param::uint(DIGEST_PARAM_ALGID_ABSENT, self.algid_absent as u64),
        ]
    }
}

#[derive(Debug)]
pub struct Provider {
    running: AtomicBool,
}

impl Provider {
    pub const fn new() -> Self {
        Provider { running: AtomicBool::new(true) }
    }

    /// The process-wide provider used by `KeccakCtx::new`.
    pub fn global() -> &'static Provider {
        &GLOBAL
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Stops the provider; construction, init, final and dup fail afterwards.
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::Release);
        log::info!("digest provider shut down");
    }

    /// Creates a context for `family` bound to the selected backend.
    pub fn newctx(&'static self, family: &'static Family) -> Result<KeccakCtx> {
        KeccakCtx::create(self, family, Backend::selected())
    }

    /// Creates a context for a registered algorithm name.
    pub fn newctx_by_name(&'static self, name: &str) -> Result<KeccakCtx> {
        let family = Self::fetch(name).ok_or_else(|| Error::UnknownAlgorithm(name.to_owned()))?;
        self.newctx(family)
    }

    /// Case-insensitive lookup over canonical names, aliases and OIDs.
    pub fn fetch(name: &str) -> Option<&'static Family> {
        ALGORITHMS
            .iter()
            .find(|(names, _)| names.iter().any(|n| n.eq_ignore_ascii_case(name)))
            .map(|(_, family)| *family)
    }

    /// Every registered family with its names.
    pub fn algorithms() -> impl Iterator<Item = (&'static [&'static str], &'static Family)> {
        ALGORITHMS.iter().copied()
    }

    pub fn get_params(family: &Family) -> DigestParams {
        DigestParams {
            block_size: family.block_size,
            digest_size: if family.xof { 0 } else { family.digest_size },
            default_output_len: family.digest_size,
            xof: family.xof,
            algid_absent: family.algid_absent(),
        }
    }

    /// Keys `KeccakCtx::set_ctx_params` acts on for `family`.
    pub fn settable_ctx_params(family: &Family) -> &'static [&'static str] {
        if family.xof { SHAKE_SETTABLE_CTX_PARAMS } else { &[] }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::new()
    }
}
