//! Permutation backends and the once-per-process backend selection.
//!
//! A backend is a closed tag. Contexts store the tag chosen at creation and
//! dispatch with a `match`; there is no function-pointer table to copy or
//! corrupt.

use std::sync::OnceLock;

use super::family::Family;
use super::keccakf::keccak_f1600_generic;

/// Environment variable capping backend selection, e.g. `generic`.
pub const BACKEND_ENV: &str = "OPENGM_SHA3_BACKEND";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Generic,
    #[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
    Bmi2,
    #[cfg(all(feature = "accel", target_arch = "aarch64"))]
    ArmSha3,
}

static SELECTED: OnceLock<Backend> = OnceLock::new();

impl Backend {
    /// Backends compiled into this build, most specific first.
    pub const ALL: &'static [Backend] = &[
        #[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
        Backend::Bmi2,
        #[cfg(all(feature = "accel", target_arch = "aarch64"))]
        Backend::ArmSha3,
        Backend::Generic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Generic => "generic",
            #[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
            Backend::Bmi2 => "bmi2",
            #[cfg(all(feature = "accel", target_arch = "aarch64"))]
            Backend::ArmSha3 => "armsha3",
        }
    }

    pub fn from_name(name: &str) -> Option<Backend> {
        Backend::ALL
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether the running CPU can execute this backend.
    pub fn is_supported(self) -> bool {
        match self {
            Backend::Generic => true,
            #[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
            Backend::Bmi2 => {
                std::arch::is_x86_feature_detected!("bmi1")
                    && std::arch::is_x86_feature_detected!("bmi2")
            }
            #[cfg(all(feature = "accel", target_arch = "aarch64"))]
            Backend::ArmSha3 => std::arch::is_aarch64_feature_detected!("sha3"),
        }
    }

    /// Supported backends, most specific first. Always ends with `Generic`.
    pub fn available() -> impl Iterator<Item = Backend> {
        Backend::ALL.iter().copied().filter(|b| b.is_supported())
    }

    /// The backend new contexts bind to. Detection runs once per process.
    pub fn selected() -> Backend {
        *SELECTED.get_or_init(|| select(std::env::var(BACKEND_ENV).ok().as_deref()))
    }

    /// Domain-separation byte this backend consumes for `family`.
    ///
    /// All compiled-in backends run the FIPS 202 padding in software, so the
    /// family byte is used unchanged.
    pub fn domain_pad(self, family: &Family) -> u8 {
        family.pad
    }

    #[inline]
    pub(crate) fn permute(self, a: &mut [u64; 25]) {
        match self {
            Backend::Generic => keccak_f1600_generic(a),
            #[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
            // SAFETY: contexts only bind to backends that passed `is_supported`.
            Backend::Bmi2 => unsafe { super::keccakf::keccak_f1600_bmi2(a) },
            #[cfg(all(feature = "accel", target_arch = "aarch64"))]
            // SAFETY: as above.
            Backend::ArmSha3 => unsafe { super::keccakf::keccak_f1600_armsha3(a) },
        }
    }

    /// XORs every full `r`-byte block of `inp` into `a`, permuting after each.
    /// Returns the length of the unconsumed tail, always `< r`.
    #[inline]
    pub(crate) fn absorb(self, a: &mut [u64; 25], inp: &[u8], r: usize) -> usize {
        match self {
            Backend::Generic => absorb_blocks(a, inp, r, keccak_f1600_generic),
            #[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
            // SAFETY: contexts only bind to backends that passed `is_supported`.
            Backend::Bmi2 => unsafe { absorb_bmi2(a, inp, r) },
            #[cfg(all(feature = "accel", target_arch = "aarch64"))]
            // SAFETY: as above.
            Backend::ArmSha3 => unsafe { absorb_armsha3(a, inp, r) },
        }
    }
}

fn select(cap: Option<&str>) -> Backend {
    if let Some(name) = cap {
        match Backend::from_name(name) {
            Some(b) if b.is_supported() => {
                log::debug!("keccak backend {} selected by {}", b.name(), BACKEND_ENV);
                return b;
            }
            Some(b) => log::warn!("{}={}: not supported on this cpu, ignored", BACKEND_ENV, b.name()),
            None => log::warn!("{}={}: unknown backend, ignored", BACKEND_ENV, name),
        }
    }

    let b = Backend::available().next().unwrap_or(Backend::Generic);
    log::debug!("keccak backend {} selected", b.name());
    b
}

#[inline(always)]
fn xor_block(a: &mut [u64; 25], block: &[u8]) {
    for (lane, chunk) in a.iter_mut().zip(block.chunks_exact(8)) {
        let mut w = [0u8; 8];
        w.copy_from_slice(chunk);
        *lane ^= u64::from_le_bytes(w);
    }
}

#[inline(always)]
fn absorb_blocks(a: &mut [u64; 25], inp: &[u8], r: usize, permute: impl Fn(&mut [u64; 25])) -> usize {
    let mut blocks = inp.chunks_exact(r);
    for block in &mut blocks {
        xor_block(a, block);
        permute(a);
    }
    blocks.remainder().len()
}

#[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
#[target_feature(enable = "bmi1,bmi2")]
unsafe fn absorb_bmi2(a: &mut [u64; 25], inp: &[u8], r: usize) -> usize {
    absorb_blocks(a, inp, r, |a| unsafe { super::keccakf::keccak_f1600_bmi2(a) })
}

#[cfg(all(feature = "accel", target_arch = "aarch64"))]
#[target_feature(enable = "sha3")]
unsafe fn absorb_armsha3(a: &mut [u64; 25], inp: &[u8], r: usize) -> usize {
    absorb_blocks(a, inp, r, |a| unsafe { super::keccakf::keccak_f1600_armsha3(a) })
}

/// Copies `out.len()` state bytes starting at byte `offset` of the rate.
#[inline]
pub(crate) fn extract_bytes(a: &[u64; 25], offset: usize, out: &mut [u8]) {
    for (i, o) in out.iter_mut().enumerate() {
        let p = offset + i;
        *o = (a[p / 8] >> (8 * (p % 8))) as u8;
    }
}
