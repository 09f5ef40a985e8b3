use core::cmp::min;
use core::fmt;
use core::mem;

use zeroize::Zeroize;

use super::backend::{extract_bytes, Backend};
use super::errors::{Error, Result};
use super::family::{Family, MAX_BLOCK_SIZE};
use crate::provider::params::{self, Param, DIGEST_PARAM_XOFLEN};
use crate::provider::Provider;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Phase {
    // Nothing absorbed since creation or the last reset.
    Created,
    Absorbing,
    // Padded; an XOF may keep squeezing.
    Squeezing,
    Finalized,
}

/// Sponge context shared by every SHA3, Keccak, SHAKE and KMAC family.
///
/// The state is the 5x5 lane array; bytes are mapped little-endian within a
/// lane. `buf` stages at most `block_size - 1` bytes between updates. The
/// backend tag and the domain byte are fixed when the context is created.
#[derive(Clone)]
pub struct KeccakCtx {
    a: [u64; 25],
    buf: [u8; MAX_BLOCK_SIZE],
    bufsz: usize,
    // bytes of the current output block already handed out
    squeezed: usize,
    block_size: usize,
    md_size: usize,
    pad: u8,
    phase: Phase,
    backend: Backend,
    family: &'static Family,
    provider: &'static Provider,
}

impl KeccakCtx {
    /// Creates a context on the global provider bound to the selected backend.
    pub fn new(family: &'static Family) -> Result<Self> {
        Provider::global().newctx(family)
    }

    /// Creates a context bound to an explicit backend.
    pub fn with_backend(family: &'static Family, backend: Backend) -> Result<Self> {
        Self::create(Provider::global(), family, backend)
    }

    pub(crate) fn create(
        provider: &'static Provider,
        family: &'static Family,
        backend: Backend,
    ) -> Result<Self> {
        if !provider.is_running() {
            return Err(Error::NotRunning);
        }
        if !backend.is_supported() {
            return Err(Error::UnsupportedBackend(backend.name()));
        }

        Ok(KeccakCtx {
            a: [0; 25],
            buf: [0; MAX_BLOCK_SIZE],
            bufsz: 0,
            squeezed: 0,
            block_size: family.block_size,
            md_size: family.digest_size,
            pad: backend.domain_pad(family),
            phase: Phase::Created,
            backend,
            family,
            provider,
        })
    }

    /// Resets the context and applies `params`.
    pub fn init(&mut self, params: Option<&[Param]>) -> Result<()> {
        if !self.provider.is_running() {
            return Err(Error::NotRunning);
        }
        self.reset();
        match params {
            Some(params) => self.set_ctx_params(params),
            None => Ok(()),
        }
    }

    /// Zeroes the state and restores the family's output length.
    pub fn reset(&mut self) {
        self.wipe();
        self.md_size = self.family.digest_size;
        self.phase = Phase::Created;
    }

    /// Applies the recognized keys of `params`; others are ignored.
    pub fn set_ctx_params(&mut self, params: &[Param]) -> Result<()> {
        let Some(p) = params::locate(params, DIGEST_PARAM_XOFLEN) else {
            return Ok(());
        };
        if !self.family.xof {
            return Err(Error::UnsupportedParameter(p.key.clone(), self.family.name));
        }
        let len = p
            .value
            .to_usize()
            .ok_or_else(|| Error::InvalidParameter(p.key.clone()))?;
        self.set_xof_len(len)
    }

    /// Sets the XOF output length. Only legal before any input is absorbed.
    pub fn set_xof_len(&mut self, len: usize) -> Result<()> {
        if !self.family.xof {
            return Err(Error::NotXof(self.family.name));
        }
        if self.phase != Phase::Created {
            return Err(Error::XofLenAfterAbsorb);
        }
        self.md_size = len;
        Ok(())
    }

    pub fn update(&mut self, mut inp: &[u8]) -> Result<()> {
        if matches!(self.phase, Phase::Squeezing | Phase::Finalized) {
            log::warn!("{}: update after final rejected", self.family.name);
            return Err(Error::AlreadyFinalized);
        }
        if inp.is_empty() {
            return Ok(());
        }
        self.phase = Phase::Absorbing;

        let bsz = self.block_size;
        let num = self.bufsz;
        if num != 0 {
            let rem = bsz - num;
            if inp.len() < rem {
                self.buf[num..num + inp.len()].copy_from_slice(inp);
                self.bufsz += inp.len();
                return Ok(());
            }
            self.buf[num..bsz].copy_from_slice(&inp[..rem]);
            inp = &inp[rem..];
            self.backend.absorb(&mut self.a, &self.buf[..bsz], bsz);
            self.bufsz = 0;
        }

        let rem = self.backend.absorb(&mut self.a, inp, bsz);
        if rem != 0 {
            self.buf[..rem].copy_from_slice(&inp[inp.len() - rem..]);
            self.bufsz = rem;
        }
        Ok(())
    }

    /// Pads, permutes and writes `digest_size` bytes into `out`.
    ///
    /// Fixed-length contexts are finalized for good; an XOF context may keep
    /// producing output with [`KeccakCtx::squeeze`].
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<usize> {
        if !self.provider.is_running() {
            return Err(Error::NotRunning);
        }
        if matches!(self.phase, Phase::Squeezing | Phase::Finalized) {
            return Err(Error::AlreadyFinalized);
        }
        let n = self.md_size;
        if out.len() < n {
            return Err(Error::OutputTooSmall { needed: n, got: out.len() });
        }
        if n == 0 {
            self.phase = Phase::Finalized;
            return Ok(0);
        }

        self.pad_and_absorb();
        self.squeeze_into(&mut out[..n]);
        self.phase = if self.family.xof { Phase::Squeezing } else { Phase::Finalized };
        Ok(n)
    }

    /// Fills `out` with the next XOF output bytes, padding first if needed.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<usize> {
        if !self.provider.is_running() {
            return Err(Error::NotRunning);
        }
        if !self.family.xof {
            return Err(Error::NotXof(self.family.name));
        }
        if self.phase == Phase::Finalized {
            return Err(Error::AlreadyFinalized);
        }
        if out.is_empty() {
            return Ok(0);
        }

        if matches!(self.phase, Phase::Created | Phase::Absorbing) {
            self.pad_and_absorb();
            self.phase = Phase::Squeezing;
        }
        self.squeeze_into(out);
        Ok(out.len())
    }

    /// Deep copy of state, buffer and configuration on the same backend.
    pub fn dup(&self) -> Result<Self> {
        if !self.provider.is_running() {
            return Err(Error::NotRunning);
        }
        Ok(self.clone())
    }

    /// Wipes and releases the context.
    pub fn destroy(self) {
        drop(self);
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn digest_size(&self) -> usize {
        self.md_size
    }

    pub fn pad(&self) -> u8 {
        self.pad
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn family(&self) -> &'static Family {
        self.family
    }

    pub fn is_xof(&self) -> bool {
        self.family.xof
    }

    fn pad_and_absorb(&mut self) {
        let bsz = self.block_size;
        let num = self.bufsz;

        self.buf[num..bsz].fill(0);
        self.buf[num] = self.pad;
        self.buf[bsz - 1] |= 0x80;
        self.backend.absorb(&mut self.a, &self.buf[..bsz], bsz);

        self.buf.zeroize();
        self.bufsz = 0;
        self.squeezed = 0;
    }

    fn squeeze_into(&mut self, mut out: &mut [u8]) {
        let bsz = self.block_size;

        while !out.is_empty() {
            if self.squeezed == bsz {
                self.backend.permute(&mut self.a);
                self.squeezed = 0;
            }
            let n = min(out.len(), bsz - self.squeezed);
            let (head, tail) = mem::take(&mut out).split_at_mut(n);
            extract_bytes(&self.a, self.squeezed, head);
            self.squeezed += n;
            out = tail;
        }
    }

    fn wipe(&mut self) {
        self.a.zeroize();
        self.buf.zeroize();
        self.bufsz.zeroize();
        self.squeezed.zeroize();
    }
}

impl Drop for KeccakCtx {
    fn drop(&mut self) {
        self.wipe();
    }
}

impl fmt::Debug for KeccakCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeccakCtx")
            .field("family", &self.family.name)
            .field("backend", &self.backend)
            .field("phase", &self.phase)
            .field("md_size", &self.md_size)
            .finish_non_exhaustive()
    }
}
