//! KMAC128, KMAC256 and their XOF variants (NIST SP 800-185) on top of the
//! KECCAK-KMAC sponge rows.
//!
//! `KMAC(K, X, L, S) = cSHAKE(bytepad(encode_string(K), rate) || X || right_encode(L), L, "KMAC", S)`

use super::errors::{Error, Result};
use super::family::{Family, Kind, KECCAK_KMAC_128, KECCAK_KMAC_256, MAX_BLOCK_SIZE};
use super::sponge::KeccakCtx;

pub const KMAC_MIN_KEY: usize = 4;
pub const KMAC_MAX_KEY: usize = 512;
pub const KMAC_MAX_CUSTOM: usize = 512;
pub const KMAC_MAX_OUTPUT_LEN: usize = 0xFF_FFFF / 8;

const FUNCTION_NAME: &[u8] = b"KMAC";

fn left_encode(x: u64, b: &mut [u8; 9]) -> &[u8] {
    b[1..].copy_from_slice(&x.to_be_bytes());
    let i = b[1..8].iter().take_while(|&&v| v == 0).count();
    b[i] = (8 - i) as u8;
    &b[i..]
}

fn right_encode(x: u64, b: &mut [u8; 9]) -> &[u8] {
    b[..8].copy_from_slice(&x.to_be_bytes());
    let i = b[..7].iter().take_while(|&&v| v == 0).count();
    b[8] = (8 - i) as u8;
    &b[i..]
}

// encode_string(s) = left_encode(bitlen(s)) || s
fn absorb_encode_string(ctx: &mut KeccakCtx, s: &[u8]) -> Result<usize> {
    let mut b = [0u8; 9];
    let le = left_encode(8 * s.len() as u64, &mut b);
    ctx.update(le)?;
    ctx.update(s)?;
    Ok(le.len() + s.len())
}

// bytepad(encode_string(s0) || encode_string(s1) || ..., w)
fn absorb_bytepad(ctx: &mut KeccakCtx, w: usize, strings: &[&[u8]]) -> Result<()> {
    let mut b = [0u8; 9];
    let le = left_encode(w as u64, &mut b);
    ctx.update(le)?;

    let mut n = le.len();
    for s in strings {
        n += absorb_encode_string(ctx, s)?;
    }
    let zeros = [0u8; MAX_BLOCK_SIZE];
    ctx.update(&zeros[..(w - n % w) % w])
}

/// A keyed KMAC instance.
#[derive(Debug, Clone)]
pub struct Kmac {
    ctx: KeccakCtx,
    out_len: usize,
    xof: bool,
    finalized: bool,
}

impl Kmac {
    /// Starts a MAC over `family` (KECCAK-KMAC-128 or -256) with key `key`
    /// and customization string `custom`.
    pub fn new(family: &'static Family, key: &[u8], custom: &[u8]) -> Result<Self> {
        if family.kind != Kind::KeccakKmac {
            return Err(Error::NotKmac(family.name));
        }
        if !(KMAC_MIN_KEY..=KMAC_MAX_KEY).contains(&key.len()) {
            return Err(Error::InvalidKeyLength(key.len()));
        }
        if custom.len() > KMAC_MAX_CUSTOM {
            return Err(Error::InvalidCustomLength(custom.len()));
        }

        let mut ctx = KeccakCtx::new(family)?;
        let w = ctx.block_size();
        absorb_bytepad(&mut ctx, w, &[FUNCTION_NAME, custom])?;
        absorb_bytepad(&mut ctx, w, &[key])?;

        Ok(Kmac {
            ctx,
            out_len: family.digest_size,
            xof: false,
            finalized: false,
        })
    }

    pub fn new128(key: &[u8], custom: &[u8]) -> Result<Self> {
        Self::new(&KECCAK_KMAC_128, key, custom)
    }

    pub fn new256(key: &[u8], custom: &[u8]) -> Result<Self> {
        Self::new(&KECCAK_KMAC_256, key, custom)
    }

    pub fn set_output_len(&mut self, len: usize) -> Result<()> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if len == 0 || len > KMAC_MAX_OUTPUT_LEN {
            return Err(Error::InvalidOutputLength(len));
        }
        self.out_len = len;
        Ok(())
    }

    /// Switches to KMACXOF, which encodes an output length of zero.
    /// The mode is fixed once the output length has been absorbed.
    pub fn set_xof(&mut self, xof: bool) -> Result<()> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        self.xof = xof;
        Ok(())
    }

    pub fn output_len(&self) -> usize {
        self.out_len
    }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        self.ctx.update(data)
    }

    /// Writes `output_len()` tag bytes into `out`.
    pub fn finalize(&mut self, out: &mut [u8]) -> Result<usize> {
        if self.finalized {
            return Err(Error::AlreadyFinalized);
        }
        if out.len() < self.out_len {
            return Err(Error::OutputTooSmall { needed: self.out_len, got: out.len() });
        }
        self.absorb_output_len()?;
        self.ctx.squeeze(&mut out[..self.out_len])
    }

    /// KMACXOF only: reads further output, finalizing on first use.
    pub fn squeeze(&mut self, out: &mut [u8]) -> Result<usize> {
        if !self.xof {
            return Err(Error::NotXof("KMAC"));
        }
        if !self.finalized {
            self.absorb_output_len()?;
        }
        self.ctx.squeeze(out)
    }

    fn absorb_output_len(&mut self) -> Result<()> {
        let bits = if self.xof { 0 } else { 8 * self.out_len as u64 };
        let mut b = [0u8; 9];
        self.ctx.update(right_encode(bits, &mut b))?;
        self.finalized = true;
        Ok(())
    }
}
