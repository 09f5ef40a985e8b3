use super::errors::Result;
use super::family::Family;
use super::sponge::KeccakCtx;
use super::{Hash, XOF};


/// SHAKE extendable-output function; `N` is the default output length.
#[derive(Debug, Clone)]
pub struct SHAKE<const N: usize> {
    ctx: KeccakCtx,
}


impl<const N: usize> Hash<N> for SHAKE<N> {
    fn reset(&mut self) {
        self.ctx.reset();
    }

    fn write(&mut self, p: &[u8]) -> Result<()> {
        self.ctx.update(p)
    }

    // Reads `digest.len()` bytes from a copy of the sponge.
    fn sum_into(&self, digest: &mut [u8]) -> Result<usize> {
        let mut copy = self.ctx.clone();
        copy.squeeze(digest)
    }

    // BlockSize returns the rate of sponge underlying this hash function.
    fn block_size(&self) -> usize {
        self.ctx.block_size()
    }
    // Size returns the output size of the hash function in bytes.
    fn size(&self) -> usize {
        N
    }
}

impl<const N: usize> SHAKE<N> {
    /// Reads the next `buf.len()` output bytes.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.ctx.squeeze(buf)
    }

    pub(crate) fn new(family: &'static Family) -> Result<Self> {
        debug_assert!(family.xof && family.digest_size == N);
        Ok(SHAKE { ctx: KeccakCtx::new(family)? })
    }

    pub fn ctx(&self) -> &KeccakCtx {
        &self.ctx
    }
}


impl<const N: usize> XOF for SHAKE<N> {
    fn init(&mut self) -> Result<&mut Self> {
        self.ctx.init(None)?;
        Ok(self)
    }

    fn absorb(&mut self, str: &[u8]) -> Result<&mut Self> {
        self.write(str)?;
        Ok(self)
    }

    fn squeeze(&mut self, z: &mut [u8]) -> Result<&mut Self> {
        self.read(z)?;
        Ok(self)
    }
}
