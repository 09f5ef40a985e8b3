use super::errors::Result;
use super::family::Family;
use super::sponge::KeccakCtx;
use super::Hash;

/// Fixed-length digest with a `DIGEST_SIZE`-byte output.
#[derive(Debug, Clone)]
pub struct Digest<const DIGEST_SIZE: usize> {
    ctx: KeccakCtx,
}

impl<const DIGEST_SIZE: usize> Hash<DIGEST_SIZE> for Digest<DIGEST_SIZE> {
    fn reset(&mut self) {
        self.ctx.reset();
    }

    fn write(&mut self, p: &[u8]) -> Result<()> {
        self.ctx.update(p)
    }

    // Finalizes a copy so the running hash can keep absorbing.
    fn sum_into(&self, digest: &mut [u8]) -> Result<usize> {
        let mut copy = self.ctx.clone();
        copy.finalize(digest)
    }

    fn block_size(&self) -> usize {
        self.ctx.block_size()
    }

    fn size(&self) -> usize {
        DIGEST_SIZE
    }
}

impl<const DIGEST_SIZE: usize> Digest<DIGEST_SIZE> {
    pub(crate) fn new(family: &'static Family) -> Result<Self> {
        debug_assert!(!family.xof && family.digest_size == DIGEST_SIZE);
        Ok(Digest { ctx: KeccakCtx::new(family)? })
    }

    pub fn ctx(&self) -> &KeccakCtx {
        &self.ctx
    }
}
