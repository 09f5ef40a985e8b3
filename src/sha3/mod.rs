pub use digest::Digest;
pub use errors::{Error, Result};
pub use kmac::Kmac;
pub use shake::SHAKE;
pub use sponge::KeccakCtx;

pub mod backend;
pub mod errors;
pub mod family;
pub mod kmac;
mod digest;
mod keccakf;
mod shake;
mod sponge;

use family::*;


pub trait XOF {
    fn init(&mut self) -> Result<&mut Self>;

    fn absorb(&mut self, str: &[u8]) -> Result<&mut Self>;

    fn squeeze(&mut self, z: &mut [u8]) -> Result<&mut Self>;
}

pub trait Hash<const DIGEST_SIZE: usize> {
    fn reset(&mut self);

    fn write(&mut self, data: &[u8]) -> Result<()>;

    fn sum_into(&self, digest: &mut [u8]) -> Result<usize>;

    fn sum(&self) -> Result<[u8; DIGEST_SIZE]> {
        let mut digest = [0; DIGEST_SIZE];
        self.sum_into(&mut digest)?;
        Ok(digest)
    }

    fn block_size(&self) -> usize;
    fn size(&self) -> usize;
}


pub fn new512() -> Result<Digest<64>> {
    Digest::new(&SHA3_512)
}

pub fn new384() -> Result<Digest<48>> {
    Digest::new(&SHA3_384)
}
pub fn new256() -> Result<Digest<32>> {
    Digest::new(&SHA3_256)
}
pub fn new224() -> Result<Digest<28>> {
    Digest::new(&SHA3_224)
}

// Legacy Keccak digests, as used by Ethereum.
pub fn new_keccak512() -> Result<Digest<64>> {
    Digest::new(&KECCAK_512)
}
pub fn new_keccak384() -> Result<Digest<48>> {
    Digest::new(&KECCAK_384)
}
pub fn new_keccak256() -> Result<Digest<32>> {
    Digest::new(&KECCAK_256)
}
pub fn new_keccak224() -> Result<Digest<28>> {
    Digest::new(&KECCAK_224)
}


pub fn new_shake128() -> Result<SHAKE<16>> {
    SHAKE::new(&SHAKE_128)
}

// NewShake256 creates a new SHAKE256 XOF.
pub fn new_shake256() -> Result<SHAKE<32>> {
    SHAKE::new(&SHAKE_256)
}

#[cfg(test)]
mod tests {

    use super::*;
    use hex_literal::*;

    fn seq100() -> [u8; 100] {
        let mut data = [0; 100];
        for i in 0..100 {
            data[i] = i as u8;
        }
        data
    }

    // SHAKE128 over 0..100, 200 bytes
    const SHAKE128_SEQ100: [u8; 200] = hex!("04eba30b78550ee461bb4d591d2b3667eb844002eee5a1c7199f7d0420385f1118a36dbd5ab19739eea2d2e1789008f9492302b3115e36f47e838c8af0eb8e93569815cad998deced9bfb064bed1fcb8b2c14b7847a95d8ac3eb63a30b6289d96fc855394727560b201e074063a595c9e41af091362e55fc1e8b13c0a920ae83961e4664f9a1235d4d0f4ea2c93c89f7f84808ac943d1a3d927b64b40bf33d470b42601eff17c0b62e032cb102eacda8392d75641d8e3c4b27d0a9487d6ad7b04ca47079a459a643");

    #[test]
    fn test_sha3() {
        let data = seq100();

        let mut h = new512().unwrap();
        h.write(&data).unwrap();
        let out = h.sum().unwrap();
        let expect = hex!(
            "6286a3e2a02236f45739be74f1d1d83cc55c7dca0018f852ac52b5f5ed9b3d1728fa4eb2087e87f16fbbdd64abef783f1953f20d06cf271b8f2fce2a3beb76ff"
        );
        assert_eq!(out, expect);

        let mut h = new256().unwrap();
        h.write(&data).unwrap();
        let out = h.sum().unwrap();
        let expect = hex!("8c46d8901ae6919eb001cd4a9907a22aaa47954630099a473d2d5336ea7689e1");
        assert_eq!(out, expect);
    }

    #[test]
    fn test_empty() {
        assert_eq!(new224().unwrap().sum().unwrap(), hex!("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"));
        assert_eq!(
            new256().unwrap().sum().unwrap(),
            hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
        );
        assert_eq!(
            new384().unwrap().sum().unwrap(),
            hex!("0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004")
        );
        assert_eq!(
            new512().unwrap().sum().unwrap(),
            hex!(
                "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6"
                "15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
            )
        );

        assert_eq!(
            new_keccak224().unwrap().sum().unwrap(),
            hex!("f71837502ba8e10837bdd8d365adb85591895602fc552b48b7390abd")
        );
        assert_eq!(
            new_keccak256().unwrap().sum().unwrap(),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(
            new_keccak384().unwrap().sum().unwrap(),
            hex!("2c23146a63a29acf99e73b88f8c24eaa7dc60aa771780ccc006afbfa8fe2479b2dd2b21362337441ac12b515911957ff")
        );
        assert_eq!(
            new_keccak512().unwrap().sum().unwrap(),
            hex!(
                "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304"
                "c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
            )
        );

        let mut out = [0u8; 32];
        new_shake128().unwrap().read(&mut out).unwrap();
        assert_eq!(out, hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"));
        let mut out = [0u8; 64];
        new_shake256().unwrap().read(&mut out).unwrap();
        assert_eq!(
            out,
            hex!(
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
                "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
            )
        );
    }

    #[test]
    fn test_abc() {
        let mut h = new256().unwrap();
        h.write(b"abc").unwrap();
        assert_eq!(h.sum().unwrap(), hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"));

        let mut h = new512().unwrap();
        h.write(b"abc").unwrap();
        assert_eq!(
            h.sum().unwrap(),
            hex!(
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e"
                "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
            )
        );

        let mut h = new_keccak256().unwrap();
        h.write(b"abc").unwrap();
        assert_eq!(h.sum().unwrap(), hex!("4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"));

        let mut out = [0u8; 32];
        new_shake128().unwrap().absorb(b"abc").unwrap().squeeze(&mut out).unwrap();
        assert_eq!(out, hex!("5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8"));

        let mut out = [0u8; 64];
        new_shake256().unwrap().absorb(b"abc").unwrap().squeeze(&mut out).unwrap();
        assert_eq!(
            out,
            hex!(
                "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739"
                "d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4"
            )
        );
    }

    #[test]
    fn test_sha3_256_1600_bits() {
        let mut h = new256().unwrap();
        h.write(&[0xa3; 200]).unwrap();
        assert_eq!(h.sum().unwrap(), hex!("79f38adec5c20307a98ef76e8324afbfd46cfd81b22e3973c65fa1bd9de31787"));
    }

    // SHAKE256 over 200 bytes of 0xa3, first 300 output bytes
    const SHAKE256_A3_1600: [u8; 300] = hex!(
        "cd8a920ed141aa0407a22d59288652e9d9f1a7ee0c1e7c1ca699424da84a904d"
        "2d700caae7396ece96604440577da4f3aa22aeb8857f961c4cd8e06f0ae6610b"
        "1048a7f64e1074cd629e85ad7566048efc4fb500b486a3309a8f26724c0ed628"
        "001a1099422468de726f1061d99eb9e93604d5aa7467d4b1bd6484582a384317"
        "d7f47d750b8f5499512bb85a226c4243556e696f6bd072c5aa2d9b69730244b5"
        "6853d16970ad817e213e470618178001c9fb56c54fefa5fee67d2da524bb3b0b"
        "61ef0e9114a92cdbb6cccb98615cfe76e3510dd88d1cc28ff99287512f24bfaf"
        "a1a76877b6f37198e3a641c68a7c42d45fa7acc10dae5f3cefb7b735f12d4e58"
        "9f7a456e78c0f5e4c4471fffa5e4fa0514ae974d8c2648513b5db494cea84715"
        "6d277ad0e141c24c7839064c"
    );

    #[test]
    fn test_shake256_1600_bits() {
        // shorter than, equal to, just past and twice the 136-byte rate
        for len in [32, 135, 136, 137, 272, 300] {
            let mut ctx = KeccakCtx::new(&SHAKE_256).unwrap();
            ctx.set_xof_len(len).unwrap();
            ctx.update(&[0xa3; 200]).unwrap();
            let mut out = vec![0; len];
            assert_eq!(ctx.finalize(&mut out).unwrap(), len);
            assert_eq!(out[..], SHAKE256_A3_1600[..len], "len={}", len);
        }

        let mut h = new_shake256().unwrap();
        h.write(&[0xa3; 100]).unwrap();
        h.write(&[0xa3; 100]).unwrap();
        let mut head = [0u8; 136];
        let mut tail = [0u8; 164];
        h.read(&mut head).unwrap();
        h.read(&mut tail).unwrap();
        assert_eq!(head, SHAKE256_A3_1600[..136]);
        assert_eq!(tail, SHAKE256_A3_1600[136..]);
    }

    #[test]
    fn test_constructors_bind_family() {
        assert!(core::ptr::eq(new224().unwrap().ctx().family(), &SHA3_224));
        assert!(core::ptr::eq(new512().unwrap().ctx().family(), &SHA3_512));
        assert!(core::ptr::eq(new_keccak256().unwrap().ctx().family(), &KECCAK_256));
        assert!(core::ptr::eq(new_keccak384().unwrap().ctx().family(), &KECCAK_384));

        let h = new_shake128().unwrap();
        assert!(h.ctx().is_xof());
        assert_eq!((h.size(), h.block_size()), (16, 168));
        let h = new_shake256().unwrap();
        assert_eq!((h.size(), h.block_size(), h.ctx().digest_size()), (32, 136, 32));
    }

    #[test]
    fn test_shake() {
        let data = seq100();
        let expect = SHAKE128_SEQ100;

        let mut h = new_shake128().unwrap();
        h.write(&data).unwrap();
        let mut buf = [0; 100];
        h.read(&mut buf).unwrap();
        assert_eq!(buf, expect[..100]);

        h.read(&mut buf).unwrap();
        assert_eq!(buf, expect[100..]);
    }

    #[test]
    fn test_shake_lengths() {
        let data = seq100();
        // shorter than, equal to and longer than one block
        for len in [1, 32, 167, 168, 169, 200] {
            let mut ctx = KeccakCtx::new(&SHAKE_128).unwrap();
            ctx.set_xof_len(len).unwrap();
            ctx.update(&data).unwrap();
            let mut out = vec![0; len];
            assert_eq!(ctx.finalize(&mut out).unwrap(), len);
            assert_eq!(out[..], SHAKE128_SEQ100[..len]);
        }
    }

    #[test]
    fn test_shake_prefix_consistency() {
        let data = seq100();
        for family in [&SHAKE_128, &SHAKE_256] {
            let long_len = 5 * family.block_size + 17;
            let mut long = KeccakCtx::new(family).unwrap();
            long.set_xof_len(long_len).unwrap();
            long.update(&data).unwrap();
            let mut expect = vec![0; long_len];
            long.finalize(&mut expect).unwrap();

            for len in [0, 1, family.block_size, 2 * family.block_size + 3, long_len] {
                let mut ctx = KeccakCtx::new(family).unwrap();
                ctx.set_xof_len(len).unwrap();
                ctx.update(&data).unwrap();
                let mut out = vec![0; len];
                ctx.finalize(&mut out).unwrap();
                assert_eq!(out[..], expect[..len], "{} len={}", family.name, len);
            }

            // incremental squeezes in odd sizes give the same stream
            let mut ctx = KeccakCtx::new(family).unwrap();
            ctx.update(&data).unwrap();
            let mut got = Vec::new();
            let mut step = 1;
            while got.len() < long_len {
                let mut chunk = vec![0; step.min(long_len - got.len())];
                ctx.squeeze(&mut chunk).unwrap();
                got.extend_from_slice(&chunk);
                step = step * 3 + 1;
            }
            assert_eq!(got, expect);
        }
    }

    #[test]
    fn test_sum_keeps_running() {
        let mut h = new256().unwrap();
        h.write(b"ab").unwrap();
        let partial = h.sum().unwrap();
        h.write(b"c").unwrap();
        assert_ne!(partial, h.sum().unwrap());
        assert_eq!(h.sum().unwrap(), hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"));
        assert_eq!(h.size(), 32);
        assert_eq!(h.block_size(), 136);

        h.reset();
        assert_eq!(h.sum().unwrap(), hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"));
    }

    #[test]
    fn test_shake_xof_trait() {
        let mut h = new_shake256().unwrap();
        let mut a = [0u8; 40];
        h.absorb(b"abc").unwrap().squeeze(&mut a).unwrap();
        assert_eq!(h.absorb(b"more").err(), Some(Error::AlreadyFinalized));

        let mut b = [0u8; 40];
        h.init().unwrap().absorb(b"abc").unwrap().squeeze(&mut b).unwrap();
        assert_eq!(a, b);
        assert_eq!(h.size(), 32);
    }
}
