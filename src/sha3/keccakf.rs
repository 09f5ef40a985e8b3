//! Keccak-f[1600] permutation.
//!
//! The round body is shared by every backend. Accelerated entry points are the
//! same rounds compiled with extra target features and must only be called
//! after the corresponding runtime detection succeeded.

/*
rho shifts after pi:

25 39  3 10 43         8 18  1  6 25
55 20 36 44  6   pi   45 61 28 20  3
28 27  0  1 62  --->  21 14  0 44 43
56 14 18  2 61        41  2 62 55 39
21  8 41 45 15        15 56 27 36 10
*/
#[rustfmt::skip]
const RHO: [u32; 25] = [
     0, 44, 43, 21, 14,
    28, 20,  3, 45, 61,
     1,  6, 25,  8, 18,
    27, 36, 10, 15, 56,
    62, 55, 39, 41,  2,
];

/*
Keccak permutation round.
13 14 10 11 12     19 20  1  7 13      13 19 20  1  7
8  9  5  6  7  pi  16 22  3  9 10  ad.  3  9 10 16 22  <- adjusts to align
3  4  0  1  2  =>  18 24  0  6 12  =>  18 24  0  6 12
23 24 20 21 22     15 21  2  8 14       8 14 15 21  2
18 19 15 16 17     17 23  4  5 11      23  4  5 11 17

Note the order of the states a will change after the permutation, and repeats every 4 rounds:
13 14 10 11 12       13 19 20  1  7      13  4 15  6 22      13 24  5 16  2
 8  9  5  6  7  rd.   3  9 10 16 22      18  9 20 11  2      23  9 15  1 12
 3  4  0  1  2  =>   18 24  0  6 12  =>  23 14  0 16  7  =>   8 19  0 11 22  =>
23 24 20 21 22        8 14 15 21  2       3 19  5 21 12      18  4 10 21  7
18 19 15 16 17       23  4  5 11 17       8 24 10  1 17       3 14 20  6 17

13 14 10 11 12
 8  9  5  6  7
 3  4  0  1  2  => ...
23 24 20 21 22
18 19 15 16 17
*/
#[rustfmt::skip]
macro_rules! round {
    (
        $a13:expr, $a14:expr, $a10:expr, $a11:expr, $a12:expr,
        $a8:expr,  $a9:expr,  $a5:expr,  $a6:expr,  $a7:expr,
        $a3:expr,  $a4:expr,  $a0:expr,  $a1:expr,  $a2:expr,
        $a23:expr, $a24:expr, $a20:expr, $a21:expr, $a22:expr,
        $a18:expr, $a19:expr, $a15:expr, $a16:expr, $a17:expr,
        $rci:expr,
     ) => {{
        let mut bc0 = $a0 ^ $a5 ^ $a10 ^ $a15 ^ $a20;
        let mut bc1 = $a1 ^ $a6 ^ $a11 ^ $a16 ^ $a21;
        let mut bc2 = $a2 ^ $a7 ^ $a12 ^ $a17 ^ $a22;
        let mut bc3 = $a3 ^ $a8 ^ $a13 ^ $a18 ^ $a23;
        let mut bc4 = $a4 ^ $a9 ^ $a14 ^ $a19 ^ $a24;
        let d0 = bc4 ^ bc1.rotate_left(1);
        let d1 = bc0 ^ bc2.rotate_left(1);
        let d2 = bc1 ^ bc3.rotate_left(1);
        let d3 = bc2 ^ bc4.rotate_left(1);
        let d4 = bc3 ^ bc0.rotate_left(1);

        bc0 = ($a0 ^ d0).rotate_left(RHO[0]);
        bc1 = ($a6 ^ d1).rotate_left(RHO[1]);
        bc2 = ($a12 ^ d2).rotate_left(RHO[2]);
        bc3 = ($a18 ^ d3).rotate_left(RHO[3]);
        bc4 = ($a24 ^ d4).rotate_left(RHO[4]);

        $a0 = bc0 ^ (bc2 & !bc1) ^ $rci;
        $a6 = bc1 ^ (bc3 & !bc2);
        $a12 = bc2 ^ (bc4 & !bc3);
        $a18 = bc3 ^ (bc0 & !bc4);
        $a24 = bc4 ^ (bc1 & !bc0);

        bc0 = ($a3 ^ d3).rotate_left(RHO[5]);
        bc1 = ($a9 ^ d4).rotate_left(RHO[6]);
        bc2 = ($a10 ^ d0).rotate_left(RHO[7]);
        bc3 = ($a16 ^ d1).rotate_left(RHO[8]);
        bc4 = ($a22 ^ d2).rotate_left(RHO[9]);
        $a10 = bc0 ^ (bc2 & !bc1);
        $a16 = bc1 ^ (bc3 & !bc2);
        $a22 = bc2 ^ (bc4 & !bc3);
        $a3 = bc3 ^ (bc0 & !bc4);
        $a9 = bc4 ^ (bc1 & !bc0);

        bc0 = ($a1 ^ d1).rotate_left(RHO[10]);
        bc1 = ($a7 ^ d2).rotate_left(RHO[11]);
        bc2 = ($a13 ^ d3).rotate_left(RHO[12]);
        bc3 = ($a19 ^ d4).rotate_left(RHO[13]);
        bc4 = ($a20 ^ d0).rotate_left(RHO[14]);
        $a20 = bc0 ^ (bc2 & !bc1);
        $a1 = bc1 ^ (bc3 & !bc2);
        $a7 = bc2 ^ (bc4 & !bc3);
        $a13 = bc3 ^ (bc0 & !bc4);
        $a19 = bc4 ^ (bc1 & !bc0);

        bc0 = ($a4 ^ d4).rotate_left(RHO[15]);
        bc1 = ($a5 ^ d0).rotate_left(RHO[16]);
        bc2 = ($a11 ^ d1).rotate_left(RHO[17]);
        bc3 = ($a17 ^ d2).rotate_left(RHO[18]);
        bc4 = ($a23 ^ d3).rotate_left(RHO[19]);
        $a5 = bc0 ^ (bc2 & !bc1);
        $a11 = bc1 ^ (bc3 & !bc2);
        $a17 = bc2 ^ (bc4 & !bc3);
        $a23 = bc3 ^ (bc0 & !bc4);
        $a4 = bc4 ^ (bc1 & !bc0);

        bc0 = ($a2 ^ d2).rotate_left(RHO[20]);
        bc1 = ($a8 ^ d3).rotate_left(RHO[21]);
        bc2 = ($a14 ^ d4).rotate_left(RHO[22]);
        bc3 = ($a15 ^ d0).rotate_left(RHO[23]);
        bc4 = ($a21 ^ d1).rotate_left(RHO[24]);
        $a15 = bc0 ^ (bc2 & !bc1);
        $a21 = bc1 ^ (bc3 & !bc2);
        $a2 = bc2 ^ (bc4 & !bc3);
        $a8 = bc3 ^ (bc0 & !bc4);
        $a14 = bc4 ^ (bc1 & !bc0);
    }};
}

// Round constants of the iota step.
#[rustfmt::skip]
const RC: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808A, 0x8000000080008000,
    0x000000000000808B, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008A, 0x0000000000000088, 0x0000000080008009, 0x000000008000000A,
    0x000000008000808B, 0x800000000000008B, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800A, 0x800000008000000A,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

#[rustfmt::skip]
#[inline(always)]
fn rounds(a: &mut [u64; 25]) {
    let mut i = 0;

    while i < 24 {
        round!(
            a[13], a[14], a[10], a[11], a[12],
            a[ 8], a[ 9], a[ 5], a[ 6], a[ 7],
            a[ 3], a[ 4], a[ 0], a[ 1], a[ 2],
            a[23], a[24], a[20], a[21], a[22],
            a[18], a[19], a[15], a[16], a[17],
            RC[i],
        );

        round!(
            a[13], a[19], a[20], a[ 1], a[ 7],
            a[ 3], a[ 9], a[10], a[16], a[22],
            a[18], a[24], a[ 0], a[ 6], a[12],
            a[ 8], a[14], a[15], a[21], a[ 2],
            a[23], a[ 4], a[ 5], a[11], a[17],
            RC[i+1],
        );

        round!(
            a[13], a[ 4], a[15], a[ 6], a[22],
            a[18], a[ 9], a[20], a[11], a[ 2],
            a[23], a[14], a[ 0], a[16], a[ 7],
            a[ 3], a[19], a[ 5], a[21], a[12],
            a[ 8], a[24], a[10], a[ 1], a[17],
            RC[i+2],
        );

        round!(
            a[13], a[24], a[ 5], a[16], a[ 2],
            a[23], a[ 9], a[15], a[ 1], a[12],
            a[ 8], a[19], a[ 0], a[11], a[22],
            a[18], a[ 4], a[10], a[21], a[ 7],
            a[ 3], a[14], a[20], a[ 6], a[17],
            RC[i+3],
        );

        i += 4;
    }
}

/// Portable Keccak-f[1600].
#[inline]
pub(crate) fn keccak_f1600_generic(a: &mut [u64; 25]) {
    rounds(a);
}

/// Keccak-f[1600] with ANDN/RORX available to the code generator.
///
/// # Safety
/// The CPU must support BMI1 and BMI2.
#[cfg(all(feature = "accel", any(target_arch = "x86", target_arch = "x86_64")))]
#[target_feature(enable = "bmi1,bmi2")]
pub(crate) unsafe fn keccak_f1600_bmi2(a: &mut [u64; 25]) {
    rounds(a);
}

/// Keccak-f[1600] with the ARMv8.2 SHA3 extension (EOR3, RAX1, XAR, BCAX)
/// available to the code generator.
///
/// # Safety
/// The CPU must implement FEAT_SHA3.
#[cfg(all(feature = "accel", target_arch = "aarch64"))]
#[target_feature(enable = "sha3")]
pub(crate) unsafe fn keccak_f1600_armsha3(a: &mut [u64; 25]) {
    rounds(a);
}
