//! C ABI over the provider dispatch surface.
//!
//! Functions return 1 on success and 0 on failure, or a null pointer when no
//! context could be produced. Algorithms are addressed by their index in the
//! registry, see `opengm_sha3_fetch`.

use core::ffi::{CStr, c_char, c_int};
use core::ptr;
use core::slice;

use crate::provider::Provider;
use crate::provider::params::{DIGEST_PARAM_XOFLEN, Param};
use crate::sha3::KeccakCtx;
use crate::sha3::errors::Result;
use crate::sha3::family::{FAMILIES, Family};

pub const OPENGM_SHA3_FLAG_XOF: u32 = 0x1;
pub const OPENGM_SHA3_FLAG_ALGID_ABSENT: u32 = 0x2;

fn family(alg: c_int) -> Option<&'static Family> {
    usize::try_from(alg).ok().and_then(|i| FAMILIES.get(i)).copied()
}

fn status<T>(r: Result<T>) -> c_int {
    match r {
        Ok(_) => 1,
        Err(e) => {
            log::debug!("opengm_sha3: {}", e);
            0
        }
    }
}

unsafe fn input<'a>(p: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if p.is_null() {
        return None;
    }
    Some(unsafe { slice::from_raw_parts(p, len) })
}

unsafe fn output<'a>(p: *mut u8, len: usize) -> Option<&'a mut [u8]> {
    if len == 0 {
        return Some(&mut []);
    }
    if p.is_null() {
        return None;
    }
    Some(unsafe { slice::from_raw_parts_mut(p, len) })
}

/// Registry index of the algorithm named `name`, or -1.
///
/// # Safety
/// `name` must be null or a NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_fetch(name: *const c_char) -> c_int {
    if name.is_null() {
        return -1;
    }
    let Ok(name) = unsafe { CStr::from_ptr(name) }.to_str() else {
        return -1;
    };
    Provider::fetch(name)
        .and_then(|f| FAMILIES.iter().position(|x| ptr::eq(*x, f)))
        .map_or(-1, |i| i as c_int)
}

#[unsafe(no_mangle)]
pub extern "C" fn opengm_sha3_newctx(alg: c_int) -> *mut KeccakCtx {
    let Some(family) = family(alg) else {
        return ptr::null_mut();
    };
    match KeccakCtx::new(family) {
        Ok(ctx) => Box::into_raw(Box::new(ctx)),
        Err(e) => {
            log::debug!("opengm_sha3_newctx: {}", e);
            ptr::null_mut()
        }
    }
}

/// Resets `ctx`; when `has_xoflen` is nonzero the XOF length is set to `xoflen`.
///
/// # Safety
/// `ctx` must be null or a live context from `opengm_sha3_newctx`/`_dupctx`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_init(ctx: *mut KeccakCtx, has_xoflen: c_int, xoflen: usize) -> c_int {
    let Some(ctx) = (unsafe { ctx.as_mut() }) else {
        return 0;
    };
    let params = [Param::uint(DIGEST_PARAM_XOFLEN, xoflen as u64)];
    status(ctx.init((has_xoflen != 0).then_some(&params[..])))
}

/// # Safety
/// `ctx` as for `opengm_sha3_init`; `inp` must point to `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_update(ctx: *mut KeccakCtx, inp: *const u8, len: usize) -> c_int {
    let Some(ctx) = (unsafe { ctx.as_mut() }) else {
        return 0;
    };
    let Some(inp) = (unsafe { input(inp, len) }) else {
        return 0;
    };
    status(ctx.update(inp))
}

/// Writes the digest to `out` and its length to `outl` (if not null).
///
/// # Safety
/// `ctx` as for `opengm_sha3_init`; `out` must point to `outsz` writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_final(
    ctx: *mut KeccakCtx,
    out: *mut u8,
    outl: *mut usize,
    outsz: usize,
) -> c_int {
    let Some(ctx) = (unsafe { ctx.as_mut() }) else {
        return 0;
    };
    let Some(out) = (unsafe { output(out, outsz) }) else {
        return 0;
    };
    match ctx.finalize(out) {
        Ok(n) => {
            if let Some(outl) = unsafe { outl.as_mut() } {
                *outl = n;
            }
            1
        }
        Err(e) => status::<()>(Err(e)),
    }
}

/// # Safety
/// As for `opengm_sha3_final`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_squeeze(ctx: *mut KeccakCtx, out: *mut u8, outsz: usize) -> c_int {
    let Some(ctx) = (unsafe { ctx.as_mut() }) else {
        return 0;
    };
    let Some(out) = (unsafe { output(out, outsz) }) else {
        return 0;
    };
    status(ctx.squeeze(out))
}

/// # Safety
/// `ctx` must be null or a live context.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_dupctx(ctx: *const KeccakCtx) -> *mut KeccakCtx {
    let Some(ctx) = (unsafe { ctx.as_ref() }) else {
        return ptr::null_mut();
    };
    match ctx.dup() {
        Ok(copy) => Box::into_raw(Box::new(copy)),
        Err(e) => {
            log::debug!("opengm_sha3_dupctx: {}", e);
            ptr::null_mut()
        }
    }
}

/// Wipes and frees `ctx`.
///
/// # Safety
/// `ctx` must be null or a live context; it is invalid afterwards.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_freectx(ctx: *mut KeccakCtx) {
    if !ctx.is_null() {
        unsafe { Box::from_raw(ctx) }.destroy();
    }
}

/// Reports block size, digest size (0 for XOFs) and `OPENGM_SHA3_FLAG_*`.
///
/// # Safety
/// Each out pointer must be null or writable.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn opengm_sha3_get_params(
    alg: c_int,
    block_size: *mut usize,
    digest_size: *mut usize,
    flags: *mut u32,
) -> c_int {
    let Some(family) = family(alg) else {
        return 0;
    };
    let p = Provider::get_params(family);
    unsafe {
        if let Some(v) = block_size.as_mut() {
            *v = p.block_size;
        }
        if let Some(v) = digest_size.as_mut() {
            *v = p.digest_size;
        }
        if let Some(v) = flags.as_mut() {
            *v = (p.xof as u32 * OPENGM_SHA3_FLAG_XOF) | (p.algid_absent as u32 * OPENGM_SHA3_FLAG_ALGID_ABSENT);
        }
    }
    1
}
