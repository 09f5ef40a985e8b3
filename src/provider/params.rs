//! Opaque key/value parameter lists exchanged with the host library.

/// Requested XOF output length in bytes.
pub const DIGEST_PARAM_XOFLEN: &str = "xoflen";
pub const DIGEST_PARAM_BLOCK_SIZE: &str = "blocksize";
pub const DIGEST_PARAM_SIZE: &str = "size";
pub const DIGEST_PARAM_XOF: &str = "xof";
pub const DIGEST_PARAM_ALGID_ABSENT: &str = "algid-absent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    UInt(u64),
    Int(i64),
    Utf8(String),
    Octets(Vec<u8>),
}

impl ParamValue {
    /// Integer values that fit a `usize`; anything else is malformed.
    pub fn to_usize(&self) -> Option<usize> {
        match *self {
            ParamValue::UInt(v) => usize::try_from(v).ok(),
            ParamValue::Int(v) => usize::try_from(v).ok(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: ParamValue,
}

impl Param {
    pub fn new(key: &str, value: ParamValue) -> Self {
        Param { key: key.to_owned(), value }
    }

    pub fn uint(key: &str, v: u64) -> Self {
        Param::new(key, ParamValue::UInt(v))
    }
}

/// First parameter named `key`.
pub fn locate<'a>(params: &'a [Param], key: &str) -> Option<&'a Param> {
    params.iter().find(|p| p.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_usize() {
        assert_eq!(ParamValue::UInt(64).to_usize(), Some(64));
        assert_eq!(ParamValue::Int(64).to_usize(), Some(64));
        assert_eq!(ParamValue::Int(-1).to_usize(), None);
        assert_eq!(ParamValue::Utf8("64".into()).to_usize(), None);
        assert_eq!(ParamValue::Octets(vec![64]).to_usize(), None);
    }

    #[test]
    fn test_locate() {
        let params = [Param::uint("a", 1), Param::uint(DIGEST_PARAM_XOFLEN, 2), Param::uint(DIGEST_PARAM_XOFLEN, 3)];
        assert_eq!(locate(&params, DIGEST_PARAM_XOFLEN), Some(&params[1]));
        assert_eq!(locate(&params, "b"), None);
    }
}
