use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const PREFIX: &str = "sha256=";
const HEX_DIGEST_LEN: usize = 64;

/// The HMAC could not be computed at all, as opposed to not matching.
///
/// The dispatcher answers this with a 5xx rather than a 403 so a broken
/// deployment is distinguishable from a forged delivery.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("failed to initialise HMAC-SHA256: {0}")]
    Crypto(#[from] hmac::digest::InvalidLength),
}

/// Verifies a GitHub `X-Hub-Signature-256` header against the raw body.
///
/// The header must be exactly `sha256=` followed by 64 lowercase hex
/// characters; anything else is `Ok(false)` without computing a digest.
/// The recomputed digest is compared with [`constant_time_eq`].
pub fn verify(secret: &str, body: &[u8], signature_header: &str) -> Result<bool, SignatureError> {
    let Some(supplied) = parse_header(signature_header) else {
        return Ok(false);
    };

    let expected = hex::encode(digest(secret, body)?);
    Ok(constant_time_eq(expected.as_bytes(), supplied.as_bytes()))
}

/// Renders the header GitHub would send for `body` signed with `secret`.
pub fn sign(secret: &str, body: &[u8]) -> Result<String, SignatureError> {
    Ok(format!("{PREFIX}{}", hex::encode(digest(secret, body)?)))
}

/// Compares two byte strings without exiting at the first difference.
///
/// Lengths are compared up front: the digest length is fixed and public,
/// so a length mismatch leaks nothing.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let diff = a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y));
    std::hint::black_box(diff) == 0
}

fn parse_header(header: &str) -> Option<&str> {
    let hex_sig = header.strip_prefix(PREFIX)?;
    let well_formed = hex_sig.len() == HEX_DIGEST_LEN
        && hex_sig
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    well_formed.then_some(hex_sig)
}

fn digest(secret: &str, body: &[u8]) -> Result<Vec<u8>, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())?;
    mac.update(body);
    Ok(mac.finalize().into_bytes().to_vec())
}
