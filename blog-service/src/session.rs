/// Signed page-view counter cookie codec.
///
/// The counter is observational only, so a bad signature is not an error:
/// the value is discarded and counting restarts.
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Cookie carrying the per-client page-view counter.
pub const PAGE_VIEWS_COOKIE: &str = "page_views";

fn mac_for(secret: &str, count: u64) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(count.to_string().as_bytes());
    mac
}

/// Encode a counter value as `<count>.<hex hmac>`.
pub fn sign_counter(secret: &str, count: u64) -> String {
    let tag = mac_for(secret, count).finalize().into_bytes();
    format!("{}.{}", count, hex::encode(tag))
}

/// Decode a counter cookie value, returning `None` when the value is
/// malformed or the signature does not verify.
pub fn verify_counter(secret: &str, value: &str) -> Option<u64> {
    let (count, tag_hex) = value.split_once('.')?;
    let count: u64 = count.parse().ok()?;
    let tag = hex::decode(tag_hex).ok()?;

    mac_for(secret, count).verify_slice(&tag).ok()?;
    Some(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_round_trips() {
        let signed = sign_counter("secret", 7);
        assert_eq!(verify_counter("secret", &signed), Some(7));
    }

    #[test]
    fn test_tampered_count_is_discarded() {
        let signed = sign_counter("secret", 7);
        let forged = signed.replacen('7', "8", 1);
        assert_eq!(verify_counter("secret", &forged), None);
    }

    #[test]
    fn test_wrong_secret_is_discarded() {
        let signed = sign_counter("secret", 7);
        assert_eq!(verify_counter("other-secret", &signed), None);
    }

    #[test]
    fn test_malformed_values_are_discarded() {
        assert_eq!(verify_counter("secret", ""), None);
        assert_eq!(verify_counter("secret", "12"), None);
        assert_eq!(verify_counter("secret", "abc.zzz"), None);
    }
}
