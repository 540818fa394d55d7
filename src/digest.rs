use sha2::{Digest, Sha256};

use crate::types::{BindingReference, BindingValue};

/// SHA-256 of `input`, lower-case hex.
///
/// Unsalted, so bindings written by one process verify in any other.
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Binding value of a session credential.
#[must_use]
pub fn binding_value_of(credential_value: &str) -> BindingValue {
    BindingValue(sha256_hex(credential_value))
}

/// Maps a binding value to the reference stored with the token.
///
/// Owned by the token-persistence layer. Implementations must be deterministic:
/// the reference computed at issuance is compared verbatim with the one
/// computed at validation time.
///
/// Closures qualify:
///
/// ```rust,ignore
/// let binder = SsoSessionBinder::with_deriver(BinderConfig::default(), |v: &BindingValue| {
///     BindingReference::from(v.as_str())
/// });
/// ```
pub trait BindingReferenceDeriver: Send + Sync {
    fn derive_reference(&self, value: &BindingValue) -> BindingReference;
}

impl<F> BindingReferenceDeriver for F
where
    F: Fn(&BindingValue) -> BindingReference + Send + Sync,
{
    fn derive_reference(&self, value: &BindingValue) -> BindingReference {
        self(value)
    }
}

/// Default deriver: SHA-256 hex of the binding value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256ReferenceDeriver;

impl BindingReferenceDeriver for Sha256ReferenceDeriver {
    fn derive_reference(&self, value: &BindingValue) -> BindingReference {
        BindingReference(sha256_hex(value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sha256_hex_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sha256_hex_is_lowercase_fixed_length() {
        let digest = sha256_hex("commonAuthId-value");
        assert_eq!(digest.len(), 64);
        assert!(
            digest
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
            "digest should be lower-case hex: {digest}"
        );
    }

    #[test]
    fn binding_value_deterministic() {
        let v1 = binding_value_of("4f3c-session");
        let v2 = binding_value_of("4f3c-session");
        assert_eq!(v1, v2);
    }

    #[test]
    fn binding_value_sensitive_to_near_equal_inputs() {
        let base = binding_value_of("abc123");
        assert_ne!(base, binding_value_of("abc124"));
        assert_ne!(base, binding_value_of("abc123 "));
        assert_ne!(base, binding_value_of("ABC123"));
        assert_ne!(base, binding_value_of("abc12"));
    }

    #[test]
    fn default_deriver_hashes_binding_value() {
        let value = binding_value_of("abc");
        let reference = Sha256ReferenceDeriver.derive_reference(&value);
        assert_eq!(reference.as_str(), sha256_hex(value.as_str()));
        assert_ne!(reference.as_str(), value.as_str());
    }

    #[test]
    fn closure_deriver() {
        let deriver = |v: &BindingValue| BindingReference(format!("ref:{v}"));
        let reference = deriver.derive_reference(&BindingValue("x".into()));
        assert_eq!(reference.as_str(), "ref:x");
    }
}
