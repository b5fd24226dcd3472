use bc_crypto::hash::sha256;

use crate::{Recovery, Share, shamir::recover_secret, shamir_error::Result};

/// Supplies a digest of a share's label and raw value for integrity
/// reporting. Digests annotate results; they never affect reconstruction.
pub trait IntegrityHook {
    fn digest(&self, label: &str, raw_value: &str) -> String;
}

impl<F> IntegrityHook for F
where
    F: Fn(&str, &str) -> String,
{
    fn digest(&self, label: &str, raw_value: &str) -> String {
        self(label, raw_value)
    }
}

/// Hex-encoded SHA-256 of `label:raw_value`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hook;

impl Sha256Hook {
    pub fn fingerprint(label: &str, raw_value: &str) -> [u8; 32] {
        sha256(format!("{}:{}", label, raw_value).as_bytes())
    }
}

impl IntegrityHook for Sha256Hook {
    fn digest(&self, label: &str, raw_value: &str) -> String {
        hex::encode(Self::fingerprint(label, raw_value))
    }
}

/// Per-share verdict of a reconstruction, annotated with its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareAudit {
    pub label: String,
    pub x: i64,
    pub valid: bool,
    pub digest: String,
}

impl Recovery {
    /// Pairs each of `shares` with its verdict and digest. `shares` must be the
    /// slice this result was recovered from.
    pub fn audit(&self, shares: &[Share], hook: &impl IntegrityHook) -> Vec<ShareAudit> {
        shares
            .iter()
            .zip(self.fit_vector())
            .map(|(share, &valid)| ShareAudit {
                label: share.label().to_string(),
                x: share.x(),
                valid,
                digest: hook.digest(share.label(), &share.y().to_string()),
            })
            .collect()
    }
}

/// Recovers the secret and audits every share with `hook`.
pub fn recover_and_audit(
    shares: &[Share],
    threshold: usize,
    hook: &impl IntegrityHook,
) -> Result<(Recovery, Vec<ShareAudit>)> {
    let recovery = recover_secret(shares, threshold)?;
    let audit = recovery.audit(shares, hook);
    Ok((recovery, audit))
}
