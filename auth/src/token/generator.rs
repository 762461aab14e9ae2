use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::rand_core::RngCore;
use sha2::Digest;
use sha2::Sha256;

/// Number of random bytes behind every token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Opaque bearer token generator.
///
/// Tokens are hex-encoded bytes drawn from the operating system RNG. The
/// plain text is handed to the client exactly once; stores keep only the
/// SHA-256 digest, so a leaked table cannot be replayed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGenerator;

/// Freshly generated token: plain text for the client, digest for the store.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedToken {
    plain_text: String,
    digest: String,
}

impl GeneratedToken {
    pub fn plain_text(&self) -> &str {
        &self.plain_text
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Split into `(plain_text, digest)`.
    pub fn into_parts(self) -> (String, String) {
        (self.plain_text, self.digest)
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for GeneratedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedToken")
            .field("plain_text", &"<redacted>")
            .field("digest", &self.digest)
            .finish()
    }
}

impl TokenGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new random token together with its digest.
    pub fn generate(&self) -> GeneratedToken {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);

        let plain_text = to_hex(&bytes);
        let digest = self.digest(&plain_text);

        GeneratedToken { plain_text, digest }
    }

    /// SHA-256 digest of a presented token, lowercase hex.
    ///
    /// Deterministic, so a presented bearer token can be looked up by digest.
    pub fn digest(&self, plain_text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(plain_text.as_bytes());
        to_hex(&hasher.finalize())
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
