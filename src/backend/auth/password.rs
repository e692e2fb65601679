/**
 * Password Hashing
 *
 * Salted, adaptive one-way hashing of user passwords with bcrypt.
 *
 * Each call to `hash` draws a fresh salt, which bcrypt embeds in the digest
 * string, so hashing is non-deterministic while verification only needs the
 * plaintext and the stored digest. bcrypt compares in constant time.
 *
 * bcrypt only reads the first 72 bytes of its input. A longer password is
 * an error on `hash` and a mismatch on `verify`, never a silent match on its
 * prefix.
 *
 * bcrypt is slow. Request handlers go through `hash_async` and
 * `verify_async`, which move the work onto tokio's blocking pool.
 */

use thiserror::Error;

use crate::shared::MAX_PASSWORD_BYTES;

/// Default bcrypt work factor (2^10 rounds)
pub const BCRYPT_COST: u32 = 10;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum HashError {
    /// bcrypt refused the input or the cost
    #[error("password hashing failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// Input past bcrypt's byte limit
    #[error("password is {0} bytes, limit is {limit}", limit = MAX_PASSWORD_BYTES)]
    TooLong(usize),

    /// The blocking task panicked or was cancelled
    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Credential hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(BCRYPT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The configured work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashError::TooLong(plaintext.len()));
        }
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A digest that bcrypt cannot parse, or input over 72 bytes, counts as a
    /// mismatch.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            tracing::debug!("Rejecting {}-byte password", plaintext.len());
            return false;
        }
        bcrypt::verify(plaintext, digest).unwrap_or_else(|e| {
            tracing::debug!("Rejecting unparsable password digest: {}", e);
            false
        })
    }

    /// `hash` on the blocking pool
    pub async fn hash_async(&self, plaintext: String) -> Result<String, HashError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// `verify` on the blocking pool
    pub async fn verify_async(&self, plaintext: String, digest: String) -> bool {
        let hasher = *self;
        match tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest)).await {
            Ok(valid) => valid,
            Err(e) => {
                tracing::error!("Password verification task failed: {}", e);
                false
            }
        }
    }

    /// Spend the cost of one verification without a digest to check against
    ///
    /// Used when the account does not exist, so that the lookup miss takes as
    /// long as a wrong password. Always returns `false`.
    pub async fn verify_missing_async(&self, plaintext: String) -> bool {
        if let Err(e) = self.hash_async(plaintext).await {
            tracing::debug!("Placeholder password hash failed: {}", e);
        }
        false
    }
}
