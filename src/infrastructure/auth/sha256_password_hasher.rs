use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::application::ports::{PasswordHashError, PasswordHasher};

const SCHEME: &str = "sha256";
const SALT_LEN: usize = 16;
const MAX_WORK_FACTOR: u32 = 24;
const MAX_ROUNDS: u32 = 1 << MAX_WORK_FACTOR;

/// Salted, iterated SHA-256 password hashes.
///
/// Encoded as `sha256$<rounds>$<salt hex>$<digest hex>`; verification reads the
/// round count from the hash, so raising the work factor keeps old hashes valid.
pub struct Sha256PasswordHasher {
    rounds: u32,
}

impl Sha256PasswordHasher {
    /// `work_factor` is the base-2 log of the round count
    pub fn new(work_factor: u32) -> Self {
        Self {
            rounds: 1u32 << work_factor.min(MAX_WORK_FACTOR),
        }
    }

    fn digest(password: &str, salt: &[u8], rounds: u32) -> [u8; 32] {
        let mut digest: [u8; 32] = Sha256::new()
            .chain_update(salt)
            .chain_update(password.as_bytes())
            .finalize()
            .into();

        for _ in 1..rounds {
            digest = Sha256::new()
                .chain_update(digest)
                .chain_update(salt)
                .chain_update(password.as_bytes())
                .finalize()
                .into();
        }
        digest
    }
}

impl PasswordHasher for Sha256PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill(&mut salt);

        let digest = Self::digest(password, &salt, self.rounds);
        Ok(format!(
            "{}${}${}${}",
            SCHEME,
            self.rounds,
            hex::encode(salt),
            hex::encode(digest)
        ))
    }

    fn verify(&self, password: &str, encoded: &str) -> Result<bool, PasswordHashError> {
        let mut parts = encoded.split('$');
        let (Some(SCHEME), Some(rounds), Some(salt), Some(expected), None) = (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) else {
            return Err(PasswordHashError::Malformed);
        };

        let rounds: u32 = rounds.parse().map_err(|_| PasswordHashError::Malformed)?;
        if rounds == 0 || rounds > MAX_ROUNDS {
            return Err(PasswordHashError::Malformed);
        }
        let salt = hex::decode(salt).map_err(|_| PasswordHashError::Malformed)?;
        let expected = hex::decode(expected).map_err(|_| PasswordHashError::Malformed)?;

        let actual = Self::digest(password, &salt, rounds);
        Ok(constant_time_eq(&actual, &expected))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
