use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASHING_ITERATIONS, DEFAULT_HASHING_MEMORY_KIB,
    DEFAULT_HASHING_PARALLELISM, MAX_HASHING_ITERATIONS, MAX_HASHING_MEMORY_KIB,
    MAX_HASHING_PARALLELISM, MIN_HASHING_ITERATIONS, MIN_HASHING_PARALLELISM,
};

use serde::Deserialize;

/// Argon2id work factor.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASHING_MEMORY_KIB,
            iterations: DEFAULT_HASHING_ITERATIONS,
            parallelism: DEFAULT_HASHING_PARALLELISM,
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_HASHING_PARALLELISM..=MAX_HASHING_PARALLELISM).contains(&self.parallelism) {
            return Err(ConfigError::hashing(format!(
                "hashing.parallelism must be {}-{}, got {}",
                MIN_HASHING_PARALLELISM, MAX_HASHING_PARALLELISM, self.parallelism
            )));
        }

        if !(MIN_HASHING_ITERATIONS..=MAX_HASHING_ITERATIONS).contains(&self.iterations) {
            return Err(ConfigError::hashing(format!(
                "hashing.iterations must be {}-{}, got {}",
                MIN_HASHING_ITERATIONS, MAX_HASHING_ITERATIONS, self.iterations
            )));
        }

        // Argon2 needs at least 8 KiB per lane.
        let min_memory = 8 * self.parallelism;
        if self.memory_kib < min_memory || self.memory_kib > MAX_HASHING_MEMORY_KIB {
            return Err(ConfigError::hashing(format!(
                "hashing.memory_kib must be {}-{}, got {}",
                min_memory, MAX_HASHING_MEMORY_KIB, self.memory_kib
            )));
        }

        Ok(())
    }
}
