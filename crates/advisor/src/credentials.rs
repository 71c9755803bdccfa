//! Credential selection for the text-generation service.
//!
//! The provider is injected at construction so deployments can rotate keys
//! or plug in a secret manager without touching the pipeline. Selection is
//! stateless: no affinity is kept across calls.

use rand::seq::SliceRandom;

/// Source of credentials for the external text-generation service.
pub trait CredentialProvider: Send + Sync {
    /// Returns a credential for one call, or `None` when the pool is empty.
    fn next_credential(&self) -> Option<String>;
}

/// A fixed pool picked from uniformly at random on every call.
#[derive(Debug, Clone, Default)]
pub struct RandomPool {
    keys: Vec<String>,
}

impl RandomPool {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

impl CredentialProvider for RandomPool {
    fn next_credential(&self) -> Option<String> {
        self.keys.choose(&mut rand::thread_rng()).cloned()
    }
}
