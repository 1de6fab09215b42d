use crate::conf::error::ConfigError;
use crate::conf::loader::load_bootstrap;
use crate::conf::validation::ValidatedBootstrap;
use arc_swap::ArcSwap;
use std::path::Path;
use std::sync::Arc;

/// A bootstrap together with the epoch it was published under.
struct Published {
    epoch: u64,
    config: Arc<ValidatedBootstrap>,
}

/// Shared handle to the published bootstrap.
///
/// Readers take a snapshot with [`BootstrapStore::load`] and never see a
/// partially built tree. A reload builds the replacement off to the side and
/// publishes it with one atomic swap. The epoch travels in the same swap, so
/// [`BootstrapStore::snapshot`] never pairs a tree with another tree's epoch.
pub struct BootstrapStore {
    current: ArcSwap<Published>,
}

impl BootstrapStore {
    pub fn new(initial: ValidatedBootstrap) -> Self {
        Self {
            current: ArcSwap::from_pointee(Published {
                epoch: 0,
                config: Arc::new(initial),
            }),
        }
    }

    pub fn load(&self) -> Arc<ValidatedBootstrap> {
        Arc::clone(&self.current.load().config)
    }

    /// Number of swaps since the store was created.
    pub fn epoch(&self) -> u64 {
        self.current.load().epoch
    }

    /// The current bootstrap and its epoch, read from one swap.
    pub fn snapshot(&self) -> (u64, Arc<ValidatedBootstrap>) {
        let published = self.current.load();
        (published.epoch, Arc::clone(&published.config))
    }

    /// Publishes `next` and returns the new epoch.
    pub fn replace(&self, next: ValidatedBootstrap) -> u64 {
        let next = Arc::new(next);
        {
            let old = self.current.load();
            tracing::info!(
                old_listeners = old.config.bootstrap.listeners().len(),
                old_clusters = old.config.bootstrap.clusters().len(),
                new_listeners = next.bootstrap.listeners().len(),
                new_clusters = next.bootstrap.clusters().len(),
                "bootstrap replaced"
            );
        }

        // Atomic swap (point of no return).
        let prev = self.current.rcu(|cur| Published {
            epoch: cur.epoch + 1,
            config: Arc::clone(&next),
        });
        let epoch = prev.epoch + 1;
        tracing::info!(epoch, "bootstrap published");
        epoch
    }

    /// Loads `path` and publishes it. On failure the current value stays.
    pub fn reload_from(&self, path: &Path) -> Result<u64, ConfigError> {
        let next = load_bootstrap(path)?;
        Ok(self.replace(next))
    }
}
