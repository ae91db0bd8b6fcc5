use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::config::Config;
use crate::corpus::Catalogue;

/// Shared application state.
///
/// The catalogue is an immutable snapshot taken at startup; requests read it
/// through the `Arc` and never mutate it, so no locking exists anywhere in
/// the scoring path.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalogue: Arc<Catalogue>,
}

impl AppState {
    pub fn new(config: Config, catalogue: Catalogue) -> Self {
        Self {
            config,
            catalogue: Arc::new(catalogue),
        }
    }

    /// RNG for the random-sample selection. A configured seed makes the draw
    /// deterministic; otherwise the OS entropy source is used.
    pub fn sample_rng(&self) -> StdRng {
        match self.config.sample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let config = Config {
            sample_seed: Some(17),
            ..Config::default()
        };
        let state = AppState::new(config, Catalogue::default());
        let a: u64 = state.sample_rng().gen();
        let b: u64 = state.sample_rng().gen();
        assert_eq!(a, b);
    }
}
