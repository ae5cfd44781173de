use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior:
/// the source of randomness, the logger and the amount of threads used to evaluate individuals.
///
/// The environment is created once by the caller and passed into the solver, nothing is
/// initialized lazily behind the scenes.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// An information logger.
    pub logger: InfoLogger,

    /// Amount of worker threads used to evaluate a generation. `None` means rayon's global pool.
    pub parallelism: Option<usize>,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger, parallelism: Option<usize>) -> Self {
        Self { random, logger, parallelism }
    }

    /// Creates a new instance of `Environment` with seeded random and silent logger.
    pub fn new_with_seed(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_with_seed(seed)), ..Self::default() }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), Arc::new(|_| {}), None)
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
