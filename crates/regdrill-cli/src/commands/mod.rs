pub mod init;
pub mod level;
pub mod play;
pub mod preview;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seeded RNG when a seed is given, entropy otherwise.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
