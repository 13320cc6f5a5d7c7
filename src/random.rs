//! Random identifiers for test fixtures.
//!
//! Output is drawn from `[A-Za-z0-9]`. Nothing here guarantees uniqueness;
//! callers that need distinct names should ask for enough characters.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Generate a random alphanumeric string of exactly `len` characters.
///
/// Uses the thread-local RNG, so concurrent callers do not contend.
pub fn gen_random_str(len: usize) -> String {
    gen_random_str_with(&mut rand::thread_rng(), len)
}

/// Generate a random alphanumeric string from a caller-supplied RNG.
///
/// Pass a seeded generator (e.g. `StdRng::seed_from_u64`) for
/// reproducible fixtures.
pub fn gen_random_str_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Generate a node name made of `prefix` and `len` random characters.
pub fn random_node_name(prefix: &str, len: usize) -> String {
    format!("{}{}", prefix, gen_random_str(len))
}
