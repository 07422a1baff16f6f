//! Secret code generation

use crate::core::{Code, Color};
use crate::solver::Engine;
use rand::Rng;

/// Draw a secret with one uniformly random color per position
///
/// The random source is supplied by the caller, so a seeded generator
/// reproduces the same secret.
///
/// # Examples
/// ```
/// use mastermind_solver::game::random_secret;
/// use mastermind_solver::solver::Engine;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let engine = Engine::default();
/// let a = random_secret(&engine, &mut StdRng::seed_from_u64(7));
/// let b = random_secret(&engine, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// assert!(engine.code(a).is_ok());
/// ```
pub fn random_secret<R: Rng>(engine: &Engine, rng: &mut R) -> Code {
    let pegs: Vec<Color> = (0..engine.code_length())
        .map(|_| rng.random_range(0..engine.colors()) as Color)
        .collect();
    Code::from(pegs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_is_valid_for_engine() {
        let engine = Engine::new(5, 8).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let secret = random_secret(&engine, &mut rng);
            assert!(engine.code(secret).is_ok());
        }
    }

    #[test]
    fn seeded_secrets_reproduce() {
        let engine = Engine::default();
        let first: Vec<Code> = {
            let mut rng = StdRng::seed_from_u64(1234);
            (0..10).map(|_| random_secret(&engine, &mut rng)).collect()
        };
        let second: Vec<Code> = {
            let mut rng = StdRng::seed_from_u64(1234);
            (0..10).map(|_| random_secret(&engine, &mut rng)).collect()
        };
        assert_eq!(first, second);
    }

    #[test]
    fn secrets_cover_all_colors() {
        let engine = Engine::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut seen = [false; 6];

        for _ in 0..200 {
            for &peg in random_secret(&engine, &mut rng).pegs() {
                seen[usize::from(peg)] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn single_color_secret() {
        let engine = Engine::new(4, 1).unwrap();
        let secret = random_secret(&engine, &mut StdRng::seed_from_u64(0));
        assert_eq!(secret, Code::from([0, 0, 0, 0]));
    }
}
