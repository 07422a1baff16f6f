//! Code space enumeration

use crate::core::{Code, Color, EngineConfig};

/// Enumerate every code of the configured length and color count
///
/// Codes come out in ascending lexicographic order (position 0 most
/// significant), so the result is already a valid sorted candidate set.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Code, EngineConfig};
/// use mastermind_solver::solver::generate_all;
///
/// let codes = generate_all(&EngineConfig::new(2, 3).unwrap());
/// assert_eq!(codes.len(), 9);
/// assert_eq!(codes[0], Code::from([0, 0]));
/// assert_eq!(codes[1], Code::from([0, 1]));
/// assert_eq!(codes[8], Code::from([2, 2]));
/// ```
#[must_use]
pub fn generate_all(config: &EngineConfig) -> Vec<Code> {
    let length = config.code_length();
    let colors = config.colors();

    let mut codes = Vec::with_capacity(config.space_size());
    let mut pegs: Vec<Color> = vec![0; length];

    loop {
        codes.push(Code::from(pegs.as_slice()));

        // Odometer step: bump the last position, carrying leftwards
        let mut position = length;
        loop {
            if position == 0 {
                return codes;
            }
            position -= 1;

            if usize::from(pegs[position]) + 1 < colors {
                pegs[position] += 1;
                break;
            }
            pegs[position] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_space_has_1296_codes() {
        let codes = generate_all(&EngineConfig::default());
        assert_eq!(codes.len(), 1296);
        assert_eq!(codes.first(), Some(&Code::from([0, 0, 0, 0])));
        assert_eq!(codes.last(), Some(&Code::from([5, 5, 5, 5])));
    }

    #[test]
    fn space_is_strictly_ascending() {
        let codes = generate_all(&EngineConfig::default());
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn single_color_space() {
        let codes = generate_all(&EngineConfig::new(3, 1).unwrap());
        assert_eq!(codes, vec![Code::from([0, 0, 0])]);
    }

    #[test]
    fn single_peg_space() {
        let codes = generate_all(&EngineConfig::new(1, 4).unwrap());
        let expected: Vec<Code> = (0..4).map(|c| Code::from([c])).collect();
        assert_eq!(codes, expected);
    }

    #[test]
    fn every_code_has_configured_shape() {
        let config = EngineConfig::new(3, 5).unwrap();
        let codes = generate_all(&config);
        assert_eq!(codes.len(), 125);
        assert!(codes.iter().all(|c| c.len() == 3));
        assert!(codes.iter().flat_map(Code::pegs).all(|&p| p < 5));
    }
}
