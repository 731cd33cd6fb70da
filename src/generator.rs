//! Random password construction.
//!
//! This module is the algorithmic core of PassForge. It builds a password
//! from a requested length and a set of enabled character classes, and
//! guarantees that the output contains at least one character from every
//! enabled class.
//!
//! All randomness flows through a caller-supplied [`rand::Rng`], so the
//! whole construction can be replayed deterministically from a seeded
//! generator in tests. Production callers pass [`rand::rngs::OsRng`].

use rand::Rng;
use thiserror::Error;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// The four character classes a password can draw from.
///
/// Declaration order is significant: guaranteed characters and the union
/// pool are always assembled in this order, so a fixed random sequence
/// always yields the same password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Every class, in declaration order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    /// The fixed, ordered character sequence for this class.
    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }
}

/// Which character classes are enabled for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassToggles {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for ClassToggles {
    /// Letters and digits on, symbols off.
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl ClassToggles {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        match class {
            CharClass::Uppercase => self.uppercase = !self.uppercase,
            CharClass::Lowercase => self.lowercase = !self.lowercase,
            CharClass::Numbers => self.numbers = !self.numbers,
            CharClass::Symbols => self.symbols = !self.symbols,
        }
    }

    /// The enabled classes, in declaration order.
    pub fn enabled(&self) -> Vec<CharClass> {
        CharClass::ALL
            .iter()
            .copied()
            .filter(|&c| self.is_enabled(c))
            .collect()
    }
}

/// A single password request: the desired length and the enabled classes.
///
/// A request is built from the current UI state at the moment the user
/// triggers generation, consumed once, and discarded.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassToggles,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GenerateError {
    /// Every class toggle is disabled, so there is nothing to draw from.
    #[error("at least one character class must be enabled")]
    NoClassSelected,
}

/// Build a random password for the given request.
///
/// The output contains at least one character from every enabled class.
/// The remainder is sampled uniformly, with replacement, from the union of
/// the enabled class sequences, and the combined buffer is shuffled before
/// it is returned.
///
/// The output length equals `request.length`, except when fewer characters
/// are requested than there are enabled classes: the one-per-class
/// guarantee is never truncated, so the output then has one character per
/// enabled class.
///
/// # Errors
///
/// Returns [`GenerateError::NoClassSelected`] if every class is disabled.
/// No other input is rejected here; the CLI layer keeps the length inside
/// its own bounds before a request is formed.
pub fn generate<R: Rng>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let enabled = request.classes.enabled();
    if enabled.is_empty() {
        return Err(GenerateError::NoClassSelected);
    }

    let mut chars: Vec<u8> = Vec::with_capacity(request.length.max(enabled.len()));
    let mut pool: Vec<u8> = Vec::new();

    // One guaranteed character per enabled class, and the union pool built
    // in the same pass, both in class declaration order.
    for class in &enabled {
        let set = class.charset().as_bytes();
        chars.push(set[rng.gen_range(0..set.len())]);
        pool.extend_from_slice(set);
    }

    let remaining = request.length.saturating_sub(chars.len());
    for _ in 0..remaining {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Forward sweep, swapping each position with a random index at or
    // before it, so the guaranteed characters do not stay clustered at the
    // front.
    for i in 0..chars.len() {
        let j = rng.gen_range(0..=i);
        chars.swap(i, j);
    }

    Ok(chars.into_iter().map(char::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn all_classes() -> ClassToggles {
        ClassToggles {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }

    fn only(class: CharClass) -> ClassToggles {
        let mut toggles = ClassToggles {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        toggles.toggle(class);
        toggles
    }

    #[test]
    fn length_matches_request() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            for length in [8, 12, 20, 32] {
                let request = GenerationRequest {
                    length,
                    classes: all_classes(),
                };
                let pwd = generate(&request, &mut rng).unwrap();
                assert_eq!(pwd.len(), length);
            }
        }
    }

    #[test]
    fn every_enabled_class_is_represented() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let request = GenerationRequest {
                length: 8,
                classes: all_classes(),
            };
            let pwd = generate(&request, &mut rng).unwrap();
            for class in CharClass::ALL {
                assert!(
                    pwd.chars().any(|c| class.charset().contains(c)),
                    "password {:?} is missing a {:?} character",
                    pwd,
                    class
                );
            }
        }
    }

    #[test]
    fn single_class_draws_only_from_that_class() {
        for class in CharClass::ALL {
            let mut rng = StdRng::seed_from_u64(3);
            let request = GenerationRequest {
                length: 8,
                classes: only(class),
            };
            let pwd = generate(&request, &mut rng).unwrap();
            assert_eq!(pwd.len(), 8);
            assert!(pwd.chars().all(|c| class.charset().contains(c)));
        }
    }

    #[test]
    fn disabled_classes_never_appear() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let request = GenerationRequest {
                length: 16,
                classes: ClassToggles {
                    uppercase: true,
                    lowercase: false,
                    numbers: true,
                    symbols: false,
                },
            };
            let pwd = generate(&request, &mut rng).unwrap();
            assert!(pwd
                .chars()
                .all(|c| UPPERCASE.contains(c) || NUMBERS.contains(c)));
        }
    }

    #[test]
    fn default_toggles_exclude_symbols() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let request = GenerationRequest {
                length: 12,
                classes: ClassToggles::default(),
            };
            let pwd = generate(&request, &mut rng).unwrap();
            assert!(pwd.chars().all(|c| !SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn guaranteed_chars_survive_short_requests() {
        // Unreachable through the CLI bounds, reachable through the API:
        // the one-per-class guarantee wins over the requested length.
        let mut rng = StdRng::seed_from_u64(11);
        let request = GenerationRequest {
            length: 2,
            classes: all_classes(),
        };
        let pwd = generate(&request, &mut rng).unwrap();
        assert_eq!(pwd.len(), 4);
        for class in CharClass::ALL {
            assert!(pwd.chars().any(|c| class.charset().contains(c)));
        }
    }

    #[test]
    fn zero_classes_is_refused() {
        let mut rng = StdRng::seed_from_u64(0);
        let request = GenerationRequest {
            length: 12,
            classes: ClassToggles {
                uppercase: false,
                lowercase: false,
                numbers: false,
                symbols: false,
            },
        };
        assert_eq!(
            generate(&request, &mut rng),
            Err(GenerateError::NoClassSelected)
        );
    }

    #[test]
    fn same_seed_reproduces_the_same_password() {
        let request = GenerationRequest {
            length: 16,
            classes: all_classes(),
        };
        let a = generate(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate(&request, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_seeds_vary_the_output() {
        let request = GenerationRequest {
            length: 16,
            classes: all_classes(),
        };
        let passwords: std::collections::HashSet<String> = (0..8)
            .map(|seed| generate(&request, &mut StdRng::seed_from_u64(seed)).unwrap())
            .collect();
        assert!(passwords.len() > 1);
    }

    #[test]
    fn enabled_order_is_stable() {
        let toggles = all_classes();
        assert_eq!(toggles.enabled(), CharClass::ALL.to_vec());

        let toggles = ClassToggles {
            uppercase: false,
            lowercase: true,
            numbers: false,
            symbols: true,
        };
        assert_eq!(
            toggles.enabled(),
            vec![CharClass::Lowercase, CharClass::Symbols]
        );
    }
}
