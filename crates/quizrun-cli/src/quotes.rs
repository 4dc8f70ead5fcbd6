//! Quotes behind the menu's hidden entries.

use rand::seq::SliceRandom;
use rand::Rng;

const WISDOM: &[&str] = &[
    "The only true wisdom is in knowing you know nothing.",
    "With great power comes great responsibility.",
    "Knowledge speaks, but wisdom listens.",
];

pub fn life_quote() -> &'static str {
    "The answer to life, the universe, and everything."
}

pub fn password_quote() -> &'static str {
    "The password is: 1337"
}

pub fn wisdom_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WISDOM.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn wisdom_comes_from_the_list() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert!(WISDOM.contains(&wisdom_quote(&mut rng)));
        }
    }

    #[test]
    fn fixed_quotes() {
        assert!(life_quote().contains("life, the universe"));
        assert!(password_quote().ends_with("1337"));
    }
}
