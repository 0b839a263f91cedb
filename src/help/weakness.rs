//! Weaknesses and the check that rules a hero out.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use super::{Problem, Superhero};
use crate::report::AppError;
use crate::Effect;

/// Something that keeps a superhero from helping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Weakness {
    Fearfull,
    Dumb,
    Water,
    TooNice,
    Cryptonic,
    Borderline,
}

/// Why a hero's weaknesses rule them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeaknessesError {
    /// The hero has weaknesses the problem would exploit.
    WeaknessMatch(Vec<Weakness>),
}

impl AppError for WeaknessesError {
    fn message(&self) -> String {
        match self {
            WeaknessesError::WeaknessMatch(weaknesses) => {
                let names: Vec<String> = weaknesses.iter().map(|w| format!("{:?}", w)).collect();
                format!("Weaknesses found : [{}]", names.join(", "))
            }
        }
    }
}

impl fmt::Display for WeaknessesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for WeaknessesError {}

/// Which weaknesses each problem exploits.
#[derive(Debug, Clone)]
pub struct Weaknesses {
    exploited: HashMap<Problem, Vec<Weakness>>,
}

impl Weaknesses {
    /// Use a custom problem table. Problems missing from it exploit nothing.
    pub fn new(exploited: HashMap<Problem, Vec<Weakness>>) -> Self {
        Weaknesses { exploited }
    }

    /// Weaknesses exploited by `problem`.
    pub fn exploited(&self, problem: Problem) -> &[Weakness] {
        self.exploited.get(&problem).map(Vec::as_slice).unwrap_or_default()
    }

    /// Succeeds when none of the hero's weaknesses is exploited by the problem.
    ///
    /// Otherwise fails with every overlapping weakness, in the hero's order.
    pub fn check_weaknesses(&self, hero: &Superhero, problem: Problem) -> Effect<(), WeaknessesError> {
        let exploited = self.exploited(problem);
        let found: Vec<Weakness> = hero
            .weaknesses
            .iter()
            .copied()
            .filter(|weakness| exploited.contains(weakness))
            .collect();
        tracing::debug!(hero = %hero.name, %problem, found = found.len(), "checking weaknesses");

        Effect::fail_when(!found.is_empty(), move || WeaknessesError::WeaknessMatch(found))
    }
}

impl Default for Weaknesses {
    fn default() -> Self {
        use Weakness::*;

        Weaknesses::new(HashMap::from([
            (Problem::BanditInTown, vec![Fearfull]),
            (Problem::CarAccident, vec![Dumb]),
            (Problem::FellIntoWater, vec![Water]),
            (Problem::SuperVilain, vec![TooNice, Cryptonic, Borderline]),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_fails, assert_succeeds};

    fn hero_with(weaknesses: Vec<Weakness>) -> Superhero {
        Superhero::new("test", "test").with_weaknesses(weaknesses)
    }

    #[tokio::test]
    async fn test_no_overlap_succeeds() {
        let hero = hero_with(vec![Weakness::Dumb, Weakness::Water]);
        let outcome = Weaknesses::default()
            .check_weaknesses(&hero, Problem::BanditInTown)
            .run()
            .await;
        assert_succeeds!(outcome, ());
    }

    #[tokio::test]
    async fn test_overlap_lists_every_weakness() {
        let hero = hero_with(vec![Weakness::Cryptonic, Weakness::Water, Weakness::TooNice]);
        let outcome = Weaknesses::default()
            .check_weaknesses(&hero, Problem::SuperVilain)
            .run()
            .await;
        assert_fails!(
            outcome,
            WeaknessesError::WeaknessMatch(vec![Weakness::Cryptonic, Weakness::TooNice])
        );
    }

    #[test]
    fn test_message_lists_weaknesses() {
        let error = WeaknessesError::WeaknessMatch(vec![Weakness::Dumb, Weakness::Water]);
        assert_eq!(error.message(), "Weaknesses found : [Dumb, Water]");
        assert_eq!(error.to_string(), error.message());
    }
}
