//! Abilities and the check that matches them against a problem.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;

use super::{Problem, Superhero};
use crate::report::AppError;
use crate::Effect;

/// Something a superhero can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Ability {
    DistanceFight,
    MeleeFight,
    MidDistanceFight,
    IronBody,
    Fly,
    Strength,
    Dive,
    LazerEyes,
    ElasticBody,
    DoNotGiveUp,
}

/// Why a hero's abilities do not fit a problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbilitiesError {
    /// None of the hero's abilities is required by the problem.
    AbilityUnmatch,
}

impl AppError for AbilitiesError {
    fn message(&self) -> String {
        match self {
            AbilitiesError::AbilityUnmatch => {
                "Couldn't find the required ability for your problem".to_string()
            }
        }
    }
}

impl fmt::Display for AbilitiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for AbilitiesError {}

/// Which abilities each problem calls for.
#[derive(Debug, Clone)]
pub struct Abilities {
    required: HashMap<Problem, Vec<Ability>>,
}

impl Abilities {
    /// Use a custom problem table. Problems missing from it require nothing.
    pub fn new(required: HashMap<Problem, Vec<Ability>>) -> Self {
        Abilities { required }
    }

    /// Abilities required by `problem`.
    pub fn required(&self, problem: Problem) -> &[Ability] {
        self.required.get(&problem).map(Vec::as_slice).unwrap_or_default()
    }

    /// The hero's abilities that the problem requires, in the hero's order.
    ///
    /// Fails with [`AbilitiesError::AbilityUnmatch`] when there are none.
    pub fn check_abilities(
        &self,
        hero: &Superhero,
        problem: Problem,
    ) -> Effect<Vec<Ability>, AbilitiesError> {
        let required = self.required(problem);
        let usable: Vec<Ability> = hero
            .abilities
            .iter()
            .copied()
            .filter(|ability| required.contains(ability))
            .collect();
        tracing::debug!(hero = %hero.name, %problem, usable = usable.len(), "checking abilities");

        if usable.is_empty() {
            Effect::fail(AbilitiesError::AbilityUnmatch)
        } else {
            Effect::succeed(usable)
        }
    }
}

impl Default for Abilities {
    fn default() -> Self {
        use Ability::*;

        Abilities::new(HashMap::from([
            (
                Problem::BanditInTown,
                vec![DistanceFight, MeleeFight, MidDistanceFight, IronBody],
            ),
            (Problem::CarAccident, vec![Fly, Strength]),
            (Problem::FellIntoWater, vec![Dive]),
            (Problem::SuperVilain, vec![LazerEyes, IronBody, ElasticBody]),
        ]))
    }
}
