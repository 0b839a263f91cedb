//! Answering a call for help.

use std::sync::Arc;

use super::{
    Abilities, Ability, Problem, SuperHeroes, Superhero, SuperheroRepository, Weaknesses,
};
use crate::effect::parallel::par_zip_with;
use crate::report::{self, DynAppError, ErrorReport};
use crate::Effect;

/// A citizen's request: who they want, and what for.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AskForHelp {
    /// Name of the hero asked for.
    pub name: String,
    /// The trouble at hand.
    pub problem: Problem,
}

impl AskForHelp {
    /// Build a request.
    pub fn new(name: impl Into<String>, problem: Problem) -> Self {
        AskForHelp {
            name: name.into(),
            problem,
        }
    }
}

/// A hero fit for the job, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HelpResult {
    /// The hero who will come.
    pub hero: Superhero,
    /// The hero's abilities that the problem requires.
    pub matching_abilities: Vec<Ability>,
}

/// Every reason a call for help was turned down.
pub type HelpErrors = ErrorReport<DynAppError>;

/// Finds a hero for a problem.
///
/// The lookup runs first and short-circuits on failure. The ability and
/// weakness checks then run in parallel and report together.
#[derive(Debug, Clone)]
pub struct FindHelpService<R> {
    superheroes: SuperHeroes<R>,
    abilities: Arc<Abilities>,
    weaknesses: Arc<Weaknesses>,
}

impl<R: SuperheroRepository> FindHelpService<R> {
    /// Wire the service from its collaborators.
    pub fn new(superheroes: SuperHeroes<R>, abilities: Abilities, weaknesses: Weaknesses) -> Self {
        FindHelpService {
            superheroes,
            abilities: Arc::new(abilities),
            weaknesses: Arc::new(weaknesses),
        }
    }

    /// Find help for `command`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::help::{AskForHelp, FindHelpService, InMemorySuperheroRepository, Problem};
    ///
    /// let service = FindHelpService::<InMemorySuperheroRepository>::default();
    ///
    /// let errors = service
    ///     .find_help(AskForHelp::new("luffy", Problem::FellIntoWater))
    ///     .block()
    ///     .unwrap()
    ///     .unwrap_err();
    /// assert_eq!(
    ///     errors.messages(),
    ///     vec![
    ///         "Couldn't find the required ability for your problem".to_string(),
    ///         "Weaknesses found : [Water]".to_string(),
    ///     ]
    /// );
    /// ```
    pub fn find_help(&self, command: AskForHelp) -> Effect<HelpResult, HelpErrors> {
        let AskForHelp { name, problem } = command;
        let span = tracing::info_span!("find_help", hero = %name, %problem);
        let abilities = Arc::clone(&self.abilities);
        let weaknesses = Arc::clone(&self.weaknesses);

        self.superheroes
            .look_for_superhero(&name)
            .map_err(|error| ErrorReport::one(report::widen(error)))
            .and_then(move |hero| {
                let matching = abilities
                    .check_abilities(&hero, problem)
                    .map_err(report::widen);
                let unexposed = weaknesses
                    .check_weaknesses(&hero, problem)
                    .map_err(report::widen);

                par_zip_with(matching, unexposed, move |matching_abilities, ()| HelpResult {
                    hero,
                    matching_abilities,
                })
                .map_err(HelpErrors::from)
            })
            .instrument(span)
    }
}

impl<R> Default for FindHelpService<R>
where
    R: SuperheroRepository + Default,
{
    fn default() -> Self {
        FindHelpService::new(
            SuperHeroes::new(R::default()),
            Abilities::default(),
            Weaknesses::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::help::{InMemorySuperheroRepository, Weakness};
    use crate::assert_succeeds;
    use tracing_test::traced_test;

    fn service() -> FindHelpService<InMemorySuperheroRepository> {
        FindHelpService::default()
    }

    #[tokio::test]
    #[traced_test]
    async fn test_unknown_hero_skips_checks() {
        let errors = service()
            .find_help(AskForHelp::new("batman", Problem::CarAccident))
            .run()
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(errors.messages(), vec!["batman is unknown".to_string()]);
        assert!(!logs_contain("checking abilities"));
        assert!(!logs_contain("checking weaknesses"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_both_checks_run_when_ability_fails() {
        let errors = service()
            .find_help(AskForHelp::new("luffy", Problem::BanditInTown))
            .run()
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert!(logs_contain("checking abilities"));
        assert!(logs_contain("checking weaknesses"));
    }

    #[tokio::test]
    async fn test_success_carries_hero_and_abilities() {
        let outcome = service()
            .find_help(AskForHelp::new("luffy", Problem::SuperVilain))
            .run()
            .await
            .map(|result| result.map(|help| (help.hero.name, help.matching_abilities)));
        assert_succeeds!(outcome, ("luffy".to_string(), vec![Ability::ElasticBody]));
    }

    #[tokio::test]
    async fn test_custom_tables() {
        let weaknesses = Weaknesses::new(std::collections::HashMap::from([(
            Problem::CarAccident,
            vec![Weakness::Water],
        )]));
        let service = FindHelpService::new(
            SuperHeroes::new(InMemorySuperheroRepository::default()),
            Abilities::default(),
            weaknesses,
        );

        let outcome = service
            .find_help(AskForHelp::new("luffy", Problem::CarAccident))
            .run()
            .await
            .map(|result| result.map(|help| help.matching_abilities));
        assert_succeeds!(outcome, vec![Ability::Strength]);
    }
}
