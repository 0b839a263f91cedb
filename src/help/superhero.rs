//! Superheroes, where they are stored, and how one is picked.

use std::collections::HashMap;
use std::error::Error as StdError;
use std::fmt;
use std::future::{self, Future};
use std::sync::Arc;

use super::{Ability, Weakness};
use crate::effect::{BoxError, Fault};
use crate::report::AppError;
use crate::Effect;

/// A superhero on file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Superhero {
    /// Repository key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Whether the hero can take a call right now.
    pub is_available: bool,
    /// What the hero can do.
    pub abilities: Vec<Ability>,
    /// What can stop the hero.
    pub weaknesses: Vec<Weakness>,
}

impl Superhero {
    /// An available hero with no abilities and no weaknesses.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Superhero {
            id: id.into(),
            name: name.into(),
            is_available: true,
            abilities: Vec::new(),
            weaknesses: Vec::new(),
        }
    }

    /// Replace the abilities.
    #[must_use]
    pub fn with_abilities(mut self, abilities: Vec<Ability>) -> Self {
        self.abilities = abilities;
        self
    }

    /// Replace the weaknesses.
    #[must_use]
    pub fn with_weaknesses(mut self, weaknesses: Vec<Weakness>) -> Self {
        self.weaknesses = weaknesses;
        self
    }

    /// Set availability.
    #[must_use]
    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}

/// Why no hero could be picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuperheroError {
    /// No hero goes by that name.
    Unknown(String),
    /// The hero exists but is busy.
    Unavailable(String),
}

impl AppError for SuperheroError {
    fn message(&self) -> String {
        match self {
            SuperheroError::Unknown(name) => format!("{} is unknown", name),
            SuperheroError::Unavailable(name) => {
                format!("{} is not available at the moment", name)
            }
        }
    }
}

impl fmt::Display for SuperheroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl StdError for SuperheroError {}

/// Storage of superheroes.
///
/// A failing lookup is not a domain error: it surfaces as a
/// [`Fault`](crate::Fault) on the effect that performed it.
pub trait SuperheroRepository: Send + Sync + 'static {
    /// Find a hero by name.
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Superhero>, BoxError>> + Send + 'static;
}

/// A fixed, read-only set of heroes keyed by lowercase name.
#[derive(Debug, Clone)]
pub struct InMemorySuperheroRepository {
    heroes: HashMap<String, Superhero>,
}

impl InMemorySuperheroRepository {
    /// Store `heroes`, keyed by their lowercased id.
    pub fn new(heroes: impl IntoIterator<Item = Superhero>) -> Self {
        InMemorySuperheroRepository {
            heroes: heroes
                .into_iter()
                .map(|hero| (hero.id.to_lowercase(), hero))
                .collect(),
        }
    }

    /// Number of stored heroes.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    /// `true` when no hero is stored.
    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }
}

impl Default for InMemorySuperheroRepository {
    fn default() -> Self {
        InMemorySuperheroRepository::new([
            Superhero::new("luffy", "luffy")
                .with_weaknesses(vec![Weakness::Dumb, Weakness::Water])
                .with_abilities(vec![
                    Ability::ElasticBody,
                    Ability::Strength,
                    Ability::DoNotGiveUp,
                ]),
            Superhero::new("superman", "superman")
                .available(false)
                .with_weaknesses(vec![Weakness::Cryptonic])
                .with_abilities(vec![Ability::Strength, Ability::LazerEyes, Ability::Fly]),
        ])
    }
}

impl SuperheroRepository for InMemorySuperheroRepository {
    fn find_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Superhero>, BoxError>> + Send + 'static {
        future::ready(Ok(self.heroes.get(&name.to_lowercase()).cloned()))
    }
}

/// Picks a hero who can answer a call.
#[derive(Debug, Clone, Default)]
pub struct SuperHeroes<R> {
    repository: Arc<R>,
}

impl<R: SuperheroRepository> SuperHeroes<R> {
    /// Look heroes up in `repository`.
    pub fn new(repository: R) -> Self {
        SuperHeroes {
            repository: Arc::new(repository),
        }
    }

    /// Find the hero called `name` and make sure they are available.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::help::{InMemorySuperheroRepository, SuperHeroes, SuperheroError};
    ///
    /// let heroes = SuperHeroes::new(InMemorySuperheroRepository::default());
    ///
    /// let hero = heroes.look_for_superhero("Luffy").block().unwrap().unwrap();
    /// assert_eq!(hero.name, "luffy");
    ///
    /// let busy = heroes.look_for_superhero("superman").block().unwrap();
    /// assert_eq!(busy, Err(SuperheroError::Unavailable("superman".to_string())));
    /// ```
    pub fn look_for_superhero(&self, name: &str) -> Effect<Superhero, SuperheroError> {
        let repository = Arc::clone(&self.repository);
        let lookup = name.to_string();
        let unknown = name.to_string();
        let unavailable = name.to_string();

        // The repository is only queried once the effect runs.
        let found = Effect::<Option<Superhero>, SuperheroError>::defer(move || async move {
            repository
                .find_by_name(&lookup)
                .await
                .map(Ok)
                .map_err(Fault::from_source)
        });

        found
            .and_then(move |found| Effect::from_option(found, move || SuperheroError::Unknown(unknown)))
            .ensure(
                |hero| hero.is_available,
                move || SuperheroError::Unavailable(unavailable),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::{assert_fails, assert_faults, assert_succeeds};

    struct BrokenRepository;

    impl SuperheroRepository for BrokenRepository {
        fn find_by_name(
            &self,
            _name: &str,
        ) -> impl Future<Output = Result<Option<Superhero>, BoxError>> + Send + 'static {
            future::ready(Err("connection refused".into()))
        }
    }

    #[derive(Default)]
    struct CountingRepository {
        calls: AtomicUsize,
        inner: InMemorySuperheroRepository,
    }

    impl SuperheroRepository for CountingRepository {
        fn find_by_name(
            &self,
            name: &str,
        ) -> impl Future<Output = Result<Option<Superhero>, BoxError>> + Send + 'static {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_name(name)
        }
    }

    #[tokio::test]
    async fn test_lookup_waits_for_run() {
        let heroes = SuperHeroes::new(CountingRepository::default());
        let lookup = heroes.look_for_superhero("luffy");
        assert_eq!(heroes.repository.calls.load(Ordering::SeqCst), 0);

        assert_succeeds!(lookup.run().await.map(|r| r.map(|hero| hero.id)), "luffy".to_string());
        assert_eq!(heroes.repository.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let repository = InMemorySuperheroRepository::default();
        let found = repository.find_by_name("LUFFY").await.unwrap();
        assert_eq!(found.map(|hero| hero.id), Some("luffy".to_string()));
    }

    #[tokio::test]
    async fn test_unknown_hero() {
        let heroes = SuperHeroes::new(InMemorySuperheroRepository::default());
        assert_fails!(
            heroes.look_for_superhero("batman").run().await,
            SuperheroError::Unknown("batman".to_string())
        );
    }

    #[tokio::test]
    async fn test_available_hero() {
        let heroes = SuperHeroes::new(InMemorySuperheroRepository::default());
        let outcome = heroes.look_for_superhero("luffy").run().await;
        assert_succeeds!(outcome.map(|r| r.map(|hero| hero.is_available)), true);
    }

    #[tokio::test]
    async fn test_repository_failure_is_fault() {
        let heroes = SuperHeroes::new(BrokenRepository);
        assert_faults!(heroes.look_for_superhero("luffy").run().await, Fault::is_source);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(SuperheroError::Unknown("bob".into()).message(), "bob is unknown");
        assert_eq!(
            SuperheroError::Unavailable("bob".into()).to_string(),
            "bob is not available at the moment"
        );
    }

    #[test]
    fn test_custom_repository_contents() {
        let repository = InMemorySuperheroRepository::new([Superhero::new("Zoro", "zoro")]);
        assert_eq!(repository.len(), 1);
        assert!(!repository.is_empty());
    }
}
