//! A superhero dispatch service built on effects.
//!
//! A citizen asks a named hero for help with a [`Problem`]. The request is
//! turned down when:
//!
//! - the hero is unknown or unavailable (checked first, nothing else runs), or
//! - none of the hero's abilities is required by the problem, and/or
//! - some of the hero's weaknesses are exploited by the problem.
//!
//! The last two checks run in parallel and report together, ability error
//! first. [`HelpApi`] turns the outcome into a response: `200` with the
//! [`HelpResult`], `400` with every [`ErrorRecord`](crate::report::ErrorRecord),
//! or `500` when a fault escaped.
//!
//! # Example
//!
//! ```
//! use sidekick::help::{AskForHelp, HelpApi, HelpResponse, InMemorySuperheroRepository, Problem};
//!
//! # tokio_test::block_on(async {
//! let api = HelpApi::<InMemorySuperheroRepository>::default();
//!
//! match api.find_help(AskForHelp::new("luffy", Problem::SuperVilain)).await {
//!     HelpResponse::Ok(result) => assert_eq!(result.hero.name, "luffy"),
//!     other => panic!("unexpected response: {:?}", other),
//! }
//! # });
//! ```

mod ability;
mod api;
mod problem;
mod service;
mod superhero;
mod weakness;

pub use ability::{Abilities, AbilitiesError, Ability};
pub use api::{HelpApi, HelpResponse, FIND_HELP_ROUTE};
pub use problem::Problem;
pub use service::{AskForHelp, FindHelpService, HelpErrors, HelpResult};
pub use superhero::{
    InMemorySuperheroRepository, SuperHeroes, Superhero, SuperheroError, SuperheroRepository,
};
pub use weakness::{Weakness, Weaknesses, WeaknessesError};
