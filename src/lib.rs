//! # Sidekick
//!
//! Lazy asynchronous effects with two failure channels, and two ways to
//! compose them.
//!
//! ## Philosophy
//!
//! An [`Effect<T, E>`] is a description of work, not the work itself. When run
//! it ends in one of three ways:
//! - **Success** with a `T`
//! - **Error**: an expected, typed domain failure `E`
//! - **Fault**: something unexpected ([`Fault`]), kept apart from `E` until
//!   converted on purpose
//!
//! Effects compose **sequentially** (fail-fast: the first error stops the chain)
//! or **in parallel** (accumulate: every operand runs and every error is
//! reported, in operand order, as an [`ErrorList`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use sidekick::effect::parallel::par_zip_with;
//! use sidekick::Effect;
//!
//! fn validate_email(email: &str) -> Effect<String, String> {
//!     let email = email.to_string();
//!     Effect::rules(
//!         email.contains('@'),
//!         move || email,
//!         || "Email must contain @".to_string(),
//!     )
//! }
//!
//! fn validate_age(age: i32) -> Effect<i32, String> {
//!     Effect::fail_when(age < 18, || "Must be 18 or older".to_string()).map(move |()| age)
//! }
//!
//! // Both checks run; both errors are reported.
//! let user = par_zip_with(validate_email("userexample.com"), validate_age(12), |email, age| {
//!     (email, age)
//! });
//!
//! let errors = user.block().unwrap().unwrap_err();
//! assert_eq!(
//!     errors.into_vec(),
//!     vec!["Email must contain @".to_string(), "Must be 18 or older".to_string()]
//! );
//! ```
//!
//! The [`help`] module is a complete consumer: a superhero dispatch service
//! whose lookup is fail-fast and whose checks accumulate.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod effect;
pub mod error_list;
pub mod help;
pub mod monoid;
pub mod report;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use effect::{BoxError, Effect, Fault, Outcome, Validator};
pub use error_list::ErrorList;
pub use monoid::Monoid;
pub use report::{AppError, DynAppError, ErrorRecord, ErrorReport};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::effect::prelude::*;
    pub use crate::monoid::Monoid;
    pub use crate::report::{AppError, ErrorRecord, ErrorReport};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
}
