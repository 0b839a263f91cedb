//! Everything needed to build and compose effects.
//!
//! ```
//! use sidekick::effect::prelude::*;
//!
//! let both = par_zip(Effect::<_, &str>::succeed(1), Effect::succeed("one"));
//! assert_eq!(both.block().unwrap(), Ok((1, "one")));
//! ```

pub use super::parallel::{
    par_sequence, par_traverse, par_zip, par_zip3, par_zip3_with, par_zip4, par_zip4_with,
    par_zip5, par_zip5_with, par_zip_with,
};
pub use super::sequential::{sequence, traverse, zip, zip_with};
pub use super::{BoxError, Effect, Fault, Outcome, Validator};
pub use crate::validate;
pub use crate::ErrorList;
