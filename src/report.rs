//! Error reports for the response boundary
//!
//! Domain errors live in closed enums, one per domain. At the boundary they all
//! look the same: a human-readable message and, optionally, a path naming the
//! input the error is about. [`AppError`] is that shared capability,
//! [`ErrorReport`] carries an ordered list of such errors, and
//! [`ErrorReport::to_records`] renders it as plain [`ErrorRecord`]s.
//!
//! # Example
//!
//! ```
//! use sidekick::report::{AppError, ErrorReport, ErrorRecord};
//!
//! #[derive(Debug)]
//! enum FormError {
//!     Blank(&'static str),
//! }
//!
//! impl AppError for FormError {
//!     fn message(&self) -> String {
//!         match self {
//!             FormError::Blank(field) => format!("{} must not be blank", field),
//!         }
//!     }
//!
//!     fn path(&self) -> Option<String> {
//!         match self {
//!             FormError::Blank(field) => Some(field.to_string()),
//!         }
//!     }
//! }
//!
//! let report = ErrorReport::one(FormError::Blank("name"));
//! assert_eq!(
//!     report.to_records(),
//!     vec![ErrorRecord::new("name must not be blank", Some("name".to_string()))]
//! );
//! ```

use std::fmt;

use crate::{ErrorList, Semigroup};

/// Capability shared by every reportable domain error.
pub trait AppError {
    /// Human-readable description of the failure.
    fn message(&self) -> String;

    /// Which part of the input the failure is about, if any.
    fn path(&self) -> Option<String> {
        None
    }
}

/// A domain error widened to the common capability.
pub type DynAppError = Box<dyn AppError + Send + Sync>;

impl<E: AppError + ?Sized> AppError for Box<E> {
    fn message(&self) -> String {
        (**self).message()
    }

    fn path(&self) -> Option<String> {
        (**self).path()
    }
}

impl fmt::Debug for dyn AppError + Send + Sync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppError")
            .field("message", &self.message())
            .field("path", &self.path())
            .finish()
    }
}

/// Widen a concrete domain error to [`DynAppError`].
///
/// Handy as `effect.map_err(report::widen)` before mixing error domains.
pub fn widen<E>(error: E) -> DynAppError
where
    E: AppError + Send + Sync + 'static,
{
    Box::new(error)
}

/// The `{message, path}` shape an error takes at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorRecord {
    /// Human-readable description.
    pub message: String,
    /// Input path the error refers to, `null` in JSON when absent.
    pub path: Option<String>,
}

impl ErrorRecord {
    /// Build a record.
    pub fn new(message: impl Into<String>, path: Option<String>) -> Self {
        ErrorRecord {
            message: message.into(),
            path,
        }
    }

    /// Render any [`AppError`] as a record.
    pub fn from_error<E: AppError + ?Sized>(error: &E) -> Self {
        ErrorRecord {
            message: error.message(),
            path: error.path(),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// An ordered collection of reportable errors.
///
/// Reports coming from different subsystems are merged with [`combine`](Self::combine)
/// once their errors share a type, typically after widening to [`DynAppError`].
pub struct ErrorReport<E: AppError> {
    errors: ErrorList<E>,
}

impl<E: AppError> ErrorReport<E> {
    /// Wrap an error list.
    pub fn new(errors: ErrorList<E>) -> Self {
        ErrorReport { errors }
    }

    /// A report with no errors.
    pub fn empty() -> Self {
        ErrorReport {
            errors: ErrorList::empty(),
        }
    }

    /// A report with exactly one error.
    pub fn one(error: E) -> Self {
        ErrorReport {
            errors: ErrorList::one(error),
        }
    }

    /// Concatenate two reports, `self` first.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        ErrorReport {
            errors: self.errors.combine(other.errors),
        }
    }

    /// The underlying errors.
    pub fn errors(&self) -> &ErrorList<E> {
        &self.errors
    }

    /// Take the underlying errors.
    pub fn into_errors(self) -> ErrorList<E> {
        self.errors
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `true` when the report holds no error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Render every error as a boundary record, in order.
    pub fn to_records(&self) -> Vec<ErrorRecord> {
        self.errors
            .iter()
            .map(|error| ErrorRecord::from_error(error))
            .collect()
    }

    /// Messages only, in order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(AppError::message).collect()
    }
}

impl<E> ErrorReport<E>
where
    E: AppError + Send + Sync + 'static,
{
    /// Widen every error to [`DynAppError`] so this report can be combined with
    /// reports from other domains.
    pub fn widen(self) -> ErrorReport<DynAppError> {
        ErrorReport {
            errors: self.errors.map(widen),
        }
    }
}

impl<E: AppError> From<ErrorList<E>> for ErrorReport<E> {
    fn from(errors: ErrorList<E>) -> Self {
        ErrorReport::new(errors)
    }
}

impl<E: AppError> Semigroup for ErrorReport<E> {
    fn combine(self, other: Self) -> Self {
        ErrorReport::combine(self, other)
    }
}

impl<E: AppError> fmt::Debug for ErrorReport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorReport")
            .field("errors", &self.to_records())
            .finish()
    }
}

impl<E: AppError> fmt::Display for ErrorReport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, record) in self.to_records().iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Missing(&'static str);

    impl AppError for Missing {
        fn message(&self) -> String {
            format!("{} is missing", self.0)
        }

        fn path(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[derive(Debug)]
    struct Opaque;

    impl AppError for Opaque {
        fn message(&self) -> String {
            "something went wrong".to_string()
        }
    }

    #[test]
    fn test_records_preserve_order_and_paths() {
        let report = ErrorReport::new(
            ErrorList::one(Missing("name")).append(Missing("email")),
        );
        assert_eq!(
            report.to_records(),
            vec![
                ErrorRecord::new("name is missing", Some("name".to_string())),
                ErrorRecord::new("email is missing", Some("email".to_string())),
            ]
        );
    }

    #[test]
    fn test_default_path_is_none() {
        let record = ErrorRecord::from_error(&Opaque);
        assert_eq!(record.path, None);
        assert_eq!(record.to_string(), "something went wrong");
    }

    #[test]
    fn test_combine_widened_reports_from_different_domains() {
        let first = ErrorReport::one(Missing("name")).widen();
        let second = ErrorReport::one(Opaque).widen();

        let merged = first.combine(second);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.messages(),
            vec!["name is missing".to_string(), "something went wrong".to_string()]
        );
    }

    #[test]
    fn test_empty_report() {
        let report = ErrorReport::<Missing>::empty();
        assert!(report.is_empty());
        assert!(report.to_records().is_empty());
    }

    #[test]
    fn test_display_includes_paths() {
        let report = ErrorReport::one(Missing("age")).combine(ErrorReport::one(Missing("zip")));
        assert_eq!(report.to_string(), "age: age is missing; zip: zip is missing");
    }
}
