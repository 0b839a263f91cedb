//! The response boundary for help requests.

use super::{AskForHelp, FindHelpService, HelpErrors, HelpResult, SuperheroRepository};
use crate::report::ErrorRecord;

/// Route the find-help command is served on.
pub const FIND_HELP_ROUTE: &str = "/api/helps/_command";

/// What the boundary answers.
///
/// With the `serde` feature the response serializes to its body alone: the
/// help result object, the array of error records, or `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum HelpResponse {
    /// A hero was found.
    Ok(HelpResult),
    /// The request was turned down; every reason is listed.
    BadRequest(Vec<ErrorRecord>),
    /// Something broke that is not the caller's fault.
    InternalError {
        /// Description of the fault.
        message: String,
    },
}

impl HelpResponse {
    /// The HTTP status this response maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            HelpResponse::Ok(_) => 200,
            HelpResponse::BadRequest(_) => 400,
            HelpResponse::InternalError { .. } => 500,
        }
    }
}

/// Turns help requests into responses.
#[derive(Debug, Clone)]
pub struct HelpApi<R> {
    service: FindHelpService<R>,
}

impl<R: SuperheroRepository> HelpApi<R> {
    /// Serve requests with `service`.
    pub fn new(service: FindHelpService<R>) -> Self {
        HelpApi { service }
    }

    /// Answer one request.
    ///
    /// Domain errors become a `400` listing every error record in order.
    /// A fault is never reported as a `400`; it becomes a `500`.
    ///
    /// # Example
    ///
    /// ```
    /// use sidekick::help::{AskForHelp, HelpApi, InMemorySuperheroRepository, Problem};
    ///
    /// # tokio_test::block_on(async {
    /// let api = HelpApi::<InMemorySuperheroRepository>::default();
    /// let response = api.find_help(AskForHelp::new("superman", Problem::SuperVilain)).await;
    /// assert_eq!(response.status_code(), 400);
    /// # });
    /// ```
    pub async fn find_help(&self, command: AskForHelp) -> HelpResponse {
        let folded = self
            .service
            .find_help(command)
            .fold(
                |errors: HelpErrors| HelpResponse::BadRequest(errors.to_records()),
                HelpResponse::Ok,
            )
            .await;

        match folded {
            Ok(response @ HelpResponse::Ok(_)) => {
                tracing::info!(route = FIND_HELP_ROUTE, status = 200, "help found");
                response
            }
            Ok(response) => {
                tracing::warn!(route = FIND_HELP_ROUTE, status = response.status_code(), ?response, "help refused");
                response
            }
            Err(fault) => {
                tracing::error!(route = FIND_HELP_ROUTE, %fault, "help request faulted");
                HelpResponse::InternalError {
                    message: fault.to_string(),
                }
            }
        }
    }
}

impl<R> Default for HelpApi<R>
where
    R: SuperheroRepository + Default,
{
    fn default() -> Self {
        HelpApi::new(FindHelpService::default())
    }
}

#[cfg(test)]
mod tests {
    use std::future::{self, Future};

    use super::*;
    use crate::effect::BoxError;
    use crate::help::{Abilities, Problem, SuperHeroes, Superhero, Weaknesses};
    use tracing_test::traced_test;

    struct OfflineRepository;

    impl SuperheroRepository for OfflineRepository {
        fn find_by_name(
            &self,
            _name: &str,
        ) -> impl Future<Output = Result<Option<Superhero>, BoxError>> + Send + 'static {
            future::ready(Err("repository offline".into()))
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn test_success_is_200() {
        let api = HelpApi::<crate::help::InMemorySuperheroRepository>::default();
        let response = api
            .find_help(AskForHelp::new("luffy", Problem::SuperVilain))
            .await;
        assert_eq!(response.status_code(), 200);
        assert!(logs_contain("help found"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_domain_errors_are_400_with_records() {
        let api = HelpApi::<crate::help::InMemorySuperheroRepository>::default();
        let response = api
            .find_help(AskForHelp::new("luffy", Problem::FellIntoWater))
            .await;

        assert_eq!(
            response,
            HelpResponse::BadRequest(vec![
                ErrorRecord::new("Couldn't find the required ability for your problem", None),
                ErrorRecord::new("Weaknesses found : [Water]", None),
            ])
        );
        assert!(logs_contain("help refused"));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_fault_is_500() {
        let api = HelpApi::new(FindHelpService::new(
            SuperHeroes::new(OfflineRepository),
            Abilities::default(),
            Weaknesses::default(),
        ));
        let response = api
            .find_help(AskForHelp::new("luffy", Problem::SuperVilain))
            .await;

        assert_eq!(response.status_code(), 500);
        assert_eq!(
            response,
            HelpResponse::InternalError {
                message: "effect source failed: repository offline".to_string()
            }
        );
        assert!(logs_contain("help request faulted"));
    }

    #[test]
    fn test_route() {
        assert_eq!(FIND_HELP_ROUTE, "/api/helps/_command");
    }
}
