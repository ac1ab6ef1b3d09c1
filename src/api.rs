//! Data fetcher: the two authenticated requests behind the dashboard.

use async_trait::async_trait;
use futures::future;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Endpoint};
use crate::model::{AccountsEnvelope, DashboardData, Profile};
use crate::session::SessionToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal GET client. Browser futures are not `Send`, hence `?Send`.
#[async_trait(?Send)]
pub trait HttpClient {
    /// Issues `GET url` with the given `Authorization` header value.
    ///
    /// `Err` is reserved for transport failures; any HTTP status is `Ok`.
    async fn get(&self, url: &str, authorization: &str) -> Result<HttpResponse, String>;
}

/// Fetches accounts and profile concurrently and returns both, or a single failure.
pub async fn load_dashboard_data(
    http: &dyn HttpClient,
    config: &DashboardConfig,
    token: &SessionToken,
) -> Result<DashboardData, DashboardError> {
    let authorization = token.bearer_header();
    let accounts_url = config.accounts_url();
    let profile_url = config.profile_url();

    debug!(%accounts_url, %profile_url, "fetching dashboard data");
    let (accounts, profile) = future::join(
        http.get(&accounts_url, &authorization),
        http.get(&profile_url, &authorization),
    )
    .await;

    let accounts = accounts.map_err(|message| DashboardError::Transport {
        endpoint: Endpoint::Accounts,
        message,
    })?;
    let profile = profile.map_err(|message| DashboardError::Transport {
        endpoint: Endpoint::Profile,
        message,
    })?;

    if !accounts.is_success() || !profile.is_success() {
        return Err(DashboardError::FetchFailed {
            accounts_status: accounts.status,
            profile_status: profile.status,
        });
    }

    let envelope: AccountsEnvelope = parse_body(Endpoint::Accounts, &accounts.body)?;
    let profile: Profile = parse_body(Endpoint::Profile, &profile.body)?;

    info!(accounts = envelope.data.len(), "dashboard data loaded");
    Ok(DashboardData {
        accounts: envelope.data,
        profile,
    })
}

fn parse_body<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, DashboardError> {
    serde_json::from_str(body).map_err(|source| DashboardError::MalformedBody { endpoint, source })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll};

    /// Returns `Pending` once so concurrent callers interleave.
    struct YieldOnce(bool);

    impl Future for YieldOnce {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    /// Canned responses keyed by URL; records every call and its ordering.
    #[derive(Default)]
    pub(crate) struct FakeHttp {
        pub(crate) routes: HashMap<String, Result<HttpResponse, String>>,
        pub(crate) calls: RefCell<Vec<(String, String)>>,
        pub(crate) events: RefCell<Vec<String>>,
    }

    impl FakeHttp {
        pub(crate) fn route(mut self, url: &str, status: u16, body: &str) -> Self {
            self.routes.insert(
                url.to_string(),
                Ok(HttpResponse {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        pub(crate) fn fail(mut self, url: &str, message: &str) -> Self {
            self.routes.insert(url.to_string(), Err(message.to_string()));
            self
        }

        pub(crate) fn ok_dashboard() -> Self {
            Self::default()
                .route(
                    "/api/v1/accounts",
                    200,
                    r#"{"data":[{"institution":"Bank X","balance":100,"type":"checking"}]}"#,
                )
                .route(
                    "/api/v1/auth/me",
                    200,
                    r#"{"totalBalance":100,"creditScore":720}"#,
                )
        }
    }

    #[async_trait(?Send)]
    impl HttpClient for FakeHttp {
        async fn get(&self, url: &str, authorization: &str) -> Result<HttpResponse, String> {
            self.calls
                .borrow_mut()
                .push((url.to_string(), authorization.to_string()));
            self.events.borrow_mut().push(format!("start {url}"));
            YieldOnce(false).await;
            self.events.borrow_mut().push(format!("end {url}"));
            self.routes
                .get(url)
                .cloned()
                .unwrap_or_else(|| Err(format!("no route for {url}")))
        }
    }

    fn token() -> SessionToken {
        SessionToken::new("t0k")
    }

    #[test]
    fn both_requests_carry_bearer_header() {
        let http = FakeHttp::ok_dashboard();
        let data =
            pollster::block_on(load_dashboard_data(&http, &DashboardConfig::default(), &token()))
                .unwrap();

        assert_eq!(data.accounts.len(), 1);
        assert_eq!(data.profile.credit_score.to_string(), "720");

        let calls = http.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, auth)| auth == "Bearer t0k"));
        assert_eq!(calls[0].0, "/api/v1/accounts");
        assert_eq!(calls[1].0, "/api/v1/auth/me");
    }

    #[test]
    fn requests_are_issued_before_either_completes() {
        let http = FakeHttp::ok_dashboard();
        pollster::block_on(load_dashboard_data(&http, &DashboardConfig::default(), &token()))
            .unwrap();

        let events = http.events.borrow();
        assert_eq!(events[0], "start /api/v1/accounts");
        assert_eq!(events[1], "start /api/v1/auth/me");
        assert!(events[2].starts_with("end "));
    }

    #[test]
    fn one_failed_status_fails_the_whole_load() {
        let http = FakeHttp::ok_dashboard().route("/api/v1/auth/me", 401, "unauthorized");
        let err =
            pollster::block_on(load_dashboard_data(&http, &DashboardConfig::default(), &token()))
                .unwrap_err();

        match err {
            DashboardError::FetchFailed {
                accounts_status,
                profile_status,
            } => {
                assert_eq!(accounts_status, 200);
                assert_eq!(profile_status, 401);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn transport_failure_names_the_endpoint() {
        let http = FakeHttp::ok_dashboard().fail("/api/v1/accounts", "connection reset");
        let err =
            pollster::block_on(load_dashboard_data(&http, &DashboardConfig::default(), &token()))
                .unwrap_err();

        assert!(matches!(
            err,
            DashboardError::Transport {
                endpoint: Endpoint::Accounts,
                ..
            }
        ));
    }

    #[test]
    fn malformed_body_is_reported() {
        let http = FakeHttp::ok_dashboard().route("/api/v1/accounts", 200, "<html>oops</html>");
        let err =
            pollster::block_on(load_dashboard_data(&http, &DashboardConfig::default(), &token()))
                .unwrap_err();

        assert!(matches!(
            err,
            DashboardError::MalformedBody {
                endpoint: Endpoint::Accounts,
                ..
            }
        ));
    }

    #[test]
    fn success_status_range() {
        let ok = |status| HttpResponse {
            status,
            body: String::new(),
        };
        assert!(ok(200).is_success());
        assert!(ok(204).is_success());
        assert!(!ok(304).is_success());
        assert!(!ok(500).is_success());
    }
}
