//! Activities REST API: endpoint layout and the browser fetch client.

use gloo_net::http::{Request, Response};
use urlencoding::encode;
use web_sys::RequestCache;

use crate::error::{BoardError, Result};
use crate::model::{Catalog, SignupReply};

/// The three calls the board makes. Implemented over `fetch` in the browser
/// and by an in-memory fake in tests.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    async fn fetch_catalog(&self) -> Result<Catalog>;

    /// Non-2xx answers come back as `BoardError::Status` carrying the
    /// server's `detail` when it sent one.
    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReply>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn activities(&self, cache_buster: u64) -> String {
        format!("{}/activities?t={}", self.base, cache_buster)
    }

    pub fn signup(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    pub fn unregister(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/unregister?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlooApi {
    endpoints: Endpoints,
}

impl GlooApi {
    pub fn new(base: &str) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }
}

fn status_error(resp: &Response, detail: Option<String>) -> BoardError {
    BoardError::Status {
        status: resp.status(),
        detail,
    }
}

impl ActivitiesApi for GlooApi {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.endpoints.activities(js_sys::Date::now() as u64);
        let resp = Request::get(&url)
            .cache(RequestCache::NoStore)
            .send()
            .await?;
        if !resp.ok() {
            return Err(status_error(&resp, None));
        }
        Ok(resp.json::<Catalog>().await?)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReply> {
        let url = self.endpoints.signup(activity, email);
        let resp = Request::post(&url).send().await?;
        if resp.ok() {
            return Ok(resp.json::<SignupReply>().await?);
        }
        // An unreadable error body still counts as a rejection, just without detail.
        let detail = resp
            .json::<SignupReply>()
            .await
            .ok()
            .and_then(|reply| reply.detail_text());
        Err(status_error(&resp, detail))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<()> {
        let url = self.endpoints.unregister(activity, email);
        let resp = Request::delete(&url).send().await?;
        if resp.ok() {
            Ok(())
        } else {
            Err(status_error(&resp, None))
        }
    }
}
