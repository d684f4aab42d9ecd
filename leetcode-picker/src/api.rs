use anyhow::{anyhow, bail, Context};
use itertools::Itertools;
use log::{debug, trace};
use reqwest::header;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::{auth::LeetcodeCookies, config::Config};

pub const GRAPHQL_URL: &str = "https://leetcode.com/graphql/";
pub const REFERER: &str = "https://leetcode.com/";

const CURRENT_USER_QUERY: &str = "
query currentUser {
    user { username firstName lastName profile { ranking } }
}";

/// Anything that can hand out the body of a page.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_text(&self, url: &Url) -> anyhow::Result<String>;
}

pub struct LeetcodeClient {
    client: reqwest::Client,
    config: Config,
    cookies: Option<LeetcodeCookies>,
}

impl LeetcodeClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            client: reqwest_client(config)?,
            config: config.clone(),
            cookies: None,
        })
    }

    pub fn with_cookies(mut self, cookies: LeetcodeCookies) -> Self {
        self.cookies = Some(cookies);
        self
    }

    /// Posts a GraphQL query as the logged-in user.
    pub async fn graphql<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &str,
        variables: V,
    ) -> anyhow::Result<T> {
        let cookies = self
            .cookies
            .as_ref()
            .ok_or_else(|| anyhow!("Not authenticated. Run the `auth` command first."))?;

        #[derive(Serialize)]
        struct Request<'a, V> {
            query: &'a str,
            variables: V,
        }
        let response = self
            .client
            .post(GRAPHQL_URL)
            .timeout(self.config.api_timeout())
            .header(header::COOKIE, cookies.cookie_header())
            .header("X-CSRFToken", cookies.csrf_token.to_string())
            .header(header::REFERER, REFERER)
            .json(&Request { query, variables })
            .send()
            .await?;
        if !response.status().is_success() {
            bail!(
                "Unexpected error code: server returned {:?}",
                response.status()
            );
        }
        let body: GraphqlResponse<T> = response.json().await?;
        if !body.errors.is_empty() {
            bail!(
                "GraphQL error: {}",
                body.errors.iter().map(|e| &e.message).join("; ")
            );
        }
        body.data.context("GraphQL response had no data")
    }

    /// `None` if the saved cookies are not accepted.
    pub async fn current_user(&self) -> anyhow::Result<Option<CurrentUser>> {
        #[derive(Deserialize)]
        struct Data {
            user: Option<CurrentUser>,
        }
        let data: Data = self.graphql(CURRENT_USER_QUERY, json!({})).await?;
        Ok(data.user)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub struct UserProfile {
    pub ranking: Option<i64>,
}

impl CurrentUser {
    pub fn full_name(&self) -> Option<String> {
        let name = [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .join(" ");
        (!name.is_empty()).then_some(name)
    }
}

impl PageSource for LeetcodeClient {
    async fn fetch_text(&self, url: &Url) -> anyhow::Result<String> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .timeout(self.config.page_timeout())
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        trace!("{url}: {} bytes", text.len());
        Ok(text)
    }
}

#[derive(Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

fn reqwest_client(config: &Config) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent())
        .connection_verbose(true)
        .build()
}
