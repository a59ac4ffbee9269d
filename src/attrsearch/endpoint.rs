//! The users search request handed to the admin API client.
//!
//! Nothing here talks to the network: [`UsersEndpoint`] is a [`SearchPort`]
//! that turns the active filters into the request the admin client would
//! send.

use crate::config::{parse_server_url, SearchConfig};
use crate::error::{Result, SearchError};
use crate::filters::ActiveFilterSet;
use crate::ports::SearchPort;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub url: Url,
    /// The raw `q` parameter, before URL encoding.
    pub query: String,
}

#[derive(Debug, Clone)]
pub struct UsersEndpoint {
    users_url: Url,
    page_size: u32,
}

impl UsersEndpoint {
    pub fn new(server_url: &str, realm: &str, page_size: u32) -> Result<Self> {
        let mut users_url = parse_server_url(server_url)?;
        users_url
            .path_segments_mut()
            .map_err(|_| SearchError::Config(format!("server-url '{}' cannot be a base", server_url)))?
            .pop_if_empty()
            .extend(["admin", "realms", realm, "users"]);
        Ok(Self {
            users_url,
            page_size,
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        Self::new(&config.server_url, &config.realm, config.page_size)
    }

    pub fn users_url(&self) -> &Url {
        &self.users_url
    }
}

impl SearchPort for UsersEndpoint {
    type Output = SearchRequest;

    fn search(&mut self, filters: &ActiveFilterSet) -> SearchRequest {
        let query = filters.query();
        let mut url = self.users_url.clone();
        url.query_pairs_mut()
            .append_pair("first", "0")
            .append_pair("max", &self.page_size.to_string())
            .append_pair("q", &query);
        tracing::debug!(%url, "users search request built");
        SearchRequest { url, query }
    }
}
