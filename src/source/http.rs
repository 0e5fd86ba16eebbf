//! HTTP data source backed by a JSON stats service.

use super::DataSource;
use crate::{
    cli::types::{League, SeasonPhase, Sport},
    records::RecordSet,
    Result, SyncError,
};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client, StatusCode,
};


/// Environment variable holding the stats service base URL.
pub const SOURCE_URL_ENV_VAR: &str = "NORTHSCORE_SOURCE_URL";

/// Fetches records from `{base}/{sport}/{standings|teams|players}`.
///
/// League and season phase travel as `league` and `season` query parameters; every endpoint
/// answers with a JSON array of flat objects.
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().default_headers(default_headers()).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a record array. A 404 maps to `None`; other failures are transport errors.
    async fn get_records(
        &self,
        sport: Sport,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<Option<RecordSet>> {
        let url = format!("{}/{}/{}", self.base_url, sport.as_str(), endpoint);
        tracing::debug!(%url, ?query, "requesting records");

        let res = self.client.get(&url).query(query).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let records = res.error_for_status()?.json::<RecordSet>().await?;
        Ok(Some(records))
    }

    async fn get_required(
        &self,
        sport: Sport,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<RecordSet> {
        self.get_records(sport, endpoint, query)
            .await?
            .ok_or_else(|| SyncError::Source {
                message: format!("{} {endpoint} not found at {}", sport, self.base_url),
            })
    }
}

fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("northscore-sync/", env!("CARGO_PKG_VERSION"))),
    );
    h
}

fn league_param(sport: Sport, league: League) -> &'static str {
    match sport {
        Sport::Football => League::Men.as_str(),
        _ => league.as_str(),
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch_standings(&self, sport: Sport, league: League) -> Result<Option<RecordSet>> {
        let league = league_param(sport, league);
        self.get_records(sport, "standings", &[("league", league)])
            .await
    }

    async fn fetch_team_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet> {
        let league = league_param(sport, league);
        self.get_required(sport, "teams", &[("league", league), ("season", phase.as_str())])
            .await
    }

    async fn fetch_player_stats(
        &self,
        sport: Sport,
        league: League,
        phase: SeasonPhase,
    ) -> Result<RecordSet> {
        let league = league_param(sport, league);
        self.get_required(
            sport,
            "players",
            &[("league", league), ("season", phase.as_str())],
        )
        .await
    }
}
