use crate::error::{OffersError, OffersErrorExt};
use crate::record::OfferRecord;
use futures_util::future::LocalBoxFuture;
use pcx_domain::config::{OffersConfig, StoreConfig};
use reqwest::header::ACCEPT;
use std::fmt::Debug;
use tracing::{debug, instrument};
use url::Url;

/// The remote data collaborator.
pub trait OfferStore: Debug {
    /// Every offer record, most recently created first.
    fn list_offers_newest_first(&self) -> LocalBoxFuture<'_, Result<Vec<OfferRecord>, OffersError>>;
}

/// PostgREST-compatible table endpoint.
#[derive(Debug, Clone)]
pub struct RestOfferStore {
    client: reqwest::Client,
    endpoint: Url,
    api_key: String,
}

impl RestOfferStore {
    /// Builds `{url}/rest/v1/{table}?select=*&order=created_at.desc`.
    ///
    /// # Errors
    /// Returns [`OffersError::Url`] for an unparsable base url and
    /// [`OffersError::Config`] for a base that cannot carry a path or an empty table.
    pub fn new(store: &StoreConfig, offers: &OffersConfig) -> Result<Self, OffersError> {
        let table = offers.table.trim();
        if table.is_empty() {
            return Err(OffersError::Config { message: "offers table is empty".into(), context: None });
        }

        let mut endpoint = Url::parse(&store.url).context("Parsing store url")?;
        endpoint
            .path_segments_mut()
            .map_err(|()| OffersError::Config {
                message: format!("{} cannot be a base url", store.url).into(),
                context: None,
            })?
            .pop_if_empty()
            .extend(["rest", "v1", table]);
        endpoint.query_pairs_mut().append_pair("select", "*").append_pair("order", "created_at.desc");

        Ok(Self { client: reqwest::Client::new(), endpoint, api_key: store.anon_key.clone() })
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self) -> Result<Vec<OfferRecord>, OffersError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .context("Requesting offers")?;

        let status = response.status();
        let body = response.text().await.context("Reading offers response")?;
        if !status.is_success() {
            return Err(OffersError::Status {
                status: status.as_u16(),
                message: body.chars().take(200).collect::<String>().into(),
                context: None,
            });
        }

        let records = OfferRecord::decode_rows(&body).context("Decoding offers")?;
        debug!(count = records.len(), "Offers fetched");
        Ok(records)
    }
}

impl OfferStore for RestOfferStore {
    fn list_offers_newest_first(&self) -> LocalBoxFuture<'_, Result<Vec<OfferRecord>, OffersError>> {
        Box::pin(self.fetch())
    }
}

/// In-process records, served newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryOfferStore {
    records: Vec<OfferRecord>,
}

impl MemoryOfferStore {
    pub fn new(records: impl IntoIterator<Item = OfferRecord>) -> Self {
        let mut records: Vec<_> = records.into_iter().collect();
        OfferRecord::sort_newest_first(&mut records);
        Self { records }
    }

    /// Loads a JSON array of rows, as the REST endpoint would return them.
    /// Malformed rows are skipped (see [`OfferRecord::decode_rows`]).
    ///
    /// # Errors
    /// Returns [`OffersError::Decode`] if the document is not an array.
    pub fn from_json(json: &str) -> Result<Self, OffersError> {
        let records = OfferRecord::decode_rows(json).context("Decoding seed offers")?;
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl OfferStore for MemoryOfferStore {
    fn list_offers_newest_first(&self) -> LocalBoxFuture<'_, Result<Vec<OfferRecord>, OffersError>> {
        let records = self.records.clone();
        Box::pin(async move { Ok(records) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(url: &str) -> StoreConfig {
        StoreConfig { url: url.to_owned(), anon_key: "anon".to_owned() }
    }

    #[test]
    fn endpoint_targets_the_table_ordered_newest_first() {
        let rest = RestOfferStore::new(&store("https://project.supabase.co"), &OffersConfig::default())
            .expect("valid store");
        assert_eq!(
            rest.endpoint().as_str(),
            "https://project.supabase.co/rest/v1/fixed_offers?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn base_paths_are_kept() {
        let rest = RestOfferStore::new(&store("http://localhost:54321/proxy/"), &OffersConfig::default())
            .expect("valid store");
        assert_eq!(rest.endpoint().path(), "/proxy/rest/v1/fixed_offers");
    }

    #[test]
    fn bad_urls_are_rejected() {
        let err = RestOfferStore::new(&store("not a url"), &OffersConfig::default()).expect_err("bad url");
        assert!(matches!(err, OffersError::Url { .. }));

        let err = RestOfferStore::new(&store("mailto:ops@example.com"), &OffersConfig::default())
            .expect_err("cannot be a base");
        assert!(matches!(err, OffersError::Config { .. }));
    }

    #[test]
    fn empty_table_is_rejected() {
        let offers = OffersConfig { table: " ".to_owned() };
        assert!(matches!(RestOfferStore::new(&store("http://localhost"), &offers), Err(OffersError::Config { .. })));
    }

    #[test]
    fn seed_documents_are_sorted() {
        let store = MemoryOfferStore::from_json(
            r#"[
                {"id": 1, "created_at": "2025-01-01T00:00:00Z"},
                {"id": 2, "created_at": "2025-02-01T00:00:00Z"}
            ]"#,
        )
        .expect("valid seed");
        assert_eq!(store.len(), 2);
        assert_eq!(store.records[0].id.to_string(), "2");

        assert!(matches!(MemoryOfferStore::from_json("{}"), Err(OffersError::Decode { .. })));
    }

    #[test]
    fn seed_documents_drop_only_their_bad_rows() {
        let store = MemoryOfferStore::from_json(
            r#"[
                {"id": 1, "created_at": "2025-03-01T10:00:00+00:00"},
                {"id": 2, "created_at": null},
                {"id": 3, "created_at": "2025-03-01 12:00:00+00"},
                {"id": null}
            ]"#,
        )
        .expect("array document");

        let ids: Vec<_> = store.records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }
}
