use crate::{
    error::{FeeError, OracleError},
    types::{FeeOracleQuote, FeeOracleRequest, FeeOracleResponse, RawFeeOracleQuote},
};
use reqwest::Client;
use tracing::{debug, instrument};
use url::Url;

/// Fee oracle HTTP client.
///
/// Issues a single `GET` per quote, without retries.
#[derive(Debug, Clone)]
pub struct FeeOracleClient {
    /// HTTP client for making requests.
    client: Client,
    /// Base URL of the oracle.
    base_url: Url,
}

impl FeeOracleClient {
    /// Creates a new fee oracle client.
    pub fn new(base_url: Url) -> Self {
        Self { client: Client::new(), base_url }
    }

    /// Uses the given HTTP client, eg. one configured with a timeout.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Returns the URL queried for the given request.
    pub fn request_url(&self, request: &FeeOracleRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("from", &request.from_domain_id.to_string())
            .append_pair("to", &request.to_domain_id.to_string())
            .append_pair("resourceID", &request.resource_id.to_string());
        url
    }

    /// Requests a fee quote.
    ///
    /// Returns the unvalidated `response` field of the oracle answer, which is `None` if the
    /// oracle did not include one.
    #[instrument(
        skip_all,
        fields(
            from = request.from_domain_id,
            to = request.to_domain_id,
            resource_id = %request.resource_id
        )
    )]
    pub async fn request_fee(
        &self,
        request: &FeeOracleRequest,
    ) -> Result<Option<RawFeeOracleQuote>, OracleError> {
        let url = self.request_url(request);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|err| debug!(%err, "Failed to reach fee oracle."))
            .map_err(|_| OracleError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "Fee oracle returned an error status.");
            return Err(OracleError::Unavailable);
        }

        let body = response
            .text()
            .await
            .inspect_err(|err| debug!(%err, "Failed to read fee oracle response."))
            .map_err(|_| OracleError::Unavailable)?;

        let body = serde_json::from_str::<FeeOracleResponse>(&body)
            .inspect_err(|err| debug!(%err, "Not able to parse fee oracle response."))
            .map_err(|_| OracleError::Unavailable)?;

        if let Some(msg) = body.error_message() {
            return Err(OracleError::Reported(msg));
        }

        Ok(body.response)
    }

    /// Requests a fee quote and rejects missing, empty or partial ones.
    pub async fn quote(&self, request: &FeeOracleRequest) -> Result<FeeOracleQuote, FeeError> {
        self.request_fee(request).await?.ok_or(FeeError::EmptyOracleResponse)?.into_quote()
    }
}
