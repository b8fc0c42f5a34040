use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

pub use filter_model::{Filter, FilterDef, Image, Parameter, ParameterValue};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("API returned an invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("API returned error {code}: {message}")]
    ApiError { code: String, message: String },

    #[error("API returned an invalid filter definition: {0}")]
    InvalidCatalog(#[from] filter_model::ParameterError),
}

type Result<T> = std::result::Result<T, GatewayError>;

/// Error body produced by the backend alongside non-success statuses.
#[derive(Deserialize)]
struct BackendError {
    code: String,
    message: String,
}

#[derive(Clone, Debug)]
pub struct FilterlabApiClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl FilterlabApiClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.endpoint.join(path).unwrap().to_string()
    }

    async fn send_request(request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::InvalidRequest {
                reason: e.to_string(),
            })?;
        if response.status().is_success() {
            return Ok(response);
        }
        match response.json::<BackendError>().await {
            Ok(error) => Err(GatewayError::ApiError {
                code: error.code,
                message: error.message,
            }),
            Err(e) => Err(GatewayError::InvalidResponse {
                reason: e.to_string(),
            }),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        debug!("GET {url}");
        Self::send_request(self.client.get(&url))
            .await?
            .json::<T>()
            .await
            .map_err(|e| GatewayError::InvalidResponse {
                reason: e.to_string(),
            })
    }

    async fn get_bytes(&self, url: String) -> Result<Vec<u8>> {
        debug!("GET {url}");
        Self::send_request(self.client.get(&url))
            .await?
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| GatewayError::InvalidResponse {
                reason: e.to_string(),
            })
    }

    /// Lists the gallery; the returned records carry metadata only, the
    /// encoded bytes come from [`get_image`](Self::get_image).
    pub async fn list_images(&self) -> Result<Vec<Image>> {
        self.get_json(self.url("images")).await
    }

    pub async fn get_image(&self, id: i64) -> Result<Vec<u8>> {
        self.get_bytes(self.url(&format!("images/{id}"))).await
    }

    pub async fn upload_image(&self, file_name: &str, data: Vec<u8>) -> Result<()> {
        let url = self.url("images");
        debug!("POST {url} ({file_name}, {} bytes)", data.len());
        let part = reqwest::multipart::Part::bytes(data).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new().part("file", part);
        Self::send_request(self.client.post(&url).multipart(form)).await?;
        Ok(())
    }

    pub async fn delete_image(&self, id: i64) -> Result<()> {
        let url = self.url(&format!("images/{id}"));
        debug!("DELETE {url}");
        Self::send_request(self.client.delete(&url)).await?;
        Ok(())
    }

    /// Fetches the algorithm catalog and turns each definition into a
    /// [`Filter`] with validated, default-filled parameters.
    pub async fn list_filters(&self) -> Result<Vec<Filter>> {
        let defs: Vec<FilterDef> = self.get_json(self.url("algorithms")).await?;
        defs.into_iter()
            .map(|def| Filter::try_from(def).map_err(GatewayError::from))
            .collect()
    }

    /// Requests a filtered rendition of an image. The filter's parameter
    /// fragment already starts with `&`, so it concatenates directly onto
    /// the `algorithm` query parameter.
    pub async fn apply_filter(&self, id: i64, filter: &Filter) -> Result<Vec<u8>> {
        let url = format!(
            "{}?algorithm={}{}",
            self.url(&format!("images/{id}")),
            filter.path,
            filter.serialize()
        );
        self.get_bytes(url).await
    }
}

impl Default for FilterlabApiClient {
    fn default() -> Self {
        Self::new(Url::parse("http://localhost/").unwrap())
    }
}

impl PartialEq for FilterlabApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_concatenates_onto_algorithm_parameter() {
        let filter = Filter::new(
            "Luminosity",
            "changeLuminosity",
            vec![Parameter::range_with_value("delta", "Delta", -255.0, 255.0, 1.0, 40.0).unwrap()],
        );
        let client = FilterlabApiClient::default();
        let url = format!(
            "{}?algorithm={}{}",
            client.url("images/7"),
            filter.path,
            filter.serialize()
        );
        assert_eq!(
            url,
            "http://localhost/images/7?algorithm=changeLuminosity&delta=40"
        );
    }

    #[test]
    fn clients_compare_by_endpoint() {
        let a = FilterlabApiClient::default();
        let b = FilterlabApiClient::new(Url::parse("http://localhost/").unwrap());
        let c = FilterlabApiClient::new(Url::parse("http://gallery.local/").unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
