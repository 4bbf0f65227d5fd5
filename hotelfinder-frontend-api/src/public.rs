use gloo_net::http::Request;

use hotelfinder_boundary::Hotel;

use crate::{into_json, Result};

/// Public API of the hotel data service.
#[derive(Debug, Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    fn hotels_url(&self) -> String {
        format!("{}/hotels", self.url.trim_end_matches('/'))
    }

    /// Fetch the complete hotel collection.
    pub async fn hotels(&self) -> Result<Vec<Hotel>> {
        let url = self.hotels_url();
        log::debug!("Fetch hotels from {url}");
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }
}
