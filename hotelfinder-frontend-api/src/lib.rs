use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;

pub use self::public::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0:?}")]
    Api(#[from] hotelfinder_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<hotelfinder_boundary::Error>().await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_errors() {
        let err = Error::Fetch("connection refused".into());
        assert_eq!(err.to_string(), "connection refused");

        let err = Error::from(hotelfinder_boundary::Error {
            http_status: 503,
            message: "maintenance".into(),
        });
        assert!(err.to_string().contains("maintenance"));
        assert!(matches!(err, Error::Api(hotelfinder_boundary::Error { http_status: 503, .. })));
    }
}
