#[cfg(feature = "client")]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid url")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server error: {0}\n{1}")]
    ServerError(reqwest::StatusCode, String),
    #[error("json error")]
    Json(#[from] serde_json::Error),
}

pub const DEFAULT_SERVER_URL: &str = "https://groups.roblox.com/";

#[cfg(feature = "client")]
#[derive(Default, Debug, Clone)]
pub struct ClientConfig {
    pub url_base: Option<url::Url>,
}

#[cfg(feature = "client")]
impl ClientConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_url(mut self, url: impl AsRef<str>) -> Result<Self, Error> {
        self.url_base = Some(url::Url::parse(url.as_ref())?);
        Ok(self)
    }
}

macro_rules! declare_client_impl {
    ($async_or_blocking: ident) => {
        declare_client! {
            $async_or_blocking;

            get group_details(
                ("groups/{id}", id: u64),
            ) -> crate::groups::GroupDetails;
            get group_members(
                ("groups/{id}/users", id: u64),
                @query params: &crate::params::MemberListParams,
            ) -> crate::groups::GroupMembersPage;
        }
    };
}

macro_rules! declare_client {
    (
        url;

        $(
            $(#[$fattr:meta])*
            $method: ident $fname: ident(
                (
                    $url: literal $(,)?
                    $( $path_name: ident: $path_type: ty ),*
                    $(,)?
                ),
                $(@query $query_name: ident: $query_type: ty, )*
            ) -> $rtype: ty;
        )*
    ) => {
        $(
            $(#[$fattr:meta])*
            pub fn $fname(url: &Url, $( $path_name: $path_type, )*) -> Url {
                url.join(BASE).unwrap().join(&format!($url)).unwrap()
            }
        )*
    };

    (
        async;

        $(
            $(#[$fattr:meta])*
            $method: ident $fname: ident(
                (
                    $url: literal $(,)?
                    $( $path_name: ident: $path_type: ty ),*
                    $(,)?
                ),
                $(@query $query_name: ident: $query_type: ty, )*
            ) -> $rtype: ty;
        )*
    ) => {
        $(
            $(#[$fattr:meta])*
            pub async fn $fname(
                &self,
                $( $path_name: $path_type, )*
                $( $query_name: $query_type, )*
            ) -> Result<$rtype, super::Error> {
                let request = self.1
                    . $method (crate::routes::v1:: $fname ( &self.0, $( $path_name, )* ))
                    $(.query( $query_name ))*
                ;

                let response = request
                    .send()
                    .await?;

                if response.status().is_success() {
                    Ok(response
                        .json()
                        .await?)
                } else {
                    let status = response.status();
                    let body = response.text().await?;
                    Err(crate::client::server_error(status, body))
                }
            }
        )*
    };

    (
        blocking;

        $(
            $(#[$fattr:meta])*
            $method: ident $fname: ident(
                (
                    $url: literal $(,)?
                    $( $path_name: ident: $path_type: ty ),*
                    $(,)?
                ),
                $(@query $query_name: ident: $query_type: ty, )*
            ) -> $rtype: ty;
        )*
    ) => {
        $(
            $(#[$fattr:meta])*
            pub fn $fname(
                &self,
                $( $path_name: $path_type, )*
                $( $query_name: $query_type, )*
            ) -> Result<$rtype, super::Error> {
                let request = self.1
                    . $method (crate::routes::v1:: $fname ( &self.0, $( $path_name, )* ))
                    $(.query( $query_name ))*
                ;

                let response = request.send()?;

                if response.status().is_success() {
                    Ok(response.json()?)
                } else {
                    let status = response.status();
                    let body = response.text()?;
                    Err(crate::client::server_error(status, body))
                }
            }
        )*
    };
}

/// Builds a `ServerError`, replacing the raw body with the upstream error
/// message when the body parses as the API error document.
#[cfg(feature = "client")]
fn server_error(status: reqwest::StatusCode, body: String) -> Error {
    let message = serde_json::from_str::<crate::error::ApiErrorDocument>(&body)
        .ok()
        .and_then(|doc| doc.message().map(str::to_owned))
        .unwrap_or(body);
    Error::ServerError(status, message)
}

pub mod routes {
    pub mod v1 {
        use url::Url;

        pub const BASE: &str = "/v1/";

        declare_client_impl!(url);
    }
}

#[cfg(feature = "client")]
pub mod v1 {
    use crate::client::ClientConfig;
    use reqwest::{Client, Url};

    pub struct V1Client(Url, Client);

    #[cfg(feature = "blocking")]
    pub struct BlockingV1Client(Url, reqwest::blocking::Client);

    impl V1Client {
        pub fn new(ClientConfig { url_base }: ClientConfig) -> Result<Self, String> {
            let url = url_base.unwrap_or_else(|| Url::parse(super::DEFAULT_SERVER_URL).unwrap());
            let client = Client::builder().build().map_err(|e| e.to_string())?;
            Ok(Self(url, client))
        }

        declare_client_impl!(async);
    }

    #[cfg(feature = "blocking")]
    impl BlockingV1Client {
        pub fn new(ClientConfig { url_base }: ClientConfig) -> Result<Self, String> {
            let url = url_base.unwrap_or_else(|| Url::parse(super::DEFAULT_SERVER_URL).unwrap());
            let client = reqwest::blocking::Client::builder()
                .build()
                .map_err(|e| e.to_string())?;
            Ok(Self(url, client))
        }

        declare_client_impl!(blocking);
    }
}

#[cfg(feature = "blocking")]
pub use v1::BlockingV1Client;
#[cfg(feature = "client")]
pub use v1::V1Client;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;

    #[test]
    fn route_urls() {
        let server = Url::parse("https://groups.roblox.com/").unwrap();

        assert_eq!(
            crate::routes::v1::group_details(&server, 123).as_str(),
            "https://groups.roblox.com/v1/groups/123"
        );
        assert_eq!(
            crate::routes::v1::group_members(&server, 123).as_str(),
            "https://groups.roblox.com/v1/groups/123/users"
        );
    }

    #[test]
    fn routes_respect_a_custom_server() {
        let server = Url::parse("http://localhost:8000/").unwrap();

        assert_eq!(
            crate::routes::v1::group_details(&server, 7).as_str(),
            "http://localhost:8000/v1/groups/7"
        );
    }
}
