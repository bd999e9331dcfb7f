//! Channel, credentials and per-service clients.
//!
//! Every client shares one channel and one credential source, both created on
//! first use. When an emulator host is configured the channel is plaintext and
//! requests carry the emulator's fixed `owner` token instead of a real one.

#[macro_use]
mod macros;

mod auth;
mod error;
mod metadata;

pub mod google;

pub use error::Error;
pub use metadata::RequestMetadata;

use crate::config::{self, Config};
use crate::util::init_once::{AsyncCreator, InitOnce};
use async_trait::async_trait;
use http::uri::Uri;
use once_cell::sync::Lazy;
use tonic::transport::{Channel, ClientTlsConfig};
use tracing::debug;

const DOMAIN: &str = "firestore.googleapis.com";
const SCOPE: &str = "https://www.googleapis.com/auth/datastore";
const EMULATOR_TOKEN: &str = "owner";

struct ChannelCreator {}

#[async_trait]
impl AsyncCreator<Channel> for ChannelCreator {
    type Error = Error;

    async fn create(&self) -> Result<Channel, Error> {
        create_channel(config::get()?).await
    }
}

static CHANNEL: Lazy<InitOnce<Channel, ChannelCreator>> =
    Lazy::new(|| InitOnce::new(ChannelCreator {}));

pub(crate) async fn create_channel(config: &Config) -> Result<Channel, Error> {
    match config.emulator_host() {
        Some(host) => {
            let uri: Uri = format!("http://{}", host).parse()?;
            debug!(%uri, "connecting to the Firestore emulator");
            Ok(Channel::builder(uri).connect().await?)
        }
        None => {
            let tls = ClientTlsConfig::new().domain_name(DOMAIN);
            let uri: Uri = ["https://", DOMAIN].concat().parse()?;
            debug!(%uri, "connecting to Firestore");
            let channel = Channel::builder(uri).tls_config(tls)?.connect().await?;
            Ok(channel)
        }
    }
}

/// Connects with `config` and only then makes it the process config, so a
/// failed connection leaves nothing stored and `init` can be called again.
pub(crate) async fn init(config: Config) -> Result<(), Error> {
    let channel = create_channel(&config).await?;
    config::init(config)?;
    CHANNEL.provide(channel).await;
    Ok(())
}

pub(crate) async fn channel() -> Result<Channel, Error> {
    Ok(CHANNEL.get().await?.clone())
}

pub(crate) async fn bearer_token(config: &Config) -> Result<String, Error> {
    if config.emulator_host().is_some() {
        return Ok(EMULATOR_TOKEN.into());
    }
    let authentication_manager = auth::AUTHENTICATION_MANAGER.get().await?;
    let token = authentication_manager.get_token(&[SCOPE]).await?;
    Ok(token.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::{bearer_token, init, Error};
    use crate::config::Config;

    #[tokio::test]
    async fn test_emulator_token() {
        let config = Config::new("p").with_emulator_host(Some("localhost:8080".into()));
        assert_eq!("owner", bearer_token(&config).await.unwrap());
    }

    #[tokio::test]
    async fn test_init_retries_after_connect_failure() {
        let config = Config::new("p").with_emulator_host(Some("not a host".into()));
        for _ in 0..2 {
            match init(config.clone()).await {
                Err(Error::InvalidUri(_)) => {}
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }
}
