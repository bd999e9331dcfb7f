use crate::util::init_once::{AsyncCreator, InitOnce};
use async_trait::async_trait;
use gcp_auth::AuthenticationManager;
use once_cell::sync::Lazy;
use tracing::debug;

pub(crate) struct AuthenticationManagerCreator {}

#[async_trait]
impl AsyncCreator<AuthenticationManager> for AuthenticationManagerCreator {
    type Error = gcp_auth::Error;

    async fn create(&self) -> Result<AuthenticationManager, gcp_auth::Error> {
        debug!("looking up Google Cloud credentials");
        AuthenticationManager::new().await
    }
}

pub(crate) static AUTHENTICATION_MANAGER: Lazy<
    InitOnce<AuthenticationManager, AuthenticationManagerCreator>,
> = Lazy::new(|| InitOnce::new(AuthenticationManagerCreator {}));
