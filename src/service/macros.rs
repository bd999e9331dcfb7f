/// Gives each listed generated client a `get()` that connects it to the shared
/// channel with [`crate::service::RequestMetadata`] attached.
macro_rules! define_client {
    ($($type: tt),*) => {
        $(
            impl $type<
                tonic::codegen::InterceptedService<
                    tonic::transport::Channel,
                    crate::service::RequestMetadata,
                >,
            > {
                pub(crate) async fn get() -> Result<Self, crate::service::Error> {
                    let config = crate::config::get()?;
                    let channel = crate::service::channel().await?;
                    let token = crate::service::bearer_token(config).await?;
                    let metadata =
                        crate::service::RequestMetadata::new(&token, &config.database_path())?;
                    Ok($type::with_interceptor(channel, metadata))
                }
            }
        )*
    };
}
