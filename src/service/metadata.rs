use super::Error;
use tonic::{metadata::AsciiMetadataValue, service::Interceptor, Request, Status};

const AUTHORIZATION: &str = "authorization";
const RESOURCE_PREFIX: &str = "google-cloud-resource-prefix";

/// Adds the bearer token and the database resource prefix to every request.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    authorization: AsciiMetadataValue,
    resource_prefix: AsciiMetadataValue,
}

impl RequestMetadata {
    pub fn new(token: &str, database_path: &str) -> Result<Self, Error> {
        Ok(RequestMetadata {
            authorization: format!("Bearer {}", token).parse()?,
            resource_prefix: database_path.parse()?,
        })
    }
}

impl Interceptor for RequestMetadata {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let metadata = request.metadata_mut();
        metadata.insert(AUTHORIZATION, self.authorization.clone());
        metadata.insert(RESOURCE_PREFIX, self.resource_prefix.clone());
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::RequestMetadata;
    use crate::service::Error;
    use tonic::{service::Interceptor, Request};

    #[test]
    fn test_headers() {
        let mut metadata =
            RequestMetadata::new("owner", "projects/p/databases/(default)").unwrap();
        let request = metadata.call(Request::new(())).unwrap();
        let headers = request.metadata();
        assert_eq!(
            "Bearer owner",
            headers.get("authorization").unwrap().to_str().unwrap()
        );
        assert_eq!(
            "projects/p/databases/(default)",
            headers
                .get("google-cloud-resource-prefix")
                .unwrap()
                .to_str()
                .unwrap()
        );
    }

    #[test]
    fn test_invalid_token() {
        assert!(matches!(
            RequestMetadata::new("bad\ntoken", "projects/p/databases/(default)"),
            Err(Error::Metadata(_))
        ));
    }
}
