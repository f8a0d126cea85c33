use crate::errors::api::ItemsError;

/// ApiKeyService checks the shared secret presented in the `x-api-key` header
///
/// The secret comes from configuration (API_KEY environment variable with a
/// development fallback). Comparison is exact string equality.
pub struct ApiKeyService {
    api_key: String,
}

impl ApiKeyService {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }

    /// Validate a presented header value against the configured secret
    ///
    /// # Returns
    /// * `Ok(())` - The key matches
    /// * `Err(ItemsError)` - MissingApiKey if no header was sent, InvalidApiKey on mismatch
    pub fn authorize(&self, presented: Option<&str>) -> Result<(), ItemsError> {
        match presented {
            None => {
                tracing::warn!("API key missing in request");
                Err(ItemsError::missing_api_key())
            }
            Some(key) if key == self.api_key => Ok(()),
            Some(_) => {
                tracing::warn!("invalid API key attempted");
                Err(ItemsError::invalid_api_key())
            }
        }
    }
}

impl std::fmt::Debug for ApiKeyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyService")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_key_is_authorized() {
        let service = ApiKeyService::new("secret".to_string());
        assert!(service.authorize(Some("secret")).is_ok());
    }

    #[test]
    fn missing_key_is_rejected() {
        let service = ApiKeyService::new("secret".to_string());
        let result = service.authorize(None);
        assert!(matches!(result, Err(ItemsError::MissingApiKey(_))));
    }

    #[test]
    fn mismatched_key_is_rejected() {
        let service = ApiKeyService::new("secret".to_string());
        let result = service.authorize(Some("wrong"));
        assert!(matches!(result, Err(ItemsError::InvalidApiKey(_))));
    }

    #[test]
    fn debug_output_does_not_expose_the_secret() {
        let service = ApiKeyService::new("super-secret-key".to_string());
        let debug_output = format!("{:?}", service);

        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains("super-secret-key"));
    }
}
