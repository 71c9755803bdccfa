use thiserror::Error;

/// Errors surfaced by [`assess`](crate::assess).
///
/// All variants are degradable: the pipeline replaces a failed assessment
/// with a fallback narrative instead of failing the request.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// No credential is configured for the text-generation service.
    #[error("nenhuma credencial configurada para o serviço de IA")]
    NoCredentials,

    /// The external call failed: transport error, non-success status, or a
    /// response without generated text.
    #[error("falha na análise de IA do comprovante: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_carries_cause() {
        let err = AdvisorError::Unavailable("HTTP 503".into());
        assert!(err.to_string().contains("HTTP 503"));
    }
}
