use thiserror::Error;

/// Failures of the SSR server binary. The page itself has none.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SiteError::Config("missing site-addr".to_string());
        assert_eq!(
            err.to_string(),
            "Couldn't load leptos configuration: missing site-addr"
        );

        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err = SiteError::from(io);
        assert!(matches!(err, SiteError::Io(_)));
        assert_eq!(err.to_string(), "IO error: port taken");
    }
}
