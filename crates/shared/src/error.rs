#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::Error::Server(format!($msg)))
    };
    ($err:expr $(,)?) => {
        return Err($crate::Error::Server(format!($err)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::Error::Server(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fails(reason: &str) -> Result<()> {
        bail!("cannot continue: {reason}");
    }

    #[test]
    fn bail_builds_server_error() {
        let err = fails("closed").unwrap_err();

        assert!(matches!(err, Error::Server(_)));
        assert_eq!(err.to_string(), "cannot continue: closed");
    }
}
