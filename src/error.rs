pub type PetResult<T> = Result<T, PetError>;

#[derive(thiserror::Error, Debug)]
pub enum PetError {
    #[error("a pet named {0:?} already exists")]
    DuplicateName(String),

    #[error("unknown pet kind: {0:?}")]
    UnknownKind(String),

    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl PetError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedSnapshot(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        assert!(PetError::DuplicateName("Jerry".into())
            .to_string()
            .contains("\"Jerry\""));
        assert!(PetError::UnknownKind("dragon".into())
            .to_string()
            .contains("dragon"));
        assert!(PetError::malformed("x")
            .to_string()
            .contains("malformed snapshot:"));
    }

    #[test]
    fn io_preserves_source() {
        let err = PetError::from(std::io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
    }
}
