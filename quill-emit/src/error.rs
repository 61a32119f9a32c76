use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for emission (errors here abort the whole run)
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] quill_core::Error),

    #[error("failed to generate contents for model '{model}'")]
    Generate {
        model: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to merge model contents")]
    Merge(#[source] BoxError),

    #[error("invalid emitter options")]
    Options(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn generate(model: &str, report: eyre::Report) -> Self {
        Self::Generate {
            model: model.to_string(),
            source: report.into(),
        }
    }

    pub(crate) fn merge(report: eyre::Report) -> Self {
        Self::Merge(report.into())
    }
}
