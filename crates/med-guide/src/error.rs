use med_guide_core::error::GuideError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] GuideError),

    #[error("config error: {0}")]
    Config(String),
}
