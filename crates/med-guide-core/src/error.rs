/// Error types for the guidance core.
///
/// Resolution and reply selection are total and never fail. These errors only cover
/// parsing caller-supplied labels into their enums.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GuideError {
    #[error("unknown topic category: {0}")]
    UnknownTopicCategory(String),
}
