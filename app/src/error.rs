use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Mounting requires a browser window with a document.
    #[error("no document available in this environment")]
    NoDocument,

    /// The selector was rejected by the document, e.g. because it is malformed.
    #[error("invalid mount selector `{0}`: {1}")]
    InvalidSelector(String, String),

    #[error("mount target `{0}` matched no element")]
    TargetNotFound(String),

    /// Shell templates can only be addressed by id selectors (`#app`).
    #[error("mount target `{0}` is not an id selector")]
    UnsupportedSelector(String),
}
