use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parse failed: {0}")]
    Decode(String),
}
