/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the channel count has no typed image counterpart.
    #[error("Unsupported number of channels: {0}")]
    UnsupportedChannels(usize),
}
