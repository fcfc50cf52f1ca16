use base64::{engine::general_purpose::STANDARD, Engine as _};

/// An image serialized into a display-ready container (PNG).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl EncodedImage {
    pub fn png(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/png",
        }
    }

    /// `data:<mime>;base64,<payload>`, the form stored in history items.
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    /// Parses a PNG data URI back into its bytes. `None` for any other
    /// media type or for a malformed payload.
    pub fn from_png_data_uri(data_uri: &str) -> Option<Self> {
        let payload = data_uri.strip_prefix("data:image/png;base64,")?;
        STANDARD.decode(payload).ok().map(Self::png)
    }
}
