use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Simple acknowledgement body for mutations with no payload to return.
#[derive(Serialize, Deserialize)]
pub struct MessageDto {
    pub message: String,
}
