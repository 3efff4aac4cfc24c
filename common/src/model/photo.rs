use serde::{Deserialize, Serialize};

/// JSON body returned by `POST /api/shoplist/photo/upload`.
///
/// The filename is what gets attached to the next submitted contact as its
/// photo reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub filename: String,
}
