/// Path of the contact list and create endpoints.
pub const CONTACTS_PATH: &str = "/api/phoneApp";

/// Path of the multipart photo upload endpoint.
pub const PHOTO_UPLOAD_PATH: &str = "/api/shoplist/photo/upload";

/// Multipart field carrying the image bytes.
pub const UPLOAD_FILE_FIELD: &str = "file";

/// Multipart field carrying the owner of the uploaded photo.
pub const UPLOAD_OWNER_FIELD: &str = "userinfoId";
