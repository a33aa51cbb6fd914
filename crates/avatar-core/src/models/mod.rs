pub mod avatar;

pub use avatar::{AvatarUpload, UploadResponse};
