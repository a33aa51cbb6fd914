pub mod health;
pub mod upload_avatar;

pub use health::liveness_check;
pub use upload_avatar::upload_avatar;
