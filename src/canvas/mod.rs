//! Platform API layer: blocking client, reporting, and the ordered
//! upload walk.

pub mod client;
pub mod error;
pub mod report;
pub mod upload;

pub use client::CanvasClient;
pub use error::{CanvasError, CanvasResult, UploadError};
pub use upload::{Uploaded, Uploader};
