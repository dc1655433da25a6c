pub mod endpoint;
pub mod uic;

pub use endpoint::{DeviceEndpoint, UIC_PATH};
pub use uic::{UicClient, UicResponse};
