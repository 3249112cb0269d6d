mod action;
pub use action::*;

mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod blink;
pub use blink::*;

mod error;
pub use error::*;

mod idl;
pub use idl::*;

mod method_config;
pub use method_config::*;

mod project;
pub use project::*;
