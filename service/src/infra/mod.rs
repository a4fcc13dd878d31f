//! Infrastructure layer.

pub mod transport;
pub mod view;

pub use self::{transport::Transport, view::View};
#[cfg(feature = "http")]
pub use self::transport::{http, Http};
