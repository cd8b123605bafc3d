pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, GridFocusError, HostError};
pub use events::{EventBus, HostEvent};
pub use types::{FocusIndex, GroupId};

pub type Result<T> = std::result::Result<T, GridFocusError>;
