pub mod errors;
pub mod events;
pub mod id;

pub use errors::{ConfigError, HostError};
pub use events::{Emitter, Subscription, SubscriptionStore};
pub use id::{new_id, SurfaceId, WindowId};
