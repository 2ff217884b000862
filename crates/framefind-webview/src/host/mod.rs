//! The host side of the boundary and the gateway to it.
//!
//! - `proxy`: the `HostProxy` trait and request option types
//! - `dispatch`: ordered fire-and-forget queue in front of a proxy
//! - `channel`: proxy implementation over tokio channels
//! - `service`: host-side handler that performs requests on native frames

mod channel;
mod dispatch;
mod proxy;
mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use channel::{host_channel, ChannelHostProxy, HostEndpoint, HostEnvelope, HostRequest};
pub use dispatch::{HostCommand, HostDispatcher, DEFAULT_QUEUE_CAPACITY};
pub use proxy::{FindOptions, FrameTarget, HostProxy, StopFindOptions};
pub use service::{FrameLookup, HostService, NativeFrame};
