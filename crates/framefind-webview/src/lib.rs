//! Find-in-page and shortcut handling for embedded web surfaces.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances per surface
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A per-surface find session driven against the host
//! - Menu shortcut suppression while a surface has focus
//! - The host side: a request channel, a dispatcher and a service that
//!   performs requests against native frames

pub mod embedded;
pub mod events;
pub mod find;
pub mod host;
pub mod ipc;
pub mod manager;
pub mod shortcuts;
pub mod surface;

pub use embedded::{EmbeddedSurface, SurfaceSettings};
pub use events::{PageLoadState, WebViewEvent};
pub use find::{FindDispatch, FindOutcome, FindSession, FindSessionCoordinator, StopOutcome};
pub use host::{
    host_channel, ChannelHostProxy, FindOptions, FrameLookup, FrameTarget, HostCommand,
    HostDispatcher, HostEndpoint, HostProxy, HostRequest, HostService, NativeFrame,
    StopFindOptions,
};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
pub use shortcuts::{ShortcutSuppressionManager, SuppressionState};
pub use surface::{FindResult, SurfaceAdapter, SurfaceMessage};
