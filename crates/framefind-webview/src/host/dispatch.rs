//! Fire-and-forget command dispatch to the host.
//!
//! The surface side never awaits host calls. Commands go into a bounded
//! queue and a single pump task awaits them one by one against the
//! `HostProxy`, so the host observes them in dispatch order. Failed calls
//! are logged and dropped. A full queue rejects new commands instead of
//! blocking the caller.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use framefind_common::{HostError, WindowId};

use super::proxy::{FindOptions, FrameTarget, HostProxy, StopFindOptions};

/// Pending commands a dispatcher holds when no capacity is given.
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// One queued host call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    FindInFrame {
        target: FrameTarget,
        query: String,
        options: FindOptions,
    },
    StopFindInFrame {
        target: FrameTarget,
        options: StopFindOptions,
    },
    SetIgnoreMenuShortcuts {
        window_id: WindowId,
        ignore: bool,
    },
}

impl HostCommand {
    fn name(&self) -> &'static str {
        match self {
            HostCommand::FindInFrame { .. } => "findInFrame",
            HostCommand::StopFindInFrame { .. } => "stopFindInFrame",
            HostCommand::SetIgnoreMenuShortcuts { .. } => "setIgnoreMenuShortcuts",
        }
    }
}

/// Cloneable, non-blocking sender of host commands.
#[derive(Debug, Clone)]
pub struct HostDispatcher {
    tx: mpsc::Sender<HostCommand>,
}

impl HostDispatcher {
    /// A dispatcher and the raw receiving end of its queue.
    ///
    /// Used directly when something other than the pump consumes commands.
    pub fn channel() -> (Self, mpsc::Receiver<HostCommand>) {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    /// Like [`channel`](Self::channel), holding at most `capacity` pending
    /// commands.
    pub fn with_capacity(capacity: usize) -> (Self, mpsc::Receiver<HostCommand>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx }, rx)
    }

    /// Start a pump on `runtime` that forwards every command to `proxy`.
    ///
    /// The pump exits once every clone of the dispatcher is dropped.
    pub fn spawn(
        runtime: &Handle,
        proxy: Arc<dyn HostProxy>,
        capacity: usize,
    ) -> (Self, JoinHandle<()>) {
        let (dispatcher, rx) = Self::with_capacity(capacity);
        let task = runtime.spawn(pump(rx, proxy));
        (dispatcher, task)
    }

    /// Queue a command. Never blocks.
    ///
    /// Fails when the queue is full or the pump is gone.
    pub fn dispatch(&self, command: HostCommand) -> Result<(), HostError> {
        self.tx.try_send(command).map_err(|e| match e {
            TrySendError::Full(_) => HostError::QueueFull,
            TrySendError::Closed(_) => HostError::ChannelClosed,
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

async fn pump(mut rx: mpsc::Receiver<HostCommand>, proxy: Arc<dyn HostProxy>) {
    while let Some(command) = rx.recv().await {
        let name = command.name();
        let result = match &command {
            HostCommand::FindInFrame {
                target,
                query,
                options,
            } => proxy.find_in_frame(target, query, options).await,
            HostCommand::StopFindInFrame { target, options } => {
                proxy.stop_find_in_frame(target, options).await
            }
            HostCommand::SetIgnoreMenuShortcuts { window_id, ignore } => {
                proxy.set_ignore_menu_shortcuts(*window_id, *ignore).await
            }
        };

        match result {
            Ok(()) => debug!(command = name, "host call completed"),
            Err(e) => warn!(command = name, error = %e, "host call failed"),
        }
    }
    debug!("host dispatcher stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::RecordingProxy;
    use framefind_common::SurfaceId;

    fn target() -> FrameTarget {
        FrameTarget::new(WindowId(1), SurfaceId::from("frame-1"))
    }

    #[test]
    fn dispatch_queues_without_runtime() {
        let (dispatcher, mut rx) = HostDispatcher::channel();
        dispatcher
            .dispatch(HostCommand::SetIgnoreMenuShortcuts {
                window_id: WindowId(1),
                ignore: true,
            })
            .unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            HostCommand::SetIgnoreMenuShortcuts {
                window_id: WindowId(1),
                ignore: true
            }
        );
    }

    #[test]
    fn dispatch_after_receiver_dropped_is_channel_closed() {
        let (dispatcher, rx) = HostDispatcher::channel();
        drop(rx);
        assert!(dispatcher.is_closed());
        let err = dispatcher
            .dispatch(HostCommand::SetIgnoreMenuShortcuts {
                window_id: WindowId(1),
                ignore: false,
            })
            .unwrap_err();
        assert_eq!(err, HostError::ChannelClosed);
    }

    #[test]
    fn full_queue_rejects_without_blocking() {
        let (dispatcher, mut rx) = HostDispatcher::with_capacity(2);
        let toggle = |ignore| HostCommand::SetIgnoreMenuShortcuts {
            window_id: WindowId(1),
            ignore,
        };

        dispatcher.dispatch(toggle(true)).unwrap();
        dispatcher.dispatch(toggle(false)).unwrap();
        assert_eq!(
            dispatcher.dispatch(toggle(true)).unwrap_err(),
            HostError::QueueFull
        );

        // Draining one slot makes room again.
        assert_eq!(rx.try_recv().unwrap(), toggle(true));
        dispatcher.dispatch(toggle(true)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), toggle(false));
        assert_eq!(rx.try_recv().unwrap(), toggle(true));
    }

    #[tokio::test]
    async fn pump_forwards_in_order() {
        let (proxy, mut calls) = RecordingProxy::new();
        let (dispatcher, task) =
            HostDispatcher::spawn(&Handle::current(), Arc::new(proxy), DEFAULT_QUEUE_CAPACITY);

        dispatcher
            .dispatch(HostCommand::FindInFrame {
                target: target(),
                query: "foo".into(),
                options: FindOptions::default(),
            })
            .unwrap();
        dispatcher
            .dispatch(HostCommand::FindInFrame {
                target: target(),
                query: "foo".into(),
                options: FindOptions::continuation(true),
            })
            .unwrap();
        dispatcher
            .dispatch(HostCommand::StopFindInFrame {
                target: target(),
                options: StopFindOptions::default(),
            })
            .unwrap();

        drop(dispatcher);
        task.await.unwrap();

        let mut seen = Vec::new();
        while let Ok(call) = calls.try_recv() {
            seen.push(call);
        }
        assert_eq!(seen.len(), 3);
        assert!(matches!(&seen[0], HostCommand::FindInFrame { options, .. } if options.forward.is_none()));
        assert!(matches!(&seen[1], HostCommand::FindInFrame { options, .. } if options.is_continuation()));
        assert!(matches!(&seen[2], HostCommand::StopFindInFrame { .. }));
    }

    #[tokio::test]
    async fn pump_survives_failed_calls() {
        let (proxy, mut calls) = RecordingProxy::failing(HostError::NoReply);
        let (dispatcher, task) =
            HostDispatcher::spawn(&Handle::current(), Arc::new(proxy), DEFAULT_QUEUE_CAPACITY);

        for ignore in [true, false] {
            dispatcher
                .dispatch(HostCommand::SetIgnoreMenuShortcuts {
                    window_id: WindowId(2),
                    ignore,
                })
                .unwrap();
        }

        drop(dispatcher);
        task.await.unwrap();

        assert!(calls.try_recv().is_ok());
        assert!(calls.try_recv().is_ok());
        assert!(calls.try_recv().is_err());
    }
}
