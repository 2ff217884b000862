//! Test doubles for the host boundary.

use async_trait::async_trait;
use tokio::sync::mpsc;

use framefind_common::{HostError, WindowId};

use super::dispatch::HostCommand;
use super::proxy::{FindOptions, FrameTarget, HostProxy, StopFindOptions};

const RECORD_CAPACITY: usize = 1024;

/// Records every call as a `HostCommand`, then answers with `outcome`.
pub(crate) struct RecordingProxy {
    calls: mpsc::Sender<HostCommand>,
    outcome: Result<(), HostError>,
}

impl RecordingProxy {
    pub(crate) fn new() -> (Self, mpsc::Receiver<HostCommand>) {
        let (calls, rx) = mpsc::channel(RECORD_CAPACITY);
        (
            Self {
                calls,
                outcome: Ok(()),
            },
            rx,
        )
    }

    pub(crate) fn failing(error: HostError) -> (Self, mpsc::Receiver<HostCommand>) {
        let (calls, rx) = mpsc::channel(RECORD_CAPACITY);
        (
            Self {
                calls,
                outcome: Err(error),
            },
            rx,
        )
    }

    fn record(&self, command: HostCommand) -> Result<(), HostError> {
        let _ = self.calls.try_send(command);
        self.outcome.clone()
    }
}

#[async_trait]
impl HostProxy for RecordingProxy {
    async fn find_in_frame(
        &self,
        target: &FrameTarget,
        query: &str,
        options: &FindOptions,
    ) -> Result<(), HostError> {
        self.record(HostCommand::FindInFrame {
            target: target.clone(),
            query: query.to_string(),
            options: options.clone(),
        })
    }

    async fn stop_find_in_frame(
        &self,
        target: &FrameTarget,
        options: &StopFindOptions,
    ) -> Result<(), HostError> {
        self.record(HostCommand::StopFindInFrame {
            target: target.clone(),
            options: options.clone(),
        })
    }

    async fn set_ignore_menu_shortcuts(
        &self,
        window_id: WindowId,
        ignore: bool,
    ) -> Result<(), HostError> {
        self.record(HostCommand::SetIgnoreMenuShortcuts { window_id, ignore })
    }
}

/// Everything queued so far, without waiting.
pub(crate) fn drain(rx: &mut mpsc::Receiver<HostCommand>) -> Vec<HostCommand> {
    let mut out = Vec::new();
    while let Ok(command) = rx.try_recv() {
        out.push(command);
    }
    out
}
