//! Channel transport between the surface side and the host side.
//!
//! `ChannelHostProxy` turns each `HostProxy` call into a `HostRequest`
//! paired with a reply slot. The host drains them from `HostEndpoint` on
//! its own thread and answers each one.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use framefind_common::{HostError, WindowId};

use super::proxy::{FindOptions, FrameTarget, HostProxy, StopFindOptions};

/// Wire shape of a host request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "camelCase")]
pub enum HostRequest {
    #[serde(rename_all = "camelCase")]
    FindInFrame {
        target: FrameTarget,
        query: String,
        options: FindOptions,
    },
    #[serde(rename_all = "camelCase")]
    StopFindInFrame {
        target: FrameTarget,
        options: StopFindOptions,
    },
    #[serde(rename_all = "camelCase")]
    SetIgnoreMenuShortcuts { window_id: WindowId, ignore: bool },
}

/// A request and the slot its answer goes into.
#[derive(Debug)]
pub struct HostEnvelope {
    pub request: HostRequest,
    reply: oneshot::Sender<Result<(), HostError>>,
}

impl HostEnvelope {
    /// Answer the request. A caller that stopped waiting is ignored.
    pub fn reply(self, result: Result<(), HostError>) {
        let _ = self.reply.send(result);
    }
}

/// Surface-side end of the channel.
#[derive(Debug, Clone)]
pub struct ChannelHostProxy {
    tx: mpsc::Sender<HostEnvelope>,
}

/// Host-side end of the channel.
#[derive(Debug)]
pub struct HostEndpoint {
    rx: mpsc::Receiver<HostEnvelope>,
}

/// Create a connected proxy/endpoint pair holding at most `capacity`
/// unanswered requests.
pub fn host_channel(capacity: usize) -> (ChannelHostProxy, HostEndpoint) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    (ChannelHostProxy { tx }, HostEndpoint { rx })
}

impl ChannelHostProxy {
    async fn call(&self, request: HostRequest) -> Result<(), HostError> {
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(HostEnvelope { request, reply })
            .await
            .map_err(|_| HostError::ChannelClosed)?;
        answer.await.map_err(|_| HostError::NoReply)?
    }
}

#[async_trait]
impl HostProxy for ChannelHostProxy {
    async fn find_in_frame(
        &self,
        target: &FrameTarget,
        query: &str,
        options: &FindOptions,
    ) -> Result<(), HostError> {
        self.call(HostRequest::FindInFrame {
            target: target.clone(),
            query: query.to_string(),
            options: options.clone(),
        })
        .await
    }

    async fn stop_find_in_frame(
        &self,
        target: &FrameTarget,
        options: &StopFindOptions,
    ) -> Result<(), HostError> {
        self.call(HostRequest::StopFindInFrame {
            target: target.clone(),
            options: options.clone(),
        })
        .await
    }

    async fn set_ignore_menu_shortcuts(
        &self,
        window_id: WindowId,
        ignore: bool,
    ) -> Result<(), HostError> {
        self.call(HostRequest::SetIgnoreMenuShortcuts { window_id, ignore })
            .await
    }
}

impl HostEndpoint {
    /// Take the next pending request, if any. Never blocks.
    pub fn try_next(&mut self) -> Option<HostEnvelope> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next request. `None` once every proxy is dropped.
    pub async fn next(&mut self) -> Option<HostEnvelope> {
        self.rx.recv().await
    }
}
