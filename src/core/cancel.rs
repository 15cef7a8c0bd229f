use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// 批次共用的停止旗標，clone 後共用同一個 token
#[derive(Clone, Debug)]
pub struct StopSignal {
    token: CancellationToken,
}

impl StopSignal {
    pub fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    pub fn trigger(&self) {
        self.token.cancel();
    }

    pub fn is_triggered(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// 收到中斷信號 (Ctrl-C) 時觸發 `stop`
pub fn listen_for_interrupt(stop: StopSignal) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::debug!("Interrupt received, stopping batch");
                stop.trigger();
            }
            Err(e) => tracing::warn!("Unable to listen for interrupt signal: {}", e),
        }
    })
}
