use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

/// Emits only values that stayed unchanged for `delay`.
///
/// Starts from a caller-supplied settled value that is never emitted. Every
/// input (re)starts the timer; when it fires the pending value becomes settled
/// and is forwarded unless it equals the current settled value.
pub struct Debouncer {
    delay: Duration,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn run<T>(
        &self,
        initial: T,
        input: AsyncReceiver<T>,
        output: AsyncSender<T>,
        cancel: CancellationToken,
    ) -> anyhow::Result<()>
    where
        T: Clone + PartialEq + std::fmt::Debug + Send,
    {
        let mut settled = initial;
        let mut pending: Option<T> = None;
        let timer = time::sleep(self.delay);
        tokio::pin!(timer);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("[DEBOUNCE] Cancelled, dropping {:?}", pending);
                    break;
                }
                value = input.recv() => {
                    let Ok(value) = value else {
                        tracing::debug!("[DEBOUNCE] Input closed");
                        break;
                    };
                    timer.as_mut().reset(Instant::now() + self.delay);
                    pending = Some(value);
                }
                _ = &mut timer, if pending.is_some() => {
                    if let Some(value) = pending.take()
                        && value != settled
                    {
                        tracing::debug!("[DEBOUNCE] Settled on {:?}", value);
                        settled = value;
                        output.send(settled.clone()).await?;
                    }
                }
            }
        }

        Ok(())
    }
}
