//! Gateway: the event loop connecting the chat channel and the translator.
//!
//! Each reaction is handled in its own task; a failure in one never reaches
//! the loop or any other event.

mod routing;


use babel_core::{
    flags::FlagTable,
    message::ReactionEvent,
    traits::{Channel, Translator},
};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

pub use routing::Outcome;

/// The central gateway that routes reactions to the translator.
pub struct Gateway {
    pub(super) channel: Arc<dyn Channel>,
    pub(super) translator: Arc<dyn Translator>,
    pub(super) flags: Arc<FlagTable>,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        channel: Arc<dyn Channel>,
        translator: Arc<dyn Translator>,
        flags: Arc<FlagTable>,
    ) -> Self {
        Self {
            channel,
            translator,
            flags,
        }
    }

    /// Run until a shutdown signal arrives or the channel closes.
    ///
    /// On a signal, in-flight handlers are abandoned and `Ok` is returned.
    /// When the channel closes on its own, in-flight handlers are allowed to
    /// finish and the closed stream is reported as an error.
    pub async fn run(self: Arc<Self>) -> anyhow::Result<()> {
        info!(
            "Babel gateway running | channel: {} | translator: {} | flags: {}",
            self.channel.name(),
            self.translator.name(),
            self.flags.len(),
        );

        let mut rx = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel {}: {e}", self.channel.name()))?;
        info!("Babel bot is running. Press CTRL-C to exit.");

        let mut in_flight = JoinSet::new();
        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        let stream_closed = loop {
            tokio::select! {
                maybe_event = rx.recv() => match maybe_event {
                    Some(event) => {
                        let gw = self.clone();
                        in_flight.spawn(async move {
                            gw.dispatch_reaction(event).await;
                        });
                    }
                    None => {
                        warn!("channel {} closed its event stream", self.channel.name());
                        while let Some(res) = in_flight.join_next().await {
                            log_join_error(res);
                        }
                        break true;
                    }
                },
                Some(res) = in_flight.join_next(), if !in_flight.is_empty() => {
                    log_join_error(res);
                }
                _ = &mut shutdown => {
                    info!("Received shutdown signal");
                    in_flight.abort_all();
                    break false;
                }
            }
        };

        if let Err(e) = self.channel.stop().await {
            error!("failed to stop channel {}: {e}", self.channel.name());
        }
        if stream_closed {
            anyhow::bail!("channel {} closed its event stream", self.channel.name());
        }
        info!("Babel gateway stopped");
        Ok(())
    }

    async fn dispatch_reaction(self: Arc<Self>, event: ReactionEvent) {
        let outcome = self.handle_reaction(&event).await;
        debug!(
            "reaction {} on {}/{} -> {outcome:?}",
            event.emoji, event.channel_id, event.message_id
        );
    }
}

fn log_join_error(res: Result<(), tokio::task::JoinError>) {
    if let Err(e) = res {
        if e.is_panic() {
            error!("reaction handler panicked: {e}");
        }
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
