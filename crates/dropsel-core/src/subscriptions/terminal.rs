use crate::event::TerminalEvent;
use crate::subscription::{Subscription, SubscriptionId};
use crossterm::event::EventStream;
use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use std::sync::{Arc, Mutex, OnceLock};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

const HUB_CAPACITY: usize = 256;

type Source = Box<dyn Fn(broadcast::Sender<TerminalEvent>) -> BoxFuture<'static, ()> + Send + Sync>;

/// Fan-out point for terminal input.
///
/// crossterm only supports one active reader, so a single task drains the
/// source and re-broadcasts every event. The reader runs only while at
/// least one [`Listener`] is alive: the first listener starts it on the
/// current tokio runtime and the last one to drop aborts it, which releases
/// the terminal as soon as every subscription is gone.
pub struct EventHub {
    tx: broadcast::Sender<TerminalEvent>,
    source: Source,
    state: Mutex<HubState>,
}

#[derive(Default)]
struct HubState {
    listeners: usize,
    reader: Option<AbortHandle>,
}

impl EventHub {
    /// A hub whose reader runs `source`. The future receives the broadcast
    /// sender and should forward events until it is aborted.
    pub fn with_source<F>(source: F) -> Self
    where
        F: Fn(broadcast::Sender<TerminalEvent>) -> BoxFuture<'static, ()> + Send + Sync + 'static,
    {
        let (tx, _) = broadcast::channel(HUB_CAPACITY);
        Self {
            tx,
            source: Box::new(source),
            state: Mutex::new(HubState::default()),
        }
    }

    /// The process-wide hub reading the real terminal.
    pub fn global() -> &'static EventHub {
        static HUB: OnceLock<EventHub> = OnceLock::new();
        HUB.get_or_init(|| EventHub::with_source(|tx| read_terminal(tx).boxed()))
    }

    /// Register a listener, starting the reader if none is running.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn listen(&'static self) -> Listener {
        // Subscribe before spawning so nothing the new reader sends is missed.
        let rx = self.tx.subscribe();
        let mut state = self.lock();
        state.listeners += 1;
        let running = state.reader.as_ref().is_some_and(|r| !r.is_finished());
        if !running {
            tracing::debug!("starting terminal reader");
            let task = tokio::spawn((self.source)(self.tx.clone()));
            state.reader = Some(task.abort_handle());
        }
        Listener { hub: self, rx }
    }

    /// Inject an event as if it came from the terminal.
    pub fn publish(&self, event: TerminalEvent) {
        let _ = self.tx.send(event);
    }

    /// Whether the reader task is currently running.
    pub fn is_reading(&self) -> bool {
        self.lock().reader.as_ref().is_some_and(|r| !r.is_finished())
    }

    fn release(&self) {
        let mut state = self.lock();
        state.listeners = state.listeners.saturating_sub(1);
        if state.listeners == 0 {
            if let Some(reader) = state.reader.take() {
                tracing::debug!("stopping terminal reader");
                reader.abort();
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HubState> {
        // The state is two plain fields, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// A live registration with an [`EventHub`]. Dropping it unregisters.
pub struct Listener {
    hub: &'static EventHub,
    rx: broadcast::Receiver<TerminalEvent>,
}

impl Listener {
    /// Wait for the next event. `Err(Closed)` only if the hub is gone.
    pub async fn recv(&mut self) -> Result<TerminalEvent, RecvError> {
        self.rx.recv().await
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.hub.release();
    }
}

async fn read_terminal(tx: broadcast::Sender<TerminalEvent>) {
    let mut stream = EventStream::new();
    while let Some(result) = stream.next().await {
        match result {
            // No receivers is fine; nobody is listening right now.
            Ok(event) => {
                let _ = tx.send(TerminalEvent::from(event));
            }
            Err(err) => tracing::warn!(%err, "terminal event read failed"),
        }
    }
    tracing::debug!("terminal event stream ended");
}

/// Marker type for [`terminal_events`] identities.
pub struct TerminalEvents;

/// Marker type for [`document_clicks`] identities.
pub struct DocumentClicks;

/// Create a terminal events subscription that maps each event through a
/// user-provided function.
///
/// The `map` closure returns `Some(Msg)` to forward the event or `None` to
/// discard it.
///
/// # Example
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::KeyPress(key)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    from_hub(
        EventHub::global(),
        SubscriptionId::of::<TerminalEvents>(),
        Arc::new(map),
    )
}

/// Subscribe to every primary-button press on screen.
///
/// `owner` distinguishes listeners so that several widgets can each hold
/// one; a widget drops its listener simply by no longer declaring it.
pub fn document_clicks<Msg: Send + 'static>(
    owner: u64,
    map: impl Fn(u16, u16) -> Msg + Send + Sync + 'static,
) -> Subscription<Msg> {
    from_hub(
        EventHub::global(),
        SubscriptionId::new::<DocumentClicks>(owner),
        Arc::new(move |event: TerminalEvent| event.click().map(|(col, row)| map(col, row))),
    )
}

/// Maps a terminal event to an optional message.
pub type EventMap<Msg> = Arc<dyn Fn(TerminalEvent) -> Option<Msg> + Send + Sync>;

/// Build a subscription that forwards `hub` events through `map`.
///
/// The listener is registered when the manager starts the subscription,
/// not when it is declared, because `subscriptions()` runs on every update
/// and most results are discarded by the diff. It is registered before the
/// task is spawned so no event published in between is missed, and it lives
/// inside the task so aborting the subscription releases it.
pub fn from_hub<Msg: Send + 'static>(
    hub: &'static EventHub,
    id: SubscriptionId,
    map: EventMap<Msg>,
) -> Subscription<Msg> {
    Subscription {
        id,
        spawn: Box::new(move |tx: mpsc::UnboundedSender<Msg>| -> AbortHandle {
            let mut listener = hub.listen();
            let handle = tokio::spawn(async move {
                loop {
                    match listener.recv().await {
                        Ok(event) => {
                            if let Some(msg) = map(event) {
                                if tx.send(msg).is_err() {
                                    break;
                                }
                            }
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "subscriber fell behind terminal input");
                        }
                        Err(RecvError::Closed) => break,
                    }
                }
            });
            handle.abort_handle()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscription::SubscriptionManager;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use std::time::Duration;

    fn idle_hub() -> &'static EventHub {
        Box::leak(Box::new(EventHub::with_source(|_| {
            futures::future::pending().boxed()
        })))
    }

    fn click(column: u16, row: u16) -> TerminalEvent {
        TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn clicks(hub: &'static EventHub, owner: u64) -> Subscription<(u16, u16)> {
        from_hub(
            hub,
            SubscriptionId::new::<DocumentClicks>(owner),
            Arc::new(|event: TerminalEvent| event.click()),
        )
    }

    #[test]
    fn click_listeners_are_keyed_by_owner() {
        let a: Subscription<()> = document_clicks(1, |_, _| ());
        let b: Subscription<()> = document_clicks(2, |_, _| ());
        let a2: Subscription<()> = document_clicks(1, |_, _| ());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a2.id());
        let keys: Subscription<()> = terminal_events(|_| None);
        assert_ne!(keys.id(), a.id());
    }

    #[tokio::test]
    async fn hub_fans_out_to_every_listener() {
        let hub = idle_hub();
        let mut first = hub.listen();
        let mut second = hub.listen();

        hub.publish(click(3, 2));
        assert_eq!(first.recv().await.ok(), Some(click(3, 2)));
        assert_eq!(second.recv().await.ok(), Some(click(3, 2)));
    }

    #[tokio::test]
    async fn reader_runs_only_while_listened_to() {
        let hub = idle_hub();
        assert!(!hub.is_reading());

        let first = hub.listen();
        let second = hub.listen();
        assert!(hub.is_reading());

        drop(first);
        assert!(hub.is_reading());
        drop(second);
        assert!(!hub.is_reading());

        let _again = hub.listen();
        assert!(hub.is_reading());
    }

    #[tokio::test]
    async fn stopping_the_last_subscription_stops_the_reader() {
        let hub = idle_hub();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut manager = SubscriptionManager::new(tx);

        manager.reconcile(vec![clicks(hub, 1), clicks(hub, 2)]);
        assert!(hub.is_reading());
        hub.publish(click(4, 5));
        assert_eq!(rx.recv().await, Some((4, 5)));

        manager.reconcile(vec![clicks(hub, 2)]);
        assert!(hub.is_reading());

        drop(manager);
        // Aborted tasks drop their listeners on the runtime's next turn.
        tokio::time::timeout(Duration::from_secs(1), async {
            while hub.is_reading() {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("reader still running after every subscription stopped");
    }
}
