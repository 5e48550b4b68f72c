use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// Handle for a polling analysis subscription. Dropping the handle stops
/// the updates as well.
pub struct UpdateSubscription {
    id: Uuid,
    task: JoinHandle<()>,
}

impl UpdateSubscription {
    pub(crate) fn new(id: Uuid, task: JoinHandle<()>) -> Self {
        Self { id, task }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Stops the periodic updates. Calling this more than once is a no-op.
    pub fn unsubscribe(&self) {
        debug!("unsubscribing analysis updates {}", self.id);
        self.task.abort();
    }
}

impl Drop for UpdateSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
