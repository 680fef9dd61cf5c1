use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Bounded pool of fire-and-forget tasks sharing one cancellation token.
///
/// Clones share the same permits and token. Must be used from inside a tokio
/// runtime.
#[derive(Clone)]
pub struct TaskPool {
    semaphore: Arc<Semaphore>,
    cancel_token: CancellationToken,
}

impl TaskPool {
    pub fn new(n_tasks: usize) -> TaskPool {
        TaskPool {
            semaphore: Arc::new(Semaphore::new(n_tasks)),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn execute<F, T>(&self, func: F)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send,
    {
        let semaphore = self.semaphore.clone();
        let token = self.cancel_token.clone();
        tokio::spawn(async move {
            let main = async {
                let Ok(_permit) = semaphore.acquire().await else {
                    return;
                };
                func.await;
            };

            tokio::select! {
                () = main => {},
                () = token.cancelled() => {}
            }
        });
    }

    /// Run `func` once `delay` has elapsed. Cancelling the pool before then
    /// drops it unrun.
    pub fn execute_after<F, T>(&self, delay: Duration, func: F)
    where
        F: Future<Output = T> + Send + 'static,
        T: Send,
    {
        self.execute(async move {
            tokio::time::sleep(delay).await;
            func.await
        });
    }

    /// Cancel running and queued tasks. The pool stays usable only for tasks
    /// that never start: new submissions are cancelled immediately.
    pub fn cancel_all(&self) {
        self.cancel_token.cancel();
    }

    /// Refuse further permits.
    pub fn close(&self) {
        self.semaphore.close();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
