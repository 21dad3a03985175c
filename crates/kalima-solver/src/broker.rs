use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use kalima_config::solver::SolverConfig;
use kalima_dictionary::catalog::DictionaryCatalog;
use kalima_types::{
    FindWordsPayload, Language, ResponseBody, Task, WorkerRequest, WorkerResponse,
};

use crate::error::SolveError;
use crate::service::solver_loop;

pub(crate) type Responder = oneshot::Sender<Result<Vec<String>, SolveError>>;
pub(crate) type PendingMap = Arc<Mutex<HashMap<u64, Responder>>>;

/// Client handle over the background solver service.
///
/// Turns the message channel into individually awaitable calls: each
/// call gets a fresh, monotonically increasing correlation id, and the
/// response router completes exactly the pending call carrying that id,
/// whatever order responses arrive in.
pub struct SolverClient {
    next_id: AtomicU64,
    pending: PendingMap,
    request_tx: AsyncSender<WorkerRequest>,
    cancel: CancellationToken,
}

impl SolverClient {
    /// Spawn the solver service and its response router, returning the
    /// caller-side handle. The service owns the catalog from here on.
    pub fn spawn(config: &SolverConfig, catalog: DictionaryCatalog) -> Self {
        let (request_tx, request_rx) = kanal::bounded_async(config.request_queue_cap);
        let (response_tx, response_rx) = kanal::bounded_async(config.response_queue_cap);

        let pending: PendingMap = Arc::new(Mutex::new(HashMap::new()));
        let cancel = CancellationToken::new();

        tokio::spawn(async move {
            if let Err(e) = solver_loop(catalog, request_rx, response_tx).await {
                tracing::error!("solver service exited: {e}");
            }
        });

        tokio::spawn(router_loop(
            pending.clone(),
            response_rx,
            cancel.child_token(),
        ));

        Self {
            next_id: AtomicU64::new(1),
            pending,
            request_tx,
            cancel,
        }
    }

    /// Send one task to the service and await its terminal response
    pub async fn call(&self, task: Task) -> Result<Vec<String>, SolveError> {
        if self.cancel.is_cancelled() {
            return Err(SolveError::ServiceUnavailable);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (responder, response) = oneshot::channel();
        self.pending
            .lock()
            .expect("pending map lock poisoned")
            .insert(id, responder);

        if self.request_tx.send(WorkerRequest { id, task }).await.is_err() {
            tracing::warn!(id, "request channel closed, rejecting call");
            self.pending
                .lock()
                .expect("pending map lock poisoned")
                .remove(&id);
            return Err(SolveError::ServiceUnavailable);
        }

        match response.await {
            Ok(result) => result,
            // Responder dropped without resolving: router died
            Err(_) => Err(SolveError::ServiceUnavailable),
        }
    }

    /// Typed convenience over `call` for the find-words task
    pub async fn find_words(
        &self,
        letters: Vec<String>,
        lang: Language,
        category: impl Into<String>,
        min_len: i64,
    ) -> Result<Vec<String>, SolveError> {
        self.call(Task::FindWordsFromLetters(FindWordsPayload {
            letters,
            lang,
            category: category.into(),
            min_len,
        }))
        .await
    }

    /// Tear down the service.
    ///
    /// Every still-pending call is rejected with `Cancelled`; later
    /// calls fail fast with `ServiceUnavailable`.
    pub fn shutdown(&self) {
        tracing::info!("solver client shutting down");
        self.cancel.cancel();
        self.request_tx.close();
    }
}

/// Routes inbound responses to their pending calls until cancelled or
/// the service side goes away, then rejects whatever is left.
pub(crate) async fn router_loop(
    pending: PendingMap,
    response_rx: AsyncReceiver<WorkerResponse>,
    cancel: CancellationToken,
) {
    let reason = loop {
        tokio::select! {
            _ = cancel.cancelled() => break SolveError::Cancelled,
            message = response_rx.recv() => match message {
                Ok(response) => route_response(&pending, response),
                // Service dropped its sender without a shutdown request
                Err(_) => break SolveError::ServiceUnavailable,
            },
        }
    };

    let mut map = pending.lock().expect("pending map lock poisoned");
    if !map.is_empty() {
        tracing::debug!(count = map.len(), %reason, "rejecting pending calls");
    }
    for (_, responder) in map.drain() {
        let _ = responder.send(Err(reason.clone()));
    }
}

pub(crate) fn route_response(pending: &PendingMap, response: WorkerResponse) {
    // Remove before resolving so nothing can observe a half-routed entry
    let responder = pending
        .lock()
        .expect("pending map lock poisoned")
        .remove(&response.id);

    let Some(responder) = responder else {
        // Caller already gave up, or a duplicate terminal message;
        // discard silently per protocol
        tracing::debug!(id = response.id, "response for unknown id discarded");
        return;
    };

    let result = match response.body {
        ResponseBody::Result(words) => Ok(words),
        ResponseBody::Error(desc) => Err(desc.into()),
    };

    // Send only fails when the caller stopped awaiting; that is fine
    let _ = responder.send(result);
}
