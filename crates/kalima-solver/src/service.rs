use kanal::{AsyncReceiver, AsyncSender};

use kalima_dictionary::catalog::{DictionaryCatalog, DictionaryKey};
use kalima_dictionary::matcher;
use kalima_dictionary::signature::LetterBag;
use kalima_types::{FindWordsPayload, ResponseBody, Task, WorkerRequest, WorkerResponse};

use crate::error::SolveError;

/// Solver service main loop.
///
/// One request is fully processed before the next is taken, and exactly
/// one response is emitted per request id. A malformed request fails
/// that id only; the loop itself keeps running.
pub async fn solver_loop(
    mut catalog: DictionaryCatalog,
    request_rx: AsyncReceiver<WorkerRequest>,
    response_tx: AsyncSender<WorkerResponse>,
) -> anyhow::Result<()> {
    tracing::info!("solver service started");

    while let Ok(request) = request_rx.recv().await {
        let id = request.id;
        tracing::debug!(id, "request received");

        let body = match handle_request(&mut catalog, request.task).await {
            Ok(words) => {
                tracing::debug!(id, matches = words.len(), "request solved");
                ResponseBody::Result(words)
            }
            Err(err) => {
                tracing::debug!(id, %err, "request failed");
                ResponseBody::Error((&err).into())
            }
        };

        response_tx.send(WorkerResponse { id, body }).await?;
    }

    tracing::info!("solver service stopping, request channel closed");
    Ok(())
}

async fn handle_request(
    catalog: &mut DictionaryCatalog,
    task: Task,
) -> Result<Vec<String>, SolveError> {
    match task {
        Task::FindWordsFromLetters(payload) => find_words_from_letters(catalog, payload).await,
    }
}

async fn find_words_from_letters(
    catalog: &mut DictionaryCatalog,
    payload: FindWordsPayload,
) -> Result<Vec<String>, SolveError> {
    if payload.min_len < 0 {
        return Err(SolveError::InvalidRequest(format!(
            "minLen must be non-negative, got {}",
            payload.min_len
        )));
    }
    if payload.letters.is_empty() {
        return Err(SolveError::InvalidRequest("letters must not be empty".into()));
    }
    let min_len = payload.min_len as usize;

    let key = DictionaryKey::new(payload.lang, payload.category);
    let store = catalog.get_or_load(&key)?;

    // get_or_load succeeded, so the lexicon is registered
    let lexicon = catalog
        .lexicon(payload.lang)
        .ok_or(SolveError::ServiceUnavailable)?;

    // Fold through the word-level rule so incoming letters and the
    // dictionary share one normalization (NFC recomposition included)
    let mut bag = LetterBag::new();
    for entry in &payload.letters {
        if let Some(folded) = lexicon.fold_word(entry) {
            for c in folded.chars() {
                bag.add(c);
            }
        }
    }

    // The scan is CPU-bound; keep it off the async worker threads
    let words = tokio::task::spawn_blocking(move || matcher::find_words(&store, &bag, min_len))
        .await
        .map_err(|e| {
            tracing::error!("matcher task failed: {e}");
            SolveError::ServiceUnavailable
        })?;

    Ok(words)
}
