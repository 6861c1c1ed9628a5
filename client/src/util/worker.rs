//! Optional off-thread computation through a dedicated web worker.
//!
//! DESIGN
//! ======
//! Requests and responses are typed and travel as JSON strings. Capability is
//! detected up front: without `Worker` support (or outside the browser) the
//! same request runs inline on the UI thread, so callers never branch on
//! availability themselves. Each submission gets its own worker, which is
//! terminated once it settles: a reply is delivered as is, while an error
//! event or a failed post falls back to the inline computation. Exactly one
//! response reaches the caller either way.

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Script served from the site root.
pub const WORKER_SCRIPT_URL: &str = "/workers/heavy_computation.js";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputeRequest {
    pub payload: serde_json::Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComputeResponse {
    pub payload: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("encode compute request: {0}")]
    Encode(serde_json::Error),
    #[error("decode compute response: {0}")]
    Decode(serde_json::Error),
    #[error("worker reply was not a string")]
    NonTextReply,
}

/// Whether background execution is possible in this environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerCapability {
    Available,
    Unavailable,
}

/// Run the computation on the current thread.
#[must_use]
pub fn compute_inline(request: &ComputeRequest) -> ComputeResponse {
    ComputeResponse { payload: request.payload.clone() }
}

/// Wire encoding for a request.
///
/// # Errors
///
/// Returns [`ComputeError::Encode`] if the payload cannot be serialized.
pub fn encode_request(request: &ComputeRequest) -> Result<String, ComputeError> {
    serde_json::to_string(request).map_err(ComputeError::Encode)
}

/// Parse a worker reply.
///
/// # Errors
///
/// Returns [`ComputeError::Decode`] if the reply is not a response object.
pub fn decode_response(raw: &str) -> Result<ComputeResponse, ComputeError> {
    serde_json::from_str(raw).map_err(ComputeError::Decode)
}

/// Handle to the background computation channel.
#[derive(Clone, Debug)]
pub struct BackgroundCompute {
    script_url: String,
    capability: WorkerCapability,
}

impl BackgroundCompute {
    /// Probe for worker support using `script_url`.
    ///
    /// Starts and immediately stops one worker, so construct the channel where
    /// it is first needed rather than on every page load.
    pub fn detect(script_url: &str) -> Self {
        let capability = probe(script_url);
        log::debug!("background compute capability: {capability:?}");
        Self { script_url: script_url.to_owned(), capability }
    }

    /// A channel that always computes inline.
    pub fn unavailable() -> Self {
        Self { script_url: String::new(), capability: WorkerCapability::Unavailable }
    }

    #[must_use]
    pub fn capability(&self) -> WorkerCapability {
        self.capability
    }

    /// Submit `request`; `on_response` receives the single reply.
    pub fn submit(&self, request: ComputeRequest, on_response: impl FnOnce(ComputeResponse) + 'static) {
        match self.capability {
            WorkerCapability::Available => self.submit_to_worker(request, on_response),
            WorkerCapability::Unavailable => on_response(compute_inline(&request)),
        }
    }

    #[cfg(feature = "hydrate")]
    fn submit_to_worker(&self, request: ComputeRequest, on_response: impl FnOnce(ComputeResponse) + 'static) {
        use std::rc::Rc;

        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let encoded = match encode_request(&request) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("{e}; computing inline");
                on_response(compute_inline(&request));
                return;
            }
        };
        let worker = match web_sys::Worker::new(&self.script_url) {
            Ok(worker) => worker,
            Err(_) => {
                log::warn!("worker {} failed to start; computing inline", self.script_url);
                on_response(compute_inline(&request));
                return;
            }
        };

        let reply = Rc::new(ReplyOnce::new(on_response));
        let handlers: Rc<RefCell<Option<WorkerHandlers>>> = Rc::default();

        let on_message = {
            let (reply, handlers, worker, request) =
                (Rc::clone(&reply), Rc::clone(&handlers), worker.clone(), request.clone());
            Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |event: web_sys::MessageEvent| {
                release(&worker, &handlers);
                reply.deliver(resolve_reply(event.data().as_string(), &request));
            })
        };
        // Load failures (404, syntax errors) and uncaught throws inside the
        // worker surface here rather than from `Worker::new`.
        let on_error = {
            let (reply, handlers, worker, request) =
                (Rc::clone(&reply), Rc::clone(&handlers), worker.clone(), request.clone());
            let script_url = self.script_url.clone();
            Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(move |event: web_sys::ErrorEvent| {
                event.prevent_default();
                log::warn!("worker {script_url} failed: {}; computing inline", event.message());
                release(&worker, &handlers);
                reply.deliver(compute_inline(&request));
            })
        };
        worker.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        worker.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        *handlers.borrow_mut() = Some(WorkerHandlers { _on_message: on_message, _on_error: on_error });

        if worker.post_message(&JsValue::from_str(&encoded)).is_err() {
            log::warn!("worker rejected message; computing inline");
            release(&worker, &handlers);
            reply.deliver(compute_inline(&request));
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn submit_to_worker(&self, request: ComputeRequest, on_response: impl FnOnce(ComputeResponse) + 'static) {
        on_response(compute_inline(&request));
    }
}

/// Hands a response to the caller at most once.
///
/// A worker submission can settle through its reply, its error event, or a
/// failed post; whichever runs first wins and the rest are dropped.
pub struct ReplyOnce<F> {
    callback: RefCell<Option<F>>,
}

impl<F: FnOnce(ComputeResponse)> ReplyOnce<F> {
    pub fn new(callback: F) -> Self {
        Self { callback: RefCell::new(Some(callback)) }
    }

    /// Deliver `response` unless a response was already delivered.
    pub fn deliver(&self, response: ComputeResponse) -> bool {
        let Some(callback) = self.callback.borrow_mut().take() else {
            return false;
        };
        callback(response);
        true
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.callback.borrow().is_none()
    }
}

/// Turn a raw worker reply into a response, computing inline when the reply
/// is missing or unreadable.
pub fn resolve_reply(raw: Option<String>, request: &ComputeRequest) -> ComputeResponse {
    raw.ok_or(ComputeError::NonTextReply)
        .and_then(|raw| decode_response(&raw))
        .unwrap_or_else(|e| {
            log::warn!("{e}; computing inline");
            compute_inline(request)
        })
}

#[cfg(feature = "hydrate")]
struct WorkerHandlers {
    _on_message: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>,
    _on_error: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::ErrorEvent)>,
}

/// Stop the worker and free both handlers.
///
/// Called from inside one of those handlers; wasm-bindgen defers freeing a
/// closure until its running invocation returns.
#[cfg(feature = "hydrate")]
fn release(worker: &web_sys::Worker, handlers: &RefCell<Option<WorkerHandlers>>) {
    worker.terminate();
    worker.set_onmessage(None);
    worker.set_onerror(None);
    drop(handlers.borrow_mut().take());
}

#[cfg(feature = "hydrate")]
fn probe(script_url: &str) -> WorkerCapability {
    match web_sys::Worker::new(script_url) {
        Ok(worker) => {
            worker.terminate();
            WorkerCapability::Available
        }
        Err(_) => WorkerCapability::Unavailable,
    }
}

#[cfg(not(feature = "hydrate"))]
fn probe(script_url: &str) -> WorkerCapability {
    let _ = script_url;
    WorkerCapability::Unavailable
}
