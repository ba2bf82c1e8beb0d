//! Background path computation with a last-request-wins policy.
//!
//! A presentation layer that must not block its interaction thread hands
//! parameter sets to a [`Planner`]. Every submission supersedes the previous
//! one: the older search is cancelled, and should it still deliver a result,
//! that result is dropped rather than accepted.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use arcpath_core::{Context, ParamError, Params};

use crate::compute::{Algorithm, ComputeError, PathResult, compute_path_in};

/// A finished request as sent back by its worker thread.
struct Delivery {
    generation: u64,
    params: Params,
    result: Result<PathResult, ComputeError>,
}

/// An accepted result together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Planned {
    pub generation: u64,
    pub params: Params,
    pub result: Result<PathResult, ComputeError>,
}

/// Runs each request on its own thread and only ever accepts the result of
/// the most recent one.
pub struct Planner {
    algorithm: Algorithm,
    latest: Arc<AtomicU64>,
    in_flight: Option<Context>,
    pending: bool,
    tx: Sender<Delivery>,
    rx: Receiver<Delivery>,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Algorithm::default())
    }
}

impl Planner {
    /// Create an idle planner using `algorithm` for every request.
    pub fn new(algorithm: Algorithm) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            algorithm,
            latest: Arc::new(AtomicU64::new(0)),
            in_flight: None,
            pending: false,
            tx,
            rx,
        }
    }

    /// Current generation counter (0 if nothing was ever submitted).
    ///
    /// Bumped by every accepted submission and by [`cancel`](Self::cancel),
    /// so only a delivery carrying this exact value is accepted.
    pub fn latest(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }

    /// Whether a submitted request has not been accepted yet.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Start computing `params` in the background, superseding any earlier
    /// request. Returns the new request's generation.
    ///
    /// Invalid parameters are rejected here, synchronously, and leave the
    /// in-flight request untouched.
    pub fn submit(&mut self, params: Params) -> Result<u64, ParamError> {
        params.validate()?;

        if let Some(prev) = self.in_flight.take() {
            prev.cancel();
        }
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        let ctx = Context::new();
        self.in_flight = Some(ctx.clone());
        self.pending = true;

        let algorithm = self.algorithm;
        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();
        log::debug!("planner: request {generation} for {params}");

        thread::spawn(move || {
            let result = match compute_path_in(params, algorithm, &ctx) {
                Ok(Some(r)) => Ok(r),
                Ok(None) => return,
                Err(e) => Err(e),
            };
            if latest.load(Ordering::Acquire) != generation {
                log::debug!("planner: request {generation} superseded before delivery");
                return;
            }
            // The planner may have been dropped; nothing left to notify.
            let _ = tx.send(Delivery {
                generation,
                params,
                result,
            });
        });

        Ok(generation)
    }

    /// Cancel the in-flight request, if any, without submitting a new one.
    pub fn cancel(&mut self) {
        if let Some(ctx) = self.in_flight.take() {
            ctx.cancel();
        }
        // Bump so that a delivery already in the channel is discarded.
        self.latest.fetch_add(1, Ordering::AcqRel);
        self.pending = false;
    }

    /// Non-blocking: return the result of the latest request if it has
    /// arrived. Results of superseded requests are discarded.
    pub fn poll(&mut self) -> Option<Planned> {
        while let Ok(d) = self.rx.try_recv() {
            if let Some(planned) = self.accept(d) {
                return Some(planned);
            }
        }
        None
    }

    /// Block until the latest request's result arrives. Returns `None` if
    /// nothing is pending.
    pub fn wait(&mut self) -> Option<Planned> {
        while self.pending {
            let d = self.rx.recv().ok()?;
            if let Some(planned) = self.accept(d) {
                return Some(planned);
            }
        }
        None
    }

    fn accept(&mut self, d: Delivery) -> Option<Planned> {
        if d.generation != self.latest() {
            log::debug!(
                "planner: dropping stale result {} (latest {})",
                d.generation,
                self.latest()
            );
            return None;
        }
        self.pending = false;
        self.in_flight = None;
        Some(Planned {
            generation: d.generation,
            params: d.params,
            result: d.result,
        })
    }
}

impl Drop for Planner {
    fn drop(&mut self) {
        if let Some(ctx) = self.in_flight.take() {
            ctx.cancel();
        }
    }
}
