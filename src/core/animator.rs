//! Time-based view tweening.
//!
//! One `Animator` owns at most one in-flight run. Starting a new run
//! supersedes the current one, so a stale run can never write to the shared
//! view after a newer run has begun. Completion is reported exactly once,
//! after the exact target parameters have been applied.

use super::easing::Easing;
use super::view::{RectilinearView, ViewParams};

/// Identifies one interpolation run; doubles as its cancellation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunId(u64);

struct Run {
    id: RunId,
    from: ViewParams,
    to: ViewParams,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
    on_complete: Option<Box<dyn FnOnce()>>,
}

#[derive(Default)]
pub struct Animator {
    next_id: u64,
    current: Option<Run>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run from `from` to `to` over `duration_ms`, superseding any
    /// run already in flight.
    ///
    /// A zero (or negative) duration still completes on the next `tick`,
    /// never synchronously here, so chained callers observe a consistent
    /// ordering.
    pub fn start(
        &mut self,
        from: ViewParams,
        to: ViewParams,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
        on_complete: Option<Box<dyn FnOnce()>>,
    ) -> RunId {
        if let Some(old) = self.current.take() {
            log::debug!("[animator] run {:?} superseded", old.id);
        }
        self.next_id += 1;
        let id = RunId(self.next_id);
        self.current = Some(Run {
            id,
            from,
            to,
            start_ms: now_ms,
            duration_ms,
            easing,
            on_complete,
        });
        id
    }

    /// Drop the run identified by `id` without firing its callback.
    /// Cancelling a run that already finished is a no-op.
    pub fn cancel(&mut self, id: RunId) -> bool {
        match &self.current {
            Some(run) if run.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Drop whatever is in flight without firing its callback.
    pub fn stop(&mut self) {
        self.current = None;
    }

    pub fn is_running(&self, id: RunId) -> bool {
        matches!(&self.current, Some(run) if run.id == id)
    }

    pub fn idle(&self) -> bool {
        self.current.is_none()
    }

    /// Advance the current run to `now_ms`, writing the interpolated
    /// parameters to `view`. Returns the id of a run that finished on this
    /// tick, after the exact target value has been applied and the
    /// completion callback (if any) has fired.
    pub fn tick(&mut self, now_ms: f64, view: &mut RectilinearView) -> Option<RunId> {
        let run = self.current.as_ref()?;
        let t = if run.duration_ms > 0.0 {
            ((now_ms - run.start_ms) / run.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if t < 1.0 {
            let k = (run.easing)(t);
            view.set_parameters(run.from.lerp(run.to, k));
            return None;
        }
        // Final tick: apply the literal target, avoiding accumulated
        // floating-point drift, then report completion exactly once.
        let mut run = self.current.take()?;
        view.set_parameters(run.to);
        if let Some(cb) = run.on_complete.take() {
            cb();
        }
        log::debug!("[animator] run {:?} complete", run.id);
        Some(run.id)
    }
}
