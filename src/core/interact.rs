//! Per-hotspot interaction state machine.
//!
//! A session owns the hover/click life cycle for one hotspot: it suspends
//! auto-rotation, tweens the camera toward the hotspot with a reduced fov,
//! optionally emits one side effect (open the hotspot's link), and tweens
//! back to the saved pre-activation state. Side effects are *returned* to
//! the caller as [`Effect`] values; the core never touches the browser.
//!
//! States: Idle → Activating → Active → Debouncing → Returning → Idle, with
//! the click variant inserting a fixed Holding dwell instead of waiting for
//! a leave event. The leave debounce absorbs hover flicker: re-entering
//! within the window cancels deactivation without ever clearing the saved
//! state or starting a reverse run.

use crate::constants::{
    CLICK_HOLD_MS, DEACTIVATE_RECHECK_MS, HOVER_LEAVE_DEBOUNCE_MS, ZOOM_FOV_CAP, ZOOM_FOV_SCALE,
    ZOOM_IN_DURATION_MS, ZOOM_OUT_DURATION_MS,
};

use super::animator::{Animator, RunId};
use super::autorotate::Autorotate;
use super::easing::ease_in_out_sine;
use super::hotspot::InfoHotspot;
use super::view::{RectilinearView, ViewParams};

/// How a hotspot is triggered. Touch devices get the click variant, pointer
/// devices the hover variant; exactly one is wired per hotspot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Hover,
    Click,
}

/// When the link-opening side effect fires relative to the forward tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideEffectTiming {
    /// At trigger time, before the camera starts moving.
    Immediate,
    /// When the forward tween completes.
    OnArrival,
}

/// Side effect requested by a session; performed by the embedding layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
}

#[derive(Clone, Copy, Debug)]
enum SessionState {
    Idle,
    Activating {
        run: RunId,
    },
    Active,
    /// Hover left; deactivation pending until the deadline passes. `forward`
    /// remembers an unfinished forward run so the deadline check can re-arm
    /// instead of interrupting it.
    Debouncing {
        deadline_ms: f64,
        forward: Option<RunId>,
    },
    /// Click variant: dwell at the target before the automatic return.
    Holding {
        deadline_ms: f64,
    },
    Returning {
        run: RunId,
    },
}

pub struct HotspotSession {
    target_yaw: f64,
    target_pitch: f64,
    url: Option<String>,
    mode: InteractionMode,
    timing: SideEffectTiming,
    state: SessionState,
    saved: Option<ViewParams>,
    effect_fired: bool,
}

/// Target fov for a zoomed-in hotspot: reduce the current fov, capped.
#[inline]
pub fn zoom_fov(current_fov: f64) -> f64 {
    (current_fov * ZOOM_FOV_SCALE).min(ZOOM_FOV_CAP)
}

impl HotspotSession {
    pub fn new(
        yaw: f64,
        pitch: f64,
        url: Option<String>,
        mode: InteractionMode,
        timing: SideEffectTiming,
    ) -> Self {
        Self {
            target_yaw: yaw,
            target_pitch: pitch,
            url,
            mode,
            timing,
            state: SessionState::Idle,
            saved: None,
            effect_fired: false,
        }
    }

    pub fn from_info(spot: &InfoHotspot, mode: InteractionMode, timing: SideEffectTiming) -> Self {
        Self::new(
            spot.yaw,
            spot.pitch,
            spot.link_url().map(str::to_owned),
            mode,
            timing,
        )
    }

    /// True while an interaction holds the camera (auto-rotation must not
    /// write view state then).
    pub fn is_active(&self) -> bool {
        !matches!(self.state, SessionState::Idle)
    }

    /// View parameters captured at activation, still pending restore.
    pub fn saved_view(&self) -> Option<ViewParams> {
        self.saved
    }

    /// Drop all interaction state without touching the view. Used when the
    /// tour switches scenes out from under the session.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.saved = None;
        self.effect_fired = false;
    }

    fn fire_effect(&mut self) -> Option<Effect> {
        if self.effect_fired {
            return None;
        }
        let url = self.url.as_ref()?;
        self.effect_fired = true;
        log::info!("[hotspot] open {}", url);
        Some(Effect::OpenUrl(url.clone()))
    }

    // Save the live view exactly once per activation, suspend rotation and
    // start the forward run. `saved` already being present means a previous
    // deactivation never finished; the original value is kept so the camera
    // still restores to its true pre-interaction state.
    fn begin(
        &mut self,
        now_ms: f64,
        animator: &mut Animator,
        view: &RectilinearView,
        rotate: &mut Autorotate,
    ) -> Option<Effect> {
        let current = view.parameters();
        if self.saved.is_none() {
            self.saved = Some(current);
        }
        rotate.suspend();
        let target = ViewParams {
            yaw: self.target_yaw,
            pitch: self.target_pitch,
            fov: zoom_fov(current.fov),
        };
        let run = animator.start(
            current,
            target,
            now_ms,
            ZOOM_IN_DURATION_MS,
            ease_in_out_sine,
            None,
        );
        self.state = SessionState::Activating { run };
        self.effect_fired = false;
        if self.timing == SideEffectTiming::Immediate {
            return self.fire_effect();
        }
        None
    }

    fn begin_return(&mut self, now_ms: f64, animator: &mut Animator, view: &RectilinearView) {
        let Some(saved) = self.saved else {
            // Nothing to restore; should not happen past Idle.
            self.state = SessionState::Idle;
            return;
        };
        // The camera may have been perturbed since activation, so the
        // reverse run starts from the live parameters, not a cached copy.
        // Its target is the literal saved value, which the animator applies
        // exactly on its final tick.
        let run = animator.start(
            view.parameters(),
            saved,
            now_ms,
            ZOOM_OUT_DURATION_MS,
            ease_in_out_sine,
            None,
        );
        self.state = SessionState::Returning { run };
    }

    /// Hover entered the hotspot element (Hover mode only).
    pub fn hover_enter(
        &mut self,
        now_ms: f64,
        animator: &mut Animator,
        view: &RectilinearView,
        rotate: &mut Autorotate,
    ) -> Option<Effect> {
        if self.mode != InteractionMode::Hover {
            return None;
        }
        match self.state {
            SessionState::Idle => self.begin(now_ms, animator, view, rotate),
            SessionState::Debouncing { forward, .. } => match forward {
                // Flicker absorbed: cancel the pending deactivation.
                Some(run) if animator.is_running(run) => {
                    self.state = SessionState::Activating { run };
                    None
                }
                // The forward run died while we debounced, so another
                // interaction owns the camera; this is a fresh activation.
                Some(_) => {
                    self.reset();
                    self.begin(now_ms, animator, view, rotate)
                }
                None => {
                    self.state = SessionState::Active;
                    None
                }
            },
            SessionState::Returning { run } => {
                // Re-activation supersedes the reverse run; the original
                // saved state is kept for the eventual restore.
                animator.cancel(run);
                self.begin(now_ms, animator, view, rotate)
            }
            SessionState::Activating { .. } | SessionState::Active | SessionState::Holding { .. } => {
                None
            }
        }
    }

    /// Hover left the hotspot element (Hover mode only). Starts or restarts
    /// the debounce window; the actual deactivation happens in [`frame`].
    pub fn hover_leave(&mut self, now_ms: f64) {
        if self.mode != InteractionMode::Hover {
            return;
        }
        match self.state {
            SessionState::Activating { run } => {
                self.state = SessionState::Debouncing {
                    deadline_ms: now_ms + HOVER_LEAVE_DEBOUNCE_MS,
                    forward: Some(run),
                };
            }
            SessionState::Active => {
                self.state = SessionState::Debouncing {
                    deadline_ms: now_ms + HOVER_LEAVE_DEBOUNCE_MS,
                    forward: None,
                };
            }
            SessionState::Debouncing { forward, .. } => {
                self.state = SessionState::Debouncing {
                    deadline_ms: now_ms + HOVER_LEAVE_DEBOUNCE_MS,
                    forward,
                };
            }
            _ => {}
        }
    }

    /// Click trigger (Click mode only). A hotspot whose content resolves no
    /// URL is a complete no-op: no animation, no effect, no state change.
    pub fn click(
        &mut self,
        now_ms: f64,
        animator: &mut Animator,
        view: &RectilinearView,
        rotate: &mut Autorotate,
    ) -> Option<Effect> {
        if self.mode != InteractionMode::Click {
            return None;
        }
        if self.url.is_none() {
            log::debug!("[hotspot] click ignored, no link target");
            return None;
        }
        match self.state {
            SessionState::Idle => self.begin(now_ms, animator, view, rotate),
            SessionState::Returning { run } => {
                animator.cancel(run);
                self.begin(now_ms, animator, view, rotate)
            }
            _ => None,
        }
    }

    /// Advance the session on a scheduler tick. `completed` is the run the
    /// shared animator finished on this same tick, if any.
    pub fn frame(
        &mut self,
        now_ms: f64,
        completed: Option<RunId>,
        animator: &mut Animator,
        view: &RectilinearView,
        rotate: &mut Autorotate,
    ) -> Option<Effect> {
        match self.state {
            SessionState::Activating { run } if completed == Some(run) => {
                let effect = if self.timing == SideEffectTiming::OnArrival {
                    self.fire_effect()
                } else {
                    None
                };
                self.state = match self.mode {
                    InteractionMode::Hover => SessionState::Active,
                    InteractionMode::Click => SessionState::Holding {
                        deadline_ms: now_ms + CLICK_HOLD_MS,
                    },
                };
                effect
            }
            SessionState::Activating { run } if !animator.is_running(run) => {
                // Another interaction took the camera; abandon without the
                // side effect. The superseding run owns the restore now.
                log::debug!("[hotspot] activation superseded, abandoning");
                self.reset();
                None
            }
            SessionState::Debouncing {
                deadline_ms,
                forward: Some(run),
            } if completed == Some(run) => {
                // The activation still arrived even though the pointer has
                // left; its effect fires here, never on a later re-enter.
                let effect = if self.timing == SideEffectTiming::OnArrival {
                    self.fire_effect()
                } else {
                    None
                };
                self.state = SessionState::Debouncing {
                    deadline_ms,
                    forward: None,
                };
                effect
            }
            SessionState::Debouncing {
                deadline_ms,
                forward,
            } if now_ms >= deadline_ms => {
                match forward {
                    Some(run) if animator.is_running(run) => {
                        // Forward tween still in flight; re-check shortly
                        // rather than interrupting it.
                        self.state = SessionState::Debouncing {
                            deadline_ms: now_ms + DEACTIVATE_RECHECK_MS,
                            forward,
                        };
                    }
                    Some(_) => {
                        // Neither running nor completed this tick means the
                        // forward run was superseded by another interaction;
                        // that one owns the camera and the restore now.
                        log::debug!("[hotspot] activation superseded, abandoning");
                        self.reset();
                    }
                    None => self.begin_return(now_ms, animator, view),
                }
                None
            }
            SessionState::Holding { deadline_ms } if now_ms >= deadline_ms => {
                self.begin_return(now_ms, animator, view);
                None
            }
            SessionState::Returning { run } if completed == Some(run) => {
                // Restore finished: the animator already applied the saved
                // parameters exactly.
                self.saved = None;
                self.effect_fired = false;
                rotate.resume();
                self.state = SessionState::Idle;
                None
            }
            SessionState::Returning { run } if !animator.is_running(run) => {
                // Reverse run superseded by another interaction; that one
                // owns the camera and the rotation resume now.
                self.reset();
                None
            }
            _ => None,
        }
    }
}
