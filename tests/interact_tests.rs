// Host-side tests for the hotspot interaction state machine: activation,
// debounced deactivation, cancellation precedence, side-effect timing.

use pano_tour::constants::{MAX_RESOLUTION_FOV, MAX_ZOOMOUT_FOV};
use pano_tour::core::{
    Animator, Autorotate, Effect, HotspotSession, InteractionMode, RectilinearView,
    SideEffectTiming, ViewLimiter, ViewParams,
};

const URL: &str = "https://example.com/info";

fn setup(
    mode: InteractionMode,
    timing: SideEffectTiming,
    url: Option<&str>,
) -> (HotspotSession, Animator, RectilinearView, Autorotate) {
    let session = HotspotSession::new(1.0, 0.2, url.map(str::to_owned), mode, timing);
    let limiter = ViewLimiter::traditional(3600.0, MAX_RESOLUTION_FOV, MAX_ZOOMOUT_FOV);
    let view = RectilinearView::new(ViewParams::new(0.0, 0.0, 1.0), limiter, (1280.0, 720.0));
    let rotate = Autorotate::new(0.03, 0.0, std::f64::consts::FRAC_PI_2, true);
    (session, Animator::new(), view, rotate)
}

// One scheduler tick, the way the tour drives it: animator first, then the
// session reacts to whatever completed.
fn step(
    now: f64,
    s: &mut HotspotSession,
    a: &mut Animator,
    v: &mut RectilinearView,
    r: &mut Autorotate,
) -> Option<Effect> {
    let completed = a.tick(now, v);
    s.frame(now, completed, a, v, r)
}

#[test]
fn halfway_through_activation_matches_expected_state() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, None);
    s.hover_enter(0.0, &mut a, &v, &mut r);
    assert!(!r.is_running(), "rotation must be suspended on activation");

    step(500.0, &mut s, &mut a, &mut v, &mut r);
    let p = v.parameters();
    // targetFov = min(1.0 * 0.6, 0.35) = 0.35
    assert!((p.yaw - 0.5).abs() < 1e-9);
    assert!((p.pitch - 0.1).abs() < 1e-9);
    assert!((p.fov - (1.0 - (1.0 - 0.35) * 0.5)).abs() < 1e-9);
}

#[test]
fn round_trip_restores_saved_state_bit_for_bit() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, None);
    let initial = v.parameters();

    s.hover_enter(0.0, &mut a, &v, &mut r);
    assert_eq!(s.saved_view(), Some(initial));
    for t in [100.0, 400.0, 700.0, 1000.0] {
        step(t, &mut s, &mut a, &mut v, &mut r);
    }
    assert_eq!(v.parameters(), ViewParams::new(1.0, 0.2, 0.35));
    assert!(s.is_active());

    s.hover_leave(1100.0);
    step(1200.0, &mut s, &mut a, &mut v, &mut r); // inside debounce window
    assert!(s.saved_view().is_some());
    step(1400.0, &mut s, &mut a, &mut v, &mut r); // deadline passed, reverse starts
    step(1900.0, &mut s, &mut a, &mut v, &mut r);
    step(2400.0, &mut s, &mut a, &mut v, &mut r); // reverse completes

    assert_eq!(v.parameters(), initial);
    assert!(!s.is_active());
    assert!(s.saved_view().is_none());
    assert!(r.is_running(), "rotation resumes after restoration");
}

#[test]
fn rapid_enter_leave_enter_runs_one_forward_and_no_reverse() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, None);
    let initial = v.parameters();

    s.hover_enter(0.0, &mut a, &v, &mut r);
    step(100.0, &mut s, &mut a, &mut v, &mut r);
    s.hover_leave(150.0);
    s.hover_enter(300.0, &mut a, &v, &mut r); // within the 250ms window

    for t in [400.0, 600.0, 800.0, 1000.0] {
        step(t, &mut s, &mut a, &mut v, &mut r);
    }
    // Landing exactly at t=1000 on the original run's target proves the
    // first forward run survived the flicker (a restarted run would still
    // be mid-flight here).
    assert_eq!(v.parameters(), ViewParams::new(1.0, 0.2, 0.35));
    assert_eq!(s.saved_view(), Some(initial));

    // Long after: still active, never reversed, rotation never resumed.
    step(2000.0, &mut s, &mut a, &mut v, &mut r);
    assert_eq!(v.parameters(), ViewParams::new(1.0, 0.2, 0.35));
    assert!(s.is_active());
    assert!(!r.is_running());
}

#[test]
fn deactivation_deadline_waits_for_forward_run() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, None);
    let initial = v.parameters();

    s.hover_enter(0.0, &mut a, &v, &mut r);
    s.hover_leave(100.0); // deadline 350, forward still has 900ms to go

    // Every deadline check re-arms instead of interrupting the forward run.
    for t in [400.0, 600.0, 800.0] {
        step(t, &mut s, &mut a, &mut v, &mut r);
        let p = v.parameters();
        assert!(p.fov < 1.0 && p.fov > 0.35, "forward run interrupted at {t}");
    }

    // Forward completes; the pending deactivation may now start the reverse.
    step(1000.0, &mut s, &mut a, &mut v, &mut r);
    step(1100.0, &mut s, &mut a, &mut v, &mut r); // reverse starts here
    step(2100.0, &mut s, &mut a, &mut v, &mut r);
    assert_eq!(v.parameters(), initial);
    assert!(!s.is_active());
}

#[test]
fn reactivation_cancels_reverse_and_keeps_original_saved_state() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, None);
    let initial = v.parameters();

    s.hover_enter(0.0, &mut a, &v, &mut r);
    step(1000.0, &mut s, &mut a, &mut v, &mut r);
    s.hover_leave(1000.0);
    step(1300.0, &mut s, &mut a, &mut v, &mut r); // reverse run starts
    step(1800.0, &mut s, &mut a, &mut v, &mut r); // halfway back

    s.hover_enter(1850.0, &mut a, &v, &mut r);
    let at_reentry = v.parameters();
    assert_eq!(s.saved_view(), Some(initial), "saved state never overwritten");

    // The old reverse run would have kept widening the fov; after re-entry
    // only the new forward run may write, so the fov narrows again.
    step(1900.0, &mut s, &mut a, &mut v, &mut r);
    assert!(v.parameters().fov < at_reentry.fov);

    // Full forward, then a clean deactivation, still lands on the original.
    step(2850.0, &mut s, &mut a, &mut v, &mut r);
    assert_eq!(v.parameters().yaw, 1.0);
    s.hover_leave(2900.0);
    step(3200.0, &mut s, &mut a, &mut v, &mut r);
    step(4200.0, &mut s, &mut a, &mut v, &mut r);
    assert_eq!(v.parameters(), initial);
    assert!(r.is_running());
}

#[test]
fn click_without_resolvable_url_is_a_complete_noop() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Click, SideEffectTiming::OnArrival, None);
    let initial = v.parameters();

    assert_eq!(s.click(0.0, &mut a, &v, &mut r), None);
    assert!(a.idle(), "no animation may start");
    assert!(!s.is_active());
    assert!(r.is_running(), "rotation untouched");
    assert_eq!(v.parameters(), initial);
}

#[test]
fn click_on_arrival_opens_once_then_auto_returns() {
    let (mut s, mut a, mut v, mut r) =
        setup(InteractionMode::Click, SideEffectTiming::OnArrival, Some(URL));
    let initial = v.parameters();

    assert_eq!(s.click(0.0, &mut a, &v, &mut r), None);
    assert!(!r.is_running());

    let mut effects = Vec::new();
    for t in [500.0, 1000.0, 2000.0, 2500.0, 3000.0, 3500.0] {
        effects.extend(step(t, &mut s, &mut a, &mut v, &mut r));
    }
    assert_eq!(effects, vec![Effect::OpenUrl(URL.to_owned())]);

    // Hold expired at 2500, reverse completed at 3500.
    assert_eq!(v.parameters(), initial);
    assert!(!s.is_active());
    assert!(r.is_running());
}

#[test]
fn click_immediate_fires_before_any_motion() {
    let (mut s, mut a, mut v, mut r) =
        setup(InteractionMode::Click, SideEffectTiming::Immediate, Some(URL));
    let initial = v.parameters();

    assert_eq!(
        s.click(0.0, &mut a, &v, &mut r),
        Some(Effect::OpenUrl(URL.to_owned()))
    );
    assert_eq!(v.parameters(), initial, "no motion before the first tick");

    // The forward run still happens, without a second effect.
    assert_eq!(step(1000.0, &mut s, &mut a, &mut v, &mut r), None);
    assert_eq!(v.parameters(), ViewParams::new(1.0, 0.2, 0.35));
}

#[test]
fn triggers_from_the_other_mode_are_ignored() {
    let (mut s, mut a, v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, Some(URL));
    assert_eq!(s.click(0.0, &mut a, &v, &mut r), None);
    assert!(a.idle());

    let (mut s, mut a, v, mut r) = setup(InteractionMode::Click, SideEffectTiming::OnArrival, Some(URL));
    assert_eq!(s.hover_enter(0.0, &mut a, &v, &mut r), None);
    s.hover_leave(10.0);
    assert!(a.idle());
    assert!(!s.is_active());
}

#[test]
fn repeated_enter_while_active_starts_nothing_new() {
    let (mut s, mut a, mut v, mut r) = setup(InteractionMode::Hover, SideEffectTiming::OnArrival, None);
    s.hover_enter(0.0, &mut a, &v, &mut r);
    step(1000.0, &mut s, &mut a, &mut v, &mut r);
    assert!(a.idle());

    s.hover_enter(1100.0, &mut a, &v, &mut r);
    assert!(a.idle(), "re-entering an active hotspot is a no-op");
    assert_eq!(v.parameters(), ViewParams::new(1.0, 0.2, 0.35));
}

#[test]
fn stale_deactivation_never_interrupts_a_newer_interaction() {
    let limiter = ViewLimiter::traditional(3600.0, MAX_RESOLUTION_FOV, MAX_ZOOMOUT_FOV);
    let mut v = RectilinearView::new(ViewParams::new(0.0, 0.0, 1.0), limiter, (1280.0, 720.0));
    let mut a = Animator::new();
    let mut r = Autorotate::new(0.03, 0.0, std::f64::consts::FRAC_PI_2, true);
    let mut first =
        HotspotSession::new(1.0, 0.2, None, InteractionMode::Hover, SideEffectTiming::OnArrival);
    let mut second =
        HotspotSession::new(-1.0, -0.2, None, InteractionMode::Hover, SideEffectTiming::OnArrival);

    first.hover_enter(0.0, &mut a, &v, &mut r);
    first.hover_leave(100.0); // deadline 350
    // Moving to the other hotspot supersedes the first forward run.
    second.hover_enter(200.0, &mut a, &v, &mut r);

    // When the first session's deadline passes, its forward run is already
    // dead; it must abandon rather than start a reverse run that would in
    // turn supersede the newer activation.
    for t in [400.0, 500.0, 600.0] {
        let completed = a.tick(t, &mut v);
        first.frame(t, completed, &mut a, &v, &mut r);
        second.frame(t, completed, &mut a, &v, &mut r);
        assert!(
            v.parameters().yaw <= 0.0,
            "camera no longer moving toward the newer target at {t}"
        );
    }
    assert!(!first.is_active());

    let completed = a.tick(1200.0, &mut v);
    second.frame(1200.0, completed, &mut a, &v, &mut r);
    assert_eq!(v.parameters(), ViewParams::new(-1.0, -0.2, 0.35));
    assert!(second.is_active());
}

#[test]
fn arrival_effect_fires_even_while_leave_is_debounced() {
    let (mut s, mut a, mut v, mut r) =
        setup(InteractionMode::Hover, SideEffectTiming::OnArrival, Some(URL));
    s.hover_enter(0.0, &mut a, &v, &mut r);
    s.hover_leave(900.0); // deadline 1150, forward still in flight

    assert_eq!(
        step(1000.0, &mut s, &mut a, &mut v, &mut r),
        Some(Effect::OpenUrl(URL.to_owned()))
    );

    // Re-entering within the window resumes an already-arrived activation:
    // straight to active, no second effect.
    assert_eq!(s.hover_enter(1100.0, &mut a, &v, &mut r), None);
    assert_eq!(step(1200.0, &mut s, &mut a, &mut v, &mut r), None);
    assert!(s.is_active());
    assert!(a.idle());
}

#[test]
fn hover_with_link_opens_on_arrival_exactly_once() {
    let (mut s, mut a, mut v, mut r) =
        setup(InteractionMode::Hover, SideEffectTiming::OnArrival, Some(URL));
    s.hover_enter(0.0, &mut a, &v, &mut r);

    assert_eq!(step(500.0, &mut s, &mut a, &mut v, &mut r), None);
    assert_eq!(
        step(1000.0, &mut s, &mut a, &mut v, &mut r),
        Some(Effect::OpenUrl(URL.to_owned()))
    );
    assert_eq!(step(1100.0, &mut s, &mut a, &mut v, &mut r), None);
}
