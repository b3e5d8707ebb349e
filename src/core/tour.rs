//! Tour runtime: the scene list, the current scene pointer, and the shared
//! animator/auto-rotation pair that every hotspot session coordinates
//! through. This is the explicit process-wide state object the wasm glue
//! holds in an `Rc<RefCell<..>>`.

use fnv::FnvHashMap;
use smallvec::SmallVec;

use crate::constants::{
    AUTOROTATE_TARGET_FOV, AUTOROTATE_TARGET_PITCH, AUTOROTATE_YAW_SPEED, MAX_RESOLUTION_FOV,
    MAX_ZOOMOUT_FOV,
};
use crate::data::{SceneData, Settings, TourData};

use super::animator::Animator;
use super::autorotate::Autorotate;
use super::interact::{Effect, HotspotSession, InteractionMode, SideEffectTiming};
use super::view::{RectilinearView, ViewLimiter, ViewParams};

pub struct Scene {
    pub data: SceneData,
    pub view: RectilinearView,
    pub sessions: Vec<HotspotSession>,
}

pub struct Tour {
    pub name: String,
    pub settings: Settings,
    scenes: Vec<Scene>,
    by_id: FnvHashMap<String, usize>,
    current: usize,
    pub animator: Animator,
    pub rotate: Autorotate,
    last_frame_ms: Option<f64>,
}

impl Tour {
    /// Build the runtime from static tour data. `mode`/`timing` select the
    /// interaction variant for every info hotspot (touch devices use the
    /// click variant).
    pub fn from_data(
        data: TourData,
        mode: InteractionMode,
        timing: SideEffectTiming,
        stage: (f64, f64),
    ) -> Self {
        let rotate = Autorotate::new(
            AUTOROTATE_YAW_SPEED,
            AUTOROTATE_TARGET_PITCH,
            AUTOROTATE_TARGET_FOV,
            data.settings.autorotate_enabled,
        );
        let mut by_id = FnvHashMap::default();
        let scenes: Vec<Scene> = data
            .scenes
            .into_iter()
            .enumerate()
            .map(|(i, sd)| {
                by_id.insert(sd.id.clone(), i);
                let limiter =
                    ViewLimiter::traditional(sd.face_size, MAX_RESOLUTION_FOV, MAX_ZOOMOUT_FOV);
                let view = RectilinearView::new(sd.initial_view, limiter, stage);
                let sessions = sd
                    .info_hotspots
                    .iter()
                    .map(|h| HotspotSession::from_info(h, mode, timing))
                    .collect();
                Scene {
                    data: sd,
                    view,
                    sessions,
                }
            })
            .collect();
        Self {
            name: data.name,
            settings: data.settings,
            scenes,
            by_id,
            current: 0,
            animator: Animator::new(),
            rotate,
            last_frame_ms: None,
        }
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_scene(&self) -> &Scene {
        &self.scenes[self.current]
    }

    pub fn view_parameters(&self) -> ViewParams {
        self.scenes[self.current].view.parameters()
    }

    pub fn set_stage_size(&mut self, width: f64, height: f64) {
        for scene in &mut self.scenes {
            scene.view.set_stage_size(width, height);
        }
    }

    /// Switch to the scene with the given id. The view resets to the
    /// scene's initial parameters and auto-rotation restarts.
    pub fn switch_scene(&mut self, id: &str) -> bool {
        let Some(&idx) = self.by_id.get(id) else {
            log::warn!("[tour] unknown scene {:?}", id);
            return false;
        };
        self.animator.stop();
        for s in &mut self.scenes[self.current].sessions {
            s.reset();
        }
        self.current = idx;
        let scene = &mut self.scenes[idx];
        let initial = scene.data.initial_view;
        scene.view.set_parameters(initial);
        self.rotate.resume();
        log::info!("[tour] switched to scene {}", scene.data.name);
        true
    }

    /// Advance one scheduler tick: drive the animator, every hotspot
    /// session, and (only while nothing else owns the view) auto-rotation.
    /// Returns the side effects to perform.
    pub fn frame(&mut self, now_ms: f64) -> SmallVec<[Effect; 2]> {
        let dt_sec = match self.last_frame_ms {
            Some(prev) => ((now_ms - prev) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        let mut effects = SmallVec::new();
        let Scene { view, sessions, .. } = &mut self.scenes[self.current];

        let completed = self.animator.tick(now_ms, view);
        for s in sessions.iter_mut() {
            if let Some(e) = s.frame(now_ms, completed, &mut self.animator, view, &mut self.rotate)
            {
                effects.push(e);
            }
        }

        // Rotation only runs while nothing else owns the view, and never on
        // the same frame a tween finished, so a completed restoration is
        // observable before rotation picks the camera back up.
        let any_active = sessions.iter().any(|s| s.is_active());
        if completed.is_none() && self.animator.idle() && !any_active {
            self.rotate.tick(dt_sec, view);
        }
        effects
    }

    pub fn hover_enter(&mut self, hotspot: usize, now_ms: f64) -> Option<Effect> {
        let Scene { view, sessions, .. } = &mut self.scenes[self.current];
        sessions
            .get_mut(hotspot)?
            .hover_enter(now_ms, &mut self.animator, view, &mut self.rotate)
    }

    pub fn hover_leave(&mut self, hotspot: usize, now_ms: f64) {
        if let Some(s) = self.scenes[self.current].sessions.get_mut(hotspot) {
            s.hover_leave(now_ms);
        }
    }

    pub fn click(&mut self, hotspot: usize, now_ms: f64) -> Option<Effect> {
        let Scene { view, sessions, .. } = &mut self.scenes[self.current];
        sessions
            .get_mut(hotspot)?
            .click(now_ms, &mut self.animator, view, &mut self.rotate)
    }
}
