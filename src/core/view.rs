//! Rectilinear view parameters, limits, and screen/sphere mapping.
//!
//! These types hold the authoritative camera orientation for a scene and
//! avoid referencing platform-specific APIs, so both the wasm glue and the
//! host-side tests can drive them. Angles are radians; `fov` is the
//! vertical field of view. Yaw is positive looking right, pitch is positive
//! looking down (the convention the tour data uses).

use glam::DVec3;
use std::f64::consts::{FRAC_PI_2, PI};

/// Camera orientation and zoom for a rectilinear projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewParams {
    pub yaw: f64,
    pub pitch: f64,
    pub fov: f64,
}

impl ViewParams {
    pub fn new(yaw: f64, pitch: f64, fov: f64) -> Self {
        Self { yaw, pitch, fov }
    }

    /// Interpolate each parameter independently by eased fraction `k`.
    #[inline]
    pub fn lerp(self, to: ViewParams, k: f64) -> ViewParams {
        ViewParams {
            yaw: self.yaw + (to.yaw - self.yaw) * k,
            pitch: self.pitch + (to.pitch - self.pitch) * k,
            fov: self.fov + (to.fov - self.fov) * k,
        }
    }
}

/// Unit direction on the panorama sphere for a yaw/pitch pair.
#[inline]
pub fn direction(yaw: f64, pitch: f64) -> DVec3 {
    DVec3::new(
        pitch.cos() * yaw.sin(),
        -pitch.sin(),
        -pitch.cos() * yaw.cos(),
    )
}

// Identity for in-range input: re-applying the limiter must not perturb a
// value it already produced, or saved view state would not restore
// bit-for-bit.
#[inline]
fn wrap_angle(a: f64) -> f64 {
    if (-PI..PI).contains(&a) {
        return a;
    }
    (a + PI).rem_euclid(2.0 * PI) - PI
}

/// Clamp rules applied after every parameter write.
///
/// `traditional` is the usual cube-map limiter: fov is kept between a
/// resolution-derived minimum (don't magnify past source pixels) and a
/// zoom-out maximum, pitch stays within ±π/2, and yaw wraps into [-π, π).
/// Applying the limiter twice yields the same value, which the interaction
/// round-trip guarantee relies on.
#[derive(Clone, Copy, Debug)]
pub struct ViewLimiter {
    face_size: Option<f64>,
    max_resolution_fov: f64,
    max_zoomout_fov: f64,
}

impl ViewLimiter {
    pub fn traditional(face_size: f64, max_resolution_fov: f64, max_zoomout_fov: f64) -> Self {
        Self {
            face_size: Some(face_size),
            max_resolution_fov,
            max_zoomout_fov,
        }
    }

    /// No resolution bound; fov is only kept inside (0, π).
    pub fn unlimited() -> Self {
        Self {
            face_size: None,
            max_resolution_fov: 0.0,
            max_zoomout_fov: PI - 1e-9,
        }
    }

    fn min_fov(&self, stage_height: f64) -> f64 {
        match self.face_size {
            // One cube face spans π/2 of arc; matching screen pixels to
            // source pixels gives the tightest useful fov.
            Some(fs) if fs > 0.0 => (stage_height * FRAC_PI_2 / fs).min(self.max_resolution_fov),
            _ => 1e-9,
        }
    }

    pub fn apply(&self, p: ViewParams, stage_height: f64) -> ViewParams {
        ViewParams {
            yaw: wrap_angle(p.yaw),
            pitch: p.pitch.clamp(-FRAC_PI_2, FRAC_PI_2),
            fov: p.fov.clamp(self.min_fov(stage_height), self.max_zoomout_fov),
        }
    }
}

/// Authoritative view state for one scene plus the projection math used to
/// map between screen pixels and sphere coordinates.
#[derive(Clone, Debug)]
pub struct RectilinearView {
    params: ViewParams,
    limiter: ViewLimiter,
    stage_width: f64,
    stage_height: f64,
}

impl RectilinearView {
    pub fn new(initial: ViewParams, limiter: ViewLimiter, stage: (f64, f64)) -> Self {
        let mut v = Self {
            params: initial,
            limiter,
            stage_width: stage.0,
            stage_height: stage.1,
        };
        v.params = v.limiter.apply(initial, v.stage_height);
        v
    }

    #[inline]
    pub fn parameters(&self) -> ViewParams {
        self.params
    }

    pub fn set_parameters(&mut self, p: ViewParams) {
        self.params = self.limiter.apply(p, self.stage_height);
    }

    pub fn set_stage_size(&mut self, width: f64, height: f64) {
        self.stage_width = width;
        self.stage_height = height;
        self.params = self.limiter.apply(self.params, self.stage_height);
    }

    pub fn stage_size(&self) -> (f64, f64) {
        (self.stage_width, self.stage_height)
    }

    // Camera basis for the current orientation. The right vector depends on
    // yaw only, so it stays well-defined at pitch = ±π/2.
    fn basis(&self) -> (DVec3, DVec3, DVec3) {
        let f = direction(self.params.yaw, self.params.pitch);
        let r = DVec3::new(self.params.yaw.cos(), 0.0, self.params.yaw.sin());
        let u = r.cross(f);
        (f, r, u)
    }

    /// Map a pixel on the stage to the yaw/pitch it looks at.
    ///
    /// Returns `None` for a degenerate stage or non-finite input; every
    /// on-stage pixel of a rectilinear view lies on the sphere.
    pub fn screen_to_coordinates(&self, x_px: f64, y_px: f64) -> Option<(f64, f64)> {
        if self.stage_width <= 0.0 || self.stage_height <= 0.0 {
            return None;
        }
        if !x_px.is_finite() || !y_px.is_finite() {
            return None;
        }
        let ndc_x = 2.0 * x_px / self.stage_width - 1.0;
        let ndc_y = 1.0 - 2.0 * y_px / self.stage_height;
        let tan_v = (self.params.fov * 0.5).tan();
        let aspect = self.stage_width / self.stage_height;

        let (f, r, u) = self.basis();
        let dir = (r * (ndc_x * tan_v * aspect) + u * (ndc_y * tan_v) + f).normalize();

        let yaw = dir.x.atan2(-dir.z);
        let pitch = (-dir.y).asin();
        if yaw.is_finite() && pitch.is_finite() {
            Some((yaw, pitch))
        } else {
            None
        }
    }

    /// Project a sphere coordinate to stage pixels.
    ///
    /// Returns `None` when the direction is behind the camera plane (the
    /// caller hides the associated hotspot element).
    pub fn coordinates_to_screen(&self, yaw: f64, pitch: f64) -> Option<(f64, f64)> {
        if self.stage_width <= 0.0 || self.stage_height <= 0.0 {
            return None;
        }
        let d = direction(yaw, pitch);
        let (f, r, u) = self.basis();
        let z_fwd = d.dot(f);
        if z_fwd <= 1e-9 {
            return None;
        }
        let tan_v = (self.params.fov * 0.5).tan();
        let aspect = self.stage_width / self.stage_height;
        let ndc_x = d.dot(r) / (z_fwd * tan_v * aspect);
        let ndc_y = d.dot(u) / (z_fwd * tan_v);
        let x_px = (ndc_x + 1.0) * 0.5 * self.stage_width;
        let y_px = (1.0 - ndc_y) * 0.5 * self.stage_height;
        Some((x_px, y_px))
    }
}
