//! Static tour description.
//!
//! Mirrors the externally produced scene-graph data: per-scene cube-map
//! level pyramid, initial view parameters, hotspot lists, and global
//! settings. The demo tour matches the bundled tile set.

use crate::core::hotspot::{InfoHotspot, LinkHotspot};
use crate::core::view::ViewParams;

#[derive(Clone, Copy, Debug)]
pub struct Level {
    pub tile_size: u32,
    pub size: u32,
    pub fallback_only: bool,
}

#[derive(Clone, Debug)]
pub struct SceneData {
    pub id: String,
    pub name: String,
    pub levels: Vec<Level>,
    /// Source cube face size in pixels; bounds how far the view may zoom in.
    pub face_size: f64,
    pub initial_view: ViewParams,
    pub link_hotspots: Vec<LinkHotspot>,
    pub info_hotspots: Vec<InfoHotspot>,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub mouse_view_mode: String,
    pub autorotate_enabled: bool,
    pub fullscreen_button: bool,
    pub view_control_buttons: bool,
}

#[derive(Clone, Debug)]
pub struct TourData {
    pub name: String,
    pub scenes: Vec<SceneData>,
    pub settings: Settings,
}

/// Cube-map tile URL for a scene level/face/column/row.
pub fn tile_url(scene_id: &str, z: u32, face: char, x: u32, y: u32) -> String {
    format!("tiles/{scene_id}/{z}/{face}/{y}/{x}.jpg")
}

pub fn preview_url(scene_id: &str) -> String {
    format!("tiles/{scene_id}/preview.jpg")
}

/// The bundled single-scene demo tour.
pub fn demo_tour() -> TourData {
    TourData {
        name: "Project Title".to_owned(),
        scenes: vec![SceneData {
            id: "0-oomachi".to_owned(),
            name: "oomachi".to_owned(),
            levels: vec![
                Level {
                    tile_size: 256,
                    size: 256,
                    fallback_only: true,
                },
                Level {
                    tile_size: 512,
                    size: 512,
                    fallback_only: false,
                },
                Level {
                    tile_size: 512,
                    size: 1024,
                    fallback_only: false,
                },
                Level {
                    tile_size: 512,
                    size: 2048,
                    fallback_only: false,
                },
                Level {
                    tile_size: 512,
                    size: 4096,
                    fallback_only: false,
                },
            ],
            face_size: 3600.0,
            initial_view: ViewParams::new(-0.5539057890640535, 0.11719741075284773, 0.3820346386960207),
            link_hotspots: Vec::new(),
            info_hotspots: vec![InfoHotspot {
                yaw: 1.3480750122223704,
                pitch: 0.27637355564418264,
                title: "メイプル".to_owned(),
                text: "<a href='https://tadappi.github.io/Sphere-Viewer-TEST/maple.jpg' \
                       target='_blank'>メイプル写真</a>"
                    .to_owned(),
            }],
        }],
        settings: Settings {
            mouse_view_mode: "drag".to_owned(),
            autorotate_enabled: true,
            fullscreen_button: false,
            view_control_buttons: false,
        },
    }
}
