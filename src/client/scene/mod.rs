//! Interaction and animation model for the avatar scene.
//!
//! Rendering and asset decoding happen elsewhere; this module owns what the
//! renderer reads each frame (camera, model spin, hotspot transforms, the
//! particle field) and reacts to pointer input.

pub mod camera;
pub mod hotspot;
pub mod math;

use std::collections::HashMap;
use std::fmt::Display;

use log::{error, info};
use rand::Rng;

use camera::{Camera, OrbitControls};
use hotspot::{
    pulse_scale, Geometry, GeometryId, Hotspot, HotspotId, HotspotSpec, CORE_RADIUS, GLOW_RADIUS, HOVER_SCALE,
    REST_SCALE,
};
use math::{Ray, Vec3};

pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -0.9, 0.0);
pub const MODEL_SPIN: f64 = 0.002;
pub const PARTICLE_SPIN: f64 = 0.0005;
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_SPREAD: f64 = 10.0;
pub const LABEL_OFFSET_PX: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    Pointer,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Label {
    pub text: String,
    pub left: f64,
    pub top: f64,
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn aspect(&self) -> f64 {
        if self.height <= 0.0 {
            return 1.0;
        }
        self.width / self.height
    }

    /// Pixel coordinates to normalized device coordinates.
    pub fn to_ndc(&self, px: f64, py: f64) -> (f64, f64) {
        ((px / self.width) * 2.0 - 1.0, -(py / self.height) * 2.0 + 1.0)
    }

    pub fn to_pixels(&self, ndc_x: f64, ndc_y: f64) -> (f64, f64) {
        ((ndc_x + 1.0) / 2.0 * self.width, (1.0 - ndc_y) / 2.0 * self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub url: String,
}

pub struct SceneController {
    pub camera: Camera,
    pub controls: OrbitControls,
    viewport: Viewport,
    status: ModelStatus,
    model_rotation: f64,
    hotspots: Vec<Hotspot>,
    geometries: Vec<Geometry>,
    owners: HashMap<GeometryId, HotspotId>,
    hovered: Option<HotspotId>,
    label: Label,
    cursor: Cursor,
    particles: Vec<Vec3>,
    particle_rotation: f64,
}

impl SceneController {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, &mut rand::thread_rng())
    }

    pub fn with_rng<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let half = PARTICLE_SPREAD / 2.0;
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();

        Self {
            camera: Camera::new(viewport.aspect()),
            controls: OrbitControls::default(),
            viewport,
            status: ModelStatus::Loading,
            model_rotation: 0.0,
            hotspots: Vec::new(),
            geometries: Vec::new(),
            owners: HashMap::new(),
            hovered: None,
            label: Label::default(),
            cursor: Cursor::Default,
            particles,
            particle_rotation: 0.0,
        }
    }

    pub fn status(&self) -> ModelStatus {
        self.status
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn hotspot(&self, id: HotspotId) -> Option<&Hotspot> {
        self.hotspots.get(id.0)
    }

    pub fn hovered(&self) -> Option<HotspotId> {
        self.hovered
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    pub fn particle_rotation(&self) -> f64 {
        self.particle_rotation
    }

    pub fn model_rotation(&self) -> f64 {
        self.model_rotation
    }

    /// Called once the avatar asset has been decoded.
    pub fn on_model_loaded(&mut self, specs: &[HotspotSpec]) {
        self.status = ModelStatus::Loaded;
        self.attach_hotspots(specs);
        info!("Model added to scene with {} hotspots", self.hotspots.len());
    }

    pub fn on_model_error(&mut self, err: &dyn Display) {
        error!("Model load error: {}", err);
        self.status = ModelStatus::Failed;
    }

    fn attach_hotspots(&mut self, specs: &[HotspotSpec]) {
        self.hotspots.clear();
        self.geometries.clear();
        self.owners.clear();
        for spec in specs {
            let id = HotspotId(self.hotspots.len());
            self.hotspots.push(Hotspot::new(id, spec));
            for radius in [CORE_RADIUS, GLOW_RADIUS] {
                let geometry = Geometry {
                    id: GeometryId(self.geometries.len()),
                    owner: id,
                    radius,
                };
                self.owners.insert(geometry.id, id);
                self.geometries.push(geometry);
            }
        }
    }

    /// Model-space point to world space.
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        local.rotate_y(self.model_rotation) + MODEL_OFFSET
    }

    pub fn world_position(&self, id: HotspotId) -> Option<Vec3> {
        self.hotspot(id).map(|h| self.to_world(h.position))
    }

    /// Advances the scene by one animation frame at `time_ms`.
    pub fn frame(&mut self, time_ms: f64) {
        self.particle_rotation += PARTICLE_SPIN;

        if self.status == ModelStatus::Loaded {
            self.model_rotation += MODEL_SPIN;
            let pulse = pulse_scale(time_ms);
            for hotspot in &mut self.hotspots {
                hotspot.advance();
                if Some(hotspot.id) != self.hovered {
                    hotspot.scale = pulse;
                }
            }
        }

        self.controls.update(&mut self.camera);
    }

    fn geometry_hits(&self, ray: &Ray) -> Vec<(f64, GeometryId)> {
        let mut hits: Vec<(f64, GeometryId)> = self
            .geometries
            .iter()
            .filter_map(|geometry| {
                let owner = self.hotspot(geometry.owner)?;
                let center = self.to_world(owner.position);
                ray.intersect_sphere(center, geometry.radius * owner.scale)
                    .map(|t| (t, geometry.id))
            })
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits
    }

    /// Every hotspot the ray passes through, nearest first.
    pub fn intersect(&self, ray: &Ray) -> Vec<HotspotId> {
        let mut owners = Vec::new();
        for (_, geometry) in self.geometry_hits(ray) {
            if let Some(&owner) = self.owners.get(&geometry) {
                if !owners.contains(&owner) {
                    owners.push(owner);
                }
            }
        }
        owners
    }

    pub fn pick(&self, ray: &Ray) -> Option<HotspotId> {
        self.geometry_hits(ray)
            .first()
            .and_then(|(_, geometry)| self.owners.get(geometry).copied())
    }

    fn set_scale(&mut self, id: HotspotId, scale: f64) {
        if let Some(hotspot) = self.hotspots.get_mut(id.0) {
            hotspot.scale = scale;
        }
    }

    /// Hover handling for a pointer at pixel coordinates `(px, py)`.
    pub fn pointer_move(&mut self, px: f64, py: f64) -> Option<HotspotId> {
        let (ndc_x, ndc_y) = self.viewport.to_ndc(px, py);
        let ray = self.camera.ray_from_ndc(ndc_x, ndc_y);

        match self.pick(&ray) {
            Some(id) => {
                if let Some(previous) = self.hovered.filter(|&previous| previous != id) {
                    self.set_scale(previous, REST_SCALE);
                }
                self.hovered = Some(id);
                self.set_scale(id, HOVER_SCALE);
                self.cursor = Cursor::Pointer;
                self.label = Label {
                    text: self.hotspots[id.0].label.clone(),
                    left: px + LABEL_OFFSET_PX,
                    top: py + LABEL_OFFSET_PX,
                    visible: true,
                };
                Some(id)
            }
            None => {
                if let Some(previous) = self.hovered.take() {
                    self.set_scale(previous, REST_SCALE);
                }
                self.cursor = Cursor::Default;
                self.label.visible = false;
                None
            }
        }
    }

    /// Navigation target if a hotspot is under the pointer.
    pub fn click(&self) -> Option<Navigation> {
        let hotspot = self.hotspot(self.hovered?)?;
        info!("Navigating to {}", hotspot.url);
        Some(Navigation {
            url: hotspot.url.clone(),
        })
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
    }
}
