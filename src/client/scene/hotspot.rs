use std::f64::consts::PI;

use super::math::Vec3;

pub const CORE_RADIUS: f64 = 0.06;
pub const GLOW_RADIUS: f64 = CORE_RADIUS * 1.5;
pub const ANGLE_STEP: f64 = 0.01;
pub const REST_SCALE: f64 = 1.0;
pub const HOVER_SCALE: f64 = 1.3;
const PULSE_FREQUENCY: f64 = 0.003;
const PULSE_AMPLITUDE: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotspotId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(pub usize);

/// Static description of a hotspot, before it is attached to the model.
#[derive(Debug, Clone, Copy)]
pub struct HotspotSpec {
    pub label: &'static str,
    pub url: &'static str,
    pub base: Vec3,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub phase: f64,
}

pub const DEFAULT_HOTSPOTS: [HotspotSpec; 3] = [
    HotspotSpec {
        label: "my projects",
        url: "projects.html",
        base: Vec3::new(0.25, 1.1, 0.25),
        orbit_radius: 0.05,
        orbit_speed: 0.8,
        phase: 0.0,
    },
    HotspotSpec {
        label: "my work experience",
        url: "work.html",
        base: Vec3::new(-0.4, 0.5, 0.25),
        orbit_radius: 0.05,
        orbit_speed: 1.0,
        phase: PI / 3.0,
    },
    HotspotSpec {
        label: "my learnings",
        url: "learnings.html",
        base: Vec3::new(0.2, 0.2, 0.25),
        orbit_radius: 0.05,
        orbit_speed: 0.9,
        phase: PI * 2.0 / 3.0,
    },
];

/// An orbiting marker attached to the avatar. Positions are in model space.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub id: HotspotId,
    pub label: String,
    pub url: String,
    pub base: Vec3,
    pub orbit_radius: f64,
    pub orbit_speed: f64,
    pub angle: f64,
    pub position: Vec3,
    pub scale: f64,
}

impl Hotspot {
    pub fn new(id: HotspotId, spec: &HotspotSpec) -> Self {
        Self {
            id,
            label: spec.label.to_string(),
            url: spec.url.to_string(),
            base: spec.base,
            orbit_radius: spec.orbit_radius,
            orbit_speed: spec.orbit_speed,
            angle: spec.phase,
            position: spec.base,
            scale: REST_SCALE,
        }
    }

    /// Moves one frame along the elliptical orbit.
    pub fn advance(&mut self) {
        self.angle += ANGLE_STEP * self.orbit_speed;
        self.position = self.base + orbit_offset(self.angle, self.orbit_radius);
    }
}

pub fn orbit_offset(angle: f64, radius: f64) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos * radius, sin * radius * 0.5, sin * radius * 0.3)
}

/// Shared breathing scale for all resting hotspots at `time_ms`.
pub fn pulse_scale(time_ms: f64) -> f64 {
    1.0 + (time_ms * PULSE_FREQUENCY).sin() * PULSE_AMPLITUDE
}

/// An intersectable sphere belonging to a hotspot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub id: GeometryId,
    pub owner: HotspotId,
    pub radius: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn advance_follows_ellipse() {
        let mut hotspot = Hotspot::new(HotspotId(0), &DEFAULT_HOTSPOTS[0]);
        hotspot.advance();
        let angle = 0.01 * 0.8;
        assert!((hotspot.angle - angle).abs() < EPS);
        let expected = Vec3::new(
            0.25 + angle.cos() * 0.05,
            1.1 + angle.sin() * 0.05 * 0.5,
            0.25 + angle.sin() * 0.05 * 0.3,
        );
        assert!((hotspot.position - expected).length() < EPS);
    }

    #[test]
    fn phase_sets_starting_angle() {
        let hotspot = Hotspot::new(HotspotId(1), &DEFAULT_HOTSPOTS[1]);
        assert!((hotspot.angle - PI / 3.0).abs() < EPS);
        assert_eq!(hotspot.position, DEFAULT_HOTSPOTS[1].base);
    }

    #[test]
    fn pulse_stays_within_amplitude() {
        assert!((pulse_scale(0.0) - 1.0).abs() < EPS);
        let peak = pulse_scale(PI / 2.0 / PULSE_FREQUENCY);
        assert!((peak - 1.1).abs() < 1e-9);
        for t in 0..1000 {
            let s = pulse_scale(f64::from(t) * 16.7);
            assert!((0.9 - EPS..=1.1 + EPS).contains(&s));
        }
    }
}
