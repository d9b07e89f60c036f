//! Camera orientation strategies
//!
//! Two interchangeable representations sit behind [`Orientation`]:
//! - [`BasisOrientation`]: forward/right/up unit vectors rotated in pairs
//! - [`EulerOrientation`]: azimuth/inclination with a pole flip
//!
//! Both use the same canonical frame: forward = +x, right = +y, up = +z,
//! so that `forward × right = up`. Camera-frame vectors are ordered
//! `(forward, right, up)`.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::OrientationMode;
use crate::{normalize, normalize_angle, to_cartesian};

/// Held steering keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TurnIntent {
    /// +1 turning right, -1 turning left, 0 when both or neither are held
    pub fn yaw(&self) -> f32 {
        self.right as i8 as f32 - self.left as i8 as f32
    }

    /// +1 pitching up, -1 pitching down, 0 when both or neither are held
    pub fn pitch(&self) -> f32 {
        self.up as i8 as f32 - self.down as i8 as f32
    }
}

/// Anything that can steer the camera and express world vectors in its frame
pub trait Orientation {
    /// Apply one tick of steering; `angle` is the turn for a held key
    fn rotate(&mut self, intent: &TurnIntent, angle: f32);

    /// Express a world-space vector as `(forward, right, up)` components
    fn to_camera_frame(&self, v: Vec3) -> Vec3;

    /// Unit vector the camera looks along
    fn forward(&self) -> Vec3;
}

/// Orthonormal basis triple, free of gimbal lock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisOrientation {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Default for BasisOrientation {
    fn default() -> Self {
        Self {
            forward: Vec3::X,
            right: Vec3::Y,
            up: Vec3::Z,
        }
    }
}

impl BasisOrientation {
    /// Rotate `a` toward `b` by `angle` within their shared plane
    ///
    /// Both results are renormalized to bound drift; the pair stays
    /// orthogonal because the rotation contracts any dot-product error.
    fn rotate_pair(a: Vec3, b: Vec3, angle: f32) -> (Vec3, Vec3) {
        let (s, c) = angle.sin_cos();
        let new_a = a * c + b * s;
        let new_b = b * c - a * s;
        (normalize(new_a), normalize(new_b))
    }

    /// Rows are the camera axes, so this is the inverse (transpose) of the basis
    pub fn world_to_camera(&self) -> Mat3 {
        Mat3::from_cols(self.forward, self.right, self.up).transpose()
    }
}

impl Orientation for BasisOrientation {
    fn rotate(&mut self, intent: &TurnIntent, angle: f32) {
        let yaw = intent.yaw();
        if yaw != 0.0 {
            (self.forward, self.right) = Self::rotate_pair(self.forward, self.right, yaw * angle);
        }
        let pitch = intent.pitch();
        if pitch != 0.0 {
            (self.forward, self.up) = Self::rotate_pair(self.forward, self.up, pitch * angle);
        }
    }

    fn to_camera_frame(&self, v: Vec3) -> Vec3 {
        self.world_to_camera() * v
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

/// Azimuth/inclination pair with a flip policy at the poles
///
/// Crossing a pole reflects the inclination back into `[0, π]`, turns the
/// azimuth by π, and toggles `inverted`. While inverted the camera is upside
/// down relative to the world z axis, so both steering axes and the derived
/// right/up vectors change sign and motion through the pole stays continuous.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerOrientation {
    /// Around world z, in (-π, π]
    pub azimuth: f32,
    /// From world +z, in [0, π]
    pub inclination: f32,
    pub inverted: bool,
}

impl Default for EulerOrientation {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            inclination: FRAC_PI_2,
            inverted: false,
        }
    }
}

impl EulerOrientation {
    fn handedness(&self) -> f32 {
        if self.inverted { -1.0 } else { 1.0 }
    }

    /// Camera right: direction of increasing azimuth, flipped when inverted
    pub fn right(&self) -> Vec3 {
        let (sin_a, cos_a) = self.azimuth.sin_cos();
        Vec3::new(-sin_a, cos_a, 0.0) * self.handedness()
    }

    pub fn up(&self) -> Vec3 {
        self.forward().cross(self.right())
    }

    fn flip_through_pole(&mut self) {
        while self.inclination < 0.0 || self.inclination > PI {
            self.inclination = if self.inclination < 0.0 {
                -self.inclination
            } else {
                TAU - self.inclination
            };
            self.azimuth += PI;
            self.inverted = !self.inverted;
        }
    }
}

impl Orientation for EulerOrientation {
    fn rotate(&mut self, intent: &TurnIntent, angle: f32) {
        let hand = self.handedness();
        self.azimuth += intent.yaw() * angle * hand;
        // Nose up moves toward +z, which is decreasing inclination
        self.inclination -= intent.pitch() * angle * hand;
        self.flip_through_pole();
        self.azimuth = normalize_angle(self.azimuth);
    }

    fn to_camera_frame(&self, v: Vec3) -> Vec3 {
        Vec3::new(v.dot(self.forward()), v.dot(self.right()), v.dot(self.up()))
    }

    fn forward(&self) -> Vec3 {
        to_cartesian(self.azimuth, self.inclination, 1.0)
    }
}

/// The configured strategy, so callers stay agnostic of the representation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraOrientation {
    Basis(BasisOrientation),
    Euler(EulerOrientation),
}

impl CameraOrientation {
    /// Canonical start orientation (facing +x) for the given mode
    pub fn new(mode: OrientationMode) -> Self {
        match mode {
            OrientationMode::Basis => Self::Basis(BasisOrientation::default()),
            OrientationMode::Euler => Self::Euler(EulerOrientation::default()),
        }
    }

    pub fn mode(&self) -> OrientationMode {
        match self {
            Self::Basis(_) => OrientationMode::Basis,
            Self::Euler(_) => OrientationMode::Euler,
        }
    }
}

impl Default for CameraOrientation {
    fn default() -> Self {
        Self::new(OrientationMode::default())
    }
}

impl Orientation for CameraOrientation {
    fn rotate(&mut self, intent: &TurnIntent, angle: f32) {
        match self {
            Self::Basis(o) => o.rotate(intent, angle),
            Self::Euler(o) => o.rotate(intent, angle),
        }
    }

    fn to_camera_frame(&self, v: Vec3) -> Vec3 {
        match self {
            Self::Basis(o) => o.to_camera_frame(v),
            Self::Euler(o) => o.to_camera_frame(v),
        }
    }

    fn forward(&self) -> Vec3 {
        match self {
            Self::Basis(o) => o.forward(),
            Self::Euler(o) => o.forward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-4;

    fn assert_orthonormal(o: &BasisOrientation) {
        for v in [o.forward, o.right, o.up] {
            assert!((v.length() - 1.0).abs() < EPS, "length drift: {}", v.length());
        }
        assert!(o.forward.dot(o.right).abs() < EPS);
        assert!(o.forward.dot(o.up).abs() < EPS);
        assert!(o.right.dot(o.up).abs() < EPS);
    }

    fn intent_from_bits(bits: u8) -> TurnIntent {
        TurnIntent {
            left: bits & 1 != 0,
            right: bits & 2 != 0,
            up: bits & 4 != 0,
            down: bits & 8 != 0,
        }
    }

    #[test]
    fn test_turn_right_moves_toward_right() {
        let mut o = BasisOrientation::default();
        let intent = TurnIntent {
            right: true,
            ..Default::default()
        };
        o.rotate(&intent, 0.1);
        assert!(o.forward.y > 0.0);
        assert!(o.right.x < 0.0);
        assert_eq!(o.up, Vec3::Z);
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let mut o = BasisOrientation::default();
        let intent = TurnIntent {
            left: true,
            right: true,
            up: true,
            down: true,
        };
        o.rotate(&intent, 0.1);
        assert_eq!(o, BasisOrientation::default());
    }

    #[test]
    fn test_pitch_leaves_right_untouched() {
        let mut o = BasisOrientation::default();
        let intent = TurnIntent {
            up: true,
            ..Default::default()
        };
        o.rotate(&intent, 0.2);
        assert_eq!(o.right, Vec3::Y);
        assert!(o.forward.z > 0.0);
        assert_orthonormal(&o);
    }

    #[test]
    fn test_camera_frame_is_transpose() {
        let mut o = BasisOrientation::default();
        let intent = TurnIntent {
            right: true,
            up: true,
            ..Default::default()
        };
        for _ in 0..37 {
            o.rotate(&intent, 0.05);
        }
        let cam = o.to_camera_frame(o.forward * 7.0 + o.up * 2.0);
        assert!((cam - Vec3::new(7.0, 0.0, 2.0)).length() < 1e-4);
    }

    #[test]
    fn test_euler_flips_through_pole() {
        let mut o = EulerOrientation::default();
        let up = TurnIntent {
            up: true,
            ..Default::default()
        };
        let step = 0.01;
        let mut previous = o.forward();
        let mut flipped = false;
        for _ in 0..400 {
            o.rotate(&up, step);
            let f = o.forward();
            // Continuous motion: each tick moves the nose by about one step
            assert!((f - previous).length() < step * 1.5);
            assert!((0.0..=PI).contains(&o.inclination));
            assert!(o.azimuth > -PI && o.azimuth <= PI);
            flipped |= o.inverted;
            previous = f;
        }
        assert!(flipped);
        // Four radians of pitch from +x passes over the top and below the horizon behind
        assert!(o.forward().x < 0.0);
        assert!(o.forward().z < 0.0);
    }

    #[test]
    fn test_euler_frame_is_orthonormal() {
        let o = EulerOrientation {
            azimuth: 1.1,
            inclination: 0.7,
            inverted: true,
        };
        let (f, r, u) = (o.forward(), o.right(), o.up());
        assert!(f.dot(r).abs() < 1e-5 && f.dot(u).abs() < 1e-5 && r.dot(u).abs() < 1e-5);
        assert!((u.length() - 1.0).abs() < 1e-5);
        assert!((o.to_camera_frame(f * 3.0) - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_strategies_agree_on_yaw_then_pitch() {
        let mut basis = CameraOrientation::new(OrientationMode::Basis);
        let mut euler = CameraOrientation::new(OrientationMode::Euler);
        let yaw = TurnIntent {
            left: true,
            ..Default::default()
        };
        let pitch = TurnIntent {
            down: true,
            ..Default::default()
        };
        for _ in 0..50 {
            basis.rotate(&yaw, 0.02);
            euler.rotate(&yaw, 0.02);
        }
        for _ in 0..40 {
            basis.rotate(&pitch, 0.02);
            euler.rotate(&pitch, 0.02);
        }
        assert!((basis.forward() - euler.forward()).length() < 1e-3);
        let probe = Vec3::new(3.0, -4.0, 5.0);
        assert!((basis.to_camera_frame(probe) - euler.to_camera_frame(probe)).length() < 1e-2);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn basis_stays_orthonormal(
            bits in proptest::collection::vec(0u8..16, 1..64),
            angle in 0.001f32..0.05,
        ) {
            let mut o = BasisOrientation::default();
            for tick in 0..10_000 {
                o.rotate(&intent_from_bits(bits[tick % bits.len()]), angle);
            }
            assert_orthonormal(&o);
        }

        #[test]
        fn euler_stays_in_range(
            bits in proptest::collection::vec(0u8..16, 1..64),
            angle in 0.001f32..0.2,
        ) {
            let mut o = EulerOrientation::default();
            for tick in 0..2_000 {
                o.rotate(&intent_from_bits(bits[tick % bits.len()]), angle);
                prop_assert!((0.0..=PI).contains(&o.inclination));
                prop_assert!(o.azimuth > -PI && o.azimuth <= PI);
            }
        }
    }
}
