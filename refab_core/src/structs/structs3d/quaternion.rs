use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::structs3d::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Serialize for Quaternion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        [self.x, self.y, self.z, self.w].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Quaternion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let arr = <[f32; 4]>::deserialize(deserializer)?;
        Ok(Quaternion::new(arr[0], arr[1], arr[2], arr[3]))
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({}, {}, {}, {})",
            self.x, self.y, self.z, self.w
        )
    }
}

impl Quaternion {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    #[inline(always)]
    fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    #[inline(always)]
    fn from_glam(q: glam::Quat) -> Self {
        Self {
            x: q.x,
            y: q.y,
            z: q.z,
            w: q.w,
        }
    }

    /// Create quaternion from Euler angles in **degrees** (pitch, yaw, roll).
    pub fn from_euler_degrees(pitch_deg: f32, yaw_deg: f32, roll_deg: f32) -> Self {
        Self::from_euler(
            pitch_deg.to_radians(),
            yaw_deg.to_radians(),
            roll_deg.to_radians(),
        )
    }

    pub fn from_euler(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self::from_glam(glam::Quat::from_euler(
            glam::EulerRot::YXZ,
            yaw,
            pitch,
            roll,
        ))
    }

    pub fn to_euler(&self) -> (f32, f32, f32) {
        let (yaw, pitch, roll) = self.to_glam().to_euler(glam::EulerRot::YXZ);
        (pitch, yaw, roll)
    }

    /// Convert quaternion to Euler angles in **degrees** (pitch, yaw, roll).
    pub fn to_euler_degrees(&self) -> (f32, f32, f32) {
        let (p, y, r) = self.to_euler();
        (p.to_degrees(), y.to_degrees(), r.to_degrees())
    }

    pub fn normalize(&self) -> Self {
        Self::from_glam(self.to_glam().normalize())
    }

    pub fn mul(&self, rhs: Self) -> Self {
        Self::from_glam(self.to_glam() * rhs.to_glam())
    }

    pub fn rotate_vec3(&self, v: Vector3) -> Vector3 {
        Vector3::from_glam(self.to_glam() * v.to_glam())
    }

    /// Apply an incremental Euler rotation (degrees) to this quaternion and return the new
    /// quaternion. The 3D equivalent of "rotation.y += delta" style updates, implemented via
    /// quaternion multiplication (avoids gimbal lock and keeps the quaternion normalized).
    pub fn rotate_euler_degrees(
        &self,
        delta_pitch_deg: f32,
        delta_yaw_deg: f32,
        delta_roll_deg: f32,
    ) -> Self {
        self.mul(Quaternion::from_euler_degrees(
            delta_pitch_deg,
            delta_yaw_deg,
            delta_roll_deg,
        ))
        .normalize()
    }

    /// Rotate around Y axis by `delta_yaw_deg` degrees and return the new quaternion.
    pub fn rotate_y(&self, delta_yaw_deg: f32) -> Self {
        self.rotate_euler_degrees(0.0, delta_yaw_deg, 0.0)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}
