// Side-scrolling camera with a dead zone on each edge

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::engine::physics::KinematicBody;

/// Horizontal scroll offset tracking a kinematic body.
///
/// The view only scrolls while the body pushes past the dead-zone margin
/// in its direction of travel; inside the margins the camera holds still.
/// The offset is never clamped, so the view can scroll past the level's
/// edges.
#[derive(Debug)]
pub struct ScrollCamera {
    offset_x: f32,
    dead_zone: f32,
    view_width: f32,
    view_height: f32,
}

impl ScrollCamera {
    pub fn new(view_width: f32, view_height: f32, dead_zone: f32) -> Self {
        Self {
            offset_x: 0.0,
            dead_zone,
            view_width,
            view_height,
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    /// Follow the body for one frame
    pub fn update(&mut self, body: &KinematicBody) {
        let right_margin = body.right() - self.offset_x;
        let left_margin = body.left() - self.offset_x;

        if (right_margin >= self.view_width - self.dead_zone && body.vx > 0.0)
            || (left_margin <= self.dead_zone && body.vx < 0.0)
        {
            self.offset_x += body.vx;
        }
    }

    /// Orthographic projection mapping world pixels to clip space, with
    /// y down to match sprite coordinates
    pub fn view_proj(&self) -> Mat4 {
        Mat4::orthographic_rh(
            self.offset_x,
            self.offset_x + self.view_width,
            self.view_height,
            0.0,
            -100.0,
            100.0,
        )
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
        }
    }
}

/// GPU-side camera data
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}
