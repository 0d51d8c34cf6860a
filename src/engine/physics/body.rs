// Kinematic body state shared by simulated actors

/// Position/velocity state for a moving actor.
///
/// The body is an axis-aligned box anchored at its top-left corner.
/// Width and height are fixed at construction; only position and
/// velocity mutate during simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    /// World-space x of the top-left corner
    pub x: f32,
    /// World-space y of the top-left corner (y grows downward)
    pub y: f32,
    /// Horizontal velocity in pixels per frame
    pub vx: f32,
    /// Vertical velocity in pixels per frame (positive = falling)
    pub vy: f32,
    width: u32,
    height: u32,
}

impl KinematicBody {
    pub fn new(x: f32, y: f32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width as f32
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height as f32
    }

    /// Top-left corner as a position pair, for mask testing
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Displace the body by (dx, dy)
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Snap the bottom edge to the given y (landing on a surface)
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height as f32;
    }

    /// Snap the top edge to the given y (bumping into a ceiling)
    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let body = KinematicBody::new(10.0, 20.0, 50, 40);
        assert_eq!(body.left(), 10.0);
        assert_eq!(body.right(), 60.0);
        assert_eq!(body.top(), 20.0);
        assert_eq!(body.bottom(), 60.0);
    }

    #[test]
    fn test_translate() {
        let mut body = KinematicBody::new(0.0, 0.0, 10, 10);
        body.translate(5.0, -3.0);
        assert_eq!(body.position(), (5.0, -3.0));
    }

    #[test]
    fn test_snap_bottom() {
        let mut body = KinematicBody::new(0.0, 0.0, 50, 50);
        body.set_bottom(704.0);
        assert_eq!(body.top(), 654.0);
        assert_eq!(body.bottom(), 704.0);
    }

    #[test]
    fn test_snap_top() {
        let mut body = KinematicBody::new(0.0, 100.0, 50, 50);
        body.set_top(192.0);
        assert_eq!(body.top(), 192.0);
        assert_eq!(body.bottom(), 242.0);
    }

    #[test]
    fn test_size_is_fixed() {
        let mut body = KinematicBody::new(0.0, 0.0, 50, 50);
        body.translate(100.0, 100.0);
        body.set_bottom(0.0);
        assert_eq!(body.width(), 50);
        assert_eq!(body.height(), 50);
    }
}
