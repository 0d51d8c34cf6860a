// Static level geometry: solid terrain and hazard zones

use super::mask::PixelMask;

/// Classification of a static surface.
///
/// Hazards are still solid for collision purposes; the tag only marks
/// them as harmful on contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Plain solid terrain
    Solid,
    /// Harmful on contact (flame traps, spikes)
    Hazard,
}

/// An immutable collidable entity: axis-aligned bounds plus an exact
/// occupancy mask. Created at level setup, never mutated afterwards.
#[derive(Debug, Clone)]
pub struct StaticObject {
    x: f32,
    y: f32,
    mask: PixelMask,
    kind: SurfaceKind,
}

impl StaticObject {
    pub fn solid(x: f32, y: f32, mask: PixelMask) -> Self {
        Self {
            x,
            y,
            mask,
            kind: SurfaceKind::Solid,
        }
    }

    pub fn hazard(x: f32, y: f32, mask: PixelMask) -> Self {
        Self {
            x,
            y,
            mask,
            kind: SurfaceKind::Hazard,
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        self.kind
    }

    pub fn is_hazard(&self) -> bool {
        self.kind == SurfaceKind::Hazard
    }

    pub fn mask(&self) -> &PixelMask {
        &self.mask
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.mask.width() as f32
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.mask.height() as f32
    }
}

/// Ordered collection of static objects owned by the level.
///
/// Insertion order is collision-check order: probes report the first
/// overlap in list order.
#[derive(Debug, Default)]
pub struct CollisionWorld {
    objects: Vec<StaticObject>,
}

impl CollisionWorld {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object, returning its index for later lookup
    pub fn push(&mut self, object: StaticObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn objects(&self) -> &[StaticObject] {
        &self.objects
    }

    pub fn get(&self, index: usize) -> Option<&StaticObject> {
        self.objects.get(index)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_edges() {
        let obj = StaticObject::solid(96.0, 704.0, PixelMask::filled(96, 96));
        assert_eq!(obj.left(), 96.0);
        assert_eq!(obj.right(), 192.0);
        assert_eq!(obj.top(), 704.0);
        assert_eq!(obj.bottom(), 800.0);
    }

    #[test]
    fn test_hazard_tag() {
        let solid = StaticObject::solid(0.0, 0.0, PixelMask::filled(8, 8));
        let hazard = StaticObject::hazard(0.0, 0.0, PixelMask::filled(8, 8));
        assert!(!solid.is_hazard());
        assert!(hazard.is_hazard());
        assert_eq!(hazard.kind(), SurfaceKind::Hazard);
    }

    #[test]
    fn test_world_preserves_insertion_order() {
        let mut world = CollisionWorld::new();
        let a = world.push(StaticObject::solid(0.0, 0.0, PixelMask::filled(4, 4)));
        let b = world.push(StaticObject::hazard(10.0, 0.0, PixelMask::filled(4, 4)));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(world.len(), 2);
        assert!(!world.objects()[0].is_hazard());
        assert!(world.objects()[1].is_hazard());
    }
}
