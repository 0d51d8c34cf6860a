// Axis-separated collision resolution against static geometry

use super::body::KinematicBody;
use super::mask::PixelMask;
use super::world::CollisionWorld;

/// What a vertical overlap did to the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Moving down: bottom edge snapped to the object's top
    Landed,
    /// Moving up: top edge snapped to the object's bottom
    HeadBump,
    /// Stationary overlap: reported but no position change
    Touch,
}

/// One vertical-pass overlap, identified by object index in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerticalContact {
    pub object: usize,
    pub kind: ContactKind,
}

/// Ask whether displacing the body by `dx` would collide, without moving it.
///
/// Tests the body's mask at the displaced position against every object's
/// mask in list order and returns the index of the first overlap. The body
/// is never mutated, so movement can be vetoed before it is applied.
pub fn probe_horizontal(
    body: &KinematicBody,
    mask: &PixelMask,
    world: &CollisionWorld,
    dx: f32,
) -> Option<usize> {
    let probe_pos = (body.x + dx, body.y);
    world
        .objects()
        .iter()
        .position(|obj| mask.overlaps(probe_pos, obj.mask(), obj.position()))
}

/// Resolve vertical overlaps after the body has already moved by `dy`.
///
/// Every overlapping object is visited in list order and reported; when
/// several overlap in the same frame, each snap is applied against the
/// body's current position, so the last processed overlap determines the
/// final position. `dy == 0` reports overlaps without snapping, so a
/// stationary overlap with a hazard still registers.
pub fn resolve_vertical(
    body: &mut KinematicBody,
    mask: &PixelMask,
    world: &CollisionWorld,
    dy: f32,
) -> Vec<VerticalContact> {
    let mut contacts = Vec::new();

    for (index, obj) in world.objects().iter().enumerate() {
        if !mask.overlaps(body.position(), obj.mask(), obj.position()) {
            continue;
        }

        let kind = if dy > 0.0 {
            body.set_bottom(obj.top());
            ContactKind::Landed
        } else if dy < 0.0 {
            body.set_top(obj.bottom());
            ContactKind::HeadBump
        } else {
            ContactKind::Touch
        };

        contacts.push(VerticalContact {
            object: index,
            kind,
        });
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::world::StaticObject;

    fn body_50(x: f32, y: f32) -> (KinematicBody, PixelMask) {
        (KinematicBody::new(x, y, 50, 50), PixelMask::filled(50, 50))
    }

    fn solid(x: f32, y: f32, w: u32, h: u32) -> StaticObject {
        StaticObject::solid(x, y, PixelMask::filled(w, h))
    }

    #[test]
    fn test_probe_finds_first_overlap_in_list_order() {
        let (body, mask) = body_50(0.0, 0.0);
        let mut world = CollisionWorld::new();
        world.push(solid(200.0, 0.0, 50, 50));
        world.push(solid(55.0, 0.0, 50, 50));
        world.push(solid(60.0, 0.0, 50, 50));

        // dx=10 reaches both objects at 55 and 60; index 1 is first in list
        assert_eq!(probe_horizontal(&body, &mask, &world, 10.0), Some(1));
    }

    #[test]
    fn test_probe_misses_when_clear() {
        let (body, mask) = body_50(0.0, 0.0);
        let mut world = CollisionWorld::new();
        world.push(solid(100.0, 0.0, 50, 50));

        assert_eq!(probe_horizontal(&body, &mask, &world, 10.0), None);
    }

    #[test]
    fn test_probe_never_displaces_body() {
        let (body, mask) = body_50(33.25, 41.75);
        let mut world = CollisionWorld::new();
        world.push(solid(80.0, 40.0, 50, 50));

        let before = body.clone();
        let hit = probe_horizontal(&body, &mask, &world, 10.0);
        assert!(hit.is_some());
        assert_eq!(body, before);
        assert_eq!(body.x.to_bits(), before.x.to_bits());
        assert_eq!(body.y.to_bits(), before.y.to_bits());
    }

    #[test]
    fn test_probe_in_both_directions() {
        let (body, mask) = body_50(100.0, 0.0);
        let mut world = CollisionWorld::new();
        world.push(solid(45.0, 0.0, 50, 50));

        assert_eq!(probe_horizontal(&body, &mask, &world, -10.0), Some(0));
        assert_eq!(probe_horizontal(&body, &mask, &world, 10.0), None);
    }

    #[test]
    fn test_landing_snaps_bottom_to_top() {
        // Body fell into the floor; dy > 0 snaps it flush
        let (mut body, mask) = body_50(0.0, 660.0);
        let mut world = CollisionWorld::new();
        world.push(solid(0.0, 704.0, 96, 96));

        let contacts = resolve_vertical(&mut body, &mask, &world, 8.0);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].kind, ContactKind::Landed);
        assert_eq!(body.bottom(), 704.0);
    }

    #[test]
    fn test_head_bump_snaps_top_to_bottom() {
        // Body rose into a ceiling block; dy < 0 pushes it back down
        let (mut body, mask) = body_50(0.0, 90.0);
        let mut world = CollisionWorld::new();
        world.push(solid(0.0, 0.0, 96, 96));

        let contacts = resolve_vertical(&mut body, &mask, &world, -8.0);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].kind, ContactKind::HeadBump);
        assert_eq!(body.top(), 96.0);
    }

    #[test]
    fn test_stationary_overlap_reports_touch_without_snap() {
        let (mut body, mask) = body_50(0.0, 660.0);
        let mut world = CollisionWorld::new();
        world.push(solid(0.0, 704.0, 96, 96));

        let before = body.clone();
        let contacts = resolve_vertical(&mut body, &mask, &world, 0.0);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].kind, ContactKind::Touch);
        assert_eq!(body, before);
    }

    #[test]
    fn test_all_simultaneous_overlaps_reported() {
        // Standing on a block while clipping a hazard next to it
        let (mut body, mask) = body_50(70.0, 660.0);
        let mut world = CollisionWorld::new();
        world.push(solid(0.0, 704.0, 96, 96));
        world.push(StaticObject::hazard(
            96.0,
            640.0,
            PixelMask::filled(32, 64),
        ));

        let contacts = resolve_vertical(&mut body, &mask, &world, 8.0);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].object, 0);
        assert_eq!(contacts[1].object, 1);
    }

    #[test]
    fn test_last_overlap_in_list_order_wins_position() {
        // Two floors at different heights both overlap this frame; the
        // second one processed determines the final snap.
        let (mut body, mask) = body_50(0.0, 660.0);
        let mut world = CollisionWorld::new();
        world.push(solid(0.0, 700.0, 96, 10));
        world.push(solid(0.0, 695.0, 96, 96));

        let contacts = resolve_vertical(&mut body, &mask, &world, 8.0);
        assert_eq!(contacts.len(), 2);
        assert_eq!(body.bottom(), 695.0);
    }

    #[test]
    fn test_empty_world_no_contacts() {
        let (mut body, mask) = body_50(0.0, 0.0);
        let world = CollisionWorld::new();
        assert!(resolve_vertical(&mut body, &mask, &world, 5.0).is_empty());
    }
}
