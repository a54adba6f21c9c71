//! Body-vs-wall contact resolution
//!
//! Each axis is handled on its own, so a body pushed into a corner is
//! corrected on both axes in the same call.

use super::states::{Arena, PhysicalObject};

/// Signed penetration of a disk into the walls of one axis.
///
/// Positive when the disk pokes through the low wall (push towards +),
/// negative when it pokes through the high wall (push towards -), zero otherwise.
pub fn wall_overlap(center: f64, radius: f64, border_length: f64) -> f64 {
    if center < radius {
        radius - center
    } else if center > border_length - radius {
        (border_length - radius) - center
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryResolver {
    pub guard_wall_flip: bool, // only reflect when the velocity points into the wall
}

impl Default for BoundaryResolver {
    fn default() -> Self {
        Self { guard_wall_flip: true }
    }
}

impl BoundaryResolver {
    pub fn new(guard_wall_flip: bool) -> Self {
        Self { guard_wall_flip }
    }

    /// Clamp the body back inside `arena` and reflect the velocity of every
    /// axis it penetrated. Returns true if any wall was touched.
    pub fn resolve<P: PhysicalObject + ?Sized>(&self, obj: &mut P, arena: &Arena) -> bool {
        let r = obj.radius();

        let overlap_x = wall_overlap(obj.x(), r, arena.width);
        if overlap_x != 0.0 {
            // snap onto the wall line rather than adding the overlap, so the
            // containment bound holds exactly in floating point
            obj.set_x(if overlap_x > 0.0 { r } else { arena.width - r });
            if self.should_flip(overlap_x, obj.vx()) {
                obj.set_vx(-obj.vx());
            }
        }

        let overlap_y = wall_overlap(obj.y(), r, arena.height);
        if overlap_y != 0.0 {
            obj.set_y(if overlap_y > 0.0 { r } else { arena.height - r });
            if self.should_flip(overlap_y, obj.vy()) {
                obj.set_vy(-obj.vy());
            }
        }

        overlap_x != 0.0 || overlap_y != 0.0
    }

    // overlap and velocity have opposite signs exactly when moving into the wall
    fn should_flip(&self, overlap: f64, v: f64) -> bool {
        !self.guard_wall_flip || overlap * v < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Body;
    use approx::assert_relative_eq;

    #[test]
    fn overlap_sign_per_wall() {
        assert_relative_eq!(wall_overlap(0.2, 0.5, 10.0), 0.3);
        assert_relative_eq!(wall_overlap(9.8, 0.5, 10.0), -0.3);
        assert_eq!(wall_overlap(5.0, 0.5, 10.0), 0.0);
        // resting exactly on the wall is not penetrating
        assert_eq!(wall_overlap(0.5, 0.5, 10.0), 0.0);
        assert_eq!(wall_overlap(9.5, 0.5, 10.0), 0.0);
    }

    #[test]
    fn corner_hit_reflects_both_axes() {
        let arena = Arena::new(10.0, 10.0);
        let mut b = Body::new(9.9, 0.1, 2.0, -3.0, 0.5, 1.0);
        assert!(BoundaryResolver::default().resolve(&mut b, &arena));
        assert_eq!(b.x.x, 9.5);
        assert_eq!(b.x.y, 0.5);
        assert_eq!(b.v.x, -2.0);
        assert_eq!(b.v.y, 3.0);
    }

    #[test]
    fn guarded_flip_leaves_separating_body_alone() {
        let arena = Arena::new(10.0, 10.0);
        // still overlapping the floor but already moving up
        let mut b = Body::new(5.0, 0.45, 0.0, 1.0, 0.5, 1.0);
        BoundaryResolver::new(true).resolve(&mut b, &arena);
        assert_eq!(b.x.y, 0.5);
        assert_eq!(b.v.y, 1.0);
    }

    #[test]
    fn unguarded_flip_always_reflects() {
        let arena = Arena::new(10.0, 10.0);
        let mut b = Body::new(5.0, 0.45, 0.0, 1.0, 0.5, 1.0);
        BoundaryResolver::new(false).resolve(&mut b, &arena);
        assert_eq!(b.x.y, 0.5);
        assert_eq!(b.v.y, -1.0);
    }

    #[test]
    fn inside_body_is_untouched() {
        let arena = Arena::new(10.0, 10.0);
        let mut b = Body::new(5.0, 5.0, 1.0, 1.0, 0.5, 1.0);
        let before = b.clone();
        assert!(!BoundaryResolver::default().resolve(&mut b, &arena));
        assert_eq!(b, before);
    }

    #[test]
    fn containment_holds_for_any_start() {
        let arena = Arena::new(8.0, 6.0);
        let resolver = BoundaryResolver::default();
        for i in 0..200 {
            let f = i as f64;
            let mut b = Body::new(
                (f * 0.37).sin() * 12.0 + 4.0,
                (f * 0.13).cos() * 9.0 + 3.0,
                (f * 0.7).cos(),
                (f * 0.3).sin(),
                0.25 + 0.01 * (i % 7) as f64,
                1.0,
            );
            resolver.resolve(&mut b, &arena);
            assert!(arena.contains(&b), "body {i} escaped: {:?}", b.x);
        }
    }
}
