//! Body-vs-body collision response for the bouncing-ball engine
//!
//! Defines the pluggable [`CollisionStrategy`] trait and two response models
//! that share detection and de-penetration:
//! - [`ElasticCollision`]   - momentum and kinetic energy preserving exchange
//! - [`InelasticCollision`] - momentum preserving, restitution-scaled exchange
//!
//! Response works in the contact frame: both velocities are rotated so the
//! line between the centres lies on the x-axis, a 1D exchange is solved on
//! that axis, and the result is rotated back. The tangential component never
//! changes.

use nalgebra::Rotation2;

use super::params::Parameters;
use super::states::{NVec2, PhysicalObject};

/// Pairwise collision response, called once per unordered pair per step
pub trait CollisionStrategy {
    fn resolve(&self, a: &mut dyn PhysicalObject, b: &mut dyn PhysicalObject);
}

/// Geometry of a detected contact between `a` and `b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub normal: NVec2, // unit vector from a towards b
    pub angle: f64, // atan2 of the normal
    pub distance: f64, // centre distance
    pub overlap: f64, // r_a + r_b - distance, > 0 when detected
}

/// Detection shared by every response model.
///
/// Colliding iff `distance < r_a + r_b - epsilon`; exact tangency is not a
/// collision. Coincident centres get the fixed axis (1, 0).
pub fn detect(a: &dyn PhysicalObject, b: &dyn PhysicalObject, epsilon: f64) -> Option<Contact> {
    let d = b.position() - a.position();
    let distance = d.norm();
    let overlap = a.radius() + b.radius() - distance;
    if overlap <= epsilon {
        return None;
    }

    let (normal, angle) = if distance == 0.0 {
        (NVec2::x(), 0.0)
    } else {
        (d / distance, contact_angle(a, b))
    };

    Some(Contact { normal, angle, distance, overlap })
}

/// Angle of the line from `a` to `b`
pub fn contact_angle(a: &dyn PhysicalObject, b: &dyn PhysicalObject) -> f64 {
    (b.y() - a.y()).atan2(b.x() - a.x())
}

/// Change of basis by -theta: (normal, tangential) components of `v`
pub fn rotate_into_normal(v: NVec2, theta: f64) -> NVec2 {
    Rotation2::new(theta).inverse_transform_vector(&v)
}

/// Inverse of [`rotate_into_normal`]
pub fn rotate_from_normal(v: NVec2, theta: f64) -> NVec2 {
    Rotation2::new(theta) * v
}

/// 1D elastic collision of two point masses, returns the outgoing velocities
pub fn elastic_1d(m1: f64, m2: f64, u1: f64, u2: f64) -> (f64, f64) {
    let total = m1 + m2;
    let v1 = ((m1 - m2) * u1 + 2.0 * m2 * u2) / total;
    let v2 = ((m2 - m1) * u2 + 2.0 * m1 * u1) / total;
    (v1, v2)
}

/// 1D collision with coefficient of restitution `e` (1 = elastic, 0 = plastic)
pub fn restitution_1d(m1: f64, m2: f64, u1: f64, u2: f64, e: f64) -> (f64, f64) {
    let total = m1 + m2;
    let p = m1 * u1 + m2 * u2;
    let v1 = (p + m2 * e * (u2 - u1)) / total;
    let v2 = (p + m1 * e * (u1 - u2)) / total;
    (v1, v2)
}

/// Push an overlapping pair apart along the contact normal.
///
/// Each body moves in proportion to the other body's mass, so the heavier one
/// moves less. With `correction = 1` the pair ends exactly touching.
pub fn separate(a: &mut dyn PhysicalObject, b: &mut dyn PhysicalObject, contact: &Contact, slop: f64, correction: f64) {
    if contact.overlap <= slop {
        return;
    }
    let (ma, mb) = (a.mass(), b.mass());
    let push = correction * contact.overlap * contact.normal;

    a.set_position(a.position() - (mb / (ma + mb)) * push);
    b.set_position(b.position() + (ma / (ma + mb)) * push);
}

/// Rotate both velocities into the contact frame, let `exchange` map the
/// normal components, rotate back. Returns false when the separating guard
/// skipped the exchange.
fn exchange_normal<F>(a: &mut dyn PhysicalObject, b: &mut dyn PhysicalObject, contact: &Contact, guard_separating: bool, exchange: F) -> bool
where
    F: Fn(f64, f64, f64, f64) -> (f64, f64),
{
    let va = rotate_into_normal(a.velocity(), contact.angle);
    let vb = rotate_into_normal(b.velocity(), contact.angle);

    // normal closing speed, <= 0 means the pair is already moving apart
    if guard_separating && va.x - vb.x <= 0.0 {
        return false;
    }

    let (na, nb) = exchange(a.mass(), b.mass(), va.x, vb.x);

    a.set_velocity(rotate_from_normal(NVec2::new(na, va.y), contact.angle));
    b.set_velocity(rotate_from_normal(NVec2::new(nb, vb.y), contact.angle));
    true
}

/// Perfectly elastic disk-disk response (rotate, exchange, rotate back, separate)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElasticCollision {
    pub epsilon: f64, // detection tolerance
    pub slop: f64, // overlap ignored by positional correction
    pub correction: f64, // fraction of overlap removed
    pub guard_separating: bool, // skip exchange for pairs already moving apart
}

impl Default for ElasticCollision {
    fn default() -> Self {
        Self::from_params(&Parameters::default())
    }
}

impl ElasticCollision {
    pub fn from_params(p: &Parameters) -> Self {
        Self {
            epsilon: p.contact_epsilon,
            slop: p.slop,
            correction: p.correction,
            guard_separating: p.guard_separating,
        }
    }
}

impl CollisionStrategy for ElasticCollision {
    fn resolve(&self, a: &mut dyn PhysicalObject, b: &mut dyn PhysicalObject) {
        let Some(contact) = detect(a, b, self.epsilon) else {
            return;
        };
        exchange_normal(a, b, &contact, self.guard_separating, elastic_1d);
        separate(a, b, &contact, self.slop, self.correction);
    }
}

/// Disk-disk response that loses normal energy according to `restitution`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InelasticCollision {
    pub restitution: f64, // 0 = plastic, 1 = elastic
    pub epsilon: f64,
    pub slop: f64,
    pub correction: f64,
    pub guard_separating: bool,
}

impl InelasticCollision {
    pub fn from_params(restitution: f64, p: &Parameters) -> Self {
        Self {
            restitution,
            epsilon: p.contact_epsilon,
            slop: p.slop,
            correction: p.correction,
            guard_separating: p.guard_separating,
        }
    }
}

impl CollisionStrategy for InelasticCollision {
    fn resolve(&self, a: &mut dyn PhysicalObject, b: &mut dyn PhysicalObject) {
        let Some(contact) = detect(a, b, self.epsilon) else {
            return;
        };
        let e = self.restitution;
        exchange_normal(a, b, &contact, self.guard_separating, |m1, m2, u1, u2| {
            restitution_1d(m1, m2, u1, u2, e)
        });
        separate(a, b, &contact, self.slop, self.correction);
    }
}
