//! Collision detection and inelastic merge resolution.
//!
//! Detection is an O(n^2) scan over unordered index pairs with an inclusive
//! radius test. Resolution clusters mutually colliding bodies with union-find
//! and folds each cluster into a single body, conserving mass, momentum, and
//! volume; a body that touches two partners in the same step joins both into
//! one cluster instead of being merged twice.

use std::f64::consts::PI;

use log::debug;

use super::states::{Body, Color, System};

/// Two colliding bodies as they were after integration and before merge
/// removal. Owned clones: the returned world no longer contains either
/// source body, so their last-known mass/radius/color/position stay
/// readable here.
#[derive(Debug, Clone)]
pub struct CollisionEvent {
    pub a: Body,
    pub b: Body,
}

/// Touching counts as colliding: `r_a + r_b >= |x_a - x_b|`.
pub fn check_collision(a: &Body, b: &Body) -> bool {
    a.radius() + b.radius() >= (a.position() - b.position()).norm()
}

/// All colliding unordered index pairs, `i < j`, each reported once.
pub fn find_collisions(sys: &System) -> Vec<(usize, usize)> {
    let n = sys.bodies.len();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if check_collision(&sys.bodies[i], &sys.bodies[j]) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Perfectly inelastic merge of two bodies into a fresh one.
///
/// The new mass is the exact sum of the parents' masses; position and
/// velocity are mass-weighted averages; volume is additive and the new
/// density/radius are re-derived from it. Degenerate inputs fall back to
/// plain averages and unit density/radius rather than dividing by zero.
pub fn merge(a: &Body, b: &Body) -> Body {
    let m = a.mass() + b.mass();

    let (x, v) = if m == 0.0 {
        (
            (a.position() + b.position()) * 0.5,
            (a.velocity() + b.velocity()) * 0.5,
        )
    } else {
        (
            (a.position() * a.mass() + b.position() * b.mass()) / m,
            (a.velocity() * a.mass() + b.velocity() * b.mass()) / m,
        )
    };

    let volume = a.volume() + b.volume();
    let (density, radius) = if volume == 0.0 {
        (1.0, 1.0)
    } else {
        (m / volume, (3.0 * volume / (4.0 * PI)).cbrt())
    };

    let color = blend_colors(a.color(), a.mass(), b.color(), b.mass());

    Body::from_merge(density, radius, x, v, m, color)
}

/// Mass-weighted channel blend, clamped to [0, 255]; plain average when the
/// combined mass is zero.
fn blend_colors(ca: Color, ma: f64, cb: Color, mb: f64) -> Color {
    let m = ma + mb;
    let mut out = [0.0; 4];
    for ch in 0..4 {
        let mixed = if m == 0.0 {
            (ca[ch] + cb[ch]) * 0.5
        } else {
            (ca[ch] * ma + cb[ch] * mb) / m
        };
        out[ch] = mixed.clamp(0.0, 255.0);
    }
    out
}

/// Merge every cluster of colliding bodies, returning the new world.
/// Merged bodies come first (clusters ordered by their smallest member
/// index), untouched bodies follow in their original order.
pub fn resolve_collisions(sys: &System) -> System {
    resolve_collisions_with_info(sys).0
}

/// Same as [`resolve_collisions`], also returning the raw collision pairs
/// for external animation triggers.
pub fn resolve_collisions_with_info(sys: &System) -> (System, Vec<CollisionEvent>) {
    let pairs = find_collisions(sys);
    if pairs.is_empty() {
        return (sys.clone(), Vec::new());
    }

    let events: Vec<CollisionEvent> = pairs
        .iter()
        .map(|&(i, j)| CollisionEvent {
            a: sys.bodies[i].clone(),
            b: sys.bodies[j].clone(),
        })
        .collect();

    let n = sys.bodies.len();

    // Union-find over body indices, smaller index wins as root so each
    // cluster's root is its smallest member.
    let mut parent: Vec<usize> = (0..n).collect();
    let mut touched = vec![false; n];
    for &(i, j) in &pairs {
        touched[i] = true;
        touched[j] = true;
        let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
        if ri != rj {
            parent[ri.max(rj)] = ri.min(rj);
        }
    }

    // Gather cluster members in ascending index order.
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut roots_in_order = Vec::new();
    for i in 0..n {
        if touched[i] {
            let r = find(&mut parent, i);
            if members[r].is_empty() {
                roots_in_order.push(r);
            }
            members[r].push(i);
        }
    }

    // Fold the pairwise merge over each cluster; mass, momentum, volume, and
    // the color blend are all mass-weighted, so the fold equals an N-way
    // merge.
    let mut bodies = Vec::with_capacity(n);
    for &r in &roots_in_order {
        let mut acc: Option<Body> = None;
        for &i in &members[r] {
            acc = Some(match acc {
                None => sys.bodies[i].clone(),
                Some(prev) => merge(&prev, &sys.bodies[i]),
            });
        }
        if let Some(body) = acc {
            debug!(
                "merged {} bodies into one of mass {:.3e} kg",
                members[r].len(),
                body.mass()
            );
            bodies.push(body);
        }
    }
    bodies.extend(
        sys.bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| !touched[*i])
            .map(|(_, b)| b.clone()),
    );

    (System { bodies, t: sys.t }, events)
}

fn find(parent: &mut [usize], mut i: usize) -> usize {
    while parent[i] != i {
        parent[i] = parent[parent[i]]; // path halving
        i = parent[i];
    }
    i
}
