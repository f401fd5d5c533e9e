//! Proximity connectors between particles

use super::particle::Particle;

/// A connector between particles `a < b`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Opacity of a connector at `distance`, or None when too far apart.
/// Fades linearly from `max_opacity` at 0 to nothing at `max_distance`.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32, max_opacity: f32) -> Option<f32> {
    if distance < max_distance {
        Some(max_opacity * (1.0 - distance / max_distance))
    } else {
        None
    }
}

/// Every unordered pair closer than `max_distance`.
///
/// O(n²) per call; fine for a few hundred particles.
pub fn links(
    particles: &[Particle],
    max_distance: f32,
    max_opacity: f32,
) -> impl Iterator<Item = Link> + '_ {
    let max_sq = max_distance * max_distance;
    particles.iter().enumerate().flat_map(move |(a, p)| {
        particles[a + 1..]
            .iter()
            .enumerate()
            .filter_map(move |(offset, q)| {
                let dist_sq = p.pos.distance_squared(q.pos);
                if dist_sq >= max_sq {
                    return None;
                }
                link_opacity(dist_sq.sqrt(), max_distance, max_opacity).map(|opacity| Link {
                    a,
                    b: a + 1 + offset,
                    opacity,
                })
            })
    })
}
