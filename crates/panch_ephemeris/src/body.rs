//! The set of bodies the engine tracks.

use serde::{Deserialize, Serialize};

/// A tracked celestial body, including the two lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// North lunar node.
    Rahu,
    /// South lunar node, always `Rahu + 180 deg`.
    Ketu,
}

impl Body {
    /// All tracked bodies, Sun first, nodes last.
    pub const fn all() -> &'static [Body] {
        &[
            Body::Sun,
            Body::Moon,
            Body::Mercury,
            Body::Venus,
            Body::Mars,
            Body::Jupiter,
            Body::Saturn,
            Body::Uranus,
            Body::Neptune,
            Body::Pluto,
            Body::Rahu,
            Body::Ketu,
        ]
    }

    /// The NAIF SPK body code used by DE-family kernels, if this body has
    /// a direct ephemeris segment. `Rahu`/`Ketu` return `None` — they are
    /// derived analytically from lunar node theory, never queried from a
    /// kernel.
    pub const fn naif_code(self) -> Option<i32> {
        match self {
            Body::Sun => Some(10),
            Body::Moon => Some(301),
            Body::Mercury => Some(199),
            Body::Venus => Some(299),
            Body::Mars => Some(499),
            Body::Jupiter => Some(599),
            Body::Saturn => Some(699),
            Body::Uranus => Some(799),
            Body::Neptune => Some(899),
            Body::Pluto => Some(999),
            Body::Rahu | Body::Ketu => None,
        }
    }

    /// `true` for Rahu and Ketu.
    pub const fn is_lunar_node(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }
}
