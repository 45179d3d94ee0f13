//! Elliptic curve groups over prime fields
//!
//! Generic short Weierstrass arithmetic over big integers, with named
//! domains for NIST P-192, NIST P-256 and a small toy curve.

mod domain;
mod point;

pub use domain::CurveDomain;
pub use point::Point;
