//! Numeric primitives for SCPN Spherical Transform.

pub mod dct;
pub mod fft;
pub mod legendre;
