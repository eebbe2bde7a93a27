//! Concrete byte source implementations.

pub mod device;
pub mod lcg;
pub mod math;

pub use device::{DEFAULT_DEVICE_PATH, DeviceSource};
pub use lcg::{LCG_MODULUS, LCG_MULTIPLIER, LcgSource};
pub use math::MathSource;
