pub mod vector3;
mod body;
mod solar_system;

pub use vector3::Vector3;
pub use body::*;
pub use solar_system::*;
