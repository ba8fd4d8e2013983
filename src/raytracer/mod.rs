pub mod camera;
pub mod checksum;
pub mod config;
pub mod error;
pub mod light;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shade;
pub mod shapes;
pub mod sink;

pub use camera::*;
pub use checksum::*;
pub use config::*;
pub use error::*;
pub use light::*;
pub use ray::*;
pub use renderer::*;
pub use scene::*;
pub use shade::*;
pub use shapes::*;
pub use sink::*;
