//! Screen models: the state each screen renders, driven by focus and scroll
//! events. Rendering itself lives outside this crate.

pub mod camera_list;
pub mod map;
pub mod my_cameras;

pub use camera_list::CameraListScreen;
pub use map::MapScreen;
pub use my_cameras::MyCamerasScreen;
