pub mod constants;
pub mod facet;
pub mod gallery;
pub mod layout;
pub mod orbit;
pub mod pointer;
pub mod scene;

pub use constants::*;
pub use facet::*;
pub use gallery::*;
pub use layout::*;
pub use orbit::*;
pub use pointer::*;
pub use scene::*;

// Shaders bundled as string constants
pub static CRYSTAL_WGSL: &str = include_str!("../../shaders/crystal.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
