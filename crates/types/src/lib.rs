pub mod depth;
pub mod ids;

pub use depth::{DepthError, HeadingDepth};
pub use ids::AnchorId;
