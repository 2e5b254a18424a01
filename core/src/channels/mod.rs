pub mod bounds;
pub mod filter;
pub mod good_set;
pub mod registry;

pub use bounds::ChannelBounds;
pub use filter::SimpleChannelFilter;
pub use good_set::{compute_good_set, GoodSetCache};
pub use registry::ExclusionRegistry;
