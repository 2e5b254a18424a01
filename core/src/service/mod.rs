pub mod config;
pub mod filter_service;
pub mod geometry;

pub use config::{FilterConfig, ProviderKind};
pub use filter_service::{ChannelFilterService, ServiceSummary};
pub use geometry::{ChannelGeometry, FixedGeometry};
