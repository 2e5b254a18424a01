use crate::prelude::ChannelId;

/// Source of the detector's channel extent.
pub trait ChannelGeometry {
    /// Number of allocated channels.
    fn channel_count(&self) -> u32;

    /// Number of channels physically read out, when narrower than the allocation.
    fn present_channel_count(&self) -> Option<u32> {
        None
    }

    /// Largest allocated id, `None` for an empty detector.
    fn max_channel(&self) -> Option<ChannelId> {
        self.channel_count().checked_sub(1)
    }

    fn max_present_channel(&self) -> Option<ChannelId> {
        self.present_channel_count().and_then(|count| count.checked_sub(1))
    }
}

/// In-memory geometry with fixed channel counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGeometry {
    pub channel_count: u32,
    pub present_channel_count: Option<u32>,
}

impl FixedGeometry {
    pub fn new(channel_count: u32) -> Self {
        Self {
            channel_count,
            present_channel_count: None,
        }
    }

    pub fn with_present(channel_count: u32, present_channel_count: u32) -> Self {
        Self {
            channel_count,
            present_channel_count: Some(present_channel_count),
        }
    }
}

impl ChannelGeometry for FixedGeometry {
    fn channel_count(&self) -> u32 {
        self.channel_count
    }

    fn present_channel_count(&self) -> Option<u32> {
        self.present_channel_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_channel_is_count_minus_one() {
        let geometry = FixedGeometry::with_present(10, 7);
        assert_eq!(geometry.max_channel(), Some(9));
        assert_eq!(geometry.max_present_channel(), Some(6));
    }

    #[test]
    fn empty_geometry_has_no_max_channel() {
        let geometry = FixedGeometry::new(0);
        assert_eq!(geometry.max_channel(), None);
        assert_eq!(geometry.max_present_channel(), None);
    }
}
