/// Flat buffer layout shared with the host.
/// Must stay in sync with the TypeScript reader.
///
/// Layout (all values f32):
/// ```text
/// [Header: 16 floats]
/// [SDF instances: max_sdf_instances × 12 floats]
/// [Shooting stars: max_stars × 6 floats]
/// [Events: max_events × 4 floats]
/// [Vector vertices: max_vector_vertices × 6 floats]
/// ```
///
/// Capacities are written into the header every frame next to the live
/// counts, so the host can compute section offsets without a handshake.

use crate::api::game::GameConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_WORLD_WIDTH: usize = 2;
pub const HEADER_WORLD_HEIGHT: usize = 3;
pub const HEADER_MAX_SDF_INSTANCES: usize = 4;
pub const HEADER_SDF_INSTANCE_COUNT: usize = 5;
pub const HEADER_MAX_STARS: usize = 6;
pub const HEADER_STAR_COUNT: usize = 7;
pub const HEADER_STAR_REVISION: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_MAX_VECTOR_VERTICES: usize = 11;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 12;
pub const HEADER_CLEAR_R: usize = 13;
pub const HEADER_CLEAR_G: usize = 14;
pub const HEADER_CLEAR_B: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Counters in the header wrap here: every value below 2^24 is exact in f32.
pub const COUNTER_WRAP: u64 = 1 << 24;

/// Encode a monotonically increasing counter so a polling host keeps seeing
/// it change.
pub fn encode_counter(value: u64) -> f32 {
    (value % COUNTER_WRAP) as f32
}

/// Floats per SDF instance (see `SDFInstance`).
pub const SDF_INSTANCE_FLOATS: usize = 12;

/// Floats per shooting star: id, left, top, duration, angle, age.
pub const STAR_FLOATS: usize = 6;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Floats per vector vertex: x, y, r, g, b, a.
pub const VECTOR_VERTEX_FLOATS: usize = 6;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_sdf_instances: usize,
    pub max_stars: usize,
    pub max_events: usize,
    pub max_vector_vertices: usize,

    pub sdf_data_floats: usize,
    pub star_data_floats: usize,
    pub event_data_floats: usize,
    pub vector_data_floats: usize,

    pub sdf_data_offset: usize,
    pub star_data_offset: usize,
    pub event_data_offset: usize,
    pub vector_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_sdf_instances: usize,
        max_stars: usize,
        max_events: usize,
        max_vector_vertices: usize,
    ) -> Self {
        let sdf_data_floats = max_sdf_instances * SDF_INSTANCE_FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;
        let vector_data_floats = max_vector_vertices * VECTOR_VERTEX_FLOATS;

        let sdf_data_offset = HEADER_FLOATS;
        let star_data_offset = sdf_data_offset + sdf_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;
        let vector_data_offset = event_data_offset + event_data_floats;

        let buffer_total_floats = vector_data_offset + vector_data_floats;

        Self {
            max_sdf_instances,
            max_stars,
            max_events,
            max_vector_vertices,
            sdf_data_floats,
            star_data_floats,
            event_data_floats,
            vector_data_floats,
            sdf_data_offset,
            star_data_offset,
            event_data_offset,
            vector_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Compute layout from a GameConfig.
    pub fn from_config(config: &GameConfig) -> Self {
        #[cfg(feature = "vectors")]
        let max_vector_vertices = config.max_vector_vertices;
        #[cfg(not(feature = "vectors"))]
        let max_vector_vertices = 0;

        Self::new(
            config.max_sdf_instances,
            config.max_stars,
            config.max_events,
            max_vector_vertices,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::sdf_instance::SDFInstance;
    use crate::systems::shooting_stars::ShootingStar;
    use crate::api::types::GameEvent;

    #[test]
    fn record_sizes_match_wire_constants() {
        assert_eq!(SDFInstance::FLOATS, SDF_INSTANCE_FLOATS);
        assert_eq!(ShootingStar::FLOATS, STAR_FLOATS);
        assert_eq!(GameEvent::FLOATS, EVENT_FLOATS);
        #[cfg(feature = "vectors")]
        assert_eq!(crate::systems::vector::VectorVertex::FLOATS, VECTOR_VERTEX_FLOATS);
    }

    #[test]
    fn counters_wrap_before_losing_precision() {
        assert_eq!(encode_counter(0), 0.0);
        assert_eq!(encode_counter(COUNTER_WRAP - 1), 16_777_215.0);
        assert_eq!(encode_counter(COUNTER_WRAP), 0.0);
        assert_eq!(encode_counter(COUNTER_WRAP + 5), 5.0);
        // Consecutive values past the wrap stay distinct
        assert_ne!(encode_counter(3 * COUNTER_WRAP + 1), encode_counter(3 * COUNTER_WRAP + 2));
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(32, 4, 8, 1000);

        assert_eq!(layout.sdf_data_floats, 32 * 12);
        assert_eq!(layout.star_data_floats, 4 * 6);
        assert_eq!(layout.event_data_floats, 8 * 4);
        assert_eq!(layout.vector_data_floats, 1000 * 6);

        let expected_total = HEADER_FLOATS + 32 * 12 + 4 * 6 + 8 * 4 + 1000 * 6;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 3, 5, 7);

        assert_eq!(layout.sdf_data_offset, HEADER_FLOATS);
        assert_eq!(layout.star_data_offset, layout.sdf_data_offset + layout.sdf_data_floats);
        assert_eq!(layout.event_data_offset, layout.star_data_offset + layout.star_data_floats);
        assert_eq!(layout.vector_data_offset, layout.event_data_offset + layout.event_data_floats);
        assert_eq!(layout.buffer_total_floats, layout.vector_data_offset + layout.vector_data_floats);
    }

    #[test]
    fn from_default_config_uses_config_capacities() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        assert_eq!(layout.max_sdf_instances, config.max_sdf_instances);
        assert_eq!(layout.max_stars, config.max_stars);
        assert_eq!(layout.max_events, config.max_events);
    }
}
