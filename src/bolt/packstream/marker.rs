//! PackStream structure tags.
//!
//! Decoded Bolt values arrive as tagged structures. The tag identifies the
//! graph, temporal or spatial type carried in the structure fields.

/// Structure tags for graph types
pub const NODE_TAG: u8 = 0x4E; // 'N'
pub const RELATIONSHIP_TAG: u8 = 0x52; // 'R'
pub const UNBOUND_RELATIONSHIP_TAG: u8 = 0x72; // 'r'
pub const PATH_TAG: u8 = 0x50; // 'P'

/// Structure tags for temporal types
pub const DATE_TAG: u8 = 0x44; // 'D'
pub const TIME_TAG: u8 = 0x54; // 'T'
pub const LOCAL_TIME_TAG: u8 = 0x74; // 't'
pub const DATE_TIME_TAG: u8 = 0x46; // 'F' (with offset)
pub const DATE_TIME_ZONE_TAG: u8 = 0x66; // 'f' (with zone name)
pub const LOCAL_DATE_TIME_TAG: u8 = 0x64; // 'd'
pub const DURATION_TAG: u8 = 0x45; // 'E'

/// Structure tags for spatial types
pub const POINT_2D_TAG: u8 = 0x58; // 'X'
pub const POINT_3D_TAG: u8 = 0x59; // 'Y'

/// Human readable name of a structure tag, for diagnostics.
pub fn structure_name(tag: u8) -> &'static str {
    match tag {
        NODE_TAG => "Node",
        RELATIONSHIP_TAG => "Relationship",
        UNBOUND_RELATIONSHIP_TAG => "UnboundRelationship",
        PATH_TAG => "Path",
        DATE_TAG => "Date",
        TIME_TAG => "Time",
        LOCAL_TIME_TAG => "LocalTime",
        DATE_TIME_TAG | DATE_TIME_ZONE_TAG => "DateTime",
        LOCAL_DATE_TIME_TAG => "LocalDateTime",
        DURATION_TAG => "Duration",
        POINT_2D_TAG | POINT_3D_TAG => "Point",
        _ => "Unknown",
    }
}
