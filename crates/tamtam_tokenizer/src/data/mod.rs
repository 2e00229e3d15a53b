//! Static lookup tables, built once and shared read-only across parses, the
//! way the teacher's monorepo keeps its own static data (locale tables,
//! syntax maps) behind `lazy_static` statics rather than rebuilding per call.

pub mod emoji_ranges;
pub mod protocols;
pub mod text_emoji;
pub mod tld;
