//! Bitwise style flags applied to runs of tokens by Markdown markers.
//!
//! Modeled on the sibling `TokenFlags` bitflags newtype used elsewhere in the
//! markdown token representation this crate is descended from.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Format: u16 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKE = 1 << 3;
        const MONOSPACE = 1 << 4;
        const HEADING = 1 << 5;
        const MARKED = 1 << 6;
        const HIGHLIGHT = 1 << 7;
        const LINK_LABEL = 1 << 8;
        const LINK = 1 << 9;
    }
}

impl Format {
    /// The format bit a Markdown marker character toggles, or `None` if the
    /// character isn't a recognized marker.
    pub fn for_marker(marker: char) -> Option<Format> {
        match marker {
            '*' => Some(Format::BOLD),
            '_' => Some(Format::ITALIC),
            '~' => Some(Format::STRIKE),
            '`' => Some(Format::MONOSPACE),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_map_to_distinct_bits() {
        assert_eq!(Format::for_marker('*'), Some(Format::BOLD));
        assert_eq!(Format::for_marker('_'), Some(Format::ITALIC));
        assert_eq!(Format::for_marker('~'), Some(Format::STRIKE));
        assert_eq!(Format::for_marker('`'), Some(Format::MONOSPACE));
        assert_eq!(Format::for_marker('#'), None);
    }

    #[test]
    fn flags_combine() {
        let both = Format::BOLD | Format::ITALIC;
        assert!(both.contains(Format::BOLD));
        assert!(both.contains(Format::ITALIC));
        assert!(!both.contains(Format::STRIKE));
    }
}
