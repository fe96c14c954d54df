//! Bit flags steering text-object selectors: which direction to extend, and
//! whether to exclude surrounding delimiters/whitespace.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Extend the selection leftward to the object's start.
        const TO_BEGIN = 0b001;
        /// Extend the selection rightward to the object's end.
        const TO_END   = 0b010;
        /// Exclude surrounding delimiters/whitespace.
        const INNER    = 0b100;
    }
}

impl ObjectFlags {
    pub const WHOLE: Self = Self::TO_BEGIN.union(Self::TO_END);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_object_combines_both_directions() {
        let f = ObjectFlags::WHOLE;
        assert!(f.contains(ObjectFlags::TO_BEGIN));
        assert!(f.contains(ObjectFlags::TO_END));
        assert!(!f.contains(ObjectFlags::INNER));
    }

    #[test]
    fn intersects_detects_any_direction() {
        let f = ObjectFlags::TO_END | ObjectFlags::INNER;
        assert!(f.intersects(ObjectFlags::TO_BEGIN | ObjectFlags::TO_END));
        assert!(!(ObjectFlags::INNER).intersects(ObjectFlags::TO_BEGIN | ObjectFlags::TO_END));
    }
}
