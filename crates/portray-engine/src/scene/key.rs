use super::ZIndex;

/// Paint-order key: z-index first, then insertion order.
///
/// Field order matters; the derived `Ord` compares `z` before `order`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn z_wins_over_insertion_order() {
        let early_top = SortKey::new(ZIndex(1), 0);
        let late_bottom = SortKey::new(ZIndex(0), 5);
        assert!(late_bottom < early_top);
        assert!(SortKey::new(ZIndex(0), 1) < SortKey::new(ZIndex(0), 2));
    }
}
