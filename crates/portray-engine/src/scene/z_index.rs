/// Stacking level of a draw item; higher values paint on top.
///
/// The grid renderer paints data layer `n` at `ZIndex(n)`, the background at
/// [`ZIndex::BACKGROUND`] and grid lines at [`ZIndex::OVERLAY`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(i32::MIN);
    pub const OVERLAY: ZIndex = ZIndex(i32::MAX);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
