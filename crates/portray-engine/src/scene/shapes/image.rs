use crate::coords::Rect;
use crate::bitmap::ImageId;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Image draw payload: the whole source image stretched onto `dest`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageId,
    pub dest: Rect,
}

impl DrawList {
    /// Records an image draw. Resolution against the image store happens at replay.
    #[inline]
    pub fn draw_image(&mut self, z: ZIndex, image: ImageId, dest: Rect) {
        self.push(z, DrawCmd::Image(ImageCmd { image, dest }));
    }
}
