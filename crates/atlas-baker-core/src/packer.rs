//! Leftmost-first skyline rectangle packer.
//!
//! Placement scans the skyline left to right and takes the first position
//! that fits, so free space fills column by column. Deterministic: the same
//! construction size and the same ordered sequence of successful placements
//! always produce the same coordinates. Rectangles are never reordered or
//! rotated here; insertion order is owned by the caller.

use crate::model::Rect;

#[derive(Clone, Copy, Debug)]
struct SkylineNode {
    x: u32,
    y: u32,
    w: u32,
}

impl SkylineNode {
    #[inline]
    fn left(&self) -> u32 {
        self.x
    }
    #[inline]
    fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
}

pub struct SkylinePacker {
    border: Rect,
    skylines: Vec<SkylineNode>,
}

impl SkylinePacker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            border: Rect::new(0, 0, width, height),
            skylines: vec![SkylineNode {
                x: 0,
                y: 0,
                w: width,
            }],
        }
    }

    pub fn width(&self) -> u32 {
        self.border.w
    }

    pub fn height(&self) -> u32 {
        self.border.h
    }

    fn can_put(&self, mut i: usize, w: u32, h: u32) -> Option<Rect> {
        let mut rect = Rect::new(self.skylines[i].x, 0, w, h);
        let mut width_left = rect.w;
        loop {
            rect.y = rect.y.max(self.skylines[i].y);
            if !self.border.contains(&rect) {
                return None;
            }
            if self.skylines[i].w >= width_left {
                return Some(rect);
            }
            width_left -= self.skylines[i].w;
            i += 1;
            if i >= self.skylines.len() {
                return None;
            }
        }
    }

    /// Leftmost valid position: the first skyline node, scanning left to
    /// right, whose span admits the rectangle.
    fn find_leftmost(&self, w: u32, h: u32) -> Option<(usize, Rect)> {
        for i in 0..self.skylines.len() {
            if let Some(r) = self.can_put(i, w, h) {
                return Some((i, r));
            }
        }
        None
    }

    fn split(&mut self, index: usize, rect: &Rect) {
        // When the placed rectangle touches the canvas bottom the new node's
        // y sits one past the last row; `can_put`'s border check rejects any
        // further placement there, which keeps filled columns unplaceable.
        let skyline = SkylineNode {
            x: rect.x,
            y: rect.bottom().saturating_add(1),
            w: rect.w,
        };
        debug_assert!(skyline.right() <= self.border.right());
        debug_assert!(skyline.y <= self.border.h);

        self.skylines.insert(index, skyline);

        let i = index + 1;
        while i < self.skylines.len() {
            if self.skylines[i - 1].left() <= self.skylines[i].left() {
                if self.skylines[i].left() <= self.skylines[i - 1].right() {
                    let shrink = self.skylines[i - 1].right() - self.skylines[i].left() + 1;
                    if self.skylines[i].w <= shrink {
                        self.skylines.remove(i);
                    } else {
                        self.skylines[i].x += shrink;
                        self.skylines[i].w -= shrink;
                        break;
                    }
                } else {
                    break;
                }
            } else {
                break;
            }
        }
    }

    fn merge(&mut self) {
        let mut i = 1;
        while i < self.skylines.len() {
            if self.skylines[i - 1].y == self.skylines[i].y {
                let w = self.skylines[i].w;
                self.skylines[i - 1].w = self.skylines[i - 1].w.saturating_add(w);
                self.skylines.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Attempts to place a `w x h` rectangle, returning its top-left corner.
    ///
    /// Returns `None` when no position exists at the current canvas size; a
    /// failed attempt does not mutate the occupancy state.
    pub fn try_place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        let (i, rect) = self.find_leftmost(w, h)?;
        self.split(i, &rect);
        self.merge();
        Some((rect.x, rect.y))
    }
}
