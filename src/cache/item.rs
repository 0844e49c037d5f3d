//! Per-cell render record held by the viewport cache.

use crate::model::{CellId, Point, Rect};
use crate::render::{GuiContext, Surface};
use crate::view::{Layout, LayoutInfo, View};
use std::fmt;
use std::rc::Rc;

/// A view bound to a cache item, with the layout that places it.
#[derive(Clone)]
pub struct CacheView {
    view: Rc<dyn View>,
    layout: Layout,
}

impl CacheView {
    /// Bind a view to its layout.
    pub fn new(view: Rc<dyn View>, layout: Layout) -> Self {
        Self { view, layout }
    }

    /// The bound view.
    pub fn view(&self) -> &Rc<dyn View> {
        &self.view
    }

    /// Layout placing the view inside the cell.
    pub fn layout(&self) -> Layout {
        self.layout
    }
}

impl fmt::Debug for CacheView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheView")
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

/// Cached render state of one visible cell.
///
/// The rectangle is in host coordinates and stays correct as long as the
/// owning cache translates it on every scroll. View rectangles are computed
/// lazily on draw and dropped by [`invalidate_cache_view`], which is what
/// "content stale" means for an item.
///
/// [`invalidate_cache_view`]: CacheItem::invalidate_cache_view
#[derive(Debug, Clone)]
pub struct CacheItem {
    id: CellId,
    absolute: CellId,
    rect: Rect,
    views: Vec<CacheView>,
    view_rects: Option<Vec<Rect>>,
}

impl CacheItem {
    /// New item for visible cell `id` (absolute `absolute`) covering `rect`.
    ///
    /// Content starts stale.
    pub fn new(id: CellId, absolute: CellId, rect: Rect, views: Vec<CacheView>) -> Self {
        Self {
            id,
            absolute,
            rect,
            views,
            view_rects: None,
        }
    }

    /// Visible cell id.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Absolute cell id, what views are asked about.
    pub fn absolute(&self) -> CellId {
        self.absolute
    }

    /// Cell rectangle in host coordinates.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Views bound to the cell, in drawing order.
    pub fn views(&self) -> &[CacheView] {
        &self.views
    }

    /// Rectangles assigned to each view, if the content is valid.
    pub fn view_rects(&self) -> Option<&[Rect]> {
        self.view_rects.as_deref()
    }

    /// True if view rectangles are up to date.
    pub fn is_content_valid(&self) -> bool {
        self.view_rects.is_some()
    }

    /// Shift the cell and every cached view rectangle by `delta`.
    pub fn correct_rectangles(&mut self, delta: Point) {
        if delta.is_zero() {
            return;
        }
        self.rect.translate(delta);
        if let Some(rects) = &mut self.view_rects {
            rects.iter_mut().for_each(|rect| rect.translate(delta));
        }
    }

    /// Mark the content stale; the next draw lays the views out again.
    pub fn invalidate_cache_view(&mut self) {
        self.view_rects = None;
    }

    /// Replace the bound views. Content becomes stale.
    pub fn set_views(&mut self, views: Vec<CacheView>) {
        self.views = views;
        self.invalidate_cache_view();
    }

    fn ensure_layout(&mut self, ctx: &GuiContext) -> &[Rect] {
        let absolute = self.absolute;
        let rect = self.rect;
        let views = &self.views;
        self.view_rects.get_or_insert_with(|| {
            let mut info = LayoutInfo::new(rect);
            views
                .iter()
                .map(|bound| {
                    bound
                        .layout
                        .do_layout(bound.view.size(ctx, absolute), &mut info);
                    info.view_rect
                })
                .collect()
        })
    }

    /// Paint every bound view, clipped to the cell and to `clip`.
    pub fn draw(&mut self, surface: &mut dyn Surface, ctx: &GuiContext, clip: Rect) {
        let clip = self.rect.intersection(&clip);
        if clip.is_empty() {
            return;
        }
        self.ensure_layout(ctx);
        let Some(rects) = &self.view_rects else {
            return;
        };
        surface.set_clip(Some(clip));
        for (bound, rect) in self.views.iter().zip(rects) {
            if !rect.is_empty() {
                bound.view.draw(surface, ctx, self.absolute, *rect);
            }
        }
        surface.set_clip(None);
    }

    /// Topmost view whose rectangle contains `point`, with that rectangle.
    pub fn view_at(&mut self, ctx: &GuiContext, point: Point) -> Option<(Rc<dyn View>, Rect)> {
        let rects = self.ensure_layout(ctx).to_vec();
        self.views
            .iter()
            .zip(rects)
            .rev()
            .find(|(_, rect)| rect.contains(point))
            .map(|(bound, rect)| (Rc::clone(&bound.view), rect))
    }
}
