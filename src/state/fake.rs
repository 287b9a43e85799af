//! In-memory document used by the unit tests.

use super::host::{Host, SurfaceTree};
use crate::model::{Origin, PointerPosition, Rect, TogglePresentation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Panel { open: bool },
    Content,
    Backdrop,
    Region,
    Plain,
}

#[derive(Clone, Debug)]
struct FakeNode {
    parent: Option<usize>,
    kind: Kind,
    rect: Rect,
    flagged: bool,
}

#[derive(Debug)]
pub struct FakeDoc {
    nodes: Vec<FakeNode>,
    pub lens: bool,
    pub active_marker: bool,
    pub pointer: Option<PointerPosition>,
    pub origin: Option<Origin>,
    pub origin_writes: usize,
    pub toggle: Option<TogglePresentation>,
    pub subscriptions: usize,
    pub subscribe_calls: usize,
}

impl Default for FakeDoc {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            lens: true,
            active_marker: false,
            pointer: None,
            origin: None,
            origin_writes: 0,
            toggle: None,
            subscriptions: 0,
            subscribe_calls: 0,
        }
    }
}

impl FakeDoc {
    pub fn add(&mut self, parent: Option<usize>, kind: Kind) -> usize {
        self.nodes.push(FakeNode {
            parent,
            kind,
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            flagged: false,
        });
        self.nodes.len() - 1
    }

    pub fn set_rect(&mut self, id: usize, rect: Rect) {
        self.nodes[id].rect = rect;
    }

    pub fn set_open(&mut self, id: usize, open: bool) {
        self.nodes[id].kind = Kind::Panel { open };
    }

    pub fn flagged(&self, id: usize) -> bool {
        self.nodes[id].flagged
    }

    pub fn flagged_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.flagged).count()
    }

    /// `id` and its ancestors, innermost first.
    fn lineage(&self, id: usize) -> Vec<usize> {
        let mut out = vec![id];
        let mut cursor = self.nodes[id].parent;
        while let Some(p) = cursor {
            out.push(p);
            cursor = self.nodes[p].parent;
        }
        out
    }
}

impl SurfaceTree for FakeDoc {
    type Node = usize;

    fn panel_ancestors(&self, hit: &usize) -> Vec<usize> {
        self.lineage(*hit)
            .into_iter()
            .filter(|id| matches!(self.nodes[*id].kind, Kind::Panel { .. }))
            .collect()
    }

    fn is_open(&self, panel: &usize) -> bool {
        matches!(self.nodes[*panel].kind, Kind::Panel { open: true })
    }

    fn content_region(&self, panel: &usize) -> Option<usize> {
        (0..self.nodes.len()).find(|id| {
            let inside = id != panel && self.lineage(*id).contains(panel);
            inside && self.nodes[*id].kind == Kind::Content
        })
    }

    fn in_backdrop(&self, hit: &usize) -> bool {
        self.lineage(*hit).iter().any(|id| self.nodes[*id].kind == Kind::Backdrop)
    }

    fn closest_zoom_region(&self, hit: &usize) -> Option<usize> {
        self.lineage(*hit).into_iter().find(|id| self.nodes[*id].kind == Kind::Region)
    }

    fn first_zoom_region(&self) -> Option<usize> {
        (0..self.nodes.len()).find(|id| self.nodes[*id].kind == Kind::Region)
    }

    fn bounds(&self, node: &usize) -> Rect {
        self.nodes[*node].rect
    }
}

impl Host for FakeDoc {
    fn panels(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|id| matches!(self.nodes[*id].kind, Kind::Panel { .. }))
            .collect()
    }

    fn set_panel_flag(&mut self, panel: &usize, flagged: bool) {
        self.nodes[*panel].flagged = flagged;
    }

    fn set_active_marker(&mut self, active: bool) {
        self.active_marker = active;
    }

    fn publish_pointer(&mut self, pointer: PointerPosition) {
        self.pointer = Some(pointer);
    }

    fn publish_origin(&mut self, origin: Origin) {
        self.origin = Some(origin);
        self.origin_writes += 1;
    }

    fn present_toggle(&mut self, presentation: &TogglePresentation) {
        self.toggle = Some(presentation.clone());
    }

    fn has_lens(&self) -> bool {
        self.lens
    }

    fn subscribe_pointer(&mut self) {
        self.subscriptions += 1;
        self.subscribe_calls += 1;
    }

    fn unsubscribe_pointer(&mut self) {
        self.subscriptions = self.subscriptions.saturating_sub(1);
    }
}
