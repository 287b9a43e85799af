use super::host::SurfaceTree;
use super::panels::PanelStack;

/// Which rule picked the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedBy {
    /// Pointer is over a flagged, open overlay panel.
    Panel,
    /// Pointer is over a backdrop; the topmost flagged panel is used.
    Backdrop,
    /// Pointer is inside a zoomable page region.
    Region,
    /// Pointer is elsewhere; the first zoomable region in the document is used.
    FirstRegion,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resolution<N> {
    pub surface: N,
    pub by: ResolvedBy,
}

type Rule<T> = fn(
    &T,
    &PanelStack<<T as SurfaceTree>::Node>,
    &<T as SurfaceTree>::Node,
) -> Option<<T as SurfaceTree>::Node>;

/// Picks the surface being magnified for a pointer over `hit`.
/// Rules are tried in priority order; the first match wins. `opened` lists the
/// open panels in opening order; while zoom is on each of them is a target.
pub fn resolve_target<T: SurfaceTree>(
    tree: &T,
    opened: &PanelStack<T::Node>,
    hit: Option<&T::Node>,
) -> Option<Resolution<T::Node>> {
    let hit = hit?;
    let rules: [(ResolvedBy, Rule<T>); 4] = [
        (ResolvedBy::Panel, from_panel::<T>),
        (ResolvedBy::Backdrop, from_backdrop::<T>),
        (ResolvedBy::Region, from_region::<T>),
        (ResolvedBy::FirstRegion, first_region::<T>),
    ];
    rules.iter().find_map(|(by, rule)| {
        rule(tree, opened, hit).map(|surface| Resolution { surface, by: *by })
    })
}

fn panel_surface<T: SurfaceTree>(tree: &T, panel: &T::Node) -> T::Node {
    tree.content_region(panel).unwrap_or_else(|| panel.clone())
}

fn from_panel<T: SurfaceTree>(
    tree: &T,
    opened: &PanelStack<T::Node>,
    hit: &T::Node,
) -> Option<T::Node> {
    tree.panel_ancestors(hit)
        .into_iter()
        .find(|p| opened.contains(p) && tree.is_open(p))
        .map(|p| panel_surface(tree, &p))
}

fn from_backdrop<T: SurfaceTree>(
    tree: &T,
    opened: &PanelStack<T::Node>,
    hit: &T::Node,
) -> Option<T::Node> {
    if !tree.in_backdrop(hit) {
        return None;
    }
    opened
        .recent_first()
        .find(|p| tree.is_open(p))
        .map(|p| panel_surface(tree, p))
}

fn from_region<T: SurfaceTree>(
    tree: &T,
    _: &PanelStack<T::Node>,
    hit: &T::Node,
) -> Option<T::Node> {
    tree.closest_zoom_region(hit)
}

fn first_region<T: SurfaceTree>(tree: &T, _: &PanelStack<T::Node>, _: &T::Node) -> Option<T::Node> {
    tree.first_zoom_region()
}
