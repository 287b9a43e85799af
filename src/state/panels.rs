/// Overlay panels in the order they were opened, oldest first.
/// Re-pushing a panel moves it to the top, so the last entry is always the
/// most recently opened one.
#[derive(Clone, Debug)]
pub struct PanelStack<N> {
    order: Vec<N>,
}

impl<N> Default for PanelStack<N> {
    fn default() -> Self {
        Self { order: Vec::new() }
    }
}

impl<N: Clone + PartialEq> PanelStack<N> {
    pub fn push(&mut self, panel: N) {
        self.order.retain(|p| *p != panel);
        self.order.push(panel);
    }

    /// Records a panel whose opening was never observed, below every known one.
    pub fn push_oldest(&mut self, panel: N) {
        if !self.order.contains(&panel) {
            self.order.insert(0, panel);
        }
    }

    pub fn remove(&mut self, panel: &N) -> bool {
        let before = self.order.len();
        self.order.retain(|p| p != panel);
        before != self.order.len()
    }

    pub fn contains(&self, panel: &N) -> bool {
        self.order.contains(panel)
    }

    /// Most recently opened first.
    pub fn recent_first(&self) -> impl Iterator<Item = &N> {
        self.order.iter().rev()
    }
}
