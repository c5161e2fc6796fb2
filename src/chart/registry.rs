// src/chart/registry.rs
//
// Live chart handles, keyed by canvas id. Redrawing a canvas goes through
// `replace`, which disposes the previous handle before the new one is
// installed, so a canvas never holds two charts.

use std::collections::HashMap;

/// Anything that owns rendering resources and must be released explicitly.
pub trait ChartHandle {
    fn dispose(&mut self);
}

pub struct ChartRegistry<H: ChartHandle> {
    handles: HashMap<String, H>,
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self { handles: HashMap::new() }
    }
}

impl<H: ChartHandle> ChartRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handle` for `canvas`, disposing whatever was there.
    pub fn replace(&mut self, canvas: &str, handle: H) {
        if let Some(mut old) = self.handles.remove(canvas) {
            old.dispose();
        }
        self.handles.insert(s!(canvas), handle);
    }

    pub fn get(&self, canvas: &str) -> Option<&H> {
        self.handles.get(canvas)
    }

    pub fn contains(&self, canvas: &str) -> bool {
        self.handles.contains_key(canvas)
    }

    /// Dispose and forget one canvas' chart.
    pub fn remove(&mut self, canvas: &str) -> bool {
        match self.handles.remove(canvas) {
            Some(mut old) => {
                old.dispose();
                true
            }
            None => false,
        }
    }

    /// Keep only canvases for which `keep` is true; the rest are disposed.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str) -> bool,
    {
        let dropped: Vec<String> = self.handles.keys().filter(|k| !keep(k)).cloned().collect();
        for k in dropped {
            self.remove(&k);
        }
    }

    /// Dispose every handle.
    pub fn clear(&mut self) {
        for (_, mut h) in self.handles.drain() {
            h.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<H: ChartHandle> Drop for ChartRegistry<H> {
    fn drop(&mut self) {
        self.clear();
    }
}
