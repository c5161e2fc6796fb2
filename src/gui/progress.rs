// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Loading…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, source: &str) {
        self.done += 1;
        self.set_status(format!("Loaded {} ({}/{})", source, self.done, self.total));
    }
    fn item_failed(&mut self, source: &str) {
        self.failed += 1;
        self.set_status(format!("Could not load {}", source));
    }
    fn finish(&mut self) {
        if self.failed > 0 {
            self.set_status(format!("Loaded {}/{} sources ({} failed)", self.done, self.total, self.failed));
        } else {
            self.set_status(format!("Ready ({}/{})", self.done, self.total));
        }
    }
}
