// tests/chart_registry.rs
use std::cell::RefCell;
use std::rc::Rc;

use race_stats::chart::{render, ChartData, ChartHandle, ChartKind, ChartRegistry};
use race_stats::stats::Series;

struct Probe {
    id: u32,
    disposed: Rc<RefCell<Vec<u32>>>,
}

impl ChartHandle for Probe {
    fn dispose(&mut self) {
        self.disposed.borrow_mut().push(self.id);
    }
}

#[test]
fn replace_disposes_previous_handle_exactly_once() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let probe = |id| Probe { id, disposed: log.clone() };

    let mut reg = ChartRegistry::new();
    reg.replace("times", probe(1));
    assert!(log.borrow().is_empty());

    reg.replace("times", probe(2));
    reg.replace("times", probe(3));
    reg.replace("gender", probe(10));
    assert_eq!(*log.borrow(), [1, 2]);
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.get("times").map(|p| p.id), Some(3));

    assert!(reg.remove("gender"));
    assert!(!reg.remove("gender"));
    assert_eq!(*log.borrow(), [1, 2, 10]);

    drop(reg);
    assert_eq!(*log.borrow(), [1, 2, 10, 3]);
}

#[test]
fn retain_disposes_dropped_canvases() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut reg = ChartRegistry::new();
    reg.replace("a", Probe { id: 1, disposed: log.clone() });
    reg.replace("b", Probe { id: 2, disposed: log.clone() });
    reg.retain(|canvas| canvas == "b");
    assert_eq!(*log.borrow(), [1]);
    assert!(reg.contains("b"));
    assert!(!reg.contains("a"));
}

#[test]
fn chart_data_from_series_renders_to_canvas() {
    let data = ChartData::from_series("By distance", &[Series::new("1K", 3), Series::new("5K", 7)]);
    assert_eq!(data.labels, ["1K", "5K"]);
    assert_eq!(data.max_value(), 7.0);
    assert!(!data.is_empty());

    let img = render(&data, ChartKind::Bar, 320, 160);
    assert_eq!(img.dimensions(), (320, 160));
    let line = render(&data, ChartKind::Line, 320, 160);
    assert_ne!(img.as_raw(), line.as_raw());
}

#[test]
fn empty_chart_data() {
    let data = ChartData::from_series("Nothing", &[]);
    assert!(data.is_empty());
    assert_eq!(data.max_value(), 0.0);
}
