// SPDX-License-Identifier: GPL-3.0-or-later
// tests/selection_scenarios.rs
//
// End-to-end gestures driven through the public Cropper API.

use std::cell::RefCell;
use std::rc::Rc;

use cropframe::{
    CropError, CropEvent, Cropper, CropperConfig, CursorHint, DragMode, EventFilter, EventKind,
    InputEvent, InteractionState, KeyCode, KeyEvent, Point, PointerEvent, Rectangle, SurfaceSize,
};

fn cropper(ratio: &str) -> Cropper {
    let config = CropperConfig {
        aspect_ratio: ratio.to_string(),
        minimum_width: 50.0,
        ..Default::default()
    };
    Cropper::new(SurfaceSize::new(400.0, 400.0), config).unwrap()
}

fn drag(cropper: &mut Cropper, from: (f32, f32), to: (f32, f32)) {
    cropper.handle_event(PointerEvent::down(from.0, from.1));
    cropper.handle_event(PointerEvent::moved(to.0, to.1));
    cropper.handle_event(PointerEvent::up(to.0, to.1));
}

fn record(cropper: &mut Cropper, filter: EventFilter) -> Rc<RefCell<Vec<CropEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    cropper.subscribe(filter, move |event| sink.borrow_mut().push(event.clone()));
    events
}

fn kinds(events: &Rc<RefCell<Vec<CropEvent>>>) -> Vec<EventKind> {
    events.borrow().iter().map(CropEvent::kind).collect()
}

#[test]
fn small_drag_is_enlarged_to_minimum_width() {
    let mut c = cropper("1:1");
    drag(&mut c, (100.0, 100.0), (130.0, 110.0));

    let region = c.region();
    assert_eq!(region.width(), 50.0);
    assert_eq!(region.height(), 50.0);
    assert_eq!(region.fixed_coord(), Some(Point::new(100.0, 100.0)));
}

#[test]
fn south_east_handle_grows_from_fixed_corner() {
    let mut c = cropper("1:1");
    drag(&mut c, (100.0, 100.0), (150.0, 150.0));
    assert_eq!(
        c.region().bounds(),
        Some(Rectangle::new(100.0, 100.0, 150.0, 150.0))
    );

    c.handle_event(PointerEvent::down(145.0, 145.0));
    assert_eq!(
        c.state(),
        InteractionState::Dragging(DragMode::ResizingFromHandle(cropframe::Corner::SouthEast))
    );
    c.handle_event(PointerEvent::moved(300.0, 300.0));
    c.handle_event(PointerEvent::up(300.0, 300.0));

    let region = c.region();
    assert_eq!(region.fixed_coord(), Some(Point::new(100.0, 100.0)));
    assert_eq!(region.loose_coord(), Some(Point::new(300.0, 300.0)));
    assert_eq!((region.width(), region.height()), (200.0, 200.0));
}

#[test]
fn wide_ratio_derives_height() {
    let mut c = cropper("16:9");
    drag(&mut c, (0.0, 0.0), (160.0, 90.0));

    assert_eq!(c.region().width(), 160.0);
    assert_eq!(c.region().height(), 90.0);
}

#[test]
fn move_recenters_and_keeps_size() {
    let mut c = cropper("1:1");
    drag(&mut c, (10.0, 10.0), (60.0, 60.0));

    c.handle_event(PointerEvent::down(30.0, 30.0));
    assert_eq!(c.state(), InteractionState::Dragging(DragMode::Moving));
    c.handle_event(PointerEvent::moved(100.0, 100.0));

    assert_eq!(c.region().fixed_coord(), Some(Point::new(75.0, 75.0)));
    assert_eq!(c.region().loose_coord(), Some(Point::new(125.0, 125.0)));
}

#[test]
fn ratio_holds_through_a_gesture() {
    let mut c = cropper("3:2");
    c.handle_event(PointerEvent::down(200.0, 200.0));

    for (x, y) in [(260.0, 230.0), (120.0, 90.0), (390.0, 10.0), (201.0, 399.0)] {
        c.handle_event(PointerEvent::moved(x, y));
        let region = c.region();
        let expected = region.width().abs() * (2.0 / 3.0);
        assert!((region.height().abs() - expected).abs() < 1e-3);
    }
}

#[test]
fn drag_past_right_edge_shifts_selection() {
    let mut c = cropper("1:1");
    drag(&mut c, (350.0, 100.0), (450.0, 120.0));

    assert_eq!(
        c.region().bounds(),
        Some(Rectangle::new(100.0, 300.0, 200.0, 400.0))
    );
}

#[test]
fn commit_publishes_lifecycle_in_order() {
    let mut c = cropper("1:1");
    let events = record(&mut c, EventFilter::All);

    drag(&mut c, (10.0, 10.0), (60.0, 60.0));

    assert_eq!(
        kinds(&events),
        vec![
            EventKind::DrawSelectionTool,
            EventKind::DrawSelectionTool,
            EventKind::BeforeSelection,
            EventKind::Selection,
            EventKind::DrawSelectionTool,
            EventKind::AfterSelection,
            EventKind::DrawHandle,
            EventKind::DrawHandle,
            EventKind::DrawHandle,
            EventKind::DrawHandle,
        ]
    );

    let selection = events.borrow().iter().find_map(|event| match event {
        CropEvent::Selection(dimensions) => Some(*dimensions),
        _ => None,
    });
    assert_eq!(
        selection.map(|d| d.bounds()),
        Some(Rectangle::new(10.0, 10.0, 60.0, 60.0))
    );
}

#[test]
fn unchanged_gesture_publishes_nothing() {
    let mut c = cropper("1:1");
    drag(&mut c, (10.0, 10.0), (60.0, 60.0));

    let events = record(&mut c, EventFilter::only(EventKind::Selection));
    c.handle_event(PointerEvent::down(30.0, 30.0));
    c.handle_event(PointerEvent::up(30.0, 30.0));

    assert!(events.borrow().is_empty());
}

#[test]
fn identical_selection_after_clear_is_published_again() {
    let mut c = cropper("1:1");
    drag(&mut c, (10.0, 10.0), (60.0, 60.0));
    let events = record(&mut c, EventFilter::Kinds(vec![
        EventKind::ClearSelection,
        EventKind::Selection,
    ]));

    c.handle_event(KeyEvent::down(KeyCode::Escape));
    c.handle_event(KeyEvent::up(KeyCode::Escape));
    drag(&mut c, (10.0, 10.0), (60.0, 60.0));

    assert_eq!(
        kinds(&events),
        vec![EventKind::ClearSelection, EventKind::Selection]
    );
}

#[test]
fn clicking_a_handle_without_moving_publishes_nothing() {
    let mut c = cropper("1:1");
    drag(&mut c, (100.0, 100.0), (200.0, 200.0));
    let bounds = c.region().bounds();

    for (x, y) in [(105.0, 105.0), (195.0, 105.0), (105.0, 195.0), (195.0, 195.0)] {
        let events = record(&mut c, EventFilter::Kinds(vec![
            EventKind::DrawSelectionTool,
            EventKind::Selection,
            EventKind::DrawHandle,
        ]));
        c.handle_event(PointerEvent::down(x, y));
        c.handle_event(PointerEvent::up(x, y));

        assert!(events.borrow().is_empty(), "({x}, {y}) published {:?}", kinds(&events));
        assert_eq!(c.region().bounds(), bounds);
    }
}

#[test]
fn new_press_discards_unfinished_drag() {
    let mut c = cropper("1:1");
    c.handle_event(PointerEvent::down(10.0, 10.0));
    c.handle_event(PointerEvent::moved(110.0, 110.0));

    // Inside the uncommitted rectangle: the second press moves it.
    c.handle_event(PointerEvent::down(60.0, 60.0));
    assert_eq!(c.state(), InteractionState::Dragging(DragMode::Moving));

    let draws = record(&mut c, EventFilter::only(EventKind::DrawSelectionTool));
    c.handle_event(PointerEvent::moved(200.0, 200.0));
    assert_eq!(draws.borrow().len(), 1);
    assert_eq!(c.region().fixed_coord(), Some(Point::new(150.0, 150.0)));
    assert_eq!(c.region().width(), 100.0);

    // Outside it: a new selection is started.
    c.handle_event(PointerEvent::down(20.0, 20.0));
    assert_eq!(c.state(), InteractionState::Dragging(DragMode::Creating));
    assert_eq!(c.region().fixed_coord(), Some(Point::new(20.0, 20.0)));
    assert_eq!(c.controller().binding().replaced_drags(), 2);
}

#[test]
fn handle_size_changes_redraw_placed_handles() {
    let mut c = cropper("1:1");
    drag(&mut c, (100.0, 100.0), (200.0, 200.0));
    let events = record(&mut c, EventFilter::only(EventKind::DrawHandle));

    c.set_handle_width(24.0).unwrap();
    c.set_handle_offset(-12.0).unwrap();

    assert_eq!(events.borrow().len(), 8);
    let last = events.borrow().last().cloned();
    match last {
        Some(CropEvent::DrawHandle(draw)) => {
            assert_eq!(draw.corner, cropframe::Corner::SouthEast);
            assert_eq!((draw.width, draw.height), (24.0, 24.0));
            assert_eq!((draw.top, draw.left), (188.0, 188.0));
        }
        other => panic!("unexpected event {other:?}"),
    }
    // Centered box now reaches outside the selection.
    c.handle_event(PointerEvent::down(205.0, 205.0));
    assert_eq!(
        c.state(),
        InteractionState::Dragging(DragMode::ResizingFromHandle(cropframe::Corner::SouthEast))
    );

    assert!(c.set_handle_width(0.0).is_err());
    assert!(c.set_handle_offset(f32::NAN).is_err());
    assert_eq!(c.config().handle_width, 24.0);
    assert_eq!(c.config().handle_offset, -12.0);
}

#[test]
fn escape_resets_cursor() {
    let mut c = cropper("1:1");
    drag(&mut c, (100.0, 100.0), (200.0, 200.0));
    c.handle_event(PointerEvent::moved(150.0, 150.0));
    let events = record(&mut c, EventFilter::only(EventKind::CursorChanged));

    c.handle_event(KeyEvent::down(KeyCode::Escape));

    assert_eq!(c.controller().cursor(), CursorHint::Crosshair);
    assert_eq!(
        *events.borrow(),
        vec![CropEvent::CursorChanged(CursorHint::Crosshair)]
    );
}

#[test]
fn handles_only_exist_after_commit() {
    let mut c = cropper("1:1");
    c.handle_event(PointerEvent::down(100.0, 100.0));
    c.handle_event(PointerEvent::moved(200.0, 200.0));
    assert!(!c.region().handles().is_placed());

    c.handle_event(PointerEvent::up(200.0, 200.0));
    assert!(c.region().handles().is_placed());
}

#[test]
fn cursor_changes_are_published_once() {
    let mut c = cropper("1:1");
    drag(&mut c, (100.0, 100.0), (200.0, 200.0));
    let events = record(&mut c, EventFilter::only(EventKind::CursorChanged));

    c.handle_event(PointerEvent::moved(150.0, 150.0));
    c.handle_event(PointerEvent::moved(151.0, 151.0));
    c.handle_event(PointerEvent::moved(105.0, 105.0));

    assert_eq!(
        *events.borrow(),
        vec![
            CropEvent::CursorChanged(CursorHint::Move),
            CropEvent::CursorChanged(CursorHint::ResizeNwse),
        ]
    );
}

#[test]
fn aspect_ratio_change_redraws_active_selection() {
    let mut c = cropper("1:1");
    drag(&mut c, (0.0, 0.0), (160.0, 160.0));

    c.set_aspect_ratio("16:9").unwrap();

    assert_eq!(c.region().width(), 160.0);
    assert_eq!(c.region().height(), 90.0);
    assert_eq!(c.config().aspect_ratio, "16:9");
}

#[test]
fn invalid_aspect_ratio_is_rejected() {
    let config = CropperConfig {
        aspect_ratio: "16-9".into(),
        ..Default::default()
    };
    let err = Cropper::new(SurfaceSize::new(400.0, 400.0), config).unwrap_err();
    assert!(matches!(err, CropError::InvalidAspectRatio { .. }));

    let mut c = cropper("1:1");
    assert!(c.set_aspect_ratio("0:1").is_err());
    assert_eq!(c.config().aspect_ratio, "1:1");
}

#[test]
fn destroy_stops_input_and_events() {
    let mut c = cropper("1:1");
    let events = record(&mut c, EventFilter::All);

    c.destroy();
    drag(&mut c, (10.0, 10.0), (60.0, 60.0));
    c.handle_event(InputEvent::Blur);

    assert!(!c.region().is_active());
    assert!(events.borrow().is_empty());
}

#[test]
fn unsubscribed_handler_is_not_called() {
    let mut c = cropper("1:1");
    let events = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&events);
    let id = c.subscribe(EventFilter::All, move |_| *sink.borrow_mut() += 1);

    assert!(c.unsubscribe(id));
    drag(&mut c, (10.0, 10.0), (60.0, 60.0));

    assert_eq!(*events.borrow(), 0);
}
