use serde_json::{Value, json};
use tilegroup_test_support::fixtures::{WARRANTY_TIERS, warranty_catalog, warranty_context};
use tilegroup_test_support::notify::NotificationCounter;
use tilegroup_test_support::surface::{RecordingSurface, SurfaceHandle};
use tilegroup_ui::{OptionValue, SelectionController, StandardControl, TileGroupView};

enum Step {
    Key(&'static str),
    Click(Option<&'static str>),
    Host(Value),
}

fn assert_consistent(view: &TileGroupView, selected: Option<OptionValue>) {
    let checked: Vec<_> = view.checked_tiles().map(|t| t.value).collect();
    assert!(checked.len() <= 1, "more than one tile checked: {checked:?}");
    if let Some(value) = checked.first() {
        assert_eq!(Some(*value), selected);
    }
    assert_eq!(view.tiles.iter().filter(|t| t.focusable).count(), 1);
}

fn run(steps: &[Step]) -> (SelectionController<RecordingSurface>, SurfaceHandle, NotificationCounter) {
    let (surface, screen) = RecordingSurface::with_handle();
    let controller = SelectionController::new(surface);
    let counter = NotificationCounter::new();
    controller.init(&warranty_context(&Value::Null), counter.notifier());
    for step in steps {
        match step {
            Step::Key(key) => {
                controller.handle_key(key);
            }
            Step::Click(value) => {
                controller.handle_pointer(*value);
            }
            Step::Host(raw) => controller.update_view(&warranty_context(raw)),
        }
        if let Some(view) = screen.current() {
            assert_consistent(&view, controller.current_output());
        }
        assert_eq!(controller.view(), controller.view());
    }
    (controller, screen, counter)
}

#[test]
fn mixed_input_never_breaks_the_checked_invariant() {
    let steps = [
        Step::Key("ArrowLeft"),
        Step::Click(Some("2")),
        Step::Host(json!(99)),
        Step::Key("ArrowDown"),
        Step::Key(" "),
        Step::Host(json!("bogus")),
        Step::Key("Enter"),
        Step::Click(None),
        Step::Key("ArrowUp"),
        Step::Host(json!(2)),
        Step::Click(Some("Infinity")),
        Step::Key("ArrowRight"),
    ];
    let (controller, _, _) = run(&steps);
    assert_eq!(controller.current_output(), Some(OptionValue::new(3)));
}

#[test]
fn next_from_every_index_selects_successor() {
    let catalog = warranty_catalog();
    let total = catalog.len();
    for (index, option) in catalog.iter().enumerate() {
        let (controller, screen, counter) = run(&[Step::Host(json!(option.value.get()))]);
        assert_eq!(controller.focus_index(), index);
        controller.handle_key("ArrowRight");
        let expected = catalog.get((index + 1) % total).map(|o| o.value);
        assert_eq!(controller.current_output(), expected);
        assert_eq!(screen.last_focus(), expected);
        assert_eq!(counter.count(), 1);
    }
}

#[test]
fn previous_from_first_wraps_to_last() {
    let (controller, _, counter) = run(&[Step::Host(json!(WARRANTY_TIERS[0].1))]);
    controller.handle_key("ArrowLeft");
    let last = WARRANTY_TIERS[WARRANTY_TIERS.len() - 1].1;
    assert_eq!(controller.current_output(), Some(OptionValue::new(last)));
    assert_eq!(counter.count(), 1);
}

#[test]
fn navigation_from_unknown_value_starts_at_first_tile() {
    let (controller, _, _) = run(&[Step::Host(json!(42))]);
    assert_eq!(controller.focus_index(), 0);
    controller.handle_key("ArrowRight");
    assert_eq!(controller.current_output(), Some(OptionValue::new(2)));
}

#[test]
fn activation_on_selected_tile_is_silent() {
    let (controller, screen, counter) = run(&[Step::Click(Some("3"))]);
    let painted = screen.paint_count();
    controller.handle_key("Enter");
    controller.handle_key(" ");
    assert_eq!(counter.count(), 1);
    assert_eq!(screen.paint_count(), painted);
    assert_eq!(screen.last_focus(), Some(OptionValue::new(3)));
}
