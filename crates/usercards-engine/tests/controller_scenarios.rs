use std::time::Duration;

use usercards_engine::{ControllerState, DEFAULT_DEBOUNCE, EMPTY_MESSAGE, InputController};
use usercards_testing::{ManualClock, RecordingSurface};
use usercards_types::Directory;

fn setup() -> (InputController<RecordingSurface, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let controller = InputController::with_clock(
        Directory::built_in(),
        RecordingSurface::new(),
        clock.clone(),
        DEFAULT_DEBOUNCE,
    );
    (controller, clock)
}

fn type_and_settle(
    controller: &mut InputController<RecordingSurface, ManualClock>,
    clock: &ManualClock,
    text: &str,
) {
    controller.on_input(text);
    clock.advance(DEFAULT_DEBOUNCE);
    assert!(controller.poll());
}

#[test]
fn rapid_typing_coalesces_into_one_render() {
    let (mut controller, clock) = setup();
    assert_eq!(controller.surface().render_count(), 1);

    controller.on_input("a");
    clock.advance_ms(60);
    assert!(!controller.poll());
    controller.on_input("am");
    clock.advance_ms(60);
    assert!(!controller.poll());
    controller.on_input("ami");
    clock.advance_ms(179);
    assert!(!controller.poll());
    assert_eq!(controller.surface().render_count(), 1);

    clock.advance_ms(1);
    assert!(controller.poll());

    assert_eq!(controller.surface().render_count(), 2);
    assert_eq!(controller.last_rendered_query(), Some("ami"));
    assert_eq!(
        controller.surface().last_names(),
        vec!["amisha rathore", "amita mehta"]
    );

    // Nothing left armed.
    clock.advance(Duration::from_secs(5));
    assert!(!controller.poll());
    assert_eq!(controller.surface().render_count(), 2);
}

#[test]
fn spaced_out_typing_renders_each_query() {
    let (mut controller, clock) = setup();

    type_and_settle(&mut controller, &clock, "chaos");
    assert_eq!(
        controller.surface().last_names(),
        vec!["amisha rathore", "diya bansal"]
    );

    type_and_settle(&mut controller, &clock, "OJIN");
    assert_eq!(controller.surface().last_names(), vec!["Ojin Oklawa"]);

    type_and_settle(&mut controller, &clock, "");
    assert_eq!(controller.surface().last_names().len(), 7);

    assert_eq!(controller.surface().render_count(), 4);
}

#[test]
fn no_match_renders_only_the_empty_message() {
    let (mut controller, clock) = setup();

    type_and_settle(&mut controller, &clock, "zzz");

    let last = controller.surface().last().unwrap();
    assert_eq!(last.count_class("card"), 0);
    assert_eq!(last.text_content(), EMPTY_MESSAGE);
}

#[test]
fn query_state_updates_before_the_render() {
    let (mut controller, clock) = setup();

    controller.on_input("is");
    assert_eq!(controller.query(), "is");
    assert_eq!(controller.state(), ControllerState::Pending);
    assert_eq!(controller.last_rendered_query(), None);

    clock.advance(DEFAULT_DEBOUNCE);
    controller.poll();
    assert_eq!(controller.state(), ControllerState::Idle);
    assert_eq!(controller.last_rendered_query(), Some("is"));
}

#[test]
fn same_query_twice_renders_identical_trees() {
    let (mut controller, clock) = setup();

    type_and_settle(&mut controller, &clock, "vibe");
    type_and_settle(&mut controller, &clock, "vibe");

    let renders = controller.surface().renders();
    assert_eq!(renders[1], renders[2]);
    assert_eq!(
        controller.surface().last_names(),
        vec!["diya bansal", "tanay rawat"]
    );
}
