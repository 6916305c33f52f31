use super::*;
use crate::config::Config;
use crate::draw::color::{BLACK, RED, WHITE};
use crate::history::ClearBehavior;
use crate::input::events::{Action, InputEvent, InputSource};
use crate::input::mapper::CoordinateMapper;

fn create_test_input_state() -> InputState {
    let config = Config::from_toml_str(
        r#"
        [canvas]
        width = 100
        height = 60
        display_width = 50.0
        "#,
    )
    .unwrap();
    InputState::from_config(&config).unwrap()
}

fn down(device: InputSource, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerDown { device, x, y }
}

fn motion(device: InputSource, x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMove { device, x, y }
}

fn up(device: InputSource) -> InputEvent {
    InputEvent::PointerUp { device }
}

/// Draws one complete mouse stroke between display-space points.
fn mouse_stroke(state: &mut InputState, from: (f64, f64), to: (f64, f64)) {
    state.dispatch(down(InputSource::Mouse, from.0, from.1)).unwrap();
    state.dispatch(motion(InputSource::Mouse, to.0, to.1)).unwrap();
    state.dispatch(up(InputSource::Mouse)).unwrap();
}

#[test]
fn test_defaults_from_config() {
    let state = create_test_input_state();
    assert_eq!(state.state, StrokeState::Idle);
    assert_eq!(state.current_color, BLACK);
    assert_eq!(state.current_line_width, 5.0);
    assert_eq!(state.background_color, WHITE);
    assert_eq!(state.mapper().scale(), 2.0);
    assert!(state.surface().is_blank().unwrap());
    assert!(!state.controls().can_undo);
    assert!(!state.controls().can_redo);
}

#[test]
fn test_start_maps_coordinates_without_drawing() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Mouse, 10.0, 5.0)).unwrap();

    assert_eq!(
        state.state,
        StrokeState::Drawing {
            last_x: 20.0,
            last_y: 10.0
        }
    );
    assert!(state.surface().is_blank().unwrap());
}

#[test]
fn test_move_draws_segment_and_advances() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Mouse, 5.0, 10.0)).unwrap();
    state.dispatch(motion(InputSource::Mouse, 45.0, 10.0)).unwrap();

    assert_eq!(
        state.state,
        StrokeState::Drawing {
            last_x: 90.0,
            last_y: 20.0
        }
    );
    assert_eq!(state.surface().pixel(50, 20).unwrap().unwrap()[0], 255);
    // No commit until the stroke ends.
    assert_eq!(state.history().undo_len(), 0);
}

#[test]
fn test_replaced_mapper_applies_to_new_strokes() {
    let mut state = create_test_input_state();
    state.set_mapper(CoordinateMapper::new(100.0, 100.0, 10.0, 0.0));
    state.dispatch(down(InputSource::Mouse, 30.0, 5.0)).unwrap();
    assert_eq!(
        state.state,
        StrokeState::Drawing {
            last_x: 20.0,
            last_y: 5.0
        }
    );
}

#[test]
fn test_move_while_idle_does_nothing() {
    let mut state = create_test_input_state();
    state.dispatch(motion(InputSource::Mouse, 20.0, 20.0)).unwrap();
    assert_eq!(state.state, StrokeState::Idle);
    assert!(state.surface().is_blank().unwrap());
}

#[test]
fn test_end_commits_once() {
    let mut state = create_test_input_state();
    mouse_stroke(&mut state, (5.0, 5.0), (30.0, 20.0));
    assert_eq!(state.state, StrokeState::Idle);
    assert_eq!(state.history().undo_len(), 1);
    assert!(state.controls().can_undo);

    // A trailing leave after the release must not commit again.
    state
        .dispatch(InputEvent::PointerLeave {
            device: InputSource::Mouse,
        })
        .unwrap();
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_zero_length_stroke_still_commits() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Mouse, 10.0, 10.0)).unwrap();
    state.dispatch(up(InputSource::Mouse)).unwrap();

    assert_eq!(state.history().undo_len(), 1);
    assert!(state.history().undo_stack()[0].is_blank());
}

#[test]
fn test_leave_ends_stroke() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Mouse, 10.0, 10.0)).unwrap();
    state
        .dispatch(InputEvent::PointerLeave {
            device: InputSource::Mouse,
        })
        .unwrap();
    assert_eq!(state.state, StrokeState::Idle);
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_disabled_touch_never_starts_a_stroke() {
    let mut state = create_test_input_state();
    state.dispatch(Action::ToggleTouch).unwrap();
    assert!(!state.policy.touch_enabled);

    state
        .dispatch(InputEvent::TouchStart { x: 10.0, y: 10.0 })
        .unwrap();
    assert_eq!(state.state, StrokeState::Idle);
    state
        .dispatch(InputEvent::TouchMove { x: 30.0, y: 30.0 })
        .unwrap();
    state.dispatch(InputEvent::TouchEnd).unwrap();

    assert!(state.surface().is_blank().unwrap());
    assert_eq!(state.history().undo_len(), 0);
}

#[test]
fn test_pointer_tagged_touch_is_gated_as_touch() {
    let mut state = create_test_input_state();
    state.policy.touch_enabled = false;
    state.dispatch(down(InputSource::Touch, 10.0, 10.0)).unwrap();
    assert_eq!(state.state, StrokeState::Idle);
}

#[test]
fn test_touch_stroke_when_enabled() {
    let mut state = create_test_input_state();
    state
        .dispatch(InputEvent::TouchStart { x: 5.0, y: 15.0 })
        .unwrap();
    state
        .dispatch(InputEvent::TouchMove { x: 40.0, y: 15.0 })
        .unwrap();
    state.dispatch(InputEvent::TouchEnd).unwrap();

    assert!(!state.surface().is_blank().unwrap());
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_disabling_pen_mid_stroke_pauses_it() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Pen, 5.0, 10.0)).unwrap();
    state.dispatch(motion(InputSource::Pen, 10.0, 10.0)).unwrap();

    state.dispatch(Action::TogglePen).unwrap();
    state.dispatch(motion(InputSource::Pen, 40.0, 10.0)).unwrap();

    // Denied move is skipped: stroke still open at the last permitted point.
    assert_eq!(
        state.state,
        StrokeState::Drawing {
            last_x: 20.0,
            last_y: 20.0
        }
    );
    assert_eq!(state.surface().pixel(60, 20).unwrap(), Some([0, 0, 0, 0]));

    // Re-enabling continues from the last permitted point.
    state.dispatch(Action::TogglePen).unwrap();
    state.dispatch(motion(InputSource::Pen, 45.0, 10.0)).unwrap();
    state.dispatch(up(InputSource::Pen)).unwrap();
    assert_eq!(state.surface().pixel(60, 20).unwrap().unwrap()[0], 255);
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_mouse_ignores_policy() {
    let mut state = create_test_input_state();
    state.policy.touch_enabled = false;
    state.policy.pen_enabled = false;
    mouse_stroke(&mut state, (5.0, 5.0), (20.0, 5.0));
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_set_color_accepts_hex_and_rejects_garbage() {
    let mut state = create_test_input_state();
    state
        .dispatch(Action::SetColor {
            color: "#ff0000".to_string(),
        })
        .unwrap();
    assert_eq!(state.current_color, RED);

    state
        .dispatch(Action::SetColor {
            color: "not-a-color".to_string(),
        })
        .unwrap();
    assert_eq!(state.current_color, RED);
}

#[test]
fn test_eraser_paints_background_color() {
    let mut state = create_test_input_state();
    mouse_stroke(&mut state, (5.0, 10.0), (45.0, 10.0));
    state.dispatch(Action::Eraser).unwrap();
    assert_eq!(state.current_color, WHITE);

    mouse_stroke(&mut state, (5.0, 10.0), (45.0, 10.0));
    assert_eq!(
        state.surface().pixel(50, 20).unwrap(),
        Some([255, 255, 255, 255])
    );
}

#[test]
fn test_line_width_is_clamped() {
    let mut state = create_test_input_state();
    state.dispatch(Action::SetLineWidth { width: 12.0 }).unwrap();
    assert_eq!(state.current_line_width, 12.0);

    state.dispatch(Action::SetLineWidth { width: 0.0 }).unwrap();
    assert_eq!(state.current_line_width, 1.0);

    state.dispatch(Action::SetLineWidth { width: 1e6 }).unwrap();
    assert_eq!(state.current_line_width, 100.0);

    state
        .dispatch(Action::SetLineWidth { width: f64::NAN })
        .unwrap();
    assert_eq!(state.current_line_width, 100.0);
}

#[test]
fn test_undo_redo_through_dispatch() {
    let mut state = create_test_input_state();
    mouse_stroke(&mut state, (5.0, 5.0), (45.0, 5.0));
    mouse_stroke(&mut state, (5.0, 20.0), (45.0, 20.0));
    let before = state.surface().snapshot().unwrap();

    state.dispatch(Action::Undo).unwrap();
    assert!(state.controls().can_undo);
    assert!(state.controls().can_redo);
    assert!(!state.surface().matches(&before).unwrap());

    state.dispatch(Action::Redo).unwrap();
    assert!(state.surface().matches(&before).unwrap());
    assert!(!state.controls().can_redo);
}

#[test]
fn test_undo_on_fresh_canvas_is_noop() {
    let mut state = create_test_input_state();
    state.dispatch(Action::Undo).unwrap();
    state.dispatch(Action::Redo).unwrap();

    assert!(state.surface().is_blank().unwrap());
    assert_eq!(state.history().undo_len(), 0);
    assert_eq!(state.history().redo_len(), 0);
    assert!(!state.controls().can_undo);
    assert!(!state.controls().can_redo);
}

#[test]
fn test_undo_abandons_open_stroke() {
    let mut state = create_test_input_state();
    mouse_stroke(&mut state, (5.0, 5.0), (45.0, 5.0));
    state.dispatch(down(InputSource::Mouse, 5.0, 20.0)).unwrap();

    state.dispatch(Action::Undo).unwrap();
    assert_eq!(state.state, StrokeState::Idle);

    state.dispatch(up(InputSource::Mouse)).unwrap();
    assert_eq!(state.history().undo_len(), 0);
    assert_eq!(state.history().redo_len(), 1);
}

#[test]
fn test_empty_redo_keeps_open_stroke() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Mouse, 5.0, 10.0)).unwrap();
    state.dispatch(motion(InputSource::Mouse, 45.0, 10.0)).unwrap();

    state.dispatch(Action::Redo).unwrap();
    assert!(state.is_drawing());

    state.dispatch(up(InputSource::Mouse)).unwrap();
    assert_eq!(state.history().undo_len(), 1);
    assert!(state.controls().can_undo);
}

#[test]
fn test_empty_undo_keeps_open_stroke() {
    let mut state = create_test_input_state();
    state.dispatch(down(InputSource::Mouse, 5.0, 10.0)).unwrap();
    state.dispatch(motion(InputSource::Mouse, 45.0, 10.0)).unwrap();

    state.dispatch(Action::Undo).unwrap();
    assert!(state.is_drawing());

    state.dispatch(up(InputSource::Mouse)).unwrap();
    assert_eq!(state.history().undo_len(), 1);
}

#[test]
fn test_clear_discard() {
    let mut state = create_test_input_state();
    mouse_stroke(&mut state, (5.0, 5.0), (45.0, 5.0));
    state.dispatch(Action::Clear).unwrap();

    assert!(state.surface().is_blank().unwrap());
    assert_eq!(state.history().undo_len(), 0);
    assert_eq!(state.history().redo_len(), 0);
}

#[test]
fn test_clear_commit_blank() {
    let mut state = create_test_input_state();
    state.clear_behavior = ClearBehavior::CommitBlank;
    mouse_stroke(&mut state, (5.0, 5.0), (45.0, 5.0));
    state.dispatch(Action::Clear).unwrap();

    assert!(state.surface().is_blank().unwrap());
    assert_eq!(state.history().undo_len(), 2);
    assert!(state.history().undo_stack()[1].is_blank());

    state.dispatch(Action::Undo).unwrap();
    assert!(!state.surface().is_blank().unwrap());
}

#[test]
fn test_save_is_left_pending_for_the_front_end() {
    let mut state = create_test_input_state();
    assert!(!state.take_pending_save());
    state.dispatch(Action::Save).unwrap();
    assert!(state.take_pending_save());
    assert!(!state.take_pending_save());
}

#[test]
fn test_export_png_starts_with_signature() {
    let mut state = create_test_input_state();
    mouse_stroke(&mut state, (5.0, 5.0), (45.0, 25.0));
    let bytes = state.export_png().unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}
