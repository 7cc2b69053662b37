use eframe::egui::{pos2, vec2, Pos2, Rect};

use super::*;
use crate::types::CardId;

const CELL_W: f32 = 320.0;
const CELL_H: f32 = 245.0;
const GAP: f32 = 32.0;

// Three cells in a row, cards inset inside them. Card 1 spans
// x 24..296, card 3's cell starts at x 704.
fn three_slots() -> Vec<Slot> {
    ["1", "2", "3"]
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let x = i as f32 * (CELL_W + GAP);
            let cell = Rect::from_min_size(pos2(x, 0.0), vec2(CELL_W, CELL_H));
            let card = Rect::from_min_size(pos2(x + 24.0, 16.0), vec2(272.0, 181.0));
            Slot {
                id: CardId(id),
                cell,
                card,
            }
        })
        .collect()
}

fn press(pos: Pos2, time: f64, touch: bool) -> InputSnapshot {
    InputSnapshot {
        pos: Some(pos),
        pressed: true,
        released: false,
        down: true,
        touch,
        escape: false,
        time,
    }
}

fn drag(pos: Pos2, time: f64, touch: bool) -> InputSnapshot {
    InputSnapshot {
        pos: Some(pos),
        pressed: false,
        released: false,
        down: true,
        touch,
        escape: false,
        time,
    }
}

fn release(pos: Pos2, time: f64, touch: bool) -> InputSnapshot {
    InputSnapshot {
        pos: Some(pos),
        pressed: false,
        released: true,
        down: false,
        touch,
        escape: false,
        time,
    }
}

fn escape(pos: Pos2, time: f64) -> InputSnapshot {
    InputSnapshot {
        pos: Some(pos),
        pressed: false,
        released: false,
        down: true,
        touch: false,
        escape: true,
        time,
    }
}

#[test]
fn short_mouse_press_is_a_click() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    assert_eq!(dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots), None);
    assert_eq!(dnd.step(&drag(pos2(164.0, 100.0), 0.016, false), &slots), None);
    assert_eq!(
        dnd.step(&release(pos2(164.0, 100.0), 0.032, false), &slots),
        Some(DragEvent::Clicked(CardId("1")))
    );
    assert!(!dnd.is_dragging());
}

#[test]
fn mouse_drag_activates_past_ten_pixels() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots);
    // 6 px is still below the threshold.
    assert_eq!(dnd.step(&drag(pos2(166.0, 100.0), 0.016, false), &slots), None);
    assert!(!dnd.is_dragging());
    // 12 px crosses it.
    assert_eq!(
        dnd.step(&drag(pos2(172.0, 100.0), 0.032, false), &slots),
        Some(DragEvent::DragStarted(CardId("1")))
    );
    assert!(dnd.is_dragging());

    // The overlay follows the pointer with the grab offset from the press.
    let active = dnd.active().unwrap();
    assert_eq!(active.grab_offset, vec2(136.0, 84.0));
    assert_eq!(active.last_pos - active.grab_offset, pos2(36.0, 16.0));
}

#[test]
fn drop_over_another_cell_reports_it() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots);
    dnd.step(&drag(pos2(200.0, 100.0), 0.016, false), &slots);
    dnd.step(&drag(pos2(864.0, 100.0), 0.032, false), &slots);
    assert_eq!(dnd.active().unwrap().over, Some(CardId("3")));
    assert_eq!(
        dnd.step(&release(pos2(864.0, 100.0), 0.048, false), &slots),
        Some(DragEvent::DragEnded {
            active: CardId("1"),
            over: Some(CardId("3")),
        })
    );
    assert!(!dnd.is_dragging());
}

#[test]
fn drop_outside_any_cell_reports_none() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots);
    dnd.step(&drag(pos2(200.0, 100.0), 0.016, false), &slots);
    assert_eq!(
        dnd.step(&release(pos2(500.0, 400.0), 0.032, false), &slots),
        Some(DragEvent::DragEnded {
            active: CardId("1"),
            over: None,
        })
    );
}

#[test]
fn escape_cancels_an_active_drag() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots);
    dnd.step(&drag(pos2(200.0, 100.0), 0.016, false), &slots);
    assert_eq!(
        dnd.step(&escape(pos2(200.0, 100.0), 0.032), &slots),
        Some(DragEvent::DragCanceled(CardId("1")))
    );
    // The release that follows must not click or drop anything.
    assert_eq!(dnd.step(&release(pos2(200.0, 100.0), 0.048, false), &slots), None);
}

#[test]
fn touch_hold_in_place_starts_a_drag() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, true), &slots);
    assert_eq!(dnd.step(&drag(pos2(162.0, 100.0), 0.1, true), &slots), None);
    assert_eq!(
        dnd.step(&drag(pos2(162.0, 100.0), 0.3, true), &slots),
        Some(DragEvent::DragStarted(CardId("1")))
    );
}

#[test]
fn touch_that_slides_early_neither_drags_nor_taps() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, true), &slots);
    // 8 px within the hold delay: the gesture is handed back to scrolling.
    assert_eq!(dnd.step(&drag(pos2(168.0, 100.0), 0.1, true), &slots), None);
    assert_eq!(dnd.step(&release(pos2(168.0, 100.0), 0.2, true), &slots), None);
    assert!(!dnd.is_dragging());
}

#[test]
fn quick_touch_tap_clicks() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, true), &slots);
    assert_eq!(
        dnd.step(&release(pos2(162.0, 100.0), 0.1, true), &slots),
        Some(DragEvent::Clicked(CardId("1")))
    );
}

#[test]
fn press_between_cards_is_ignored() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    assert_eq!(dnd.step(&press(pos2(330.0, 100.0), 0.0, false), &slots), None);
    assert_eq!(dnd.step(&release(pos2(330.0, 100.0), 0.016, false), &slots), None);
}

#[test]
fn pointer_loss_cancels_the_drag() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots);
    dnd.step(&drag(pos2(200.0, 100.0), 0.016, false), &slots);

    let lost = InputSnapshot {
        pos: None,
        pressed: false,
        released: false,
        down: false,
        touch: false,
        escape: false,
        time: 0.032,
    };
    assert_eq!(
        dnd.step(&lost, &slots),
        Some(DragEvent::DragCanceled(CardId("1")))
    );
}

#[test]
fn flick_that_activates_and_releases_in_one_frame_still_drops() {
    let slots = three_slots();
    let mut dnd = DragController::default();

    dnd.step(&press(pos2(160.0, 100.0), 0.0, false), &slots);
    assert_eq!(
        dnd.step(&release(pos2(180.0, 100.0), 0.016, false), &slots),
        Some(DragEvent::DragEnded {
            active: CardId("1"),
            over: Some(CardId("1")),
        })
    );
}
