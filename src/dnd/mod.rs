// Drag-to-reorder state machine. The grid feeds it one InputSnapshot per
// frame plus the current slot geometry; it answers with at most one event.
// Kept free of egui widgets so the whole gesture protocol is testable.

use eframe::egui::{Pos2, Rect, Vec2};

use crate::types::CardId;
use crate::ui_constants::activation;

#[cfg(test)]
mod tests;

/// One frame of pointer input, already read out of egui.
#[derive(Debug, Clone, Copy)]
pub struct InputSnapshot {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    pub touch: bool,
    pub escape: bool,
    pub time: f64,
}

/// Hit areas of one grid position. `card` is the grabbable body,
/// `cell` the full drop target around it.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub id: CardId,
    pub cell: Rect,
    pub card: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    /// Press and release that never crossed the activation threshold.
    Clicked(CardId),
    DragStarted(CardId),
    DragEnded {
        active: CardId,
        over: Option<CardId>,
    },
    DragCanceled(CardId),
}

/// Live drag info the grid needs every frame to draw the overlay.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDrag {
    pub card: CardId,
    /// Pointer position minus card corner, captured at activation, so the
    /// card stays under the same spot of the cursor while it moves.
    pub grab_offset: Vec2,
    pub last_pos: Pos2,
    pub over: Option<CardId>,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    /// Pressed on a card but not yet past the activation threshold.
    Pending {
        card: CardId,
        origin: Pos2,
        pressed_at: f64,
        touch: bool,
    },
    Active(ActiveDrag),
}

pub struct DragController {
    phase: Phase,
}

impl Default for DragController {
    fn default() -> Self {
        Self { phase: Phase::Idle }
    }
}

impl DragController {
    pub fn active(&self) -> Option<ActiveDrag> {
        match self.phase {
            Phase::Active(drag) => Some(drag),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Active(_))
    }

    /// True from the moment a press lands on a card until the gesture
    /// resolves, whether or not it has activated yet.
    pub fn is_tracking(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Advance the machine by one frame. Returns at most one event.
    pub fn step(&mut self, input: &InputSnapshot, slots: &[Slot]) -> Option<DragEvent> {
        match self.phase {
            Phase::Idle => {
                if input.pressed {
                    if let Some(pos) = input.pos {
                        if let Some(slot) = hit_card(slots, pos) {
                            self.phase = Phase::Pending {
                                card: slot.id,
                                origin: pos,
                                pressed_at: input.time,
                                touch: input.touch,
                            };
                        }
                    }
                }
                None
            }
            Phase::Pending {
                card,
                origin,
                pressed_at,
                touch,
            } => {
                let Some(pos) = input.pos else {
                    self.phase = Phase::Idle;
                    return None;
                };
                let moved = (pos - origin).length();

                // Activation is checked before release so a press that both
                // crosses the threshold and lifts in the same frame still
                // counts as a completed drag, not a click.
                let activate = if touch {
                    input.time - pressed_at >= activation::TOUCH_DELAY_SECS
                        && moved <= activation::TOUCH_TOLERANCE
                } else {
                    moved >= activation::POINTER_DISTANCE
                };
                if activate {
                    let Some(slot) = slot_by_id(slots, card) else {
                        self.phase = Phase::Idle;
                        return None;
                    };
                    let drag = ActiveDrag {
                        card,
                        grab_offset: origin - slot.card.min,
                        last_pos: pos,
                        over: hit_cell(slots, pos),
                    };
                    if input.released {
                        self.phase = Phase::Idle;
                        return Some(DragEvent::DragEnded {
                            active: card,
                            over: drag.over,
                        });
                    }
                    self.phase = Phase::Active(drag);
                    return Some(DragEvent::DragStarted(card));
                }

                if input.released {
                    self.phase = Phase::Idle;
                    // A touch release only counts as a tap when the finger
                    // stayed put; a mouse release here is always below the
                    // distance threshold.
                    if !touch || moved <= activation::TOUCH_TOLERANCE {
                        return Some(DragEvent::Clicked(card));
                    }
                    return None;
                }

                // A finger that wanders during the hold delay stops being a
                // drag candidate and will not tap either.
                if touch && moved > activation::TOUCH_TOLERANCE {
                    self.phase = Phase::Idle;
                    return None;
                }

                if !input.down {
                    self.phase = Phase::Idle;
                    return None;
                }
                None
            }
            Phase::Active(mut drag) => {
                if input.escape {
                    self.phase = Phase::Idle;
                    return Some(DragEvent::DragCanceled(drag.card));
                }
                if let Some(pos) = input.pos {
                    drag.last_pos = pos;
                    drag.over = hit_cell(slots, pos);
                }
                if input.released {
                    self.phase = Phase::Idle;
                    return Some(DragEvent::DragEnded {
                        active: drag.card,
                        over: drag.over,
                    });
                }
                if !input.down {
                    // Pointer vanished without a release (focus loss etc.).
                    self.phase = Phase::Idle;
                    return Some(DragEvent::DragCanceled(drag.card));
                }
                self.phase = Phase::Active(drag);
                None
            }
        }
    }
}

fn slot_by_id(slots: &[Slot], id: CardId) -> Option<&Slot> {
    slots.iter().find(|s| s.id == id)
}

fn hit_card(slots: &[Slot], pos: Pos2) -> Option<&Slot> {
    slots.iter().find(|s| s.card.contains(pos))
}

fn hit_cell(slots: &[Slot], pos: Pos2) -> Option<CardId> {
    slots.iter().find(|s| s.cell.contains(pos)).map(|s| s.id)
}
