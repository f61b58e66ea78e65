use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use shared::SegmentKind;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Cancels the active strut, wherever the cursor is.
    Cancel,
    TogglePlayMode,
    RandomizeColor,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    SelectStrut,
    SelectConveyor,
    SelectCable,
}

impl InputAction {
    pub const SEGMENT_SELECTIONS: [InputAction; 3] = [
        InputAction::SelectStrut,
        InputAction::SelectConveyor,
        InputAction::SelectCable,
    ];

    /// Segment chosen by a selection action.
    pub fn segment(self) -> Option<SegmentKind> {
        match self {
            InputAction::SelectStrut => Some(SegmentKind::Strut),
            InputAction::SelectConveyor => Some(SegmentKind::Conveyor),
            InputAction::SelectCable => Some(SegmentKind::Cable),
            _ => None,
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    app.insert_resource(default_input_map());
    app.insert_resource(ActionState::<InputAction>::default());
}

fn default_input_map() -> InputMap<InputAction> {
    let mut input_map = InputMap::<InputAction>::default();
    input_map.insert(InputAction::Cancel, MouseButton::Right);
    input_map.insert(InputAction::TogglePlayMode, KeyCode::Space);
    input_map.insert(InputAction::RandomizeColor, KeyCode::KeyP);

    input_map.insert(InputAction::MoveLeft, KeyCode::KeyA);
    input_map.insert(InputAction::MoveLeft, KeyCode::ArrowLeft);
    input_map.insert(InputAction::MoveRight, KeyCode::KeyD);
    input_map.insert(InputAction::MoveRight, KeyCode::ArrowRight);
    input_map.insert(InputAction::MoveUp, KeyCode::KeyW);
    input_map.insert(InputAction::MoveUp, KeyCode::ArrowUp);
    input_map.insert(InputAction::MoveDown, KeyCode::KeyS);
    input_map.insert(InputAction::MoveDown, KeyCode::ArrowDown);

    input_map.insert(InputAction::SelectStrut, KeyCode::Digit1);
    input_map.insert(InputAction::SelectConveyor, KeyCode::Digit2);
    input_map.insert(InputAction::SelectCable, KeyCode::Digit3);
    input_map
}
