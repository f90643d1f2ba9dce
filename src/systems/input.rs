//! Translates raw SDL events into [`GameEvent`]s.

use std::collections::HashMap;

use bevy_ecs::event::EventWriter;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{NonSendMut, Res};
use glam::Vec2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

use crate::events::{GameCommand, GameEvent};

/// Keyboard bindings. Letter keys are deliberately unbound (except M) so
/// they stay available for name entry in the menu.
#[derive(Resource, Debug)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let key_bindings = HashMap::from([
            (Keycode::Escape, GameCommand::ReturnToMenu),
            (Keycode::M, GameCommand::MuteAudio),
            (Keycode::Up, GameCommand::MenuUp),
            (Keycode::Down, GameCommand::MenuDown),
            (Keycode::Left, GameCommand::MenuLeft),
            (Keycode::Right, GameCommand::MenuRight),
            (Keycode::Return, GameCommand::MenuActivate),
            (Keycode::KpEnter, GameCommand::MenuActivate),
            (Keycode::Backspace, GameCommand::MenuBackspace),
        ]);
        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, keycode: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&keycode).copied()
    }
}

/// Drains the SDL event pump into [`GameEvent`]s. The sole producer of input
/// events; everything downstream is window-system agnostic.
pub fn input_system(
    bindings: Res<Bindings>,
    mut writer: EventWriter<GameEvent>,
    mut event_pump: NonSendMut<&'static mut EventPump>,
) {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameCommand::QuitApp.into());
            }
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => {
                if let Some(command) = bindings.get(keycode) {
                    writer.write(command.into());
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                writer.write(GameEvent::PointerPressed(Vec2::new(x as f32, y as f32)));
            }
            Event::TextInput { text, .. } => {
                writer.write(GameEvent::TextEntered(text));
            }
            _ => {}
        }
    }
}
