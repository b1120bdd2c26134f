use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

/// Map a key event to a game command. Arrows and WASD steer, Esc quits.
/// CTRL+C also quits since raw mode swallows the signal. Anything else is
/// ignored.
pub fn decode(ev: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(ev) {
        return Some(Command::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Steer(Direction::Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Steer(Direction::Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Steer(Direction::Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Steer(Direction::Right)),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// One tick's worth of input, folded down from the pending key queue.
pub struct TickInput {
    pub steer: Option<Direction>,
    pub quit: bool,
}

/// Coalesce a tick's key events into at most one steer. The last steer
/// pressed wins and is applied once per tick, so two quick presses cannot
/// chain into a reversal between moves. A quit key overrides the rest.
pub fn coalesce(events: &[KeyEvent]) -> TickInput {
    let mut input = TickInput { steer: None, quit: false };

    for ev in events {
        match decode(ev) {
            Some(Command::Steer(dir)) => input.steer = Some(dir),
            Some(Command::Quit) => {
                input.quit = true;
                break;
            }
            None => {}
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_steer() {
        assert_eq!(decode(&key(KeyCode::Up)), Some(Command::Steer(Direction::Up)));
        assert_eq!(decode(&key(KeyCode::Down)), Some(Command::Steer(Direction::Down)));
        assert_eq!(decode(&key(KeyCode::Left)), Some(Command::Steer(Direction::Left)));
        assert_eq!(decode(&key(KeyCode::Right)), Some(Command::Steer(Direction::Right)));
    }

    #[test]
    fn wasd_steers() {
        assert_eq!(decode(&key(KeyCode::Char('w'))), Some(Command::Steer(Direction::Up)));
        assert_eq!(decode(&key(KeyCode::Char('d'))), Some(Command::Steer(Direction::Right)));
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        assert_eq!(decode(&key(KeyCode::Esc)), Some(Command::Quit));
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(decode(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn last_steer_in_a_tick_wins() {
        let events = [key(KeyCode::Up), key(KeyCode::Left)];
        let input = coalesce(&events);
        assert_eq!(input.steer, Some(Direction::Left));
        assert!(!input.quit);
    }

    #[test]
    fn quick_double_press_cannot_reverse() {
        use crate::game::GameState;
        use rand::rngs::SmallRng;
        use rand::SeedableRng;

        // Heading Right: Up-then-Left within one tick collapses to a
        // single Left steer, which the engine drops as a reversal.
        let mut state = GameState::new(20, 20, &mut SmallRng::seed_from_u64(1));
        let input = coalesce(&[key(KeyCode::Up), key(KeyCode::Left)]);
        if let Some(dir) = input.steer {
            state.steer(dir);
        }
        assert_eq!(state.direction(), Direction::Right);
    }

    #[test]
    fn quit_overrides_remaining_input() {
        let events = [key(KeyCode::Up), key(KeyCode::Esc), key(KeyCode::Left)];
        let input = coalesce(&events);
        assert!(input.quit);
        assert_eq!(input.steer, Some(Direction::Up));
    }

    #[test]
    fn empty_queue_means_no_input() {
        let input = coalesce(&[]);
        assert_eq!(input.steer, None);
        assert!(!input.quit);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(decode(&key(KeyCode::Char('x'))), None);
        assert_eq!(decode(&key(KeyCode::Enter)), None);
        // plain 'c' without CTRL steers nothing and quits nothing
        assert_eq!(decode(&key(KeyCode::Char('c'))), None);
    }
}
