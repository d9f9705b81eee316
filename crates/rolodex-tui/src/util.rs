use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a key press to a text field and reports whether the text changed.
pub fn apply_text_input(target: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let changed = !target.is_empty();
            target.clear();
            changed
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let before = target.len();
            delete_last_word(target);
            target.len() != before
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return false;
            }
            target.push(ch);
            true
        }
        KeyCode::Backspace => target.pop().is_some(),
        _ => false,
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}

/// Describes a profile picture for a text-only surface.
pub fn describe_picture(picture: &str) -> String {
    if rolodex_core::domain::is_data_uri(picture) {
        let mime = picture
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .filter(|mime| !mime.is_empty())
            .unwrap_or("unknown");
        format!("embedded {} ({} chars)", mime, picture.len())
    } else {
        picture.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_text_input, describe_picture};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_and_backspace() {
        let mut value = String::new();
        assert!(apply_text_input(&mut value, key(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(apply_text_input(&mut value, key(KeyCode::Char('b'), KeyModifiers::NONE)));
        assert!(apply_text_input(&mut value, key(KeyCode::Backspace, KeyModifiers::NONE)));
        assert_eq!(value, "a");
        assert!(!apply_text_input(&mut value, key(KeyCode::Left, KeyModifiers::NONE)));
    }

    #[test]
    fn ctrl_w_deletes_last_word() {
        let mut value = "Startup funding ".to_string();
        assert!(apply_text_input(&mut value, key(KeyCode::Char('w'), KeyModifiers::CONTROL)));
        assert_eq!(value, "Startup ");
    }

    #[test]
    fn ctrl_u_clears() {
        let mut value = "alice".to_string();
        assert!(apply_text_input(&mut value, key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(value.is_empty());
        assert!(!apply_text_input(&mut value, key(KeyCode::Char('u'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn describe_picture_summarizes_data_uri() {
        assert_eq!(describe_picture("/placeholder.svg"), "/placeholder.svg");
        let uri = "data:image/png;base64,aGk=";
        assert_eq!(
            describe_picture(uri),
            format!("embedded image/png ({} chars)", uri.len())
        );
    }
}
