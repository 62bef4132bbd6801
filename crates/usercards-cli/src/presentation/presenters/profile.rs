use anyhow::{Context, Result};
use usercards_engine::{EventKind, Key, render_card};
use usercards_types::UserRecord;

use crate::presentation::view_models::{CommandResultViewModel, ProfilePresentationViewModel};

/// Activate the record's card from the keyboard and report what it presents.
pub fn present_profile(
    record: &UserRecord,
) -> Result<CommandResultViewModel<ProfilePresentationViewModel>> {
    let card = render_card(record);
    let presentation = card
        .as_element()
        .and_then(|element| element.dispatch(&EventKind::KeyDown { key: Key::Enter }))
        .with_context(|| format!("Card for '{}' has no activation handler", record.name))?;

    Ok(CommandResultViewModel::new(ProfilePresentationViewModel {
        message: presentation.message(),
        name: presentation.title,
        bio: presentation.body,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use usercards_types::Directory;

    #[test]
    fn test_present_profile_message() {
        let directory = Directory::built_in();
        let record = directory.find_by_name("diya bansal").unwrap();
        let result = present_profile(record).unwrap();

        assert_eq!(result.content.name, "diya bansal");
        assert_eq!(
            result.content.message,
            "diya bansal\n\na little chaos, a lot of art 🎨✨ | just vibes"
        );
    }

    #[test]
    fn test_present_profile_without_bio() {
        let record = UserRecord::new("Alan Turing", "https://example.test/alan.jpg");
        let result = present_profile(&record).unwrap();

        assert_eq!(result.content.bio, "");
        assert_eq!(result.content.message, "Alan Turing\n\n");
    }
}
