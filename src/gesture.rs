// src/gesture.rs
use serde::Serialize;
use std::fmt;

/// Gestures the classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gesture {
    ThumbsUp,
    Hello,
    ILoveYou,
    Peace,
    Ok,
    Fist,
    HighFive,
    Rock,
    Point,
    Three,
    Four,
    CallMe,
    Gun,
    ThumbsDown,
    Victory,
}

/// Generic yes/no meaning some gestures stand for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alias {
    Yes,
    No,
}

impl Alias {
    pub fn word(self) -> &'static str {
        match self {
            Alias::Yes => "YES",
            Alias::No => "NO",
        }
    }
}

impl Gesture {
    pub const ALL: [Gesture; 15] = [
        Gesture::ThumbsUp,
        Gesture::Hello,
        Gesture::ILoveYou,
        Gesture::Peace,
        Gesture::Ok,
        Gesture::Fist,
        Gesture::HighFive,
        Gesture::Rock,
        Gesture::Point,
        Gesture::Three,
        Gesture::Four,
        Gesture::CallMe,
        Gesture::Gun,
        Gesture::ThumbsDown,
        Gesture::Victory,
    ];

    /// Full label, emoji and alias suffix included.
    pub fn label(self) -> &'static str {
        match self {
            Gesture::ThumbsUp => "Thumbs Up 👍 = YES",
            Gesture::Hello => "Hello 👋",
            Gesture::ILoveYou => "I Love You 🤟",
            Gesture::Peace => "Peace ✌️",
            Gesture::Ok => "OK 👌",
            Gesture::Fist => "Fist ✊ = NO",
            Gesture::HighFive => "High Five 🖐️",
            Gesture::Rock => "Rock 🤘",
            Gesture::Point => "Point 👉",
            Gesture::Three => "Three 3️⃣",
            Gesture::Four => "Four 4️⃣",
            Gesture::CallMe => "Call Me 🤙",
            Gesture::Gun => "Gun 🤠",
            Gesture::ThumbsDown => "Thumbs Down 👎 = NO",
            Gesture::Victory => "Victory ✌️",
        }
    }

    /// Plain name without emoji.
    pub fn name(self) -> &'static str {
        match self {
            Gesture::ThumbsUp => "Thumbs Up",
            Gesture::Hello => "Hello",
            Gesture::ILoveYou => "I Love You",
            Gesture::Peace => "Peace",
            Gesture::Ok => "OK",
            Gesture::Fist => "Fist",
            Gesture::HighFive => "High Five",
            Gesture::Rock => "Rock",
            Gesture::Point => "Point",
            Gesture::Three => "Three",
            Gesture::Four => "Four",
            Gesture::CallMe => "Call Me",
            Gesture::Gun => "Gun",
            Gesture::ThumbsDown => "Thumbs Down",
            Gesture::Victory => "Victory",
        }
    }

    pub fn alias(self) -> Option<Alias> {
        match self {
            Gesture::ThumbsUp => Some(Alias::Yes),
            Gesture::Fist | Gesture::ThumbsDown => Some(Alias::No),
            _ => None,
        }
    }

    pub fn maps_to_no(self) -> bool {
        self.alias() == Some(Alias::No)
    }

    /// Text shown on screen and spoken aloud: the alias word when there is
    /// one, the plain name otherwise.
    pub fn display_name(self) -> &'static str {
        match self.alias() {
            Some(alias) => alias.word(),
            None => self.name(),
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliased_gestures_speak_the_alias() {
        assert_eq!(Gesture::ThumbsUp.display_name(), "YES");
        assert_eq!(Gesture::Fist.display_name(), "NO");
        assert_eq!(Gesture::ThumbsDown.display_name(), "NO");
        assert!(Gesture::Fist.maps_to_no());
        assert!(Gesture::ThumbsDown.maps_to_no());
        assert!(!Gesture::ThumbsUp.maps_to_no());
    }

    #[test]
    fn display_names_carry_no_emoji() {
        for gesture in Gesture::ALL {
            let name = gesture.display_name();
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '),
                "{gesture:?} -> {name:?}"
            );
            assert_eq!(name, name.trim());
        }
    }

    #[test]
    fn labels_start_with_plain_name() {
        for gesture in Gesture::ALL {
            assert!(gesture.label().starts_with(gesture.name()));
        }
        assert_eq!(Gesture::Peace.display_name(), "Peace");
        assert_eq!(Gesture::CallMe.to_string(), "Call Me 🤙");
    }

    #[test]
    fn alias_suffix_matches_alias() {
        for gesture in Gesture::ALL {
            match gesture.alias() {
                Some(alias) => assert!(gesture.label().ends_with(&format!("= {}", alias.word()))),
                None => assert!(!gesture.label().contains('=')),
            }
        }
    }
}
