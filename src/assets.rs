// src/assets.rs - Maps a displayed sign label to the animation shown next to it
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::gesture::Gesture;

/// File name of an asset inside the configured asset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AssetKey(&'static str);

impl AssetKey {
    /// Shared by every label meaning "no".
    pub const NO: AssetKey = AssetKey("no.gif");

    pub fn file_name(self) -> &'static str {
        self.0
    }

    pub fn path_in(self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.0)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

const NO_ALIASES: [&str; 3] = ["no", "fist", "thumbsdown"];

static ASSET_TABLE: Lazy<HashMap<&'static str, AssetKey>> = Lazy::new(|| {
    [
        ("yes", "yes.gif"),
        ("hello", "hello.gif"),
        ("iloveyou", "iloveyou.gif"),
        ("peace", "peace.gif"),
        ("ok", "ok.gif"),
        ("highfive", "highfive.gif"),
        ("rock", "rock.gif"),
        ("point", "point.gif"),
        ("three", "three.gif"),
        ("four", "four.gif"),
        ("callme", "callme.gif"),
        ("gun", "gun.gif"),
        ("victory", "victory.gif"),
    ]
    .into_iter()
    .map(|(key, file)| (key, AssetKey(file)))
    .collect()
});

/// Lowercase and keep only ASCII letters and digits.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Asset for a displayed label, or `None` when nothing should be shown.
pub fn resolve_asset(label: &str) -> Option<AssetKey> {
    let key = normalize_label(label);
    if NO_ALIASES.contains(&key.as_str()) {
        return Some(AssetKey::NO);
    }
    ASSET_TABLE.get(key.as_str()).copied()
}

/// Asset for a classified gesture, looked up through its display name.
pub fn asset_for(gesture: Gesture) -> Option<AssetKey> {
    resolve_asset(gesture.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_case_spaces_and_symbols() {
        assert_eq!(normalize_label("I Love You 🤟"), "iloveyou");
        assert_eq!(normalize_label("  Call-Me! "), "callme");
        assert_eq!(normalize_label("Three 3️⃣"), "three3");
        assert_eq!(normalize_label(""), "");
    }

    #[test]
    fn no_aliases_share_one_asset() {
        for label in ["NO", "no", "Fist", "Thumbs Down", "thumbs-down", "Fist ✊"] {
            assert_eq!(resolve_asset(label), Some(AssetKey::NO), "{label}");
        }
        assert_eq!(asset_for(Gesture::Fist), Some(AssetKey::NO));
        assert_eq!(asset_for(Gesture::ThumbsDown), Some(AssetKey::NO));
    }

    #[test]
    fn every_gesture_has_an_asset() {
        for gesture in Gesture::ALL {
            assert!(asset_for(gesture).is_some(), "{gesture:?}");
        }
        assert_eq!(asset_for(Gesture::ThumbsUp).map(AssetKey::file_name), Some("yes.gif"));
        assert_eq!(asset_for(Gesture::ILoveYou).map(AssetKey::file_name), Some("iloveyou.gif"));
        assert_eq!(asset_for(Gesture::CallMe).map(AssetKey::file_name), Some("callme.gif"));
    }

    #[test]
    fn unknown_labels_resolve_to_nothing() {
        assert_eq!(resolve_asset("Wave"), None);
        assert_eq!(resolve_asset(""), None);
        assert_eq!(resolve_asset("No gesture detected..."), None);
        // Plain names of aliased gestures are not table keys.
        assert_eq!(resolve_asset("Thumbs Up"), None);
    }

    #[test]
    fn asset_path_joins_directory() {
        let path = AssetKey::NO.path_in("gifs");
        assert_eq!(path, PathBuf::from("gifs").join("no.gif"));
        assert_eq!(AssetKey::NO.to_string(), "no.gif");
    }
}
