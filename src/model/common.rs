use serde::{Deserialize, Deserializer, Serialize};

/// Entries of the home menu.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Screen {
    Home,
    Soccer,
    Basketball,
}

impl Screen {
    /// Title shown in the navigation bar.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Sports",
            Screen::Soccer => "Soccer rounds",
            Screen::Basketball => "Basketball teams",
        }
    }
}

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
