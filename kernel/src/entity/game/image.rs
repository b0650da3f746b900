use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Reference to the title's cover art, kept opaque.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct GameImage(String);

impl GameImage {
    pub fn new(image: impl Into<String>) -> Self {
        Self(image.into())
    }
}
