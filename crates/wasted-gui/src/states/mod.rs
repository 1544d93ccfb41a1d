mod textures;
mod ui;
mod viewer;

pub use textures::{TextureCache, TextureSlot};
pub use ui::{Route, UIState};
pub use viewer::ViewerState;
