mod anchors;
mod lines;
mod render;
mod types;

pub use anchors::AnchorMap;
pub use lines::{display_text, split_lines};
pub use render::{
    render_code_scene, render_intro, render_line, render_lines, CodeScene, LineRender,
    RenderOptions,
};
pub use types::{Annotation, Feature, IntroSlide, Presentation, Step, Unit};
