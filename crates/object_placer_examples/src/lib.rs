#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_top_down_png, RenderConfig};
