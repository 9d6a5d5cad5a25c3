pub mod event;
pub mod layout;
pub mod render;
pub mod shell;
pub mod state;

pub use render::Renderer;
pub use shell::{Shell, CATEGORY_WARMUP};
pub use state::{FetchOutcome, FetchRequest, FetchState, ViewState};
