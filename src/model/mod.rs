pub mod config;
pub mod display;
pub mod settings;
pub mod task;
pub mod task_list;
pub mod ticker;
pub mod timer;

pub use config::*;
pub use display::*;
pub use settings::*;
pub use task::*;
pub use task_list::*;
pub use ticker::*;
pub use timer::*;
