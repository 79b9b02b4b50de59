pub mod thinking;
pub mod view;
pub mod view_model;

pub use view::ChatPage;
