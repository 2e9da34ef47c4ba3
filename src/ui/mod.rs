pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod ingredients;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod request;
pub mod runtime;
pub mod terminal_guard;
pub mod text_field;
pub mod theme;
