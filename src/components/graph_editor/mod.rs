mod component;
mod error;
mod geometry;
mod hit_test;
mod render;
mod state;
mod store;
mod types;

pub use component::GraphEditorCanvas;
