//! 视图层：只读 App，渲染到终端

mod components;
mod layout;
mod theme;

pub use layout::render;
