// Page content, view-state and markup rendering

pub mod content;
pub mod render;
pub mod view;

pub use render::render;
pub use view::PortfolioView;
