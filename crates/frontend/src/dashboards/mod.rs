pub mod d400_overview;

pub use d400_overview::ui::Overview;
