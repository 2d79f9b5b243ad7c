pub mod heatmap;
pub mod plot;
pub mod score;
pub mod segment;
