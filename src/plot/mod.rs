pub mod color;
mod feature_plot;
mod matrix_plot;

pub use feature_plot::plot_features;
pub use matrix_plot::{label_prefix, plot_matrix, read_matrix, LabeledMatrix};
