/*!
This crate provides functionality to generate the so-called "pipe plots"
consisting of stacked horizontal pipes (bars). Each pipe consists of segments of
specified width, shape, color, and opacity. Pipe plots can be annotated with
ticks, labeled arrows, and legends. The crate supports rendering of pipe plots
as SVG, PNG, and PDF images.

Pipe plots are useful for representing tracks along a sequence (scores,
annotated features) as well as matrices drawn one row per pipe.
*/

mod common;
mod image;
mod pdf;
mod pipeplot;
mod png;
mod svg;

pub(crate) use common::prepare_svg_tree;
pub use image::generate as generate_image;
pub use pipeplot::{Color, FontConfig, Legend, Pipe, PipePlot, Seg, Shape};
