use crate::cli::PlotArgs;
use crate::commands::score::annotate_sequence;
use crate::label::binding_site_features;
use crate::plot::plot_features;
use crate::utils::Result;
use pipeplot::generate_image;

pub fn plot(args: PlotArgs) -> Result<()> {
    let annotations = annotate_sequence(&args.input)?;
    let features = binding_site_features(&annotations, &args.input.binding_sites);
    log::info!("{}: {} binding-site features", args.input.seq_id, features.len());

    let mut pipe_plot = plot_features(&annotations, &features);
    if let Some(font_family) = args.font_family {
        pipe_plot.set_font_family(&font_family);
    }

    generate_image(&pipe_plot, &args.output_path)?;
    log::info!("Plot written to {}", args.output_path.display());
    Ok(())
}
