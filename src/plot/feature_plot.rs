use super::color::{pick_color, Color};
use crate::label::FeatureSpan;
use crate::score::BaseAnnotation;
use itertools::Itertools;
use pipeplot::{FontConfig, Legend, Pipe, PipePlot, Seg, Shape};

const RULER_YPOS: u32 = 4;
const RULER_HEIGHT: u32 = 2;
const SCORE_YPOS: u32 = 7;
const TRACK_HEIGHT: u32 = 4;
const FEATURE_YPOS: u32 = 16;
const LEGEND_YPOS: u32 = 23;

/// Lays out a ruler, the per-base score track, and the binding-site
/// features of one sequence.
pub fn plot_features(annotations: &[BaseAnnotation], features: &[FeatureSpan]) -> PipePlot {
    let seq_len = annotations.len() as u32;
    let pipes = vec![
        get_ruler(seq_len),
        get_score_track(annotations),
        get_feature_track(seq_len, features),
    ];

    let labels = features
        .iter()
        .sorted_by_key(|f| f.color_index)
        .dedup_by(|a, b| a.color_index == b.color_index)
        .map(|f| (f.label.clone(), pick_color(f.color_index).to_string()))
        .collect_vec();

    PipePlot {
        pipes,
        legend: Legend {
            xpos: 0,
            ypos: LEGEND_YPOS,
            height: TRACK_HEIGHT,
            labels,
        },
        font: FontConfig::default(),
    }
}

fn get_tick_spacing(seq_len: u32) -> u32 {
    const MAX_TICKS: u32 = 10;
    [1u32, 2, 5]
        .into_iter()
        .cartesian_product([1u32, 10, 100, 1_000, 10_000, 100_000, 1_000_000])
        .map(|(base, power)| base * power)
        .sorted()
        .find(|spacing| seq_len / spacing <= MAX_TICKS)
        .unwrap_or(10_000_000)
}

fn get_ruler(seq_len: u32) -> Pipe {
    let spacing = get_tick_spacing(seq_len);
    let mut segs = Vec::new();
    let mut pos = 0;
    while pos < seq_len {
        let width = spacing.min(seq_len - pos);
        segs.push(Seg::new(width, Color::Black.to_string(), Shape::Tick(Some(pos))));
        pos += width;
    }
    segs.push(Seg::new(0, Color::Black.to_string(), Shape::Tick(Some(seq_len))));

    Pipe {
        xpos: 0,
        ypos: RULER_YPOS,
        height: RULER_HEIGHT,
        segs,
        outline: false,
    }
}

fn get_score_track(annotations: &[BaseAnnotation]) -> Pipe {
    let (min, max) = annotations
        .iter()
        .map(|a| a.score)
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let normalize = |score: f64| {
        if max > min {
            (score - min) / (max - min)
        } else {
            0.5
        }
    };

    let mut segs = Vec::new();
    for (score, run) in &annotations.iter().chunk_by(|a| a.score.to_bits()) {
        let width = run.count() as u32;
        let color = Color::Grad(normalize(f64::from_bits(score))).to_string();
        segs.push(Seg::new(width, color, Shape::Rect));
    }

    Pipe {
        xpos: 0,
        ypos: SCORE_YPOS,
        height: TRACK_HEIGHT,
        segs,
        outline: true,
    }
}

fn get_feature_track(seq_len: u32, features: &[FeatureSpan]) -> Pipe {
    let mut segs = Vec::new();
    let mut cursor = 0;
    for feature in features.iter().sorted_by_key(|f| f.start) {
        let (start, end) = (feature.start as u32, feature.end as u32 + 1);
        if start > cursor {
            segs.push(Seg::new(start - cursor, Color::Gray.to_string(), Shape::HLine));
        }
        let color = pick_color(feature.color_index).to_string();
        segs.push(Seg::new(
            end - start,
            color,
            Shape::Arrow(Some(feature.label.clone())),
        ));
        cursor = end;
    }
    if seq_len > cursor {
        segs.push(Seg::new(seq_len - cursor, Color::Gray.to_string(), Shape::HLine));
    }

    Pipe {
        xpos: 0,
        ypos: FEATURE_YPOS,
        height: TRACK_HEIGHT,
        segs,
        outline: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotate(scores: &[f64], labels: &[&str]) -> Vec<BaseAnnotation> {
        scores
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(pos, (&score, &label))| BaseAnnotation {
                pos,
                base: 'A',
                score,
                label: label.to_string(),
            })
            .collect()
    }

    fn span(start: usize, end: usize, label: &str, color_index: usize) -> FeatureSpan {
        FeatureSpan {
            start,
            end,
            label: label.to_string(),
            color_index,
        }
    }

    #[test]
    fn tick_spacing_keeps_ticks_few() {
        assert_eq!(get_tick_spacing(9), 1);
        assert_eq!(get_tick_spacing(40), 5);
        assert_eq!(get_tick_spacing(200), 20);
        assert_eq!(get_tick_spacing(1500), 200);
    }

    #[test]
    fn score_track_merges_equal_scores() {
        let annotations = annotate(&[0.0, 0.0, 1.0, 1.0, 1.0, 2.0], &[""; 6]);
        let pipe = get_score_track(&annotations);
        let widths = pipe.segs.iter().map(|s| s.width).collect_vec();
        assert_eq!(widths, vec![2, 3, 1]);
        assert_eq!(pipe.segs[0].color, "#0049FF");
        assert_eq!(pipe.segs[2].color, "#FF0000");
    }

    #[test]
    fn feature_track_covers_sequence() {
        let features = vec![span(8, 11, "B", 1), span(2, 5, "A", 0)];
        let pipe = get_feature_track(16, &features);
        let widths = pipe.segs.iter().map(|s| s.width).collect_vec();
        assert_eq!(widths, vec![2, 4, 2, 4, 4]);
        assert_eq!(widths.iter().sum::<u32>(), 16);
        assert_eq!(pipe.segs[1].shape, Shape::Arrow(Some("A".to_string())));
        assert_eq!(pipe.segs[3].color, pick_color(1).to_string());
    }

    #[test]
    fn legend_lists_each_label_once() {
        let annotations = annotate(&[0.0; 16], &[""; 16]);
        let features = vec![span(2, 5, "A", 0), span(8, 11, "B", 1), span(12, 15, "A", 0)];
        let plot = plot_features(&annotations, &features);
        let names = plot.legend.labels.iter().map(|(l, _)| l.as_str()).collect_vec();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(plot.pipes.len(), 3);
    }
}
