use super::BindingSite;
use crate::score::BaseAnnotation;
use itertools::Itertools;

/// A labeled span of bases, inclusive on both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSpan {
    pub start: usize,
    pub end: usize,
    pub label: String,
    pub color_index: usize,
}

/// Collects one feature per labeled run of bases.
///
/// Labels are indexed in order of first appearance; that index selects the
/// feature color. A run of a label whose motif is known is cut into
/// motif-sized pieces so that back-to-back occurrences stay separate.
pub fn binding_site_features(
    annotations: &[BaseAnnotation],
    sites: &[BindingSite],
) -> Vec<FeatureSpan> {
    let labels = annotations
        .iter()
        .map(|a| a.label.as_str())
        .filter(|label| !label.is_empty())
        .unique()
        .collect_vec();

    let mut features = Vec::new();
    for (color_index, &label) in labels.iter().enumerate() {
        let motif_len = sites
            .iter()
            .rev()
            .find(|site| site.name == label)
            .map(|site| site.motif.len());

        for (run_label, run) in &annotations.iter().chunk_by(|a| a.label.as_str()) {
            if run_label != label {
                continue;
            }
            let positions = run.map(|a| a.pos).collect_vec();
            let piece_len = motif_len.unwrap_or(positions.len()).max(1);
            for piece in positions.chunks(piece_len) {
                features.push(FeatureSpan {
                    start: piece[0],
                    end: piece[piece.len() - 1],
                    label: label.to_string(),
                    color_index,
                });
            }
        }
    }
    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::{label_binding_sites, parse_binding_site};

    fn annotate(seq: &str) -> Vec<BaseAnnotation> {
        seq.chars()
            .enumerate()
            .map(|(pos, base)| BaseAnnotation {
                pos,
                base,
                score: 0.0,
                label: String::new(),
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
    fn features_grouped_by_label_in_first_appearance_order() {
        let mut annotations = annotate("TTGATCAAACGTGATC");
        let sites = vec![
            parse_binding_site("B=ACGT").unwrap(),
            parse_binding_site("A=GATC").unwrap(),
        ];
        label_binding_sites(&mut annotations, &sites);
        let features = binding_site_features(&annotations, &sites);
        assert_eq!(
            features,
            vec![span(2, 5, "A", 0), span(12, 15, "A", 0), span(8, 11, "B", 1)]
        );
    }

    #[test]
    fn back_to_back_occurrences_stay_separate() {
        let mut annotations = annotate("ACACT");
        let sites = vec![parse_binding_site("S=AC").unwrap()];
        label_binding_sites(&mut annotations, &sites);
        let features = binding_site_features(&annotations, &sites);
        assert_eq!(features, vec![span(0, 1, "S", 0), span(2, 3, "S", 0)]);
    }

    #[test]
    fn unknown_label_becomes_a_single_run() {
        let mut annotations = annotate("ACGTAC");
        for annotation in &mut annotations[1..4] {
            annotation.label = "manual".to_string();
        }
        let features = binding_site_features(&annotations, &[]);
        assert_eq!(features, vec![span(1, 3, "manual", 0)]);
    }

    #[test]
    fn no_labels_no_features() {
        let annotations = annotate("ACGT");
        assert!(binding_site_features(&annotations, &[]).is_empty());
    }
}
