use crate::cli::{ScoreArgs, TrackInputArgs};
use crate::label::label_binding_sites;
use crate::score::{score_sequence, write_annotations, BaseAnnotation};
use crate::utils::{create_writer, read_sequence_dict, Result};

/// Scores one sequence and labels its binding sites.
pub fn annotate_sequence(input: &TrackInputArgs) -> Result<Vec<BaseAnnotation>> {
    let seq_dict = read_sequence_dict(&input.fasta_path)?;
    let mut annotations = score_sequence(&input.seq_id, &seq_dict, &input.predictions_path)?;
    label_binding_sites(&mut annotations, &input.binding_sites);

    let labeled = annotations.iter().filter(|a| !a.label.is_empty()).count();
    log::info!(
        "{}: {} bases scored, {} inside binding sites",
        input.seq_id,
        annotations.len(),
        labeled
    );
    Ok(annotations)
}

pub fn score(args: ScoreArgs) -> Result<()> {
    let annotations = annotate_sequence(&args.input)?;
    write_annotations(create_writer(args.output_path.as_deref())?, &annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::parse_binding_site;
    use std::io::Write;

    #[test]
    fn annotate_sequence_scores_and_labels() {
        let dir = tempfile::tempdir().unwrap();
        let fasta_path = dir.path().join("seqs.fa");
        let predictions_path = dir.path().join("predictions.tsv");
        let mut fasta = std::fs::File::create(&fasta_path).unwrap();
        writeln!(fasta, ">s1\nGGACGTGGGG\n>s2\nAAAA").unwrap();
        let mut predictions = std::fs::File::create(&predictions_path).unwrap();
        write!(
            predictions,
            "s1\t0\t4\t1.0\ns1\t2\t6\t2.0\ns1\t4\t8\t4.0\ns2\t0\t2\t1.0\n"
        )
        .unwrap();

        let input = TrackInputArgs {
            fasta_path,
            predictions_path,
            seq_id: "s1".to_string(),
            binding_sites: vec![parse_binding_site("X=ACGT").unwrap()],
        };
        let annotations = annotate_sequence(&input).unwrap();
        assert_eq!(annotations.len(), 10);
        let labels: Vec<&str> = annotations.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(labels, vec!["", "", "X", "X", "X", "X", "", "", "", ""]);
        assert_eq!(annotations[2].score, 1.5);
        assert_eq!(annotations[9].score, 0.0);
    }
}
