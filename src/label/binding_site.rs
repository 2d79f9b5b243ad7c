use crate::score::BaseAnnotation;
use crate::utils::Result;

/// A named literal motif, e.g. `SOX9=AACAAT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingSite {
    pub name: String,
    pub motif: String,
}

/// Parses `NAME=MOTIF`.
pub fn parse_binding_site(s: &str) -> Result<BindingSite> {
    match s.split_once('=') {
        Some((name, motif)) if !name.is_empty() && !motif.is_empty() => Ok(BindingSite {
            name: name.to_string(),
            motif: motif.to_string(),
        }),
        _ => Err(format!("Expected NAME=MOTIF, got: {}", s)),
    }
}

/// Labels every base inside an occurrence of `motif` with `name`.
///
/// Occurrences are found left to right without overlap: the search
/// resumes right after the end of the previous match. Matching is literal
/// and case-sensitive. Bases are expected to be ASCII.
pub fn add_binding_site_label(annotations: &mut [BaseAnnotation], motif: &str, name: &str) {
    if motif.is_empty() {
        return;
    }
    let seq: String = annotations.iter().map(|a| a.base).collect();
    // match_indices reports byte offsets; annotations are indexed by char
    let char_starts = seq.char_indices().map(|(offset, _)| offset).collect::<Vec<_>>();
    let motif_len = motif.chars().count();
    let mut hits = 0;
    for (offset, _) in seq.match_indices(motif) {
        let start = char_starts.partition_point(|&o| o < offset);
        for annotation in &mut annotations[start..start + motif_len] {
            annotation.label = name.to_string();
        }
        hits += 1;
    }
    log::debug!("{}: {} occurrences of {}", name, hits, motif);
}

/// Clears all labels, then applies `sites` in order; later sites win.
pub fn label_binding_sites(annotations: &mut [BaseAnnotation], sites: &[BindingSite]) {
    for annotation in annotations.iter_mut() {
        annotation.label.clear();
    }
    for site in sites {
        add_binding_site_label(annotations, &site.motif, &site.name);
    }
}
