mod binding_site;
mod features;

pub use binding_site::{add_binding_site_label, label_binding_sites, parse_binding_site, BindingSite};
pub use features::{binding_site_features, FeatureSpan};
