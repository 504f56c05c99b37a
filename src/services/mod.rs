pub mod recolor_service;

pub use recolor_service::{default_output_path, RecolorOutcome, RecolorRequest, RecolorService};
