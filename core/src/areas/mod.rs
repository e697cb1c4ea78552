pub mod generator;
pub mod location;
pub mod selection;
pub mod template;
pub mod variant;

pub use generator::{AreaManifest, AreaSetGenerator, GenerationReport, GeneratorConfig};
pub use location::{CandidateLocation, CANDIDATE_LOCATIONS};
pub use selection::{select_areas, AreaInstance, AreaOdds, AreaSet, DrawStreams};
pub use template::{SpliceLayout, TemplateDocument};
pub use variant::{AreaColor, Variant};
