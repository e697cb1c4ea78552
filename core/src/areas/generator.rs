use crate::areas::location::CANDIDATE_LOCATIONS;
use crate::areas::selection::{select_areas, AreaOdds, AreaSet, DrawStreams};
use crate::areas::template::{SpliceLayout, TemplateDocument};
use crate::areas::variant::Variant;
use crate::prelude::{check_probability, ToolError, ToolResult};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for generating a client/server pair of experiment files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub template_path: PathBuf,
    pub client_output: PathBuf,
    pub server_output: PathBuf,
    /// Chance that a candidate location hosts an area.
    pub p_gen: f64,
    /// Chance that an area is blue (easy) on the server side.
    pub p_blue_server: f64,
    /// Chance that an area is blue (easy) on the client side.
    pub p_blue_client: f64,
    pub seed: Option<u64>,
    pub anchor_from_end: usize,
    pub mode_line_index: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let layout = SpliceLayout::default();
        Self {
            template_path: PathBuf::from("kilobot_ALF_dhtf_template.argos"),
            client_output: PathBuf::from("kilobot_ALF_dhtf_client_g.argos"),
            server_output: PathBuf::from("kilobot_ALF_dhtf_server_g.argos"),
            p_gen: 0.75,
            p_blue_server: 0.7,
            p_blue_client: 0.7,
            seed: None,
            anchor_from_end: layout.anchor_from_end,
            mode_line_index: layout.mode_line_index,
        }
    }
}

impl GeneratorConfig {
    pub fn odds(&self) -> ToolResult<AreaOdds> {
        Ok(AreaOdds {
            p_gen: check_probability("p_gen", self.p_gen)?,
            p_blue_server: check_probability("p_blue_server", self.p_blue_server)?,
            p_blue_client: check_probability("p_blue_client", self.p_blue_client)?,
        })
    }

    pub fn layout(&self) -> SpliceLayout {
        SpliceLayout {
            anchor_from_end: self.anchor_from_end,
            mode_line_index: self.mode_line_index,
        }
    }

    pub fn output_path(&self, variant: Variant) -> &Path {
        match variant {
            Variant::Client => &self.client_output,
            Variant::Server => &self.server_output,
        }
    }
}

/// Outcome of one generator run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub seed: u64,
    pub areas: AreaSet,
    pub client_output: PathBuf,
    pub server_output: PathBuf,
}

/// Summary consumed alongside the generated files: which areas exist and
/// which of them are hard (red) for each side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaManifest {
    pub seed: u64,
    pub num_of_areas: usize,
    pub active_areas: Vec<usize>,
    pub hard_tasks_server: Vec<usize>,
    pub hard_tasks_client: Vec<usize>,
    pub areas: AreaSet,
}

impl GenerationReport {
    pub fn manifest(&self) -> AreaManifest {
        AreaManifest {
            seed: self.seed,
            num_of_areas: self.areas.len(),
            active_areas: self.areas.areas.iter().map(|area| area.id).collect(),
            hard_tasks_server: self.areas.hard_tasks(Variant::Server),
            hard_tasks_client: self.areas.hard_tasks(Variant::Client),
            areas: self.areas.clone(),
        }
    }
}

pub struct AreaSetGenerator {
    config: GeneratorConfig,
    odds: AreaOdds,
}

impl AreaSetGenerator {
    pub fn new(config: GeneratorConfig) -> ToolResult<Self> {
        let odds = config.odds()?;
        Ok(Self { config, odds })
    }

    /// Draws the area set for `seed` without touching the filesystem.
    pub fn draw_areas(&self, seed: u64) -> AreaSet {
        let mut streams = DrawStreams::from_seed(seed);
        select_areas(
            &CANDIDATE_LOCATIONS,
            &self.odds,
            &mut streams.inclusion,
            &mut streams.server,
            &mut streams.client,
        )
    }

    /// Draws one area set and writes the client file, then the server file.
    pub fn generate(&self) -> ToolResult<GenerationReport> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let areas = self.draw_areas(seed);
        info!(
            "seed {} selected {} of {} candidate areas",
            seed,
            areas.len(),
            CANDIDATE_LOCATIONS.len()
        );

        for variant in [Variant::Client, Variant::Server] {
            self.write_variant(&areas, variant)?;
        }

        Ok(GenerationReport {
            seed,
            areas,
            client_output: self.config.client_output.clone(),
            server_output: self.config.server_output.clone(),
        })
    }

    /// Renders one variant from a freshly loaded template.
    pub fn render_variant(&self, areas: &AreaSet, variant: Variant) -> ToolResult<String> {
        let template = TemplateDocument::load(&self.config.template_path)?;
        let lines = template.splice(
            &areas.fragments(variant),
            &variant.mode_marker(),
            &self.config.layout(),
        )?;
        Ok(lines.concat())
    }

    fn write_variant(&self, areas: &AreaSet, variant: Variant) -> ToolResult<()> {
        let rendered = self.render_variant(areas, variant)?;
        let path = self.config.output_path(variant);
        fs::write(path, rendered).map_err(|err| ToolError::io(path, err))?;
        debug!(
            "{} variant written to {} (hard tasks {:?})",
            variant.label(),
            path.display(),
            areas.hard_tasks(variant)
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::variant::AreaColor;
    use tempfile::TempDir;

    fn template_text(lines: usize) -> String {
        (0..lines).map(|i| format!("<!-- template line {i} -->\n")).collect()
    }

    fn config_in(dir: &Path, template_lines: usize) -> GeneratorConfig {
        let template_path = dir.join("kilobot_ALF_dhtf_template.argos");
        fs::write(&template_path, template_text(template_lines)).unwrap();
        GeneratorConfig {
            template_path,
            client_output: dir.join("kilobot_ALF_dhtf_client_g.argos"),
            server_output: dir.join("kilobot_ALF_dhtf_server_g.argos"),
            seed: Some(7),
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn defaults_match_experiment_constants() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.p_gen, 0.75);
        assert_eq!(cfg.p_blue_server, 0.7);
        assert_eq!(cfg.p_blue_client, 0.7);
        assert_eq!(cfg.layout(), SpliceLayout::default());
    }

    #[test]
    fn invalid_probability_fails_construction() {
        let cfg = GeneratorConfig {
            p_blue_client: -0.1,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            AreaSetGenerator::new(cfg),
            Err(ToolError::InvalidProbability { name: "p_blue_client", .. })
        ));
    }

    #[test]
    fn full_selection_produces_matching_variants() {
        let dir = TempDir::new().unwrap();
        let cfg = GeneratorConfig {
            p_gen: 1.0,
            ..config_in(dir.path(), 72)
        };
        let generator = AreaSetGenerator::new(cfg.clone()).unwrap();
        let report = generator.generate().unwrap();
        assert_eq!(report.areas.len(), 16);

        let client = fs::read_to_string(&cfg.client_output).unwrap();
        let server = fs::read_to_string(&cfg.server_output).unwrap();
        let client_lines: Vec<&str> = client.split_inclusive('\n').collect();
        let server_lines: Vec<&str> = server.split_inclusive('\n').collect();
        assert_eq!(client_lines.len(), 72 + 16 + 1);
        assert_eq!(server_lines.len(), 72 + 16 + 1);
        assert!(client_lines[42].contains("mode=\"CLIENT\""));
        assert!(server_lines[42].contains("mode=\"SERVER\""));

        for (index, (c, s)) in client_lines.iter().zip(&server_lines).enumerate() {
            if index == 42 || c == s {
                continue;
            }
            assert!(c.contains("<Area"), "line {index} differs outside an area node");
            let attrs_end = c.find("color=").unwrap();
            assert_eq!(&s[..attrs_end], &c[..attrs_end]);
        }

        for area in &report.areas.areas {
            assert!(client.contains(&area.fragment(Variant::Client)));
            assert!(server.contains(&area.fragment(Variant::Server)));
        }
        // Area0 sits right after the template head, ids ascending.
        assert!(client_lines[1].starts_with("\t\t\t<Area0 "));
        assert!(client_lines[16].starts_with("\t\t\t<Area15 "));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let dir = TempDir::new().unwrap();
        let generator = AreaSetGenerator::new(config_in(dir.path(), 80)).unwrap();
        let first = generator.generate().unwrap();
        let client_first = fs::read_to_string(&first.client_output).unwrap();
        let second = generator.generate().unwrap();
        let client_second = fs::read_to_string(&second.client_output).unwrap();
        assert_eq!(first.areas, second.areas);
        assert_eq!(client_first, client_second);
    }

    #[test]
    fn short_template_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let cfg = config_in(dir.path(), 40);
        let generator = AreaSetGenerator::new(cfg.clone()).unwrap();
        assert!(matches!(
            generator.generate(),
            Err(ToolError::TemplateTooShort { lines: 40, .. })
        ));
        assert!(!cfg.client_output.exists());
        assert!(!cfg.server_output.exists());
    }

    #[test]
    fn server_write_failure_keeps_client_file() {
        let dir = TempDir::new().unwrap();
        let cfg = GeneratorConfig {
            server_output: dir.path().to_path_buf(),
            ..config_in(dir.path(), 72)
        };
        let generator = AreaSetGenerator::new(cfg.clone()).unwrap();
        assert!(matches!(generator.generate(), Err(ToolError::Io { .. })));
        assert!(cfg.client_output.exists());
        let client = fs::read_to_string(&cfg.client_output).unwrap();
        assert!(client.contains("mode=\"CLIENT\""));
    }

    #[test]
    fn missing_template_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let cfg = GeneratorConfig {
            template_path: dir.path().join("absent.argos"),
            ..config_in(dir.path(), 72)
        };
        let generator = AreaSetGenerator::new(cfg).unwrap();
        assert!(matches!(generator.generate(), Err(ToolError::Io { .. })));
    }

    #[test]
    fn manifest_lists_hard_tasks_per_side() {
        let generator = AreaSetGenerator::new(GeneratorConfig {
            p_gen: 1.0,
            ..GeneratorConfig::default()
        })
        .unwrap();
        let areas = generator.draw_areas(99);
        let report = GenerationReport {
            seed: 99,
            areas: areas.clone(),
            client_output: PathBuf::new(),
            server_output: PathBuf::new(),
        };
        let manifest = report.manifest();
        assert_eq!(manifest.num_of_areas, 16);
        assert_eq!(manifest.active_areas, (0..16).collect::<Vec<_>>());
        let red_server = areas
            .areas
            .iter()
            .filter(|a| a.server_color == AreaColor::Red)
            .count();
        assert_eq!(manifest.hard_tasks_server.len(), red_server);

        let json = serde_json::to_string(&manifest).unwrap();
        let back: AreaManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, manifest);
    }
}
