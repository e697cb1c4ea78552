use crate::areas::location::CandidateLocation;
use crate::areas::variant::{AreaColor, Variant};
use crate::prelude::Bernoulli;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Probabilities driving one area draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaOdds {
    pub p_gen: f64,
    pub p_blue_server: f64,
    pub p_blue_client: f64,
}

/// Three independent RNG streams derived from one run seed.
///
/// Inclusion, server colour and client colour never share state, so
/// reseeding one stream leaves the outcomes of the other two untouched.
pub struct DrawStreams {
    pub inclusion: StdRng,
    pub server: StdRng,
    pub client: StdRng,
}

impl DrawStreams {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inclusion: stream(seed, 1),
            server: stream(seed, 2),
            client: stream(seed, 3),
        }
    }
}

fn stream(seed: u64, index: u64) -> StdRng {
    StdRng::seed_from_u64(seed ^ index.wrapping_mul(MIXING_CONSTANT))
}

/// A selected candidate with its dense id and per-variant colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaInstance {
    pub id: usize,
    pub candidate: usize,
    pub location: CandidateLocation,
    pub server_color: AreaColor,
    pub client_color: AreaColor,
}

impl AreaInstance {
    pub fn color(&self, variant: Variant) -> AreaColor {
        match variant {
            Variant::Client => self.client_color,
            Variant::Server => self.server_color,
        }
    }

    /// `<AreaN .../>` node for the given variant, newline terminated.
    pub fn fragment(&self, variant: Variant) -> String {
        let (r, g, b) = self.color(variant).rgb();
        format!(
            "\t\t\t<Area{id}{attrs} color=\"{r},{g},{b},255\" ></Area{id}>\n",
            id = self.id,
            attrs = self.location.attributes(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaSet {
    pub areas: Vec<AreaInstance>,
}

impl AreaSet {
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn fragments(&self, variant: Variant) -> Vec<String> {
        self.areas.iter().map(|area| area.fragment(variant)).collect()
    }

    /// Ids of the red areas, i.e. the hard tasks, for one variant.
    pub fn hard_tasks(&self, variant: Variant) -> Vec<usize> {
        self.areas
            .iter()
            .filter(|area| area.color(variant) == AreaColor::Red)
            .map(|area| area.id)
            .collect()
    }
}

/// Walks the candidates in index order, drawing inclusion once per
/// candidate and, for included ones, one colour per variant.
pub fn select_areas<I, S, C>(
    candidates: &[CandidateLocation],
    odds: &AreaOdds,
    inclusion: &mut I,
    server: &mut S,
    client: &mut C,
) -> AreaSet
where
    I: Bernoulli + ?Sized,
    S: Bernoulli + ?Sized,
    C: Bernoulli + ?Sized,
{
    let mut areas = Vec::with_capacity(candidates.len());
    for (candidate, location) in candidates.iter().enumerate() {
        if !inclusion.draw(odds.p_gen) {
            continue;
        }
        areas.push(AreaInstance {
            id: areas.len(),
            candidate,
            location: *location,
            server_color: AreaColor::from_draw(server.draw(odds.p_blue_server)),
            client_color: AreaColor::from_draw(client.draw(odds.p_blue_client)),
        });
    }
    AreaSet { areas }
}
