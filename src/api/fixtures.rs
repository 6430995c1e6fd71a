//! Seed data for the test-data generator.
//!
//! The catalog is injected into the API handler so deployments can swap
//! the built-in name and profession pools for their own.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::{json, Value};

/// Records inserted by one reseed pass.
pub const SEED_COUNT: usize = 10;

/// Namespace the generated records live under.
pub const SEED_OBJECT_TYPE: &str = "test";

/// Name and profession pools for synthetic person records.
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    pub names: Vec<String>,
    pub professions: Vec<String>,
}

impl SeedCatalog {
    pub fn new(names: Vec<String>, professions: Vec<String>) -> Self {
        Self { names, professions }
    }

    /// Draw one synthetic person: random name, age in 15..=74, random
    /// profession. An empty pool falls back to a fixed placeholder.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Value {
        let name = self
            .names
            .choose(rng)
            .map(String::as_str)
            .unwrap_or("Alex");
        let profession = self
            .professions
            .choose(rng)
            .map(String::as_str)
            .unwrap_or("clerk");

        json!({
            "name": name,
            "age": rng.gen_range(15..75),
            "profession": profession,
        })
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
            professions: DEFAULT_PROFESSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const DEFAULT_NAMES: [&str; 50] = [
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Elijah", "Sophia", "Lucas", "Isabella", "Mason",
    "Mia", "Ethan", "Charlotte", "Logan", "Amelia", "James", "Harper", "Aiden", "Evelyn",
    "Jackson", "Abigail", "Sebastian", "Ella", "Jack", "Scarlett", "Owen", "Grace", "Daniel",
    "Chloe", "Wyatt", "Victoria", "Leo", "Riley", "Julian", "Aria", "Henry", "Lily", "Gabriel",
    "Aubrey", "Carter", "Zoey", "Isaac", "Penelope", "Oliver", "Layla", "Caleb", "Nora", "Nathan",
    "Hazel", "Ryan",
];

const DEFAULT_PROFESSIONS: [&str; 50] = [
    "teacher", "nurse", "carpenter", "electrician", "chef", "librarian", "plumber", "architect",
    "pharmacist", "journalist", "mechanic", "florist", "surveyor", "translator", "barista",
    "optician", "tailor", "locksmith", "beekeeper", "brewer", "butcher", "glazier", "welder",
    "painter", "gardener", "fisherman", "pilot", "paramedic", "midwife", "accountant",
    "photographer", "illustrator", "programmer", "geologist", "biologist", "historian",
    "economist", "dentist", "veterinarian", "firefighter", "detective", "cartographer",
    "archivist", "curator", "composer", "choreographer", "goldsmith", "potter", "roofer",
    "falconer",
];
