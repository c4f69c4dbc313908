//! Fixed sample roster of adoptable animals.
//!
//! # Invariants
//! - Roster order is stable; index drives age and city assignment.
//! - Output depends only on the literal tables below.

use super::text::describe_pet;
use crate::model::pet::{Gender, Pet, PetStatus, Species};

/// Cities assigned round-robin by roster index.
pub const CITIES: [&str; 10] = [
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Salvador",
    "Brasília",
    "Fortaleza",
    "Manaus",
    "Curitiba",
    "Recife",
    "Porto Alegre",
];

#[derive(Debug, Clone, Copy)]
struct RosterEntry {
    name: &'static str,
    gender: Gender,
    photo: &'static str,
}

const fn entry(name: &'static str, gender: Gender, photo: &'static str) -> RosterEntry {
    RosterEntry {
        name,
        gender,
        photo,
    }
}

/// Per-species generation rules.
#[derive(Debug, Clone, Copy)]
pub struct SpeciesRoster {
    pub species: Species,
    pub breed: &'static str,
    pub base_age_months: u32,
    pub step_age_months: u32,
    entries: &'static [RosterEntry],
}

impl SpeciesRoster {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Age in months of the animal at roster `index`.
    pub fn age_at(&self, index: usize) -> u32 {
        let step = u32::try_from(index).map_or(u32::MAX, |index| {
            index.saturating_mul(self.step_age_months)
        });
        self.base_age_months.saturating_add(step)
    }

    /// Expands the roster into catalog records.
    pub fn pets(&self) -> Vec<Pet> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Pet {
                name: entry.name.to_string(),
                species: self.species,
                breed: self.breed.to_string(),
                age_months: self.age_at(index),
                gender: entry.gender,
                city: city_at(index).to_string(),
                description: describe_pet(entry.name, entry.gender, self.species),
                photos: vec![entry.photo.to_string()],
                status: PetStatus::Available,
            })
            .collect()
    }
}

/// City for roster `index`, cycling through [`CITIES`].
pub fn city_at(index: usize) -> &'static str {
    CITIES[index % CITIES.len()]
}

pub const DOGS: SpeciesRoster = SpeciesRoster {
    species: Species::Dog,
    breed: "Vira-lata",
    base_age_months: 12,
    step_age_months: 6,
    entries: &[
        entry(
            "Luna",
            Gender::Female,
            "https://images.unsplash.com/photo-1552053831-71594a27632d?w=400&h=300&fit=crop",
        ),
        entry(
            "Max",
            Gender::Male,
            "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=400&h=300&fit=crop",
        ),
        entry(
            "Bella",
            Gender::Female,
            "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?w=400&h=300&fit=crop",
        ),
        entry(
            "Thor",
            Gender::Male,
            "https://images.unsplash.com/photo-1551717743-49959800b1f6?w=400&h=300&fit=crop",
        ),
        entry(
            "Lola",
            Gender::Female,
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=300&fit=crop",
        ),
        entry(
            "Zeus",
            Gender::Male,
            "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?w=400&h=300&fit=crop",
        ),
        entry(
            "Maya",
            Gender::Female,
            "https://images.unsplash.com/photo-1605568427561-40dd23c2acea?w=400&h=300&fit=crop",
        ),
        entry(
            "Apollo",
            Gender::Male,
            "https://www.petelegante.com.br/media/dicas/ado%C3%A7%C3%A3o-de-cachorro-filhote.jpg",
        ),
        entry(
            "Nala",
            Gender::Female,
            "https://images.unsplash.com/photo-1583337130417-3346a1be7dee?w=400&h=300&fit=crop",
        ),
        entry(
            "Rocky",
            Gender::Male,
            "https://static.wixstatic.com/media/e2e4ef_8681efaf6b4c4f05b2605a1162957150~mv2.jpg/v1/fill/w_516,h_432,al_c,q_80,usm_0.66_1.00_0.01,enc_avif,quality_auto/Simon_cachorro_PatinhasCarentes_05.jpg",
        ),
        entry(
            "Sofia",
            Gender::Female,
            "https://images.unsplash.com/photo-1543466835-00a7907e9de1?w=400&h=300&fit=crop",
        ),
        entry(
            "Bruno",
            Gender::Male,
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?w=400&h=300&fit=crop",
        ),
        entry(
            "Rex",
            Gender::Male,
            "https://images.unsplash.com/photo-1601758228041-f3b2795255f1?w=400&h=300&fit=crop",
        ),
        entry(
            "Karen",
            Gender::Female,
            "https://images.unsplash.com/photo-1605568427561-40dd23c2acea?w=400&h=300&fit=crop",
        ),
        entry(
            "Charlie",
            Gender::Male,
            "https://images.unsplash.com/photo-1551717743-49959800b1f6?w=400&h=300&fit=crop",
        ),
    ],
};

pub const CATS: SpeciesRoster = SpeciesRoster {
    species: Species::Cat,
    breed: "Sem raça definida",
    base_age_months: 8,
    step_age_months: 4,
    entries: &[
        entry(
            "Mimi",
            Gender::Female,
            "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=300&fit=crop",
        ),
        entry(
            "Simba",
            Gender::Male,
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400&h=300&fit=crop",
        ),
        entry(
            "Carminha",
            Gender::Female,
            "https://images.unsplash.com/photo-1596854407944-bf87f6fdd49e?w=400&h=300&fit=crop",
        ),
        entry(
            "Felix",
            Gender::Male,
            "https://images.unsplash.com/photo-1573865526739-10659fec78a5?w=400&h=300&fit=crop",
        ),
        entry(
            "BellaCat",
            Gender::Female,
            "https://images.unsplash.com/photo-1513245543132-31f507417b26?w=400&h=300&fit=crop",
        ),
        entry(
            "Garfield",
            Gender::Male,
            "https://images.unsplash.com/photo-1592194996308-7b43878e84a6?w=400&h=300&fit=crop",
        ),
        entry(
            "NalaCat",
            Gender::Female,
            "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=300&fit=crop",
        ),
        entry(
            "Pink",
            Gender::Male,
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400&h=300&fit=crop",
        ),
        entry(
            "MayaCat",
            Gender::Female,
            "https://images.unsplash.com/photo-1596854407944-bf87f6fdd49e?w=400&h=300&fit=crop",
        ),
        entry(
            "Whiskers",
            Gender::Male,
            "https://images.unsplash.com/photo-1573865526739-10659fec78a5?w=400&h=300&fit=crop",
        ),
        entry(
            "Laly",
            Gender::Female,
            "https://images.unsplash.com/photo-1513245543132-31f507417b26?w=400&h=300&fit=crop",
        ),
        entry(
            "Shadow",
            Gender::Male,
            "https://images.unsplash.com/photo-1592194996308-7b43878e84a6?w=400&h=300&fit=crop",
        ),
        entry(
            "Brina",
            Gender::Female,
            "https://images.unsplash.com/photo-1514888286974-6c03e2ca1dba?w=400&h=300&fit=crop",
        ),
        entry(
            "Tiger",
            Gender::Male,
            "https://images.unsplash.com/photo-1574158622682-e40e69881006?w=400&h=300&fit=crop",
        ),
        entry(
            "Mia",
            Gender::Female,
            "https://images.unsplash.com/photo-1596854407944-bf87f6fdd49e?w=400&h=300&fit=crop",
        ),
    ],
};

/// Dogs first, then cats.
pub fn roster_pets() -> Vec<Pet> {
    let mut pets = DOGS.pets();
    pets.extend(CATS.pets());
    pets
}
