//! Portuguese description templates with grammatical gender agreement.

use crate::model::pet::{Gender, Species};

/// Builds the catalog description for one animal.
///
/// Only the noun phrase and adjectives change with `gender`; the sentence
/// shape is fixed per species.
pub fn describe_pet(name: &str, gender: Gender, species: Species) -> String {
    let female = gender == Gender::Female;
    match species {
        Species::Dog => {
            let (noun, affectionate, playful) = if female {
                ("uma cadela", "carinhosa", "brincalhona")
            } else {
                ("um cachorro", "carinhoso", "brincalhão")
            };
            format!("{name} é {noun} muito {affectionate} e {playful}.")
        }
        Species::Cat => {
            let noun = if female { "uma gata" } else { "um gato" };
            format!("{name} é {noun} muito dócil e independente.")
        }
        Species::Other => {
            let noun = if female {
                "uma companheira"
            } else {
                "um companheiro"
            };
            format!("{name} é {noun} muito especial.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::describe_pet;
    use crate::model::pet::{Gender, Species};

    #[test]
    fn female_dog() {
        assert_eq!(
            describe_pet("Luna", Gender::Female, Species::Dog),
            "Luna é uma cadela muito carinhosa e brincalhona."
        );
    }

    #[test]
    fn male_dog() {
        assert_eq!(
            describe_pet("Max", Gender::Male, Species::Dog),
            "Max é um cachorro muito carinhoso e brincalhão."
        );
    }

    #[test]
    fn female_cat() {
        assert_eq!(
            describe_pet("Mimi", Gender::Female, Species::Cat),
            "Mimi é uma gata muito dócil e independente."
        );
    }

    #[test]
    fn male_cat() {
        assert_eq!(
            describe_pet("Simba", Gender::Male, Species::Cat),
            "Simba é um gato muito dócil e independente."
        );
    }

    #[test]
    fn other_species_still_agrees_in_gender() {
        assert_eq!(
            describe_pet("Pipoca", Gender::Female, Species::Other),
            "Pipoca é uma companheira muito especial."
        );
    }
}
