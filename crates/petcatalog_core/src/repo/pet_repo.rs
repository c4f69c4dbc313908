//! Pet repository contracts and SQLite implementation.
//!
//! # Invariants
//! - Enums persist as upper-case text (`DOG`, `FEMALE`, `AVAILABLE`).
//! - `photos` persists as a JSON array of strings.

use super::{count_rows, RepoError, RepoResult};
use crate::model::pet::{Gender, Pet, PetStatus, Species};
use rusqlite::{params, Connection, Row};

const PET_SELECT_SQL: &str = "SELECT
    name,
    species,
    breed,
    age,
    gender,
    city,
    description,
    photos,
    status
FROM pets";

/// Repository interface for adoptable animals.
pub trait PetRepository {
    fn count_pets(&self) -> RepoResult<u64>;
    fn create_pet(&self, pet: &Pet) -> RepoResult<i64>;
    /// Lists pets in insertion order.
    fn list_pets(&self) -> RepoResult<Vec<Pet>>;
}

/// SQLite-backed pet repository.
pub struct SqlitePetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PetRepository for SqlitePetRepository<'_> {
    fn count_pets(&self) -> RepoResult<u64> {
        count_rows(self.conn, "pets")
    }

    fn create_pet(&self, pet: &Pet) -> RepoResult<i64> {
        pet.validate()?;
        let photos = serde_json::to_string(&pet.photos)
            .map_err(|err| RepoError::InvalidData(format!("unencodable photos: {err}")))?;

        self.conn.execute(
            "INSERT INTO pets (
                name,
                species,
                breed,
                age,
                gender,
                city,
                description,
                photos,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                pet.name.as_str(),
                species_to_db(pet.species),
                pet.breed.as_str(),
                pet.age_months,
                gender_to_db(pet.gender),
                pet.city.as_str(),
                pet.description.as_str(),
                photos,
                status_to_db(pet.status),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_pets(&self) -> RepoResult<Vec<Pet>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PET_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut pets = Vec::new();

        while let Some(row) = rows.next()? {
            pets.push(parse_pet_row(row)?);
        }

        Ok(pets)
    }
}

fn parse_pet_row(row: &Row<'_>) -> RepoResult<Pet> {
    let species_text: String = row.get("species")?;
    let species = parse_species(&species_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid species `{species_text}` in pets.species"))
    })?;

    let gender_text: String = row.get("gender")?;
    let gender = parse_gender(&gender_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid gender `{gender_text}` in pets.gender"))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in pets.status"))
    })?;

    let photos_text: String = row.get("photos")?;
    let photos = serde_json::from_str::<Vec<String>>(&photos_text).map_err(|err| {
        RepoError::InvalidData(format!("invalid photos `{photos_text}` in pets.photos: {err}"))
    })?;

    let pet = Pet {
        name: row.get("name")?,
        species,
        breed: row.get("breed")?,
        age_months: row.get("age")?,
        gender,
        city: row.get("city")?,
        description: row.get("description")?,
        photos,
        status,
    };
    pet.validate()?;
    Ok(pet)
}

fn species_to_db(species: Species) -> &'static str {
    match species {
        Species::Dog => "DOG",
        Species::Cat => "CAT",
        Species::Other => "OTHER",
    }
}

fn parse_species(value: &str) -> Option<Species> {
    match value {
        "DOG" => Some(Species::Dog),
        "CAT" => Some(Species::Cat),
        "OTHER" => Some(Species::Other),
        _ => None,
    }
}

fn gender_to_db(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "MALE",
        Gender::Female => "FEMALE",
    }
}

fn parse_gender(value: &str) -> Option<Gender> {
    match value {
        "MALE" => Some(Gender::Male),
        "FEMALE" => Some(Gender::Female),
        _ => None,
    }
}

fn status_to_db(status: PetStatus) -> &'static str {
    match status {
        PetStatus::Available => "AVAILABLE",
        PetStatus::Pending => "PENDING",
        PetStatus::Adopted => "ADOPTED",
    }
}

fn parse_status(value: &str) -> Option<PetStatus> {
    match value {
        "AVAILABLE" => Some(PetStatus::Available),
        "PENDING" => Some(PetStatus::Pending),
        "ADOPTED" => Some(PetStatus::Adopted),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{PetRepository, SqlitePetRepository};
    use crate::db::{ensure_schema, SessionFactory, StorageTarget};
    use crate::model::pet::{Gender, Pet, PetStatus, Species};
    use crate::repo::RepoError;

    fn pet(name: &str) -> Pet {
        Pet {
            name: name.to_string(),
            species: Species::Cat,
            breed: "Sem raça definida".to_string(),
            age_months: 8,
            gender: Gender::Male,
            city: "Recife".to_string(),
            description: format!("{name} é um gato muito dócil e independente."),
            photos: vec![
                "https://example.org/a.jpg".to_string(),
                "https://example.org/b.jpg".to_string(),
            ],
            status: PetStatus::Pending,
        }
    }

    #[test]
    fn create_and_list_preserves_fields_and_order() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        ensure_schema(&mut session).unwrap();
        let repo = SqlitePetRepository::new(session.connection());

        repo.create_pet(&pet("Simba")).unwrap();
        repo.create_pet(&pet("Felix")).unwrap();

        assert_eq!(repo.count_pets().unwrap(), 2);
        assert_eq!(repo.list_pets().unwrap(), vec![pet("Simba"), pet("Felix")]);
    }

    #[test]
    fn corrupted_enum_text_is_reported_as_invalid_data() {
        let factory = SessionFactory::new(&StorageTarget::Memory).unwrap();
        let mut session = factory.open_session().unwrap();
        ensure_schema(&mut session).unwrap();
        session
            .connection()
            .execute_batch(
                "INSERT INTO pets (name, species, breed, age, gender, city, description, photos, status)
                 VALUES ('Rex', 'DOG', 'Vira-lata', 1, 'MALE', 'Recife', '', 'not json', 'AVAILABLE');",
            )
            .unwrap();

        let repo = SqlitePetRepository::new(session.connection());
        let err = repo.list_pets().unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(message) if message.contains("pets.photos")));
    }
}
