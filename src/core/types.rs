use serde::{Serialize, Deserialize};

/// Position of a record inside one dataset generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub u32);

impl RecordId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// The twelve positional fields of a source line, in source order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    MobileNumber,
    UserId,
    FirstName,
    LastName,
    Gender,
    Residence,
    Birthplace,
    Relationship,
    Workplace,
    Joined,
    Email,
    Birthdate,
}

impl Field {
    pub const POSITIONAL: [Field; 12] = [
        Field::MobileNumber,
        Field::UserId,
        Field::FirstName,
        Field::LastName,
        Field::Gender,
        Field::Residence,
        Field::Birthplace,
        Field::Relationship,
        Field::Workplace,
        Field::Joined,
        Field::Email,
        Field::Birthdate,
    ];
}

/// Positional field values of one line before normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub values: [String; 12],
}

impl RawFields {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field as usize]
    }

    pub fn set(&mut self, field: Field, value: String) {
        self.values[field as usize] = value;
    }
}

/// One normalized person entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub mobile_number: String,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub residence: String,
    pub birthplace: String,
    pub relationship: String,
    pub workplace: String,
    pub joined: String,
    pub email: String,
    pub birthdate: String,
    pub country: String,
    pub age: Option<i32>,
}

impl Record {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::MobileNumber => &self.mobile_number,
            Field::UserId => &self.user_id,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Gender => &self.gender,
            Field::Residence => &self.residence,
            Field::Birthplace => &self.birthplace,
            Field::Relationship => &self.relationship,
            Field::Workplace => &self.workplace,
            Field::Joined => &self.joined,
            Field::Email => &self.email,
            Field::Birthdate => &self.birthdate,
        }
    }

    /// Build a record from positional fields; `country` and `age` are attached by the caller
    pub fn from_raw(raw: RawFields, country: String, age: Option<i32>) -> Self {
        let [
            mobile_number,
            user_id,
            first_name,
            last_name,
            gender,
            residence,
            birthplace,
            relationship,
            workplace,
            joined,
            email,
            birthdate,
        ] = raw.values;

        Record {
            mobile_number,
            user_id,
            first_name,
            last_name,
            gender,
            residence,
            birthplace,
            relationship,
            workplace,
            joined,
            email,
            birthdate,
            country,
            age,
        }
    }

    pub fn age_text(&self) -> String {
        self.age.map(|age| age.to_string()).unwrap_or_default()
    }
}
