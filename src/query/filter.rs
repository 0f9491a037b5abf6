use std::sync::Arc;
use crate::core::error::{Error, Result};
use crate::core::types::Record;
use crate::query::ast::{Criterion, FilterCriteria};
use crate::query::matcher;

pub const DEFAULT_MIN_AGE: i64 = 0;
pub const DEFAULT_MAX_AGE: i64 = 150;

/// Ordered criteria: age, city, phone, gender
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterChain {
    pub criteria: Vec<Criterion>,
}

impl FilterChain {
    pub fn compile(criteria: &FilterCriteria) -> Result<Self> {
        Self::compile_with_defaults(criteria, DEFAULT_MIN_AGE, DEFAULT_MAX_AGE)
    }

    /// Validates every input before producing any criterion
    pub fn compile_with_defaults(criteria: &FilterCriteria, default_min: i64, default_max: i64) -> Result<Self> {
        let mut chain = Vec::new();

        let min_age = criteria.min_age.trim();
        let max_age = criteria.max_age.trim();
        if !min_age.is_empty() || !max_age.is_empty() {
            chain.push(Criterion::AgeRange {
                min: parse_bound(min_age, default_min)?,
                max: parse_bound(max_age, default_max)?,
            });
        }

        let city = criteria.city.trim().to_lowercase();
        if !city.is_empty() {
            chain.push(Criterion::City(city));
        }

        let phone = criteria.phone.trim();
        if !phone.is_empty() {
            chain.push(Criterion::Phone(phone.to_string()));
        }

        let gender = criteria.gender.trim().to_lowercase();
        if !gender.is_empty() {
            chain.push(Criterion::Gender(gender));
        }

        Ok(FilterChain { criteria: chain })
    }

    /// Narrow `records` one criterion at a time
    pub fn apply(&self, records: &[Arc<Record>]) -> Vec<Arc<Record>> {
        let mut working = records.to_vec();
        for criterion in &self.criteria {
            working.retain(|record| matcher::satisfies(record, criterion));
        }
        working
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// Human-readable summary of the active criteria
    pub fn describe(&self) -> Vec<String> {
        self.criteria.iter()
            .map(|criterion| match criterion {
                Criterion::AgeRange { min, max } => format!("Age: {}-{}", min, max),
                Criterion::City(text) => format!("City: {}", text),
                Criterion::Phone(text) => format!("Phone: {}", text),
                Criterion::Gender(text) => format!("Gender: {}", text),
            })
            .collect()
    }
}

fn parse_bound(input: &str, default: i64) -> Result<i64> {
    if input.is_empty() {
        return Ok(default);
    }
    input.parse::<i64>()
        .map_err(|_| Error::invalid_input(format!("please enter valid numeric values for age, got '{}'", input)))
}
