//! A validated (dimensions, profiles) pair.

use std::collections::HashSet;

use crate::config::OPTIONS_PER_DIMENSION;
use crate::error::LayoutError;

use super::{Dimension, Profile};

/// An answer that will encode as "no signal".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnmatchedAnswer {
    pub profile: String,
    pub dimension: String,
    /// `None` when the profile has no value for the dimension.
    pub value: Option<String>,
}

/// Dimensions and profiles that passed structural validation.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub dimensions: Vec<Dimension>,
    pub profiles: Vec<Profile>,
}

impl Dataset {
    /// Validate and wrap.
    ///
    /// Fails on structural problems with the dimension list. Profile answers
    /// that match nothing are allowed and reported by [`Dataset::unmatched_answers`].
    pub fn new(dimensions: Vec<Dimension>, profiles: Vec<Profile>) -> Result<Self, LayoutError> {
        validate_dimensions(&dimensions)?;
        Ok(Self {
            dimensions,
            profiles,
        })
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Index of the profile called `name`.
    pub fn profile_index(&self, name: &str) -> Result<usize, LayoutError> {
        self.profiles
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| LayoutError::UnknownProfile(name.to_string()))
    }

    /// Every (profile, dimension) whose answer is absent or not an option.
    pub fn unmatched_answers(&self) -> Vec<UnmatchedAnswer> {
        let mut out = Vec::new();
        for profile in &self.profiles {
            for dim in &self.dimensions {
                let value = profile.answer(&dim.id);
                let matched = value.and_then(|v| dim.option_index(v)).is_some();
                if !matched {
                    out.push(UnmatchedAnswer {
                        profile: profile.name.clone(),
                        dimension: dim.id.clone(),
                        value: value.map(str::to_string),
                    });
                }
            }
        }
        out
    }
}

/// Structural checks on a dimension list.
pub fn validate_dimensions(dimensions: &[Dimension]) -> Result<(), LayoutError> {
    if dimensions.is_empty() {
        return Err(LayoutError::NoDimensions);
    }

    let mut seen_ids = HashSet::with_capacity(dimensions.len());
    for dim in dimensions {
        if !seen_ids.insert(dim.id.as_str()) {
            return Err(LayoutError::DuplicateDimension(dim.id.clone()));
        }
        if dim.options.len() != OPTIONS_PER_DIMENSION {
            return Err(LayoutError::InvalidDimension {
                id: dim.id.clone(),
                expected: OPTIONS_PER_DIMENSION,
                got: dim.options.len(),
            });
        }
        let mut seen_values = HashSet::with_capacity(OPTIONS_PER_DIMENSION);
        for opt in &dim.options {
            if !seen_values.insert(opt.value.as_str()) {
                return Err(LayoutError::DuplicateOption {
                    dimension: dim.id.clone(),
                    value: opt.value.clone(),
                });
            }
        }
    }
    Ok(())
}
