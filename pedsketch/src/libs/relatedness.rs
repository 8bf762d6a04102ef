// PEDSKETCH - Pedigree sketches from pairwise relatedness
// Copyright (C) 2024  The PEDSKETCH authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

/// A pair of individuals and their relatedness coefficient as read from the input table
#[derive(Debug, Clone, PartialEq)]
pub struct RelatednessRow {
    pub indv1: String,
    pub indv2: String,
    pub relatedness: f64,
    /// Relational distance fixed by the input source (e.g. an ML-Relate category)
    pub distance: Option<u32>,
}

impl RelatednessRow {
    pub fn new(indv1: impl Into<String>, indv2: impl Into<String>, relatedness: f64) -> Self {
        Self {
            indv1: indv1.into(),
            indv2: indv2.into(),
            relatedness,
            distance: None,
        }
    }

    pub fn with_distance(mut self, distance: u32) -> Self {
        self.distance = Some(distance);
        self
    }

    /// The precomputed distance if present, otherwise the distance encoded from the coefficient.
    /// `None` means the pair is unrelated.
    pub fn relational_distance(&self) -> Option<u32> {
        match self.distance {
            Some(distance) => Some(distance),
            None => encode_distance(self.relatedness),
        }
    }

    pub fn is_self_pair(&self) -> bool {
        self.indv1 == self.indv2
    }
}

/// Relational distance from a relatedness coefficient.
///
/// Relatedness halves with every generation separating two individuals (0.5 parent-offspring,
/// 0.25 grandparent or half-sibling, 0.125 ...), so the distance is `round(log2(1 / r))`.
/// Non-positive coefficients are unrelated and return `None`.
///
/// ```text
/// encode_distance(0.5)   --> Some(1)
/// encode_distance(0.25)  --> Some(2)
/// encode_distance(0.125) --> Some(3)
/// encode_distance(<=0)   --> None
/// ```
pub fn encode_distance(relatedness: f64) -> Option<u32> {
    if relatedness.is_nan() || relatedness <= 0.0 {
        return None;
    }
    Some((1.0 / relatedness).log2().round().max(0.0) as u32)
}

/// Rescale values linearly to [0,1].
///
/// The minimum and maximum include the sentinels 0 and 1, so values that already lie inside
/// [0,1] are left untouched.
pub fn normalize(values: &mut [f64]) {
    let (min, max) = values
        .iter()
        .fold((0.0_f64, 1.0_f64), |(min, max), v| (min.min(*v), max.max(*v)));

    for v in values.iter_mut() {
        *v = (*v - min) / (max - min);
    }
}

/// Negative estimators are read as unrelated
pub fn clamp_negatives(values: &mut [f64]) {
    for v in values.iter_mut().filter(|v| **v < 0.0) {
        *v = 0.0;
    }
}

/// Normalize or clamp the coefficients of all rows at once, before any row reaches the graph
pub fn prepare_relatedness(rows: &mut [RelatednessRow], normalize_values: bool) {
    let mut values: Vec<f64> = rows.iter().map(|row| row.relatedness).collect();

    match normalize_values {
        true => normalize(&mut values),
        false => clamp_negatives(&mut values),
    }

    for (row, value) in rows.iter_mut().zip(values) {
        row.relatedness = value;
    }
}

/// Relationship categories of an ML-Relate export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlRelateCode {
    /// Parent-offspring
    ParentOffspring,
    /// Full siblings
    FullSiblings,
    /// Half siblings
    HalfSiblings,
    Unrelated,
}

impl MlRelateCode {
    /// Largest relational distance any ML-Relate category encodes
    pub const MAX_DISTANCE: u32 = 3;

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "PO" => Some(Self::ParentOffspring),
            "FS" => Some(Self::FullSiblings),
            "HS" => Some(Self::HalfSiblings),
            "U" => Some(Self::Unrelated),
            _ => None,
        }
    }

    // Unrelated pairs get distance 0 which never passes the inflation filter
    pub fn distance(&self) -> u32 {
        match self {
            Self::ParentOffspring => 1,
            Self::FullSiblings => 2,
            Self::HalfSiblings => 3,
            Self::Unrelated => 0,
        }
    }
}
