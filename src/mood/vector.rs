//! Score accumulation and distribution types.
//!
//! A [`MoodVector`] is the additive accumulator the scorers write into: one
//! slot per canonical mood plus an insertion-ordered list of transient
//! labels. Nothing is normalized until a vector is finalized into a
//! [`MoodDistribution`], whose values sum to 1.0.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::labels::{Mood, MoodLabel};

/// Unnormalized, non-negative mood score accumulator.
///
/// Iteration order is canonical tie-break order followed by transient labels
/// in first-insertion order, which makes every argmax over it deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodVector {
    canonical: [f64; MoodLabel::COUNT],
    extras: Vec<(String, f64)>,
}

impl MoodVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add to a canonical mood's accumulator.
    pub fn add(&mut self, label: MoodLabel, amount: f64) {
        self.canonical[label.index()] += amount;
    }

    /// Add to a mood by name, folding canonical identifiers into their slot.
    pub fn add_named(&mut self, name: &str, amount: f64) {
        match MoodLabel::parse(name) {
            Some(label) => self.add(label, amount),
            None => {
                if let Some(entry) = self.extras.iter_mut().find(|(n, _)| n == name) {
                    entry.1 += amount;
                } else {
                    self.extras.push((name.to_string(), amount));
                }
            }
        }
    }

    pub fn add_mood(&mut self, mood: &Mood, amount: f64) {
        match mood {
            Mood::Canonical(label) => self.add(*label, amount),
            Mood::Extra(name) => self.add_named(name, amount),
        }
    }

    pub fn get(&self, label: MoodLabel) -> f64 {
        self.canonical[label.index()]
    }

    pub fn get_named(&self, name: &str) -> f64 {
        match MoodLabel::parse(name) {
            Some(label) => self.get(label),
            None => self
                .extras
                .iter()
                .find(|(n, _)| n == name)
                .map_or(0.0, |(_, v)| *v),
        }
    }

    /// All entries, canonical slots first, then transient labels.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        MoodLabel::ALL
            .into_iter()
            .map(|label| (label.as_str(), self.canonical[label.index()]))
            .chain(self.extras.iter().map(|(n, v)| (n.as_str(), *v)))
    }

    /// Sum every entry into this vector, scaled by `weight`.
    pub fn merge_scaled(&mut self, other: &MoodVector, weight: f64) {
        for i in 0..MoodLabel::COUNT {
            self.canonical[i] += other.canonical[i] * weight;
        }
        for (name, value) in &other.extras {
            self.add_named(name, value * weight);
        }
    }

    pub fn scale(&mut self, factor: f64) {
        for slot in &mut self.canonical {
            *slot *= factor;
        }
        for (_, value) in &mut self.extras {
            *value *= factor;
        }
    }

    pub fn total(&self) -> f64 {
        self.canonical.iter().sum::<f64>() + self.extras.iter().map(|(_, v)| v).sum::<f64>()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0.0
    }

    /// First entry (in iteration order) holding the maximal score, or `None`
    /// when the vector carries no signal at all.
    pub fn argmax(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, value) in self.iter() {
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((name, value)),
            }
        }
        match best {
            Some((_, value)) if value > 0.0 => best,
            _ => None,
        }
    }

    /// Finalize into a normalized distribution.
    ///
    /// Every canonical label is present; transient labels keep their
    /// insertion order. A vector with no signal falls back to the uniform
    /// distribution over the canonical labels.
    pub fn to_distribution(&self) -> MoodDistribution {
        let total = self.total();
        if total <= 0.0 {
            return MoodDistribution::uniform();
        }
        let entries = self
            .iter()
            .map(|(name, value)| (name.to_string(), value / total))
            .collect();
        MoodDistribution { entries }
    }
}

/// Normalized mood distribution, preserving entry order.
///
/// Serialized as a plain map so callers see `{"happy": 0.4, ...}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodDistribution {
    entries: Vec<(String, f64)>,
}

impl MoodDistribution {
    /// Uniform distribution over the canonical labels.
    pub fn uniform() -> Self {
        let weight = 1.0 / MoodLabel::COUNT as f64;
        MoodDistribution {
            entries: MoodLabel::ALL
                .iter()
                .map(|label| (label.as_str().to_string(), weight))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> f64 {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map_or(0.0, |(_, v)| *v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    /// First entry holding the maximal weight, in entry order.
    pub fn argmax(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, value) in self.iter() {
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((name, value)),
            }
        }
        best
    }
}

impl Serialize for MoodDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct MoodDistributionVisitor;

impl<'de> Visitor<'de> for MoodDistributionVisitor {
    type Value = MoodDistribution;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a map of mood name to weight")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(MoodLabel::COUNT));
        while let Some((name, value)) = access.next_entry::<String, f64>()? {
            entries.push((name, value));
        }
        Ok(MoodDistribution { entries })
    }
}

impl<'de> Deserialize<'de> for MoodDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MoodDistributionVisitor)
    }
}
