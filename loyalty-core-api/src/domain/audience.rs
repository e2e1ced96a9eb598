use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;

use super::tier::Tier;

/// Who a notification is sent to.
///
/// Always canonical: either everyone, or a non-empty strict subset of the
/// tiers. An empty selection and a full selection both collapse to everyone,
/// so there is exactly one way to say "all members".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Audience {
    tiers: Option<BTreeSet<Tier>>,
}

impl Audience {
    pub fn all() -> Self {
        Self { tiers: None }
    }

    /// Builds a canonical audience from any tier selection.
    pub fn from_tiers<I: IntoIterator<Item = Tier>>(tiers: I) -> Self {
        Self::canonical(tiers.into_iter().collect())
    }

    fn canonical(tiers: BTreeSet<Tier>) -> Self {
        if tiers.is_empty() || tiers.len() == Tier::ALL.len() {
            Self::all()
        } else {
            Self { tiers: Some(tiers) }
        }
    }

    pub fn is_all(&self) -> bool {
        self.tiers.is_none()
    }

    /// The explicit selection, `None` for everyone.
    pub fn tiers(&self) -> Option<&BTreeSet<Tier>> {
        self.tiers.as_ref()
    }

    /// Whether `tier` is highlighted as an explicit choice.
    pub fn is_selected(&self, tier: Tier) -> bool {
        self.tiers.as_ref().is_some_and(|set| set.contains(&tier))
    }

    /// Whether members of `tier` receive the notification.
    pub fn reaches(&self, tier: Tier) -> bool {
        match &self.tiers {
            None => true,
            Some(set) => set.contains(&tier),
        }
    }

    /// Flips one tier and re-canonicalizes.
    ///
    /// From everyone, the result is that single tier.
    pub fn toggle(&self, tier: Tier) -> Self {
        let Some(current) = &self.tiers else {
            return Self::from_tiers([tier]);
        };

        let mut next = current.clone();
        if !next.remove(&tier) {
            next.insert(tier);
        }
        Self::canonical(next)
    }

    /// Resets the selection to everyone.
    pub fn select_all(&mut self) {
        self.tiers = None;
    }

    pub fn label(&self) -> String {
        match &self.tiers {
            None => "All Members".to_string(),
            Some(set) => set.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", "),
        }
    }
}

impl Serialize for Audience {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.tiers {
            None => serializer.serialize_str("all"),
            Some(set) => set.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Audience {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Tiers(Vec<Tier>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Sentinel(value) if value == "all" => Ok(Audience::all()),
            Repr::Sentinel(value) => Err(serde::de::Error::custom(format!(
                "Invalid Audience: {value}"
            ))),
            Repr::Tiers(tiers) => Ok(Audience::from_tiers(tiers)),
        }
    }
}
