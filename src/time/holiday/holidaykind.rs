use std::fmt;

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer
};

/// Jurisdiction a holiday belongs to.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayKind {
    National,
    State,
    Municipal,
    /// Ponto facultativo.
    Optional
}

impl HolidayKind {
    pub const ALL: [HolidayKind; 4] = [
        HolidayKind::National,
        HolidayKind::State,
        HolidayKind::Municipal,
        HolidayKind::Optional
    ];

    #[inline]
    const fn bit(self) -> u8 {
        1u8 << (self as u8)
    }
}

impl fmt::Display for HolidayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HolidayKind::National => "national",
            HolidayKind::State => "state",
            HolidayKind::Municipal => "municipal",
            HolidayKind::Optional => "optional"
        };
        write!(f, "{}", name)
    }
}

/// Set of holiday kinds, one bit per kind.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct HolidayKinds(u8);

impl HolidayKinds {
    pub const fn empty() -> HolidayKinds {
        HolidayKinds(0)
    }

    pub const fn all() -> HolidayKinds {
        HolidayKinds(0b1111)
    }

    pub const fn only(kind: HolidayKind) -> HolidayKinds {
        HolidayKinds(kind.bit())
    }

    pub const fn with(self, kind: HolidayKind) -> HolidayKinds {
        HolidayKinds(self.0 | kind.bit())
    }

    #[inline]
    pub const fn contains(&self, kind: HolidayKind) -> bool {
        (self.0 & kind.bit()) != 0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = HolidayKind> + use<> {
        let kinds = *self;
        HolidayKind::ALL.into_iter().filter(move |kind| kinds.contains(*kind))
    }
}

impl FromIterator<HolidayKind> for HolidayKinds {
    fn from_iter<I: IntoIterator<Item = HolidayKind>>(iter: I) -> Self {
        iter.into_iter().fold(HolidayKinds::empty(), HolidayKinds::with)
    }
}

impl From<HolidayKind> for HolidayKinds {
    fn from(kind: HolidayKind) -> Self {
        HolidayKinds::only(kind)
    }
}

impl fmt::Debug for HolidayKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for HolidayKinds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for HolidayKinds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kinds: Vec<HolidayKind> = Vec::deserialize(deserializer)?;
        Ok(kinds.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        let kinds = HolidayKinds::empty();
        assert!(kinds.is_empty());
        assert!(HolidayKind::ALL.iter().all(|kind| !kinds.contains(*kind)));
    }

    #[test]
    fn collected_kinds_are_members() {
        let kinds: HolidayKinds = [HolidayKind::National, HolidayKind::Optional].into_iter().collect();
        assert!(kinds.contains(HolidayKind::National));
        assert!(kinds.contains(HolidayKind::Optional));
        assert!(!kinds.contains(HolidayKind::State));
        assert_eq!(kinds.iter().collect::<Vec<_>>(), vec![HolidayKind::National, HolidayKind::Optional]);
        assert_eq!(HolidayKinds::all().iter().count(), 4);
    }

    #[test]
    fn kinds_round_trip_through_json_lists() {
        let kinds: HolidayKinds = serde_json::from_str(r#"["optional", "municipal", "optional"]"#).unwrap();
        assert_eq!(kinds, HolidayKinds::only(HolidayKind::Municipal).with(HolidayKind::Optional));
        assert_eq!(serde_json::to_string(&kinds).unwrap(), r#"["municipal","optional"]"#);
    }
}
