//! Phase, direction and role tags carried by attributes.

use std::fmt;

/// A tag an attribute may carry.
///
/// Markers are opaque to the descriptor engine; they are only compared for
/// equality when filtering with `only_marked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Marker {
    /// Applies at component initialization.
    Init,
    /// Applies per processing run.
    Processing,
    /// An input of the component.
    Input,
    /// An output of the component.
    Output,
    /// Must be supplied before processing.
    Required,
    /// Not shown in end-user views.
    Internal,
}

impl Marker {
    pub const ALL: [Marker; 6] = [
        Self::Init,
        Self::Processing,
        Self::Input,
        Self::Output,
        Self::Required,
        Self::Internal,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn display(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Processing => "processing",
            Self::Input => "input",
            Self::Output => "output",
            Self::Required => "required",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Set of markers carried by one attribute.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkerSet {
    bits: u8,
}

impl MarkerSet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, marker: Marker) {
        self.bits |= marker.bit();
    }

    pub fn with(mut self, marker: Marker) -> Self {
        self.insert(marker);
        self
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.bits & marker.bit() != 0
    }

    /// True when every listed marker is present. Vacuously true for none.
    pub fn contains_all(&self, markers: &[Marker]) -> bool {
        markers.iter().all(|m| self.contains(*m))
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Markers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
        Marker::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Marker> for MarkerSet {
    fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
        let mut set = Self::empty();
        for marker in iter {
            set.insert(marker);
        }
        set
    }
}

impl fmt::Debug for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MarkerSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
