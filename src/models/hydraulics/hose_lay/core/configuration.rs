//! The hose-lay layout: a main line, an optional Wye with two branches, and
//! the elevation between pump and nozzle.

use std::{fmt, str::FromStr};

use uom::{
    ConstZero,
    si::{f64::Length, length::foot},
};

use super::{
    FieldName, InvalidInput, LineSegment, rules::forced_branch_diameter, segment::within_limit,
};

/// Largest elevation change accepted either way, in feet.
pub const MAX_ELEVATION_FT: f64 = 30_000.0;

/// Identifies one segment of a hose lay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SegmentKey {
    #[default]
    Main,
    A,
    B,
}

impl SegmentKey {
    /// Returns `true` for either branch.
    #[must_use]
    pub fn is_branch(self) -> bool {
        matches!(self, Self::A | Self::B)
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Main => "main",
            Self::A => "A",
            Self::B => "B",
        })
    }
}

/// Strict parsing of a segment label.
///
/// Accepts `main`, `A` and `B` in any case. For the lenient variant that falls
/// back to `main`, see [`normalize_segment_key`](super::normalize_segment_key).
impl FromStr for SegmentKey {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.eq_ignore_ascii_case("main") {
            Ok(Self::Main)
        } else if label.eq_ignore_ascii_case("a") {
            Ok(Self::A)
        } else if label.eq_ignore_ascii_case("b") {
            Ok(Self::B)
        } else {
            Err(InvalidInput::UnknownSegment {
                label: s.to_owned(),
            })
        }
    }
}

/// Whether the main line ends in a Wye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayState {
    NoWye,
    WyeReady,
}

/// The two branch lines behind a Wye.
///
/// Branches can only be created at the forced branch diameter, and nothing in
/// the crate changes a branch diameter afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Wye {
    a: LineSegment,
    b: LineSegment,
}

impl Wye {
    /// Creates two empty branches at the forced diameter.
    pub(super) fn new() -> Self {
        Self {
            a: LineSegment::empty(forced_branch_diameter()),
            b: LineSegment::empty(forced_branch_diameter()),
        }
    }

    #[must_use]
    pub fn a(&self) -> &LineSegment {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &LineSegment {
        &self.b
    }
}

/// The full hydraulic layout for one calculation.
///
/// The main line always exists. Branches exist exactly when a Wye is enabled,
/// which the `Option<Wye>` makes impossible to get wrong.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    main: LineSegment,
    wye: Option<Wye>,
    elevation: Length,
}

impl Configuration {
    /// Creates a configuration with no Wye and no elevation change.
    #[must_use]
    pub fn new(main: LineSegment) -> Self {
        Self {
            main,
            wye: None,
            elevation: Length::ZERO,
        }
    }

    /// Sets the elevation change in feet; negative is downhill.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput::Field`] for a non-finite elevation or one beyond
    /// [`MAX_ELEVATION_FT`] in either direction.
    pub fn with_elevation_ft(mut self, feet: f64) -> Result<Self, InvalidInput> {
        let feet = within_limit(feet, MAX_ELEVATION_FT)
            .map_err(InvalidInput::field(FieldName::Elevation))?;
        self.elevation = Length::new::<foot>(feet);
        Ok(self)
    }

    #[must_use]
    pub fn main(&self) -> &LineSegment {
        &self.main
    }

    #[must_use]
    pub fn wye(&self) -> Option<&Wye> {
        self.wye.as_ref()
    }

    #[must_use]
    pub fn wye_enabled(&self) -> bool {
        self.wye.is_some()
    }

    #[must_use]
    pub fn state(&self) -> LayState {
        if self.wye_enabled() {
            LayState::WyeReady
        } else {
            LayState::NoWye
        }
    }

    /// Elevation change from pump to nozzle; positive is uphill.
    #[must_use]
    pub fn elevation(&self) -> Length {
        self.elevation
    }

    /// Returns the addressed segment, or `None` for a branch without a Wye.
    #[must_use]
    pub fn segment(&self, key: SegmentKey) -> Option<&LineSegment> {
        match key {
            SegmentKey::Main => Some(&self.main),
            SegmentKey::A => self.wye.as_ref().map(Wye::a),
            SegmentKey::B => self.wye.as_ref().map(Wye::b),
        }
    }

    /// Iterates over every existing segment: main, then branches A and B.
    pub fn segments(&self) -> impl Iterator<Item = &LineSegment> {
        std::iter::once(&self.main).chain(self.wye.iter().flat_map(|wye| [&wye.a, &wye.b]))
    }

    pub(super) fn segment_mut(&mut self, key: SegmentKey) -> Option<&mut LineSegment> {
        match key {
            SegmentKey::Main => Some(&mut self.main),
            SegmentKey::A => self.wye.as_mut().map(|wye| &mut wye.a),
            SegmentKey::B => self.wye.as_mut().map(|wye| &mut wye.b),
        }
    }

    pub(super) fn main_mut(&mut self) -> &mut LineSegment {
        &mut self.main
    }

    pub(super) fn set_wye(&mut self, wye: Option<Wye>) {
        self.wye = wye;
    }
}
