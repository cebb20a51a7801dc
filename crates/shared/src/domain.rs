use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

macro_rules! keyed_enum {
    ($name:ident, $err:ident, { $($variant:ident => $key:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn key(self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.key())
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match raw.trim() {
                    $($key => Ok($name::$variant),)+
                    other => Err(CatalogError::$err(other.to_string())),
                }
            }
        }
    };
}

keyed_enum!(DestinationId, UnknownDestination, {
    Paris1889 => "paris-1889",
    Cretace => "cretace",
    Florence1504 => "florence-1504",
});

keyed_enum!(ServiceTopic, UnknownServiceTopic, {
    Paradox => "paradox",
    Alpha => "alpha",
    Guide => "guide",
});

/// Gradient token used to tint a destination's badge and accents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Amber,
    Emerald,
    Rose,
}

impl Accent {
    /// Start and end colors of the gradient as RGB triples.
    pub fn gradient(self) -> ([u8; 3], [u8; 3]) {
        match self {
            Accent::Amber => ([253, 230, 138], [245, 158, 11]),
            Accent::Emerald => ([74, 222, 128], [4, 120, 87]),
            Accent::Rose => ([248, 113, 113], [190, 18, 60]),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Tower,
    Trees,
    Palette,
    ShieldAlert,
    Rocket,
    UserCheck,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: DestinationId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub historical_details: &'static [&'static str],
    pub image: &'static str,
    pub fallback_image: &'static str,
    pub accent: Accent,
    pub icon: Icon,
    pub price: &'static str,
    pub duration: &'static str,
}

impl Destination {
    pub fn image_location(&self, source: ImageSource) -> &'static str {
        match source {
            ImageSource::Primary => self.image,
            ImageSource::Fallback => self.fallback_image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    pub topic: ServiceTopic,
    pub title: &'static str,
    pub icon: Icon,
    pub description: &'static str,
}

/// One answer of the traveller-profile quiz. The answer carries the
/// destination it recommends, so an option can never point outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOption {
    pub label: &'static str,
    pub recommends: DestinationId,
}
