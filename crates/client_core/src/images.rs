//! Per-destination image loading with a single fallback substitution.

use std::collections::HashMap;

use shared::{
    catalog,
    domain::{DestinationId, ImageSource},
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Loading(ImageSource),
    Loaded(ImageSource),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub destination: DestinationId,
    pub source: ImageSource,
    pub location: &'static str,
}

impl ImageRequest {
    fn new(destination: DestinationId, source: ImageSource) -> Self {
        Self {
            destination,
            source,
            location: catalog::destination(destination).image_location(source),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImageSlots {
    slots: HashMap<DestinationId, ImageSlot>,
}

impl ImageSlots {
    pub fn slot(&self, destination: DestinationId) -> Option<ImageSlot> {
        self.slots.get(&destination).copied()
    }

    /// First request for a destination starts with the primary image; later
    /// calls return `None`.
    pub fn request(&mut self, destination: DestinationId) -> Option<ImageRequest> {
        if self.slots.contains_key(&destination) {
            return None;
        }
        self.slots
            .insert(destination, ImageSlot::Loading(ImageSource::Primary));
        Some(ImageRequest::new(destination, ImageSource::Primary))
    }

    pub fn loaded(&mut self, destination: DestinationId, source: ImageSource) {
        if let Some(slot) = self.slots.get_mut(&destination) {
            if *slot == ImageSlot::Loading(source) {
                *slot = ImageSlot::Loaded(source);
            }
        }
    }

    /// Records a failed load. A primary failure yields the fallback request;
    /// a fallback failure is terminal.
    pub fn failed(
        &mut self,
        destination: DestinationId,
        source: ImageSource,
    ) -> Option<ImageRequest> {
        let slot = self.slots.get_mut(&destination)?;
        match (*slot, source) {
            (ImageSlot::Loading(ImageSource::Primary), ImageSource::Primary) => {
                debug!(destination = %destination, "primary image failed, substituting fallback");
                *slot = ImageSlot::Loading(ImageSource::Fallback);
                Some(ImageRequest::new(destination, ImageSource::Fallback))
            }
            (ImageSlot::Loading(ImageSource::Fallback), ImageSource::Fallback) => {
                debug!(destination = %destination, "fallback image failed");
                *slot = ImageSlot::Failed;
                None
            }
            _ => None,
        }
    }
}
