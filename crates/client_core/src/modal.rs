//! Booking and service-info overlays.
//!
//! The two overlay kinds are tracked independently; nothing here prevents
//! both from being visible at once.

use shared::domain::{DestinationId, ServiceTopic};
use tracing::debug;

use crate::error::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    Closed,
    Authenticating,
    Confirmed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFlow {
    open: bool,
    confirmed: bool,
    target: Option<DestinationId>,
}

impl BookingFlow {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Raw confirmation flag. It outlives `close()` and is only meaningful
    /// while the dialog is open; see [`BookingFlow::stage`].
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn target(&self) -> Option<DestinationId> {
        self.target
    }

    pub fn stage(&self) -> BookingStage {
        match (self.open, self.confirmed) {
            (false, _) => BookingStage::Closed,
            (true, false) => BookingStage::Authenticating,
            (true, true) => BookingStage::Confirmed,
        }
    }

    fn start(&mut self, destination: DestinationId) {
        self.open = true;
        self.confirmed = false;
        self.target = Some(destination);
    }

    fn confirm(&mut self) -> Result<(), BookingError> {
        if self.stage() != BookingStage::Authenticating {
            return Err(BookingError::NotAuthenticating);
        }
        self.confirmed = true;
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn clear_confirmation(&mut self) {
        self.confirmed = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalManager {
    booking: BookingFlow,
    service: Option<ServiceTopic>,
}

impl ModalManager {
    pub fn booking(&self) -> &BookingFlow {
        &self.booking
    }

    pub fn service(&self) -> Option<ServiceTopic> {
        self.service
    }

    pub fn start_booking(
        &mut self,
        selection: Option<DestinationId>,
    ) -> Result<DestinationId, BookingError> {
        let destination = selection.ok_or(BookingError::NoDestinationSelected)?;
        self.booking.start(destination);
        debug!(destination = %destination, "booking dialog opened");
        Ok(destination)
    }

    pub fn confirm(&mut self) -> Result<(), BookingError> {
        self.booking.confirm()?;
        debug!(destination = ?self.booking.target, "booking confirmed");
        Ok(())
    }

    pub fn close(&mut self) {
        self.booking.close();
    }

    pub fn clear_confirmation(&mut self) {
        self.booking.clear_confirmation();
    }

    pub fn show_service(&mut self, topic: ServiceTopic) {
        self.service = Some(topic);
    }

    pub fn close_service(&mut self) {
        self.service = None;
    }
}
