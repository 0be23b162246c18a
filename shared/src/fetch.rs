//! Bookkeeping for the calendar's fire-and-forget fetches.
//!
//! Every request gets a ticket. A settled result may only be applied if its
//! ticket is still the newest one for that resource and the view has not been
//! torn down. The loading flag stays up while any ticket is outstanding.

use std::collections::HashSet;

/// Remote lists loaded by the calendar view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchResource {
    Reservations,
    Accommodations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    pub resource: FetchResource,
    pub generation: u64,
}

#[derive(Debug, Default)]
pub struct FetchTracker {
    reservations_generation: u64,
    accommodations_generation: u64,
    outstanding: HashSet<FetchTicket>,
    disposed: bool,
}

impl FetchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request for `resource`, superseding older ones
    pub fn issue(&mut self, resource: FetchResource) -> FetchTicket {
        let generation = self.generation_mut(resource);
        *generation += 1;
        let ticket = FetchTicket {
            resource,
            generation: *generation,
        };
        self.outstanding.insert(ticket);
        ticket
    }

    /// Record that the request behind `ticket` finished, successfully or not.
    ///
    /// Returns whether its result should be applied. A ticket settles once;
    /// settling it again, or settling a ticket this tracker never issued,
    /// is rejected and leaves the loading state alone.
    pub fn settle(&mut self, ticket: FetchTicket) -> bool {
        if !self.outstanding.remove(&ticket) {
            return false;
        }
        !self.disposed && *self.generation_mut(ticket.resource) == ticket.generation
    }

    pub fn is_loading(&self) -> bool {
        !self.outstanding.is_empty()
    }

    /// Stop accepting results, e.g. when the view unmounts
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn generation_mut(&mut self, resource: FetchResource) -> &mut u64 {
        match resource {
            FetchResource::Reservations => &mut self.reservations_generation,
            FetchResource::Accommodations => &mut self.accommodations_generation,
        }
    }
}
