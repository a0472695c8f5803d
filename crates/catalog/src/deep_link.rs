//! Deep links into the catalog
//!
//! Index entries and reminders carry a composite identifier
//! `"{kind}.{uuid}"`. Opening one resolves it against the catalog and
//! hands the destination to the presentation layer through a channel; a
//! malformed or stale identifier simply leads nowhere.

use crate::catalog::Catalog;
use bach_core::{ArtistId, ComposerId, ConcertId, EntityKind, WorkId};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, warn};
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Why a composite identifier could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("missing '.' separator in identifier '{0}'")]
    MissingSeparator(String),

    #[error("unknown record kind '{0}'")]
    UnknownKind(String),

    #[error("invalid UUID '{0}'")]
    InvalidUuid(String),
}

/// Parsed composite identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemIdentifier {
    pub kind: EntityKind,
    pub id: Uuid,
}

impl ItemIdentifier {
    pub fn new(kind: EntityKind, id: Uuid) -> Self {
        Self { kind, id }
    }

    /// Parse, discarding the reason for failure
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for ItemIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.id)
    }
}

impl FromStr for ItemIdentifier {
    type Err = IdentifierError;

    /// Split on the first `.`; the rest must be a UUID
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, id) = raw
            .split_once('.')
            .ok_or_else(|| IdentifierError::MissingSeparator(raw.to_string()))?;
        let kind: EntityKind = kind
            .parse()
            .map_err(|_| IdentifierError::UnknownKind(kind.to_string()))?;
        let id = Uuid::parse_str(id).map_err(|_| IdentifierError::InvalidUuid(id.to_string()))?;
        Ok(Self { kind, id })
    }
}

// ============================================================================
// Destinations
// ============================================================================

/// A detail screen a deep link can open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Composer(ComposerId),
    Artist(ArtistId),
    Work(WorkId),
    Concert(ConcertId),
}

impl Destination {
    pub fn kind(&self) -> EntityKind {
        match self {
            Destination::Composer(_) => EntityKind::Composer,
            Destination::Artist(_) => EntityKind::Artist,
            Destination::Work(_) => EntityKind::Work,
            Destination::Concert(_) => EntityKind::Concert,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Destination::Composer(id)
            | Destination::Artist(id)
            | Destination::Work(id)
            | Destination::Concert(id) => *id,
        }
    }

    pub fn identifier(&self) -> ItemIdentifier {
        ItemIdentifier::new(self.kind(), self.id())
    }
}

/// Resolve a raw identifier to an existing record with a detail screen
///
/// Returns `None` for malformed identifiers, kinds without a detail screen
/// and records that no longer exist.
pub fn resolve(catalog: &Catalog, raw: &str) -> Option<Destination> {
    let identifier = match raw.parse::<ItemIdentifier>() {
        Ok(identifier) => identifier,
        Err(e) => {
            debug!(error = %e, "Ignoring deep link");
            return None;
        }
    };

    let id = identifier.id;
    let destination = match identifier.kind {
        EntityKind::Composer => catalog.composer(id).map(|_| Destination::Composer(id)),
        EntityKind::Artist => catalog.artist(id).map(|_| Destination::Artist(id)),
        EntityKind::Work => catalog.work(id).map(|_| Destination::Work(id)),
        EntityKind::Concert => catalog.concert(id).map(|_| Destination::Concert(id)),
        _ => None,
    };
    if destination.is_none() {
        debug!(%identifier, "Deep link target not found");
    }
    destination
}

// ============================================================================
// Navigation channel
// ============================================================================

/// Sends resolved deep links to the presentation layer
#[derive(Debug, Clone)]
pub struct DeepLinkResolver {
    sender: UnboundedSender<Destination>,
}

impl DeepLinkResolver {
    pub fn new(sender: UnboundedSender<Destination>) -> Self {
        Self { sender }
    }

    /// Resolve `raw` and deliver the destination once
    ///
    /// Returns the destination that was delivered, if any.
    pub fn open(&self, catalog: &Catalog, raw: &str) -> Option<Destination> {
        let destination = resolve(catalog, raw)?;
        if self.sender.send(destination).is_err() {
            warn!(identifier = %destination.identifier(), "Navigation receiver is gone");
            return None;
        }
        Some(destination)
    }
}

/// Create a resolver and the receiving end the presentation layer listens on
pub fn navigation_channel() -> (DeepLinkResolver, UnboundedReceiver<Destination>) {
    let (sender, receiver) = unbounded_channel();
    (DeepLinkResolver::new(sender), receiver)
}

// ============================================================================
// Tests
// ============================================================================
