//! Frame-Koaleszenz: höchstens ein ausstehender Redraw gleichzeitig.
//!
//! Modell-Mutationen laufen immer sofort; nur das Zeichnen wird auf einen
//! Frame pro Eingabe-Burst zusammengefasst.

/// Handle eines angeforderten Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    /// Fortlaufende Nummer des Frames.
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Plant Redraws nach dem Prinzip "nur anfordern, wenn keiner aussteht".
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    next_id: u64,
    pending: Option<FrameRequest>,
    coalesced: u64,
}

impl RedrawScheduler {
    /// Erstellt einen Scheduler ohne ausstehenden Frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fordert einen Frame an.
    ///
    /// Liefert nur dann ein neues Handle, wenn kein Frame aussteht; sonst
    /// wird die Anforderung in den ausstehenden Frame eingerechnet.
    pub fn request(&mut self) -> Option<FrameRequest> {
        if self.pending.is_some() {
            self.coalesced += 1;
            log::trace!("Redraw bereits ausstehend, zusammengefasst");
            return None;
        }
        self.next_id += 1;
        let frame = FrameRequest(self.next_id);
        self.pending = Some(frame);
        log::trace!("Redraw angefordert: Frame {}", frame.0);
        Some(frame)
    }

    /// Schließt den Frame `frame` ab.
    ///
    /// Gibt `false` zurück, wenn `frame` nicht der ausstehende Frame ist.
    pub fn complete(&mut self, frame: FrameRequest) -> bool {
        if self.pending != Some(frame) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Aktuell ausstehender Frame.
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// `true`, solange ein Frame aussteht.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Anzahl der in ausstehende Frames eingerechneten Anforderungen.
    pub fn coalesced_requests(&self) -> u64 {
        self.coalesced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_request_is_coalesced() {
        let mut scheduler = RedrawScheduler::new();
        let frame = scheduler.request().expect("erster Frame wird angefordert");
        assert!(scheduler.request().is_none());
        assert!(scheduler.request().is_none());
        assert_eq!(scheduler.pending(), Some(frame));
        assert_eq!(scheduler.coalesced_requests(), 2);
    }

    #[test]
    fn test_complete_clears_only_outstanding_frame() {
        let mut scheduler = RedrawScheduler::new();
        let first = scheduler.request().expect("Frame 1");
        assert!(scheduler.complete(first));
        assert!(!scheduler.complete(first), "Frame bereits abgeschlossen");

        let second = scheduler.request().expect("Frame 2");
        assert_ne!(first, second);
        assert!(!scheduler.complete(first));
        assert!(scheduler.is_pending());
        assert!(scheduler.complete(second));
        assert!(!scheduler.is_pending());
    }
}
