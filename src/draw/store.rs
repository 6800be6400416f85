//! Authoritative collection of strokes for one drawing surface.

use super::error::StrokeError;
use super::stroke::{Stroke, StrokeId, StrokeKind, StrokeStyle, Timestamp};
use crate::util::Point;
use log::debug;

/// Ordered collection of committed strokes plus at most one live stroke.
///
/// Strokes are kept in insertion order. Both draw and erase strokes enter the
/// store as soon as they start, so a live eraser is visible while it is being
/// dragged and the live and final renderings never diverge.
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    live: Option<StrokeId>,
    next_id: u64,
    clock: Timestamp,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new live stroke stamped with the next logical tick.
    ///
    /// # Errors
    /// Returns [`StrokeError::LiveStrokeActive`] if another stroke is still live.
    pub fn start_stroke(
        &mut self,
        kind: StrokeKind,
        origin: Point,
        style: StrokeStyle,
    ) -> Result<StrokeId, StrokeError> {
        let timestamp = self.next_tick();
        self.start_stroke_at(kind, origin, style, timestamp)
    }

    /// Starts a new live stroke with a host-supplied timestamp.
    ///
    /// Timestamps strictly increase: a value at or below the latest issued one
    /// is raised to the next tick, so a stroke started later always sorts
    /// after its predecessors. The clock saturates at `u64::MAX`; strokes
    /// stamped there tie and keep insertion order.
    pub fn start_stroke_at(
        &mut self,
        kind: StrokeKind,
        origin: Point,
        style: StrokeStyle,
        timestamp: Timestamp,
    ) -> Result<StrokeId, StrokeError> {
        if let Some(live) = self.live {
            return Err(StrokeError::LiveStrokeActive(live));
        }

        let timestamp = timestamp.max(self.next_tick());
        self.clock = timestamp;

        let id = StrokeId(self.next_id);
        self.next_id += 1;

        self.strokes.push(Stroke {
            id,
            kind,
            points: vec![origin],
            timestamp,
            committed: false,
            style,
        });
        self.live = Some(id);
        debug!("Started {kind:?} stroke {id} at {timestamp}");
        Ok(id)
    }

    fn next_tick(&self) -> Timestamp {
        Timestamp(self.clock.0.saturating_add(1))
    }

    /// Appends a point to the live stroke; ignored when nothing is live.
    pub fn extend_live_stroke(&mut self, point: Point) {
        if let Some(stroke) = self.live_mut() {
            stroke.points.push(point);
        }
    }

    /// Marks the live stroke committed. Returns its id, or `None` if nothing was live.
    pub fn commit_live_stroke(&mut self) -> Option<StrokeId> {
        let stroke = self.live_mut()?;
        stroke.committed = true;
        let id = stroke.id;
        let points = stroke.points.len();
        self.live = None;
        debug!("Committed stroke {id} with {points} point(s)");
        Some(id)
    }

    /// Removes every uncommitted stroke of `kind` without committing it.
    ///
    /// Returns the number of strokes removed.
    pub fn remove_uncommitted_of_kind(&mut self, kind: StrokeKind) -> usize {
        let before = self.strokes.len();
        self.strokes
            .retain(|stroke| stroke.committed || stroke.kind != kind);
        if let Some(live) = self.live {
            if !self.strokes.iter().any(|stroke| stroke.id == live) {
                self.live = None;
            }
        }
        before - self.strokes.len()
    }

    /// Removes the live stroke without committing it.
    pub fn discard_live(&mut self) -> Option<StrokeId> {
        let live = self.live.take()?;
        self.strokes.retain(|stroke| stroke.id != live);
        debug!("Discarded live stroke {live}");
        Some(live)
    }

    /// Empties the store, live stroke included.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.live = None;
    }

    /// Read-only view of every stroke in insertion order.
    ///
    /// The iterator borrows the store, so it always reflects current state and
    /// can be cloned to restart the traversal.
    pub fn all(&self) -> std::slice::Iter<'_, Stroke> {
        self.strokes.iter()
    }

    pub fn live(&self) -> Option<&Stroke> {
        let live = self.live?;
        self.get(live)
    }

    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|stroke| stroke.id == id)
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    fn live_mut(&mut self) -> Option<&mut Stroke> {
        let live = self.live?;
        // The live stroke is always the most recent insertion.
        self.strokes
            .iter_mut()
            .rev()
            .find(|stroke| stroke.id == live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    fn pen() -> StrokeStyle {
        StrokeStyle {
            width: 4.0,
            color: RED,
        }
    }

    fn eraser() -> StrokeStyle {
        StrokeStyle {
            width: 10.0,
            color: BLACK,
        }
    }

    #[test]
    fn start_extend_commit_lifecycle() {
        let mut store = StrokeStore::new();
        let id = store
            .start_stroke(StrokeKind::Draw, Point::new(1.0, 1.0), pen())
            .unwrap();
        store.extend_live_stroke(Point::new(2.0, 2.0));

        let live = store.live().expect("stroke should be live");
        assert_eq!(live.id(), id);
        assert!(!live.is_committed());

        assert_eq!(store.commit_live_stroke(), Some(id));
        let stroke = store.get(id).unwrap();
        assert!(stroke.is_committed());
        assert_eq!(stroke.points().len(), 2);
        assert!(store.live().is_none());
    }

    #[test]
    fn second_start_while_live_is_rejected() {
        let mut store = StrokeStore::new();
        let first = store
            .start_stroke(StrokeKind::Draw, Point::new(0.0, 0.0), pen())
            .unwrap();
        let err = store
            .start_stroke(StrokeKind::Draw, Point::new(5.0, 5.0), pen())
            .unwrap_err();

        assert_eq!(err, StrokeError::LiveStrokeActive(first));
        assert_eq!(store.len(), 1);
        assert_eq!(store.all().filter(|s| !s.is_committed()).count(), 1);
    }

    #[test]
    fn stray_extend_and_commit_are_ignored() {
        let mut store = StrokeStore::new();
        store.extend_live_stroke(Point::new(1.0, 1.0));
        assert_eq!(store.commit_live_stroke(), None);
        assert!(store.is_empty());

        store
            .start_stroke(StrokeKind::Draw, Point::new(0.0, 0.0), pen())
            .unwrap();
        store.commit_live_stroke();
        store.extend_live_stroke(Point::new(9.0, 9.0));
        assert_eq!(store.commit_live_stroke(), None);
        assert_eq!(store.all().next().unwrap().points().len(), 1);
    }

    #[test]
    fn remove_uncommitted_of_kind_drops_only_live_matches() {
        let mut store = StrokeStore::new();
        store
            .start_stroke(StrokeKind::Erase, Point::new(0.0, 0.0), eraser())
            .unwrap();
        store.commit_live_stroke();
        store
            .start_stroke(StrokeKind::Erase, Point::new(3.0, 3.0), eraser())
            .unwrap();

        assert_eq!(store.remove_uncommitted_of_kind(StrokeKind::Draw), 0);
        assert!(store.live().is_some());

        assert_eq!(store.remove_uncommitted_of_kind(StrokeKind::Erase), 1);
        assert!(store.live().is_none());
        assert_eq!(store.len(), 1);
        assert!(store.all().all(Stroke::is_committed));
    }

    #[test]
    fn timestamps_strictly_follow_creation_order() {
        let mut store = StrokeStore::new();
        let a = store
            .start_stroke_at(StrokeKind::Draw, Point::default(), pen(), Timestamp(10))
            .unwrap();
        store.commit_live_stroke();
        let b = store
            .start_stroke_at(StrokeKind::Draw, Point::default(), pen(), Timestamp(3))
            .unwrap();
        store.commit_live_stroke();
        let c = store
            .start_stroke(StrokeKind::Erase, Point::default(), eraser())
            .unwrap();

        assert_eq!(store.get(a).unwrap().timestamp(), Timestamp(10));
        assert_eq!(store.get(b).unwrap().timestamp(), Timestamp(11));
        assert_eq!(store.get(c).unwrap().timestamp(), Timestamp(12));
    }

    #[test]
    fn equal_host_timestamp_is_moved_past_previous_stroke() {
        let mut store = StrokeStore::new();
        let a = store
            .start_stroke_at(StrokeKind::Draw, Point::default(), pen(), Timestamp(5))
            .unwrap();
        store.commit_live_stroke();
        let b = store
            .start_stroke_at(StrokeKind::Erase, Point::default(), eraser(), Timestamp(5))
            .unwrap();

        assert!(store.get(b).unwrap().timestamp() > store.get(a).unwrap().timestamp());
    }

    #[test]
    fn clock_saturates_instead_of_overflowing() {
        let mut store = StrokeStore::new();
        store
            .start_stroke_at(StrokeKind::Draw, Point::default(), pen(), Timestamp(u64::MAX))
            .unwrap();
        store.commit_live_stroke();
        let next = store
            .start_stroke(StrokeKind::Erase, Point::default(), eraser())
            .unwrap();

        assert_eq!(store.get(next).unwrap().timestamp(), Timestamp(u64::MAX));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn all_reflects_state_at_call_time_and_restarts() {
        let mut store = StrokeStore::new();
        assert_eq!(store.all().count(), 0);

        store
            .start_stroke(StrokeKind::Draw, Point::default(), pen())
            .unwrap();
        store.commit_live_stroke();

        let view = store.all();
        assert_eq!(view.clone().count(), 1);
        assert_eq!(view.count(), 1);
    }

    #[test]
    fn clear_removes_live_stroke_too() {
        let mut store = StrokeStore::new();
        store
            .start_stroke(StrokeKind::Draw, Point::default(), pen())
            .unwrap();
        store.clear();
        assert!(store.is_empty());
        assert!(store.live().is_none());
        store.clear();
        assert!(store.is_empty());

        // A fresh stroke can start after clearing a live one.
        assert!(
            store
                .start_stroke(StrokeKind::Draw, Point::default(), pen())
                .is_ok()
        );
    }

    #[test]
    fn discard_live_removes_without_commit() {
        let mut store = StrokeStore::new();
        store
            .start_stroke(StrokeKind::Draw, Point::default(), pen())
            .unwrap();
        store.commit_live_stroke();
        let id = store
            .start_stroke(StrokeKind::Draw, Point::new(1.0, 1.0), pen())
            .unwrap();

        assert_eq!(store.discard_live(), Some(id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.discard_live(), None);
    }
}
