//! Temporal compositing of draw and erase strokes into a render plan.
//!
//! An erase stroke masks only ink that existed before it: a draw stroke is
//! clipped by every erase stroke with a strictly greater timestamp, and by
//! nothing else. Erasing is a masking approximation. Draw geometry is never
//! split or edited, it is painted with the union of the applicable erase
//! strokes (each stroked at its own width) cut away.

use super::store::StrokeStore;
use super::stroke::{Stroke, StrokeKind};
use std::fmt;

/// Erase strokes masking one draw stroke, in timestamp order.
#[derive(Debug, Clone)]
pub struct ClipMask<'a> {
    erasers: Vec<&'a Stroke>,
}

impl<'a> ClipMask<'a> {
    pub fn erasers(&self) -> &[&'a Stroke] {
        &self.erasers
    }

    pub fn len(&self) -> usize {
        self.erasers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.erasers.is_empty()
    }
}

/// One draw stroke to paint, optionally masked.
#[derive(Debug, Clone)]
pub struct PlanEntry<'a> {
    pub stroke: &'a Stroke,
    pub clip: Option<ClipMask<'a>>,
}

impl PlanEntry<'_> {
    pub fn is_clipped(&self) -> bool {
        self.clip.is_some()
    }
}

/// One line per entry: `#id t=N clip=[#a #b] M x y L x y ...`.
impl fmt::Display for PlanEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} clip=[", self.stroke.id(), self.stroke.timestamp())?;
        if let Some(clip) = &self.clip {
            for (idx, eraser) in clip.erasers().iter().enumerate() {
                if idx > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", eraser.id())?;
            }
        }
        write!(f, "] {}", self.stroke.path_data())
    }
}

/// Ordered back-to-front list of draw strokes with their masks.
///
/// Borrows the store it was computed from; recompute after any mutation.
#[derive(Debug, Clone, Default)]
pub struct RenderPlan<'a> {
    entries: Vec<PlanEntry<'a>>,
}

impl<'a> RenderPlan<'a> {
    pub fn entries(&self) -> &[PlanEntry<'a>] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry<'a>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'p, 'a> IntoIterator for &'p RenderPlan<'a> {
    type Item = &'p PlanEntry<'a>;
    type IntoIter = std::slice::Iter<'p, PlanEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Builds the render plan for the current contents of `store`.
///
/// Always a full recompute over every stroke; nothing is cached between calls.
pub fn compose(store: &StrokeStore) -> RenderPlan<'_> {
    let (mut draws, mut erasers): (Vec<&Stroke>, Vec<&Stroke>) = store
        .all()
        .partition(|stroke| stroke.kind() == StrokeKind::Draw);

    // Stable sorts: equal timestamps keep insertion order.
    draws.sort_by_key(|stroke| stroke.timestamp());
    erasers.sort_by_key(|stroke| stroke.timestamp());

    let entries = draws
        .into_iter()
        .map(|stroke| {
            // Erasers are sorted, so the applicable ones form a suffix.
            let first =
                erasers.partition_point(|eraser| eraser.timestamp() <= stroke.timestamp());
            let applicable = &erasers[first..];
            PlanEntry {
                stroke,
                clip: (!applicable.is_empty()).then(|| ClipMask {
                    erasers: applicable.to_vec(),
                }),
            }
        })
        .collect();

    RenderPlan { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE};
    use crate::draw::stroke::{StrokeId, StrokeStyle, Timestamp};
    use crate::util::Point;

    fn add(store: &mut StrokeStore, kind: StrokeKind, points: &[(f64, f64)]) -> StrokeId {
        let style = StrokeStyle {
            width: if kind == StrokeKind::Draw { 4.0 } else { 10.0 },
            color: if kind == StrokeKind::Draw { BLUE } else { BLACK },
        };
        let id = store
            .start_stroke(kind, points[0].into(), style)
            .expect("no live stroke");
        for &p in &points[1..] {
            store.extend_live_stroke(p.into());
        }
        store.commit_live_stroke();
        id
    }

    fn clip_ids(entry: &PlanEntry<'_>) -> Vec<StrokeId> {
        entry
            .clip
            .as_ref()
            .map(|clip| clip.erasers().iter().map(|s| s.id()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn later_eraser_clips_earlier_ink() {
        let mut store = StrokeStore::new();
        let draw = add(&mut store, StrokeKind::Draw, &[(10.0, 10.0), (20.0, 10.0)]);
        let erase = add(&mut store, StrokeKind::Erase, &[(15.0, 10.0)]);

        let plan = compose(&store);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan.entries()[0].stroke.id(), draw);
        assert_eq!(clip_ids(&plan.entries()[0]), vec![erase]);
    }

    #[test]
    fn earlier_eraser_leaves_later_ink_untouched() {
        let mut store = StrokeStore::new();
        add(&mut store, StrokeKind::Erase, &[(15.0, 10.0)]);
        add(&mut store, StrokeKind::Draw, &[(10.0, 10.0), (20.0, 10.0)]);

        let plan = compose(&store);
        assert_eq!(plan.len(), 1);
        assert!(!plan.entries()[0].is_clipped());
    }

    #[test]
    fn eraser_with_backwards_host_timestamp_still_masks() {
        let mut store = StrokeStore::new();
        let style = StrokeStyle {
            width: 4.0,
            color: BLUE,
        };
        store
            .start_stroke_at(StrokeKind::Draw, Point::new(0.0, 0.0), style, Timestamp(10))
            .unwrap();
        store.commit_live_stroke();
        let erase = store
            .start_stroke_at(StrokeKind::Erase, Point::new(0.0, 0.0), style, Timestamp(7))
            .unwrap();
        store.commit_live_stroke();

        let plan = compose(&store);
        assert!(plan.entries()[0].is_clipped());
        assert_eq!(clip_ids(&plan.entries()[0]), vec![erase]);
    }

    #[test]
    fn equal_timestamps_do_not_mask() {
        // Only reachable once the clock has saturated.
        let mut store = StrokeStore::new();
        let style = StrokeStyle {
            width: 4.0,
            color: BLUE,
        };
        let draw = store
            .start_stroke_at(StrokeKind::Draw, Point::new(0.0, 0.0), style, Timestamp(u64::MAX))
            .unwrap();
        store.commit_live_stroke();
        let erase = store
            .start_stroke_at(StrokeKind::Erase, Point::new(0.0, 0.0), style, Timestamp(u64::MAX))
            .unwrap();
        store.commit_live_stroke();
        assert_eq!(
            store.get(draw).unwrap().timestamp(),
            store.get(erase).unwrap().timestamp()
        );

        let plan = compose(&store);
        assert!(!plan.entries()[0].is_clipped());
    }

    #[test]
    fn plan_preserves_creation_order() {
        let mut store = StrokeStore::new();
        let a = add(&mut store, StrokeKind::Draw, &[(0.0, 0.0)]);
        let b = add(&mut store, StrokeKind::Draw, &[(1.0, 1.0)]);
        let c = add(&mut store, StrokeKind::Draw, &[(2.0, 2.0)]);

        let plan = compose(&store);
        let order: Vec<_> = plan.iter().map(|entry| entry.stroke.id()).collect();
        assert_eq!(order, vec![a, b, c]);
        assert!(plan.iter().all(|entry| !entry.is_clipped()));
    }

    #[test]
    fn each_draw_gets_only_its_later_erasers() {
        let mut store = StrokeStore::new();
        let d1 = add(&mut store, StrokeKind::Draw, &[(0.0, 0.0), (50.0, 0.0)]);
        let e1 = add(&mut store, StrokeKind::Erase, &[(10.0, 0.0)]);
        let d2 = add(&mut store, StrokeKind::Draw, &[(0.0, 5.0), (50.0, 5.0)]);
        let e2 = add(&mut store, StrokeKind::Erase, &[(20.0, 0.0), (20.0, 5.0)]);
        let d3 = add(&mut store, StrokeKind::Draw, &[(0.0, 9.0)]);

        let plan = compose(&store);
        let entries = plan.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].stroke.id(), d1);
        assert_eq!(clip_ids(&entries[0]), vec![e1, e2]);
        assert_eq!(entries[1].stroke.id(), d2);
        assert_eq!(clip_ids(&entries[1]), vec![e2]);
        assert_eq!(entries[2].stroke.id(), d3);
        assert!(!entries[2].is_clipped());
    }

    #[test]
    fn erasers_without_ink_produce_empty_plan() {
        let mut store = StrokeStore::new();
        add(&mut store, StrokeKind::Erase, &[(0.0, 0.0), (5.0, 5.0)]);

        assert!(compose(&store).is_empty());
    }

    #[test]
    fn live_eraser_masks_while_dragging() {
        let mut store = StrokeStore::new();
        let draw = add(&mut store, StrokeKind::Draw, &[(0.0, 0.0), (30.0, 0.0)]);
        let eraser = store
            .start_stroke(
                StrokeKind::Erase,
                Point::new(5.0, 0.0),
                StrokeStyle {
                    width: 10.0,
                    color: BLACK,
                },
            )
            .unwrap();
        store.extend_live_stroke(Point::new(10.0, 0.0));

        {
            let plan = compose(&store);
            assert_eq!(plan.entries()[0].stroke.id(), draw);
            let clip = plan.entries()[0].clip.as_ref().unwrap();
            assert_eq!(clip.erasers()[0].id(), eraser);
            assert_eq!(clip.erasers()[0].points().len(), 2);
        }

        store.extend_live_stroke(Point::new(15.0, 0.0));
        let plan = compose(&store);
        let clip = plan.entries()[0].clip.as_ref().unwrap();
        assert_eq!(clip.erasers()[0].points().len(), 3);
    }

    #[test]
    fn entries_display_ids_and_path() {
        let mut store = StrokeStore::new();
        add(&mut store, StrokeKind::Draw, &[(10.0, 10.0), (20.0, 10.0)]);
        add(&mut store, StrokeKind::Erase, &[(15.0, 10.0)]);
        add(&mut store, StrokeKind::Draw, &[(1.0, 2.0)]);

        let plan = compose(&store);
        let lines: Vec<String> = plan.iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec!["#0 t=1 clip=[#1] M10 10 L20 10", "#2 t=3 clip=[] M1 2"]
        );
    }

    #[test]
    fn repeated_composition_is_identical() {
        let mut store = StrokeStore::new();
        add(&mut store, StrokeKind::Draw, &[(0.0, 0.0), (9.0, 9.0)]);
        add(&mut store, StrokeKind::Erase, &[(4.0, 4.0)]);
        add(&mut store, StrokeKind::Draw, &[(1.0, 0.0)]);

        let a: Vec<_> = compose(&store)
            .iter()
            .map(|e| (e.stroke.id(), clip_ids(e)))
            .collect();
        let b: Vec<_> = compose(&store)
            .iter()
            .map(|e| (e.stroke.id(), clip_ids(e)))
            .collect();
        assert_eq!(a, b);
    }
}
