use std::collections::BinaryHeap;
use std::time::Instant;

use lapgrid_track::Coverage;

use crate::arena::{Arena, NO_PARENT, NodeRef};
use crate::config::SearchConfig;
use crate::moves::MoveGenerator;
use crate::outcome::{LapReport, Limit, SearchOutcome, SearchStats};
use crate::state::{Kinematics, SearchNode};
use crate::traits::Course;

/// How often, in expansions, the clock is read when a timeout is set.
const CLOCK_INTERVAL: usize = 1024;

/// Best-first search for the shortest closed lap on a course.
///
/// The vehicle starts at rest on the course's start cell, facing East. A
/// state closes the loop when it is back on the start cell with at least
/// [`min_loop_moves`](SearchConfig::min_loop_moves) moves taken and
/// [`min_visited`](SearchConfig::min_visited) distinct cells covered.
///
/// States are deduplicated on position, speed, heading and coverage; the
/// move count is not part of the identity, so the first path to reach a
/// state is the only one kept. With the default heuristic the lap found is
/// the best found, not a proven minimum (see [`Heuristic`](crate::Heuristic)).
///
/// The reachable state space is exponential in the number of drivable cells,
/// since every coverage mask is a distinct state. Use
/// [`with_max_expansions`](SearchConfig::with_max_expansions) or
/// [`with_timeout`](SearchConfig::with_timeout) on large tracks.
///
/// `LapSearch` keeps its arena and move buffer between runs, so repeated
/// searches reuse their allocations.
pub struct LapSearch<'a, C: Course> {
    course: &'a C,
    config: SearchConfig,
    movegen: MoveGenerator,
    arena: Arena,
}

impl<'a, C: Course> LapSearch<'a, C> {
    /// Create a search over `course`.
    pub fn new(course: &'a C, config: SearchConfig) -> Self {
        Self {
            course,
            movegen: MoveGenerator::from_config(&config),
            config,
            arena: Arena::default(),
        }
    }

    /// Run the search to completion, exhaustion, or budget.
    pub fn run(&mut self) -> SearchOutcome {
        let started = Instant::now();
        let start = self.course.start();
        let heuristic = self.config.heuristic();

        log::debug!(
            "lap search from {start}: {} cells, min {} moves, min {} visited, max speed {}",
            self.course.cell_count(),
            self.config.min_loop_moves(),
            self.config.min_visited(),
            self.config.max_speed(),
        );

        self.arena.clear();
        let root = SearchNode {
            state: Kinematics::at_rest(start),
            moves: 0,
            coverage: self
                .course
                .cell_index(start)
                .map_or_else(Coverage::new, Coverage::single),
        };
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        if let Some(idx) = self.arena.insert(root.key(), 0, NO_PARENT) {
            open.push(NodeRef {
                idx,
                f: heuristic.estimate(&root, start, &self.config),
            });
        }

        let mut stats = SearchStats::default();

        enum Stop {
            Closed(usize),
            Exhausted,
            Budget(Limit),
        }

        let stop = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search Stop::Exhausted;
            };

            let entry = *self.arena.get(current.idx);
            let node = SearchNode {
                state: entry.key.state,
                moves: entry.moves,
                coverage: entry.key.coverage,
            };

            if self.closes_loop(&node) {
                break 'search Stop::Closed(current.idx);
            }

            if let Some(limit) = self.budget_spent(stats.expanded, started) {
                break 'search Stop::Budget(limit);
            }
            stats.expanded += 1;

            log::trace!(
                "expand {} moves={} visited={} f={}",
                node.state,
                node.moves,
                node.visited(),
                current.f
            );

            for s in self.movegen.successors(self.course, &node) {
                stats.generated += 1;
                let Some(ni) = self
                    .arena
                    .insert(s.node.key(), s.node.moves, current.idx)
                else {
                    continue;
                };
                let f = s
                    .node
                    .moves
                    .saturating_add(heuristic.estimate(&s.node, start, &self.config));
                open.push(NodeRef { idx: ni, f });
            }
            stats.peak_open = stats.peak_open.max(open.len());
        };

        stats.stored = self.arena.len();
        stats.elapsed = started.elapsed();

        match stop {
            Stop::Closed(idx) => {
                let entry = self.arena.get(idx);
                let report = LapReport {
                    moves: entry.moves,
                    visited: entry.key.coverage.count(),
                    path: self.arena.path_to(idx),
                    stats,
                };
                log::debug!(
                    "lap closed in {} moves covering {} cells ({} expanded, {} stored, {:?})",
                    report.moves,
                    report.visited,
                    stats.expanded,
                    stats.stored,
                    stats.elapsed
                );
                SearchOutcome::Found(report)
            }
            Stop::Exhausted => {
                log::debug!(
                    "no lap: open set exhausted after {} expansions ({} states)",
                    stats.expanded,
                    stats.stored
                );
                SearchOutcome::Exhausted(stats)
            }
            Stop::Budget(limit) => {
                log::warn!(
                    "lap search stopped by {limit} after {} expansions ({} states)",
                    stats.expanded,
                    stats.stored
                );
                SearchOutcome::Aborted { limit, stats }
            }
        }
    }

    /// Loop-closure test: back on start with both thresholds met.
    fn closes_loop(&self, node: &SearchNode) -> bool {
        node.state.pos == self.course.start()
            && node.moves >= self.config.min_loop_moves()
            && node.visited() >= self.config.min_visited()
    }

    fn budget_spent(&self, expanded: usize, started: Instant) -> Option<Limit> {
        if let Some(max) = self.config.max_expansions() {
            if expanded >= max {
                return Some(Limit::Expansions(max));
            }
        }
        let timeout = self.config.timeout()?;
        let check = timeout.is_zero() || expanded % CLOCK_INTERVAL == 0;
        (check && started.elapsed() >= timeout).then_some(Limit::Timeout(timeout))
    }
}

/// Search `course` for the shortest closed lap under `config`.
///
/// Shorthand for building a [`LapSearch`] and running it once.
pub fn find_lap<C: Course>(course: &C, config: &SearchConfig) -> SearchOutcome {
    LapSearch::new(course, config.clone()).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Collision;
    use crate::heuristic::Heuristic;
    use lapgrid_track::Track;
    use std::time::Duration;

    // 3×3 open interior, start in the centre.
    const SMALL: &str = "
        11111
        10001
        10301
        10001
        11111
    ";

    fn small_config() -> SearchConfig {
        SearchConfig::new()
            .with_min_loop_moves(4)
            .with_min_visited(4)
            .with_max_speed(1)
    }

    #[test]
    fn closes_a_small_loop() {
        let track = Track::parse(SMALL).unwrap();
        let outcome = find_lap(&track, &small_config());
        let report = outcome.report().expect("lap");
        assert!(report.moves >= 4);
        assert!(report.visited >= 4);
        assert_eq!(report.path.len(), report.moves as usize + 1);
        assert_eq!(report.path[0], Kinematics::at_rest(track.start()));
        assert_eq!(report.path.last().unwrap().pos, track.start());
    }

    #[test]
    fn path_steps_are_legal_moves() {
        let track = Track::parse(SMALL).unwrap();
        let config = small_config();
        let report = find_lap(&track, &config).report().cloned().unwrap();
        let mut movegen = MoveGenerator::from_config(&config);
        let mut coverage = Coverage::single(track.cell_index(track.start()).unwrap());
        for (i, pair) in report.path.windows(2).enumerate() {
            let node = SearchNode {
                state: pair[0],
                moves: i as u32,
                coverage,
            };
            let next = movegen
                .successors(&track, &node)
                .iter()
                .find(|s| s.node.state == pair[1])
                .map(|s| s.node)
                .expect("consecutive path states are one move apart");
            assert!(coverage.is_subset(&next.coverage));
            assert!(next.visited() <= next.moves + 1);
            coverage = next.coverage;
        }
        assert_eq!(coverage.count(), report.visited);
    }

    #[test]
    fn repeated_runs_agree() {
        let track = Track::parse(SMALL).unwrap();
        let mut search = LapSearch::new(&track, small_config());
        let first = search.run();
        let second = search.run();
        assert_eq!(first.moves(), second.moves());
        assert_eq!(first.report().map(|r| &r.path), second.report().map(|r| &r.path));
    }

    #[test]
    fn unreachable_coverage_exhausts() {
        let track = Track::parse(SMALL).unwrap();
        let config = small_config().with_min_visited(10);
        let outcome = find_lap(&track, &config);
        match outcome {
            SearchOutcome::Exhausted(stats) => {
                assert!(stats.expanded > 0);
                assert_eq!(stats.stored, stats.expanded);
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn zero_thresholds_close_immediately() {
        let track = Track::parse(SMALL).unwrap();
        let config = SearchConfig::new()
            .with_min_loop_moves(0)
            .with_min_visited(1);
        let report = find_lap(&track, &config).report().cloned().unwrap();
        assert_eq!(report.moves, 0);
        assert_eq!(report.path, vec![Kinematics::at_rest(track.start())]);
        assert_eq!(report.stats.expanded, 0);
    }

    #[test]
    fn uniform_cost_is_never_longer() {
        let track = Track::parse(SMALL).unwrap();
        let guided = find_lap(&track, &small_config()).moves().unwrap();
        let exhaustive = find_lap(&track, &small_config().with_heuristic(Heuristic::Zero))
            .moves()
            .unwrap();
        assert!(exhaustive <= guided);
        assert!(exhaustive >= 4);
    }

    #[test]
    fn expansion_budget_aborts() {
        let track = Track::parse(SMALL).unwrap();
        let config = small_config().with_min_visited(10).with_max_expansions(5);
        match find_lap(&track, &config) {
            SearchOutcome::Aborted { limit, stats } => {
                assert_eq!(limit, Limit::Expansions(5));
                assert_eq!(stats.expanded, 5);
            }
            other => panic!("expected abort, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_thresholds_saturate_instead_of_overflowing() {
        let track = Track::parse(SMALL).unwrap();
        let config = small_config().with_min_loop_moves(u32::MAX);
        assert!(matches!(
            find_lap(&track, &config),
            SearchOutcome::Exhausted(_)
        ));

        let config = small_config()
            .with_min_loop_moves(u32::MAX)
            .with_min_visited(u32::MAX)
            .with_max_expansions(50);
        match find_lap(&track, &config) {
            SearchOutcome::Aborted { limit, stats } => {
                assert_eq!(limit, Limit::Expansions(50));
                assert_eq!(stats.expanded, 50);
            }
            other => panic!("expected abort, got {other:?}"),
        }
    }

    #[test]
    fn zero_timeout_aborts() {
        let track = Track::parse(SMALL).unwrap();
        let config = small_config()
            .with_min_visited(10)
            .with_timeout(Duration::ZERO);
        let outcome = find_lap(&track, &config);
        assert!(matches!(
            outcome,
            SearchOutcome::Aborted {
                limit: Limit::Timeout(_),
                ..
            }
        ));
        assert_eq!(outcome.stats().expanded, 0);
    }

    #[test]
    fn swept_search_still_closes() {
        let track = Track::parse(SMALL).unwrap();
        let config = small_config().with_collision(Collision::Swept).with_max_speed(2);
        assert!(find_lap(&track, &config).is_found());
    }
}
