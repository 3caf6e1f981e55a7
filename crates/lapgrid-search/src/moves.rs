use lapgrid_core::{Heading, Point};

use crate::config::{Collision, SearchConfig};
use crate::state::{Kinematics, Maneuver, SearchNode, Successor};
use crate::traits::Course;

/// Kinematic successor generation with a reusable buffer.
///
/// One move picks a speed change in `{-1, 0, +1}` (results outside
/// `0..=max_speed` are dropped, not clamped), a lateral sidestep in
/// `{-1, 0, +1}`, and, when the current speed is 0 or 1, optionally a 90°
/// clockwise turn taken before moving. The vehicle then jumps
/// `speed' * heading + sidestep` in a single step.
pub struct MoveGenerator {
    max_speed: u8,
    collision: Collision,
    buf: Vec<Successor>,
}

impl MoveGenerator {
    /// Create a generator for the given top speed and collision rule.
    pub fn new(max_speed: u8, collision: Collision) -> Self {
        Self {
            max_speed,
            collision,
            buf: Vec::with_capacity(18),
        }
    }

    /// Create a generator using the limits of `config`.
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.max_speed(), config.collision())
    }

    /// Return every legal successor of `node`, each with `moves + 1` and the
    /// landing cell added to its coverage.
    pub fn successors<C: Course>(&mut self, course: &C, node: &SearchNode) -> &[Successor] {
        self.buf.clear();
        let cur = node.state;
        let turns: &[bool] = if cur.speed <= 1 {
            &[false, true]
        } else {
            &[false]
        };

        for &turned in turns {
            let heading = if turned {
                cur.heading.turn_right()
            } else {
                cur.heading
            };
            for accel in -1i8..=1 {
                let speed = i16::from(cur.speed) + i16::from(accel);
                if speed < 0 || speed > i16::from(self.max_speed) {
                    continue;
                }
                let speed = speed as u8;
                for lateral in -1i8..=1 {
                    let Some(landing) =
                        self.landing(course, cur.pos, heading, speed, heading.lateral(lateral))
                    else {
                        continue;
                    };
                    let mut coverage = node.coverage;
                    if let Some(i) = course.cell_index(landing) {
                        coverage.insert(i);
                    }
                    self.buf.push(Successor {
                        node: SearchNode {
                            state: Kinematics {
                                pos: landing,
                                speed,
                                heading,
                            },
                            moves: node.moves + 1,
                            coverage,
                        },
                        maneuver: Maneuver {
                            accel,
                            lateral,
                            turned,
                        },
                    });
                }
            }
        }
        &self.buf
    }

    /// Landing cell of a move, or `None` if the move is illegal under the
    /// collision rule.
    fn landing<C: Course>(
        &self,
        course: &C,
        from: Point,
        heading: Heading,
        speed: u8,
        side: Point,
    ) -> Option<Point> {
        let step = heading.vector();
        let landing = from + step * i32::from(speed) + side;
        let open = |p: Point| course.in_bounds(p) && course.is_drivable(p);
        let clear = match self.collision {
            Collision::Landing => open(landing),
            Collision::Swept => {
                open(landing) && (1..i32::from(speed)).all(|k| open(from + step * k + side))
            }
        };
        clear.then_some(landing)
    }
}
