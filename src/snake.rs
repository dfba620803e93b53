use std::collections::VecDeque;
use std::collections::vec_deque;

use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the neighboring cell one unit toward `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - 1,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + 1,
            },
            Direction::Left => Self {
                x: self.x - 1,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + 1,
                y: self.y,
            },
        }
    }

    /// Returns the neighboring cell one unit away from `direction`.
    #[must_use]
    pub fn step_back(self, direction: Direction) -> Self {
        self.step(direction.opposite())
    }
}

/// A maximal straight stretch of body cells sharing one travel direction.
///
/// `direction` points from the run's rearmost cell toward its front cell,
/// which is also the direction the snake was moving while laying the run
/// down. `length` counts cells and is always at least one.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SegmentRun {
    pub direction: Direction,
    pub length: u32,
}

/// Run-length encoded snake body, head run first.
///
/// The body stores no cell positions. It is a deque of [`SegmentRun`]s
/// anchored at an externally owned head cell, so memory grows with the
/// number of turns rather than the number of cells. Adjacent runs never
/// share a direction; a turn always starts a new unit run at the front.
#[derive(Debug, Clone)]
pub struct Snake {
    runs: VecDeque<SegmentRun>,
}

impl Snake {
    /// Creates a single-cell body facing `facing`.
    #[must_use]
    pub fn new(facing: Direction) -> Self {
        let mut runs = VecDeque::new();
        runs.push_front(SegmentRun {
            direction: facing,
            length: 1,
        });

        Self { runs }
    }

    /// Relocates a single-cell body by replacing its one run.
    ///
    /// # Panics
    ///
    /// Panics when the body has grown past one cell; a grown body must move
    /// with [`Snake::grow`] and [`Snake::shrink`] so its shape is preserved.
    pub fn slide(&mut self, direction: Direction) {
        assert!(
            self.total_length() == 1,
            "cannot slide a grown snake body (length {})",
            self.total_length()
        );

        self.runs.clear();
        self.runs.push_front(SegmentRun {
            direction,
            length: 1,
        });
    }

    /// Extends the body one cell at the head, moving toward `direction`.
    ///
    /// Continuing straight lengthens the head run; turning prepends a new
    /// unit run. Total length always increases by exactly one.
    pub fn grow(&mut self, direction: Direction) {
        let head_run = self
            .runs
            .front_mut()
            .expect("snake body must always contain at least one run");

        if head_run.direction == direction {
            head_run.length += 1;
        } else {
            self.runs.push_front(SegmentRun {
                direction,
                length: 1,
            });
        }
    }

    /// Retracts the body one cell at the tail.
    ///
    /// A spent run means the tail corner caught up; the next run toward the
    /// head becomes the new tail run.
    ///
    /// # Panics
    ///
    /// Panics on a single-cell body, which has no tail cell to give up.
    pub fn shrink(&mut self) {
        assert!(
            self.total_length() > 1,
            "cannot shrink a single-cell snake body"
        );

        let tail_run = self
            .runs
            .back_mut()
            .expect("snake body must always contain at least one run");
        tail_run.length -= 1;

        if tail_run.length == 0 {
            let _ = self.runs.pop_back();
        }
    }

    /// Returns the direction the head run points, which is the direction of
    /// the most recent committed move.
    #[must_use]
    pub fn current_facing(&self) -> Direction {
        self.runs
            .front()
            .expect("snake body must always contain at least one run")
            .direction
    }

    /// Returns the direction the tail run points.
    #[must_use]
    pub fn tail_facing(&self) -> Direction {
        self.runs
            .back()
            .expect("snake body must always contain at least one run")
            .direction
    }

    /// Returns the body length in cells.
    #[must_use]
    pub fn total_length(&self) -> u32 {
        self.runs.iter().map(|run| run.length).sum()
    }

    /// Iterates over the runs from head run to tail run.
    pub fn runs(&self) -> impl Iterator<Item = SegmentRun> + '_ {
        self.runs.iter().copied()
    }

    /// Walks the body cells from the head cell at `head` back to the tail.
    ///
    /// Each run contributes `length` cells, stepping one cell against the
    /// run's direction after every emission; the step past a run's last
    /// cell lands exactly on the next run's first cell.
    #[must_use]
    pub fn cells(&self, head: Position) -> Cells<'_> {
        Cells {
            runs: self.runs.iter(),
            current: None,
            cursor: head,
        }
    }

    /// Returns true when any body cell covers `cell`, the head included.
    #[must_use]
    pub fn occupies(&self, head: Position, cell: Position) -> bool {
        self.cells(head).any(|body_cell| body_cell == cell)
    }
}

/// Iterator over a body's cell positions, head first.
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    runs: vec_deque::Iter<'a, SegmentRun>,
    current: Option<(Direction, u32)>,
    cursor: Position,
}

impl Iterator for Cells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        loop {
            match self.current {
                Some((direction, remaining)) if remaining > 0 => {
                    let cell = self.cursor;
                    self.cursor = self.cursor.step_back(direction);
                    self.current = Some((direction, remaining - 1));
                    return Some(cell);
                }
                _ => {
                    let run = self.runs.next()?;
                    self.current = Some((run.direction, run.length));
                }
            }
        }
    }
}
