//! Grouping of courses into the four quarter terms
//!
//! Semester courses span two quarters: "F" (fall) lands in A and B, "S"
//! (spring) in C and D.

use tracing::debug;

use crate::app::models::Course;

/// Quarter terms in calendar order
pub const TERMS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Courses grouped per quarter term, sheet order preserved within a term
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermBuckets {
    buckets: [Vec<Course>; 4],
}

/// Quarter slots a term marker occupies
fn term_slots(term: &str) -> &'static [usize] {
    match term {
        "A" => &[0],
        "B" => &[1],
        "C" => &[2],
        "D" => &[3],
        "F" => &[0, 1],
        "S" => &[2, 3],
        _ => &[],
    }
}

impl TermBuckets {
    pub fn from_courses(courses: &[Course]) -> Self {
        let mut buckets = Self::default();
        for course in courses {
            let slots = term_slots(&course.term);
            if slots.is_empty() {
                debug!(
                    "{} has term '{}' outside the quarter calendar, not bucketed",
                    course.label(),
                    course.term
                );
            }
            for slot in slots {
                buckets.buckets[*slot].push(course.clone());
            }
        }
        buckets
    }

    /// Courses of one quarter term, `None` for anything but A..D
    pub fn get(&self, term: char) -> Option<&[Course]> {
        TERMS
            .iter()
            .position(|t| *t == term)
            .map(|i| self.buckets[i].as_slice())
    }

    /// Every term with its courses, empty terms included
    pub fn iter(&self) -> impl Iterator<Item = (char, &[Course])> {
        TERMS
            .iter()
            .copied()
            .zip(self.buckets.iter().map(Vec::as_slice))
    }

    /// Terms holding at least one course
    pub fn non_empty(&self) -> impl Iterator<Item = (char, &[Course])> {
        self.iter().filter(|(_, courses)| !courses.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}
