// Scoring: mapping similarity onto the letter grade scale.

pub mod grade;
