pub mod graph;
pub mod rules;
pub mod symptom;
pub mod trace;
