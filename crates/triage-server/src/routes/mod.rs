pub mod assessments;
pub mod diagnosis;
pub mod examinations;
pub mod health;
pub mod reference;
