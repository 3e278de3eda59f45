//! Model to entity mappers
//!
//! `From<Model> for Entity` for every table, except skills, whose stored
//! proficiency is re-validated on the way out.

mod blog_post;
mod category;
mod education;
mod experience;
mod project;
mod skill;
